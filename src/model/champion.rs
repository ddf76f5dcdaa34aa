use super::class::ChampionClass;
use super::ids::ChampionId;

#[derive(Debug, Clone)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    pub tags: Vec<ChampionClass>,
    pub icon: String,
    pub splash: String,
}
