use super::class::ChampionClass;
use super::ids::{ItemId, MapId};

/// A catalog item. Fetched once and read-only afterwards; visibility under
/// the active filters is a derived annotation (see the filter engine), never
/// stored here.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub nicknames: Vec<String>,
    pub gold: Gold,
    pub categories: Vec<String>,
    pub classes: Vec<ChampionClass>,
    pub tier: u8,
    pub mythic: bool,
    pub in_store: bool,
    pub maps: Vec<MapId>,
    pub builds_from: Vec<ItemId>,
    pub builds_into: Vec<ItemId>,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gold {
    pub base: u32,
    pub purchasable: bool,
    pub total: u32,
    pub sell: u32,
}
