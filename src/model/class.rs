use std::fmt::Display;

/// The six champion classes items and champions are tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChampionClass {
    Assassin,
    Fighter,
    Mage,
    Marksman,
    Support,
    Tank,
}

impl ChampionClass {
    pub const ALL: [ChampionClass; 6] = [
        ChampionClass::Assassin,
        ChampionClass::Fighter,
        ChampionClass::Mage,
        ChampionClass::Marksman,
        ChampionClass::Support,
        ChampionClass::Tank,
    ];

    pub fn from_name(name: &str) -> Option<ChampionClass> {
        match name.trim().to_lowercase().as_str() {
            "assassin" => Some(ChampionClass::Assassin),
            "fighter" => Some(ChampionClass::Fighter),
            "mage" => Some(ChampionClass::Mage),
            "marksman" => Some(ChampionClass::Marksman),
            "support" => Some(ChampionClass::Support),
            "tank" => Some(ChampionClass::Tank),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChampionClass::Assassin => "Assassin",
            ChampionClass::Fighter => "Fighter",
            ChampionClass::Mage => "Mage",
            ChampionClass::Marksman => "Marksman",
            ChampionClass::Support => "Support",
            ChampionClass::Tank => "Tank",
        }
    }
}

impl Display for ChampionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
