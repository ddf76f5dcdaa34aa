use std::fmt::Display;

use uuid::Uuid;

/// Catalog item id, stringified as in the external build schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChampionId(i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapId(i32);

/// Session-local block identity, never exported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

/// Session-local identity of an item slot inside a block. Distinct from the
/// catalog id, since a build may hold the same catalog item more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildItemId(Uuid);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl MapId {
    pub const SUMMONERS_RIFT: MapId = MapId(11);
    pub const HOWLING_ABYSS: MapId = MapId(12);

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    pub fn is_supported(&self) -> bool {
        *self == MapId::SUMMONERS_RIFT || *self == MapId::HOWLING_ABYSS
    }
}

impl ChampionId {
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl BlockId {
    pub fn new() -> Self {
        BlockId(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        BlockId::new()
    }
}

impl BuildItemId {
    pub fn new() -> Self {
        BuildItemId(Uuid::new_v4())
    }
}

impl Default for BuildItemId {
    fn default() -> Self {
        BuildItemId::new()
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<i32> for ChampionId {
    fn from(value: i32) -> Self {
        ChampionId(value)
    }
}

impl From<i32> for MapId {
    fn from(value: i32) -> Self {
        MapId(value)
    }
}
