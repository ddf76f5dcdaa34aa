use super::ids::{BlockId, BuildItemId, ChampionId, ItemId, MapId};

/// Root aggregate of user work. Created empty, mutated through the build
/// store, replaced wholesale on import or reset.
#[derive(Debug, Clone)]
pub struct Build {
    pub title: String,
    pub associated_maps: Vec<MapId>,
    pub associated_champions: Vec<ChampionId>,
    pub blocks: Vec<Block>,
}

/// A named section of the build holding an ordered list of item slots.
///
/// `position` is kept contiguous 0..N-1 matching array order and renumbered
/// on every add/remove/reorder. `auto_labeled` marks blocks whose label still
/// tracks their index ("Empty Block {N}"); it drops to false the first time
/// the user renames the block and never comes back.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    pub position: usize,
    pub label: String,
    pub auto_labeled: bool,
    pub items: Vec<BuildItem>,
}

#[derive(Debug, Clone)]
pub struct BuildItem {
    pub id: BuildItemId,
    pub item_id: ItemId,
    pub count: u32,
}

impl Build {
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            associated_maps: Vec::new(),
            associated_champions: Vec::new(),
            blocks: Vec::new(),
        }
    }
}

impl BuildItem {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            id: BuildItemId::new(),
            item_id,
            count: 1,
        }
    }
}
