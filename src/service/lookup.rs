use std::{collections::HashMap, fmt};

use crate::model::{
    champion::Champion,
    ids::{ChampionId, ItemId},
    item::Item,
};

pub struct LookupService<'a> {
    items: HashMap<ItemId, &'a Item>,
    champions: HashMap<ChampionId, &'a Champion>,
}

impl<'a> LookupService<'a> {
    pub fn new(items: &'a [Item], champions: &'a [Champion]) -> Self {
        Self {
            items: items.iter().map(|i| (i.id.clone(), i)).collect(),
            champions: champions.iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn get_item(&self, id: &ItemId) -> Result<&'a Item, IdNotFoundError> {
        match self.items.get(id) {
            Some(item) => Ok(*item),
            None => Err(IdNotFoundError::Item(id.clone())),
        }
    }

    pub fn get_champion(&self, id: ChampionId) -> Result<&'a Champion, IdNotFoundError> {
        match self.champions.get(&id) {
            Some(champ) => Ok(*champ),
            None => Err(IdNotFoundError::Champion(id)),
        }
    }
}

#[derive(Debug)]
pub enum IdNotFoundError {
    Item(ItemId),
    Champion(ChampionId),
}

impl fmt::Display for IdNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdNotFoundError::Item(id) => write!(f, "Item ID not found: {}", id),
            IdNotFoundError::Champion(id) => write!(f, "Champion ID not found: {}", id),
        }
    }
}
