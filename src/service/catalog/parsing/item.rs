use json::{object::Object, JsonValue};

use crate::model::{
    class::ChampionClass,
    ids::{ItemId, MapId},
    item::{Gold, Item},
};

use super::ParsingError;

pub fn parse_items(json: &JsonValue) -> Result<Vec<Item>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut items = Vec::new();
        for item_entry in array {
            if let JsonValue::Object(item_obj) = &item_entry {
                items.push(parse_item_obj(item_obj)?);
            } else {
                return Err(ParsingError::InvalidType("item entry".into()));
            }
        }
        return Ok(items);
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_item_obj(obj: &Object) -> Result<Item, ParsingError> {
    let id = obj["id"].as_i32().ok_or(ParsingError::InvalidType("id".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let gold = parse_gold_obj(&obj["gold"])?;
    let categories = parse_string_array(&obj["categories"], "categories")?;
    let tier = obj["tier"].as_u8().ok_or(ParsingError::InvalidType("tier".into()))?;
    let mythic = obj["mythic"]
        .as_bool()
        .ok_or(ParsingError::InvalidType("mythic".into()))?;
    let in_store = obj["inStore"]
        .as_bool()
        .ok_or(ParsingError::InvalidType("inStore".into()))?;
    let maps = parse_i32_array(&obj["maps"], "maps")?;
    let builds_from = parse_i32_array(&obj["from"], "from")?;
    let builds_into = parse_i32_array(&obj["into"], "into")?;

    // Display-only fields, tolerated when absent since the catalog drifts.
    let nicknames = match &obj["nicknames"] {
        JsonValue::Null => Vec::new(),
        value => parse_string_array(value, "nicknames")?,
    };
    let classes = match &obj["classes"] {
        JsonValue::Null => Vec::new(),
        value => parse_string_array(value, "classes")?
            .iter()
            .filter_map(|name| ChampionClass::from_name(name))
            .collect(),
    };
    let icon = obj["icon"].as_str().unwrap_or_default();

    Ok(Item {
        id: id.into(),
        name: name.to_string(),
        nicknames,
        gold,
        categories,
        classes,
        tier,
        mythic,
        in_store,
        maps: maps.into_iter().map(MapId::from).collect(),
        builds_from: builds_from.into_iter().map(ItemId::from).collect(),
        builds_into: builds_into.into_iter().map(ItemId::from).collect(),
        icon: icon.to_string(),
    })
}

fn parse_gold_obj(value: &JsonValue) -> Result<Gold, ParsingError> {
    if let JsonValue::Object(obj) = value {
        let base = obj["base"].as_u32().ok_or(ParsingError::InvalidType("gold/base".into()))?;
        let total = obj["total"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("gold/total".into()))?;
        let sell = obj["sell"].as_u32().ok_or(ParsingError::InvalidType("gold/sell".into()))?;
        let purchasable = obj["purchasable"]
            .as_bool()
            .ok_or(ParsingError::InvalidType("gold/purchasable".into()))?;

        return Ok(Gold {
            base,
            purchasable,
            total,
            sell,
        });
    }

    Err(ParsingError::InvalidType("gold".into()))
}

pub(super) fn parse_string_array(value: &JsonValue, field: &str) -> Result<Vec<String>, ParsingError> {
    if let JsonValue::Array(array) = value {
        let mut strings = Vec::new();
        for entry in array {
            let s = entry
                .as_str()
                .ok_or_else(|| ParsingError::InvalidType(format!("{} entry", field)))?;
            strings.push(s.to_string());
        }
        return Ok(strings);
    }

    Err(ParsingError::InvalidType(field.into()))
}

pub(super) fn parse_i32_array(value: &JsonValue, field: &str) -> Result<Vec<i32>, ParsingError> {
    if let JsonValue::Array(array) = value {
        let mut numbers = Vec::new();
        for entry in array {
            let n = entry
                .as_i32()
                .ok_or_else(|| ParsingError::InvalidType(format!("{} entry", field)))?;
            numbers.push(n);
        }
        return Ok(numbers);
    }

    Err(ParsingError::InvalidType(field.into()))
}
