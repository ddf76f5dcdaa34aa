use json::{object::Object, JsonValue};

use crate::model::{champion::Champion, class::ChampionClass};

use super::{item::parse_string_array, ParsingError};

pub fn parse_champions(json: &JsonValue) -> Result<Vec<Champion>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut champions = Vec::new();
        for champ_entry in array {
            if let JsonValue::Object(champ_obj) = &champ_entry {
                champions.push(parse_champ_obj(champ_obj)?);
            } else {
                return Err(ParsingError::InvalidType("champ entry".into()));
            }
        }
        return Ok(champions);
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_champ_obj(obj: &Object) -> Result<Champion, ParsingError> {
    let id = obj["id"].as_i32().ok_or(ParsingError::InvalidType("id".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    // Unknown tag strings are skipped, not fatal.
    let tags = parse_string_array(&obj["tags"], "tags")?
        .iter()
        .filter_map(|tag| ChampionClass::from_name(tag))
        .collect();
    let icon = obj["icon"].as_str().unwrap_or_default();
    let splash = obj["splash"].as_str().unwrap_or_default();

    Ok(Champion {
        id: id.into(),
        name: name.to_string(),
        tags,
        icon: icon.to_string(),
        splash: splash.to_string(),
    })
}
