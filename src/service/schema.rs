use std::fmt;

use json::{object::Object, JsonValue};

use crate::model::{
    build::{Block, Build, BuildItem},
    ids::{BlockId, BuildItemId},
};

/// Serializes the build to the external document shape. Session-local ids
/// (block ids, item slot uids) are stripped; only catalog ids, counts, block
/// labels and ordering survive.
pub fn export_build(build: &Build) -> JsonValue {
    let mut blocks = build.blocks.iter().collect::<Vec<_>>();
    blocks.sort_by_key(|b| b.position);

    let block_values = blocks
        .iter()
        .map(|block| {
            let items = block
                .items
                .iter()
                .map(|item| {
                    let mut obj = Object::new();
                    obj.insert("id", item.item_id.to_string().into());
                    obj.insert("count", (item.count as i32).into());
                    JsonValue::Object(obj)
                })
                .collect::<Vec<_>>();

            let mut obj = Object::new();
            obj.insert("type", block.label.clone().into());
            obj.insert("items", JsonValue::Array(items));
            JsonValue::Object(obj)
        })
        .collect::<Vec<_>>();

    let mut root = Object::new();
    root.insert("title", build.title.clone().into());
    root.insert(
        "associatedMaps",
        JsonValue::Array(build.associated_maps.iter().map(|m| m.as_i32().into()).collect()),
    );
    root.insert(
        "associatedChampions",
        JsonValue::Array(
            build
                .associated_champions
                .iter()
                .map(|c| c.as_i32().into())
                .collect(),
        ),
    );
    root.insert("blocks", JsonValue::Array(block_values));
    JsonValue::Object(root)
}

pub fn to_json_string(build: &Build) -> String {
    export_build(build).pretty(2)
}

/// Validates an externally supplied document field by field and produces a
/// fresh build with regenerated session ids. Imported labels count as
/// user-chosen, so they never take part in auto re-labeling.
pub fn import_build(text: &str) -> Result<Build, SchemaError> {
    let doc = json::parse(text)?;
    let JsonValue::Object(root) = &doc else {
        return Err(SchemaError::InvalidType {
            field: "root".into(),
            expected: "object",
        });
    };

    let title = require_str(root, "title")?.to_string();
    let associated_maps = require_i32_array(root, "associatedMaps")?
        .into_iter()
        .map(Into::into)
        .collect();
    let associated_champions = require_i32_array(root, "associatedChampions")?
        .into_iter()
        .map(Into::into)
        .collect();

    let blocks_value = require(root, "blocks")?;
    let JsonValue::Array(block_entries) = blocks_value else {
        return Err(SchemaError::InvalidType {
            field: "blocks".into(),
            expected: "array",
        });
    };

    let mut blocks = Vec::new();
    for (index, entry) in block_entries.iter().enumerate() {
        blocks.push(parse_block(entry, index)?);
    }

    Ok(Build {
        title,
        associated_maps,
        associated_champions,
        blocks,
    })
}

fn parse_block(entry: &JsonValue, index: usize) -> Result<Block, SchemaError> {
    let JsonValue::Object(obj) = entry else {
        return Err(SchemaError::InvalidType {
            field: format!("blocks[{}]", index),
            expected: "object",
        });
    };

    let label = require_str(obj, "type").map_err(|e| e.nested(&format!("blocks[{}]", index)))?;

    let items_value = require(obj, "items").map_err(|e| e.nested(&format!("blocks[{}]", index)))?;
    let JsonValue::Array(item_entries) = items_value else {
        return Err(SchemaError::InvalidType {
            field: format!("blocks[{}]/items", index),
            expected: "array",
        });
    };

    let mut items = Vec::new();
    for (item_index, item_entry) in item_entries.iter().enumerate() {
        let field = format!("blocks[{}]/items[{}]", index, item_index);
        let JsonValue::Object(item_obj) = item_entry else {
            return Err(SchemaError::InvalidType {
                field,
                expected: "object",
            });
        };

        let id = require_str(item_obj, "id").map_err(|e| e.nested(&field))?;
        let count = require_i32(item_obj, "count").map_err(|e| e.nested(&field))?;
        let count = u32::try_from(count).map_err(|_| SchemaError::InvalidType {
            field: format!("{}/count", field),
            expected: "non-negative int32",
        })?;
        // An incoming `uid` is ignored; session ids are always regenerated.

        items.push(BuildItem {
            id: BuildItemId::new(),
            item_id: id.into(),
            count,
        });
    }

    Ok(Block {
        id: BlockId::new(),
        position: index,
        label: label.to_string(),
        auto_labeled: false,
        items,
    })
}

fn require<'a>(obj: &'a Object, field: &str) -> Result<&'a JsonValue, SchemaError> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Err(SchemaError::MissingField(field.to_string())),
        Some(value) => Ok(value),
    }
}

fn require_str<'a>(obj: &'a Object, field: &str) -> Result<&'a str, SchemaError> {
    require(obj, field)?.as_str().ok_or_else(|| SchemaError::InvalidType {
        field: field.to_string(),
        expected: "string",
    })
}

fn require_i32(obj: &Object, field: &str) -> Result<i32, SchemaError> {
    require(obj, field)?.as_i32().ok_or_else(|| SchemaError::InvalidType {
        field: field.to_string(),
        expected: "int32",
    })
}

fn require_i32_array(obj: &Object, field: &str) -> Result<Vec<i32>, SchemaError> {
    let value = require(obj, field)?;
    let JsonValue::Array(entries) = value else {
        return Err(SchemaError::InvalidType {
            field: field.to_string(),
            expected: "array",
        });
    };

    let mut numbers = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let n = entry.as_i32().ok_or_else(|| SchemaError::InvalidType {
            field: format!("{}[{}]", field, index),
            expected: "int32",
        })?;
        numbers.push(n);
    }
    Ok(numbers)
}

#[derive(Debug)]
pub enum SchemaError {
    Malformed(json::Error),
    MissingField(String),
    InvalidType { field: String, expected: &'static str },
}

impl SchemaError {
    fn nested(self, prefix: &str) -> SchemaError {
        match self {
            SchemaError::MissingField(field) => SchemaError::MissingField(format!("{}/{}", prefix, field)),
            SchemaError::InvalidType { field, expected } => SchemaError::InvalidType {
                field: format!("{}/{}", prefix, field),
                expected,
            },
            other => other,
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchemaError::Malformed(err) => write!(f, "Malformed JSON: {}", err),
            SchemaError::MissingField(field) => write!(f, "Missing required field '{}'", field),
            SchemaError::InvalidType { field, expected } => {
                write!(f, "Field '{}' must be {}", field, expected)
            }
        }
    }
}

impl From<json::Error> for SchemaError {
    fn from(error: json::Error) -> Self {
        SchemaError::Malformed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::{ChampionId, MapId};

    const VALID_DOC: &str = r#"{
        "title": "AP Mid",
        "associatedMaps": [11, 12],
        "associatedChampions": [103],
        "blocks": [
            {
                "type": "Starting Items",
                "items": [
                    {"id": "1056", "count": 1},
                    {"id": "2003", "count": 2}
                ]
            },
            {
                "type": "Core",
                "items": [
                    {"id": "3089", "count": 1}
                ]
            }
        ]
    }"#;

    #[test]
    fn import_builds_the_aggregate_with_positions_and_fresh_ids() {
        let build = import_build(VALID_DOC).unwrap();

        assert_eq!(build.title, "AP Mid");
        assert_eq!(build.associated_maps, vec![MapId::from(11), MapId::from(12)]);
        assert_eq!(build.associated_champions, vec![ChampionId::from(103)]);
        assert_eq!(build.blocks.len(), 2);
        assert_eq!(build.blocks[0].position, 0);
        assert_eq!(build.blocks[1].position, 1);
        assert_eq!(build.blocks[0].label, "Starting Items");
        assert!(!build.blocks[0].auto_labeled);
        assert_eq!(build.blocks[0].items[1].item_id.as_str(), "2003");
        assert_eq!(build.blocks[0].items[1].count, 2);
        assert_ne!(build.blocks[0].id, build.blocks[1].id);
    }

    #[test]
    fn export_import_round_trips_modulo_uids() {
        let build = import_build(VALID_DOC).unwrap();
        let exported = export_build(&build);
        let original = json::parse(VALID_DOC).unwrap();
        assert_eq!(exported, original);
    }

    #[test]
    fn incoming_uids_are_ignored_and_stripped_on_export() {
        let doc = r#"{
            "title": "",
            "associatedMaps": [],
            "associatedChampions": [],
            "blocks": [
                {"type": "Core", "items": [{"id": "3089", "count": 1, "uid": "abc-123"}]}
            ]
        }"#;

        let build = import_build(doc).unwrap();
        let exported = export_build(&build);
        assert!(!exported.dump().contains("uid"));
        assert!(!exported.dump().contains("abc-123"));
    }

    #[test]
    fn missing_blocks_field_is_rejected() {
        let doc = r#"{"title": "x", "associatedMaps": [], "associatedChampions": []}"#;
        match import_build(doc) {
            Err(SchemaError::MissingField(field)) => assert_eq!(field, "blocks"),
            other => panic!("expected missing-field error, got {:?}", other),
        }
    }

    #[test]
    fn mistyped_fields_are_rejected_with_their_path() {
        let doc = r#"{
            "title": "x",
            "associatedMaps": ["eleven"],
            "associatedChampions": [],
            "blocks": []
        }"#;
        match import_build(doc) {
            Err(SchemaError::InvalidType { field, .. }) => assert_eq!(field, "associatedMaps[0]"),
            other => panic!("expected invalid-type error, got {:?}", other),
        }

        let doc = r#"{
            "title": "x",
            "associatedMaps": [],
            "associatedChampions": [],
            "blocks": [{"type": "Core", "items": [{"id": 3089, "count": 1}]}]
        }"#;
        match import_build(doc) {
            Err(SchemaError::InvalidType { field, .. }) => {
                assert_eq!(field, "blocks[0]/items[0]/id")
            }
            other => panic!("expected invalid-type error, got {:?}", other),
        }
    }

    #[test]
    fn negative_counts_are_rejected() {
        let doc = r#"{
            "title": "x",
            "associatedMaps": [],
            "associatedChampions": [],
            "blocks": [{"type": "Core", "items": [{"id": "3089", "count": -1}]}]
        }"#;
        assert!(import_build(doc).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(import_build("not json {"), Err(SchemaError::Malformed(_))));
    }

    #[test]
    fn export_orders_blocks_by_position() {
        let mut build = import_build(VALID_DOC).unwrap();
        // Scramble array order while keeping positions intact.
        build.blocks.swap(0, 1);

        let exported = export_build(&build);
        assert_eq!(exported["blocks"][0]["type"], "Starting Items");
        assert_eq!(exported["blocks"][1]["type"], "Core");
    }
}
