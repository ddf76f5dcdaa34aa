use crate::model::{
    build::{Block, Build, BuildItem},
    ids::{BlockId, BuildItemId, ChampionId, ItemId, MapId},
};

use super::schema::{self, SchemaError};

/// Owns the build aggregate. Every mutator re-normalizes block positions, so
/// after any call sequence the positions of an N-block build are exactly
/// 0..N-1 in array order.
pub struct BuildStore {
    build: Build,
}

impl BuildStore {
    pub fn new() -> Self {
        Self {
            build: Build::empty(),
        }
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    pub fn add_block(&mut self, label: &str) -> BlockId {
        let id = BlockId::new();
        let position = self.build.blocks.len();
        self.build.blocks.push(Block {
            id: id.clone(),
            position,
            label: label.to_string(),
            auto_labeled: false,
            items: Vec::new(),
        });
        self.normalize_positions();
        id
    }

    /// Appends a block labeled "Empty Block {N}" (N = new 1-based index).
    /// The label keeps tracking the index until the user renames the block.
    pub fn add_empty_block(&mut self) -> BlockId {
        let id = BlockId::new();
        let position = self.build.blocks.len();
        self.build.blocks.push(Block {
            id: id.clone(),
            position,
            label: format!("Empty Block {}", position + 1),
            auto_labeled: true,
            items: Vec::new(),
        });
        self.normalize_positions();
        id
    }

    /// Deletes by id, renumbers the remaining positions and re-labels every
    /// still-auto-labeled block to its new index. Returns false when the id
    /// is unknown.
    pub fn remove_block(&mut self, id: &BlockId) -> bool {
        let Some(index) = self.build.blocks.iter().position(|b| &b.id == id) else {
            return false;
        };
        self.build.blocks.remove(index);
        self.normalize_positions();
        for (i, block) in self.build.blocks.iter_mut().enumerate() {
            if block.auto_labeled {
                block.label = format!("Empty Block {}", i + 1);
            }
        }
        true
    }

    /// Replaces a block and moves it to `new_block.position` (clamped),
    /// then renumbers. This is the reorder path: the caller supplies the
    /// desired position.
    pub fn update_block(&mut self, id: &BlockId, new_block: Block) -> bool {
        let Some(index) = self.build.blocks.iter().position(|b| &b.id == id) else {
            return false;
        };
        let target = new_block.position.min(self.build.blocks.len() - 1);
        self.build.blocks[index] = new_block;
        let moved = self.build.blocks.remove(index);
        self.build.blocks.insert(target, moved);
        self.normalize_positions();
        true
    }

    /// Renames without touching position. This freezes the label: the block
    /// stops taking part in auto re-labeling, whatever the new text is.
    pub fn update_block_type(&mut self, id: &BlockId, label: &str) -> bool {
        let Some(block) = self.build.blocks.iter_mut().find(|b| &b.id == id) else {
            return false;
        };
        block.label = label.to_string();
        block.auto_labeled = false;
        true
    }

    pub fn add_item_to_block(&mut self, block_id: &BlockId, item_id: ItemId) -> Option<BuildItemId> {
        let block = self.build.blocks.iter_mut().find(|b| &b.id == block_id)?;
        let build_item = BuildItem::new(item_id);
        let id = build_item.id.clone();
        block.items.push(build_item);
        Some(id)
    }

    pub fn remove_item_from_block(&mut self, block_id: &BlockId, item: &BuildItemId) -> bool {
        let Some(block) = self.build.blocks.iter_mut().find(|b| &b.id == block_id) else {
            return false;
        };
        let before = block.items.len();
        block.items.retain(|i| &i.id != item);
        block.items.len() != before
    }

    pub fn set_title(&mut self, title: &str) {
        self.build.title = title.to_string();
    }

    pub fn toggle_map(&mut self, map: MapId) {
        if let Some(index) = self.build.associated_maps.iter().position(|m| *m == map) {
            self.build.associated_maps.remove(index);
        } else {
            self.build.associated_maps.push(map);
        }
    }

    pub fn toggle_champion(&mut self, champion: ChampionId) {
        if let Some(index) = self
            .build
            .associated_champions
            .iter()
            .position(|c| *c == champion)
        {
            self.build.associated_champions.remove(index);
        } else {
            self.build.associated_champions.push(champion);
        }
    }

    pub fn reset(&mut self) {
        self.build = Build::empty();
    }

    /// Validates and replaces the aggregate wholesale; on any schema error
    /// the current build is left untouched.
    pub fn import(&mut self, text: &str) -> Result<(), SchemaError> {
        let build = schema::import_build(text)?;
        self.build = build;
        Ok(())
    }

    pub fn export_string(&self) -> String {
        schema::to_json_string(&self.build)
    }

    fn normalize_positions(&mut self) {
        for (i, block) in self.build.blocks.iter_mut().enumerate() {
            block.position = i;
        }
    }
}

impl Default for BuildStore {
    fn default() -> Self {
        BuildStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(store: &BuildStore) -> Vec<usize> {
        store.build().blocks.iter().map(|b| b.position).collect()
    }

    fn labels(store: &BuildStore) -> Vec<String> {
        store.build().blocks.iter().map(|b| b.label.clone()).collect()
    }

    #[test]
    fn empty_blocks_get_numbered_labels_and_contiguous_positions() {
        let mut store = BuildStore::new();
        store.add_empty_block();
        store.add_empty_block();
        store.add_empty_block();

        assert_eq!(labels(&store), vec!["Empty Block 1", "Empty Block 2", "Empty Block 3"]);
        assert_eq!(positions(&store), vec![0, 1, 2]);
    }

    #[test]
    fn removing_a_block_renumbers_and_relabels_auto_blocks() {
        let mut store = BuildStore::new();
        store.add_empty_block();
        let middle = store.add_empty_block();
        store.add_empty_block();

        assert!(store.remove_block(&middle));

        assert_eq!(labels(&store), vec!["Empty Block 1", "Empty Block 2"]);
        assert_eq!(positions(&store), vec![0, 1]);
    }

    #[test]
    fn renamed_blocks_are_frozen_during_relabeling() {
        let mut store = BuildStore::new();
        let first = store.add_empty_block();
        let second = store.add_empty_block();
        store.add_empty_block();

        store.update_block_type(&second, "Core Items");
        assert!(store.remove_block(&first));

        assert_eq!(labels(&store), vec!["Core Items", "Empty Block 2"]);
        assert_eq!(positions(&store), vec![0, 1]);
    }

    #[test]
    fn rename_to_auto_looking_text_still_freezes() {
        // The flag carries intent, not the label text.
        let mut store = BuildStore::new();
        let first = store.add_empty_block();
        let second = store.add_empty_block();

        store.update_block_type(&second, "Empty Block 2");
        assert!(store.remove_block(&first));

        assert_eq!(labels(&store), vec!["Empty Block 2"]);
        assert_eq!(positions(&store), vec![0]);
    }

    #[test]
    fn update_block_moves_to_requested_position() {
        let mut store = BuildStore::new();
        let a = store.add_block("A");
        store.add_block("B");
        store.add_block("C");

        let mut moved = store.build().blocks[0].clone();
        moved.position = 2;
        assert!(store.update_block(&a, moved));

        assert_eq!(labels(&store), vec!["B", "C", "A"]);
        assert_eq!(positions(&store), vec![0, 1, 2]);
    }

    #[test]
    fn update_block_clamps_out_of_range_positions() {
        let mut store = BuildStore::new();
        let a = store.add_block("A");
        store.add_block("B");

        let mut moved = store.build().blocks[0].clone();
        moved.position = 99;
        assert!(store.update_block(&a, moved));

        assert_eq!(labels(&store), vec!["B", "A"]);
        assert_eq!(positions(&store), vec![0, 1]);
    }

    #[test]
    fn positions_stay_contiguous_across_mixed_mutations() {
        let mut store = BuildStore::new();
        let a = store.add_empty_block();
        store.add_block("Situational");
        let c = store.add_empty_block();
        store.remove_block(&a);
        let mut moved = store
            .build()
            .blocks
            .iter()
            .find(|b| b.id == c)
            .unwrap()
            .clone();
        moved.position = 0;
        store.update_block(&c, moved);
        store.add_empty_block();

        let mut ps = positions(&store);
        ps.sort_unstable();
        assert_eq!(ps, (0..store.build().blocks.len()).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_catalog_items_get_distinct_session_ids() {
        let mut store = BuildStore::new();
        let block = store.add_empty_block();

        let first = store.add_item_to_block(&block, ItemId::from(3006)).unwrap();
        let second = store.add_item_to_block(&block, ItemId::from(3006)).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.build().blocks[0].items.len(), 2);
    }

    #[test]
    fn remove_item_from_block_by_session_id() {
        let mut store = BuildStore::new();
        let block = store.add_empty_block();
        let slot = store.add_item_to_block(&block, ItemId::from(3006)).unwrap();
        store.add_item_to_block(&block, ItemId::from(3006)).unwrap();

        assert!(store.remove_item_from_block(&block, &slot));
        assert!(!store.remove_item_from_block(&block, &slot));
        assert_eq!(store.build().blocks[0].items.len(), 1);
    }

    #[test]
    fn unknown_ids_are_rejected_without_effect() {
        let mut store = BuildStore::new();
        store.add_block("A");

        let ghost = BlockId::new();
        assert!(!store.remove_block(&ghost));
        assert!(!store.update_block_type(&ghost, "X"));
        assert!(store.add_item_to_block(&ghost, ItemId::from(1)).is_none());
        assert_eq!(labels(&store), vec!["A"]);
    }

    #[test]
    fn failed_import_leaves_state_untouched() {
        let mut store = BuildStore::new();
        store.add_block("Keep Me");

        // Missing the required `blocks` field.
        let result = store.import(r#"{"title":"x","associatedMaps":[],"associatedChampions":[]}"#);

        assert!(result.is_err());
        assert_eq!(labels(&store), vec!["Keep Me"]);
    }

    #[test]
    fn reset_restores_the_empty_aggregate() {
        let mut store = BuildStore::new();
        store.set_title("My Build");
        store.toggle_map(MapId::SUMMONERS_RIFT);
        store.toggle_champion(ChampionId::from(103));
        store.add_empty_block();

        store.reset();

        let build = store.build();
        assert!(build.title.is_empty());
        assert!(build.associated_maps.is_empty());
        assert!(build.associated_champions.is_empty());
        assert!(build.blocks.is_empty());
    }

    #[test]
    fn toggle_map_and_champion_roundtrip() {
        let mut store = BuildStore::new();
        store.toggle_map(MapId::HOWLING_ABYSS);
        assert_eq!(store.build().associated_maps, vec![MapId::HOWLING_ABYSS]);
        store.toggle_map(MapId::HOWLING_ABYSS);
        assert!(store.build().associated_maps.is_empty());

        store.toggle_champion(ChampionId::from(64));
        store.toggle_champion(ChampionId::from(64));
        assert!(store.build().associated_champions.is_empty());
    }
}
