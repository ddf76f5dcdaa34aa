use std::cmp::Ordering;

use crate::model::{champion::Champion, class::ChampionClass, item::Item};

/// Category marker that lets a whole filter group pass unconditionally.
pub const WILDCARD_CATEGORY: &str = "All";

/// One active category filter group. Categories inside a group are ORed;
/// multiple active groups are ANDed against each other.
#[derive(Debug, Clone, Default)]
pub struct CategoryGroup {
    pub categories: Vec<String>,
}

impl CategoryGroup {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    pub fn is_wildcard(&self) -> bool {
        self.categories.iter().any(|c| c == WILDCARD_CATEGORY)
    }
}

/// The fixed set of filter kinds, evaluated as an explicit conjunction.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub category_groups: Vec<CategoryGroup>,
    /// `None` is the All sentinel.
    pub champion_class: Option<ChampionClass>,
    pub search: String,
    pub store_only: bool,
}

impl FilterSelection {
    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }

    pub fn is_empty(&self) -> bool {
        self.category_groups.is_empty()
            && self.champion_class.is_none()
            && self.search.trim().is_empty()
            && !self.store_only
    }

    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }

        let mut parts = Vec::new();
        for group in &self.category_groups {
            parts.push(format!("[{}]", group.categories.join("|")));
        }
        if let Some(class) = self.champion_class {
            parts.push(format!("class={}", class));
        }
        if !self.search.trim().is_empty() {
            parts.push(format!("search=\"{}\"", self.search.trim()));
        }
        if self.store_only {
            parts.push("store-only".to_string());
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&mut self) {
        *self = match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "gold ascending",
            SortDirection::Descending => "gold descending",
        }
    }
}

/// A catalog entry with its derived visibility flag. Entries are never
/// dropped by filtering, only flagged, so list identity stays stable.
#[derive(Debug)]
pub struct VisibleItem<'a> {
    pub item: &'a Item,
    pub visible: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RarityCount {
    pub basic: usize,
    pub epic: usize,
    pub legendary: usize,
    pub mythic: usize,
}

#[derive(Debug)]
pub struct MarkedCatalog<'a> {
    pub items: Vec<VisibleItem<'a>>,
    pub count: usize,
    pub rarities: RarityCount,
}

/// True iff, for every active group, the item has at least one category in
/// that group or the group holds the wildcard. No active groups passes
/// everything.
pub fn includes_category(item: &Item, groups: &[CategoryGroup]) -> bool {
    groups.iter().all(|group| {
        group.is_wildcard() || item.categories.iter().any(|cat| group.categories.contains(cat))
    })
}

pub fn is_from_champion_class(item: &Item, class: Option<ChampionClass>) -> bool {
    match class {
        None => true,
        Some(class) => item.classes.contains(&class),
    }
}

/// Fuzzy match of the query against the item name and its nicknames. An
/// empty query always matches.
pub fn matches_search_query(item: &Item, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    fuzzy_match(&item.name.to_lowercase(), &query)
        || item.nicknames.iter().any(|nick| fuzzy_match(&nick.to_lowercase(), &query))
}

/// Purchasable right now: flagged for the store and playable on at least one
/// of the two supported maps.
pub fn is_in_store(item: &Item) -> bool {
    item.in_store && item.maps.iter().any(|map| map.is_supported())
}

/// Explicit conjunction of the four filter kinds.
pub fn passes(item: &Item, selection: &FilterSelection) -> bool {
    includes_category(item, &selection.category_groups)
        && is_from_champion_class(item, selection.champion_class)
        && matches_search_query(item, &selection.search)
        && (!selection.store_only || is_in_store(item))
}

/// Annotates every catalog entry with its visibility under `selection` and
/// sorts the full list (hidden entries included) by total gold cost, ties
/// broken by name. |output| == |input| always.
pub fn mark_items_as_visible<'a>(
    catalog: &'a [Item],
    selection: &FilterSelection,
    sort: SortDirection,
) -> MarkedCatalog<'a> {
    let mut items = catalog
        .iter()
        .map(|item| VisibleItem {
            item,
            visible: passes(item, selection),
        })
        .collect::<Vec<_>>();

    items.sort_by(|a, b| {
        let by_gold = match sort {
            SortDirection::Ascending => a.item.gold.total.cmp(&b.item.gold.total),
            SortDirection::Descending => b.item.gold.total.cmp(&a.item.gold.total),
        };
        by_gold.then_with(|| a.item.name.cmp(&b.item.name))
    });

    let count = items.iter().filter(|i| i.visible).count();
    let mut rarities = RarityCount::default();
    for entry in items.iter().filter(|i| i.visible) {
        if entry.item.mythic {
            rarities.mythic += 1;
        } else {
            match entry.item.tier {
                0 | 1 => rarities.basic += 1,
                2 => rarities.epic += 1,
                _ => rarities.legendary += 1,
            }
        }
    }

    MarkedCatalog {
        items,
        count,
        rarities,
    }
}

/// Champion-side filtering for the champion catalog: class tag plus fuzzy
/// name match, same sentinels as the item predicates.
pub fn champion_matches(champ: &Champion, selection: &FilterSelection) -> bool {
    let class_ok = match selection.champion_class {
        None => true,
        Some(class) => champ.tags.contains(&class),
    };

    let query = selection.search.trim().to_lowercase();
    class_ok && (query.is_empty() || fuzzy_match(&champ.name.to_lowercase(), &query))
}

#[derive(Debug)]
pub struct RankedItem<'a> {
    pub item: &'a Item,
    pub score: i32,
}

/// Ranked top-N search over names and nicknames for the search box. The
/// scorer is a plain subsequence walk with prefix/substring bonuses; nickname
/// hits rank below equivalent name hits.
pub fn search_ranked<'a>(catalog: &'a [Item], query: &str, limit: usize) -> Vec<RankedItem<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut ranked = catalog
        .iter()
        .filter_map(|item| {
            let name_score = fuzzy_score(&item.name.to_lowercase(), &query);
            let nick_score = item
                .nicknames
                .iter()
                .filter_map(|nick| fuzzy_score(&nick.to_lowercase(), &query))
                .max()
                .map(|s| s - 50);
            name_score
                .max(nick_score)
                .map(|score| RankedItem { item, score })
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| match b.score.cmp(&a.score) {
        Ordering::Equal => a.item.name.cmp(&b.item.name),
        other => other,
    });
    ranked.truncate(limit);
    ranked
}

/// True iff all characters of `needle` occur in `haystack` in order.
fn fuzzy_match(haystack: &str, needle: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|nc| chars.any(|hc| hc == nc))
}

/// Both inputs lowercased by the caller. Higher is better, `None` is a miss.
fn fuzzy_score(haystack: &str, needle: &str) -> Option<i32> {
    if haystack == needle {
        return Some(1000);
    }
    if haystack.starts_with(needle) {
        return Some(800 - haystack.len() as i32);
    }
    if let Some(pos) = haystack.find(needle) {
        return Some(500 - pos as i32 - haystack.len() as i32);
    }
    if fuzzy_match(haystack, needle) {
        return Some(100 - haystack.len() as i32);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ids::MapId, item::Gold};

    fn test_item(id: i32, name: &str, gold: u32, categories: &[&str]) -> Item {
        Item {
            id: id.into(),
            name: name.to_string(),
            nicknames: Vec::new(),
            gold: Gold {
                base: gold,
                purchasable: true,
                total: gold,
                sell: gold / 2,
            },
            categories: categories.iter().map(|c| c.to_string()).collect(),
            classes: vec![ChampionClass::Fighter],
            tier: 1,
            mythic: false,
            in_store: true,
            maps: vec![MapId::SUMMONERS_RIFT],
            builds_from: Vec::new(),
            builds_into: Vec::new(),
            icon: String::new(),
        }
    }

    fn group(categories: &[&str]) -> CategoryGroup {
        CategoryGroup::new(categories.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn includes_category_with_no_groups_passes_everything() {
        let item = test_item(1, "Cloth Armor", 300, &["Armor"]);
        assert!(includes_category(&item, &[]));
    }

    #[test]
    fn includes_category_ands_groups_and_ors_within_a_group() {
        let item = test_item(1, "Sunfire Aegis", 2700, &["Armor", "Health"]);

        assert!(includes_category(&item, &[group(&["Armor"])]));
        assert!(includes_category(&item, &[group(&["Armor"]), group(&["Health"])]));
        assert!(includes_category(&item, &[group(&["Mana", "Health"])]));
        assert!(!includes_category(&item, &[group(&["Armor"]), group(&["Mana"])]));
        assert!(!includes_category(&item, &[group(&["Mana"])]));
    }

    #[test]
    fn includes_category_wildcard_group_always_passes() {
        let item = test_item(1, "Cloth Armor", 300, &["Armor"]);
        assert!(includes_category(&item, &[group(&[WILDCARD_CATEGORY])]));
        assert!(includes_category(&item, &[group(&["Mana", WILDCARD_CATEGORY])]));
        assert!(!includes_category(
            &item,
            &[group(&[WILDCARD_CATEGORY]), group(&["Mana"])]
        ));
    }

    #[test]
    fn champion_class_sentinel_passes_everything() {
        let item = test_item(1, "Cloth Armor", 300, &["Armor"]);
        assert!(is_from_champion_class(&item, None));
        assert!(is_from_champion_class(&item, Some(ChampionClass::Fighter)));
        assert!(!is_from_champion_class(&item, Some(ChampionClass::Mage)));
    }

    #[test]
    fn search_matches_names_and_nicknames() {
        let mut item = test_item(1, "Blade of the Ruined King", 3200, &["Damage"]);
        item.nicknames.push("botrk".to_string());

        assert!(matches_search_query(&item, ""));
        assert!(matches_search_query(&item, "  "));
        assert!(matches_search_query(&item, "blade"));
        assert!(matches_search_query(&item, "ruined"));
        assert!(matches_search_query(&item, "BOTRK"));
        // Subsequence, not substring.
        assert!(matches_search_query(&item, "bork"));
        assert!(!matches_search_query(&item, "zhonya"));
    }

    #[test]
    fn in_store_requires_flag_and_supported_map() {
        let mut item = test_item(1, "Cloth Armor", 300, &["Armor"]);
        assert!(is_in_store(&item));

        item.in_store = false;
        assert!(!is_in_store(&item));

        item.in_store = true;
        item.maps = vec![MapId::from(30)];
        assert!(!is_in_store(&item));

        item.maps = vec![MapId::from(30), MapId::HOWLING_ABYSS];
        assert!(is_in_store(&item));
    }

    #[test]
    fn mark_items_preserves_cardinality_and_flags_hidden() {
        // Scenario from the drawing board: A(10g Armor), B(30g Health),
        // C(20g Armor), Armor filter, ascending gold.
        let catalog = vec![
            test_item(1, "ItemA", 10, &["Armor"]),
            test_item(2, "ItemB", 30, &["Health"]),
            test_item(3, "ItemC", 20, &["Armor"]),
        ];
        let selection = FilterSelection {
            category_groups: vec![group(&["Armor"])],
            ..Default::default()
        };

        let marked = mark_items_as_visible(&catalog, &selection, SortDirection::Ascending);

        assert_eq!(marked.items.len(), catalog.len());
        assert_eq!(marked.count, 2);
        let visible = marked
            .items
            .iter()
            .filter(|i| i.visible)
            .map(|i| i.item.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(visible, vec!["ItemA", "ItemC"]);
        let hidden = marked.items.iter().find(|i| !i.visible).unwrap();
        assert_eq!(hidden.item.name, "ItemB");

        // The visible subset equals the independently filtered subset.
        let independent = catalog
            .iter()
            .filter(|i| passes(i, &selection))
            .map(|i| i.id.clone())
            .collect::<Vec<_>>();
        let mut from_marked = marked
            .items
            .iter()
            .filter(|i| i.visible)
            .map(|i| i.item.id.clone())
            .collect::<Vec<_>>();
        from_marked.sort_by_key(|id| id.to_string());
        let mut independent = independent;
        independent.sort_by_key(|id| id.to_string());
        assert_eq!(from_marked, independent);
    }

    #[test]
    fn mark_items_sorts_hidden_entries_too() {
        let catalog = vec![
            test_item(1, "ItemA", 10, &["Armor"]),
            test_item(2, "ItemB", 30, &["Health"]),
            test_item(3, "ItemC", 20, &["Armor"]),
        ];
        let selection = FilterSelection {
            category_groups: vec![group(&["Armor"])],
            ..Default::default()
        };

        let marked = mark_items_as_visible(&catalog, &selection, SortDirection::Descending);
        let order = marked.items.iter().map(|i| i.item.name.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["ItemB", "ItemC", "ItemA"]);
    }

    #[test]
    fn mark_items_is_idempotent() {
        let catalog = vec![
            test_item(1, "ItemA", 10, &["Armor"]),
            test_item(2, "ItemB", 30, &["Health"]),
            test_item(3, "ItemC", 20, &["Armor"]),
        ];
        let selection = FilterSelection {
            category_groups: vec![group(&["Armor"])],
            store_only: true,
            ..Default::default()
        };

        let first = mark_items_as_visible(&catalog, &selection, SortDirection::Ascending);
        let second = mark_items_as_visible(&catalog, &selection, SortDirection::Ascending);

        let a = first.items.iter().map(|i| (i.item.id.clone(), i.visible)).collect::<Vec<_>>();
        let b = second.items.iter().map(|i| (i.item.id.clone(), i.visible)).collect::<Vec<_>>();
        assert_eq!(a, b);
        assert_eq!(first.count, second.count);
        assert_eq!(first.rarities, second.rarities);
    }

    #[test]
    fn empty_catalog_degrades_to_empty_sets() {
        let selection = FilterSelection::default();
        let marked = mark_items_as_visible(&[], &selection, SortDirection::Ascending);
        assert!(marked.items.is_empty());
        assert_eq!(marked.count, 0);
        assert!(search_ranked(&[], "sword", 10).is_empty());
    }

    #[test]
    fn rarity_counts_follow_tier_and_mythic_flag() {
        let mut basic = test_item(1, "Long Sword", 350, &["Damage"]);
        basic.tier = 1;
        let mut epic = test_item(2, "Phage", 1100, &["Damage"]);
        epic.tier = 2;
        let mut legendary = test_item(3, "Black Cleaver", 3100, &["Damage"]);
        legendary.tier = 3;
        let mut mythic = test_item(4, "Eclipse", 3200, &["Damage"]);
        mythic.tier = 3;
        mythic.mythic = true;

        let catalog = vec![basic, epic, legendary, mythic];
        let marked = mark_items_as_visible(&catalog, &FilterSelection::default(), SortDirection::Ascending);

        assert_eq!(
            marked.rarities,
            RarityCount {
                basic: 1,
                epic: 1,
                legendary: 1,
                mythic: 1,
            }
        );
    }

    #[test]
    fn ranked_search_prefers_name_prefixes_over_nickname_hits() {
        let mut sword = test_item(1, "Infinity Edge", 3400, &["Damage"]);
        sword.nicknames.push("ie".to_string());
        let ionian = test_item(2, "Ionian Boots of Lucidity", 950, &["Boots"]);
        let catalog = vec![sword, ionian];

        let ranked = search_ranked(&catalog, "io", 5);
        assert_eq!(ranked[0].item.name, "Ionian Boots of Lucidity");

        let ranked = search_ranked(&catalog, "infinity", 5);
        assert_eq!(ranked[0].item.name, "Infinity Edge");

        assert!(search_ranked(&catalog, "", 5).is_empty());
        assert_eq!(search_ranked(&catalog, "i", 1).len(), 1);
    }
}
