use crate::{
    impl_text_view, styled_line, styled_span,
    model::ids::MapId,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Build Overview View
// ============================================================================

fn build_view(ctrl: &Controller) -> TextCreationResult {
    let build = ctrl.build;

    let title = if build.title.is_empty() {
        "(untitled)".to_string()
    } else {
        build.title.clone()
    };
    let maps = if build.associated_maps.is_empty() {
        "none".to_string()
    } else {
        build
            .associated_maps
            .iter()
            .map(map_name)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let champions = if build.associated_champions.is_empty() {
        "none".to_string()
    } else {
        build
            .associated_champions
            .iter()
            .map(|id| match ctrl.lookup.get_champion(*id) {
                Ok(champ) => champ.name.clone(),
                Err(_) => format!("champion {}", id),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![
        styled_line!(LIST [styled_span!("Title:     "), styled_span!("{}", title; Cyan Bold)]),
        styled_line!("Maps:      {}", maps),
        styled_line!("Champions: {}", champions),
        styled_line!(),
    ];

    if build.blocks.is_empty() {
        lines.push(styled_line!("No blocks yet. Add one from the Build menu."; DarkGray));
        return Ok(lines);
    }

    let mut blocks = build.blocks.iter().collect::<Vec<_>>();
    blocks.sort_by_key(|b| b.position);

    for block in blocks {
        let marker = if block.auto_labeled { "  (auto)" } else { "" };
        lines.push(styled_line!(LIST [
            styled_span!("[{}] ", block.position),
            styled_span!("{}", block.label; LightCyan Bold),
            styled_span!("{}", marker; DarkGray),
        ]));

        if block.items.is_empty() {
            lines.push(styled_line!("      (empty)"; DarkGray));
        }
        for (slot, item) in block.items.iter().enumerate() {
            let name = match ctrl.lookup.get_item(&item.item_id) {
                Ok(item) => item.name.clone(),
                Err(_) => format!("item {}", item.item_id),
            };
            lines.push(styled_line!("   {:>2}. {} ×{}", slot + 1, name, item.count));
        }
        lines.push(styled_line!());
    }

    Ok(lines)
}

fn map_name(map: &MapId) -> String {
    match *map {
        MapId::SUMMONERS_RIFT => "Summoner's Rift".to_string(),
        MapId::HOWLING_ABYSS => "Howling Abyss".to_string(),
        other => format!("map {}", other),
    }
}

impl_text_view!(BuildView, build_view, "Current Build");

// ============================================================================
// Build JSON View
// ============================================================================

fn build_json_view(ctrl: &Controller) -> TextCreationResult {
    let json = crate::service::schema::to_json_string(ctrl.build);

    let mut lines = vec![
        styled_line!("Exported document (session ids stripped):"; DarkGray),
        styled_line!(),
    ];
    for line in json.lines() {
        lines.push(styled_line!("{}", line));
    }

    Ok(lines)
}

impl_text_view!(BuildJsonView, build_json_view, "Build JSON");
