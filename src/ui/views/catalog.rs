use ratatui::text::Line;

use crate::{
    impl_text_view, styled_line, styled_span,
    model::item::Item,
    service::filter::{champion_matches, mark_items_as_visible, search_ranked, VisibleItem},
    ui::{Controller, RenderContext, TextCreationResult, ViewResult},
};

use super::{strip_styling, RenderableView};

// ============================================================================
// Item Catalog View
// ============================================================================

fn item_catalog_view(ctrl: &Controller) -> TextCreationResult {
    let items = ctrl.manager.get_items()?;
    let marked = mark_items_as_visible(items, ctrl.filters, ctrl.sort);

    let mut lines = vec![
        styled_line!("Filters: {}    Sort: {}", ctrl.filters.describe(), ctrl.sort.label()),
        styled_line!(),
    ];

    for entry in &marked.items {
        lines.push(item_line(entry));
    }

    lines.push(styled_line!());
    lines.push(styled_line!(
        "{} of {} item(s) visible | basic {}, epic {}, legendary {}, mythic {}",
        marked.count,
        marked.items.len(),
        marked.rarities.basic,
        marked.rarities.epic,
        marked.rarities.legendary,
        marked.rarities.mythic;
        Cyan
    ));

    Ok(lines)
}

fn item_line(entry: &VisibleItem) -> Line<'static> {
    let name = format!("{:<40}", entry.item.name);
    let gold = entry.item.gold.total;

    if !entry.visible {
        return styled_line!("      {} {:>5}g  (hidden)", name, gold; DarkGray);
    }

    if entry.item.mythic {
        styled_line!("  • {} {:>5}g", name, gold; Magenta Bold)
    } else if entry.item.tier >= 3 {
        styled_line!("  • {} {:>5}g", name, gold; Yellow)
    } else {
        styled_line!("  • {} {:>5}g", name, gold)
    }
}

impl_text_view!(ItemCatalogView, item_catalog_view, "Item Catalog");

// ============================================================================
// Champion Catalog View
// ============================================================================

fn champion_catalog_view(ctrl: &Controller) -> TextCreationResult {
    let champions = ctrl.manager.get_champions()?;
    let matching = champions
        .iter()
        .filter(|c| champion_matches(c, ctrl.filters))
        .collect::<Vec<_>>();

    let mut lines = vec![
        styled_line!("Filters: {}", ctrl.filters.describe()),
        styled_line!(),
    ];

    for champ in &matching {
        let tags = champ
            .tags
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(styled_line!(LIST [
            styled_span!("  • {:<20}", champ.name),
            styled_span!("{}", tags; DarkGray),
        ]));
    }

    lines.push(styled_line!());
    lines.push(styled_line!("{} of {} champion(s) shown", matching.len(), champions.len(); Cyan));

    Ok(lines)
}

impl_text_view!(ChampionCatalogView, champion_catalog_view, "Champion Catalog");

// ============================================================================
// Ranked Search Results View
// ============================================================================

const SEARCH_RESULT_LIMIT: usize = 15;

pub struct SearchResultsView {
    title: String,
    lines: Vec<Line<'static>>,
}

impl SearchResultsView {
    pub fn new(items: &[Item], query: &str) -> Self {
        let ranked = search_ranked(items, query, SEARCH_RESULT_LIMIT);

        let mut lines = Vec::new();
        if ranked.is_empty() {
            lines.push(styled_line!("No items match \"{}\".", query.trim()));
        } else {
            for (i, hit) in ranked.iter().enumerate() {
                lines.push(styled_line!(LIST [
                    styled_span!("  {:>2}. {:<40}", i + 1, hit.item.name),
                    styled_span!("{:>5}g  ", hit.item.gold.total),
                    styled_span!("(id {})", hit.item.id; DarkGray),
                ]));
            }
            lines.push(styled_line!());
            lines.push(styled_line!("{} result(s)", ranked.len(); Cyan));
        }

        Self {
            title: format!("Search: {}", query.trim()),
            lines,
        }
    }
}

impl RenderableView for SearchResultsView {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, rc: RenderContext) -> ViewResult {
        let text = if rc.plain {
            strip_styling(&self.lines)
        } else {
            self.lines.clone()
        };

        let paragraph = ratatui::widgets::Paragraph::new(text)
            .block(rc.block)
            .wrap(ratatui::widgets::Wrap { trim: false })
            .scroll((rc.scroll_offset, 0));

        rc.frame.render_widget(paragraph, rc.area);
        Ok(())
    }
}
