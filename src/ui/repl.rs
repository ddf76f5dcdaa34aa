use std::{fs, io::stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use crate::{
    model::{champion::Champion, class::ChampionClass, ids::MapId, item::Item},
    service::{
        build_store::BuildStore,
        data_manager::DataManager,
        filter::{search_ranked, CategoryGroup, FilterSelection, SortDirection},
        lookup::LookupService,
        settings::Settings,
    },
    ui::{views::*, Controller, RenderContext},
};

use super::ReplError;

type ViewFactory = fn(&Controller) -> Box<dyn RenderableView>;

enum AppState {
    Menu,
    ViewingOutput(Box<dyn RenderableView>),
    Prompt(PromptKind, String),
}

#[derive(Clone, Copy)]
enum PromptKind {
    SearchItems,
    AddCategoryGroup,
    SetClassFilter,
    SetSearchFilter,
    SetBuildTitle,
    AddNamedBlock,
    RenameBlock,
    MoveBlock,
    RemoveBlock,
    ConfirmRemoveBlock(usize),
    AddItemToBlock,
    RemoveItemFromBlock,
    AssociateChampion,
    ImportFromFile,
    ExportToFile,
    ConfirmReset,
}

impl PromptKind {
    fn label(&self) -> String {
        match self {
            PromptKind::SearchItems => "Search query".to_string(),
            PromptKind::AddCategoryGroup => {
                "Category group (comma-separated; empty clears; 'All' is the wildcard)".to_string()
            }
            PromptKind::SetClassFilter => "Champion class (empty for all)".to_string(),
            PromptKind::SetSearchFilter => "Search filter text (empty clears)".to_string(),
            PromptKind::SetBuildTitle => "Build title".to_string(),
            PromptKind::AddNamedBlock => "Block label".to_string(),
            PromptKind::RenameBlock => "Rename: <position> <new label>".to_string(),
            PromptKind::MoveBlock => "Move: <from position> <to position>".to_string(),
            PromptKind::RemoveBlock => "Block position to remove".to_string(),
            PromptKind::ConfirmRemoveBlock(pos) => format!("Remove block {}? (y/N)", pos),
            PromptKind::AddItemToBlock => "Add item: <block position> <item id or name>".to_string(),
            PromptKind::RemoveItemFromBlock => "Remove item: <block position> <slot number>".to_string(),
            PromptKind::AssociateChampion => "Champion name to toggle".to_string(),
            PromptKind::ImportFromFile => "Path to build JSON file".to_string(),
            PromptKind::ExportToFile => "Export path (empty for default)".to_string(),
            PromptKind::ConfirmReset => "Reset build? (y/N)".to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum CommandKind {
    ToggleStoreFilter,
    ToggleSortDirection,
    ClearFilters,
    AddEmptyBlock,
    ToggleMapSummonersRift,
    ToggleMapHowlingAbyss,
    TogglePotatoMode,
}

enum MenuAction {
    View(ViewFactory),
    Prompt(PromptKind),
    Run(CommandKind),
}

struct MenuEntry {
    description: &'static str,
    action: Option<MenuAction>,
}

struct StatusLine {
    text: String,
    is_error: bool,
}

struct App {
    menu_entries: Vec<MenuEntry>,
    selected: usize,
    should_quit: bool,
    should_refresh: bool,
    state: AppState,
    scroll_offset: u16,
    filters: FilterSelection,
    sort: SortDirection,
    store: BuildStore,
    settings: Settings,
    status: Option<StatusLine>,
}

impl App {
    fn new() -> Self {
        let menu_entries = App::get_menu_entries();
        let selected = menu_entries
            .iter()
            .position(|e| e.action.is_some())
            .unwrap_or(0);
        Self {
            menu_entries,
            selected,
            should_quit: false,
            should_refresh: false,
            state: AppState::Menu,
            scroll_offset: 0,
            filters: FilterSelection::default(),
            sort: SortDirection::default(),
            store: BuildStore::new(),
            settings: Settings::load(),
            status: None,
        }
    }

    fn is_in_menu(&self) -> bool {
        matches!(self.state, AppState::Menu)
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusLine { text, is_error });
    }

    fn accent(&self) -> Style {
        if self.settings.potato_mode {
            Style::default()
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    fn next(&mut self) {
        match &self.state {
            AppState::Menu => {
                if self.menu_entries.is_empty() {
                    return;
                }
                let len = self.menu_entries.len();
                let mut i = self.selected;
                loop {
                    i = (i + 1) % len;
                    if self.menu_entries[i].action.is_some() {
                        self.selected = i;
                        break;
                    }
                    if i == self.selected {
                        break; // no selectable entries
                    }
                }
            }
            AppState::ViewingOutput(_) => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            AppState::Prompt(..) => {}
        }
    }

    fn previous(&mut self) {
        match &self.state {
            AppState::Menu => {
                if self.menu_entries.is_empty() {
                    return;
                }
                let len = self.menu_entries.len();
                let mut i = self.selected;
                loop {
                    i = if i == 0 { len - 1 } else { i - 1 };
                    if self.menu_entries[i].action.is_some() {
                        self.selected = i;
                        break;
                    }
                    if i == self.selected {
                        break; // no selectable entries
                    }
                }
            }
            AppState::ViewingOutput(_) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppState::Prompt(..) => {}
        }
    }

    fn page_down(&mut self, amount: u16) {
        if matches!(self.state, AppState::ViewingOutput(_)) {
            self.scroll_offset = self.scroll_offset.saturating_add(amount);
        }
    }

    fn page_up(&mut self, amount: u16) {
        if matches!(self.state, AppState::ViewingOutput(_)) {
            self.scroll_offset = self.scroll_offset.saturating_sub(amount);
        }
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            // main list, a status line for the outcome of the last action,
            // and a small footer for refresh/quit hints
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        // Build list items; headers (action == None) are styled and non-selectable.
        let mut items: Vec<ListItem> = Vec::with_capacity(self.menu_entries.len());
        for (i, entry) in self.menu_entries.iter().enumerate() {
            if entry.action.is_none() {
                let style = if self.settings.potato_mode {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD)
                };
                items.push(ListItem::new(format!("── {} ──", entry.description)).style(style));
            } else {
                let prefix = if i == self.selected { "  ► " } else { "    " };
                items.push(ListItem::new(format!("{}{}", prefix, entry.description)));
            }
        }

        let mut list_state = ListState::default();
        let sel = if self
            .menu_entries
            .get(self.selected)
            .map(|e| e.action.is_some())
            .unwrap_or(false)
        {
            Some(self.selected)
        } else {
            self.menu_entries.iter().position(|e| e.action.is_some())
        };
        list_state.select(sel);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.accent())
                    .padding(ratatui::widgets::Padding::uniform(1))
                    .title("Commands (↑/↓ to navigate, Enter to select)")
                    .title_style(self.accent().add_modifier(Modifier::BOLD)),
            )
            .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
            .highlight_symbol("");

        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        if let Some(status) = &self.status {
            let style = if self.settings.potato_mode {
                Style::default()
            } else if status.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            let line = Paragraph::new(format!(" {}", status.text)).style(style);
            frame.render_widget(line, chunks[1]);
        }

        let footer = Paragraph::new("Refresh catalogs: (r)    Quit: (q)")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::NONE));
        frame.render_widget(footer, chunks[2]);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect, kind: &PromptKind, buffer: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let text = vec![
            ratatui::text::Line::raw(kind.label()),
            ratatui::text::Line::raw(format!("> {}_", buffer)),
        ];
        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.accent())
                .title("Input (Enter to confirm, Esc to cancel)")
                .title_style(self.accent().add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(input, chunks[0]);

        let footer = Paragraph::new("Typed text is applied on Enter.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }

    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        manager: &mut DataManager,
    ) -> Result<(), ReplError> {
        loop {
            // Catalog failures degrade to empty data instead of aborting;
            // the status line carries the report.
            let items: &[Item] = match manager.get_items() {
                Ok(items) => items,
                Err(err) => {
                    self.set_status(format!("Item catalog unavailable: {}", err), true);
                    &[]
                }
            };
            let champions: &[Champion] = match manager.get_champions() {
                Ok(champions) => champions,
                Err(err) => {
                    self.set_status(format!("Champion catalog unavailable: {}", err), true);
                    &[]
                }
            };
            let lookup = LookupService::new(items, champions);

            loop {
                let build = self.store.build();
                let header = format!(
                    " Build: {} | {} block(s)",
                    if build.title.is_empty() { "(untitled)" } else { &build.title },
                    build.blocks.len()
                );

                terminal.draw(|f| {
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Length(3), Constraint::Min(0)])
                        .split(f.size());

                    let title = Paragraph::new(header.clone())
                        .style(Style::default().add_modifier(Modifier::BOLD))
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .border_style(self.accent())
                                .title("BuildForge - LoL Item Build Editor")
                                .title_style(self.accent().add_modifier(Modifier::BOLD)),
                        );
                    f.render_widget(title, chunks[0]);

                    match &self.state {
                        AppState::Menu => {
                            self.render_menu(f, chunks[1]);
                        }
                        AppState::Prompt(kind, buffer) => {
                            self.render_prompt(f, chunks[1], kind, buffer);
                        }
                        AppState::ViewingOutput(view) => {
                            let block = Block::default()
                                .borders(Borders::ALL)
                                .padding(ratatui::widgets::Padding::horizontal(1))
                                .title(format!(
                                    "{} (↑/↓ or PgUp/PgDown to scroll, Esc/q to return)",
                                    view.title()
                                ))
                                .title_style(self.accent().add_modifier(Modifier::BOLD))
                                .border_style(self.accent());

                            let rc = RenderContext {
                                frame: f,
                                area: chunks[1],
                                scroll_offset: self.scroll_offset,
                                block,
                                plain: self.settings.potato_mode,
                            };
                            let _ = view.render(rc);
                        }
                    }
                })?;

                if event::poll(std::time::Duration::from_millis(100))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }

                        if let AppState::Prompt(..) = &self.state {
                            match key.code {
                                KeyCode::Char(c) => {
                                    if let AppState::Prompt(_, buffer) = &mut self.state {
                                        buffer.push(c);
                                    }
                                }
                                KeyCode::Backspace => {
                                    if let AppState::Prompt(_, buffer) = &mut self.state {
                                        buffer.pop();
                                    }
                                }
                                KeyCode::Esc => {
                                    self.state = AppState::Menu;
                                    self.set_status("Cancelled.".to_string(), false);
                                }
                                KeyCode::Enter => {
                                    if let AppState::Prompt(kind, buffer) =
                                        std::mem::replace(&mut self.state, AppState::Menu)
                                    {
                                        self.apply_prompt(kind, buffer.trim(), items, champions);
                                    }
                                }
                                _ => {}
                            }
                            continue;
                        }

                        match key.code {
                            KeyCode::Char('q') if self.is_in_menu() => {
                                self.should_quit = true;
                                break;
                            }
                            KeyCode::Char('r') if self.is_in_menu() => {
                                self.should_refresh = true;
                                break;
                            }
                            KeyCode::Up => self.previous(),
                            KeyCode::Down => self.next(),
                            KeyCode::PageUp => self.page_up(10),
                            KeyCode::PageDown => self.page_down(10),
                            KeyCode::Esc | KeyCode::Char('q') if !self.is_in_menu() => {
                                self.state = AppState::Menu;
                                self.scroll_offset = 0;
                            }
                            KeyCode::Enter if self.is_in_menu() => {
                                match &self.menu_entries[self.selected].action {
                                    Some(MenuAction::View(factory)) => {
                                        let factory = *factory;
                                        let ctrl = Controller {
                                            manager: &*manager,
                                            lookup: &lookup,
                                            filters: &self.filters,
                                            sort: self.sort,
                                            build: self.store.build(),
                                        };
                                        let view = factory(&ctrl);

                                        terminal.clear()?;
                                        self.state = AppState::ViewingOutput(view);
                                        self.scroll_offset = 0;
                                    }
                                    Some(MenuAction::Prompt(kind)) => {
                                        let kind = *kind;
                                        self.state = AppState::Prompt(kind, String::new());
                                    }
                                    Some(MenuAction::Run(cmd)) => {
                                        let cmd = *cmd;
                                        self.apply_command(cmd);
                                    }
                                    None => {}
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }

            if self.should_refresh {
                self.should_refresh = false;
                manager.refresh();
                self.set_status("Catalogs refreshed.".to_string(), false);
            }
        }
    }

    fn apply_command(&mut self, cmd: CommandKind) {
        match cmd {
            CommandKind::ToggleStoreFilter => {
                self.filters.store_only = !self.filters.store_only;
                let state = if self.filters.store_only { "on" } else { "off" };
                self.set_status(format!("Store-only filter {}.", state), false);
            }
            CommandKind::ToggleSortDirection => {
                self.sort.toggle();
                self.set_status(format!("Sorting by {}.", self.sort.label()), false);
            }
            CommandKind::ClearFilters => {
                self.filters.clear();
                self.set_status("Filters cleared.".to_string(), false);
            }
            CommandKind::AddEmptyBlock => {
                self.store.add_empty_block();
                let count = self.store.build().blocks.len();
                self.set_status(format!("Added \"Empty Block {}\".", count), false);
            }
            CommandKind::ToggleMapSummonersRift => {
                self.store.toggle_map(MapId::SUMMONERS_RIFT);
                self.set_status("Toggled Summoner's Rift.".to_string(), false);
            }
            CommandKind::ToggleMapHowlingAbyss => {
                self.store.toggle_map(MapId::HOWLING_ABYSS);
                self.set_status("Toggled Howling Abyss.".to_string(), false);
            }
            CommandKind::TogglePotatoMode => {
                self.settings.toggle_potato_mode();
                let state = if self.settings.potato_mode { "on" } else { "off" };
                self.set_status(format!("Potato mode {}.", state), false);
            }
        }
    }

    fn apply_prompt(&mut self, kind: PromptKind, input: &str, items: &[Item], champions: &[Champion]) {
        match kind {
            PromptKind::SearchItems => {
                if input.is_empty() {
                    self.set_status("Empty search query.".to_string(), true);
                    return;
                }
                let view = SearchResultsView::new(items, input);
                self.state = AppState::ViewingOutput(Box::new(view));
                self.scroll_offset = 0;
            }
            PromptKind::AddCategoryGroup => {
                if input.is_empty() {
                    self.filters.category_groups.clear();
                    self.set_status("Category groups cleared.".to_string(), false);
                    return;
                }
                let categories = input
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>();
                self.filters.category_groups.push(CategoryGroup::new(categories));
                self.set_status(format!("Filters: {}", self.filters.describe()), false);
            }
            PromptKind::SetClassFilter => {
                if input.is_empty() {
                    self.filters.champion_class = None;
                    self.set_status("Class filter cleared.".to_string(), false);
                    return;
                }
                match ChampionClass::from_name(input) {
                    Some(class) => {
                        self.filters.champion_class = Some(class);
                        self.set_status(format!("Class filter: {}.", class), false);
                    }
                    None => {
                        let known = ChampionClass::ALL
                            .iter()
                            .map(|c| c.name())
                            .collect::<Vec<_>>()
                            .join(", ");
                        self.set_status(format!("Unknown class \"{}\". One of: {}", input, known), true);
                    }
                }
            }
            PromptKind::SetSearchFilter => {
                self.filters.search = input.to_string();
                if input.is_empty() {
                    self.set_status("Search filter cleared.".to_string(), false);
                } else {
                    self.set_status(format!("Filters: {}", self.filters.describe()), false);
                }
            }
            PromptKind::SetBuildTitle => {
                self.store.set_title(input);
                self.set_status("Title updated.".to_string(), false);
            }
            PromptKind::AddNamedBlock => {
                if input.is_empty() {
                    self.set_status("Block label cannot be empty.".to_string(), true);
                    return;
                }
                self.store.add_block(input);
                self.set_status(format!("Added block \"{}\".", input), false);
            }
            PromptKind::RenameBlock => {
                let Some((pos, label)) = input.split_once(' ') else {
                    self.set_status("Expected: <position> <new label>".to_string(), true);
                    return;
                };
                let label = label.trim();
                if label.is_empty() {
                    self.set_status("Block label cannot be empty.".to_string(), true);
                    return;
                }
                match pos.parse::<usize>().ok().and_then(|p| self.block_id_at(p)) {
                    Some(id) => {
                        self.store.update_block_type(&id, label);
                        self.set_status(format!("Block renamed to \"{}\".", label), false);
                    }
                    None => self.set_status("No block at that position.".to_string(), true),
                }
            }
            PromptKind::MoveBlock => {
                let parts = input.split_whitespace().collect::<Vec<_>>();
                let (Some(from), Some(to)) = (
                    parts.first().and_then(|p| p.parse::<usize>().ok()),
                    parts.get(1).and_then(|p| p.parse::<usize>().ok()),
                ) else {
                    self.set_status("Expected: <from position> <to position>".to_string(), true);
                    return;
                };
                let moved = self
                    .store
                    .build()
                    .blocks
                    .iter()
                    .find(|b| b.position == from)
                    .cloned();
                match moved {
                    Some(mut block) => {
                        let id = block.id.clone();
                        block.position = to;
                        self.store.update_block(&id, block);
                        self.set_status(format!("Moved block {} to {}.", from, to), false);
                    }
                    None => self.set_status("No block at that position.".to_string(), true),
                }
            }
            PromptKind::RemoveBlock => {
                match input.parse::<usize>() {
                    Ok(pos) if self.block_id_at(pos).is_some() => {
                        self.state = AppState::Prompt(PromptKind::ConfirmRemoveBlock(pos), String::new());
                    }
                    _ => self.set_status("No block at that position.".to_string(), true),
                }
            }
            PromptKind::ConfirmRemoveBlock(pos) => {
                if !input.eq_ignore_ascii_case("y") {
                    self.set_status("Cancelled.".to_string(), false);
                    return;
                }
                match self.block_id_at(pos) {
                    Some(id) => {
                        self.store.remove_block(&id);
                        self.set_status(format!("Removed block {}.", pos), false);
                    }
                    None => self.set_status("No block at that position.".to_string(), true),
                }
            }
            PromptKind::AddItemToBlock => {
                let Some((pos, token)) = input.split_once(' ') else {
                    self.set_status("Expected: <block position> <item id or name>".to_string(), true);
                    return;
                };
                let Some(id) = pos.parse::<usize>().ok().and_then(|p| self.block_id_at(p)) else {
                    self.set_status("No block at that position.".to_string(), true);
                    return;
                };
                match resolve_item(items, token.trim()) {
                    Some(item) => {
                        let name = item.name.clone();
                        self.store.add_item_to_block(&id, item.id.clone());
                        self.set_status(format!("Added {}.", name), false);
                    }
                    None => self.set_status(format!("No item matches \"{}\".", token.trim()), true),
                }
            }
            PromptKind::RemoveItemFromBlock => {
                let parts = input.split_whitespace().collect::<Vec<_>>();
                let (Some(pos), Some(slot)) = (
                    parts.first().and_then(|p| p.parse::<usize>().ok()),
                    parts.get(1).and_then(|p| p.parse::<usize>().ok()),
                ) else {
                    self.set_status("Expected: <block position> <slot number>".to_string(), true);
                    return;
                };
                let Some(id) = self.block_id_at(pos) else {
                    self.set_status("No block at that position.".to_string(), true);
                    return;
                };
                let slot_id = self
                    .store
                    .build()
                    .blocks
                    .iter()
                    .find(|b| b.id == id)
                    .and_then(|b| b.items.get(slot.wrapping_sub(1)))
                    .map(|i| i.id.clone());
                match slot_id {
                    Some(slot_id) => {
                        self.store.remove_item_from_block(&id, &slot_id);
                        self.set_status(format!("Removed slot {} from block {}.", slot, pos), false);
                    }
                    None => self.set_status("No item in that slot.".to_string(), true),
                }
            }
            PromptKind::AssociateChampion => {
                let found = champions
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(input));
                match found {
                    Some(champ) => {
                        self.store.toggle_champion(champ.id);
                        self.set_status(format!("Toggled {}.", champ.name), false);
                    }
                    None => self.set_status(format!("Unknown champion \"{}\".", input), true),
                }
            }
            PromptKind::ImportFromFile => {
                let text = match fs::read_to_string(input) {
                    Ok(text) => text,
                    Err(err) => {
                        self.set_status(format!("Could not read {}: {}", input, err), true);
                        return;
                    }
                };
                match self.store.import(&text) {
                    Ok(()) => self.set_status("Build imported.".to_string(), false),
                    Err(err) => self.set_status(format!("Import rejected: {}", err), true),
                }
            }
            PromptKind::ExportToFile => {
                let path = if input.is_empty() {
                    format!("build_{}.json", chrono::Local::now().format("%Y-%m-%d"))
                } else {
                    input.to_string()
                };
                match fs::write(&path, self.store.export_string()) {
                    Ok(()) => self.set_status(format!("Build exported to {}.", path), false),
                    Err(err) => self.set_status(format!("Export failed: {}", err), true),
                }
            }
            PromptKind::ConfirmReset => {
                if input.eq_ignore_ascii_case("y") {
                    self.store.reset();
                    self.set_status("Build reset.".to_string(), false);
                } else {
                    self.set_status("Cancelled.".to_string(), false);
                }
            }
        }
    }

    fn block_id_at(&self, position: usize) -> Option<crate::model::ids::BlockId> {
        self.store
            .build()
            .blocks
            .iter()
            .find(|b| b.position == position)
            .map(|b| b.id.clone())
    }

    fn get_menu_entries() -> Vec<MenuEntry> {
        macro_rules! menu_entry {
            (group: $desc:expr) => {
                MenuEntry {
                    description: $desc,
                    action: None,
                }
            };
            (view: $desc:expr, $view:ty) => {
                MenuEntry {
                    description: $desc,
                    action: Some(MenuAction::View(|ctrl| Box::new(<$view>::new(ctrl)))),
                }
            };
            (prompt: $desc:expr, $kind:expr) => {
                MenuEntry {
                    description: $desc,
                    action: Some(MenuAction::Prompt($kind)),
                }
            };
            (run: $desc:expr, $cmd:expr) => {
                MenuEntry {
                    description: $desc,
                    action: Some(MenuAction::Run($cmd)),
                }
            };
        }

        vec![
            // Catalog
            menu_entry!(group: "Catalog"),
            menu_entry!(view: "Browse Items", ItemCatalogView),
            menu_entry!(view: "Browse Champions", ChampionCatalogView),
            menu_entry!(prompt: "Search Items", PromptKind::SearchItems),
            // Filters
            menu_entry!(group: "Filters"),
            menu_entry!(prompt: "Add Category Group", PromptKind::AddCategoryGroup),
            menu_entry!(prompt: "Class Filter", PromptKind::SetClassFilter),
            menu_entry!(prompt: "Search Filter", PromptKind::SetSearchFilter),
            menu_entry!(run: "Store Items Only (toggle)", CommandKind::ToggleStoreFilter),
            menu_entry!(run: "Sort Direction (toggle)", CommandKind::ToggleSortDirection),
            menu_entry!(run: "Clear All Filters", CommandKind::ClearFilters),
            // Build
            menu_entry!(group: "Build"),
            menu_entry!(view: "Show Build", BuildView),
            menu_entry!(run: "Add Empty Block", CommandKind::AddEmptyBlock),
            menu_entry!(prompt: "Add Named Block", PromptKind::AddNamedBlock),
            menu_entry!(prompt: "Rename Block", PromptKind::RenameBlock),
            menu_entry!(prompt: "Move Block", PromptKind::MoveBlock),
            menu_entry!(prompt: "Remove Block", PromptKind::RemoveBlock),
            menu_entry!(prompt: "Add Item to Block", PromptKind::AddItemToBlock),
            menu_entry!(prompt: "Remove Item from Block", PromptKind::RemoveItemFromBlock),
            menu_entry!(prompt: "Set Build Title", PromptKind::SetBuildTitle),
            menu_entry!(run: "Toggle Summoner's Rift", CommandKind::ToggleMapSummonersRift),
            menu_entry!(run: "Toggle Howling Abyss", CommandKind::ToggleMapHowlingAbyss),
            menu_entry!(prompt: "Associate Champion", PromptKind::AssociateChampion),
            // Import/Export
            menu_entry!(group: "Import/Export"),
            menu_entry!(view: "Show Build JSON", BuildJsonView),
            menu_entry!(prompt: "Export Build to File", PromptKind::ExportToFile),
            menu_entry!(prompt: "Import Build from File", PromptKind::ImportFromFile),
            menu_entry!(prompt: "Reset Build", PromptKind::ConfirmReset),
            // Settings
            menu_entry!(group: "Settings"),
            menu_entry!(run: "Toggle Potato Mode", CommandKind::TogglePotatoMode),
        ]
    }
}

fn resolve_item<'a>(items: &'a [Item], token: &str) -> Option<&'a Item> {
    if let Some(item) = items.iter().find(|i| i.id.as_str() == token) {
        return Some(item);
    }
    if let Some(item) = items.iter().find(|i| i.name.eq_ignore_ascii_case(token)) {
        return Some(item);
    }
    search_ranked(items, token, 1).first().map(|hit| hit.item)
}

pub fn run(mut manager: DataManager) -> Result<(), ReplError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal, &mut manager);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    result
}
