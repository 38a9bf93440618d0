//! Translation browser TUI application
//!
//! Interactive browser for one language of a workspace.
//! Features: search, category cycling, formatted/untranslated filters,
//! inline editing with a live formatting preview, save.

use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::event::Event;
use super::preview::formatted_lines;
use super::ui::{build_browser_layout, centered_rect, render_footer, render_status_line};
use crate::formatting::{Scanner, SENTINEL};
use crate::theme::current_theme;
use crate::translations::{
    validate_entry, EntryFilter, TranslationEntry, TranslationStats, TranslationStore,
};

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// UI mode for the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Search mode - typing filters keys and texts
    Search,
    /// Edit mode - typing replaces the selected translation
    Edit,
    /// Help mode - showing keyboard shortcuts
    Help,
    /// Quit requested with unsaved changes
    ConfirmQuit,
}

/// Browser state, independent of the terminal.
pub struct BrowseState {
    store: TranslationStore,
    scanner: Scanner,
    language: String,
    /// Category filter choices; index 0 means all categories
    categories: Vec<String>,
    category_idx: usize,
    formatted_only: bool,
    untranslated_only: bool,
    search: String,
    /// Keys of the entries currently shown
    visible: Vec<String>,
    selected: usize,
    mode: Mode,
    /// Text being edited in Edit mode
    input: String,
    status_message: Option<String>,
    dirty: bool,
    should_quit: bool,
}

impl BrowseState {
    pub fn new(store: TranslationStore, scanner: Scanner, language: &str) -> Result<Self> {
        if !store.has_language(language) {
            bail!("Unknown language '{}'", language);
        }
        let categories = store.categories().into_iter().map(String::from).collect();
        let mut state = Self {
            store,
            scanner,
            language: language.to_string(),
            categories,
            category_idx: 0,
            formatted_only: false,
            untranslated_only: false,
            search: String::new(),
            visible: Vec::new(),
            selected: 0,
            mode: Mode::Normal,
            input: String::new(),
            status_message: None,
            dirty: false,
            should_quit: false,
        };
        state.refresh();
        Ok(state)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Keys of the entries currently shown, in display order.
    pub fn visible_keys(&self) -> &[String] {
        &self.visible
    }

    /// Currently selected category filter, if any.
    pub fn category_filter(&self) -> Option<&str> {
        if self.category_idx == 0 {
            None
        } else {
            self.categories
                .get(self.category_idx - 1)
                .map(String::as_str)
        }
    }

    pub fn selected_entry(&self) -> Option<&TranslationEntry> {
        self.visible
            .get(self.selected)
            .and_then(|key| self.store.entry(&self.language, key))
    }

    fn is_base_language(&self) -> bool {
        self.language == self.store.base_language()
    }

    /// Recompute the visible entries, keeping the selection on the same key
    /// when it is still shown.
    fn refresh(&mut self) {
        let previous = self.visible.get(self.selected).cloned();
        let filter = EntryFilter {
            category: self.category_filter().map(String::from),
            subcategory: None,
            formatted_only: self.formatted_only,
            untranslated_only: self.untranslated_only,
        };
        let query = self.search.to_lowercase();
        self.visible = self
            .store
            .entries(&self.language, &filter)
            .into_iter()
            .filter(|entry| {
                query.is_empty()
                    || entry.key.to_lowercase().contains(&query)
                    || entry.english_text.to_lowercase().contains(&query)
                    || entry.translated_text.to_lowercase().contains(&query)
            })
            .map(|entry| entry.key.clone())
            .collect();

        self.selected = previous
            .and_then(|key| self.visible.iter().position(|k| *k == key))
            .unwrap_or_else(|| self.selected.min(self.visible.len().saturating_sub(1)));
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Edit => self.handle_edit_key(key),
            Mode::Help => {
                self.mode = Mode::Normal;
                Ok(())
            }
            Mode::ConfirmQuit => self.handle_confirm_quit_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status_message = None;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(1),
            KeyCode::PageUp => self.move_up(PAGE_SIZE),
            KeyCode::PageDown => self.move_down(PAGE_SIZE),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.visible.len().saturating_sub(1)
            }

            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('c') => {
                self.category_idx = (self.category_idx + 1) % (self.categories.len() + 1);
                self.refresh();
            }
            KeyCode::Char('f') => {
                self.formatted_only = !self.formatted_only;
                self.refresh();
            }
            KeyCode::Char('u') => {
                self.untranslated_only = !self.untranslated_only;
                self.refresh();
            }
            KeyCode::Esc => {
                self.search.clear();
                self.category_idx = 0;
                self.formatted_only = false;
                self.untranslated_only = false;
                self.refresh();
            }

            KeyCode::Enter | KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('q') => {
                if self.dirty {
                    self.mode = Mode::ConfirmQuit;
                } else {
                    self.should_quit = true;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.search.clear();
                self.mode = Mode::Normal;
                self.refresh();
            }
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.search.pop();
                self.refresh();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.refresh();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Normal;
                self.status_message = Some("Edit cancelled".to_string());
            }
            KeyCode::Enter => self.commit_edit()?,
            KeyCode::Backspace => {
                self.input.pop();
            }
            // Ctrl+F inserts the section sign, which most keyboards lack
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(SENTINEL);
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_confirm_quit_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.save();
                if !self.dirty {
                    self.should_quit = true;
                } else {
                    self.mode = Mode::Normal;
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.should_quit = true,
            KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
        Ok(())
    }

    fn move_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows);
    }

    fn move_down(&mut self, rows: usize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = (self.selected + rows).min(last);
    }

    fn start_edit(&mut self) {
        if self.is_base_language() {
            self.status_message = Some(format!(
                "{} is the base language and cannot be edited",
                self.language
            ));
            return;
        }
        let Some(entry) = self.selected_entry() else {
            return;
        };
        self.input = entry.translated_text.clone();
        self.mode = Mode::Edit;
    }

    fn commit_edit(&mut self) -> Result<()> {
        let Some(key) = self.visible.get(self.selected).cloned() else {
            self.mode = Mode::Normal;
            return Ok(());
        };
        let text = std::mem::take(&mut self.input);
        self.store.update(&self.language, &key, &text)?;
        self.dirty = true;
        self.mode = Mode::Normal;
        self.status_message = Some(format!("Updated {}", key));
        self.refresh();
        Ok(())
    }

    fn save(&mut self) {
        match self.store.save(Some(&self.language)) {
            Ok(written) => {
                self.dirty = false;
                self.status_message = Some(format!(
                    "Saved {} ({} files)",
                    self.language,
                    written.len()
                ));
            }
            Err(e) => self.status_message = Some(format!("Save failed: {}", e)),
        }
    }

    fn status_text(&self) -> String {
        if let Some(msg) = &self.status_message {
            return msg.clone();
        }
        match self.mode {
            Mode::Search => format!("Search: {}_", self.search),
            Mode::ConfirmQuit => "Unsaved changes. Save before quitting? (y/n)".to_string(),
            Mode::Edit | Mode::Help | Mode::Normal => {
                let mut parts = Vec::new();
                if let Some(stats) = self.store.stats(&self.language) {
                    parts.push(format!("{}: {}", self.language, stats.progress()));
                }
                parts.push(format!("{} shown", self.visible.len()));
                if let Some(category) = self.category_filter() {
                    parts.push(format!("category: {}", category));
                }
                if self.formatted_only {
                    parts.push("formatted".to_string());
                }
                if self.untranslated_only {
                    parts.push("untranslated".to_string());
                }
                if !self.search.is_empty() {
                    parts.push(format!("search: \"{}\"", self.search));
                }
                if self.dirty {
                    parts.push("[modified]".to_string());
                }
                parts.join(" | ")
            }
        }
    }

    fn footer_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            Mode::Search => &[
                ("Enter", "apply"),
                ("Esc", "clear search"),
                ("Backspace", "delete char"),
            ],
            Mode::Edit => &[
                ("Enter", "commit"),
                ("Esc", "cancel"),
                ("Ctrl+F", "insert §"),
                ("Backspace", "delete char"),
            ],
            Mode::Help => &[("any key", "close help")],
            Mode::ConfirmQuit => &[
                ("y", "save and quit"),
                ("n", "quit without saving"),
                ("Esc", "cancel"),
            ],
            Mode::Normal => &[
                ("↑↓", "navigate"),
                ("e", "edit"),
                ("/", "search"),
                ("c", "category"),
                ("f", "formatted"),
                ("u", "untranslated"),
                ("s", "save"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    }

    /// Render the whole browser into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [list_area, detail_area, status_area, footer_area] = build_browser_layout(area);

        self.render_list(frame, list_area);
        self.render_detail(frame, detail_area);
        render_status_line(frame, status_area, &self.status_text());
        render_footer(frame, footer_area, self.footer_hints());

        if self.mode == Mode::Help {
            render_help_modal(frame, area);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let theme = current_theme();
        let items: Vec<ListItem> = self
            .visible
            .iter()
            .filter_map(|key| self.store.entry(&self.language, key))
            .map(|entry| {
                let mark = if entry.is_translated() {
                    Span::styled("✓ ", theme.success_style())
                } else {
                    Span::styled("· ", theme.warning_style())
                };
                ListItem::new(Line::from(vec![
                    mark,
                    Span::styled(entry.key.clone(), theme.text_style()),
                ]))
            })
            .collect();

        let title = format!(" {} ({}) ", self.language, self.visible.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_style())
                    .title(title),
            )
            .highlight_style(theme.highlight_style());

        let mut list_state = ListState::default();
        if !self.visible.is_empty() {
            list_state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let theme = current_theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Preview ");

        let Some(entry) = self.selected_entry() else {
            let empty = Paragraph::new("No entries match the current filters.")
                .style(theme.text_secondary_style())
                .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let heading = |text: String| Line::from(Span::styled(text, theme.accent_bold_style()));
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Key: ", theme.text_secondary_style()),
                Span::styled(entry.key.clone(), theme.text_style()),
            ]),
            Line::from(vec![
                Span::styled("Category: ", theme.text_secondary_style()),
                Span::styled(
                    format!("{} / {}", entry.category, entry.subcategory),
                    theme.text_style(),
                ),
            ]),
            Line::from(""),
        ];

        if !self.is_base_language() {
            lines.push(heading(self.store.base_language().to_string()));
            lines.extend(formatted_lines(&self.scanner, &entry.english_text));
            lines.push(Line::from(""));
        }

        lines.push(heading(self.language.clone()));
        if entry.is_translated() {
            lines.extend(formatted_lines(&self.scanner, &entry.translated_text));
        } else {
            lines.push(Line::from(Span::styled(
                "(untranslated)",
                theme.text_secondary_style(),
            )));
        }

        if self.mode == Mode::Edit {
            lines.push(Line::from(""));
            lines.push(heading("Editing".to_string()));
            lines.push(Line::from(Span::styled(
                format!("{}_", self.input),
                theme.text_style(),
            )));
            lines.push(Line::from(""));
            lines.push(heading("Live preview".to_string()));
            lines.extend(formatted_lines(&self.scanner, &self.input));
        }

        if !self.is_base_language() {
            let base = self.store.entry(self.store.base_language(), &entry.key);
            let issues = validate_entry(entry, base);
            if !issues.is_empty() {
                lines.push(Line::from(""));
                for issue in issues {
                    lines.push(Line::from(Span::styled(
                        format!("⚠ {}", issue.kind),
                        theme.warning_style(),
                    )));
                }
            }
        }

        let detail = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(detail, area);
    }
}

/// Render the help modal overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let modal_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, modal_area);

    let key = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), theme.accent_style()),
            Span::raw(action),
        ])
    };
    let section = |title: &'static str| Line::from(Span::styled(title, theme.text_secondary_style()));

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme.accent_bold_style())),
        Line::from(""),
        section("Navigation"),
        key("↑/↓ j/k", "Navigate"),
        key("PgUp/PgDn", "Page up/down"),
        key("Home/End", "First/last"),
        Line::from(""),
        section("Editing"),
        key("e / Enter", "Edit translation"),
        key("Ctrl+F", "Insert § while editing"),
        key("s", "Save language"),
        Line::from(""),
        section("Filtering"),
        key("/", "Search keys and texts"),
        key("c", "Cycle category"),
        key("f", "Only formatted entries"),
        key("u", "Only untranslated entries"),
        key("Esc", "Clear filters"),
        Line::from(""),
        key("?", "This help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

/// Browser application: terminal plus state.
pub struct BrowseApp {
    app: App,
    state: BrowseState,
}

impl BrowseApp {
    /// Create the browser. Enters the alternate screen.
    pub fn new(store: TranslationStore, scanner: Scanner, language: &str) -> Result<Self> {
        let state = BrowseState::new(store, scanner, language)?;
        let app = App::new(Duration::from_millis(250))?;
        Ok(Self { app, state })
    }

    /// Run the event loop until the user quits.
    ///
    /// Returns the final stats of the browsed language.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<Option<TranslationStats>> {
        loop {
            let state = &self.state;
            self.app.draw(|frame| state.render(frame))?;

            match self.app.next_event()? {
                Event::Key(key) => self.state.handle_key(key)?,
                Event::Quit => break,
                Event::Resize(_, _) | Event::Tick => {}
            }
            if self.state.should_quit() {
                break;
            }
        }
        Ok(self.state.store.stats(&self.state.language))
    }
}
