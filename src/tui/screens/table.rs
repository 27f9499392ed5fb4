//! Data Table tab: search field plus the selectable country table

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Country, SortKey};
use crate::pipeline::DataPipeline;
use crate::tui::components::{CountryTable, CountryTableConfig, TextField, TextFieldVariant};
use crate::tui::ui::Styles;

/// Which part of the tab owns keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFocus {
    Search,
    Rows,
}

/// Screen state for the country table tab
pub struct TableScreen {
    pub pipeline: DataPipeline,
    pub table: CountryTable,
    pub search_field: TextField,
    pub search: String,
    pub focus: TableFocus,
    pub loading: bool,
}

impl TableScreen {
    pub fn new() -> Self {
        let mut search_field = TextField::new("Search")
            .with_placeholder("Search by country name...")
            .with_variant(TextFieldVariant::Outlined)
            .clearable();
        search_field.set_focus(true);

        Self {
            pipeline: DataPipeline::new(),
            table: CountryTable::new(CountryTableConfig::default()),
            search_field,
            search: String::new(),
            focus: TableFocus::Search,
            loading: false,
        }
    }

    /// Data-load event from the fetch. UI state (filter/sort/selection) is
    /// preserved by design.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.pipeline.set_countries(countries);
        self.table.clamp_cursor(self.pipeline.view().len());
    }

    pub fn is_editing(&self) -> bool {
        self.focus == TableFocus::Search
    }

    pub fn set_focus(&mut self, focus: TableFocus) {
        self.focus = focus;
        self.search_field.set_focus(focus == TableFocus::Search);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.focus {
            TableFocus::Search => match key.code {
                KeyCode::Down | KeyCode::Enter | KeyCode::Esc => {
                    self.set_focus(TableFocus::Rows);
                }
                _ => {
                    if self.search_field.handle_key(key, &mut self.search) {
                        self.pipeline.set_filter(&self.search);
                        self.table.clamp_cursor(self.pipeline.view().len());
                    }
                }
            },
            TableFocus::Rows => match key.code {
                KeyCode::Char('/') => self.set_focus(TableFocus::Search),
                KeyCode::Up | KeyCode::Char('k') => {
                    let len = self.pipeline.view().len();
                    self.table.navigate_up(len);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let len = self.pipeline.view().len();
                    self.table.navigate_down(len);
                }
                KeyCode::Char(' ') => {
                    let name = self
                        .table
                        .cursor_name(&self.pipeline.view())
                        .map(str::to_string);
                    if let Some(name) = name {
                        self.pipeline.toggle_select(&name);
                    }
                }
                KeyCode::Char('a') => {
                    self.pipeline.toggle_select_all();
                }
                KeyCode::Char('n') => {
                    self.pipeline.toggle_sort(SortKey::Name);
                    self.table.clamp_cursor(self.pipeline.view().len());
                }
                KeyCode::Char('p') => {
                    self.pipeline.toggle_sort(SortKey::Population);
                    self.table.clamp_cursor(self.pipeline.view().len());
                }
                _ => {}
            },
        }
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.search_field.height()),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.search_field.render(f, chunks[0], &self.search);
        self.table.render(f, chunks[1], &self.pipeline, self.loading);

        let hint = match self.focus {
            TableFocus::Search => "Enter/Esc: to rows | type to filter",
            TableFocus::Rows => {
                "/: search | Space: select | a: select all | n/p: sort by name/population"
            }
        };
        f.render_widget(Paragraph::new(hint).style(Styles::inactive()), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountryName, Flags};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn country(name: &str, population: u64) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                official: name.to_string(),
            },
            capital: vec![],
            population,
            flags: Flags::default(),
        }
    }

    fn loaded_screen() -> TableScreen {
        let mut screen = TableScreen::new();
        screen.set_countries(vec![
            country("India", 1_400_000_000),
            country("USA", 330_000_000),
            country("Japan", 126_000_000),
        ]);
        screen
    }

    #[test]
    fn test_typing_in_search_drives_the_filter() {
        let mut screen = loaded_screen();
        screen.handle_key_event(press(KeyCode::Char('a')));
        screen.handle_key_event(press(KeyCode::Char('n')));
        assert_eq!(screen.pipeline.filter(), "an");
        assert_eq!(screen.pipeline.view().len(), 1);
    }

    #[test]
    fn test_clearing_search_resets_filter() {
        let mut screen = loaded_screen();
        screen.handle_key_event(press(KeyCode::Char('z')));
        assert!(screen.pipeline.view().is_empty());

        screen.handle_key_event(KeyEvent::new(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(screen.pipeline.filter(), "");
        assert_eq!(screen.pipeline.view().len(), 3);
    }

    #[test]
    fn test_row_keys_select_and_sort() {
        let mut screen = loaded_screen();
        screen.handle_key_event(press(KeyCode::Enter)); // to rows

        screen.handle_key_event(press(KeyCode::Char(' ')));
        assert!(screen.pipeline.is_selected("India"));

        screen.handle_key_event(press(KeyCode::Char('a')));
        assert!(screen.pipeline.is_all_selected());

        screen.handle_key_event(press(KeyCode::Char('p')));
        let view = screen.pipeline.view();
        assert_eq!(view[0].display_name(), "Japan");
    }

    #[test]
    fn test_focus_moves_between_search_and_rows() {
        let mut screen = loaded_screen();
        assert!(screen.is_editing());

        screen.handle_key_event(press(KeyCode::Esc));
        assert_eq!(screen.focus, TableFocus::Rows);
        assert!(!screen.is_editing());

        screen.handle_key_event(press(KeyCode::Char('/')));
        assert_eq!(screen.focus, TableFocus::Search);
    }

    #[test]
    fn test_sort_keys_only_apply_in_row_focus() {
        let mut screen = loaded_screen();
        // 'n' while searching is text, not a sort command.
        screen.handle_key_event(press(KeyCode::Char('n')));
        assert!(screen.pipeline.sort().is_none());
        assert_eq!(screen.search, "n");
    }
}
