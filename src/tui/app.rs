//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame, Terminal,
};
use tracing::warn;

use crate::config::Config;
use crate::fetch;
use crate::tui::screens::{InputsScreen, TableScreen};
use crate::tui::ui::centered_rect;

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Inputs,
    Table,
}

impl Tab {
    pub fn as_str(&self) -> &str {
        match self {
            Tab::Inputs => "Input Fields",
            Tab::Table => "Data Table",
        }
    }

    fn index(&self) -> usize {
        match self {
            Tab::Inputs => 0,
            Tab::Table => 1,
        }
    }
}

/// Main TUI application state
pub struct App {
    pub active_tab: Tab,
    pub config: Config,

    // Tab states
    pub inputs: InputsScreen,
    pub table: TableScreen,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    /// Fetch armed by tab activation, executed after the next draw so the
    /// loading indicator gets a frame on screen first.
    pending_fetch: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            active_tab: Tab::Inputs,
            config,
            inputs: InputsScreen::new(),
            table: TableScreen::new(),
            should_quit: false,
            show_help_popup: false,
            status_message: None,
            error_message: None,
            pending_fetch: false,
        }
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // A pending fetch runs between frames, never before the loading
            // indicator has been drawn once.
            if self.pending_fetch {
                self.pending_fetch = false;
                self.fetch_countries().await;
                continue;
            }

            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    self.handle_key_event(key).await?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn is_editing(&self) -> bool {
        match self.active_tab {
            Tab::Inputs => self.inputs.is_editing(),
            Tab::Table => self.table.is_editing(),
        }
    }

    /// Handle keyboard input events
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Global shortcuts. Single-letter ones stay out of the way while a
        // text field is being edited.
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::F(1) => {
                self.show_help_popup = !self.show_help_popup;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.switch_tab();
                return Ok(());
            }
            KeyCode::Char('q') if !self.is_editing() => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('?') if !self.is_editing() => {
                self.show_help_popup = !self.show_help_popup;
                return Ok(());
            }
            KeyCode::Esc if self.show_help_popup => {
                self.show_help_popup = false;
                return Ok(());
            }
            _ => {}
        }

        if !self.show_help_popup {
            match self.active_tab {
                Tab::Inputs => self.inputs.handle_key_event(key),
                Tab::Table => self.table.handle_key_event(key),
            }
        }

        Ok(())
    }

    /// Switch tabs; activating the table tab arms the one-shot fetch.
    /// Skipped entirely once data is present or a fetch is in flight.
    fn switch_tab(&mut self) {
        self.active_tab = match self.active_tab {
            Tab::Inputs => Tab::Table,
            Tab::Table => Tab::Inputs,
        };
        self.clear_messages();

        if self.active_tab == Tab::Table
            && !self.table.pipeline.has_data()
            && !self.table.loading
        {
            self.table.loading = true;
            self.pending_fetch = true;
            self.set_status("Loading country data...".to_string());
        }
    }

    /// Fetch the dataset. A failure degrades to an empty dataset with the
    /// error surfaced in the status bar; nothing is retried.
    async fn fetch_countries(&mut self) {
        match fetch::fetch_countries(&self.config).await {
            Ok(countries) => {
                self.set_status(format!("Loaded {} countries", countries.len()));
                self.table.set_countries(countries);
            }
            Err(e) => {
                warn!("Country fetch failed: {}", e);
                self.set_error(format!("Failed to load countries: {}", e));
            }
        }

        self.table.loading = false;
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.status_message = None;
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_tabs(f, chunks[0]);

        match self.active_tab {
            Tab::Inputs => self.inputs.draw(f, chunks[1]),
            Tab::Table => self.table.draw(f, chunks[1]),
        }

        self.draw_status_bar(f, chunks[2]);

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = [Tab::Inputs, Tab::Table]
            .iter()
            .map(|t| Line::from(t.as_str()))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Country Browser"),
            )
            .select(self.active_tab.index())
            .style(Style::default().fg(Color::Cyan))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::Black));

        f.render_widget(tabs, area);
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if let Some(ref msg) = self.status_message {
            format!("Status: {}", msg)
        } else if let Some(ref err) = self.error_message {
            format!("Error: {}", err)
        } else {
            format!(
                "{} | Tab: switch tab | F1: help | Ctrl+C: quit",
                self.active_tab.as_str()
            )
        };

        let style = if self.error_message.is_some() {
            Style::default().fg(Color::Red)
        } else if self.status_message.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(self.get_context_help())
            .block(
                Block::default()
                    .title("Help")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(help_popup, popup_area);
    }

    fn get_context_help(&self) -> String {
        let global_help = "Global Shortcuts:\n\
            Tab - Switch tab\n\
            F1 - Toggle this help\n\
            Ctrl+C - Quit\n\n";

        let tab_help = match self.active_tab {
            Tab::Inputs => {
                "Input Fields:\n\
                ↑/↓/Enter - Change field\n\
                Ctrl+U - Clear field (when clearable)\n\
                Ctrl+R - Show/hide password\n\
                Type to edit the focused field"
            }
            Tab::Table => {
                "Data Table:\n\
                Type in the search box to filter by name\n\
                Enter/Esc - Move from search to rows\n\
                / - Back to search\n\
                ↑/↓ or j/k - Navigate rows\n\
                Space - Select/deselect row\n\
                a - Select/deselect all visible rows\n\
                n - Sort by name (again to flip)\n\
                p - Sort by population (again to flip)"
            }
        };

        format!("{}{}", global_help, tab_help)
    }
}
