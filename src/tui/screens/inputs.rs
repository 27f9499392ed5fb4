//! Input Fields tab: three text fields demonstrating the TextField contract

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::components::{TextField, TextFieldSize, TextFieldVariant};
use crate::tui::ui::{centered_rect, Styles};

/// Screen state: the fields plus their caller-owned values
pub struct InputsScreen {
    pub name_field: TextField,
    pub age_field: TextField,
    pub password_field: TextField,
    pub name: String,
    pub age: String,
    pub password: String,
    current_field: usize,
}

impl InputsScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            name_field: TextField::new("Your Name")
                .with_placeholder("Enter Name")
                .with_helper_text("This will be visible to others")
                .with_variant(TextFieldVariant::Ghost)
                .clearable(),
            age_field: TextField::new("Your Age")
                .with_placeholder("Enter Age")
                .with_helper_text("Enter numbers only")
                .with_error_message("Age must contain digits only")
                .with_variant(TextFieldVariant::Filled)
                .clearable(),
            password_field: TextField::new("Password")
                .with_placeholder("Enter Password")
                .with_helper_text("Use at least 8 characters")
                .with_variant(TextFieldVariant::Outlined)
                .with_size(TextFieldSize::Md)
                .password(),
            name: String::new(),
            age: String::new(),
            password: String::new(),
            current_field: 0,
        };
        screen.update_field_focus();
        screen
    }

    const FIELD_COUNT: usize = 3;

    fn update_field_focus(&mut self) {
        self.name_field.set_focus(self.current_field == 0);
        self.age_field.set_focus(self.current_field == 1);
        self.password_field.set_focus(self.current_field == 2);
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % Self::FIELD_COUNT;
        self.update_field_focus();
    }

    pub fn previous_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            Self::FIELD_COUNT - 1
        } else {
            self.current_field - 1
        };
        self.update_field_focus();
    }

    /// Text editing happens here, so app-global single-letter shortcuts
    /// must stay out of the way while this tab is active.
    pub fn is_editing(&self) -> bool {
        true
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Enter => self.next_field(),
            KeyCode::Up => self.previous_field(),
            _ => {
                match self.current_field {
                    0 => {
                        self.name_field.handle_key(key, &mut self.name);
                    }
                    1 => {
                        if self.age_field.handle_key(key, &mut self.age) {
                            // Validation lives with the caller, not the field.
                            let invalid = !self.age.is_empty()
                                && !self.age.chars().all(|c| c.is_ascii_digit());
                            self.age_field.set_invalid(invalid);
                        }
                    }
                    _ => {
                        self.password_field.handle_key(key, &mut self.password);
                    }
                }
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let panel = centered_rect(60, 90, area);
        let block = Block::default()
            .title("Input Fields")
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.name_field.height()),
                Constraint::Length(1),
                Constraint::Length(self.age_field.height()),
                Constraint::Length(1),
                Constraint::Length(self.password_field.height()),
                Constraint::Min(0),
            ])
            .split(inner);

        self.name_field.render(f, chunks[0], &self.name);
        self.age_field.render(f, chunks[2], &self.age);
        self.password_field.render(f, chunks[4], &self.password);

        let hint = Paragraph::new("↑/↓/Enter: change field | Ctrl+U: clear | Ctrl+R: show/hide password")
            .style(Styles::inactive());
        f.render_widget(hint, chunks[5]);
    }
}
