//! Labeled text field component
//!
//! Controlled in the caller-owns-the-value sense: every editing key takes
//! the bound value as `&mut String`, and the component itself keeps only
//! presentation config plus cursor and password-visibility state. The clear
//! affordance (Ctrl-U) empties the value through the same mutation path as
//! a normal edit; the password reveal (Ctrl-R) changes rendering only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::ui::Styles;

/// Visual variant of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFieldVariant {
    Filled,
    Outlined,
    Ghost,
}

/// Field sizing preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFieldSize {
    Sm,
    Md,
    Lg,
}

/// Labeled single-line input
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: String,
    pub placeholder: String,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub variant: TextFieldVariant,
    pub size: TextFieldSize,
    pub clearable: bool,
    pub is_password: bool,
    pub disabled: bool,
    pub invalid: bool,
    is_focused: bool,
    show_password: bool,
    cursor: usize,
}

impl TextField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            variant: TextFieldVariant::Outlined,
            size: TextFieldSize::Md,
            clearable: false,
            is_password: false,
            disabled: false,
            invalid: false,
            is_focused: false,
            show_password: false,
            cursor: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_helper_text(mut self, helper: &str) -> Self {
        self.helper_text = Some(helper.to_string());
        self
    }

    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = Some(message.to_string());
        self
    }

    pub fn with_variant(mut self, variant: TextFieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: TextFieldSize) -> Self {
        self.size = size;
        self
    }

    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    pub fn password(mut self) -> Self {
        self.is_password = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Caller-driven validity; the field itself validates nothing.
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Toggle masked/plain rendering. Local state only; the bound value is
    /// untouched.
    pub fn toggle_visibility(&mut self) {
        if self.is_password {
            self.show_password = !self.show_password;
        }
    }

    /// Empty the bound value when the clear affordance is active.
    /// Returns true if the value changed.
    pub fn clear(&mut self, value: &mut String) -> bool {
        if !self.clearable || self.disabled || value.is_empty() {
            return false;
        }
        value.clear();
        self.cursor = 0;
        true
    }

    /// Apply an editing key to the caller-owned value. Returns true if the
    /// value changed.
    pub fn handle_key(&mut self, key: KeyEvent, value: &mut String) -> bool {
        if self.disabled {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(value),
            KeyCode::Char('r') if ctrl => {
                self.toggle_visibility();
                false
            }
            KeyCode::Char(c) if !ctrl => {
                self.clamp_cursor(value);
                value.insert(self.byte_index(value), c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                self.clamp_cursor(value);
                if self.cursor > 0 {
                    self.cursor -= 1;
                    value.remove(self.byte_index(value));
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                self.clamp_cursor(value);
                if self.cursor < value.chars().count() {
                    value.remove(self.byte_index(value));
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(value.chars().count());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = value.chars().count();
                false
            }
            _ => false,
        }
    }

    /// Rows needed: label + input block + helper/error line.
    pub fn height(&self) -> u16 {
        let input = match (self.variant, self.size) {
            (TextFieldVariant::Ghost, _) => 2,
            (_, TextFieldSize::Lg) => 5,
            _ => 3,
        };
        1 + input + 1
    }

    /// Render label, input, and helper/error line into `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, value: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        // Label line
        let label_style = if self.is_focused {
            Styles::title()
        } else {
            Styles::default().add_modifier(Modifier::BOLD)
        };
        f.render_widget(Paragraph::new(self.label.as_str()).style(label_style), chunks[0]);

        // Input block by variant
        let border_style = if self.disabled {
            Styles::inactive_border()
        } else if self.invalid {
            Styles::error()
        } else if self.is_focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let block = match self.variant {
            TextFieldVariant::Outlined => Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
            TextFieldVariant::Ghost => Block::default()
                .borders(Borders::BOTTOM)
                .border_style(border_style),
            TextFieldVariant::Filled => Block::default()
                .style(Styles::default().bg(ratatui::style::Color::DarkGray)),
        };
        let block = match self.size {
            TextFieldSize::Sm => block,
            TextFieldSize::Md => block.padding(Padding::horizontal(1)),
            TextFieldSize::Lg => block.padding(Padding::new(2, 2, 1, 1)),
        };

        let masked;
        let shown: &str = if value.is_empty() {
            &self.placeholder
        } else if self.is_password && !self.show_password {
            masked = "•".repeat(value.chars().count());
            &masked
        } else {
            value
        };

        let text_style = if self.disabled || value.is_empty() {
            Styles::inactive()
        } else {
            Styles::default()
        };

        let inner = block.inner(chunks[1]);
        let mut spans = vec![Span::styled(shown.to_string(), text_style)];
        for indicator in self.indicators(value) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(indicator, Styles::info()));
        }
        let line = Line::from(spans);

        f.render_widget(block, chunks[1]);
        f.render_widget(Paragraph::new(line), inner);

        // Cursor only on the focused, enabled field
        if self.is_focused && !self.disabled {
            let prefix: String = if self.is_password && !self.show_password {
                "•".repeat(self.cursor.min(value.chars().count()))
            } else {
                value.chars().take(self.cursor).collect()
            };
            let cursor_x = inner.x + UnicodeWidthStr::width(prefix.as_str()) as u16;
            if cursor_x < inner.x + inner.width {
                f.set_cursor(cursor_x, inner.y);
            }
        }

        if let Some((text, style)) = self.footer_text() {
            f.render_widget(Paragraph::new(text.to_string()).style(style), chunks[2]);
        }
    }

    /// Footer line below the input: the error message wins when the field
    /// is invalid and a message is set, otherwise helper text. Never both.
    pub fn footer_text(&self) -> Option<(&str, Style)> {
        if self.invalid {
            if let Some(message) = self.error_message.as_deref() {
                return Some((message, Styles::error()));
            }
        }
        self.helper_text
            .as_deref()
            .map(|text| (text, Styles::inactive()))
    }

    /// Affordance markers rendered after the value
    fn indicators(&self, value: &str) -> Vec<String> {
        let mut out = Vec::new();
        if self.clearable && !value.is_empty() && !self.disabled {
            out.push("[^U clear]".to_string());
        }
        if self.is_password {
            out.push(if self.show_password {
                "[^R hide]".to_string()
            } else {
                "[^R show]".to_string()
            });
        }
        out
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }

    /// Byte offset of the cursor's char position
    fn byte_index(&self, value: &str) -> usize {
        value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_caller_value() {
        let mut field = TextField::new("Name");
        let mut value = String::new();

        assert!(field.handle_key(press(KeyCode::Char('h')), &mut value));
        assert!(field.handle_key(press(KeyCode::Char('i')), &mut value));
        assert_eq!(value, "hi");

        assert!(field.handle_key(press(KeyCode::Backspace), &mut value));
        assert_eq!(value, "h");
    }

    #[test]
    fn test_cursor_insertion_in_middle() {
        let mut field = TextField::new("Name");
        let mut value = String::from("ac");
        field.handle_key(press(KeyCode::End), &mut value);
        field.handle_key(press(KeyCode::Left), &mut value);
        field.handle_key(press(KeyCode::Char('b')), &mut value);
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_clear_requires_clearable_enabled_and_non_empty() {
        let mut plain = TextField::new("Name");
        let mut value = String::from("x");
        assert!(!plain.handle_key(ctrl('u'), &mut value));
        assert_eq!(value, "x");

        let mut clearable = TextField::new("Name").clearable();
        assert!(clearable.handle_key(ctrl('u'), &mut value));
        assert_eq!(value, "");
        // Empty already: no change reported.
        assert!(!clearable.handle_key(ctrl('u'), &mut value));

        let mut disabled = TextField::new("Name").clearable().disabled(true);
        let mut value = String::from("x");
        assert!(!disabled.handle_key(ctrl('u'), &mut value));
        assert_eq!(value, "x");
    }

    #[test]
    fn test_disabled_field_ignores_edits() {
        let mut field = TextField::new("Name").disabled(true);
        let mut value = String::from("keep");
        assert!(!field.handle_key(press(KeyCode::Char('x')), &mut value));
        assert!(!field.handle_key(press(KeyCode::Backspace), &mut value));
        assert_eq!(value, "keep");
    }

    #[test]
    fn test_password_toggle_never_touches_value() {
        let mut field = TextField::new("Password").password();
        let mut value = String::from("secret");

        assert!(!field.show_password());
        assert!(!field.handle_key(ctrl('r'), &mut value));
        assert!(field.show_password());
        assert_eq!(value, "secret");

        field.handle_key(ctrl('r'), &mut value);
        assert!(!field.show_password());
        assert_eq!(value, "secret");
    }

    #[test]
    fn test_visibility_toggle_is_password_only() {
        let mut field = TextField::new("Name");
        field.toggle_visibility();
        assert!(!field.show_password());
    }

    #[test]
    fn test_invalid_is_caller_driven() {
        let mut field = TextField::new("Age").with_error_message("Numbers only");
        assert!(!field.invalid);
        field.set_invalid(true);
        assert!(field.invalid);
        field.set_invalid(false);
        assert!(!field.invalid);
    }

    #[test]
    fn test_footer_shows_error_only_when_invalid_with_message() {
        let mut field = TextField::new("Age")
            .with_helper_text("Enter numbers only")
            .with_error_message("Age must contain digits only");

        let (text, style) = field.footer_text().unwrap();
        assert_eq!(text, "Enter numbers only");
        assert_eq!(style, Styles::inactive());

        field.set_invalid(true);
        let (text, style) = field.footer_text().unwrap();
        assert_eq!(text, "Age must contain digits only");
        assert_eq!(style, Styles::error());

        field.set_invalid(false);
        let (text, _) = field.footer_text().unwrap();
        assert_eq!(text, "Enter numbers only");
    }

    #[test]
    fn test_footer_falls_back_to_helper_when_invalid_without_message() {
        let mut field = TextField::new("Name").with_helper_text("Shown to others");
        field.set_invalid(true);
        let (text, style) = field.footer_text().unwrap();
        assert_eq!(text, "Shown to others");
        assert_eq!(style, Styles::inactive());
    }

    #[test]
    fn test_footer_absent_when_nothing_to_show() {
        let mut field = TextField::new("Name");
        assert!(field.footer_text().is_none());
        field.set_invalid(true);
        assert!(field.footer_text().is_none());
    }

    #[test]
    fn test_indicators_reflect_affordances() {
        let field = TextField::new("Name").clearable();
        assert!(field.indicators("abc").iter().any(|i| i.contains("clear")));
        assert!(field.indicators("").is_empty());

        let mut pw = TextField::new("Password").password();
        assert!(pw.indicators("").iter().any(|i| i.contains("show")));
        pw.toggle_visibility();
        assert!(pw.indicators("").iter().any(|i| i.contains("hide")));
    }
}
