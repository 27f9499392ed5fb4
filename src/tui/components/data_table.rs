//! Country table component rendering the data pipeline's derived view

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Country, SortKey};
use crate::pipeline::DataPipeline;
use crate::tui::ui::{pad_cell, Styles};

/// Configuration for country table display
#[derive(Debug, Clone)]
pub struct CountryTableConfig {
    pub title: String,
    pub name_width: usize,
    pub capital_width: usize,
    pub population_width: usize,
}

impl Default for CountryTableConfig {
    fn default() -> Self {
        Self {
            title: "Countries".to_string(),
            name_width: 24,
            capital_width: 18,
            population_width: 14,
        }
    }
}

/// Renders the pipeline's current view as checkbox rows with sortable
/// column headers. Owns only the row cursor; all data state lives in the
/// pipeline.
pub struct CountryTable {
    pub state: ListState,
    pub config: CountryTableConfig,
}

impl CountryTable {
    pub fn new(config: CountryTableConfig) -> Self {
        Self {
            state: ListState::default(),
            config,
        }
    }

    /// Identifier under the cursor, if any
    pub fn cursor_name<'a>(&self, view: &[&'a Country]) -> Option<&'a str> {
        self.state
            .selected()
            .and_then(|i| view.get(i))
            .map(|c| c.display_name())
    }

    pub fn navigate_up(&mut self, view_len: usize) {
        if view_len == 0 {
            self.state.select(None);
            return;
        }
        let selected = self.state.selected().unwrap_or(0);
        let new_selected = if selected == 0 {
            view_len - 1
        } else {
            selected - 1
        };
        self.state.select(Some(new_selected));
    }

    pub fn navigate_down(&mut self, view_len: usize) {
        if view_len == 0 {
            self.state.select(None);
            return;
        }
        let selected = match self.state.selected() {
            Some(i) => (i + 1) % view_len,
            None => 0,
        };
        self.state.select(Some(selected));
    }

    /// Keep the cursor inside the current view after filter/sort changes.
    pub fn clamp_cursor(&mut self, view_len: usize) {
        match self.state.selected() {
            _ if view_len == 0 => self.state.select(None),
            None => self.state.select(Some(0)),
            Some(i) if i >= view_len => self.state.select(Some(view_len - 1)),
            Some(_) => {}
        }
    }

    /// Render the table. The loading flag suppresses the body entirely; an
    /// unloaded dataset and an empty filtered view show distinct messages.
    pub fn render(&mut self, f: &mut Frame, area: Rect, pipeline: &DataPipeline, loading: bool) {
        if loading {
            let loading_msg = Paragraph::new("Loading data...")
                .style(Styles::inactive())
                .block(self.block(pipeline, 0));
            f.render_widget(loading_msg, area);
            return;
        }

        if !pipeline.has_data() {
            let empty_msg = Paragraph::new("No data available")
                .style(Styles::inactive())
                .block(self.block(pipeline, 0));
            f.render_widget(empty_msg, area);
            return;
        }

        let view = pipeline.view();
        self.clamp_cursor(view.len());

        let mut items = vec![ListItem::new(self.header_line(pipeline))];

        if view.is_empty() {
            items.push(ListItem::new(
                Line::from(Span::styled("No matching countries", Styles::inactive())),
            ));
        } else {
            for (i, country) in view.iter().enumerate() {
                let style = if Some(i) == self.state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };
                items.push(ListItem::new(self.row_line(pipeline, country, style)));
            }
        }

        let list = List::new(items).block(self.block(pipeline, view.len()));
        f.render_widget(list, area);
    }

    fn block(&self, pipeline: &DataPipeline, shown: usize) -> Block<'static> {
        let title = if pipeline.has_data() {
            format!(
                "{} ({}/{} shown, {} selected)",
                self.config.title,
                shown,
                pipeline.total(),
                pipeline.selected_count()
            )
        } else {
            self.config.title.clone()
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Styles::active_border())
    }

    /// Column header with the select-all checkbox and sort indicators on
    /// the active key only.
    fn header_line(&self, pipeline: &DataPipeline) -> Line<'static> {
        let all_box = if pipeline.is_all_selected() {
            "[x]"
        } else {
            "[ ]"
        };

        let column = |key: SortKey, width: usize| {
            let label = match pipeline.sort() {
                Some(directive) if directive.key == key => {
                    format!("{} {}", key.as_str(), directive.direction.glyph())
                }
                _ => key.as_str().to_string(),
            };
            pad_cell(&label, width)
        };

        Line::from(vec![
            Span::styled(format!("{} ", all_box), Styles::title()),
            Span::styled(column(SortKey::Name, self.config.name_width), Styles::title()),
            Span::styled(" | ", Styles::title()),
            Span::styled(
                pad_cell("Capital", self.config.capital_width),
                Styles::title(),
            ),
            Span::styled(" | ", Styles::title()),
            Span::styled(
                column(SortKey::Population, self.config.population_width),
                Styles::title(),
            ),
            Span::styled(" | ", Styles::title()),
            Span::styled("Flag", Styles::title()),
        ])
    }

    fn row_line(&self, pipeline: &DataPipeline, country: &Country, style: Style) -> Line<'static> {
        let checkbox = if pipeline.is_selected(country.display_name()) {
            "[x]"
        } else {
            "[ ]"
        };

        Line::from(vec![
            Span::styled(format!("{} ", checkbox), style),
            Span::styled(
                pad_cell(country.display_name(), self.config.name_width),
                style,
            ),
            Span::styled(" | ", style),
            Span::styled(
                pad_cell(country.capital_display(), self.config.capital_width),
                style,
            ),
            Span::styled(" | ", style),
            Span::styled(
                pad_cell(
                    &country.population.to_string(),
                    self.config.population_width,
                ),
                style,
            ),
            Span::styled(" | ", style),
            // Image reference rendered as-is, no validation.
            Span::styled(country.flags.png.clone(), style),
        ])
    }
}
