//! Client-side data pipeline: filter, sort, and selection over the
//! in-memory country dataset.
//!
//! The derived view is a pure function of (dataset, filter term, sort
//! directive) and is recomputed on demand; the pipeline never keeps a
//! mutable copy of the filtered rows. Selection membership is keyed by
//! display name and persists across filter changes, but select-all only
//! operates over the identifiers currently visible after filtering.

use std::collections::HashSet;

use crate::models::{Country, SortDirection, SortDirective, SortKey};

#[derive(Debug, Default)]
pub struct DataPipeline {
    countries: Vec<Country>,
    filter: String,
    sort: Option<SortDirective>,
    selected: HashSet<String>,
}

impl DataPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded dataset. Filter, sort, and selection are
    /// deliberately left alone; `reset` is the explicit way to clear them.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
    }

    /// Clear all ephemeral UI state (filter, sort, selection).
    pub fn reset(&mut self) {
        self.filter.clear();
        self.sort = None;
        self.selected.clear();
    }

    /// Whether any dataset has been loaded at all. An empty dataset and an
    /// empty filtered view are distinct user-visible states.
    pub fn has_data(&self) -> bool {
        !self.countries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.countries.len()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Replace the filter term. Empty matches everything; matching is a
    /// case-insensitive substring test against the display name only.
    pub fn set_filter(&mut self, term: &str) {
        if self.filter != term {
            self.filter = term.to_string();
        }
    }

    pub fn sort(&self) -> Option<SortDirective> {
        self.sort
    }

    /// Toggle sorting on `key`: same key flips direction, a new key starts
    /// over ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(match self.sort {
            Some(directive) if directive.key == key => SortDirective {
                key,
                direction: directive.direction.flipped(),
            },
            _ => SortDirective {
                key,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Compute the derived view: filter preserving input order, then a
    /// stable sort by the active directive. Ties keep their relative input
    /// order in both directions.
    pub fn view(&self) -> Vec<&Country> {
        let needle = self.filter.to_lowercase();
        let mut rows: Vec<&Country> = self
            .countries
            .iter()
            .filter(|c| needle.is_empty() || c.name.common.to_lowercase().contains(&needle))
            .collect();

        if let Some(directive) = self.sort {
            rows.sort_by(|a, b| {
                let ord = match directive.key {
                    SortKey::Name => a
                        .name
                        .common
                        .to_lowercase()
                        .cmp(&b.name.common.to_lowercase()),
                    SortKey::Population => a.population.cmp(&b.population),
                };
                match directive.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        rows
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Flip selection membership for a single identifier.
    pub fn toggle_select(&mut self, name: &str) {
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
    }

    /// Select or deselect everything currently visible. When the whole view
    /// is already selected, only the view's identifiers are removed;
    /// selections hidden by the filter persist either way.
    pub fn toggle_select_all(&mut self) {
        let visible: Vec<String> = self
            .view()
            .iter()
            .map(|c| c.display_name().to_string())
            .collect();
        if visible.is_empty() {
            return;
        }

        if visible.iter().all(|name| self.selected.contains(name)) {
            for name in &visible {
                self.selected.remove(name);
            }
        } else {
            self.selected.extend(visible);
        }
    }

    /// True iff the view is non-empty and every visible identifier is
    /// selected. Drives the header checkbox.
    pub fn is_all_selected(&self) -> bool {
        let view = self.view();
        !view.is_empty()
            && view
                .iter()
                .all(|c| self.selected.contains(c.display_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountryName, Flags};

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

    fn sample() -> Vec<Country> {
        vec![
            country("India", 1_400_000_000),
            country("USA", 330_000_000),
            country("Japan", 126_000_000),
        ]
    }

    fn names(view: &[&Country]) -> Vec<String> {
        view.iter().map(|c| c.display_name().to_string()).collect()
    }

    #[test]
    fn test_empty_filter_preserves_input_order() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());
        assert_eq!(names(&pipeline.view()), ["India", "USA", "Japan"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring_on_name() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());

        // "an" is a substring of "Japan" only; "India" has no "an".
        pipeline.set_filter("an");
        assert_eq!(names(&pipeline.view()), ["Japan"]);

        pipeline.set_filter("IND");
        assert_eq!(names(&pipeline.view()), ["India"]);

        pipeline.set_filter("");
        assert_eq!(pipeline.view().len(), 3);
    }

    #[test]
    fn test_empty_dataset_and_empty_view_are_distinct() {
        let mut pipeline = DataPipeline::new();
        assert!(!pipeline.has_data());
        assert!(pipeline.view().is_empty());

        pipeline.set_countries(sample());
        pipeline.set_filter("zzz");
        assert!(pipeline.has_data());
        assert!(pipeline.view().is_empty());
    }

    #[test]
    fn test_population_sort_ascending() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());
        pipeline.toggle_sort(SortKey::Population);
        assert_eq!(names(&pipeline.view()), ["Japan", "USA", "India"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(vec![
            country("angola", 1),
            country("Brazil", 2),
            country("Albania", 3),
        ]);
        pipeline.toggle_sort(SortKey::Name);
        assert_eq!(names(&pipeline.view()), ["Albania", "angola", "Brazil"]);
    }

    #[test]
    fn test_sort_toggle_flips_direction_and_new_key_resets() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());

        pipeline.toggle_sort(SortKey::Population);
        pipeline.toggle_sort(SortKey::Population);
        let directive = pipeline.sort().unwrap();
        assert_eq!(directive.direction, SortDirection::Descending);
        assert_eq!(names(&pipeline.view()), ["India", "USA", "Japan"]);

        // Switching to a different key starts over ascending.
        pipeline.toggle_sort(SortKey::Name);
        let directive = pipeline.sort().unwrap();
        assert_eq!(directive.key, SortKey::Name);
        assert_eq!(directive.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggling_same_key_twice_restores_initial_ascending_order() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());

        pipeline.toggle_sort(SortKey::Population);
        let initial = names(&pipeline.view());
        pipeline.toggle_sort(SortKey::Population);
        pipeline.toggle_sort(SortKey::Population);
        assert_eq!(names(&pipeline.view()), initial);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys_in_both_directions() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(vec![
            country("Bravo", 5),
            country("Alpha", 5),
            country("Charlie", 5),
        ]);

        pipeline.toggle_sort(SortKey::Population);
        assert_eq!(names(&pipeline.view()), ["Bravo", "Alpha", "Charlie"]);

        pipeline.toggle_sort(SortKey::Population);
        assert_eq!(names(&pipeline.view()), ["Bravo", "Alpha", "Charlie"]);
    }

    #[test]
    fn test_toggle_select_flips_membership() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());

        pipeline.toggle_select("Japan");
        assert!(pipeline.is_selected("Japan"));
        pipeline.toggle_select("Japan");
        assert!(!pipeline.is_selected("Japan"));
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());

        pipeline.toggle_select("India");
        pipeline.set_filter("japan");
        assert!(pipeline.is_selected("India"));
        pipeline.set_filter("");
        assert!(pipeline.is_selected("India"));
    }

    #[test]
    fn test_select_all_scopes_to_filtered_view() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());

        pipeline.set_filter("an"); // Japan only
        pipeline.toggle_select_all();
        assert!(pipeline.is_selected("Japan"));
        assert!(!pipeline.is_selected("India"));
        assert!(!pipeline.is_selected("USA"));
    }

    #[test]
    fn test_clear_all_only_affects_visible_identifiers() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());

        pipeline.toggle_select("India");
        pipeline.set_filter("an"); // Japan only
        pipeline.toggle_select_all(); // selects Japan
        pipeline.toggle_select_all(); // clears Japan, India untouched
        assert!(!pipeline.is_selected("Japan"));
        assert!(pipeline.is_selected("India"));
    }

    #[test]
    fn test_toggle_select_all_twice_restores_prior_state() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());
        pipeline.toggle_select("USA");

        pipeline.toggle_select_all();
        pipeline.toggle_select_all();
        assert!(pipeline.is_selected("USA"));
        assert_eq!(pipeline.selected_count(), 1);
    }

    #[test]
    fn test_is_all_selected_requires_non_empty_view() {
        let mut pipeline = DataPipeline::new();
        assert!(!pipeline.is_all_selected());

        pipeline.set_countries(sample());
        assert!(!pipeline.is_all_selected());

        pipeline.toggle_select_all();
        assert!(pipeline.is_all_selected());

        pipeline.set_filter("no match");
        assert!(!pipeline.is_all_selected());
        // Select-all over an empty view is a no-op.
        pipeline.toggle_select_all();
        assert_eq!(pipeline.selected_count(), 3);
    }

    #[test]
    fn test_new_data_keeps_ui_state_until_explicit_reset() {
        let mut pipeline = DataPipeline::new();
        pipeline.set_countries(sample());
        pipeline.set_filter("an");
        pipeline.toggle_sort(SortKey::Name);
        pipeline.toggle_select("Japan");

        pipeline.set_countries(sample());
        assert_eq!(pipeline.filter(), "an");
        assert!(pipeline.sort().is_some());
        assert!(pipeline.is_selected("Japan"));

        pipeline.reset();
        assert_eq!(pipeline.filter(), "");
        assert!(pipeline.sort().is_none());
        assert_eq!(pipeline.selected_count(), 0);
    }
}
