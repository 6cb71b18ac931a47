//! Core state container for the terminal application.
//!
//! The [`App`] owns the loaded country list, the query input, the filtered
//! view over the list, and the card-grid selection. All mutation happens on
//! the UI thread, driven by fetch settlement and key events.

use std::sync::mpsc::{Receiver, TryRecvError};

use throbber_widgets_tui::ThrobberState;

use super::input::SearchInput;
use super::loader::FetchUpdate;
use super::style::Theme;
use crate::catalog::{Country, filter_countries};

/// The mutually exclusive rendering modes of the fetch lifecycle.
///
/// Exactly one of these is current at any time; the empty-results state is
/// derived from `Ready` plus an empty filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Failed,
    Ready,
}

/// Result of a finished browsing session.
#[derive(Debug, Clone)]
pub struct BrowseOutcome {
    /// Whether the user accepted a selection rather than cancelling.
    pub accepted: bool,
    /// The query text at the moment the session ended.
    pub query: String,
    /// The accepted country, if any.
    pub selection: Option<Country>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
    pub(crate) phase: LoadPhase,
    /// Loaded country records in API order. Empty until the fetch settles
    /// successfully, then assigned wholesale exactly once.
    pub(crate) countries: Vec<Country>,
    pub search_input: SearchInput<'a>,
    /// Indices into `countries` matching the current query, in original order.
    pub(crate) filtered: Vec<usize>,
    /// Position of the selected card within `filtered`.
    pub(crate) selected: Option<usize>,
    /// First visible card row of the grid.
    pub(crate) scroll_row: usize,
    /// Column count of the last rendered grid; drives vertical movement.
    pub(crate) grid_columns: usize,
    pub(crate) input_title: Option<String>,
    pub theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) fetch_updates: Option<Receiver<FetchUpdate>>,
}

impl<'a> App<'a> {
    /// Construct an [`App`] in the loading phase with the given query.
    pub fn new(initial_query: String) -> Self {
        Self {
            phase: LoadPhase::Loading,
            countries: Vec::new(),
            search_input: SearchInput::new(initial_query),
            filtered: Vec::new(),
            selected: None,
            scroll_row: 0,
            grid_columns: 1,
            input_title: None,
            theme: Theme::default(),
            throbber_state: ThrobberState::default(),
            fetch_updates: None,
        }
    }

    /// Apply a new theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Attach the loader channel. One fetch per app; the receiver is dropped
    /// once the fetch settles.
    pub(crate) fn set_fetch_updates(&mut self, updates: Receiver<FetchUpdate>) {
        self.fetch_updates = Some(updates);
    }

    /// Poll the loader channel without blocking and apply a settlement if one
    /// arrived. Dropping the receiver afterwards guarantees the fetch cannot
    /// settle twice.
    pub(crate) fn pump_fetch_update(&mut self) {
        let Some(rx) = self.fetch_updates.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(update) => self.apply_fetch_update(update),
            Err(TryRecvError::Empty) => self.fetch_updates = Some(rx),
            Err(TryRecvError::Disconnected) => {
                // The worker died without settling.
                self.phase = LoadPhase::Failed;
            }
        }
    }

    fn apply_fetch_update(&mut self, update: FetchUpdate) {
        match update {
            FetchUpdate::Loaded(countries) => {
                self.countries = countries;
                self.phase = LoadPhase::Ready;
                self.refresh_filter();
            }
            FetchUpdate::Failed => {
                self.phase = LoadPhase::Failed;
            }
        }
    }

    /// Recompute the filtered list for the current query, keeping the
    /// previously selected country selected when it is still present.
    pub(crate) fn refresh_filter(&mut self) {
        let previous_id = self.selected_country().map(|country| country.cca3.clone());
        let previous_position = self.selected;

        self.filtered = filter_countries(&self.countries, self.search_input.text());

        self.selected = previous_id
            .and_then(|id| {
                self.filtered
                    .iter()
                    .position(|&index| self.countries[index].cca3 == id)
            })
            .or_else(|| {
                let len = self.filtered.len();
                previous_position.map(|position| position.min(len.saturating_sub(1)))
            });
        self.ensure_selection();
    }

    /// Keep the selection valid for the current filtered list.
    pub(crate) fn ensure_selection(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            self.selected = None;
        } else {
            match self.selected {
                None => self.selected = Some(0),
                Some(selected) if selected >= len => self.selected = Some(len - 1),
                Some(_) => {}
            }
        }
    }

    /// Number of countries matching the current query.
    #[must_use]
    pub(crate) fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The country under the cursor, if any.
    #[must_use]
    pub(crate) fn selected_country(&self) -> Option<&Country> {
        let position = self.selected?;
        let index = *self.filtered.get(position)?;
        self.countries.get(index)
    }

    /// Move the selection by a signed number of positions, clamped to the
    /// filtered list.
    pub(crate) fn move_selection(&mut self, delta: isize) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.selected = Some(next);
    }

    /// Status cell content for the input row.
    pub(crate) fn status_text(&self) -> (String, bool) {
        match self.phase {
            LoadPhase::Loading => ("fetching countries…".to_string(), false),
            LoadPhase::Failed => ("fetch failed".to_string(), true),
            LoadPhase::Ready => (
                format!("{} / {} countries", self.filtered.len(), self.countries.len()),
                true,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::catalog::{CountryFlags, CountryName};

    fn country(name: &str, cca3: &str) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
            },
            flags: CountryFlags {
                png: format!("https://flagcdn.com/w320/{}.png", cca3.to_lowercase()),
            },
            cca3: cca3.to_string(),
            flag: None,
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("France", "FRA"),
            country("Germany", "DEU"),
            country("Finland", "FIN"),
            country("Iceland", "ISL"),
        ]
    }

    fn loaded_app() -> App<'static> {
        let mut app = App::new(String::new());
        let (tx, rx) = mpsc::channel();
        app.set_fetch_updates(rx);
        tx.send(FetchUpdate::Loaded(sample())).unwrap();
        app.pump_fetch_update();
        app
    }

    fn type_query(app: &mut App, query: &str) {
        use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        // Clear the current text, then type the new query.
        loop {
            let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
            if !app.search_input.input(key) {
                break;
            }
        }
        for ch in query.chars() {
            let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            app.search_input.input(key);
        }
        app.refresh_filter();
    }

    #[test]
    fn new_app_is_loading_with_no_countries() {
        let app = App::new(String::new());
        assert_eq!(app.phase, LoadPhase::Loading);
        assert!(app.countries.is_empty());
        assert!(app.selected.is_none());
    }

    #[test]
    fn loaded_update_populates_the_full_list_in_order() {
        let app = loaded_app();
        assert_eq!(app.phase, LoadPhase::Ready);
        assert_eq!(app.filtered, vec![0, 1, 2, 3]);
        assert_eq!(app.selected, Some(0));
        // Settled fetch drops the receiver.
        assert!(app.fetch_updates.is_none());
    }

    #[test]
    fn failed_update_flips_the_phase_and_keeps_countries_empty() {
        let mut app = App::new(String::new());
        let (tx, rx) = mpsc::channel();
        app.set_fetch_updates(rx);
        tx.send(FetchUpdate::Failed).unwrap();
        app.pump_fetch_update();

        assert_eq!(app.phase, LoadPhase::Failed);
        assert!(app.countries.is_empty());
        assert_eq!(app.filtered_len(), 0);
    }

    #[test]
    fn pending_fetch_leaves_the_app_loading() {
        let mut app = App::new(String::new());
        let (_tx, rx) = mpsc::channel::<FetchUpdate>();
        app.set_fetch_updates(rx);
        app.pump_fetch_update();

        assert_eq!(app.phase, LoadPhase::Loading);
        assert!(app.fetch_updates.is_some());
    }

    #[test]
    fn dead_worker_without_settlement_counts_as_failure() {
        let mut app = App::new(String::new());
        let (tx, rx) = mpsc::channel::<FetchUpdate>();
        app.set_fetch_updates(rx);
        drop(tx);
        app.pump_fetch_update();

        assert_eq!(app.phase, LoadPhase::Failed);
    }

    #[test]
    fn selection_follows_the_country_across_filter_changes() {
        let mut app = loaded_app();
        app.selected = Some(2); // Finland

        type_query(&mut app, "lan");
        // Finland and Iceland match; Finland keeps the cursor.
        assert_eq!(app.filtered, vec![2, 3]);
        assert_eq!(app.selected, Some(0));

        type_query(&mut app, "");
        // Widening restores the full list; Finland is still selected.
        assert_eq!(app.selected_country().map(|c| c.cca3.as_str()), Some("FIN"));
    }

    #[test]
    fn selection_clamps_when_the_filtered_list_shrinks() {
        let mut app = loaded_app();
        app.selected = Some(3); // Iceland

        type_query(&mut app, "f");
        // Iceland is gone; the cursor clamps into the shorter list.
        assert_eq!(app.filtered, vec![0, 2]);
        assert_eq!(app.selected, Some(1));
    }

    #[test]
    fn empty_results_clear_the_selection() {
        let mut app = loaded_app();
        type_query(&mut app, "zzzz");
        assert!(app.filtered.is_empty());
        assert!(app.selected.is_none());

        type_query(&mut app, "ice");
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn move_selection_clamps_at_both_ends() {
        let mut app = loaded_app();
        app.move_selection(-5);
        assert_eq!(app.selected, Some(0));
        app.move_selection(2);
        assert_eq!(app.selected, Some(2));
        app.move_selection(100);
        assert_eq!(app.selected, Some(3));
    }

    #[test]
    fn status_reflects_the_phase_and_counts() {
        let mut app = loaded_app();
        type_query(&mut app, "f");
        let (text, complete) = app.status_text();
        assert_eq!(text, "2 / 4 countries");
        assert!(complete);

        let loading = App::new(String::new());
        let (text, complete) = loading.status_text();
        assert_eq!(text, "fetching countries…");
        assert!(!complete);
    }
}
