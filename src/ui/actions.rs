use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, BrowseOutcome};

impl App<'_> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(self.outcome(false)));
		}

		match key.code {
			KeyCode::Esc => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Enter => {
				return Ok(Some(self.outcome(true)));
			}
			KeyCode::Left => {
				self.move_selection(-1);
			}
			KeyCode::Right => {
				self.move_selection(1);
			}
			KeyCode::Up => {
				self.move_selection(-(self.grid_columns as isize));
			}
			KeyCode::Down => {
				self.move_selection(self.grid_columns as isize);
			}
			_ => {
				if self.search_input.input(key) {
					// No debounce: the filter is recomputed on every edit.
					self.refresh_filter();
				}
			}
		}
		Ok(None)
	}

	fn outcome(&self, accepted: bool) -> BrowseOutcome {
		BrowseOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			selection: if accepted {
				self.selected_country().cloned()
			} else {
				None
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;
	use crate::catalog::{Country, CountryFlags, CountryName};
	use crate::ui::loader::FetchUpdate;

	fn country(name: &str, cca3: &str) -> Country {
		Country {
			name: CountryName {
				common: name.to_string(),
			},
			flags: CountryFlags {
				png: String::new(),
			},
			cca3: cca3.to_string(),
			flag: None,
		}
	}

	fn loaded_app() -> App<'static> {
		let mut app = App::new(String::new());
		let (tx, rx) = mpsc::channel();
		app.set_fetch_updates(rx);
		tx.send(FetchUpdate::Loaded(vec![
			country("France", "FRA"),
			country("Germany", "DEU"),
			country("Iceland", "ISL"),
		]))
		.unwrap();
		app.pump_fetch_update();
		app
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn escape_cancels_without_a_selection() {
		let mut app = loaded_app();
		let outcome = app.handle_key(key(KeyCode::Esc)).unwrap().unwrap();
		assert!(!outcome.accepted);
		assert!(outcome.selection.is_none());
	}

	#[test]
	fn ctrl_c_cancels_like_escape() {
		let mut app = loaded_app();
		let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
		let outcome = app.handle_key(event).unwrap().unwrap();
		assert!(!outcome.accepted);
	}

	#[test]
	fn enter_accepts_the_selected_country() {
		let mut app = loaded_app();
		app.handle_key(key(KeyCode::Right)).unwrap();
		let outcome = app.handle_key(key(KeyCode::Enter)).unwrap().unwrap();
		assert!(outcome.accepted);
		assert_eq!(
			outcome.selection.map(|country| country.cca3),
			Some("DEU".to_string())
		);
	}

	#[test]
	fn typing_updates_the_query_and_filter() {
		let mut app = loaded_app();
		assert!(app.handle_key(key(KeyCode::Char('i'))).unwrap().is_none());
		app.handle_key(key(KeyCode::Char('c'))).unwrap();
		assert_eq!(app.search_input.text(), "ic");
		assert_eq!(app.filtered_len(), 1);

		let outcome = app.handle_key(key(KeyCode::Enter)).unwrap().unwrap();
		assert_eq!(outcome.query, "ic");
		assert_eq!(
			outcome.selection.map(|country| country.cca3),
			Some("ISL".to_string())
		);
	}

	#[test]
	fn vertical_movement_uses_the_grid_columns() {
		let mut app = loaded_app();
		app.grid_columns = 2;
		app.handle_key(key(KeyCode::Down)).unwrap();
		assert_eq!(app.selected, Some(2));
		app.handle_key(key(KeyCode::Up)).unwrap();
		assert_eq!(app.selected, Some(0));
	}
}
