mod builtins;

use ratatui::style::{Color, Style};

pub use builtins::{LIGHT, SLATE, SOLARIZED};

/// A theme containing styles for the UI surfaces.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for header elements, including card borders.
	pub header: Style,
	/// Style for the selected card.
	pub card_highlight: Style,
	/// Style for prompt elements.
	pub prompt: Style,
	/// Style for empty and loading states.
	pub empty: Style,
	/// Style for emphasized text such as the failure message.
	pub highlight: Style,
}

impl Theme {
	/// Returns the style for the search prompt label.
	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	/// Returns the muted style used for status text and empty states.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Returns the style for card borders and headers.
	#[must_use]
	pub fn header_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Returns the border style for the selected card.
	#[must_use]
	pub fn card_highlight_style(&self) -> Style {
		self.card_highlight
	}

	/// Returns the style for emphasized messages.
	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Return the theme used when the configuration does not select one.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Names of the built-in themes, in presentation order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::DEFINITIONS
		.iter()
		.map(|(name, _)| *name)
		.collect()
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	builtins::DEFINITIONS
		.iter()
		.find(|(candidate, _)| *candidate == wanted)
		.map(|(_, theme)| *theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_builtin_is_resolvable_by_name() {
		for name in names() {
			assert!(by_name(name).is_some(), "theme {name} should resolve");
		}
	}

	#[test]
	fn lookup_ignores_case_and_whitespace() {
		assert!(by_name(" Slate ").is_some());
		assert!(by_name("SOLARIZED").is_some());
	}

	#[test]
	fn unknown_names_resolve_to_none() {
		assert!(by_name("neon").is_none());
	}
}
