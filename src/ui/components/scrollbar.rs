//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::ui::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMetrics {
	/// Total number of rows in the content.
	pub content_length: usize,
	/// Number of rows visible in the viewport.
	pub viewport_len: usize,
	/// Maximum scroll position.
	pub max_scroll: usize,
	/// Whether content overflows and needs a scrollbar.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Compute scroll metrics from content length and viewport height.
	///
	/// Returns default (empty) metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		let max_scroll = content_length.saturating_sub(viewport_len);
		let needs_scrollbar = content_length > viewport_len;

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar,
		}
	}

	/// Convert a scroll position to a scrollbar position for rendering.
	#[must_use]
	pub fn scrollbar_position(&self, scroll: usize) -> usize {
		if self.max_scroll == 0 || self.content_length == 0 {
			0
		} else {
			scroll.saturating_mul(self.content_length.saturating_sub(1)) / self.max_scroll
		}
	}
}

/// Render a themed vertical scrollbar on the right edge of `area` and return
/// the remaining content area.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset)));

	let sb_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};

	frame.render_stateful_widget(scrollbar, sb_area, scrollbar_state);

	Rect {
		x: area.x,
		y: area.y,
		width: area.width.saturating_sub(1),
		height: area.height,
	}
}
