use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, ScrollbarState};

use super::components::cards::{clamp_scroll, columns_for_width, rows_for, visible_rows};
use super::components::{
	CardGridContext, InputContext, ScrollMetrics, StatusState, render_cards, render_input,
	render_scrollbar,
};
use super::state::{App, LoadPhase};

/// Static failure message. Fetch failures are terminal for the run; there is
/// no retry affordance.
pub(crate) const FAILURE_MESSAGE: &str = "Failed to load countries. Please try again later.";
pub(crate) const LOADING_MESSAGE: &str = "Loading...";
pub(crate) const EMPTY_MESSAGE: &str = "No countries found.";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		let (status_text, status_complete) = self.status_text();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			input_title: &self.input_title,
			area: layout[0],
			theme: &self.theme,
		};
		let status_state = StatusState {
			status_text: &status_text,
			status_complete,
			throbber_state: &self.throbber_state,
		};
		render_input(frame, input_ctx, status_state);

		let results_area = layout[1];

		// States in precedence order: loading, failed, empty, populated.
		match self.phase {
			LoadPhase::Loading => {
				render_centered_message(
					frame,
					results_area,
					LOADING_MESSAGE,
					self.theme.empty_style(),
				);
			}
			LoadPhase::Failed => {
				render_centered_message(
					frame,
					results_area,
					FAILURE_MESSAGE,
					self.theme.highlight_style(),
				);
			}
			LoadPhase::Ready if self.filtered_len() == 0 => {
				render_centered_message(
					frame,
					results_area,
					EMPTY_MESSAGE,
					self.theme.empty_style(),
				);
			}
			LoadPhase::Ready => self.render_grid(frame, results_area),
		}
	}

	fn render_grid(&mut self, frame: &mut Frame, area: Rect) {
		let visible = visible_rows(area.height);
		let mut columns = columns_for_width(area.width);
		let mut total_rows = rows_for(self.filtered_len(), columns);
		let mut content_area = area;

		let overflows = total_rows > visible;
		if overflows {
			// Reserve the right edge for the scrollbar, then redo the
			// geometry for the narrower area.
			content_area.width = content_area.width.saturating_sub(1);
			columns = columns_for_width(content_area.width);
			total_rows = rows_for(self.filtered_len(), columns);
		}

		let selected_row = self.selected.map(|position| position / columns.max(1));
		self.scroll_row = clamp_scroll(self.scroll_row, selected_row, total_rows, visible);
		self.grid_columns = columns;

		let ctx = CardGridContext {
			countries: &self.countries,
			filtered: &self.filtered,
			selected: self.selected,
			scroll_row: self.scroll_row,
			theme: &self.theme,
		};
		render_cards(frame, content_area, ctx);

		let metrics = ScrollMetrics::compute(total_rows, visible);
		if metrics.needs_scrollbar {
			let mut state = ScrollbarState::new(metrics.content_length)
				.position(metrics.scrollbar_position(self.scroll_row));
			render_scrollbar(frame, area, &mut state, &self.theme);
		}
	}
}

fn render_centered_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	if area.height == 0 || area.width == 0 {
		return;
	}
	let message_area = Rect {
		x: area.x,
		y: area.y + area.height / 2,
		width: area.width,
		height: 1,
	};
	let paragraph = Paragraph::new(message)
		.style(style)
		.alignment(Alignment::Center);
	frame.render_widget(paragraph, message_area);
}
