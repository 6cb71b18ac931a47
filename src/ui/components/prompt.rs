//! Input row: prompt label, query textarea, right-aligned status.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the input area.
pub(crate) struct InputContext<'a> {
    pub search_input: &'a SearchInput<'a>,
    pub input_title: &'a Option<String>,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Status information for the right-hand side of the input row.
pub(crate) struct StatusState<'a> {
    pub status_text: &'a str,
    /// When false a spinner is drawn ahead of the text.
    pub status_complete: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render the input row with the status cell at the right.
pub(crate) fn render_input(
    frame: &mut ratatui::Frame,
    input: InputContext<'_>,
    status: StatusState<'_>,
) {
    let InputContext {
        search_input,
        input_title,
        area,
        theme,
    } = input;

    let prompt = input_title.as_deref().unwrap_or("");
    let prompt_width = calculate_prompt_width(prompt);

    let constraints = layout_constraints(!prompt.is_empty(), prompt_width);
    let horizontal = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    if !prompt.is_empty() {
        let prompt_text = format!("{prompt} > ");
        let prompt_widget =
            ratatui::widgets::Paragraph::new(prompt_text).style(theme.prompt_style());
        frame.render_widget(prompt_widget, horizontal[0]);
    }

    let input_index = if prompt.is_empty() { 0 } else { 1 };
    let input_area = horizontal[input_index];
    search_input.render_textarea(frame, input_area);
    render_status(frame, input_area, status, theme);
}

fn calculate_prompt_width(prompt: &str) -> u16 {
    if prompt.is_empty() {
        0
    } else {
        prompt.chars().count() as u16 + 3
    }
}

fn layout_constraints(has_prompt: bool, prompt_width: u16) -> Vec<ratatui::layout::Constraint> {
    if has_prompt {
        vec![
            ratatui::layout::Constraint::Length(prompt_width),
            ratatui::layout::Constraint::Min(1),
        ]
    } else {
        vec![ratatui::layout::Constraint::Min(1)]
    }
}

fn render_status(frame: &mut ratatui::Frame, area: Rect, status: StatusState<'_>, theme: &Theme) {
    let StatusState {
        status_text,
        status_complete,
        throbber_state,
    } = status;

    if area.width == 0 || area.height == 0 || status_text.is_empty() {
        return;
    }

    let muted_style = theme.empty_style();
    let label_span = Span::styled(status_text.to_string(), muted_style);
    let mut line = Line::default();
    if !status_complete {
        let spinner = Throbber::default()
            .style(muted_style)
            .throbber_style(muted_style);
        line.spans.push(spinner.to_symbol_span(throbber_state));
    }
    line.spans.push(label_span);

    let line_width = line.width() as u16;
    if line_width == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    let mut start_x = if line_width >= area.width {
        area.left()
    } else {
        area.right().saturating_sub(line_width)
    };

    // Never overwrite the query text: find the last occupied input cell and
    // keep two columns of padding after it.
    let input_row = area.top();
    let mut last_char_x: Option<u16> = None;
    for x in area.left()..area.right() {
        if let Some(cell) = buffer.cell((x, input_row))
            && !cell.symbol().trim().is_empty()
        {
            last_char_x = Some(x);
        }
    }

    if let Some(last_x) = last_char_x {
        let min_start = last_x.saturating_add(3);
        if min_start > start_x {
            start_x = min_start;
        }
    }

    if start_x >= area.right() {
        return;
    }

    let max_width = area
        .right()
        .saturating_sub(start_x)
        .min(line_width)
        .min(area.width);

    if max_width == 0 {
        return;
    }

    buffer.set_line(start_x, input_row, &line, max_width);
}
