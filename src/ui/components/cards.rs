//! Flag card grid.
//!
//! One bordered card per filtered country, laid out left to right, top to
//! bottom. The grid scrolls by whole rows; the geometry helpers are pure so
//! the layout maths can be tested without a terminal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::catalog::Country;
use crate::ui::style::Theme;

/// Height of one card including its borders.
pub(crate) const CARD_HEIGHT: u16 = 4;
/// Narrowest useful card; drives the column count.
pub(crate) const CARD_MIN_WIDTH: u16 = 24;

/// Argument bundle for rendering the card grid.
pub(crate) struct CardGridContext<'a> {
    pub countries: &'a [Country],
    pub filtered: &'a [usize],
    /// Position of the selected card within `filtered`.
    pub selected: Option<usize>,
    /// First visible card row.
    pub scroll_row: usize,
    pub theme: &'a Theme,
}

/// Number of card columns that fit into the given width.
#[must_use]
pub(crate) fn columns_for_width(width: u16) -> usize {
    usize::from(width / CARD_MIN_WIDTH).max(1)
}

/// Number of whole card rows that fit into the given height.
#[must_use]
pub(crate) fn visible_rows(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT)
}

/// Total number of card rows needed for `count` cards.
#[must_use]
pub(crate) fn rows_for(count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    count.div_ceil(columns)
}

/// Clamp the scroll position so the selected row stays visible and the grid
/// never scrolls past its content.
#[must_use]
pub(crate) fn clamp_scroll(
    scroll_row: usize,
    selected_row: Option<usize>,
    total_rows: usize,
    visible: usize,
) -> usize {
    if visible == 0 || total_rows == 0 {
        return 0;
    }

    let max_scroll = total_rows.saturating_sub(visible);
    let mut scroll = scroll_row.min(max_scroll);

    if let Some(row) = selected_row {
        if row < scroll {
            scroll = row;
        } else if row >= scroll + visible {
            scroll = row + 1 - visible;
        }
    }

    scroll.min(max_scroll)
}

/// Render the visible slice of the card grid.
pub(crate) fn render_cards(frame: &mut Frame, area: Rect, ctx: CardGridContext<'_>) {
    let columns = columns_for_width(area.width);
    let visible = visible_rows(area.height);
    if columns == 0 || visible == 0 {
        return;
    }

    let column_constraints = vec![Constraint::Fill(1); columns];

    for visible_row in 0..visible {
        let row = ctx.scroll_row + visible_row;
        let first = row * columns;
        if first >= ctx.filtered.len() {
            break;
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + visible_row as u16 * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT,
        };
        let cells = Layout::horizontal(column_constraints.clone()).split(row_area);

        for (column, cell) in cells.iter().enumerate() {
            let position = first + column;
            let Some(&index) = ctx.filtered.get(position) else {
                break;
            };
            let Some(country) = ctx.countries.get(index) else {
                break;
            };
            let selected = ctx.selected == Some(position);
            render_card(frame, *cell, country, selected, ctx.theme);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, country: &Country, selected: bool, theme: &Theme) {
    let border_style = if selected {
        theme.card_highlight_style()
    } else {
        theme.header_style()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::ROUNDED)
        .border_style(border_style);

    if selected {
        // The terminal cannot draw the PNG; surface its URL on the card.
        let url = fit_to_width(&country.flags.png, usize::from(area.width.saturating_sub(4)));
        block = block.title_bottom(Line::from(Span::styled(url, theme.empty_style())));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = usize::from(inner.width.saturating_sub(1));
    let name_line = fit_to_width(
        &format!("{} {}", country.flag_glyph(), country.display_name()),
        width,
    );
    let mut lines = vec![Line::from(name_line)];
    if inner.height > 1 {
        lines.push(Line::from(Span::styled(
            country.cca3.clone(),
            theme.empty_style(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Truncate `text` to at most `width` display columns, appending an ellipsis
/// when anything was cut.
#[must_use]
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}
