//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// The query text box rendered in the input row.
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    /// Create the input primed with an initial query, cursor at the end.
    pub fn new(initial: String) -> Self {
        let mut textarea = TextArea::from([initial]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        textarea.set_placeholder_text("Search for countries...");
        textarea.move_cursor(tui_textarea::CursorMove::End);
        Self { textarea }
    }

    /// Current query text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Forward a key event to the textarea. Returns `true` when the text
    /// changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Render the textarea into the given area.
    pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}
