use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Enter a word like 'sunset'...";

/// Single-line search buffer. Wraps `TextArea` to give `AppState` the
/// Clone/Debug/PartialEq it needs and to keep the placeholder applied
/// whenever the contents are replaced.
pub struct SearchInput<'a>(pub TextArea<'a>);

fn make_area(text: &str) -> TextArea<'static> {
    let mut area = if text.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(vec![text.to_string()])
    };
    area.set_placeholder_text(PLACEHOLDER);
    area.set_cursor_line_style(Style::default());
    area.move_cursor(CursorMove::End);
    area
}

impl SearchInput<'_> {
    /// Trimmed, single-line view of the buffer.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join(" ").trim().to_string()
    }

    pub fn set_text(&mut self, text: &str) {
        self.0 = make_area(text);
    }
}

impl Default for SearchInput<'_> {
    fn default() -> Self {
        Self(make_area(""))
    }
}

impl Clone for SearchInput<'_> {
    fn clone(&self) -> Self {
        let mut area = make_area(&self.0.lines().join("\n"));
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for SearchInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchInput")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for SearchInput<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchInput<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
