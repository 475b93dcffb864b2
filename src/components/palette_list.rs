use crate::domain::color::parse_hex;
use crate::domain::models::ColorPalette;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Cell, Row, StatefulWidget, Table, TableState},
};

pub const SWATCH_WIDTH: u16 = 6;
pub const SWATCH_GAP: u16 = 1;
// Width of the selection-marker column the swatches are indented by.
pub const ROW_PAD: u16 = 1;

/// Rows are two swatch lines plus a trailing gap; the selected row gains a
/// label line naming the swatch under the cursor. Click resolution in the
/// input layer walks rows with the same function.
pub fn calculate_row_height(_palette: &ColorPalette, is_selected: bool) -> u16 {
    if is_selected {
        4
    } else {
        3
    }
}

pub struct PaletteList<'a> {
    pub palettes: &'a [ColorPalette],
    pub swatch_index: usize,
    pub theme: &'a Theme,
}

impl StatefulWidget for PaletteList<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let mut rows: Vec<Row> = Vec::new();

        for (i, palette) in self.palettes.iter().enumerate() {
            let is_selected = state.selected() == Some(i);
            let height = calculate_row_height(palette, is_selected);
            let mut lines: Vec<Line> = Vec::new();

            let marker = if is_selected {
                Span::styled("▍", self.theme.list_selected)
            } else {
                Span::raw(" ")
            };

            for _ in 0..2 {
                let mut spans = vec![marker.clone()];
                for hex in &palette.colors {
                    let fill = parse_hex(hex).to_color();
                    spans.push(Span::styled(
                        " ".repeat(SWATCH_WIDTH as usize),
                        Style::default().bg(fill),
                    ));
                    spans.push(Span::raw(" ".repeat(SWATCH_GAP as usize)));
                }
                lines.push(Line::from(spans));
            }

            if is_selected {
                let label = palette.colors.get(self.swatch_index).map(|hex| {
                    let indent =
                        ROW_PAD as usize + self.swatch_index * (SWATCH_WIDTH + SWATCH_GAP) as usize;
                    Line::from(vec![
                        Span::raw(" ".repeat(indent)),
                        Span::styled(format!(" {hex} "), self.theme.hex_label),
                        Span::styled(
                            format!("  {}/{}", self.swatch_index + 1, palette.colors.len()),
                            self.theme.dimmed,
                        ),
                    ])
                });
                lines.push(label.unwrap_or_else(|| Line::from("")));
            }

            lines.push(Line::from(""));
            rows.push(Row::new([Cell::from(Text::from(lines))]).height(height));
        }

        let table = Table::new(rows, [Constraint::Percentage(100)]).column_spacing(0);
        StatefulWidget::render(table, area, buf, state);
    }
}

/// Swatch index at horizontal offset `col` (relative to the list's inner
/// area), or `None` when the offset lands in a gap or past the row's end.
#[must_use]
pub fn swatch_at_column(palette: &ColorPalette, col: usize) -> Option<usize> {
    let col = col.checked_sub(ROW_PAD as usize)?;
    let stride = (SWATCH_WIDTH + SWATCH_GAP) as usize;
    let idx = col / stride;
    if col % stride < SWATCH_WIDTH as usize && idx < palette.colors.len() {
        Some(idx)
    } else {
        None
    }
}
