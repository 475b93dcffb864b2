use crate::domain::models::ColorPalette;
use ratatui::widgets::TableState;

/// Selection state over the palette list: which row, and which swatch
/// within that row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    pub table_state: TableState,
    pub swatch_index: usize,
}

impl ResultsState {
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn select_first(&mut self) {
        self.table_state.select(Some(0));
        self.swatch_index = 0;
    }

    pub fn clear(&mut self) {
        self.table_state.select(None);
        self.swatch_index = 0;
    }

    /// Hex string under the cursor, if any.
    #[must_use]
    pub fn selected_hex<'a>(&self, palettes: &'a [ColorPalette]) -> Option<&'a str> {
        let row = palettes.get(self.selected_row()?)?;
        row.colors.get(self.swatch_index).map(String::as_str)
    }

    /// Keep the swatch cursor inside the current row after the row (or the
    /// palette list) changes.
    pub fn clamp_swatch(&mut self, palettes: &[ColorPalette]) {
        let len = self
            .selected_row()
            .and_then(|i| palettes.get(i))
            .map_or(0, |p| p.colors.len());
        if len == 0 {
            self.swatch_index = 0;
        } else {
            self.swatch_index = self.swatch_index.min(len - 1);
        }
    }
}
