use crate::domain::models::ColorPalette;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search Bar ---
    FocusSearch,                                // Move focus to the text input (/ or i)
    SearchInput(crossterm::event::KeyEvent),    // Forward a keystroke to the text area
    SubmitSearch,                               // Enter: fetch palettes for the typed word
    RecallPrev,                                 // Older recent query into the input
    RecallNext,                                 // Newer recent query (or back to blank)

    // --- Results Navigation ---
    FocusResults,                               // Move focus to the palette list
    SelectNextRow,
    SelectPrevRow,
    SelectRow(usize),                           // Direct selection (mouse)
    SelectNextSwatch,
    SelectPrevSwatch,
    SelectSwatch(usize, usize),                 // Row + swatch (mouse); also opens detail
    OpenDetail,                                 // Show the selected swatch full-screen
    CloseDetail,
    ToggleHelp,
    CancelMode,                                 // ESC: dismiss error / leave overlay

    // --- Async Results (The "Callback") ---
    // Dispatched by the fetch tasks back to the main thread
    PalettesLoaded { seq: u64, palettes: Vec<ColorPalette> },
    SearchFailed { seq: u64, message: String },
}
