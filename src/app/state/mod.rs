use super::keymap::KeyMap;
use super::persistence;
use crate::domain::models::ColorPalette;
use std::sync::Arc;

pub mod error;
pub mod input;
pub mod results;

// Re-exports
pub use error::ErrorState;
pub use input::{SearchInput, PLACEHOLDER};
pub use results::ResultsState;

pub const MAX_RECENT_QUERIES: usize = 20;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Search,  // Typing in the search bar
    Results, // Navigating the palette list
    Detail,  // Full-screen view of one color
    Help,    // Keybinding overlay
}

/// Explicit fetch lifecycle. `Fetching` carries the sequence number of the
/// request it belongs to; results tagged with an older sequence are stale
/// and get dropped, so the most recently submitted query always wins.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Fetching { seq: u64 },
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub fetch: FetchState,

    // --- Search Data (The "Source of Truth") ---
    pub query: String,
    pub palettes: Vec<ColorPalette>,
    pub selected_color: Option<String>,

    // --- UI State ---
    pub search_input: SearchInput<'a>,
    pub results: ResultsState,
    pub last_error: Option<ErrorState>,

    // --- Recent Queries ---
    pub recent_queries: Vec<String>,
    pub recall_index: Option<usize>,

    // --- Runtime ---
    pub seq: u64,
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            recent_queries: persistence::load_recent_queries(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn selected_hex(&self) -> Option<&str> {
        self.results.selected_hex(&self.palettes)
    }

    #[must_use]
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame_count as usize) % SPINNER_FRAMES.len()]
    }

    /// Push `query` to the front of the recent list, deduplicated and
    /// capped at [`MAX_RECENT_QUERIES`].
    pub fn remember_query(&mut self, query: &str) {
        self.recent_queries.retain(|q| q != query);
        self.recent_queries.insert(0, query.to_string());
        self.recent_queries.truncate(MAX_RECENT_QUERIES);
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Search,
            fetch: FetchState::Idle,
            query: String::new(),
            palettes: Vec::new(),
            selected_color: None,
            search_input: SearchInput::default(),
            results: ResultsState::default(),
            last_error: None,
            recent_queries: Vec::new(),
            recall_index: None,
            seq: 0,
            frame_count: 0,
            keymap: Arc::new(KeyMap::standard()),
            theme: crate::theme::Theme::default(),
        }
    }
}
