use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, ErrorState, FetchState},
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Search Bar ---
        Action::FocusSearch => {
            state.mode = AppMode::Search;
            state.recall_index = None;
        }
        Action::SearchInput(key) => {
            state.search_input.input(key);
            state.recall_index = None;
        }
        Action::SubmitSearch => {
            let query = state.search_input.text();
            if query.is_empty() {
                return None;
            }
            state.query = query.clone();
            state.remember_query(&query);
            state.recall_index = None;
            state.seq += 1;
            state.fetch = FetchState::Fetching { seq: state.seq };
            return Some(Command::Search {
                seq: state.seq,
                query,
            });
        }
        Action::RecallPrev => {
            if state.recent_queries.is_empty() {
                return None;
            }
            let idx = match state.recall_index {
                None => 0,
                Some(i) => (i + 1).min(state.recent_queries.len() - 1),
            };
            state.recall_index = Some(idx);
            let recalled = state.recent_queries[idx].clone();
            state.search_input.set_text(&recalled);
        }
        Action::RecallNext => match state.recall_index {
            Some(0) => {
                state.recall_index = None;
                state.search_input.set_text("");
            }
            Some(i) => {
                state.recall_index = Some(i - 1);
                let recalled = state.recent_queries[i - 1].clone();
                state.search_input.set_text(&recalled);
            }
            None => {}
        },

        // --- Results Navigation ---
        Action::FocusResults => {
            if !state.palettes.is_empty() {
                state.mode = AppMode::Results;
                if state.results.selected_row().is_none() {
                    state.results.select_first();
                }
            }
        }
        Action::SelectNextRow => {
            if state.palettes.is_empty() {
                return None;
            }
            let i = match state.results.selected_row() {
                Some(i) if i + 1 < state.palettes.len() => i + 1,
                Some(_) => 0,
                None => 0,
            };
            state.results.table_state.select(Some(i));
            state.results.clamp_swatch(&state.palettes);
        }
        Action::SelectPrevRow => {
            if state.palettes.is_empty() {
                return None;
            }
            let i = match state.results.selected_row() {
                Some(0) | None => state.palettes.len() - 1,
                Some(i) => i - 1,
            };
            state.results.table_state.select(Some(i));
            state.results.clamp_swatch(&state.palettes);
        }
        Action::SelectRow(i) => {
            if i < state.palettes.len() {
                state.results.table_state.select(Some(i));
                state.results.clamp_swatch(&state.palettes);
            }
        }
        Action::SelectNextSwatch => {
            if let Some(row) = state
                .results
                .selected_row()
                .and_then(|i| state.palettes.get(i))
            {
                if !row.colors.is_empty() {
                    state.results.swatch_index =
                        (state.results.swatch_index + 1) % row.colors.len();
                }
            }
        }
        Action::SelectPrevSwatch => {
            if let Some(row) = state
                .results
                .selected_row()
                .and_then(|i| state.palettes.get(i))
            {
                if !row.colors.is_empty() {
                    let len = row.colors.len();
                    state.results.swatch_index = (state.results.swatch_index + len - 1) % len;
                }
            }
        }
        Action::SelectSwatch(row, swatch) => {
            let valid = state
                .palettes
                .get(row)
                .is_some_and(|p| swatch < p.colors.len());
            if valid {
                state.results.table_state.select(Some(row));
                state.results.swatch_index = swatch;
                return open_detail(state);
            }
        }
        Action::OpenDetail => return open_detail(state),
        Action::CloseDetail => {
            state.mode = AppMode::Results;
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Results
            } else {
                AppMode::Help
            };
        }
        Action::CancelMode => {
            state.last_error = None;
            match state.mode {
                AppMode::Detail | AppMode::Help => state.mode = AppMode::Results,
                AppMode::Search | AppMode::Results => {}
            }
        }

        // --- Async Results ---
        Action::PalettesLoaded { seq, palettes } => {
            if seq != state.seq {
                // A newer query has been submitted since; drop the stale result.
                return None;
            }
            state.fetch = FetchState::Loaded;
            state.palettes = palettes;
            if state.palettes.is_empty() {
                state.results.clear();
            } else {
                state.results.select_first();
                if state.mode == AppMode::Search {
                    state.mode = AppMode::Results;
                }
            }
        }
        Action::SearchFailed { seq, message } => {
            if seq != state.seq {
                return None;
            }
            state.fetch = FetchState::Failed;
            state.last_error = Some(ErrorState::new(message));
        }

        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }
    }
    None
}

fn open_detail(state: &mut AppState) -> Option<Command> {
    if let Some(hex) = state.selected_hex().map(str::to_string) {
        state.selected_color = Some(hex);
        state.mode = AppMode::Detail;
    }
    None
}
