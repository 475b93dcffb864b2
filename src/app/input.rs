use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::palette_list::{calculate_row_height, swatch_at_column};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

/// Map a clicked position (relative to the list's inner area) to the
/// palette row and, when the click lands on a swatch line, the swatch.
pub fn resolve_clicked_row(
    app_state: &AppState<'_>,
    clicked_row: usize,
    clicked_col: usize,
) -> Option<(usize, Option<usize>)> {
    let offset = app_state.results.table_state.offset();

    let mut current_y = 0;
    for i in offset..app_state.palettes.len() {
        let palette = &app_state.palettes[i];
        let is_selected = app_state.results.selected_row() == Some(i);
        let height = calculate_row_height(palette, is_selected) as usize;

        if clicked_row < current_y + height {
            let line_in_row = clicked_row - current_y;
            let swatch = if line_in_row < 2 {
                swatch_at_column(palette, clicked_col)
            } else {
                None
            };
            return Some((i, swatch));
        }
        current_y += height;
    }
    None
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
        if is_ctrl_c(key) {
            return Some(Action::Quit);
        }
    }

    match app_state.mode {
        AppMode::Search => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => Some(Action::SubmitSearch),
                KeyCode::Tab => Some(Action::FocusResults),
                KeyCode::Up => Some(Action::RecallPrev),
                KeyCode::Down => Some(Action::RecallNext),
                _ => Some(Action::SearchInput(key)),
            },
            Event::Mouse(mouse) => map_mouse(&mouse, app_state, terminal_size),
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Results => match event {
            Event::Key(key) => app_state.keymap.get_action(key, app_state.mode),
            Event::Mouse(mouse) => map_mouse(&mouse, app_state, terminal_size),
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Detail => match event {
            Event::Key(key) => app_state.keymap.get_action(key, app_state.mode),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => Some(Action::CloseDetail),
                _ => None,
            },
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
    }
}

fn map_mouse(mouse: &MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area);
    let search_area = layout.search;
    let results_area = layout.results;

    let in_results = mouse.column >= results_area.x
        && mouse.column < results_area.x + results_area.width
        && mouse.row >= results_area.y
        && mouse.row < results_area.y + results_area.height;

    match mouse.kind {
        MouseEventKind::ScrollUp if in_results => Some(Action::SelectPrevRow),
        MouseEventKind::ScrollDown if in_results => Some(Action::SelectNextRow),
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.column >= search_area.x
                && mouse.column < search_area.x + search_area.width
                && mouse.row >= search_area.y
                && mouse.row < search_area.y + search_area.height
            {
                return Some(Action::FocusSearch);
            }

            // Strictly inside the results block borders.
            if mouse.column > results_area.x
                && mouse.column < results_area.x + results_area.width.saturating_sub(1)
                && mouse.row > results_area.y
                && mouse.row < results_area.y + results_area.height.saturating_sub(1)
            {
                let clicked_row = (mouse.row - (results_area.y + 1)) as usize;
                let clicked_col = (mouse.column - (results_area.x + 1)) as usize;
                if let Some((i, swatch)) = resolve_clicked_row(app_state, clicked_row, clicked_col)
                {
                    return match swatch {
                        Some(s) => Some(Action::SelectSwatch(i, s)),
                        None => Some(Action::SelectRow(i)),
                    };
                }
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ColorPalette;

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn size() -> Size {
        Size::new(80, 24)
    }

    fn results_state() -> AppState<'static> {
        let mut state = AppState::default();
        state.mode = AppMode::Results;
        state.palettes = vec![
            ColorPalette::new(vec!["#FF0000".to_string(), "#00FF00".to_string()]),
            ColorPalette::new(vec!["#0000FF".to_string()]),
            ColorPalette::new(vec!["#ABCDEF".to_string()]),
        ];
        state.results.select_first();
        state
    }

    #[test]
    fn typing_in_search_mode_feeds_the_text_area() {
        let state = AppState::default();
        let action = map_event_to_action(key_event(KeyCode::Char('q')), &state, size());
        assert!(matches!(action, Some(Action::SearchInput(_))));
    }

    #[test]
    fn enter_in_search_mode_submits() {
        let state = AppState::default();
        let action = map_event_to_action(key_event(KeyCode::Enter), &state, size());
        assert_eq!(action, Some(Action::SubmitSearch));
    }

    #[test]
    fn q_quits_from_results_mode() {
        let state = results_state();
        let action = map_event_to_action(key_event(KeyCode::Char('q')), &state, size());
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut state = AppState::default();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        for mode in [AppMode::Search, AppMode::Results, AppMode::Detail, AppMode::Help] {
            state.mode = mode;
            assert_eq!(
                map_event_to_action(ctrl_c.clone(), &state, size()),
                Some(Action::Quit),
                "mode {mode:?}"
            );
        }
    }

    #[test]
    fn release_events_are_ignored() {
        let state = results_state();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        key.kind = crossterm::event::KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(key), &state, size()), None);
    }

    #[test]
    fn clicked_rows_account_for_the_taller_selected_row() {
        let state = results_state();
        // Row 0 is selected (height 4), rows 1 and 2 have height 3.
        assert_eq!(resolve_clicked_row(&state, 0, 1), Some((0, Some(0))));
        assert_eq!(resolve_clicked_row(&state, 3, 1), Some((0, None)));
        assert_eq!(resolve_clicked_row(&state, 4, 1), Some((1, Some(0))));
        assert_eq!(resolve_clicked_row(&state, 7, 1), Some((2, Some(0))));
        assert_eq!(resolve_clicked_row(&state, 30, 1), None);
    }

    #[test]
    fn clicks_in_gaps_select_the_row_without_a_swatch() {
        let state = results_state();
        // Column 7 is the gap between swatches 0 and 1.
        assert_eq!(resolve_clicked_row(&state, 0, 7), Some((0, None)));
    }

    #[test]
    fn esc_closes_the_detail_view() {
        let mut state = results_state();
        state.mode = AppMode::Detail;
        let action = map_event_to_action(key_event(KeyCode::Esc), &state, size());
        assert_eq!(action, Some(Action::CloseDetail));
    }
}
