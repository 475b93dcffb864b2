use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::reducer;
use crate::app::state::{AppState, FetchState};
use crate::domain::models::ColorPalette;
use crate::domain::search::{MockPaletteSearch, SearchError};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn decode_error() -> SearchError {
    SearchError::Decode(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
}

#[tokio::test]
async fn test_handle_command_success() {
    let mut mock = MockPaletteSearch::new();
    mock.expect_fetch_palettes()
        .withf(|q| q == "sunset")
        .returning(|_| {
            Ok(vec![ColorPalette::new(vec![
                "#FF0000".to_string(),
                "#00FF00".to_string(),
            ])])
        });

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Search {
            seq: 1,
            query: "sunset".to_string(),
        },
        Arc::new(mock),
        tx,
    );

    let action = rx.recv().await.unwrap();
    if let Action::PalettesLoaded { seq, palettes } = action {
        assert_eq!(seq, 1);
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].colors, vec!["#FF0000", "#00FF00"]);
    } else {
        panic!("Expected Action::PalettesLoaded, got {action:?}");
    }
}

#[tokio::test]
async fn test_handle_command_error_propagation() {
    let mut mock = MockPaletteSearch::new();
    mock.expect_fetch_palettes()
        .withf(|q| q == "sunset")
        .returning(|_| Err(decode_error()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Search {
            seq: 3,
            query: "sunset".to_string(),
        },
        Arc::new(mock),
        tx,
    );

    let action = rx.recv().await.unwrap();
    if let Action::SearchFailed { seq, message } = action {
        assert_eq!(seq, 3);
        assert!(message.contains("malformed palette response"));
    } else {
        panic!("Expected Action::SearchFailed, got {action:?}");
    }
}

#[tokio::test]
async fn test_search_failure_reaches_state_and_preserves_palettes() {
    let mut state = AppState::default();
    state.palettes = vec![ColorPalette::new(vec!["#123456".to_string()])];
    state.search_input.set_text("stormy");
    let cmd = reducer::update(&mut state, Action::SubmitSearch).unwrap();
    assert_eq!(state.fetch, FetchState::Fetching { seq: 1 });

    let mut mock = MockPaletteSearch::new();
    mock.expect_fetch_palettes()
        .returning(|_| Err(decode_error()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(cmd, Arc::new(mock), tx);

    let action = rx.recv().await.unwrap();
    reducer::update(&mut state, action);

    assert_eq!(state.fetch, FetchState::Failed);
    assert_eq!(state.palettes[0].colors, vec!["#123456"]);
    assert!(state
        .last_error
        .as_ref()
        .unwrap()
        .message
        .contains("malformed palette response"));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockPaletteSearch::new();
    // Any query resolves to a couple of palettes so the UI has rows to chew on.
    mock.expect_fetch_palettes().returning(|_| {
        Ok(vec![
            ColorPalette::new(vec![
                "#FF0000".to_string(),
                "#00FF00".to_string(),
                "#0000FF".to_string(),
            ]),
            ColorPalette::new(vec!["#112233".to_string()]),
        ])
    });

    let search = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Ctrl+C quits from every mode.
        let _ = event_tx
            .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, search, event_rx),
    )
    .await;

    match result {
        Ok(res) => {
            res.unwrap();
        }
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
