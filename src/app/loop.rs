use crate::app::{
    action::Action, command::Command, input::map_event_to_action, persistence, reducer,
    state::AppState, ui,
};
use crate::domain::search::PaletteSearch;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    search: Arc<dyn PaletteSearch>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    let recent_queries =
        run_loop_with_events(terminal, app_state, search, event_rx).await?;
    persistence::save_recent_queries(&recent_queries);
    Ok(())
}

/// Runs until quit; returns the final recent-query list so the caller can
/// persist it (tests drive this directly and skip persistence).
pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    search: Arc<dyn PaletteSearch>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<Vec<String>> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, search.clone(), action_tx.clone());
            }
        }
    }

    Ok(app_state.recent_queries)
}

pub(crate) fn handle_command(
    command: Command,
    search: Arc<dyn PaletteSearch>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::Search { seq, query } => {
            tokio::spawn(async move {
                tracing::debug!(%query, seq, "palette search started");
                match search.fetch_palettes(&query).await {
                    Ok(palettes) => {
                        let _ = tx.send(Action::PalettesLoaded { seq, palettes }).await;
                    }
                    Err(e) => {
                        tracing::warn!(%query, error = %e, "palette search failed");
                        let _ = tx
                            .send(Action::SearchFailed {
                                seq,
                                message: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
