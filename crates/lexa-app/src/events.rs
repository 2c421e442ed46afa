use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexa_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod lookup;
pub mod speak;

use lookup::handle_lookup;
use speak::handle_speak;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::info!("[EVENT_LOOP] UI channel closed");
                    return Ok(());
                }
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(&state, &app_to_ui_tx, event) {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            return Ok(());
        }
    }
}

/// Returns false when the loop should stop
fn handle_events(state: &Arc<AppState>, app_to_ui_tx: &AsyncSender<AppEvent>, event: AppEvent) -> bool {
    match event {
        AppEvent::Lookup(request) => {
            tracing::debug!(">>> [LOOKUP] '{}' (generation {})", request.word, request.generation);
            tokio::spawn(handle_lookup(state.clone(), request, app_to_ui_tx.clone()));
        }
        AppEvent::Speak(text) => {
            tracing::debug!(">>> [SPEAK] {} chars", text.len());
            handle_speak(state.speaker.clone(), text);
        }
        AppEvent::LookupFinished(_) => {
            // UI-only event, ignore in backend
        }
        AppEvent::Shutdown => return false,
    }

    true
}
