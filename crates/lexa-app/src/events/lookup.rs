use std::sync::Arc;

use kanal::AsyncSender;
use lexa_types::{AppEvent, LookupOutcome, LookupReply, LookupRequest};

use crate::state::AppState;

/// Run one lookup and hand the outcome to the UI
pub async fn handle_lookup(
    state: Arc<AppState>,
    request: LookupRequest,
    app_to_ui_tx: AsyncSender<AppEvent>,
) {
    let outcome = lookup_outcome(state, request).await;

    if let Err(e) = app_to_ui_tx.send(AppEvent::LookupFinished(outcome)).await {
        tracing::error!("Failed to send lookup result to UI: {}", e);
    }
}

/// Lookup plus formatting; a panic inside becomes a failed reply
pub async fn lookup_outcome(state: Arc<AppState>, request: LookupRequest) -> LookupOutcome {
    let word = request.word.clone();

    let pipeline = tokio::spawn(async move {
        let result = state.dictionary.lookup(&word).await;
        let summary = result.summary(&word);
        if result.is_empty() {
            tracing::info!("No entries for '{}'", word);
            LookupReply::Empty(summary)
        } else {
            LookupReply::Found(summary)
        }
    });

    let reply = match pipeline.await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Lookup worker for '{}' failed: {}", request.word, e);
            LookupReply::failed(e)
        }
    };

    LookupOutcome::new(request, reply)
}
