use std::sync::Arc;

use lexa_ui::UiBridge;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Application controller for task spawning and lifecycle
pub struct AppController {
    bridge: UiBridge,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, bridge: UiBridge) -> Self {
        Self {
            bridge,
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Must be called inside a tokio runtime context
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.bridge.from_ui_rx.clone(),
            self.bridge.to_ui_tx.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
