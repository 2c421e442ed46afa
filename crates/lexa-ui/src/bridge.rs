use kanal::{AsyncReceiver, AsyncSender, Receiver, Sender};
use lexa_types::AppEvent;

/// App side of the channels between the async backend and the UI thread
pub struct UiBridge {
    pub to_ui_tx: AsyncSender<AppEvent>,
    pub from_ui_rx: AsyncReceiver<AppEvent>,
}

/// UI side, polled and fed from the Slint event loop without blocking
pub struct UiBridgeHandle {
    pub to_ui_rx: Receiver<AppEvent>,
    pub from_ui_tx: Sender<AppEvent>,
}

impl UiBridge {
    pub fn new() -> (Self, UiBridgeHandle) {
        let (to_ui_tx, to_ui_rx) = kanal::bounded(128);
        let (from_ui_tx, from_ui_rx) = kanal::bounded(64);

        (
            UiBridge {
                to_ui_tx: to_ui_tx.to_async(),
                from_ui_rx: from_ui_rx.to_async(),
            },
            UiBridgeHandle {
                to_ui_rx,
                from_ui_tx,
            },
        )
    }
}
