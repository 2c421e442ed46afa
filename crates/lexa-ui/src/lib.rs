use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lexa_config::ui::UiConfig;
use slint::ComponentHandle;

pub mod bridge;
pub mod events;
pub mod state;

pub use bridge::{UiBridge, UiBridgeHandle};
pub use state::Shell;

use events::UiContext;

slint::include_modules!();

/// Run the window on the current thread until it is closed
pub fn ui_loop(bridge: UiBridgeHandle, config: &UiConfig) -> anyhow::Result<()> {
    let window = MainWindow::new()?;

    let ctx = Rc::new(UiContext {
        window: window.as_weak(),
        shell: Rc::new(RefCell::new(Shell::new())),
        results: bridge.to_ui_rx,
        requests: bridge.from_ui_tx,
        poll_interval: Duration::from_millis(config.poll_interval_ms),
    });

    events::render(&window, &ctx.shell.borrow());

    {
        let ctx = ctx.clone();
        window.on_define(move |text| events::handle_define(&ctx, &text));
    }
    {
        let ctx = ctx.clone();
        window.on_speak(move || events::handle_speak(&ctx));
    }
    {
        let ctx = ctx.clone();
        window.on_clear(move || events::handle_clear(&ctx));
    }
    {
        let ctx = ctx.clone();
        window.on_exit(move || events::handle_exit(&ctx));
    }

    tracing::info!("[SLINT] Window ready");
    window.run()?;
    tracing::info!("[SLINT] Window closed");

    Ok(())
}
