use std::sync::Arc;
use std::time::Duration;

use lexa_config::Config;
use lexa_speech::Speaker;
use lexa_ui::UiBridge;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::new();
    tracing::info!("Starting lexa {}", lexa_core::VERSION);

    // No dictionary backend means nothing to do
    let dictionary = lexa_dictionary::build_client(&config.dictionary)?;
    let speaker = Speaker::from_config(&config.speech);
    let state = Arc::new(AppState::new(config, dictionary, speaker));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("lexa-worker")
        .build()?;

    let (bridge, ui_handle) = UiBridge::new();
    let controller = AppController::new(state.clone(), bridge);
    let mut tasks = {
        let _guard = runtime.enter();
        controller.spawn_tasks()
    };

    // Slint owns the main thread until the window closes
    let ui_result = lexa_ui::ui_loop(ui_handle, &state.config.ui);

    controller.shutdown();
    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("Task exited with error: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    });
    // Speech may still be playing on a blocking thread
    runtime.shutdown_timeout(Duration::from_secs(1));

    ui_result
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
