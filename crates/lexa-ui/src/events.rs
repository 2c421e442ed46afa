use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kanal::{Receiver, Sender};
use lexa_types::{AppEvent, LookupOutcome, LookupReply};
use slint::{ComponentHandle, Weak};

use crate::MainWindow;
use crate::state::{Delivery, Shell, SubmitError};

/// Everything the window callbacks and the result poller share
pub struct UiContext {
    pub window: Weak<MainWindow>,
    pub shell: Rc<RefCell<Shell>>,
    pub results: Receiver<AppEvent>,
    pub requests: Sender<AppEvent>,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// Outcome rendered, stop polling
    Rendered,
    /// Nothing yet, poll again
    Pending,
    /// Lookup was cleared, another poller owns the channel now
    Superseded,
    /// Backend is gone
    Disconnected,
}

/// Push the shell state into the window
pub fn render(window: &MainWindow, shell: &Shell) {
    window.set_busy(shell.is_busy());
    window.set_status(shell.status().into());
    window.set_output(shell.output().into());
    window.set_can_speak(shell.can_speak());
}

pub fn handle_define(ctx: &Rc<UiContext>, text: &str) {
    let submitted = ctx.shell.borrow_mut().submit(text);
    let request = match submitted {
        Ok(request) => request,
        Err(SubmitError::EmptyWord) => {
            refresh(ctx);
            return;
        }
        Err(SubmitError::Busy) => {
            tracing::debug!("[UI] Lookup already in flight, ignoring submit");
            return;
        }
    };

    tracing::info!("[UI] Looking up '{}'", request.word);
    refresh(ctx);

    let generation = request.generation;
    if !send(&ctx.requests, AppEvent::Lookup(request.clone())) {
        let outcome = LookupOutcome::new(request, LookupReply::failed("lookup service is not running"));
        ctx.shell.borrow_mut().accept(outcome);
        refresh(ctx);
        return;
    }

    schedule_poll(ctx.clone(), generation);
}

pub fn handle_speak(ctx: &Rc<UiContext>) {
    let text = ctx.shell.borrow_mut().speakable_text();
    match text {
        Some(text) => {
            send(&ctx.requests, AppEvent::Speak(text));
        }
        None => refresh(ctx),
    }
}

pub fn handle_clear(ctx: &Rc<UiContext>) {
    ctx.shell.borrow_mut().clear();
    if let Some(window) = ctx.window.upgrade() {
        window.set_word("".into());
    }
    refresh(ctx);
}

/// Ask the backend to stop, then close the window
pub fn handle_exit(ctx: &Rc<UiContext>) {
    request_shutdown(&ctx.requests);
    if let Some(window) = ctx.window.upgrade() {
        window.hide().ok();
    }
    slint::quit_event_loop().ok();
}

pub fn request_shutdown(requests: &Sender<AppEvent>) -> bool {
    tracing::info!("[UI] Exit requested");
    send(requests, AppEvent::Shutdown)
}

fn refresh(ctx: &UiContext) {
    if let Some(window) = ctx.window.upgrade() {
        render(&window, &ctx.shell.borrow());
    }
}

/// Non-blocking hand-off to the backend
pub fn send(requests: &Sender<AppEvent>, event: AppEvent) -> bool {
    match requests.try_send(event) {
        Ok(true) => true,
        Ok(false) => {
            tracing::warn!("[UI] Request channel full, dropping event");
            false
        }
        Err(e) => {
            tracing::error!("[UI] Request channel closed: {}", e);
            false
        }
    }
}

/// Re-check the result channel after one poll interval
pub fn schedule_poll(ctx: Rc<UiContext>, generation: u64) {
    let interval = ctx.poll_interval;
    slint::Timer::single_shot(interval, move || {
        let step = drain(&mut ctx.shell.borrow_mut(), &ctx.results, generation);
        match step {
            PollStep::Pending => schedule_poll(ctx, generation),
            PollStep::Rendered => refresh(&ctx),
            PollStep::Superseded => {
                tracing::debug!("[UI] Poller for generation {} retired", generation);
            }
            PollStep::Disconnected => {
                let mut shell = ctx.shell.borrow_mut();
                let outcome = LookupOutcome {
                    generation,
                    word: shell.input().to_string(),
                    reply: LookupReply::failed("lookup service stopped"),
                };
                shell.accept(outcome);
                drop(shell);
                refresh(&ctx);
            }
        }
    });
}

/// Take whatever has arrived without blocking
pub fn drain(shell: &mut Shell, results: &Receiver<AppEvent>, generation: u64) -> PollStep {
    loop {
        if !shell.is_waiting_for(generation) {
            return PollStep::Superseded;
        }

        match results.try_recv() {
            Ok(Some(AppEvent::LookupFinished(outcome))) => match shell.accept(outcome) {
                Delivery::Rendered => return PollStep::Rendered,
                Delivery::Stale => tracing::debug!("[UI] Dropping stale lookup result"),
            },
            Ok(Some(event)) => {
                tracing::debug!("[UI] Ignoring {:?}", std::mem::discriminant(&event));
            }
            Ok(None) => return PollStep::Pending,
            Err(e) => {
                tracing::error!("[UI] Result channel closed: {}", e);
                return PollStep::Disconnected;
            }
        }
    }
}
