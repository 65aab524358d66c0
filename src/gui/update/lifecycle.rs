//! gui/update/lifecycle.rs
//! Window size tracking and the close handshake.
//!
//! Closing mid-scan never kills the worker: the stop is requested and the window
//! only closes once the event channel disconnects (see `scan::drain_events`).

use iced::{Size, Task, window};

use super::super::settings;
use super::super::state::{Message, Retagger};

pub(crate) fn resized(state: &mut Retagger, size: Size) -> Task<Message> {
    state.window_size = size;
    Task::none()
}

pub(crate) fn close_requested(state: &mut Retagger, id: window::Id) -> Task<Message> {
    // A failed save must never block closing.
    if let Err(e) = settings::save(&state.to_settings()) {
        log::error!("failed to save settings: {e:#}");
    }

    close_when_idle(state, id)
}

fn close_when_idle(state: &mut Retagger, id: window::Id) -> Task<Message> {
    let Some(scan) = &state.scan else {
        return window::close(id);
    };

    scan.stop();
    state.close_pending = Some(id);
    state.status = "Finishing the current file before closing...".to_string();
    log::info!("close requested mid-scan; waiting for the worker");
    Task::none()
}
