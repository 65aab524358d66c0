//! gui/subscription.rs
//! Window events always; a periodic TickScan only while a scan is running.

use iced::{Subscription, time, window};
use std::time::Duration;

use super::state::{Message, Retagger};

const SCAN_POLL: Duration = Duration::from_millis(100);

pub(crate) fn subscription(state: &Retagger) -> Subscription<Message> {
    let window_events = Subscription::batch([
        window::close_requests().map(Message::CloseRequested),
        window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
    ]);

    if state.scan_events.is_none() {
        return window_events;
    }

    Subscription::batch([
        window_events,
        time::every(SCAN_POLL).map(|_| Message::TickScan),
    ])
}
