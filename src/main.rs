//! Retagger GUI
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) that walks a folder of `.mp3`
//! files and cleans up collaboration artists:
//! `Artist = "Main / Feat"` becomes `Artist = "Main"`, `Title += " (ft. Feat)"`.
//! Remixers already credited in the title are left out of the "(ft. ...)" part.
//!
//! # How Iced works (super simple mental model)
//! - `Retagger` = the *entire memory* of the app (all the state)
//! - `Message` = "something happened" (button clicked, typed a letter, scan event arrived)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Behavior
//! - Dry run by default; "Write Mode" saves the changes to disk.
//! - Start runs the scan on a worker thread; the button turns into Stop.
//! - Every change, skip and error lands in the process log.
//! - Appearance, folder, delimiter, toggles and window size are remembered between runs
//!   (Write Mode never is).
//!
//! # Architecture constraints (on purpose)
//! - All tag logic lives in the `retagger` library (`retagger::core`).
//! - UI does not perform filesystem IO except validating the chosen folder
//!   and saving its own settings.

mod gui;

use iced::{Size, window};

use gui::settings::{self, DEFAULT_WINDOW};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = settings::load();
    let (width, height) = settings.window_dimensions().unwrap_or(DEFAULT_WINDOW);

    iced::application(
        move || gui::Retagger::new(settings.clone()),
        gui::update,
        gui::view,
    )
    .title("MP3 Retagger")
    .theme(gui::theme)
    .subscription(gui::subscription)
    .window(window::Settings {
        size: Size::new(width, height),
        // Closing goes through Message::CloseRequested so settings get saved.
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()
}
