//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod controls;
mod process_log;

use iced::widget::{Column, column};
use iced::{Length, Theme};

use super::settings::AppearanceMode;
use super::state::{Message, Retagger};
use constants::{PAD, SPACING};

pub(crate) fn view(state: &Retagger) -> Column<'_, Message> {
    column![
        controls::header(state),
        controls::options_panel(state),
        controls::run_row(state),
        process_log::build_log_panel(state).height(Length::Fill),
    ]
    .spacing(SPACING)
    .padding(PAD)
}

pub(crate) fn theme(state: &Retagger) -> Theme {
    match state.appearance {
        AppearanceMode::Dark => Theme::Dark,
        AppearanceMode::Light => Theme::Light,
    }
}
