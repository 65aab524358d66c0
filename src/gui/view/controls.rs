//! Header, option controls and the Start/Stop row.

use iced::widget::{Checkbox, Row, button, checkbox, column, container, row, text, text_input};
use iced::{Alignment, Length};

use super::super::settings::AppearanceMode;
use super::super::state::{Message, Retagger};
use super::constants::{DELIMITER_W, LABEL_W, RUN_BTN_W, STATUS_TEXT, TITLE_TEXT};

pub(crate) fn header(state: &Retagger) -> Row<'_, Message> {
    let label = match state.appearance {
        AppearanceMode::Dark => "Light mode",
        AppearanceMode::Light => "Dark mode",
    };
    let toggle = button(text(label).size(STATUS_TEXT)).on_press(Message::ToggleAppearance);

    row![
        text("MP3 Retagger").size(TITLE_TEXT).width(Length::Fill),
        toggle,
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

pub(crate) fn options_panel(state: &Retagger) -> iced::widget::Container<'_, Message> {
    let running = state.is_running();

    let mut path_input = text_input("Music folder", &state.root_input).width(Length::Fill);
    let mut delimiter_input = text_input("/", &state.delimiter).width(Length::Fixed(DELIMITER_W));
    if !running {
        path_input = path_input
            .on_input(Message::RootInputChanged)
            .on_submit(Message::StartOrStop);
        delimiter_input = delimiter_input.on_input(Message::DelimiterChanged);
    }

    let browse_btn = if running {
        button("Browse Folder")
    } else {
        button("Browse Folder").on_press(Message::BrowseFolder)
    };

    let path_row = row![
        text("Folder").width(Length::Fixed(LABEL_W)),
        path_input,
        browse_btn
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let delimiter_row = row![
        text("Delimiter").width(Length::Fixed(LABEL_W)),
        delimiter_input
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let switches = row![
        option_box(
            "Update Album Artist",
            state.set_albumartist,
            running,
            Message::ToggleAlbumArtist
        ),
        option_box(
            "Scan Subfolders",
            state.scan_subfolders,
            running,
            Message::ToggleSubfolders
        ),
        option_box(
            "Write Mode (DANGEROUS)",
            state.write_mode,
            running,
            Message::ToggleWriteMode
        ),
    ]
    .spacing(16);

    container(column![path_row, delimiter_row, switches].spacing(8)).padding(8)
}

pub(crate) fn run_row(state: &Retagger) -> Row<'_, Message> {
    let run_btn = if state.is_stopping() {
        button("Stopping...")
    } else if state.is_running() {
        button("Stop Processing")
            .style(button::danger)
            .on_press(Message::StartOrStop)
    } else {
        button("Start Processing").on_press(Message::StartOrStop)
    };

    row![
        run_btn.width(Length::Fixed(RUN_BTN_W)),
        text(&state.status).size(STATUS_TEXT),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
}

/// Checkbox that is disabled (no `on_toggle`) while a scan runs.
fn option_box(
    label: &'static str,
    checked: bool,
    running: bool,
    on_toggle: fn(bool) -> Message,
) -> Checkbox<'static, Message> {
    let cb = checkbox(checked).label(label);
    if running { cb } else { cb.on_toggle(on_toggle) }
}
