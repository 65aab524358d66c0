//! Process log panel (read-only, monospace, auto-growing).

use iced::widget::{Column, container, scrollable, text};
use iced::{Font, Length};

use super::super::state::{Message, Retagger};
use super::constants::LOG_TEXT;

pub(crate) fn build_log_panel(state: &Retagger) -> iced::widget::Container<'_, Message> {
    let lines = state
        .log
        .iter()
        .map(|line| text(line.as_str()).font(Font::MONOSPACE).size(LOG_TEXT).into());

    let body: Column<'_, Message> = Column::with_children(lines).spacing(2).width(Length::Fill);

    container(
        scrollable(body)
            .anchor_bottom()
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(8)
    .style(container::bordered_box)
}
