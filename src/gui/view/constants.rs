//! View constants (layout/sizing).

pub(crate) const PAD: f32 = 16.0;
pub(crate) const SPACING: f32 = 10.0;

pub(crate) const TITLE_TEXT: f32 = 22.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;
pub(crate) const LOG_TEXT: f32 = 12.0;

pub(crate) const LABEL_W: f32 = 90.0;
pub(crate) const DELIMITER_W: f32 = 80.0;
pub(crate) const RUN_BTN_W: f32 = 180.0;
