//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Retagger')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()', 'theme()')
//! - subscriptions (polling scan events, window events)
//! - persisted presentation settings ('settings')
//! - small UI helpers ('util')

pub(crate) mod settings;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Retagger;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::{theme, view};
