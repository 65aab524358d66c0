//! retagger
//!
//! Splits multi-artist MP3 credits like `Main / Guest` into
//! `Artist = Main` and `Title = Song (ft. Guest)`, leaving remixers alone.
//!
//! Front ends (the `retag` CLI and the desktop app) only call into [`core`].

pub mod core;
