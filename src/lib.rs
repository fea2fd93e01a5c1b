//! Keyboard extension engine: UniFFI surface over `keycap-session`.

uniffi::setup_scaffolding!();

pub mod api;
mod async_worker;
mod trace_init;

pub use keycap_core::settings;
