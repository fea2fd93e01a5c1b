//! UniFFI export layer: type-safe Swift bindings for the keyboard engine.
//!
//! Each public type here maps to a generated Swift class, struct, enum or
//! protocol.

mod bridge;
mod session;
mod types;


pub use bridge::{KcAutocompleteSource, KcKeyboardHost, KcTextDocumentProxy};
pub use session::KcSession;
pub use types::{
    KcAction, KcActionEffect, KcAudioFeedback, KcAutocapitalization, KcAutocompleteState,
    KcButtonStyle, KcColor, KcColorScheme, KcEmojiCategory, KcError, KcFeedbackConfiguration,
    KcFontWeight, KcFrame, KcHapticFeedback, KcKeyboardAppearance, KcKeyboardCase,
    KcKeyboardState, KcKeyboardType, KcPrimaryType, KcSuggestion, KcTextStyle,
};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), KcError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KcError::Io {
        msg: format!("{path}: {e}"),
    })?;
    crate::settings::init_custom(content)
        .map_err(|e| KcError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    crate::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
