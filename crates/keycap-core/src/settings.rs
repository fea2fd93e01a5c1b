//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::feedback::FeedbackConfiguration;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
///
/// A custom TOML is validated in `init_custom`, so only the embedded
/// defaults can reach the fallback branch, and those are covered by tests.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid settings, using built-in defaults");
            Settings::builtin()
        })
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub width: WidthSettings,
    pub autocomplete: AutocompleteSettings,
    pub feedback: FeedbackConfiguration,
    pub locale: LocaleSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WidthSettings {
    pub none: f64,
    pub new_line: f64,
    pub system: f64,
    pub space: f64,
    pub standard: f64,
    pub proportional_factor: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteSettings {
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSettings {
    pub default: String,
    #[serde(default)]
    pub available: Vec<String>,
}

impl Settings {
    /// Hard-coded mirror of `default_settings.toml`.
    fn builtin() -> Self {
        use crate::feedback::{AudioFeedback, HapticFeedback};
        Self {
            width: WidthSettings {
                none: 10.0,
                new_line: 120.0,
                system: 60.0,
                space: 100.0,
                standard: 50.0,
                proportional_factor: 100.0,
            },
            autocomplete: AutocompleteSettings { max_suggestions: 3 },
            feedback: FeedbackConfiguration {
                audio: AudioFeedback::Enabled,
                haptic: HapticFeedback::Minimal,
            },
            locale: LocaleSettings {
                default: "en-US".to_string(),
                available: vec!["en-US".to_string()],
            },
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if !(s.$section.$field > 0.0) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(width.none);
    check_positive!(width.new_line);
    check_positive!(width.system);
    check_positive!(width.space);
    check_positive!(width.standard);
    if !(s.width.proportional_factor >= 1.0) {
        return Err(SettingsError::InvalidValue {
            field: "width.proportional_factor".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    if s.autocomplete.max_suggestions == 0 {
        return Err(SettingsError::InvalidValue {
            field: "autocomplete.max_suggestions".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if s.locale.default.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "locale.default".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}
