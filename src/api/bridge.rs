//! Foreign-implemented traits and their adapters to the session's traits.

use std::sync::{Arc, PoisonError, RwLock};

use keycap_core::context::{ColorScheme, Suggestion};
use keycap_core::locale::LocaleId;
use keycap_core::proxy::{Autocapitalization, KeyboardAppearance, TextProxy};
use keycap_session::services::AutocompleteError;
use keycap_session::KeyboardHost;

use crate::async_worker::SuggestionSource;

use super::types::{
    KcAutocapitalization, KcColorScheme, KcError, KcKeyboardAppearance, KcSuggestion,
};

// ---------------------------------------------------------------------------
// Foreign traits
// ---------------------------------------------------------------------------

/// The host app's text document.
#[uniffi::export(with_foreign)]
pub trait KcTextDocumentProxy: Send + Sync {
    fn document_context_before_input(&self) -> Option<String>;
    fn document_context_after_input(&self) -> Option<String>;
    fn is_reading_full_document_context(&self) -> bool;
    fn keyboard_appearance(&self) -> KcKeyboardAppearance;
    fn autocapitalization(&self) -> KcAutocapitalization;
    fn insert_text(&self, text: String);
    fn delete_backward(&self);
    fn adjust_text_position(&self, offset: i64);
}

/// The keyboard extension's view controller.
#[uniffi::export(with_foreign)]
pub trait KcKeyboardHost: Send + Sync {
    fn has_full_access(&self) -> bool;
    fn has_dictation_key(&self) -> bool;
    fn needs_input_mode_switch_key(&self) -> bool;
    fn user_interface_style(&self) -> Option<KcColorScheme>;
    fn dismiss_keyboard(&self);
    fn advance_to_next_input_mode(&self);
    fn open_settings(&self);
}

/// Blocking suggestion lookup; called on a background thread.
#[uniffi::export(with_foreign)]
pub trait KcAutocompleteSource: Send + Sync {
    fn is_enabled(&self) -> bool;
    fn suggestions(&self, text: String, locale: String) -> Result<Vec<KcSuggestion>, KcError>;
}

// ---------------------------------------------------------------------------
// Adapters
// ---------------------------------------------------------------------------

pub(crate) struct ForeignProxy(pub Arc<dyn KcTextDocumentProxy>);

impl TextProxy for ForeignProxy {
    fn document_context_before_input(&self) -> Option<String> {
        self.0.document_context_before_input()
    }

    fn document_context_after_input(&self) -> Option<String> {
        self.0.document_context_after_input()
    }

    fn is_reading_full_document_context(&self) -> bool {
        self.0.is_reading_full_document_context()
    }

    fn keyboard_appearance(&self) -> KeyboardAppearance {
        self.0.keyboard_appearance().into()
    }

    fn autocapitalization(&self) -> Autocapitalization {
        self.0.autocapitalization().into()
    }

    fn insert_text(&self, text: &str) {
        self.0.insert_text(text.to_string());
    }

    fn delete_backward(&self) {
        self.0.delete_backward();
    }

    fn adjust_text_position(&self, offset: i64) {
        self.0.adjust_text_position(offset);
    }
}

/// Foreign objects arrive as a fresh `Arc` on every call, so the host's
/// proxy is pushed in explicitly and wrapped once. The wrapper's identity
/// is what the keyboard context tracks.
pub(crate) struct HostBridge {
    host: Arc<dyn KcKeyboardHost>,
    proxy: RwLock<Arc<dyn TextProxy>>,
}

impl HostBridge {
    pub fn new(host: Arc<dyn KcKeyboardHost>, proxy: Arc<dyn KcTextDocumentProxy>) -> Self {
        Self {
            host,
            proxy: RwLock::new(Arc::new(ForeignProxy(proxy))),
        }
    }

    pub fn set_proxy(&self, proxy: Arc<dyn KcTextDocumentProxy>) {
        *self.proxy.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(ForeignProxy(proxy));
    }
}

impl KeyboardHost for HostBridge {
    fn has_full_access(&self) -> bool {
        self.host.has_full_access()
    }

    fn has_dictation_key(&self) -> bool {
        self.host.has_dictation_key()
    }

    fn needs_input_mode_switch_key(&self) -> bool {
        self.host.needs_input_mode_switch_key()
    }

    fn user_interface_style(&self) -> Option<ColorScheme> {
        self.host.user_interface_style().map(ColorScheme::from)
    }

    fn text_document_proxy(&self) -> Arc<dyn TextProxy> {
        Arc::clone(&self.proxy.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn dismiss_keyboard(&self) {
        self.host.dismiss_keyboard();
    }

    fn advance_to_next_input_mode(&self) {
        self.host.advance_to_next_input_mode();
    }

    fn open_settings(&self) {
        self.host.open_settings();
    }
}

pub(crate) struct ForeignSource(pub Arc<dyn KcAutocompleteSource>);

impl SuggestionSource for ForeignSource {
    fn is_enabled(&self) -> bool {
        self.0.is_enabled()
    }

    fn suggestions(
        &self,
        text: &str,
        locale: &LocaleId,
    ) -> Result<Vec<Suggestion>, AutocompleteError> {
        self.0
            .suggestions(text.to_string(), locale.to_string())
            .map(|list| list.into_iter().map(Suggestion::from).collect())
            .map_err(|e| match e {
                KcError::Io { msg } => AutocompleteError::Unavailable(msg),
                KcError::InvalidData { msg } | KcError::Internal { msg } => {
                    AutocompleteError::Failed(msg)
                }
            })
    }
}
