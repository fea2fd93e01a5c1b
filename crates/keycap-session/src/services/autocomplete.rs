use std::sync::{PoisonError, RwLock};

use keycap_core::context::Suggestion;
use keycap_core::locale::LocaleId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutocompleteError {
    #[error("autocomplete provider unavailable: {0}")]
    Unavailable(String),
    #[error("autocomplete failed: {0}")]
    Failed(String),
}

pub type AutocompleteResult = Result<Vec<Suggestion>, AutocompleteError>;

/// Called at most once per request, on any thread. Providers may drop a
/// request that a newer one superseded.
pub type AutocompleteCompletion = Box<dyn FnOnce(AutocompleteResult) + Send>;

/// Produces suggestions for the word around the cursor.
///
/// `autocomplete_suggestions` may complete inline or later from another
/// thread; the session tags every request and drops completions that are no
/// longer current.
pub trait AutocompleteProvider: Send + Sync {
    fn locale(&self) -> LocaleId;

    fn set_locale(&self, locale: &LocaleId);

    fn is_enabled(&self) -> bool;

    fn autocomplete_suggestions(&self, text: &str, completion: AutocompleteCompletion);
}

/// Default provider: never suggests anything.
pub struct DisabledAutocompleteProvider {
    locale: RwLock<LocaleId>,
}

impl DisabledAutocompleteProvider {
    pub fn new(locale: LocaleId) -> Self {
        Self {
            locale: RwLock::new(locale),
        }
    }
}

impl Default for DisabledAutocompleteProvider {
    fn default() -> Self {
        Self::new(LocaleId::default())
    }
}

impl AutocompleteProvider for DisabledAutocompleteProvider {
    fn locale(&self) -> LocaleId {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_locale(&self, locale: &LocaleId) {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale.clone();
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn autocomplete_suggestions(&self, _text: &str, completion: AutocompleteCompletion) {
        completion(Ok(Vec::new()));
    }
}
