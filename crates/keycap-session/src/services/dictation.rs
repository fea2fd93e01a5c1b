use keycap_core::locale::LocaleId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictationError {
    #[error("dictation is disabled")]
    Disabled,
    #[error("dictation requires full access")]
    NoFullAccess,
    #[error("dictation failed: {0}")]
    Failed(String),
}

/// Speech-to-text entry point. Recording and recognition happen outside
/// this crate.
pub trait DictationService: Send + Sync {
    fn is_available(&self) -> bool;

    fn start_dictation(&self, locale: &LocaleId) -> Result<(), DictationError>;

    fn stop_dictation(&self) -> Result<(), DictationError>;
}

#[derive(Debug, Default)]
pub struct DisabledDictationService;

impl DictationService for DisabledDictationService {
    fn is_available(&self) -> bool {
        false
    }

    fn start_dictation(&self, _locale: &LocaleId) -> Result<(), DictationError> {
        Err(DictationError::Disabled)
    }

    fn stop_dictation(&self) -> Result<(), DictationError> {
        Err(DictationError::Disabled)
    }
}
