use std::fmt;

/// BCP 47-ish locale identifier, e.g. `en-US`, `sv-SE`, `de`.
///
/// Both `-` and `_` separators are accepted; the stored form keeps what
/// the caller passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased language subtag (`sv` for `sv-SE`). `None` for an empty id.
    pub fn language_code(&self) -> Option<String> {
        let code = self.0.split(['-', '_']).next()?;
        if code.is_empty() {
            None
        } else {
            Some(code.to_ascii_lowercase())
        }
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        Self::new(crate::settings::settings().locale.default.as_str())
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
