//! Observable records describing the current keyboard state.

use crate::action::KeyboardType;
use crate::locale::LocaleId;
use crate::proxy::ProxyRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Editing state mirrored from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardContext {
    pub has_full_access: bool,
    pub has_dictation_key: bool,
    pub needs_input_mode_switch_key: bool,
    pub keyboard_type: KeyboardType,
    pub locale: LocaleId,
    /// Locales cycled through by the next-locale key.
    pub locales: Vec<LocaleId>,
    pub color_scheme: ColorScheme,
    pub text_proxy: ProxyRef,
}

impl KeyboardContext {
    /// The locale after the current one in `locales`, wrapping around.
    /// `None` when there is nothing to switch to.
    pub fn next_locale(&self) -> Option<LocaleId> {
        if self.locales.len() < 2 {
            return None;
        }
        let next = match self.locales.iter().position(|l| *l == self.locale) {
            Some(i) => (i + 1) % self.locales.len(),
            None => 0,
        };
        Some(self.locales[next].clone())
    }
}

impl Default for KeyboardContext {
    fn default() -> Self {
        let settings = crate::settings::settings();
        let locale = LocaleId::new(settings.locale.default.as_str());
        let mut locales: Vec<LocaleId> = settings
            .locale
            .available
            .iter()
            .map(|l| LocaleId::new(l.as_str()))
            .collect();
        if !locales.contains(&locale) {
            locales.insert(0, locale.clone());
        }
        Self {
            has_full_access: false,
            has_dictation_key: false,
            needs_input_mode_switch_key: false,
            keyboard_type: KeyboardType::default(),
            locale,
            locales,
            color_scheme: ColorScheme::default(),
            text_proxy: ProxyRef::none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestion {
    pub text: String,
    /// Applied automatically when the current word ends.
    pub is_autocorrect: bool,
    /// The typed word itself, when the provider doesn't know it.
    pub is_unknown: bool,
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutocompleteContext {
    pub suggestions: Vec<Suggestion>,
    pub is_enabled: bool,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl AutocompleteContext {
    pub fn reset(&mut self) {
        self.suggestions.clear();
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::KeyboardCase;

    #[test]
    fn test_defaults() {
        let ctx = KeyboardContext::default();
        assert!(!ctx.has_full_access);
        assert!(!ctx.needs_input_mode_switch_key);
        assert_eq!(ctx.keyboard_type, KeyboardType::Alphabetic(KeyboardCase::Lowercased));
        assert_eq!(ctx.locale, LocaleId::new("en-US"));
        assert!(ctx.locales.contains(&ctx.locale));
        assert!(!ctx.text_proxy.is_set());
    }

    #[test]
    fn test_next_locale_wraps() {
        let mut ctx = KeyboardContext::default();
        ctx.locales = vec!["en-US".into(), "sv-SE".into(), "de-DE".into()];
        ctx.locale = "de-DE".into();
        assert_eq!(ctx.next_locale(), Some("en-US".into()));
        ctx.locale = "en-US".into();
        assert_eq!(ctx.next_locale(), Some("sv-SE".into()));
    }

    #[test]
    fn test_next_locale_single() {
        let mut ctx = KeyboardContext::default();
        ctx.locales = vec!["en-US".into()];
        assert_eq!(ctx.next_locale(), None);
    }
}
