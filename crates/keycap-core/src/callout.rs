//! Secondary actions shown when a button is long-pressed, and the
//! observable callout state.

use std::sync::{Arc, PoisonError, RwLock};

use crate::action::Action;
use crate::locale::LocaleId;
use crate::text::is_lowercased;

/// Resolves the secondary actions of a long-pressed button.
pub trait CalloutActionProvider: Send + Sync {
    fn callout_actions(&self, action: &Action) -> Vec<Action>;

    fn set_locale(&self, _locale: &LocaleId) {}
}

/// Locale-aware accent table. The base character always comes first, and
/// the casing of the pressed key carries over.
pub struct StandardCalloutActionProvider {
    locale: RwLock<LocaleId>,
}

impl StandardCalloutActionProvider {
    pub fn new(locale: LocaleId) -> Self {
        Self {
            locale: RwLock::new(locale),
        }
    }

    pub fn locale(&self) -> LocaleId {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn secondary_characters(lang: &str, base: &str) -> &'static str {
        let localized = match (lang, base) {
            ("sv", "a") => "aáàâãā",
            ("sv", "ä") => "äæ",
            ("sv", "ö") => "öøœ",
            ("sv", "o") => "oóòôõō",
            ("de", "a") => "aäàáâæãåā",
            ("de", "o") => "oöôòóœøōõ",
            ("de", "u") => "uüûùúū",
            _ => "",
        };
        if !localized.is_empty() {
            return localized;
        }
        match base {
            "a" => "aàáâäæãåā",
            "c" => "cçćč",
            "e" => "eèéêëēėę",
            "i" => "iîïíīįì",
            "n" => "nñń",
            "o" => "oôöòóœøōõ",
            "s" => "sßśš",
            "u" => "uûüùúū",
            "y" => "yÿ",
            "z" => "zžźż",
            "-" => "-–—•",
            "'" => "'‘’`",
            "\"" => "\"“”„«»",
            "." => ".…",
            "?" => "?¿",
            "!" => "!¡",
            _ => "",
        }
    }
}

impl Default for StandardCalloutActionProvider {
    fn default() -> Self {
        Self::new(LocaleId::default())
    }
}

impl CalloutActionProvider for StandardCalloutActionProvider {
    fn callout_actions(&self, action: &Action) -> Vec<Action> {
        let Action::Character(text) = action else {
            return Vec::new();
        };
        let lang = self.locale().language_code().unwrap_or_default();
        let base = text.to_lowercase();
        let chars = Self::secondary_characters(&lang, &base);
        let uppercase = !is_lowercased(text) && text.to_uppercase() == *text;
        chars
            .chars()
            .map(|c| {
                let s = c.to_string();
                Action::Character(if uppercase { s.to_uppercase() } else { s })
            })
            .collect()
    }

    fn set_locale(&self, locale: &LocaleId) {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale.clone();
    }
}

/// On-screen rectangle of the pressed button, in the host's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const ZERO: Frame = Frame {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone)]
pub struct ActionCalloutContext {
    pub button_frame: Frame,
    pub actions: Vec<Action>,
    pub selected_index: Option<usize>,
    /// Kept in step with the service registry's callout-action provider.
    pub action_provider: Arc<dyn CalloutActionProvider>,
}

impl ActionCalloutContext {
    pub fn new(action_provider: Arc<dyn CalloutActionProvider>) -> Self {
        Self {
            button_frame: Frame::ZERO,
            actions: Vec::new(),
            selected_index: None,
            action_provider,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Ask the provider for `action`'s secondary actions. Returns whether a
    /// callout is now showing.
    pub fn update_for(&mut self, action: &Action, frame: Frame) -> bool {
        let actions = self.action_provider.callout_actions(action);
        if actions.is_empty() {
            self.reset();
            return false;
        }
        self.button_frame = frame;
        self.actions = actions;
        self.selected_index = Some(0);
        true
    }

    /// Move the selection. Out-of-range indices are clamped.
    pub fn select(&mut self, index: usize) {
        if self.actions.is_empty() {
            return;
        }
        self.selected_index = Some(index.min(self.actions.len() - 1));
    }

    pub fn selected_action(&self) -> Option<&Action> {
        self.actions.get(self.selected_index?)
    }

    pub fn reset(&mut self) {
        self.button_frame = Frame::ZERO;
        self.actions.clear();
        self.selected_index = None;
    }
}

impl std::fmt::Debug for ActionCalloutContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCalloutContext")
            .field("button_frame", &self.button_frame)
            .field("actions", &self.actions)
            .field("selected_index", &self.selected_index)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputCalloutContext {
    pub button_frame: Frame,
    pub text: Option<String>,
}

impl InputCalloutContext {
    /// Preview the character a typing action would insert.
    pub fn update_for(&mut self, action: &Action, frame: Frame) {
        match action {
            Action::Character(text) => {
                self.button_frame = frame;
                self.text = Some(text.clone());
            }
            _ => self.reset(),
        }
    }

    pub fn reset(&mut self) {
        self.button_frame = Frame::ZERO;
        self.text = None;
    }
}

#[derive(Debug, Clone)]
pub struct CalloutContext {
    pub action_callout: ActionCalloutContext,
    pub input_callout: InputCalloutContext,
}

impl CalloutContext {
    pub fn new(action_provider: Arc<dyn CalloutActionProvider>) -> Self {
        Self {
            action_callout: ActionCalloutContext::new(action_provider),
            input_callout: InputCalloutContext::default(),
        }
    }

    pub fn reset(&mut self) {
        self.action_callout.reset();
        self.input_callout.reset();
    }
}
