//! Semantic keyboard actions.
//!
//! An `Action` identifies what a button *is* (a character, backspace, a
//! keyboard switcher, ...) independent of how it is drawn. Layout providers
//! create them, the style resolver and the action handler consume them.

/// Letter casing of an alphabetic keyboard. Doubles as the shift state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardCase {
    /// Casing picked by the keyboard behavior (e.g. sentence start).
    Auto,
    Lowercased,
    Uppercased,
    CapsLocked,
}

impl KeyboardCase {
    pub fn is_uppercased(self) -> bool {
        matches!(self, Self::Uppercased | Self::CapsLocked)
    }

    /// Apply this casing to a single key's text.
    pub fn apply(self, text: &str) -> String {
        if self.is_uppercased() {
            text.to_uppercase()
        } else {
            text.to_lowercase()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyboardType {
    Alphabetic(KeyboardCase),
    Numeric,
    Symbolic,
    Emojis,
    Images,
    Custom(String),
}

impl KeyboardType {
    pub fn is_alphabetic(&self) -> bool {
        matches!(self, Self::Alphabetic(_))
    }

    pub fn is_alphabetic_uppercased(&self) -> bool {
        matches!(self, Self::Alphabetic(case) if case.is_uppercased())
    }
}

impl Default for KeyboardType {
    fn default() -> Self {
        Self::Alphabetic(KeyboardCase::Lowercased)
    }
}

/// Subtype of the keyboard-type specific confirm/submit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryType {
    Done,
    Go,
    NewLine,
    Ok,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmojiCategory {
    Frequent,
    Smileys,
    Animals,
    Foods,
    Activities,
    Travels,
    Objects,
    Symbols,
    Flags,
}

impl EmojiCategory {
    pub const ALL: [EmojiCategory; 9] = [
        Self::Frequent,
        Self::Smileys,
        Self::Animals,
        Self::Foods,
        Self::Activities,
        Self::Travels,
        Self::Objects,
        Self::Symbols,
        Self::Flags,
    ];

    /// Glyph shown on a category button when no icon is available.
    pub fn fallback_display_emoji(self) -> Emoji {
        let glyph = match self {
            Self::Frequent => "🕓",
            Self::Smileys => "😀",
            Self::Animals => "🐻",
            Self::Foods => "🍔",
            Self::Activities => "⚽️",
            Self::Travels => "🚗",
            Self::Objects => "⏰",
            Self::Symbols => "💱",
            Self::Flags => "🏳️",
        };
        Emoji::new(glyph)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Emoji {
    pub char: String,
}

impl Emoji {
    pub fn new(char: impl Into<String>) -> Self {
        Self { char: char.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    None,
    Backspace,
    Character(String),
    Command,
    Control,
    Custom(String),
    Dictation,
    DismissKeyboard,
    Done,
    Emoji(Emoji),
    EmojiCategory(EmojiCategory),
    Escape,
    Function,
    Go,
    Image {
        description: String,
        image_name: String,
    },
    KeyboardType(KeyboardType),
    MoveCursorBackward,
    MoveCursorForward,
    NewLine,
    NextKeyboard,
    NextLocale,
    Ok,
    Option,
    Primary(PrimaryType),
    Return,
    Search,
    Settings,
    Shift(KeyboardCase),
    Space,
    SystemImage {
        description: String,
        image_name: String,
    },
    Tab,
}

impl Action {
    pub fn character(text: impl Into<String>) -> Self {
        Self::Character(text.into())
    }

    /// Keyboard-type specific confirm/submit actions.
    pub fn is_primary_action(&self) -> bool {
        matches!(
            self,
            Self::Done | Self::Go | Self::Ok | Self::Search | Self::Primary(_)
        )
    }

    /// Everything that does more than type text.
    pub fn is_system_action(&self) -> bool {
        !matches!(self, Self::Character(_) | Self::Image { .. } | Self::Space)
    }

    pub fn is_shift(&self) -> bool {
        matches!(self, Self::Shift(_))
    }

    /// Text this action types into the document, if any.
    pub fn input_text(&self) -> Option<&str> {
        match self {
            Self::Character(text) => Some(text),
            Self::Emoji(emoji) => Some(&emoji.char),
            Self::Space => Some(" "),
            Self::Tab => Some("\t"),
            Self::NewLine | Self::Return | Self::Primary(PrimaryType::NewLine) => Some("\n"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_actions() {
        assert!(Action::Done.is_primary_action());
        assert!(Action::Primary(PrimaryType::Search).is_primary_action());
        assert!(!Action::Return.is_primary_action());
        assert!(!Action::character("a").is_primary_action());
    }

    #[test]
    fn test_system_actions_exclude_typing() {
        assert!(!Action::character("a").is_system_action());
        assert!(!Action::Space.is_system_action());
        assert!(!Action::Image {
            description: "cat".into(),
            image_name: "cat".into()
        }
        .is_system_action());
        assert!(Action::Backspace.is_system_action());
        assert!(Action::Shift(KeyboardCase::Lowercased).is_system_action());
        assert!(Action::Primary(PrimaryType::Done).is_system_action());
    }

    #[test]
    fn test_input_text() {
        assert_eq!(Action::character("x").input_text(), Some("x"));
        assert_eq!(Action::Emoji(Emoji::new("🙂")).input_text(), Some("🙂"));
        assert_eq!(Action::Primary(PrimaryType::NewLine).input_text(), Some("\n"));
        assert_eq!(Action::Primary(PrimaryType::Go).input_text(), None);
        assert_eq!(Action::Backspace.input_text(), None);
    }

    #[test]
    fn test_case_apply() {
        assert_eq!(KeyboardCase::CapsLocked.apply("ä"), "Ä");
        assert_eq!(KeyboardCase::Auto.apply("Q"), "q");
    }
}
