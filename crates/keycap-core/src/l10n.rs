//! Built-in button titles for the few keys that show a localized word.

use crate::locale::LocaleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardString {
    Done,
    Go,
    Ok,
    Return,
    Search,
    Space,
}

impl KeyboardString {
    /// Title in `locale`'s language, falling back to English.
    pub fn text(self, locale: &LocaleId) -> &'static str {
        let lang = locale.language_code();
        match lang.as_deref() {
            Some("sv") => self.swedish(),
            Some("de") => self.german(),
            _ => self.english(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Go => "go",
            Self::Ok => "OK",
            Self::Return => "return",
            Self::Search => "search",
            Self::Space => "space",
        }
    }

    fn swedish(self) -> &'static str {
        match self {
            Self::Done => "klar",
            Self::Go => "gå",
            Self::Ok => "OK",
            Self::Return => "retur",
            Self::Search => "sök",
            Self::Space => "mellanslag",
        }
    }

    fn german(self) -> &'static str {
        match self {
            Self::Done => "Fertig",
            Self::Go => "Los",
            Self::Ok => "OK",
            Self::Return => "Return",
            Self::Search => "Suchen",
            Self::Space => "Leerzeichen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(KeyboardString::Done.text(&"sv-SE".into()), "klar");
        assert_eq!(KeyboardString::Search.text(&"de-AT".into()), "Suchen");
        assert_eq!(KeyboardString::Go.text(&"en-GB".into()), "go");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(KeyboardString::Return.text(&"fi-FI".into()), "return");
        assert_eq!(KeyboardString::Return.text(&"".into()), "return");
    }
}
