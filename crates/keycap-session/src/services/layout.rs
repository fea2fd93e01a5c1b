use std::sync::{PoisonError, RwLock};

use keycap_core::action::{Action, EmojiCategory, KeyboardCase, KeyboardType, PrimaryType};
use keycap_core::context::KeyboardContext;
use keycap_core::locale::LocaleId;

/// Rows of actions, top to bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyboardLayout {
    pub rows: Vec<Vec<Action>>,
}

impl KeyboardLayout {
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.rows.iter().flatten()
    }
}

pub trait LayoutProvider: Send + Sync {
    fn keyboard_layout(&self, context: &KeyboardContext) -> KeyboardLayout;

    fn set_locale(&self, _locale: &LocaleId) {}
}

/// System-like layouts with locale-specific letter rows (en, sv, de).
pub struct StandardLayoutProvider {
    locale: RwLock<LocaleId>,
}

const NUMERIC_ROWS: [&str; 3] = ["1234567890", "-/:;()$&@\"", ".,?!'"];
const SYMBOLIC_ROWS: [&str; 3] = ["[]{}#%^*+=", "_\\|~<>€£¥•", ".,?!'"];

impl StandardLayoutProvider {
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

    fn letter_rows(&self) -> [&'static str; 3] {
        match self.locale().language_code().as_deref() {
            Some("sv") => ["qwertyuiopå", "asdfghjklöä", "zxcvbnm"],
            Some("de") => ["qwertzuiopü", "asdfghjklöä", "yxcvbnm"],
            _ => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
        }
    }

    fn characters(row: &str, case: Option<KeyboardCase>) -> Vec<Action> {
        row.chars()
            .map(|c| {
                let s = c.to_string();
                Action::Character(match case {
                    Some(case) => case.apply(&s),
                    None => s,
                })
            })
            .collect()
    }

    fn input_rows(rows: [&str; 3], case: Option<KeyboardCase>, left: Action) -> Vec<Vec<Action>> {
        let mut third = vec![left];
        third.extend(Self::characters(rows[2], case));
        third.push(Action::Backspace);
        vec![
            Self::characters(rows[0], case),
            Self::characters(rows[1], case),
            third,
        ]
    }

    fn bottom_row(context: &KeyboardContext) -> Vec<Action> {
        let switcher = match context.keyboard_type {
            KeyboardType::Alphabetic(_) => KeyboardType::Numeric,
            _ => KeyboardType::Alphabetic(KeyboardCase::Lowercased),
        };
        let mut row = vec![Action::KeyboardType(switcher)];
        if context.needs_input_mode_switch_key {
            row.push(Action::NextKeyboard);
        }
        if context.has_dictation_key {
            row.push(Action::Dictation);
        }
        row.push(Action::Space);
        row.push(Action::Primary(PrimaryType::NewLine));
        row
    }
}

impl Default for StandardLayoutProvider {
    fn default() -> Self {
        Self::new(LocaleId::default())
    }
}

impl LayoutProvider for StandardLayoutProvider {
    fn keyboard_layout(&self, context: &KeyboardContext) -> KeyboardLayout {
        let mut rows = match &context.keyboard_type {
            KeyboardType::Alphabetic(case) => {
                Self::input_rows(self.letter_rows(), Some(*case), Action::Shift(*case))
            }
            KeyboardType::Numeric => Self::input_rows(
                NUMERIC_ROWS,
                None,
                Action::KeyboardType(KeyboardType::Symbolic),
            ),
            KeyboardType::Symbolic => Self::input_rows(
                SYMBOLIC_ROWS,
                None,
                Action::KeyboardType(KeyboardType::Numeric),
            ),
            KeyboardType::Emojis => vec![EmojiCategory::ALL
                .iter()
                .map(|c| Action::EmojiCategory(*c))
                .collect()],
            KeyboardType::Images | KeyboardType::Custom(_) => Vec::new(),
        };
        rows.push(Self::bottom_row(context));
        KeyboardLayout { rows }
    }

    fn set_locale(&self, locale: &LocaleId) {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(keyboard_type: KeyboardType) -> KeyboardContext {
        KeyboardContext {
            keyboard_type,
            ..KeyboardContext::default()
        }
    }

    #[test]
    fn test_alphabetic_rows_follow_case() {
        let provider = StandardLayoutProvider::new("en-US".into());
        let layout = provider.keyboard_layout(&context(KeyboardType::Alphabetic(
            KeyboardCase::Uppercased,
        )));
        assert_eq!(layout.rows.len(), 4);
        assert_eq!(layout.rows[0][0], Action::character("Q"));
        assert_eq!(layout.rows[2][0], Action::Shift(KeyboardCase::Uppercased));
        assert_eq!(layout.rows[2].last(), Some(&Action::Backspace));
    }

    #[test]
    fn test_locale_changes_letters() {
        let provider = StandardLayoutProvider::new("en-US".into());
        let ctx = context(KeyboardType::default());
        assert!(!provider.keyboard_layout(&ctx).actions().any(|a| *a == Action::character("å")));
        provider.set_locale(&"sv-SE".into());
        assert!(provider.keyboard_layout(&ctx).actions().any(|a| *a == Action::character("å")));
    }

    #[test]
    fn test_bottom_row_reflects_host_flags() {
        let provider = StandardLayoutProvider::default();
        let mut ctx = context(KeyboardType::Numeric);
        let bottom = provider.keyboard_layout(&ctx).rows.pop().unwrap();
        assert_eq!(
            bottom,
            vec![
                Action::KeyboardType(KeyboardType::Alphabetic(KeyboardCase::Lowercased)),
                Action::Space,
                Action::Primary(PrimaryType::NewLine),
            ]
        );

        ctx.needs_input_mode_switch_key = true;
        ctx.has_dictation_key = true;
        let bottom = provider.keyboard_layout(&ctx).rows.pop().unwrap();
        assert_eq!(bottom[1], Action::NextKeyboard);
        assert_eq!(bottom[2], Action::Dictation);
    }

    #[test]
    fn test_emoji_layout_lists_categories() {
        let provider = StandardLayoutProvider::default();
        let layout = provider.keyboard_layout(&context(KeyboardType::Emojis));
        assert_eq!(layout.rows[0].len(), EmojiCategory::ALL.len());
    }
}
