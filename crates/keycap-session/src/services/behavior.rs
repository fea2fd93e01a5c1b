use keycap_core::action::{Action, KeyboardCase, KeyboardType};
use keycap_core::context::KeyboardContext;
use keycap_core::proxy::{Autocapitalization, TextProxy};
use keycap_core::text;

/// Keyboard-type transitions that follow typing.
pub trait KeyboardBehavior: Send + Sync {
    /// Keyboard type to switch to right after `action` was handled.
    fn preferred_keyboard_type_after_action(
        &self,
        action: &Action,
        context: &KeyboardContext,
    ) -> Option<KeyboardType>;

    fn should_switch_to_preferred_keyboard_type_after_text_did_change(&self) -> bool;

    /// Keyboard type matching the text around the cursor.
    fn preferred_keyboard_type(
        &self,
        context: &KeyboardContext,
        proxy: &dyn TextProxy,
    ) -> KeyboardType;
}

/// Auto-lowercase after an uppercase letter, back to letters after a space
/// on the number/symbol keyboards, and autocapitalization driven by the
/// proxy's policy. Caps lock is never undone automatically.
#[derive(Debug, Default)]
pub struct StandardKeyboardBehavior;

impl StandardKeyboardBehavior {
    fn should_uppercase(proxy: &dyn TextProxy) -> bool {
        let before = proxy.document_context_before_input();
        match proxy.autocapitalization() {
            Autocapitalization::None => false,
            Autocapitalization::AllCharacters => true,
            Autocapitalization::Sentences => text::is_cursor_at_new_sentence(before.as_deref()),
            Autocapitalization::Words => before
                .as_deref()
                .map_or(true, |b| b.is_empty() || b.ends_with(char::is_whitespace)),
        }
    }
}

impl KeyboardBehavior for StandardKeyboardBehavior {
    fn preferred_keyboard_type_after_action(
        &self,
        action: &Action,
        context: &KeyboardContext,
    ) -> Option<KeyboardType> {
        match (&context.keyboard_type, action) {
            (
                KeyboardType::Alphabetic(KeyboardCase::Uppercased | KeyboardCase::Auto),
                Action::Character(_) | Action::Emoji(_),
            ) => Some(KeyboardType::Alphabetic(KeyboardCase::Lowercased)),
            (KeyboardType::Numeric | KeyboardType::Symbolic, Action::Space) => {
                Some(KeyboardType::Alphabetic(KeyboardCase::Lowercased))
            }
            _ => None,
        }
    }

    fn should_switch_to_preferred_keyboard_type_after_text_did_change(&self) -> bool {
        true
    }

    fn preferred_keyboard_type(
        &self,
        context: &KeyboardContext,
        proxy: &dyn TextProxy,
    ) -> KeyboardType {
        match &context.keyboard_type {
            KeyboardType::Alphabetic(KeyboardCase::CapsLocked) => context.keyboard_type.clone(),
            KeyboardType::Alphabetic(_) => {
                if Self::should_uppercase(proxy) {
                    KeyboardType::Alphabetic(KeyboardCase::Uppercased)
                } else {
                    KeyboardType::Alphabetic(KeyboardCase::Lowercased)
                }
            }
            other => other.clone(),
        }
    }
}
