use keycap_core::action::{Action, KeyboardCase, KeyboardType};
use keycap_core::context::KeyboardContext;
use keycap_core::locale::LocaleId;
use keycap_core::proxy::TextProxy;

/// Requests the session forwards to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    DismissKeyboard,
    NextKeyboard,
    OpenSettings,
}

/// What the session should do after an action ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    /// Done; any text change went through the proxy.
    Handled,
    /// The handler doesn't know this action.
    Unhandled,
    SwitchKeyboardType(KeyboardType),
    SwitchLocale(LocaleId),
    StartDictation,
    Host(HostRequest),
}

/// Performs a tapped action.
pub trait ActionHandler: Send + Sync {
    fn handle(
        &self,
        action: &Action,
        context: &KeyboardContext,
        proxy: &dyn TextProxy,
    ) -> ActionEffect;
}

#[derive(Debug, Default)]
pub struct StandardActionHandler;

impl StandardActionHandler {
    fn next_shift_case(case: KeyboardCase) -> KeyboardCase {
        match case {
            KeyboardCase::Auto | KeyboardCase::Lowercased => KeyboardCase::Uppercased,
            KeyboardCase::Uppercased | KeyboardCase::CapsLocked => KeyboardCase::Lowercased,
        }
    }
}

impl ActionHandler for StandardActionHandler {
    fn handle(
        &self,
        action: &Action,
        context: &KeyboardContext,
        proxy: &dyn TextProxy,
    ) -> ActionEffect {
        if action.is_primary_action() {
            proxy.insert_text("\n");
            return ActionEffect::Handled;
        }
        if let Some(text) = action.input_text() {
            proxy.insert_text(text);
            return ActionEffect::Handled;
        }
        match action {
            Action::Backspace => {
                proxy.delete_backward();
                ActionEffect::Handled
            }
            Action::Shift(case) => ActionEffect::SwitchKeyboardType(KeyboardType::Alphabetic(
                Self::next_shift_case(*case),
            )),
            Action::KeyboardType(keyboard_type) => {
                ActionEffect::SwitchKeyboardType(keyboard_type.clone())
            }
            Action::NextLocale => context
                .next_locale()
                .map_or(ActionEffect::Unhandled, ActionEffect::SwitchLocale),
            Action::Dictation => ActionEffect::StartDictation,
            Action::DismissKeyboard => ActionEffect::Host(HostRequest::DismissKeyboard),
            Action::NextKeyboard => ActionEffect::Host(HostRequest::NextKeyboard),
            Action::Settings => ActionEffect::Host(HostRequest::OpenSettings),
            Action::MoveCursorBackward => {
                proxy.adjust_text_position(-1);
                ActionEffect::Handled
            }
            Action::MoveCursorForward => {
                proxy.adjust_text_position(1);
                ActionEffect::Handled
            }
            _ => ActionEffect::Unhandled,
        }
    }
}
