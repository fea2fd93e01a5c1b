use crate::action::{Action, KeyboardCase, KeyboardType, PrimaryType};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ButtonImage {
    Backspace,
    Command,
    Control,
    Dictation,
    EmojiKeyboard,
    Globe,
    ImageKeyboard,
    KeyboardDismiss,
    MoveCursorLeft,
    MoveCursorRight,
    NewLine,
    Option,
    Settings,
    ShiftLowercased,
    ShiftUppercased,
    CapsLocked,
    Tab,
    /// Image asset bundled with the keyboard.
    Asset(String),
    /// Platform symbol referenced by name.
    System(String),
}

impl ButtonImage {
    /// Platform symbol name used to draw this glyph.
    pub fn symbol_name(&self) -> &str {
        match self {
            Self::Backspace => "delete.left",
            Self::Command => "command",
            Self::Control => "control",
            Self::Dictation => "mic",
            Self::EmojiKeyboard => "face.smiling",
            Self::Globe => "globe",
            Self::ImageKeyboard => "photo",
            Self::KeyboardDismiss => "keyboard.chevron.compact.down",
            Self::MoveCursorLeft => "arrow.left",
            Self::MoveCursorRight => "arrow.right",
            Self::NewLine => "arrow.turn.down.left",
            Self::Option => "option",
            Self::Settings => "gearshape",
            Self::ShiftLowercased => "shift",
            Self::ShiftUppercased => "shift.fill",
            Self::CapsLocked => "capslock.fill",
            Self::Tab => "arrow.right.to.line",
            Self::Asset(name) | Self::System(name) => name,
        }
    }

    fn for_shift(case: KeyboardCase) -> Self {
        match case {
            KeyboardCase::Auto | KeyboardCase::Lowercased => Self::ShiftLowercased,
            KeyboardCase::Uppercased => Self::ShiftUppercased,
            KeyboardCase::CapsLocked => Self::CapsLocked,
        }
    }

    fn for_keyboard_type(keyboard_type: &KeyboardType) -> Option<Self> {
        match keyboard_type {
            KeyboardType::Emojis => Some(Self::EmojiKeyboard),
            KeyboardType::Images => Some(Self::ImageKeyboard),
            _ => None,
        }
    }

    fn for_primary(primary: PrimaryType) -> Option<Self> {
        match primary {
            PrimaryType::NewLine => Some(Self::NewLine),
            _ => None,
        }
    }
}

/// Glyph drawn on the button, if the action has one.
pub fn button_image(action: &Action) -> Option<ButtonImage> {
    match action {
        Action::Backspace => Some(ButtonImage::Backspace),
        Action::Command => Some(ButtonImage::Command),
        Action::Control => Some(ButtonImage::Control),
        Action::Dictation => Some(ButtonImage::Dictation),
        Action::DismissKeyboard => Some(ButtonImage::KeyboardDismiss),
        Action::Image { image_name, .. } => Some(ButtonImage::Asset(image_name.clone())),
        Action::KeyboardType(keyboard_type) => ButtonImage::for_keyboard_type(keyboard_type),
        Action::MoveCursorBackward => Some(ButtonImage::MoveCursorLeft),
        Action::MoveCursorForward => Some(ButtonImage::MoveCursorRight),
        Action::NewLine => Some(ButtonImage::NewLine),
        Action::NextKeyboard => Some(ButtonImage::Globe),
        Action::Option => Some(ButtonImage::Option),
        Action::Primary(primary) => ButtonImage::for_primary(*primary),
        Action::Settings => Some(ButtonImage::Settings),
        Action::Shift(case) => Some(ButtonImage::for_shift(*case)),
        Action::SystemImage { image_name, .. } => Some(ButtonImage::System(image_name.clone())),
        Action::Tab => Some(ButtonImage::Tab),
        Action::None
        | Action::Character(_)
        | Action::Custom(_)
        | Action::Done
        | Action::Emoji(_)
        | Action::EmojiCategory(_)
        | Action::Escape
        | Action::Function
        | Action::Go
        | Action::NextLocale
        | Action::Ok
        | Action::Return
        | Action::Search
        | Action::Space => None,
    }
}
