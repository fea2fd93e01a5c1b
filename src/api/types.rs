use keycap_core::action::{Action, Emoji, EmojiCategory, KeyboardCase, KeyboardType, PrimaryType};
use keycap_core::callout::Frame;
use keycap_core::context::{AutocompleteContext, ColorScheme, KeyboardContext, Suggestion};
use keycap_core::feedback::{AudioFeedback, FeedbackConfiguration, HapticFeedback};
use keycap_core::proxy::{Autocapitalization, KeyboardAppearance};
use keycap_core::style::{Color, FontWeight, StyleDescriptor, TextStyle};
use keycap_session::services::{ActionEffect, HostRequest};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KcError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for KcError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Internal { msg: e.reason }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KcSuggestion {
    pub text: String,
    pub is_autocorrect: bool,
    pub is_unknown: bool,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KcAutocompleteState {
    pub suggestions: Vec<KcSuggestion>,
    pub is_enabled: bool,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KcKeyboardState {
    pub has_full_access: bool,
    pub has_dictation_key: bool,
    pub needs_input_mode_switch_key: bool,
    pub keyboard_type: KcKeyboardType,
    pub locale: String,
    pub locales: Vec<String>,
    pub color_scheme: KcColorScheme,
}

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct KcFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct KcColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

/// Resolved appearance of one button.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct KcButtonStyle {
    pub background_color: KcColor,
    pub foreground_color: KcColor,
    pub shadow_color: KcColor,
    /// Platform symbol name of the button image.
    pub image: Option<String>,
    pub text: Option<String>,
    pub text_style: KcTextStyle,
    pub font_weight: Option<KcFontWeight>,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct KcFeedbackConfiguration {
    pub audio: KcAudioFeedback,
    pub haptic: KcHapticFeedback,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcKeyboardCase {
    Auto,
    Lowercased,
    Uppercased,
    CapsLocked,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcKeyboardType {
    Alphabetic { keyboard_case: KcKeyboardCase },
    Numeric,
    Symbolic,
    Emojis,
    Images,
    Custom { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcPrimaryType {
    Done,
    Go,
    NewLine,
    Ok,
    Search,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcEmojiCategory {
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

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcAction {
    None,
    Backspace,
    Character { text: String },
    Command,
    Control,
    Custom { name: String },
    Dictation,
    DismissKeyboard,
    Done,
    Emoji { emoji: String },
    EmojiCategory { category: KcEmojiCategory },
    Escape,
    Function,
    Go,
    Image { description: String, image_name: String },
    KeyboardType { keyboard_type: KcKeyboardType },
    MoveCursorBackward,
    MoveCursorForward,
    NewLine,
    NextKeyboard,
    NextLocale,
    Ok,
    Option,
    Primary { primary: KcPrimaryType },
    Return,
    Search,
    Settings,
    Shift { keyboard_case: KcKeyboardCase },
    Space,
    SystemImage { description: String, image_name: String },
    Tab,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcActionEffect {
    Handled,
    Unhandled,
    SwitchKeyboardType { keyboard_type: KcKeyboardType },
    SwitchLocale { locale: String },
    StartDictation,
    DismissKeyboard,
    NextKeyboard,
    OpenSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcColorScheme {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcKeyboardAppearance {
    Default,
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcAutocapitalization {
    None,
    Words,
    Sentences,
    AllCharacters,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcTextStyle {
    Title1,
    Title2,
    Body,
    Callout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcFontWeight {
    Light,
    Regular,
    Medium,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcAudioFeedback {
    Enabled,
    Disabled,
    Custom { sound_id: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KcHapticFeedback {
    Enabled,
    Minimal,
    Disabled,
    Custom { intensity: u8 },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<KcKeyboardCase> for KeyboardCase {
    fn from(case: KcKeyboardCase) -> Self {
        match case {
            KcKeyboardCase::Auto => Self::Auto,
            KcKeyboardCase::Lowercased => Self::Lowercased,
            KcKeyboardCase::Uppercased => Self::Uppercased,
            KcKeyboardCase::CapsLocked => Self::CapsLocked,
        }
    }
}

impl From<KeyboardCase> for KcKeyboardCase {
    fn from(case: KeyboardCase) -> Self {
        match case {
            KeyboardCase::Auto => Self::Auto,
            KeyboardCase::Lowercased => Self::Lowercased,
            KeyboardCase::Uppercased => Self::Uppercased,
            KeyboardCase::CapsLocked => Self::CapsLocked,
        }
    }
}

impl From<KcKeyboardType> for KeyboardType {
    fn from(keyboard_type: KcKeyboardType) -> Self {
        match keyboard_type {
            KcKeyboardType::Alphabetic { keyboard_case } => Self::Alphabetic(keyboard_case.into()),
            KcKeyboardType::Numeric => Self::Numeric,
            KcKeyboardType::Symbolic => Self::Symbolic,
            KcKeyboardType::Emojis => Self::Emojis,
            KcKeyboardType::Images => Self::Images,
            KcKeyboardType::Custom { name } => Self::Custom(name),
        }
    }
}

impl From<&KeyboardType> for KcKeyboardType {
    fn from(keyboard_type: &KeyboardType) -> Self {
        match keyboard_type {
            KeyboardType::Alphabetic(case) => Self::Alphabetic {
                keyboard_case: (*case).into(),
            },
            KeyboardType::Numeric => Self::Numeric,
            KeyboardType::Symbolic => Self::Symbolic,
            KeyboardType::Emojis => Self::Emojis,
            KeyboardType::Images => Self::Images,
            KeyboardType::Custom(name) => Self::Custom { name: name.clone() },
        }
    }
}

impl From<KcPrimaryType> for PrimaryType {
    fn from(primary: KcPrimaryType) -> Self {
        match primary {
            KcPrimaryType::Done => Self::Done,
            KcPrimaryType::Go => Self::Go,
            KcPrimaryType::NewLine => Self::NewLine,
            KcPrimaryType::Ok => Self::Ok,
            KcPrimaryType::Search => Self::Search,
        }
    }
}

impl From<PrimaryType> for KcPrimaryType {
    fn from(primary: PrimaryType) -> Self {
        match primary {
            PrimaryType::Done => Self::Done,
            PrimaryType::Go => Self::Go,
            PrimaryType::NewLine => Self::NewLine,
            PrimaryType::Ok => Self::Ok,
            PrimaryType::Search => Self::Search,
        }
    }
}

impl From<KcEmojiCategory> for EmojiCategory {
    fn from(category: KcEmojiCategory) -> Self {
        match category {
            KcEmojiCategory::Frequent => Self::Frequent,
            KcEmojiCategory::Smileys => Self::Smileys,
            KcEmojiCategory::Animals => Self::Animals,
            KcEmojiCategory::Foods => Self::Foods,
            KcEmojiCategory::Activities => Self::Activities,
            KcEmojiCategory::Travels => Self::Travels,
            KcEmojiCategory::Objects => Self::Objects,
            KcEmojiCategory::Symbols => Self::Symbols,
            KcEmojiCategory::Flags => Self::Flags,
        }
    }
}

impl From<EmojiCategory> for KcEmojiCategory {
    fn from(category: EmojiCategory) -> Self {
        match category {
            EmojiCategory::Frequent => Self::Frequent,
            EmojiCategory::Smileys => Self::Smileys,
            EmojiCategory::Animals => Self::Animals,
            EmojiCategory::Foods => Self::Foods,
            EmojiCategory::Activities => Self::Activities,
            EmojiCategory::Travels => Self::Travels,
            EmojiCategory::Objects => Self::Objects,
            EmojiCategory::Symbols => Self::Symbols,
            EmojiCategory::Flags => Self::Flags,
        }
    }
}

impl From<KcAction> for Action {
    fn from(action: KcAction) -> Self {
        match action {
            KcAction::None => Self::None,
            KcAction::Backspace => Self::Backspace,
            KcAction::Character { text } => Self::Character(text),
            KcAction::Command => Self::Command,
            KcAction::Control => Self::Control,
            KcAction::Custom { name } => Self::Custom(name),
            KcAction::Dictation => Self::Dictation,
            KcAction::DismissKeyboard => Self::DismissKeyboard,
            KcAction::Done => Self::Done,
            KcAction::Emoji { emoji } => Self::Emoji(Emoji::new(emoji)),
            KcAction::EmojiCategory { category } => Self::EmojiCategory(category.into()),
            KcAction::Escape => Self::Escape,
            KcAction::Function => Self::Function,
            KcAction::Go => Self::Go,
            KcAction::Image {
                description,
                image_name,
            } => Self::Image {
                description,
                image_name,
            },
            KcAction::KeyboardType { keyboard_type } => Self::KeyboardType(keyboard_type.into()),
            KcAction::MoveCursorBackward => Self::MoveCursorBackward,
            KcAction::MoveCursorForward => Self::MoveCursorForward,
            KcAction::NewLine => Self::NewLine,
            KcAction::NextKeyboard => Self::NextKeyboard,
            KcAction::NextLocale => Self::NextLocale,
            KcAction::Ok => Self::Ok,
            KcAction::Option => Self::Option,
            KcAction::Primary { primary } => Self::Primary(primary.into()),
            KcAction::Return => Self::Return,
            KcAction::Search => Self::Search,
            KcAction::Settings => Self::Settings,
            KcAction::Shift { keyboard_case } => Self::Shift(keyboard_case.into()),
            KcAction::Space => Self::Space,
            KcAction::SystemImage {
                description,
                image_name,
            } => Self::SystemImage {
                description,
                image_name,
            },
            KcAction::Tab => Self::Tab,
        }
    }
}

impl From<&Action> for KcAction {
    fn from(action: &Action) -> Self {
        match action {
            Action::None => Self::None,
            Action::Backspace => Self::Backspace,
            Action::Character(text) => Self::Character { text: text.clone() },
            Action::Command => Self::Command,
            Action::Control => Self::Control,
            Action::Custom(name) => Self::Custom { name: name.clone() },
            Action::Dictation => Self::Dictation,
            Action::DismissKeyboard => Self::DismissKeyboard,
            Action::Done => Self::Done,
            Action::Emoji(emoji) => Self::Emoji {
                emoji: emoji.char.clone(),
            },
            Action::EmojiCategory(category) => Self::EmojiCategory {
                category: (*category).into(),
            },
            Action::Escape => Self::Escape,
            Action::Function => Self::Function,
            Action::Go => Self::Go,
            Action::Image {
                description,
                image_name,
            } => Self::Image {
                description: description.clone(),
                image_name: image_name.clone(),
            },
            Action::KeyboardType(keyboard_type) => Self::KeyboardType {
                keyboard_type: keyboard_type.into(),
            },
            Action::MoveCursorBackward => Self::MoveCursorBackward,
            Action::MoveCursorForward => Self::MoveCursorForward,
            Action::NewLine => Self::NewLine,
            Action::NextKeyboard => Self::NextKeyboard,
            Action::NextLocale => Self::NextLocale,
            Action::Ok => Self::Ok,
            Action::Option => Self::Option,
            Action::Primary(primary) => Self::Primary {
                primary: (*primary).into(),
            },
            Action::Return => Self::Return,
            Action::Search => Self::Search,
            Action::Settings => Self::Settings,
            Action::Shift(case) => Self::Shift {
                keyboard_case: (*case).into(),
            },
            Action::Space => Self::Space,
            Action::SystemImage {
                description,
                image_name,
            } => Self::SystemImage {
                description: description.clone(),
                image_name: image_name.clone(),
            },
            Action::Tab => Self::Tab,
        }
    }
}

impl From<&ActionEffect> for KcActionEffect {
    fn from(effect: &ActionEffect) -> Self {
        match effect {
            ActionEffect::Handled => Self::Handled,
            ActionEffect::Unhandled => Self::Unhandled,
            ActionEffect::SwitchKeyboardType(keyboard_type) => Self::SwitchKeyboardType {
                keyboard_type: keyboard_type.into(),
            },
            ActionEffect::SwitchLocale(locale) => Self::SwitchLocale {
                locale: locale.to_string(),
            },
            ActionEffect::StartDictation => Self::StartDictation,
            ActionEffect::Host(HostRequest::DismissKeyboard) => Self::DismissKeyboard,
            ActionEffect::Host(HostRequest::NextKeyboard) => Self::NextKeyboard,
            ActionEffect::Host(HostRequest::OpenSettings) => Self::OpenSettings,
        }
    }
}

impl From<KcColorScheme> for ColorScheme {
    fn from(scheme: KcColorScheme) -> Self {
        match scheme {
            KcColorScheme::Light => Self::Light,
            KcColorScheme::Dark => Self::Dark,
        }
    }
}

impl From<ColorScheme> for KcColorScheme {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

impl From<KcKeyboardAppearance> for KeyboardAppearance {
    fn from(appearance: KcKeyboardAppearance) -> Self {
        match appearance {
            KcKeyboardAppearance::Default => Self::Default,
            KcKeyboardAppearance::Dark => Self::Dark,
            KcKeyboardAppearance::Light => Self::Light,
        }
    }
}

impl From<KcAutocapitalization> for Autocapitalization {
    fn from(policy: KcAutocapitalization) -> Self {
        match policy {
            KcAutocapitalization::None => Self::None,
            KcAutocapitalization::Words => Self::Words,
            KcAutocapitalization::Sentences => Self::Sentences,
            KcAutocapitalization::AllCharacters => Self::AllCharacters,
        }
    }
}

impl From<KcFrame> for Frame {
    fn from(frame: KcFrame) -> Self {
        Self {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
        }
    }
}

impl From<KcSuggestion> for Suggestion {
    fn from(s: KcSuggestion) -> Self {
        Self {
            text: s.text,
            is_autocorrect: s.is_autocorrect,
            is_unknown: s.is_unknown,
        }
    }
}

impl From<&Suggestion> for KcSuggestion {
    fn from(s: &Suggestion) -> Self {
        Self {
            text: s.text.clone(),
            is_autocorrect: s.is_autocorrect,
            is_unknown: s.is_unknown,
        }
    }
}

impl From<&AutocompleteContext> for KcAutocompleteState {
    fn from(ctx: &AutocompleteContext) -> Self {
        Self {
            suggestions: ctx.suggestions.iter().map(KcSuggestion::from).collect(),
            is_enabled: ctx.is_enabled,
            is_loading: ctx.is_loading,
            last_error: ctx.last_error.clone(),
        }
    }
}

impl From<&KeyboardContext> for KcKeyboardState {
    fn from(ctx: &KeyboardContext) -> Self {
        Self {
            has_full_access: ctx.has_full_access,
            has_dictation_key: ctx.has_dictation_key,
            needs_input_mode_switch_key: ctx.needs_input_mode_switch_key,
            keyboard_type: (&ctx.keyboard_type).into(),
            locale: ctx.locale.to_string(),
            locales: ctx.locales.iter().map(|l| l.to_string()).collect(),
            color_scheme: ctx.color_scheme.into(),
        }
    }
}

impl From<Color> for KcColor {
    fn from(color: Color) -> Self {
        let rgba = color.rgba();
        Self {
            red: rgba.red,
            green: rgba.green,
            blue: rgba.blue,
            alpha: rgba.alpha,
        }
    }
}

impl From<TextStyle> for KcTextStyle {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::Title1 => Self::Title1,
            TextStyle::Title2 => Self::Title2,
            TextStyle::Body => Self::Body,
            TextStyle::Callout => Self::Callout,
        }
    }
}

impl From<FontWeight> for KcFontWeight {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Light => Self::Light,
            FontWeight::Regular => Self::Regular,
            FontWeight::Medium => Self::Medium,
        }
    }
}

impl From<StyleDescriptor> for KcButtonStyle {
    fn from(style: StyleDescriptor) -> Self {
        Self {
            background_color: style.background_color.into(),
            foreground_color: style.foreground_color.into(),
            shadow_color: style.shadow_color.into(),
            image: style.image.map(|image| image.symbol_name().to_string()),
            text: style.text,
            text_style: style.font.text_style.into(),
            font_weight: style.font.weight.map(KcFontWeight::from),
            width: style.width,
        }
    }
}

impl From<FeedbackConfiguration> for KcFeedbackConfiguration {
    fn from(config: FeedbackConfiguration) -> Self {
        let audio = match config.audio {
            AudioFeedback::Enabled => KcAudioFeedback::Enabled,
            AudioFeedback::Disabled => KcAudioFeedback::Disabled,
            AudioFeedback::Custom { sound_id } => KcAudioFeedback::Custom { sound_id },
        };
        let haptic = match config.haptic {
            HapticFeedback::Enabled => KcHapticFeedback::Enabled,
            HapticFeedback::Minimal => KcHapticFeedback::Minimal,
            HapticFeedback::Disabled => KcHapticFeedback::Disabled,
            HapticFeedback::Custom { intensity } => KcHapticFeedback::Custom { intensity },
        };
        Self { audio, haptic }
    }
}
