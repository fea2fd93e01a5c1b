//! Resolves an action plus the keyboard context into button appearance.
//!
//! Image and text lookups match every `Action` variant, so adding a variant
//! forces a decision there. Text style, font weight and width list the
//! variants that differ and fall back to a default for the rest. Background
//! and foreground colors are driven by `Action::is_primary_action` /
//! `Action::is_system_action` only.

mod color;
mod image;


pub use color::{Color, Rgba};
pub use image::{button_image, ButtonImage};

use crate::action::{Action, KeyboardType, PrimaryType};
use crate::context::{ColorScheme, KeyboardContext};
use crate::l10n::KeyboardString;
use crate::text::is_lowercased;

/// How a row hands out horizontal space to its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    #[default]
    FillEqually,
    FillProportionally,
}

/// Relative text size, mirroring the platform's dynamic type styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title1,
    Title2,
    Body,
    Callout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub text_style: TextStyle,
    pub weight: Option<FontWeight>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub background_color: Color,
    pub foreground_color: Color,
    pub image: Option<ButtonImage>,
    pub text: Option<String>,
    pub font: Font,
    pub shadow_color: Color,
    pub width: f64,
}

pub fn resolve_style(
    action: &Action,
    context: &KeyboardContext,
    is_pressed: bool,
    distribution: Distribution,
) -> StyleDescriptor {
    StyleDescriptor {
        background_color: background_color(action, context, is_pressed),
        foreground_color: foreground_color(action, context, is_pressed),
        image: button_image(action),
        text: button_text(action, context),
        font: font(action),
        shadow_color: shadow_color(action, context),
        width: button_width(action, distribution),
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub fn background_color(action: &Action, context: &KeyboardContext, is_pressed: bool) -> Color {
    if let Some(color) = background_color_for_all_states(action) {
        return color;
    }
    let scheme = context.color_scheme;
    if is_pressed {
        if action.is_primary_action() {
            match scheme {
                ColorScheme::Dark => Color::StandardDarkButton(scheme),
                ColorScheme::Light => Color::White,
            }
        } else if action.is_system_action() {
            Color::White
        } else {
            Color::StandardDarkButton(scheme)
        }
    } else if action.is_primary_action() {
        Color::Accent
    } else if action.is_system_action() {
        Color::StandardDarkButton(scheme)
    } else {
        Color::StandardButton(scheme)
    }
}

fn background_color_for_all_states(action: &Action) -> Option<Color> {
    match action {
        Action::None => Some(Color::Clear),
        Action::Emoji(_) | Action::EmojiCategory(_) => Some(Color::ClearInteractable),
        _ => None,
    }
}

pub fn foreground_color(action: &Action, context: &KeyboardContext, is_pressed: bool) -> Color {
    let scheme = context.color_scheme;
    if !action.is_primary_action() {
        return Color::StandardButtonTint(scheme);
    }
    match (is_pressed, scheme) {
        (false, _) | (true, ColorScheme::Dark) => Color::White,
        (true, ColorScheme::Light) => Color::StandardButtonTint(scheme),
    }
}

pub fn shadow_color(action: &Action, context: &KeyboardContext) -> Color {
    match action {
        Action::None | Action::Emoji(_) => Color::Clear,
        _ => Color::StandardButtonShadow(context.color_scheme),
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

pub fn button_text(action: &Action, context: &KeyboardContext) -> Option<String> {
    let localized = |s: KeyboardString| Some(s.text(&context.locale).to_string());
    match action {
        Action::Character(text) => Some(text.clone()),
        Action::Done => localized(KeyboardString::Done),
        Action::Emoji(emoji) => Some(emoji.char.clone()),
        Action::EmojiCategory(category) => Some(category.fallback_display_emoji().char),
        Action::Go => localized(KeyboardString::Go),
        Action::KeyboardType(keyboard_type) => keyboard_type_text(keyboard_type),
        Action::NextLocale => context.locale.language_code().map(|c| c.to_uppercase()),
        Action::Ok => localized(KeyboardString::Ok),
        Action::Primary(primary) => primary_text(*primary, context),
        Action::Return => localized(KeyboardString::Return),
        Action::Search => localized(KeyboardString::Search),
        Action::None
        | Action::Backspace
        | Action::Command
        | Action::Control
        | Action::Custom(_)
        | Action::Dictation
        | Action::DismissKeyboard
        | Action::Escape
        | Action::Function
        | Action::Image { .. }
        | Action::MoveCursorBackward
        | Action::MoveCursorForward
        | Action::NewLine
        | Action::NextKeyboard
        | Action::Option
        | Action::Settings
        | Action::Shift(_)
        | Action::Space
        | Action::SystemImage { .. }
        | Action::Tab => None,
    }
}

fn keyboard_type_text(keyboard_type: &KeyboardType) -> Option<String> {
    match keyboard_type {
        KeyboardType::Alphabetic(_) => Some("ABC".to_string()),
        KeyboardType::Numeric => Some("123".to_string()),
        KeyboardType::Symbolic => Some("#+=".to_string()),
        KeyboardType::Emojis | KeyboardType::Images | KeyboardType::Custom(_) => None,
    }
}

fn primary_text(primary: PrimaryType, context: &KeyboardContext) -> Option<String> {
    let s = match primary {
        PrimaryType::Done => KeyboardString::Done,
        PrimaryType::Go => KeyboardString::Go,
        PrimaryType::NewLine => return None,
        PrimaryType::Ok => KeyboardString::Ok,
        PrimaryType::Search => KeyboardString::Search,
    };
    Some(s.text(&context.locale).to_string())
}

// ---------------------------------------------------------------------------
// Font
// ---------------------------------------------------------------------------

pub fn font(action: &Action) -> Font {
    Font {
        text_style: text_style(action),
        weight: font_weight(action),
    }
}

pub fn text_style(action: &Action) -> TextStyle {
    if button_image(action).is_some() {
        return TextStyle::Title2;
    }
    match action {
        Action::Character(text) if is_lowercased(text) => TextStyle::Title1,
        Action::Emoji(_) => TextStyle::Title1,
        Action::EmojiCategory(_)
        | Action::KeyboardType(_)
        | Action::Primary(_)
        | Action::Return => TextStyle::Callout,
        Action::Space => TextStyle::Body,
        _ => TextStyle::Title2,
    }
}

pub fn font_weight(action: &Action) -> Option<FontWeight> {
    if button_image(action).is_some() {
        return Some(FontWeight::Light);
    }
    match action {
        Action::Character(text) if is_lowercased(text) => Some(FontWeight::Light),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Width
// ---------------------------------------------------------------------------

pub fn button_width(action: &Action, distribution: Distribution) -> f64 {
    let widths = &crate::settings::settings().width;
    let base = match action {
        Action::None => widths.none,
        Action::NewLine => widths.new_line,
        Action::Shift(_) | Action::Backspace | Action::KeyboardType(_) => widths.system,
        Action::Space => widths.space,
        _ => widths.standard,
    };
    match distribution {
        Distribution::FillEqually => base,
        Distribution::FillProportionally => base * widths.proportional_factor,
    }
}
