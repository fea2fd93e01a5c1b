use crate::context::ColorScheme;

/// Straight (non-premultiplied) RGBA, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

const fn gray(level: f32, alpha: f32) -> Rgba {
    Rgba {
        red: level,
        green: level,
        blue: level,
        alpha,
    }
}

/// Semantic button palette. Scheme-dependent entries carry the scheme they
/// were resolved for so the descriptor stays a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Clear,
    /// Visually clear but still receives touches.
    ClearInteractable,
    Accent,
    White,
    StandardButton(ColorScheme),
    StandardDarkButton(ColorScheme),
    StandardButtonTint(ColorScheme),
    StandardButtonShadow(ColorScheme),
}

impl Color {
    pub fn rgba(self) -> Rgba {
        use ColorScheme::{Dark, Light};
        match self {
            Self::Clear => gray(0.0, 0.0),
            Self::ClearInteractable => gray(0.0, 0.001),
            Self::Accent => Rgba {
                red: 0.0,
                green: 0.478,
                blue: 1.0,
                alpha: 1.0,
            },
            Self::White => gray(1.0, 1.0),
            Self::StandardButton(Light) => gray(1.0, 1.0),
            Self::StandardButton(Dark) => gray(0.42, 1.0),
            Self::StandardDarkButton(Light) => Rgba {
                red: 0.67,
                green: 0.69,
                blue: 0.73,
                alpha: 1.0,
            },
            Self::StandardDarkButton(Dark) => gray(0.27, 1.0),
            Self::StandardButtonTint(Light) => gray(0.0, 1.0),
            Self::StandardButtonTint(Dark) => gray(1.0, 1.0),
            Self::StandardButtonShadow(Light) => gray(0.0, 0.3),
            Self::StandardButtonShadow(Dark) => gray(0.0, 0.6),
        }
    }

    /// Hex form `#RRGGBBAA`.
    pub fn hex(self) -> String {
        let Rgba {
            red,
            green,
            blue,
            alpha,
        } = self.rgba();
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(red),
            byte(green),
            byte(blue),
            byte(alpha)
        )
    }
}
