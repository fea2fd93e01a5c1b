use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFeedback {
    Enabled,
    Disabled,
    Custom { sound_id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticFeedback {
    Enabled,
    Minimal,
    Disabled,
    Custom { intensity: u8 },
}

/// How the keyboard should give audio and haptic feedback. Playback itself
/// happens outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeedbackConfiguration {
    pub audio: AudioFeedback,
    pub haptic: HapticFeedback,
}

impl Default for FeedbackConfiguration {
    fn default() -> Self {
        crate::settings::settings().feedback
    }
}
