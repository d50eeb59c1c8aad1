use crate::color::Hsv;
use crate::config::ToneConfig;

/// Accent order after the contrast check, and whether the background
/// shades still need to move away from the primary accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastGuard {
    pub primary: Hsv,
    pub secondary: Hsv,
    pub push_background: bool,
}

/// Keep the primary accent at least `min_value_separation` away from the
/// background value, preferring the secondary accent when it stands out more.
pub fn guard_contrast(
    primary: Hsv,
    secondary: Hsv,
    background_value: f32,
    tones: &ToneConfig,
) -> ContrastGuard {
    let separation = |c: Hsv| (c.v - background_value).abs();
    let (primary, secondary) = if separation(primary) < tones.min_value_separation
        && separation(secondary) > separation(primary)
    {
        (secondary, primary)
    } else {
        (primary, secondary)
    };
    ContrastGuard {
        primary,
        secondary,
        push_background: separation(primary) < tones.min_value_separation,
    }
}
