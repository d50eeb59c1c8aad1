use crate::cli::ThemeMode;
use crate::color::Hsv;

/// Inclusive saturation/value window a color must fall inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub min_saturation: f32,
    pub max_saturation: f32,
    pub min_value: f32,
    pub max_value: f32,
}

impl Bands {
    pub const fn new(
        min_saturation: f32,
        max_saturation: f32,
        min_value: f32,
        max_value: f32,
    ) -> Self {
        Self {
            min_saturation,
            max_saturation,
            min_value,
            max_value,
        }
    }

    pub fn contains(&self, hsv: Hsv) -> bool {
        (self.min_saturation..=self.max_saturation).contains(&hsv.s)
            && (self.min_value..=self.max_value).contains(&hsv.v)
    }
}

/// Knobs for topping the selection up with generated colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    pub saturation_floor: f32,
    pub value_floor: f32,
    pub value_ceiling: f32,
    pub mono_saturation_floor: f32,
    /// Hue step between generated monochrome colors.
    pub mono_hue_offset: f32,
    pub mono_value_step: f32,
    /// Added to both running averages in colorful mode.
    pub colorful_boost: f32,
    pub max_retries: usize,
    /// Half-width of the seeded hue jitter applied on diversity retries.
    pub retry_jitter: f32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            saturation_floor: 0.30,
            value_floor: 0.20,
            value_ceiling: 0.80,
            mono_saturation_floor: 0.10,
            mono_hue_offset: 1.0 / 6.0,
            mono_value_step: 0.08,
            colorful_boost: 0.10,
            max_retries: 10,
            retry_jitter: 0.02,
        }
    }
}

/// Tone constants used while writing palette slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneConfig {
    /// Distance of the darkest (dark mode) or lightest (light mode) background
    /// shade from the end of the value range.
    pub background_base: f32,
    pub background_step: f32,
    pub foreground_base: f32,
    pub foreground_step: f32,
    /// Saturation for background/foreground when no hint was found.
    pub tint_saturation: f32,
    /// Value drop between a bright slot and its dark partner.
    pub dark_variant_step: f32,
    /// Generated hue slots stay within this distance of their arc's base hue.
    pub hue_clamp: f32,
    pub min_value_separation: f32,
    pub contrast_push: f32,
    /// Saturation ceiling for every non-accent slot under the monochrome policy.
    pub mono_saturation_cap: f32,
    pub light_saturation_boost: f32,
    pub light_saturation_ceiling: f32,
    pub light_value_ceiling: f32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            background_base: 0.08,
            background_step: 0.12,
            foreground_base: 0.12,
            foreground_step: 0.10,
            tint_saturation: 0.10,
            dark_variant_step: 0.10,
            hue_clamp: 0.02,
            min_value_separation: 0.38,
            contrast_push: 0.38 / 5.2,
            mono_saturation_cap: 0.15,
            light_saturation_boost: 0.10,
            light_saturation_ceiling: 0.90,
            light_value_ceiling: 0.60,
        }
    }
}

/// Everything the pipeline needs besides the pixels. Passed by reference into
/// every stage; nothing is read from globals.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub accept: Bands,
    /// Replaces `accept` when `colorful` is set.
    pub colorful_accept: Bands,
    /// A primary accent hint must sit in both this and the active acceptance band.
    pub accent: Bands,
    pub background_hint: Bands,
    pub foreground_hint: Bands,
    pub hue_diversity: f32,
    pub target_count: usize,
    pub mode: ThemeMode,
    pub colorful: bool,
    pub stride: usize,
    pub seed: u64,
    pub synth: SynthConfig,
    pub tones: ToneConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accept: Bands::new(0.20, 1.0, 0.30, 1.0),
            colorful_accept: Bands::new(0.35, 1.0, 0.45, 1.0),
            accent: Bands::new(0.20, 1.0, 0.50, 1.0),
            background_hint: Bands::new(0.0, 0.20, 0.0, 0.20),
            foreground_hint: Bands::new(0.0, 0.14, 0.80, 1.0),
            hue_diversity: 0.11,
            target_count: 6,
            mode: ThemeMode::Dark,
            colorful: false,
            stride: 2,
            seed: 0,
            synth: SynthConfig::default(),
            tones: ToneConfig::default(),
        }
    }
}

impl Config {
    /// The acceptance band in force for the current mode flags.
    pub fn acceptance(&self) -> &Bands {
        if self.colorful {
            &self.colorful_accept
        } else {
            &self.accept
        }
    }

    /// K, never below one.
    pub fn target(&self) -> usize {
        self.target_count.max(1)
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}
