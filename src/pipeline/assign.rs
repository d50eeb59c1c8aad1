use log::{debug, trace};

use crate::color::{hue_delta, Color, Hsv};
use crate::config::{Config, ToneConfig};
use crate::pipeline::contrast::guard_contrast;
use crate::pipeline::hue::NamedHue;
use crate::pipeline::select::Selection;

pub const SLOT_COUNT: usize = 18;

/// Background shades, darkest-first in dark mode.
pub const BACKGROUND_SLOTS: [usize; 3] = [0, 8, 16];
/// Foreground shades, brightest-first in dark mode.
pub const FOREGROUND_SLOTS: [usize; 3] = [15, 7, 17];

/// Which assignment phase wrote a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    Background,
    Foreground,
    Accent,
    Generated,
}

/// The 18 indexed colors plus the two accents.
///
/// Slot layout: 0/8/16 background shades, 15/7/17 foreground shades, and
/// bright/dark pairs for each hue (see [`NamedHue::slot_pair`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub slots: [Color; SLOT_COUNT],
    pub sources: [SlotSource; SLOT_COUNT],
    pub accents: [Color; 2],
}

/// First writer wins: a slot, once set, keeps its color and source.
struct SlotWriter {
    slots: [Option<(Color, SlotSource)>; SLOT_COUNT],
}

impl SlotWriter {
    fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    fn set(&mut self, index: usize, hsv: Hsv, source: SlotSource) -> bool {
        match self.slots[index] {
            Some(_) => false,
            None => {
                let color = hsv.to_color();
                trace!("slot {index:2} <- {color} ({source:?})");
                self.slots[index] = Some((color, source));
                true
            }
        }
    }

    fn is_set(&self, index: usize) -> bool {
        self.slots[index].is_some()
    }

    fn finish(self, accents: [Color; 2]) -> Palette {
        let filled = self
            .slots
            .map(|slot| slot.unwrap_or((Color::default(), SlotSource::Generated)));
        Palette {
            slots: filled.map(|(color, _)| color),
            sources: filled.map(|(_, source)| source),
            accents,
        }
    }
}

/// Map the K picked colors onto the 18 palette slots.
///
/// Phases run in a fixed order and never overwrite each other: background
/// triad, foreground triad, accents (primary, secondary, then the remaining
/// colors), then generated hues for every pair still empty.
pub fn assign_slots(colors: &[Hsv], selection: &Selection, config: &Config) -> Palette {
    let tones = &config.tones;
    let dark = config.is_dark();
    let mono = selection.monochrome;
    let direction = if dark { 1.0 } else { -1.0 };

    let primary = selection
        .accent
        .or_else(|| colors.first().copied())
        .unwrap_or(Hsv::new(0.0, 0.0, 0.5));
    let secondary = if mono {
        primary
    } else {
        colors
            .iter()
            .copied()
            .find(|c| *c != primary)
            .unwrap_or(primary)
    };

    let mut writer = SlotWriter::new();

    // Both triads are tinted by the accent picked before the contrast guard.
    let tint = primary.with_saturation(primary.s.min(tones.tint_saturation));

    // Background triad. The contrast guard may pick the other accent as
    // primary, or push the two darkest shades further out.
    let background = selection.background.unwrap_or(tint);
    let background = mono_cap(background, mono, tones);
    let start = if dark {
        tones.background_base
    } else {
        1.0 - tones.background_base
    };
    let mut bg_values = [0, 1, 2].map(|i| start + direction * tones.background_step * i as f32);

    let guard = guard_contrast(primary, secondary, bg_values[0], tones);
    let (primary, secondary) = (guard.primary, guard.secondary);
    if guard.push_background {
        debug!("accent too close to background; pushing background shades");
        for v in &mut bg_values[..2] {
            *v = (*v - direction * tones.contrast_push).clamp(0.0, 1.0);
        }
    }
    for (&slot, v) in BACKGROUND_SLOTS.iter().zip(bg_values) {
        writer.set(slot, background.with_value(v), SlotSource::Background);
    }

    // Foreground triad, mirrored.
    let foreground = selection.foreground.unwrap_or(tint);
    let foreground = if mono {
        foreground.with_saturation(0.0)
    } else {
        foreground
    };
    let start = if dark {
        1.0 - tones.foreground_base
    } else {
        tones.foreground_base
    };
    for (i, &slot) in FOREGROUND_SLOTS.iter().enumerate() {
        let v = start - direction * tones.foreground_step * i as f32;
        writer.set(slot, foreground.with_value(v), SlotSource::Foreground);
    }

    // Accents and the rest of the picked colors, each into its hue's pair.
    for (rank, hsv) in [primary, secondary]
        .into_iter()
        .chain(colors.iter().copied())
        .enumerate()
    {
        let Some((bright, dim)) = NamedHue::classify(hsv).slot_pair() else {
            continue;
        };
        let is_accent = rank < 2;
        let toned = slot_tone(hsv, is_accent, mono, dark, tones);
        writer.set(bright, toned, SlotSource::Accent);
        writer.set(dim, darker(toned, tones), SlotSource::Accent);
    }

    // Whatever pairs are left follow the primary accent's offset from its
    // arc center, kept close to their own arc center.
    let offset = hue_delta(NamedHue::from_hue(primary.h).base_hue(), primary.h)
        .clamp(-tones.hue_clamp, tones.hue_clamp);
    for named in NamedHue::CHROMATIC {
        let Some((bright, dim)) = named.slot_pair() else {
            continue;
        };
        if writer.is_set(bright) && writer.is_set(dim) {
            continue;
        }
        let hsv = Hsv::new(named.base_hue() + offset, primary.s, primary.v);
        let toned = slot_tone(hsv, false, mono, dark, tones);
        writer.set(bright, toned, SlotSource::Generated);
        writer.set(dim, darker(toned, tones), SlotSource::Generated);
    }

    debug!(
        "accents {} / {} ({} primary, monochrome={mono})",
        primary.to_color(),
        secondary.to_color(),
        NamedHue::classify(primary)
    );
    writer.finish([primary.to_color(), secondary.to_color()])
}

fn darker(hsv: Hsv, tones: &ToneConfig) -> Hsv {
    hsv.with_value(hsv.v - tones.dark_variant_step)
}

fn mono_cap(hsv: Hsv, mono: bool, tones: &ToneConfig) -> Hsv {
    if mono {
        hsv.with_saturation(hsv.s.min(tones.mono_saturation_cap))
    } else {
        hsv
    }
}

/// Mode-dependent tone for hue slots: light themes get deeper, more
/// saturated colors; monochrome themes keep only the accent saturated.
fn slot_tone(hsv: Hsv, is_accent: bool, mono: bool, dark: bool, tones: &ToneConfig) -> Hsv {
    let hsv = if dark {
        hsv
    } else {
        Hsv {
            s: (hsv.s + tones.light_saturation_boost).min(tones.light_saturation_ceiling),
            v: hsv.v.min(tones.light_value_ceiling),
            ..hsv
        }
    };
    if is_accent {
        hsv
    } else {
        mono_cap(hsv, mono, tones)
    }
}
