use log::debug;

use crate::color::{hue_distance, Hsv};
use crate::config::Config;
use crate::pipeline::histogram::ColorBucket;

/// Outcome of walking the ranked histogram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Accepted colors in rank order, at most K of them, pairwise at least
    /// `hue_diversity` apart.
    pub colors: Vec<Hsv>,
    /// Most frequent dark, gray-ish color.
    pub background: Option<Hsv>,
    /// Most frequent light, gray-ish color.
    pub foreground: Option<Hsv>,
    /// Most frequent color inside both the acceptance and accent bands.
    pub accent: Option<Hsv>,
    /// Unweighted mean value over distinct colors.
    pub average_value: f32,
    /// Unweighted mean saturation over distinct colors.
    pub average_saturation: f32,
    /// Too few colors qualified; generate a single-hue theme.
    pub monochrome: bool,
}

/// True when `hsv` keeps at least `threshold` hue distance from every color in `taken`.
pub fn is_hue_distinct(hsv: Hsv, taken: &[Hsv], threshold: f32) -> bool {
    taken.iter().all(|t| hue_distance(hsv.h, t.h) >= threshold)
}

/// Pick up to K dominant colors from buckets ranked by frequency.
pub fn select_dominant(ranked: &[ColorBucket], config: &Config) -> Selection {
    let target = config.target();
    let accept = config.acceptance();
    let mut selection = Selection::default();

    for bucket in ranked {
        let hsv = bucket.hsv;
        let in_band = accept.contains(hsv);

        if selection.background.is_none() && config.background_hint.contains(hsv) {
            selection.background = Some(hsv);
        }
        if selection.foreground.is_none() && config.foreground_hint.contains(hsv) {
            selection.foreground = Some(hsv);
        }
        if selection.accent.is_none() && in_band && config.accent.contains(hsv) {
            selection.accent = Some(hsv);
        }

        if in_band
            && selection.colors.len() < target
            && is_hue_distinct(hsv, &selection.colors, config.hue_diversity)
        {
            debug!(
                "picked {} (h={:.3} s={:.3} v={:.3}, {} px)",
                bucket.color, hsv.h, hsv.s, hsv.v, bucket.frequency
            );
            selection.colors.push(hsv);
        }
    }

    if !ranked.is_empty() {
        let n = ranked.len() as f32;
        selection.average_value = ranked.iter().map(|b| b.hsv.v).sum::<f32>() / n;
        selection.average_saturation = ranked.iter().map(|b| b.hsv.s).sum::<f32>() / n;
    }

    selection.monochrome = selection.colors.len() <= 1 && !config.colorful;

    debug!(
        "selected {}/{} colors from {} distinct (avg s={:.3} v={:.3}, monochrome={})",
        selection.colors.len(),
        target,
        ranked.len(),
        selection.average_saturation,
        selection.average_value,
        selection.monochrome
    );

    selection
}
