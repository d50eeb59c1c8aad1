use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{hue_distance, wrap_hue, Hsv};
use crate::config::Config;
use crate::pipeline::select::{is_hue_distinct, Selection};

/// Top the selection up to exactly K colors. The first
/// `selection.colors.len()` entries are the sampled colors, unchanged.
///
/// Never fails: when the diversity threshold cannot be met the candidate
/// with the widest clearance is kept.
pub fn fill_synthetic(selection: &Selection, config: &Config) -> Vec<Hsv> {
    let target = config.target();
    let mut colors = selection.colors.clone();
    colors.truncate(target);
    if colors.len() == target {
        return colors;
    }

    let synth = &config.synth;
    let boost = if config.colorful {
        synth.colorful_boost
    } else {
        0.0
    };
    let average_s = selection.average_saturation + boost;
    let average_v = selection.average_value + boost;
    let sampled = colors.len();

    if selection.monochrome {
        let anchor = colors.first().copied();
        let base_hue = anchor.map_or(0.0, |c| c.h);
        let saturation = anchor
            .map_or(synth.mono_saturation_floor, |c| c.s)
            .max(synth.mono_saturation_floor);
        let mut value = average_v.clamp(synth.value_floor, synth.value_ceiling);
        let mut direction = 1.0;

        for i in sampled..target {
            colors.push(Hsv::new(
                base_hue + i as f32 * synth.mono_hue_offset,
                saturation,
                value,
            ));
            if value + synth.mono_value_step > synth.value_ceiling {
                direction = -1.0;
            } else if value - synth.mono_value_step < synth.value_floor {
                direction = 1.0;
            }
            value += direction * synth.mono_value_step;
        }
    } else {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let last_hue = colors.last().map_or(0.0, |c| c.h);
        let saturation = average_s.max(synth.saturation_floor).min(1.0);
        let value = average_v.max(synth.value_floor).min(1.0);

        for i in sampled..target {
            let candidate = Hsv::new(last_hue + i as f32 / target as f32, saturation, value);
            let candidate = if is_hue_distinct(candidate, &colors, config.hue_diversity) {
                candidate
            } else {
                respace(candidate, &colors, config, &mut rng)
            };
            colors.push(candidate);
        }
    }

    debug!(
        "generated {} synthetic colors ({} sampled, monochrome={})",
        target - sampled,
        sampled,
        selection.monochrome
    );
    colors
}

/// Retry a crowded candidate in the middle of the widest free hue arc,
/// nudged by seeded jitter, keeping the best clearance seen.
fn respace(candidate: Hsv, taken: &[Hsv], config: &Config, rng: &mut StdRng) -> Hsv {
    let synth = &config.synth;
    let middle = widest_gap_midpoint(taken);
    let mut best = candidate;
    let mut best_clearance = clearance(candidate.h, taken);

    for _ in 0..synth.max_retries {
        let jitter = rng.random_range(-synth.retry_jitter..=synth.retry_jitter);
        let trial = candidate.with_hue(middle + jitter);
        let trial_clearance = clearance(trial.h, taken);
        if trial_clearance >= config.hue_diversity {
            return trial;
        }
        if trial_clearance > best_clearance {
            best = trial;
            best_clearance = trial_clearance;
        }
    }

    warn!(
        "no hue {:.3} away from {} others; keeping h={:.3} ({:.3} clear)",
        config.hue_diversity,
        taken.len(),
        best.h,
        best_clearance
    );
    best
}

/// Distance to the nearest taken hue; 0.5 when nothing is taken.
fn clearance(h: f32, taken: &[Hsv]) -> f32 {
    taken
        .iter()
        .map(|t| hue_distance(h, t.h))
        .fold(0.5, f32::min)
}

fn widest_gap_midpoint(taken: &[Hsv]) -> f32 {
    let mut hues: Vec<f32> = taken.iter().map(|c| c.h).collect();
    hues.sort_by(f32::total_cmp);

    let Some(&first) = hues.first() else {
        return 0.0;
    };
    let mut best_start = first;
    let mut best_gap = 0.0;
    for (i, &start) in hues.iter().enumerate() {
        let end = hues.get(i + 1).copied().unwrap_or(first + 1.0);
        if end - start > best_gap {
            best_gap = end - start;
            best_start = start;
        }
    }
    wrap_hue(best_start + best_gap / 2.0)
}
