pub mod assign;
pub mod contrast;
pub mod detect;
pub mod histogram;
pub mod hue;
pub mod select;
pub mod synth;

use log::debug;

use crate::config::Config;
use assign::{assign_slots, Palette};
use histogram::{Histogram, PixelBuffer};
use select::select_dominant;
use synth::fill_synthetic;

/// Run the whole pipeline: histogram, dominant colors, synthetic top-up,
/// slot assignment. Deterministic for a given buffer and config.
pub fn generate(buffer: &PixelBuffer<'_>, config: &Config) -> Palette {
    let histogram = Histogram::build(buffer, config.stride);
    debug!(
        "{}x{} image, {} samples, {} distinct colors",
        buffer.width(),
        buffer.height(),
        histogram.samples(),
        histogram.len()
    );
    let ranked = histogram.into_ranked();
    let selection = select_dominant(&ranked, config);
    let colors = fill_synthetic(&selection, config);
    assign_slots(&colors, &selection, config)
}
