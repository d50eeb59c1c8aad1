//! Derive an 18-slot terminal color theme from a decoded image.
//!
//! The pipeline lives in [`pipeline`]: a frequency histogram over the pixels,
//! dominant-color selection under saturation/value bands and a hue-diversity
//! constraint, synthetic top-up colors, and slot assignment for dark or light
//! themes. [`decode`], [`backends`] and [`preview`] sit around it.

pub mod backends;
pub mod cli;
pub mod color;
pub mod config;
pub mod decode;
pub mod pipeline;
pub mod preview;
