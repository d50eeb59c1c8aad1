use std::fmt::Write;

use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::pipeline::assign::Palette;

const SWATCHES_PER_ROW: usize = 8;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn swatch(c: Color) -> String {
    "   ".on(to_term(c)).to_string()
}

/// Truecolor swatches: the 18 slots eight to a row, then both accents
/// with their hex value and contrast against the background.
pub fn render_preview(palette: &Palette) -> String {
    let mut out = String::new();
    for row in palette.slots.chunks(SWATCHES_PER_ROW) {
        for &color in row {
            out.push_str(&swatch(color));
        }
        out.push('\n');
    }

    let background = palette.slots[0];
    for (i, &accent) in palette.accents.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} accent{} {} ({:.1}:1)",
            swatch(accent),
            i + 1,
            accent,
            Color::contrast_ratio(&accent, &background)
        );
    }
    out
}
