use palette::{FromColor, Srgb};

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components; packs to a 24-bit `0xRRGGBB` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` integer. Bits above 24 are ignored.
    pub const fn from_packed(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// WCAG 2.0 contrast ratio between two colors.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue, saturation and value, each in [0, 1]. Hue is circular and kept in
/// [0, 1) by every constructor in this module.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h: wrap_hue(h), s, v }
    }

    pub fn with_hue(self, h: f32) -> Self {
        Self::new(h, self.s, self.v)
    }

    pub fn with_saturation(self, s: f32) -> Self {
        Self { s, ..self }
    }

    pub fn with_value(self, v: f32) -> Self {
        Self { v, ..self }
    }

    pub fn to_color(self) -> Color {
        hsv_to_rgb(self)
    }
}

/// Fold any hue into [0, 1).
pub fn wrap_hue(h: f32) -> f32 {
    let h = h.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if h >= 1.0 {
        0.0
    } else {
        h
    }
}

/// Convert packed RGB to HSV.
///
/// Achromatic colors (max == min) report `h = 0`, so their hue does not
/// survive a round trip.
pub fn rgb_to_hsv(color: Color) -> Hsv {
    let r = color.r as f32 / 255.0;
    let g = color.g as f32 / 255.0;
    let b = color.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv {
        h: wrap_hue(sector / 6.0),
        s,
        v: max,
    }
}

/// Convert HSV back to RGB. Saturation and value are clamped to [0, 1];
/// channels are rounded half-up.
pub fn hsv_to_rgb(hsv: Hsv) -> Color {
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);
    let hsv: palette::Hsv = palette::Hsv::new(wrap_hue(hsv.h) * 360.0, s, v);
    let rgb: Srgb<f32> = Srgb::from_color(hsv);
    Color::from_srgb_u8(rgb.into_format())
}

/// Shortest distance between two hues on the unit circle, in [0, 0.5].
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (wrap_hue(a) - wrap_hue(b)).abs();
    d.min(1.0 - d)
}

/// Signed shortest step that takes hue `from` to hue `to`, in [-0.5, 0.5).
pub fn hue_delta(from: f32, to: f32) -> f32 {
    let d = wrap_hue(to) - wrap_hue(from);
    if d >= 0.5 {
        d - 1.0
    } else if d < -0.5 {
        d + 1.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    fn assert_close(a: f32, b: f32, what: &str) {
        assert!((a - b).abs() < 1e-4, "{what}: {a} vs {b}");
    }

    #[test]
    fn hex_is_lowercase_rrggbb() {
        assert_eq!(Color::new(255, 136, 0).to_hex(), "#ff8800");
        assert_eq!(Color::new(0, 0, 1).to_hex(), "#000001");
    }

    #[test]
    fn packing() {
        let c = Color::from_packed(0x336699);
        assert_eq!(c, Color::new(0x33, 0x66, 0x99));
        assert_eq!(c.packed(), 0x336699);
        assert_eq!(Color::from_packed(0xff_123456).packed(), 0x123456);
    }

    #[test]
    fn srgb_interop() {
        let c = Color::new(1, 2, 3);
        assert_eq!(Color::from_srgb_u8(Srgb::new(1, 2, 3)), c);
    }

    #[test]
    fn primaries_to_hsv() {
        let red = rgb_to_hsv(Color::from_packed(0xff0000));
        assert_close(red.h, 0.0, "red h");
        assert_close(red.s, 1.0, "red s");
        assert_close(red.v, 1.0, "red v");

        let green = rgb_to_hsv(Color::from_packed(0x00ff00));
        assert_close(green.h, 1.0 / 3.0, "green h");

        let blue = rgb_to_hsv(Color::from_packed(0x0000ff));
        assert_close(blue.h, 2.0 / 3.0, "blue h");

        let magenta = rgb_to_hsv(Color::from_packed(0xff00ff));
        assert_close(magenta.h, 5.0 / 6.0, "magenta h");
    }

    #[test]
    fn steel_blue_to_hsv() {
        let hsv = rgb_to_hsv(Color::from_packed(0x336699));
        assert_close(hsv.h, 210.0 / 360.0, "h");
        assert_close(hsv.s, 2.0 / 3.0, "s");
        assert_close(hsv.v, 0.6, "v");
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        for c in [BLACK, WHITE, Color::new(128, 128, 128)] {
            let hsv = rgb_to_hsv(c);
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
        }
        assert_eq!(rgb_to_hsv(BLACK).v, 0.0);
    }

    #[test]
    fn agrees_with_palette_crate() {
        for packed in [0xc86432, 0x10f0a0, 0x7f00ff, 0x336699, 0xfe0102] {
            let color = Color::from_packed(packed);
            let ours = rgb_to_hsv(color);
            let srgb: Srgb<f32> = Srgb::new(color.r, color.g, color.b).into_format();
            let theirs: palette::Hsv = palette::Hsv::from_color(srgb);
            let their_h = theirs.hue.into_positive_degrees() / 360.0;
            assert!(hue_distance(ours.h, their_h) < 1e-3, "hue of {color}");
            assert_close(ours.s, theirs.saturation, "saturation");
            assert_close(ours.v, theirs.value, "value");
        }
    }

    #[test]
    fn round_trip_within_one_step() {
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(5) {
                    let original = Color::new(r as u8, g as u8, b as u8);
                    let recovered = hsv_to_rgb(rgb_to_hsv(original));
                    for (a, z) in [
                        (original.r, recovered.r),
                        (original.g, recovered.g),
                        (original.b, recovered.b),
                    ] {
                        assert!(
                            (a as i16 - z as i16).abs() <= 1,
                            "{original} came back as {recovered}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn hsv_to_rgb_clamps_out_of_range() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 1.7)), WHITE);
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.5, -0.3)), BLACK);
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 2.0, 1.0)), Color::new(255, 0, 0));
    }

    #[test]
    fn hue_wraps_into_unit_interval() {
        assert_close(Hsv::new(1.25, 0.5, 0.5).h, 0.25, "positive wrap");
        assert_close(Hsv::new(-0.25, 0.5, 0.5).h, 0.75, "negative wrap");
        assert_eq!(wrap_hue(1.0), 0.0);
        assert_eq!(wrap_hue(-1e-9), 0.0);
    }

    #[test]
    fn hue_distance_properties() {
        assert_eq!(hue_distance(0.3, 0.3), 0.0);
        assert_close(hue_distance(0.1, 0.9), 0.2, "wraps");
        assert_close(hue_distance(0.9, 0.1), 0.2, "symmetric");
        assert_close(hue_distance(0.0, 0.5), 0.5, "opposite");
        for i in 0..50 {
            for j in 0..50 {
                let (a, b) = (i as f32 / 50.0, j as f32 / 50.0);
                let d = hue_distance(a, b);
                assert!((0.0..=0.5).contains(&d));
                assert_eq!(d, hue_distance(b, a));
            }
        }
    }

    #[test]
    fn hue_delta_is_signed_shortest() {
        assert_close(hue_delta(0.9, 0.1), 0.2, "forward across zero");
        assert_close(hue_delta(0.1, 0.9), -0.2, "backward across zero");
        assert_close(hue_delta(0.2, 0.3), 0.1, "plain");
    }

    #[test]
    fn contrast_ratio_black_white() {
        let ratio = Color::contrast_ratio(&BLACK, &WHITE);
        assert!(
            (ratio - 21.0).abs() < 0.1,
            "black/white contrast should be ~21:1, got {ratio}"
        );
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = Color::new(200, 50, 50);
        let b = Color::new(50, 200, 50);
        let ratio_ab = Color::contrast_ratio(&a, &b);
        let ratio_ba = Color::contrast_ratio(&b, &a);
        assert!((ratio_ab - ratio_ba).abs() < 0.001);
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }
}
