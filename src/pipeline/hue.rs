use crate::color::Hsv;

/// Below either of these a color counts as a shade of gray, whatever its hue.
const SHADE_SATURATION: f32 = 0.1;
const SHADE_VALUE: f32 = 0.1;

/// Upper edge, in degrees, of each arc walking up from 0°. Red owns both
/// ends of the circle.
const ARCS: [(f32, NamedHue); 6] = [
    (15.0, NamedHue::Red),
    (75.0, NamedHue::Orange),
    (150.0, NamedHue::Green),
    (210.0, NamedHue::Cyan),
    (270.0, NamedHue::Blue),
    (330.0, NamedHue::Magenta),
];

/// Coarse hue category used to route a color to its palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedHue {
    Red,
    Orange,
    Green,
    Cyan,
    Blue,
    Magenta,
    Shade,
}

impl NamedHue {
    /// The six hue arcs, excluding `Shade`.
    pub const CHROMATIC: [NamedHue; 6] = [
        NamedHue::Red,
        NamedHue::Orange,
        NamedHue::Green,
        NamedHue::Cyan,
        NamedHue::Blue,
        NamedHue::Magenta,
    ];

    /// Classify a color, carving out near-grays as `Shade` first.
    pub fn classify(hsv: Hsv) -> Self {
        if hsv.s < SHADE_SATURATION || hsv.v < SHADE_VALUE {
            NamedHue::Shade
        } else {
            Self::from_hue(hsv.h)
        }
    }

    /// Arc containing a hue in [0, 1). Never returns `Shade`.
    pub fn from_hue(h: f32) -> Self {
        let degrees = h * 360.0;
        ARCS.iter()
            .find(|(upper, _)| degrees < *upper)
            .map_or(NamedHue::Red, |&(_, named)| named)
    }

    /// Angular midpoint of the arc, as a hue in [0, 1).
    pub fn base_hue(self) -> f32 {
        let degrees = match self {
            NamedHue::Red => 352.5,
            NamedHue::Orange => 45.0,
            NamedHue::Green => 112.5,
            NamedHue::Cyan => 180.0,
            NamedHue::Blue => 240.0,
            NamedHue::Magenta => 300.0,
            NamedHue::Shade => 0.0,
        };
        degrees / 360.0
    }

    /// `(bright, dark)` palette indices for a hue; `None` for `Shade`.
    pub fn slot_pair(self) -> Option<(usize, usize)> {
        match self {
            NamedHue::Red => Some((12, 4)),
            NamedHue::Green => Some((10, 2)),
            NamedHue::Blue => Some((9, 1)),
            NamedHue::Cyan => Some((11, 3)),
            NamedHue::Magenta => Some((13, 5)),
            NamedHue::Orange => Some((14, 6)),
            NamedHue::Shade => None,
        }
    }

    /// Inverse of [`slot_pair`](Self::slot_pair); any other index is `Shade`.
    pub fn from_slot(index: usize) -> Self {
        match index {
            12 | 4 => NamedHue::Red,
            10 | 2 => NamedHue::Green,
            9 | 1 => NamedHue::Blue,
            11 | 3 => NamedHue::Cyan,
            13 | 5 => NamedHue::Magenta,
            14 | 6 => NamedHue::Orange,
            _ => NamedHue::Shade,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedHue::Red => "red",
            NamedHue::Orange => "orange",
            NamedHue::Green => "green",
            NamedHue::Cyan => "cyan",
            NamedHue::Blue => "blue",
            NamedHue::Magenta => "magenta",
            NamedHue::Shade => "shade",
        }
    }
}

impl std::fmt::Display for NamedHue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
