use serde_json::{Map, Value};

use crate::pipeline::assign::Palette;

use super::ThemeBackend;

/// Flat JSON object of `#rrggbb` strings keyed `color00`..`color17`,
/// `accent1`, `accent2`.
pub struct JsonBackend;

impl ThemeBackend for JsonBackend {
    fn name(&self) -> &str {
        "JSON"
    }

    fn serialize(&self, palette: &Palette) -> String {
        let mut map = Map::new();
        for (i, color) in palette.slots.iter().enumerate() {
            map.insert(format!("color{i:02}"), Value::String(color.to_hex()));
        }
        for (i, color) in palette.accents.iter().enumerate() {
            map.insert(format!("accent{}", i + 1), Value::String(color.to_hex()));
        }
        let mut out = serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_default();
        out.push('\n');
        out
    }
}
