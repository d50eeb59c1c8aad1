pub mod json;
pub mod lua;

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::assign::Palette;

pub use json::JsonBackend;
pub use lua::LuaBackend;

/// Renders a palette into a text format consumed by a theming tool.
pub trait ThemeBackend {
    fn name(&self) -> &str;

    fn serialize(&self, palette: &Palette) -> String;

    fn write_to(&self, palette: &Palette, path: &Path) -> Result<()> {
        let content = self.serialize(palette);
        std::fs::write(path, content)
            .with_context(|| format!("failed to write theme to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::color::Color;
    use crate::pipeline::assign::{Palette, SlotSource, SLOT_COUNT};

    /// Slot `i` holds `0x0i0i0i`-ish values so every line is distinct.
    pub fn sample_palette() -> Palette {
        let mut slots = [Color::default(); SLOT_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Color::new(i as u8, 0x10 + i as u8, 0xa0 + i as u8);
        }
        Palette {
            slots,
            sources: [SlotSource::Generated; SLOT_COUNT],
            accents: [Color::from_packed(0xff0000), Color::from_packed(0x0000ff)],
        }
    }
}
