use std::fmt::Write;

use crate::pipeline::assign::Palette;

use super::ThemeBackend;

/// Lua module returning a table of packed integers, e.g. `color00 = 0x1a1a2e`.
pub struct LuaBackend;

impl ThemeBackend for LuaBackend {
    fn name(&self) -> &str {
        "Lua"
    }

    fn serialize(&self, palette: &Palette) -> String {
        let mut out = String::from("return {\n");
        for (i, color) in palette.slots.iter().enumerate() {
            let _ = writeln!(out, "\tcolor{i:02} = 0x{:x},", color.packed());
        }
        let _ = writeln!(out, "\taccent1 = 0x{:x},", palette.accents[0].packed());
        let _ = writeln!(out, "\taccent2 = 0x{:x}", palette.accents[1].packed());
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::test_support::sample_palette;

    #[test]
    fn table_has_all_keys_in_order() {
        let output = LuaBackend.serialize(&sample_palette());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0], "return {");
        for i in 0..18 {
            let prefix = format!("\tcolor{i:02} = 0x");
            assert!(lines[1 + i].starts_with(&prefix), "line {}: {}", 1 + i, lines[1 + i]);
        }
        assert_eq!(lines[19], "\taccent1 = 0xff0000,");
        assert_eq!(lines[20], "\taccent2 = 0xff");
        assert_eq!(lines[21], "}");
    }

    #[test]
    fn values_are_unpadded_lowercase_hex() {
        let output = LuaBackend.serialize(&sample_palette());
        assert!(output.contains("\tcolor00 = 0x10a0,\n"));
        assert!(output.contains("\tcolor10 = 0xa1aaa,\n"));
    }

    #[test]
    fn write_to_creates_file() {
        let palette = sample_palette();
        let dir = std::env::temp_dir().join("tinta-test-lua-backend");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("theme.lua");

        LuaBackend.write_to(&palette, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, LuaBackend.serialize(&palette));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let err = LuaBackend
            .write_to(&sample_palette(), std::path::Path::new("/nonexistent/dir/theme.lua"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("failed to write theme"), "got: {err}");
    }
}
