use std::path::PathBuf;

use clap::Parser;

use crate::backends::{JsonBackend, LuaBackend, ThemeBackend};
use crate::config::Config;

/// Generate terminal color themes from wallpaper images.
#[derive(Parser, Debug)]
#[command(name = "tinta", version, about)]
pub struct Args {
    /// Path to the input image (PNG, JPEG, BMP or GIF)
    pub image: PathBuf,

    /// Write the theme to this file instead of stdout
    pub output: Option<PathBuf>,

    /// Force dark or light mode (auto-detected if omitted)
    #[arg(short, long, value_enum)]
    pub mode: Option<ThemeMode>,

    /// Demand more saturated colors and never fall back to monochrome
    #[arg(short, long)]
    pub colorful: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lua)]
    pub format: OutputFormat,

    /// Number of dominant colors to pick
    #[arg(short = 'k', long = "colors", default_value_t = 6)]
    pub colors: usize,

    /// Visit every Nth row and column of the image
    #[arg(long, default_value_t = 2)]
    pub stride: usize,

    /// Minimum hue distance between picked colors (fraction of the hue circle)
    #[arg(long, default_value_t = 0.11)]
    pub diversity: f32,

    /// Seed for generated-color jitter (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a colored terminal preview of the palette to stderr
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Build the pipeline configuration from the parsed flags.
    pub fn to_config(&self, mode: ThemeMode, seed: u64) -> Config {
        Config {
            mode,
            colorful: self.colorful,
            target_count: self.colors,
            stride: self.stride,
            hue_diversity: self.diversity,
            seed,
            ..Config::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeMode {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Lua,
    Json,
}

impl OutputFormat {
    pub fn backend(self) -> Box<dyn ThemeBackend> {
        match self {
            OutputFormat::Lua => Box::new(LuaBackend),
            OutputFormat::Json => Box::new(JsonBackend),
        }
    }
}
