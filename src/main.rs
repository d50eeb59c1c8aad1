use anyhow::Result;
use clap::Parser;
use log::{debug, info, LevelFilter};

use tinta::cli::Args;
use tinta::decode::load_image;
use tinta::pipeline::detect::detect_mode;
use tinta::pipeline::generate;
use tinta::pipeline::histogram::PixelBuffer;
use tinta::preview::render_preview;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let image = load_image(&args.image)?;
    let buffer = PixelBuffer::new(image.width(), image.height(), 4, image.as_raw())?;

    let mode = args
        .mode
        .unwrap_or_else(|| detect_mode(&buffer, args.stride));
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!("mode {mode:?}, seed {seed}");
    let config = args.to_config(mode, seed);

    let palette = generate(&buffer, &config);

    if args.preview {
        eprint!("{}", render_preview(&palette));
    }

    let backend = args.format.backend();
    match &args.output {
        Some(path) => {
            backend.write_to(&palette, path)?;
            info!("wrote {} theme to {}", backend.name(), path.display());
        }
        None => print!("{}", backend.serialize(&palette)),
    }
    Ok(())
}
