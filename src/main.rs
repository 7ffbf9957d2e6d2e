use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use qrsmith::{ECLevel, QRBuilder};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    L,
    M,
    Q,
    H,
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => ECLevel::L,
            Level::M => ECLevel::M,
            Level::Q => ECLevel::Q,
            Level::H => ECLevel::H,
        }
    }
}

/// Generate a QR code from text
#[derive(Debug, Parser)]
#[command(name = "qrsmith", version, about)]
struct Cli {
    /// Text to encode
    text: String,

    /// Error correction level
    #[arg(short, long, value_enum, default_value_t = Level::M)]
    level: Level,

    /// Write a PNG (or any format inferred from the extension) instead of printing to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pixels per module when writing an image
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Log pipeline progress to stderr. RUST_LOG overrides this
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let qr = QRBuilder::new(&cli.text)
        .ec_level(cli.level.into())
        .build()
        .context("Failed to generate QR code")?;
    info!(
        metadata = %qr.metadata(),
        mode = ?qr.mode(),
        recovery_pct = qr.ec_level().recovery_percent(),
        "Generated QR code"
    );

    match cli.output {
        Some(path) => {
            qr.to_image(cli.scale)
                .save(&path)
                .with_context(|| format!("Failed to write image to {}", path.display()))?;
            info!(path = %path.display(), "Saved image");
        }
        None => println!("{}", qr.to_str(1)),
    }

    Ok(())
}
