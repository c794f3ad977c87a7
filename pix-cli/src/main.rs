//! pix CLI Tool
//!
//! Command-line interface for inspecting, compressing and persisting image assets.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pix_codec::{compress, probe, CodecConfig};
use pix_core::ImageAsset;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pix")]
#[command(about = "pix - named image assets with JPEG compression and base64 views")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a sample asset, then load it back
    Demo {
        /// Directory to write into (defaults to the documents directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the base64 encoding of a file
    Base64 {
        /// Input file path
        input: PathBuf,
    },

    /// Re-encode an image file as JPEG
    Compress {
        /// Input image file path
        input: PathBuf,

        /// Output JPEG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Compression quality (0.0 = smallest, 1.0 = best)
        #[arg(long, default_value_t = CodecConfig::default().quality)]
        quality: f64,

        /// Asset name (defaults to the input file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show asset information
    Info {
        /// Input file path
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { dir } => run_demo(dir)?,
        Commands::Base64 { input } => print_base64(&input)?,
        Commands::Compress {
            input,
            output,
            quality,
            name,
        } => compress_file(&input, &output, CodecConfig { quality }, name)?,
        Commands::Info { input } => print_info(&input)?,
    }

    Ok(())
}

fn asset_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn run_demo(dir: Option<PathBuf>) -> Result<()> {
    let image = ImageAsset::new("Pic", vec![0u8; 100]);
    println!("{}", image.base64());

    let dir = dir
        .or_else(dirs::document_dir)
        .unwrap_or_else(std::env::temp_dir);
    let image_path = dir.join("MyImage");

    image
        .save(&image_path)
        .with_context(|| format!("Failed to save image to {}", image_path.display()))?;
    println!("Image saved successfully to path {}", image_path.display());

    let stored = ImageAsset::from_path("MyRestoredImage", &image_path)
        .with_context(|| format!("Failed to load image from {}", image_path.display()))?;
    println!("Image loaded successfully from path {}", image_path.display());

    if stored.content() != image.content() {
        bail!("Restored image differs from the saved one");
    }
    info!(name = stored.name(), bytes = stored.len(), "demo round-trip complete");

    Ok(())
}

fn print_base64(input: &Path) -> Result<()> {
    let asset = ImageAsset::from_path(asset_name(input), input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    println!("{}", asset.base64());
    Ok(())
}

fn compress_file(
    input: &Path,
    output: &Path,
    config: CodecConfig,
    name: Option<String>,
) -> Result<()> {
    let source = ImageAsset::from_path(asset_name(input), input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let name = name.unwrap_or_else(|| source.name().to_string());

    info!(input = %input.display(), quality = config.quality, "compressing");
    let Some(compressed) = compress(name, source.content(), config.quality) else {
        bail!("{} is not a decodable image", input.display());
    };

    compressed
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Compressed {} ({} bytes) -> {} ({} bytes)",
        input.display(),
        source.len(),
        output.display(),
        compressed.len()
    );

    Ok(())
}

fn print_info(input: &Path) -> Result<()> {
    let asset = ImageAsset::from_path(asset_name(input), input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    println!("\n=== Asset Information ===");
    println!("Name: {}", asset.name());
    println!(
        "Size: {} bytes ({:.2} KB)",
        asset.len(),
        asset.len() as f64 / 1024.0
    );

    match probe(asset.content()) {
        Some(info) => {
            println!("Format: {:?}", info.format);
            println!("Resolution: {}x{}", info.width, info.height);
        }
        None => println!("Format: not a recognized image"),
    }

    Ok(())
}
