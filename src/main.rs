use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use audiolivre::{chapter_slices, extract_text_with_metadata};

const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "epub", "txt"];

#[derive(Debug, Parser)]
#[command(author, version, about = "Audiolivre text extraction CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract text and chapter metadata from one document
    Extract(ExtractArgs),
    /// Extract every supported document under a directory and report stats
    Scan(ScanArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Path to a .pdf, .epub or .txt file
    file: PathBuf,
    /// Print metadata as JSON instead of a chapter table
    #[arg(long)]
    json: bool,
    /// Also print the full extracted text
    #[arg(long)]
    full_text: bool,
}

#[derive(Debug, Args)]
struct ScanArgs {
    /// Directory to walk for supported documents
    dir: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract(args) => extract_command(args),
        Commands::Scan(args) => scan_command(args),
    }
}

fn extract_command(args: ExtractArgs) -> Result<()> {
    let path = args.file.to_string_lossy();
    let (text, metadata) = extract_text_with_metadata(&path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        println!(
            "{}: {} characters, {} chapters",
            path, metadata.text_length, metadata.chapter_count
        );
        for (marker, slice) in chapter_slices(&text, &metadata.chapters) {
            println!(
                "  [{:>8}] {} ({} chars) {}",
                marker.position,
                marker.title,
                slice.len(),
                marker.text_preview
            );
        }
    }

    if args.full_text {
        println!("{text}");
    }

    Ok(())
}

fn scan_command(args: ScanArgs) -> Result<()> {
    info!("Scanning directory: {:?}", args.dir);

    let mut processed = 0usize;
    let mut failed = 0usize;

    for entry in WalkDir::new(&args.dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();

        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
            .unwrap_or(false);
        if !supported {
            continue;
        }

        match extract_text_with_metadata(&path.to_string_lossy()) {
            Ok((_, metadata)) => {
                info!(
                    "{:?}: {} characters, {} chapters",
                    path, metadata.text_length, metadata.chapter_count
                );
                processed += 1;
            }
            Err(e) => {
                warn!("Failed to process {:?}: {}", path, e);
                failed += 1;
            }
        }
    }

    info!("Scan complete: {} processed, {} failed", processed, failed);

    Ok(())
}
