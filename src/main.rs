use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svgrast::models::UploadCandidate;
use svgrast::services::ConversionPipeline;

#[derive(Parser)]
#[command(name = "svgrast")]
#[command(about = "Convert SVG images to PNG at their intrinsic size")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an SVG file to PNG
    Convert {
        /// Input SVG file
        input: PathBuf,

        /// Output PNG path (defaults to the input name with the extension
        /// swapped)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the conversion summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            json,
        }) => run_convert_command(&input, output, json).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert a single file and write the result next to it (or to --output)
async fn run_convert_command(
    input: &Path,
    output: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "svgrast=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let pipeline = ConversionPipeline::new();
    let candidate = UploadCandidate::from_path(input);

    pipeline
        .convert(candidate)
        .await
        .map_err(|e| anyhow::anyhow!("Conversion failed: {e}"))?;

    let snapshot = pipeline.snapshot().await;
    let result = snapshot
        .result
        .ok_or_else(|| anyhow::anyhow!("Conversion produced no result"))?;

    let output_path = output.unwrap_or_else(|| input.with_file_name(&result.download_name));
    std::fs::write(&output_path, result.png.data())?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "input": input.display().to_string(),
                "output": output_path.display().to_string(),
                "width": result.dimensions.width,
                "height": result.dimensions.height,
                "bytes": result.png.data().len(),
            })
        );
    } else {
        println!(
            "Wrote {} ({}, {} bytes)",
            output_path.display(),
            result.dimensions,
            result.png.data().len()
        );
    }

    Ok(())
}

/// Display version and usage information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Svgrast v{VERSION} - SVG to PNG converter\n");
    println!("Commands:");
    println!("  svgrast convert <input.svg>    Convert a file to PNG");
    println!("\nRun 'svgrast --help' for more details.");
}
