use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use logomark::config::{ConfigError, Invocation, Mode, WatermarkJob};
use logomark::logging::{self, LogFormat};
use logomark::watermark::{BatchResult, BatchWatermarker};

const USAGE_EXAMPLES: &str = "\
Examples:
  Single image:  logomark input.jpg output.jpg logo.png bottomright 5:2
  Smaller logo:  logomark input.jpg output.jpg logo.png bottomright 4:1
  Larger logo:   logomark input.jpg output.jpg logo.png bottomright 3:1
  Batch:         logomark ./images ./output logo.png bottomright 6:2

Positions: topleft, topright, center, bottomleft, bottomright
Ratio 'image:watermark' sets the logo width as a fraction of the image width (default 5:2 = 40%).";

/// Logomark - stamp a ratio-sized logo onto photos
#[derive(Parser, Debug)]
#[command(name = "logomark")]
#[command(version, about, long_about = None, after_help = USAGE_EXAMPLES)]
struct Args {
    /// Input image, or a directory of images for batch mode
    input: PathBuf,

    /// Output image, or output directory in batch mode
    output: PathBuf,

    /// Logo image to stamp
    logo: PathBuf,

    /// Anchor: topleft, topright, center, bottomleft, bottomright
    position: String,

    /// Size ratio as image:watermark
    ratio: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Write a JSON report of per-file outcomes (batch mode)
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging subsystem
    if let Err(e) = logging::init_subscriber(args.log_format) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let report_path = args.report.clone();
    let invocation = Invocation {
        input: args.input,
        output: args.output,
        logo: args.logo,
        anchor: args.position,
        ratio: args.ratio,
    };

    let job = match invocation.validate() {
        Ok(job) => job,
        Err(e) => return usage_error(&e),
    };

    tracing::info!(
        input = %job.input.display(),
        output = %job.output.display(),
        logo = %job.logo.display(),
        anchor = %job.anchor,
        ratio = %job.ratio,
        "Watermark job validated"
    );

    let status = match job.mode {
        Mode::Single => {
            if report_path.is_some() {
                tracing::warn!("--report only applies to batch mode, ignoring");
            }
            run_single(&job)
        }
        Mode::Batch => run_batch(&job, report_path.as_deref()),
    };

    tracing::info!("Watermark process completed!");
    status
}

fn usage_error(error: &ConfigError) -> ExitCode {
    eprintln!("Error: {}", error);
    eprintln!();
    let _ = Args::command().print_help();
    ExitCode::FAILURE
}

fn run_single(job: &WatermarkJob) -> ExitCode {
    tracing::info!(path = %job.input.display(), "Processing single image");

    if job.watermarker().watermark(&job.input, &job.output) {
        tracing::info!(path = %job.output.display(), "Watermarked image saved");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_batch(job: &WatermarkJob, report_path: Option<&Path>) -> ExitCode {
    tracing::info!(path = %job.input.display(), "Processing directory");

    let batch = BatchWatermarker::new(job.watermarker());
    let result = match batch.run(&job.input, &job.output) {
        Ok(result) => result,
        // Logged by the batch runner
        Err(_) => return ExitCode::FAILURE,
    };

    if let Some(path) = report_path {
        if let Err(e) = write_report(&result, path) {
            let cause = format!("{:#}", e);
            tracing::error!(path = %path.display(), error = %cause, "Failed to write batch report");
        }
    }

    ExitCode::SUCCESS
}

fn write_report(result: &BatchResult, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&result.report())
        .context("Failed to serialize batch report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), "Batch report written");
    Ok(())
}
