//! pdf-outline CLI - PDF title and heading outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use pdf_outline::{Document, ExtractOptions, ExtractionPipeline, JsonFormat};

#[derive(Parser)]
#[command(name = "pdf-outline")]
#[command(version)]
#[command(about = "Infer a title and H1/H2/H3 heading outline from PDF documents", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a single PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file or directory (stdout if not specified).
        /// A directory gets a timestamped <stem>_<YYYYMMDD_HHMMSS>.json
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Per-document time budget in seconds
        #[arg(long, value_name = "SECS")]
        deadline: Option<u64>,
    },

    /// Extract outlines for every PDF in a directory
    Batch {
        /// Directory containing PDF files
        #[arg(value_name = "DIR")]
        input_dir: PathBuf,

        /// Output directory (defaults to the input directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Per-document time budget in seconds
        #[arg(long, value_name = "SECS")]
        deadline: Option<u64>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
            deadline,
        }) => cmd_extract(&input, output.as_deref(), compact, deadline),
        Some(Commands::Batch {
            input_dir,
            output,
            compact,
            deadline,
        }) => cmd_batch(&input_dir, output.as_deref(), compact, deadline),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_extract(&input, None, false, None)
            } else {
                println!("{}", "Usage: pdf-outline <FILE>".yellow());
                println!("       pdf-outline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(deadline: Option<u64>) -> ExtractOptions {
    let mut options = ExtractOptions::new();
    if let Some(secs) = deadline {
        options = options.with_deadline(Duration::from_secs(secs));
    }
    options
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    deadline: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = ExtractionPipeline::with_options(build_options(deadline));
    let doc = pipeline.extract_path(input);

    if let Some(ref error) = doc.error {
        eprintln!("{}: {}", "Warning".yellow().bold(), error);
    } else if doc.is_empty() {
        eprintln!(
            "{}: no title or headings found in {}",
            "Note".yellow().bold(),
            input.display()
        );
    }

    let json = pdf_outline::render::to_json(&doc, json_format(compact))?;

    match output {
        Some(path) if path.is_dir() => {
            let path = path.join(timestamped_name(input));
            fs::write(&path, &json)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        Some(path) => {
            fs::write(path, &json)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_batch(
    input_dir: &Path,
    output: Option<&Path>,
    compact: bool,
    deadline: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.unwrap_or(input_dir).to_path_buf();
    fs::create_dir_all(&output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        println!("{}", "No PDF files found".yellow());
        return Ok(());
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let options = build_options(deadline);
    let format = json_format(compact);

    let failures: Vec<String> = inputs
        .par_iter()
        .filter_map(|input| {
            let result = process_one(input, &output_dir, &options, format);
            pb.inc(1);
            match result {
                Ok(()) => None,
                Err(e) => Some(format!("{}: {}", input.display(), e)),
            }
        })
        .collect();

    pb.finish_with_message("Done");

    println!(
        "{} {} of {} files",
        "Processed".green().bold(),
        inputs.len() - failures.len(),
        inputs.len()
    );
    for failure in &failures {
        eprintln!("{}: {}", "Failed".red(), failure);
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} file(s) could not be written", failures.len()).into())
    }
}

fn process_one(
    input: &Path,
    output_dir: &Path,
    options: &ExtractOptions,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = ExtractionPipeline::with_options(options.clone());
    let doc = match fs::read(input) {
        Ok(data) => pipeline.extract_bytes(&data),
        // Driver-level failure shape, distinct from the library's
        // total-failure document.
        Err(e) => Document {
            title: "Error processing PDF".to_string(),
            outline: Vec::new(),
            error: Some(e.to_string()),
        },
    };

    if let Some(ref error) = doc.error {
        log::warn!("{}: {}", input.display(), error);
    }

    let json = pdf_outline::render::to_json(&doc, format)?;
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    fs::write(output_dir.join(format!("{}.json", stem)), json)?;
    Ok(())
}

/// `<stem>_<YYYYMMDD_HHMMSS>.json` for directory outputs.
fn timestamped_name(input: &Path) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.json", stem, stamp)
}

fn cmd_version() {
    println!(
        "{} {}",
        "pdf-outline".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
}
