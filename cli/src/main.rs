//! pdfchunk CLI - PDF text extraction and chunking tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfchunk::pipeline::{self, Config, DEFAULT_INPUT};
use pdfchunk::{
    ChunkOptions, DocumentInfo, ExtractOptions, LopdfBackend, PageSelection, TextExtractor, DEFAULT_CHUNK_SIZE,
    DEFAULT_OVERLAP,
};

#[derive(Parser)]
#[command(name = "pdfchunk")]
#[command(version)]
#[command(about = "Extract PDF text and split it into overlapping chunks", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    chunking: ChunkArgs,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct ChunkArgs {
    /// Maximum characters per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Characters shared by consecutive chunks
    #[arg(long, default_value_t = DEFAULT_OVERLAP)]
    overlap: usize,
}

impl From<ChunkArgs> for ChunkOptions {
    fn from(args: ChunkArgs) -> Self {
        ChunkOptions::new()
            .with_chunk_size(args.chunk_size)
            .with_overlap(args.overlap)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract plain text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Extract text and write its chunks as JSON
    Chunks {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        chunking: ChunkArgs,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            pages,
        }) => cmd_text(&input, output.as_deref(), pages.as_deref()),
        Some(Commands::Chunks {
            input,
            output,
            chunking,
            pages,
            compact,
        }) => cmd_chunks(&input, output.as_deref(), chunking, pages.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            cmd_preview(input, cli.chunking, cli.pages.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?),
        None => Ok(PageSelection::All),
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Extract, chunk, and show the first chunk.
fn cmd_preview(
    input: PathBuf,
    chunking: ChunkArgs,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        input,
        chunk: chunking.into(),
        extract: ExtractOptions::new().with_pages(parse_pages(pages)?),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Processing {}...", config.input.display()));

    let result = pipeline::run(&config);
    spinner.finish_and_clear();

    let Some(report) = result? else {
        println!(
            "{} {} not found",
            "Warning:".yellow().bold(),
            config.input.display()
        );
        return Ok(());
    };

    let name = config
        .input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| config.input.display().to_string());

    println!(
        "{} Extracted {} characters from {}",
        "✓".green().bold(),
        report.char_count,
        name
    );
    println!(
        "{} Split into {} chunks (preview below):\n",
        "✓".green().bold(),
        report.chunk_count()
    );

    match report.first_chunk() {
        Some(first) => println!("{}", first),
        None => println!("{}", "(no text)".dimmed()),
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new().with_pages(parse_pages(pages)?);
    let text = TextExtractor::with_options(options).extract_file(input)?;
    write_or_print(output, &text)
}

fn cmd_chunks(
    input: &Path,
    output: Option<&Path>,
    chunking: ChunkArgs,
    pages: Option<&str>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let extract = ExtractOptions::new().with_pages(parse_pages(pages)?);
    let report = pipeline::process_file(input, chunking.into(), extract)?;
    log::debug!("Serializing {} chunks", report.chunk_count());
    let json = report.to_json(!compact)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let backend = LopdfBackend::load_file(input)?;
    let info = DocumentInfo::from_backend(&backend);
    let text = TextExtractor::new().extract_from(&backend)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), info.version);
    println!("{}: {}", "Pages".bold(), info.page_count);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    let chunks = pdfchunk::TextChunker::default().chunks(&text).count();

    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);
    println!(
        "{}: {} (size {}, overlap {})",
        "Chunks".bold(),
        chunks,
        DEFAULT_CHUNK_SIZE,
        DEFAULT_OVERLAP
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfchunk".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF text extraction and chunking tool");
    println!("License: MIT");
}
