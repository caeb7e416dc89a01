//! docsift CLI - document structure inference tool

mod remote;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsift::{
    analyze_file_with_options, detect_format_from_path, summarize, AnalyzeOptions,
    DocumentStructure, HeadingMode, JsonFormat, PageSelection, Summarizer,
};
use remote::RemoteSummarizer;

#[derive(Parser)]
#[command(name = "docsift")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer tables, headings, entities and keywords from documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a document and print its structure as JSON
    Analyze {
        /// Input file (token JSON or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Process pages on a single thread
        #[arg(long)]
        sequential: bool,

        /// Heading strategy
        #[arg(long, value_enum, default_value = "auto")]
        heading_mode: HeadingChoice,
    },

    /// Print a plain text report
    Report {
        /// Input file (token JSON or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Produce an executive summary
    Summarize {
        /// Input file (token JSON or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// API key for the remote summarizer (local summary if absent)
        #[arg(long, env = "DOCSIFT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model for the remote summarizer
        #[arg(long, env = "DOCSIFT_MODEL", default_value = remote::DEFAULT_MODEL)]
        model: String,

        /// Messages endpoint for the remote summarizer
        #[arg(long, env = "DOCSIFT_API_URL", default_value = remote::DEFAULT_API_URL)]
        api_url: String,
    },

    /// Show document information
    Info {
        /// Input file (token JSON or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum HeadingChoice {
    /// Follow each page's font metrics
    Auto,
    /// Per-token font sizes
    Geometric,
    /// Line-level heuristics
    Coarse,
}

impl From<HeadingChoice> for HeadingMode {
    fn from(choice: HeadingChoice) -> Self {
        match choice {
            HeadingChoice::Auto => HeadingMode::Auto,
            HeadingChoice::Geometric => HeadingMode::Geometric,
            HeadingChoice::Coarse => HeadingMode::Coarse,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            compact,
            pages,
            sequential,
            heading_mode,
        }) => cmd_analyze(
            &input,
            output.as_deref(),
            compact,
            pages.as_deref(),
            sequential,
            heading_mode,
        ),
        Some(Commands::Report { input, pages }) => cmd_report(&input, pages.as_deref()),
        Some(Commands::Summarize {
            input,
            api_key,
            model,
            api_url,
        }) => cmd_summarize(&input, api_key, model, api_url),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: docsift <COMMAND> <FILE>".yellow());
            println!("       docsift --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p)?),
        None => Ok(PageSelection::All),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn analyze_with_spinner(
    input: &Path,
    options: AnalyzeOptions,
) -> Result<DocumentStructure, Box<dyn std::error::Error>> {
    let pb = spinner("Analysing document...");
    let result = analyze_file_with_options(input, options);
    pb.finish_and_clear();
    Ok(result?)
}

fn cmd_analyze(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pages: Option<&str>,
    sequential: bool,
    heading_mode: HeadingChoice,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = AnalyzeOptions::new()
        .with_pages(parse_pages(pages)?)
        .with_parallel(!sequential)
        .with_heading_mode(heading_mode.into());
    let doc = analyze_with_spinner(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docsift::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_report(input: &Path, pages: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let options = AnalyzeOptions::new().with_pages(parse_pages(pages)?);
    let doc = analyze_file_with_options(input, options)?;
    println!("{}", docsift::render::to_text(&doc)?);
    Ok(())
}

fn cmd_summarize(
    input: &Path,
    api_key: Option<String>,
    model: String,
    api_url: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = analyze_with_spinner(input, AnalyzeOptions::default())?;

    let remote = match api_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => Some(
            RemoteSummarizer::new(key)?
                .with_model(model)
                .with_api_url(api_url),
        ),
        None => None,
    };

    let pb = spinner("Summarizing...");
    let outcome = summarize(&doc, remote.as_ref().map(|r| r as &dyn Summarizer));
    pb.finish_and_clear();

    let provenance = if outcome.is_remote() {
        "remote".green()
    } else {
        "local".yellow()
    };
    eprintln!("{}: {}", "Summary source".bold(), provenance);

    let json = serde_json::to_string_pretty(outcome.summary())?;
    println!("{}", json);

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let doc = analyze_file_with_options(input, AnalyzeOptions::default())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Pages".bold(), doc.page_count());

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref creator) = doc.metadata.creator {
        println!("{}: {}", "Creator".bold(), creator);
    }
    if let Some(ref producer) = doc.metadata.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = doc.metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }

    println!();
    println!("{}", "Structure Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), doc.word_count());
    println!("{}: {}", "Characters".bold(), doc.text.chars().count());
    println!("{}: {}", "Tables".bold(), doc.tables.len());
    println!("{}: {}", "Headings".bold(), doc.headings.len());
    println!("{}: {}", "Sections".bold(), doc.sections.len());

    let counts = doc.entity_counts();
    if counts.is_empty() {
        println!("{}: 0", "Entities".bold());
    } else {
        let parts: Vec<String> = counts
            .iter()
            .map(|(kind, count)| format!("{} {}", count, kind))
            .collect();
        println!("{}: {}", "Entities".bold(), parts.join(", "));
    }

    if !doc.keywords.is_empty() {
        let top: Vec<&str> = doc.keywords.iter().take(5).map(String::as_str).collect();
        println!("{}: {}", "Top keywords".bold(), top.join(", "));
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docsift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document structure inference tool");
    println!();
    println!("License: MIT");
}
