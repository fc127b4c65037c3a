// seating-chart: Assign occupants to tables and seats and export the plan

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seating_chart::error::AppError;
use seating_chart::export::{Clipboard, FileClipboard, StdoutClipboard};
use seating_chart::labels::{Labels, Language};
use seating_chart::pdf::{format_date_display, generate_pdf, ChartConfig};
use seating_chart::session::Session;
use seating_chart::store::OccupancyStore;
use seating_chart::SeatingChart;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Assign occupants to tables and seats and export the seating plan")]
struct Args {
    /// Command script (click, type, enter, escape, save, cancel, assign, export, show); reads stdin if omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Initial assignments (JSON array of {"table", "name"} or {"row", "seat", "name"})
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Label language
    #[arg(long, value_enum, default_value_t = Language::En)]
    lang: Language,

    /// File that receives exported plans (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the final chart to this PDF file
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// TrueType font for the PDF (required for non-Latin labels or names)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Event title for the PDF header
    #[arg(short, long, default_value = "")]
    title: String,

    /// Date for the PDF header (YYYY-MM-DD format, defaults to today)
    #[arg(short, long)]
    date: Option<String>,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate the date before doing any work
    let date = parse_date(&args.date)?;
    let labels = Labels::for_language(args.lang);

    let mut store = OccupancyStore::new();
    if let Some(seed) = &args.seed {
        let count = store.load_seed(seed)?;
        tracing::info!(count, "seed applied");
    }

    let mut clipboard: Box<dyn Clipboard> = match &args.output {
        Some(path) => Box::new(FileClipboard::new(path)),
        None => Box::new(StdoutClipboard),
    };

    let mut session = Session::new(
        SeatingChart::with_store(store),
        labels,
        clipboard.as_mut(),
        io::stdout(),
    );
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| AppError::ScriptReadError(format!("{}: {}", path.display(), e)))?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }
    let chart = session.into_chart();

    if let Some(pdf_path) = &args.pdf {
        let config = ChartConfig {
            title: args.title,
            date,
            font: args.font,
        };
        generate_pdf(chart.store(), labels, &config, pdf_path)?;

        eprintln!("✓ Generated: {}", pdf_path.display());
        eprintln!("  Date: {}", format_date_display(&config.date));
        eprintln!("  Assigned: {}", chart.store().len());
    }

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_date(date_str: &Option<String>) -> Result<NaiveDate, AppError> {
    match date_str {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::DateError(s.clone())),
        None => Ok(Local::now().date_naive()),
    }
}
