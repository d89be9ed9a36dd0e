use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rankingrs::{extract_rankings, sink, RankingOptions, RawBlock, DEFAULT_MAX_RANK};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "rankings-csv")]
#[command(about = "Extract a clean university ranking table from saved page text or HTML")]
struct Args {
    /// Saved page captures, one block per file (reads stdin when empty)
    inputs: Vec<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Highest rank to accept
    #[arg(long, default_value_t = DEFAULT_MAX_RANK)]
    max_rank: u32,

    /// Stop trying strategies once this many candidates are found
    #[arg(short, long)]
    target: Option<usize>,

    /// Keep at most this many records
    #[arg(short = 'n', long)]
    max_entries: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn read_blocks(inputs: &[PathBuf]) -> Result<Vec<RawBlock>> {
    if inputs.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(vec![RawBlock::new(0, text)]);
    }

    let texts = inputs
        .iter()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(RawBlock::sequence(texts))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut builder = RankingOptions::builder().max_rank(args.max_rank);
    if let Some(target) = args.target {
        builder = builder.target_count(target);
    }
    if let Some(max) = args.max_entries {
        builder = builder.max_entries(max);
    }

    let blocks = read_blocks(&args.inputs)?;
    let table = extract_rankings(blocks, Some(builder.build()))?;
    if table.is_empty() {
        bail!("no universities extracted");
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        Format::Csv => sink::write_csv(&table.records, writer)?,
        Format::Json => sink::write_json(&table.records, writer)?,
    }

    let summary = table.summary();
    eprintln!("=== EXTRACTION SUMMARY ===");
    if let Some(strategy) = table.strategy {
        eprintln!("Strategy: {strategy}");
    }
    eprintln!("Total universities saved: {}", summary.total);
    if let Some((low, high)) = summary.rank_range {
        eprintln!("Rank range: {low} - {high}");
    }
    eprintln!("Countries represented: {}", summary.countries);
    eprintln!("Universities with identified countries: {}", summary.with_country);
    if let Some(path) = &args.output {
        eprintln!("Output file: {}", path.display());
    }

    Ok(())
}
