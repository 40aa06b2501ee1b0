use anyhow::{Context, Result};
use clap::Parser;
use incpath_rewriter::{OverrideTable, TransformConfig, TreeTransformer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "incpath")]
#[command(
    about = "Rewrites C include paths to resolve from a single flat search root",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Directory whose basename becomes the prefix of every rewritten include
    input_directory: PathBuf,

    /// Directory the mirrored, rewritten tree is written under
    output_directory: PathBuf,

    /// Log every processed file and every changed include (before -> after)
    #[arg(short, long)]
    verbose: bool,

    /// Source include string to replace verbatim; pair each with a -d flag by position
    #[arg(short = 's', long = "source-overrides", value_name = "INCLUDE")]
    source_overrides: Vec<String>,

    /// Destination include string for the positionally paired -s flag
    #[arg(short = 'd', long = "destination-overrides", value_name = "INCLUDE")]
    destination_overrides: Vec<String>,

    /// Fail when two headers share a basename instead of keeping the first
    #[arg(long)]
    strict: bool,

    /// Compute the transformation without writing any output file
    #[arg(long)]
    dry_run: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.json {
        // Keep stdout clean for JSON parsing.
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    // Rejected here, before any file is touched.
    let overrides = OverrideTable::from_pairs(cli.source_overrides, cli.destination_overrides)?;

    let input_root = cli
        .input_directory
        .canonicalize()
        .context("Invalid input directory")?;

    let mut config = TransformConfig::new(input_root, cli.output_directory);
    config.overrides = overrides;
    config.strict = cli.strict;
    config.dry_run = cli.dry_run;

    let stats = TreeTransformer::new(config).run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        eprintln!(
            "Rewrote {} includes across {} files ({} headers indexed) in {}ms",
            stats.includes_rewritten, stats.files, stats.headers, stats.time_ms
        );
    }

    Ok(())
}
