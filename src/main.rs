use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use watchtrend::{
    analyze_corpus, extract_trends, parse_history_file, HumanReport, KeywordReport, StopWords,
    TrendConfig,
};

#[derive(Parser)]
#[command(name = "watchtrend")]
#[command(author, version, about = "Keyword trends from YouTube watch history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract ranked keywords with their average watch date
    Extract {
        /// Input watch history (Google Takeout JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the keyword report (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for a plain-text keyword table
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// JSON config file; flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Newline-separated stop-word list replacing the English default
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Unigrams considered for singular/plural merging
        #[arg(long)]
        merge_top_k: Option<usize>,

        /// Bigrams considered for overlap pruning
        #[arg(long)]
        prune_top_k: Option<usize>,

        /// Keywords summarized before filtering
        #[arg(long)]
        final_top_n: Option<usize>,

        /// Overlap share at which a bigram absorbs its words
        #[arg(long)]
        overlap_threshold: Option<f64>,

        /// Keywords need a frequency above this to be kept
        #[arg(long)]
        min_frequency: Option<f64>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print corpus statistics without extracting keywords
    Analyze {
        /// Input watch history (Google Takeout JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// How many of the most common n-grams to list
        #[arg(long, default_value = "10")]
        top: usize,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Newline-separated stop-word list replacing the English default
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Flag overrides applied on top of the base config
#[derive(Default)]
struct Overrides {
    stop_words: Option<PathBuf>,
    merge_top_k: Option<usize>,
    prune_top_k: Option<usize>,
    final_top_n: Option<usize>,
    overlap_threshold: Option<f64>,
    min_frequency: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            human_readable,
            config,
            stop_words,
            merge_top_k,
            prune_top_k,
            final_top_n,
            overlap_threshold,
            min_frequency,
            verbose,
        } => {
            setup_logging(verbose);
            let overrides = Overrides {
                stop_words,
                merge_top_k,
                prune_top_k,
                final_top_n,
                overlap_threshold,
                min_frequency,
            };
            let config = load_config(config, overrides)?;
            run_extract(input, output, human_readable, &config)
        }
        Commands::Analyze {
            input,
            top,
            config,
            stop_words,
            verbose,
        } => {
            setup_logging(verbose);
            let overrides = Overrides {
                stop_words,
                ..Default::default()
            };
            let config = load_config(config, overrides)?;
            run_analyze(input, top, &config)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_config(path: Option<PathBuf>, overrides: Overrides) -> Result<TrendConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading config from {:?}", path);
            TrendConfig::from_file(&path).context("Failed to load config")?
        }
        None => TrendConfig::default(),
    };

    if let Some(path) = overrides.stop_words {
        config.stop_words = StopWords::from_file(&path).context("Failed to load stop words")?;
        info!("Loaded {} stop words from {:?}", config.stop_words.len(), path);
    }
    if let Some(k) = overrides.merge_top_k {
        config.merge_top_k = k;
    }
    if let Some(k) = overrides.prune_top_k {
        config.prune_top_k = k;
    }
    if let Some(n) = overrides.final_top_n {
        config.final_top_n = n;
    }
    if let Some(threshold) = overrides.overlap_threshold {
        config.overlap_threshold = threshold;
    }
    if let Some(min) = overrides.min_frequency {
        config.min_frequency = min;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run_extract(
    input: PathBuf,
    output: PathBuf,
    human_readable: Option<PathBuf>,
    config: &TrendConfig,
) -> Result<()> {
    info!("Loading watch history from {:?}", input);
    let history = parse_history_file(&input).context("Failed to parse watch history")?;
    info!("Loaded {} history entries", history.len());

    let report = extract_trends(&history, config).context("Keyword extraction failed")?;

    KeywordReport::from_report(&report)
        .write_json(&output)
        .context("Failed to write keyword report")?;
    info!("Keyword report written to {:?}", output);

    if let Some(path) = human_readable {
        HumanReport::new(&report.entries)
            .write_file(&path)
            .context("Failed to write keyword table")?;
        info!("Keyword table written to {:?}", path);
    }

    let stats = &report.stats;
    info!(
        "Complete: {} keywords ({} unavailable videos, {} merges, {} unigrams and {} bigrams pruned)",
        report.entries.len(),
        stats.unavailable_dropped,
        stats.merges_applied,
        stats.unigrams_pruned,
        stats.bigrams_pruned
    );

    Ok(())
}

fn run_analyze(input: PathBuf, top: usize, config: &TrendConfig) -> Result<()> {
    info!("Analyzing watch history from {:?}", input);
    let history = parse_history_file(&input).context("Failed to parse watch history")?;
    let analysis = analyze_corpus(&history, config, top)
        .context("Failed to analyze watch history")?;

    println!("Watch History Analysis");
    println!("======================");
    println!("Total entries: {}", analysis.total_records);
    println!(
        "Unavailable videos: {} ({:.1}%)",
        analysis.unavailable_dropped,
        analysis.unavailable_fraction * 100.0
    );
    println!();

    println!("Most Common Unigrams");
    println!("--------------------");
    for (word, count) in &analysis.top_unigrams {
        println!("{:>6}  {}", count, word);
    }
    println!();

    println!("Most Common Bigrams");
    println!("-------------------");
    for ((first, second), count) in &analysis.top_bigrams {
        println!("{:>6}  {} {}", count, first, second);
    }
    println!();

    println!("Unigrams After Merging Plurals ({} merges)", analysis.merges.len());
    println!("------------------------------");
    for (word, count) in &analysis.top_canonical_unigrams {
        println!("{:>6}  {}", count, word);
    }

    Ok(())
}
