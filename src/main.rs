use anyhow::Context;
use clap::Parser;
use jamrank::{filter_available, parse_records, RankConfig, RankReport, Ranker};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank music search results by an estimated popularity score
#[derive(Parser, Debug)]
#[command(name = "jamrank")]
#[command(about = "Rank music search results and print the top-k as JSON", long_about = None)]
struct Args {
    /// JSON file with the search results (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON ranking config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of results to return
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Oldest release year the recency tier accepts
    #[arg(long)]
    recency_year: Option<i64>,

    /// Inverted position score is CAP - position
    #[arg(long)]
    position_cap: Option<i64>,

    /// Only rank tracks that can be streamed and downloaded
    #[arg(long)]
    filter_available: bool,

    /// Include the raw record of each result in the output
    #[arg(long)]
    include_record: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn rank_config(&self) -> anyhow::Result<RankConfig> {
        let config = match &self.config {
            Some(path) => RankConfig::from_json_file(path)
                .with_context(|| format!("loading config from {:?}", path))?,
            None => RankConfig::default(),
        };
        Ok(self.apply_overrides(config))
    }

    /// Flags given on the command line win over the config file.
    fn apply_overrides(&self, mut config: RankConfig) -> RankConfig {
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        if let Some(year) = self.recency_year {
            config.recency_year_threshold = year;
        }
        if let Some(cap) = self.position_cap {
            config.position_cap = cap;
        }
        if self.filter_available {
            config.filter_available = true;
        }
        config
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {:?}", path)),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("reading stdin")?;
                Ok(text)
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.rank_config()?;
    let ranker = Ranker::new(config)?;
    info!("Ranking with top_k={}", ranker.config().top_k);

    let records = parse_records(&args.read_input()?)?;
    info!("Loaded {} records", records.len());
    let records = filter_available(ranker.config(), records);
    if records.is_empty() {
        warn!("No records to rank");
    }

    let outcome = ranker.rank_top_k(records);
    for (tag, count) in outcome.diagnostics.iter() {
        info!("score source {}: {}", tag, count);
    }

    let report = RankReport::from_outcome(outcome, args.include_record);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
