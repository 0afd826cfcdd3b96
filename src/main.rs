use clap::{Parser, Subcommand};
use nbhdfit_core::round1;
use nbhdfit_ranker::{ExplainedMatch, Ranker, RankingSummary, ScoreTableCache, UserPreferences};
use nbhdfit_scorer::{ScorePipeline, ScorerConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend the neighbourhood that best fits a traveller's priorities
#[derive(Parser, Debug)]
#[command(name = "nbhdfit")]
#[command(about = "Neighbourhood fit scoring and ranking", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the offline pipeline and write the neighbourhood score table
    Score {
        /// JSON config file; flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        listings_url: Option<String>,

        #[arg(long)]
        reviews_url: Option<String>,

        /// Minimum joined reviews for a neighbourhood to be kept
        #[arg(long)]
        min_reviews: Option<usize>,
    },

    /// Load the score table and rank neighbourhoods for a preference vector
    Rank {
        /// Score table produced by `score`
        #[arg(short, long, default_value = "neighbourhood_scores.csv")]
        scores: PathBuf,

        /// Eight priorities 1-5 in dimension order, comma separated
        #[arg(long, conflicts_with = "prefs_json", required_unless_present = "prefs_json")]
        prefs: Option<String>,

        /// Priorities as a JSON object keyed by dimension name
        #[arg(long)]
        prefs_json: Option<String>,

        /// Report the rank and percentile of this neighbourhood
        #[arg(long)]
        focus: Option<String>,

        /// Only print the first N neighbourhoods
        #[arg(long)]
        top: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct RankOutput {
    summary: RankingSummary,
    results: Vec<ExplainedMatch>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Score {
            config,
            output,
            listings_url,
            reviews_url,
            min_reviews,
        } => {
            let mut config = match config {
                Some(path) => ScorerConfig::from_file(&path)?,
                None => ScorerConfig::default(),
            };
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(url) = listings_url {
                config.listings_url = url;
            }
            if let Some(url) = reviews_url {
                config.reviews_url = url;
            }
            if let Some(min) = min_reviews {
                config.min_reviews = min;
            }

            info!("Starting nbhdfit scorer v{}", env!("CARGO_PKG_VERSION"));
            let pipeline = ScorePipeline::new(config)?;
            let report = pipeline.run().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Command::Rank {
            scores,
            prefs,
            prefs_json,
            focus,
            top,
            json,
        } => {
            let prefs = match (prefs, prefs_json) {
                (Some(list), _) => list.parse::<UserPreferences>()?,
                (None, Some(json)) => UserPreferences::from_json(&json)?,
                (None, None) => anyhow::bail!("either --prefs or --prefs-json is required"),
            };

            let cache = ScoreTableCache::new();
            let ranker = Ranker::new(cache.get(&scores)?);
            let ranked = ranker.rank(&prefs);

            let summary = RankingSummary::compute(&ranked, focus.as_deref())?;
            let mut results = ExplainedMatch::from_ranked_list(&ranked, &prefs);
            if let Some(n) = top {
                results.truncate(n);
            }

            if json {
                let output = RankOutput { summary, results };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_table(&summary, &results);
            }
        }
    }

    Ok(())
}

fn print_table(summary: &RankingSummary, results: &[ExplainedMatch]) {
    println!("{:>3}  {:<45} {:>6}  {}", "#", "Neighbourhood", "Fit", "Label");
    for r in results {
        println!(
            "{:>3}  {:<45} {:>6.1}  {}",
            r.rank, r.neighbourhood, r.fit_score, r.label
        );
    }

    if let Some(best) = results.first() {
        println!();
        println!("{}", best.analysis.confidence_note);
        for s in &best.analysis.strengths {
            println!("  + {} ({:.1})", s.dimension, s.score);
        }
        for f in &best.analysis.frictions {
            println!("  - {} ({:.1})", f.dimension, f.score);
        }
    }

    println!();
    println!(
        "{} neighbourhoods, mean fit {:.1}",
        summary.total,
        round1(summary.avg_score)
    );
    if let Some(focus) = &summary.focus {
        println!(
            "{} ranks #{} of {} ({}), better than {}% of areas",
            focus.neighbourhood, focus.rank, focus.total, focus.label, focus.percentile
        );
    }
}
