mod render;

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use deckstats::{DeckStats, FailurePolicy};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "deck-stats", version, about = "Show EDHREC statistics for a deck list")]
struct Cli {
    /// Deck list file ("1 Sol Ring" per line). Reads stdin when omitted.
    deck: Option<PathBuf>,
    #[arg(long, default_value = deckstats::config::EDHREC_BASE)]
    base_url: String,
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// Refuse to show statistics unless every card was found.
    #[arg(long)]
    require_all: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let deck_list = match &cli.deck {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let policy = if cli.require_all {
        FailurePolicy::RequireAll
    } else {
        FailurePolicy::Partial
    };
    let stats = DeckStats::builder()
        .base_url(cli.base_url)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .failure_policy(policy)
        .build()?;

    match stats.report(&deck_list).await {
        Ok(report) => {
            print!("{}", render::failures(&report.failed_names()));
            print!("{}", render::card_table(&report));
            for metric in &report.metrics {
                print!("{}", render::metric_section(metric));
            }
            Ok(())
        }
        Err(deckstats::DeckStatsError::FetchFailed { names }) => {
            eprint!("{}", render::failures(&names));
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
