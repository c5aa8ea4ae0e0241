//! DeckStats SDK for Rust.
//!
//! Turns a pasted MTG deck list into per-card statistics (price, saltiness,
//! popularity) fetched from EDHREC's public JSON card pages, and aggregates
//! each statistic into a histogram with total and average.
//!
//! # Quick start
//!
//! ```no_run
//! use deckstats::DeckStats;
//!
//! # async fn example() -> deckstats::Result<()> {
//! let stats = DeckStats::builder().build()?;
//!
//! let report = stats.report("1 Sol Ring\n1 Counterspell").await?;
//! for name in report.failed_names() {
//!     eprintln!("could not fetch {name}");
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod color;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod parser;
pub mod report;
pub mod slug;
pub mod stats;

#[cfg(feature = "blocking")]
pub use blocking::BlockingDeckStats;
pub use error::{DeckStatsError, Result};
pub use fetch::{CardSource, EdhrecClient};
pub use models::{CardRecord, FetchOutcome, Metric};
pub use report::{DeckReport, FailurePolicy};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DeckStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DeckStats`] client.
///
/// Use [`DeckStats::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DeckStatsBuilder::build).
#[derive(Debug, Clone)]
pub struct DeckStatsBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    failure_policy: FailurePolicy,
}

impl Default for DeckStatsBuilder {
    fn default() -> Self {
        Self {
            base_url: config::EDHREC_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl DeckStatsBuilder {
    /// Override the card page base URL.
    ///
    /// Pages are requested from `{base_url}/{slug}.json`. Defaults to
    /// [`config::EDHREC_BASE`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Choose whether reports are produced when some cards fail to fetch.
    ///
    /// Defaults to [`FailurePolicy::Partial`].
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// created. No request is made here.
    pub fn build(self) -> Result<DeckStats> {
        url::Url::parse(&self.base_url).map_err(|e| {
            DeckStatsError::InvalidArgument(format!("base URL '{}': {}", self.base_url, e))
        })?;
        let client = EdhrecClient::new(&self.base_url, self.timeout, &self.user_agent)?;
        Ok(DeckStats::with_source(client, self.failure_policy))
    }
}

// ---------------------------------------------------------------------------
// DeckStats
// ---------------------------------------------------------------------------

/// The main entry point: parse deck lists, fetch card statistics, and build
/// reports.
///
/// Cloning is cheap and clones share the batch counter, so a newer
/// [`report()`](Self::report) on any clone supersedes older ones.
#[derive(Clone)]
pub struct DeckStats {
    source: Arc<dyn CardSource>,
    failure_policy: FailurePolicy,
    generation: Arc<AtomicU64>,
}

impl DeckStats {
    /// Create a new builder for the EDHREC-backed client.
    pub fn builder() -> DeckStatsBuilder {
        DeckStatsBuilder::default()
    }

    /// Create a client over any [`CardSource`].
    pub fn with_source<S>(source: S, failure_policy: FailurePolicy) -> Self
    where
        S: CardSource + 'static,
    {
        Self {
            source: Arc::new(source),
            failure_policy,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Extract card names from a raw deck list.
    pub fn parse(&self, deck_list: &str) -> Vec<String> {
        parser::parse_deck_list(deck_list)
    }

    /// Fetch statistics for a single card.
    pub async fn fetch_card(&self, card_name: &str) -> Result<CardRecord> {
        self.source.fetch_card(card_name).await
    }

    /// Fetch every card concurrently; see [`fetch::fetch_all`].
    pub async fn fetch_all(&self, card_names: &[String]) -> Vec<FetchOutcome> {
        fetch::fetch_all(self.source.as_ref(), card_names).await
    }

    /// Parse a deck list, fetch every card, and aggregate the results.
    ///
    /// Each call starts a new batch. If another batch is started (on this
    /// client or a clone) before this one settles, this call returns
    /// [`DeckStatsError::Superseded`] instead of stale results. Dropping the
    /// returned future cancels its in-flight requests.
    pub async fn report(&self, deck_list: &str) -> Result<DeckReport> {
        let batch = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let names = self.parse(deck_list);
        tracing::info!(batch, cards = names.len(), "fetching deck statistics");

        let outcomes = self.fetch_all(&names).await;

        if self.generation.load(Ordering::SeqCst) != batch {
            tracing::debug!(batch, "discarding superseded batch");
            return Err(DeckStatsError::Superseded);
        }

        let report = DeckReport::from_outcomes(outcomes, self.failure_policy)?;
        tracing::info!(
            batch,
            failed = report.failed_names().len(),
            "deck statistics ready"
        );
        Ok(report)
    }
}

impl fmt::Display for DeckStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeckStats(failure_policy={:?}, batches={})",
            self.failure_policy,
            self.generation.load(Ordering::SeqCst)
        )
    }
}
