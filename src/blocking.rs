//! Blocking wrapper around [`DeckStats`] for synchronous callers.
//!
//! Drives the async client on a private current-thread Tokio runtime. The
//! fan-out still runs every request concurrently; only the caller blocks.
//!
//! # Example
//!
//! ```no_run
//! use deckstats::BlockingDeckStats;
//!
//! let stats = BlockingDeckStats::builder().build().unwrap();
//! let report = stats.report("1 Sol Ring\n1 Arcane Signet").unwrap();
//! println!("{} cards failed", report.failed_names().len());
//! ```

use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::error::Result;
use crate::{CardRecord, DeckReport, DeckStats, DeckStatsBuilder, FailurePolicy, FetchOutcome};

// ---------------------------------------------------------------------------
// BlockingDeckStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BlockingDeckStats`] instance.
#[derive(Debug, Clone, Default)]
pub struct BlockingDeckStatsBuilder {
    inner: DeckStatsBuilder,
}

impl BlockingDeckStatsBuilder {
    /// Override the card page base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.inner = self.inner.failure_policy(policy);
        self
    }

    /// Build the client and its runtime.
    pub fn build(self) -> Result<BlockingDeckStats> {
        let inner = self.inner.build()?;
        BlockingDeckStats::from_async(inner)
    }
}

// ---------------------------------------------------------------------------
// BlockingDeckStats
// ---------------------------------------------------------------------------

/// Synchronous facade over [`DeckStats`].
///
/// Must not be used from within an async runtime; blocking on a nested
/// runtime panics.
pub struct BlockingDeckStats {
    inner: DeckStats,
    runtime: Runtime,
}

impl BlockingDeckStats {
    /// Create a new builder for configuring the blocking client.
    pub fn builder() -> BlockingDeckStatsBuilder {
        BlockingDeckStatsBuilder::default()
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: DeckStats) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    pub fn parse(&self, deck_list: &str) -> Vec<String> {
        self.inner.parse(deck_list)
    }

    pub fn fetch_card(&self, card_name: &str) -> Result<CardRecord> {
        self.runtime.block_on(self.inner.fetch_card(card_name))
    }

    pub fn fetch_all(&self, card_names: &[String]) -> Vec<FetchOutcome> {
        self.runtime.block_on(self.inner.fetch_all(card_names))
    }

    pub fn report(&self, deck_list: &str) -> Result<DeckReport> {
        self.runtime.block_on(self.inner.report(deck_list))
    }

    /// Borrow the underlying async client.
    pub fn inner(&self) -> &DeckStats {
        &self.inner
    }
}
