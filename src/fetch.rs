//! Card statistics retrieval from EDHREC.
//!
//! [`EdhrecClient`] fetches one card page per request. [`fetch_all`] fans a
//! whole deck list out over any [`CardSource`] and joins on every request,
//! turning per-card errors into [`FetchOutcome::Failed`] so one bad card never
//! sinks the batch.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::Client;

use crate::config;
use crate::error::{DeckStatsError, Result};
use crate::models::{CardLookup, CardRecord, FetchOutcome};
use crate::slug::card_slug;

// ---------------------------------------------------------------------------
// CardSource
// ---------------------------------------------------------------------------

/// Anything that can produce a [`CardRecord`] for a card name.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_card(&self, card_name: &str) -> Result<CardRecord>;
}

// ---------------------------------------------------------------------------
// EdhrecClient
// ---------------------------------------------------------------------------

/// HTTP client for EDHREC card pages (`{base_url}/{slug}.json`).
#[derive(Debug, Clone)]
pub struct EdhrecClient {
    base_url: String,
    client: Client,
}

impl EdhrecClient {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Download and parse the raw card page for a slug.
    pub async fn fetch_page(&self, slug: &str) -> Result<serde_json::Value> {
        let url = config::card_url(&self.base_url, slug);
        tracing::debug!(%url, "fetching card page");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DeckStatsError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CardSource for EdhrecClient {
    async fn fetch_card(&self, card_name: &str) -> Result<CardRecord> {
        let slug = card_slug(card_name);
        let page = self.fetch_page(&slug).await?;
        let lookup = CardLookup::from_page(&page);
        if matches!(lookup, CardLookup::Missing) {
            tracing::debug!(card = card_name, %slug, "page has no card object");
        }
        Ok(CardRecord::from_lookup(card_name, &slug, lookup))
    }
}

// ---------------------------------------------------------------------------
// Fan-out
// ---------------------------------------------------------------------------

/// Fetch every card concurrently and wait for all of them to settle.
///
/// All requests are in flight at once. The returned outcomes line up with
/// `card_names` index for index, whatever order the requests completed in.
pub async fn fetch_all<S>(source: &S, card_names: &[String]) -> Vec<FetchOutcome>
where
    S: CardSource + ?Sized,
{
    let requests = card_names.iter().map(|name| async move {
        match source.fetch_card(name).await {
            Ok(record) => FetchOutcome::Fetched(record),
            Err(e) => {
                tracing::warn!(card = %name, error = %e, "failed to fetch card");
                FetchOutcome::Failed {
                    card_name: name.clone(),
                    reason: e.to_string(),
                }
            }
        }
    });

    join_all(requests).await
}
