//! Deck-level report assembled from settled fetch outcomes.

use serde::{Deserialize, Serialize};

use crate::error::{DeckStatsError, Result};
use crate::models::{CardRecord, FetchOutcome, Metric};
use crate::stats::{summarize_metric, Summary};

/// What to do with a batch in which some cards could not be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Report on the cards that were fetched and list the rest as failed.
    #[default]
    Partial,
    /// Refuse to report unless every card was fetched.
    RequireAll,
}

// ---------------------------------------------------------------------------
// MetricReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    pub metric: Metric,
    /// `None` when no fetched card has a value for this metric.
    pub summary: Option<Summary>,
}

// ---------------------------------------------------------------------------
// DeckReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckReport {
    /// One outcome per parsed card name, in deck list order.
    pub outcomes: Vec<FetchOutcome>,
    pub metrics: Vec<MetricReport>,
}

impl DeckReport {
    /// Aggregate settled outcomes according to `policy`.
    ///
    /// # Errors
    ///
    /// With [`FailurePolicy::RequireAll`], returns
    /// [`DeckStatsError::FetchFailed`] naming every card that failed.
    pub fn from_outcomes(outcomes: Vec<FetchOutcome>, policy: FailurePolicy) -> Result<Self> {
        if policy == FailurePolicy::RequireAll && outcomes.iter().any(FetchOutcome::is_failed) {
            return Err(DeckStatsError::FetchFailed {
                names: failed_names(&outcomes),
            });
        }

        let metrics = Metric::ALL
            .iter()
            .map(|&metric| {
                let records = outcomes.iter().filter_map(FetchOutcome::record);
                let summary = match summarize_metric(metric, records) {
                    Ok(summary) => Some(summary),
                    Err(e) => {
                        tracing::debug!(metric = metric.name(), error = %e, "no summary");
                        None
                    }
                };
                MetricReport { metric, summary }
            })
            .collect();

        Ok(Self { outcomes, metrics })
    }

    /// Successfully fetched records, in deck list order.
    pub fn records(&self) -> impl Iterator<Item = &CardRecord> {
        self.outcomes.iter().filter_map(FetchOutcome::record)
    }

    /// Names of the cards that could not be fetched, in deck list order.
    pub fn failed_names(&self) -> Vec<String> {
        failed_names(&self.outcomes)
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricReport> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

fn failed_names(outcomes: &[FetchOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter(|o| o.is_failed())
        .map(|o| o.card_name().to_string())
        .collect()
}
