use serde::{Deserialize, Serialize};

use super::card::CardRecord;

// ---------------------------------------------------------------------------
// Metric — A per-card statistic that DeckStats charts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Salt,
    Cost,
    Popularity,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Salt, Metric::Cost, Metric::Popularity];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Salt => "Salt",
            Metric::Cost => "Cost",
            Metric::Popularity => "Popularity",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            Metric::Salt => {
                Some("Scale from 0 to 4 on how frustrating the card is to play against.")
            }
            Metric::Cost => None,
            Metric::Popularity => {
                Some("Percentage of decks a card is in over how many decks it could be in.")
            }
        }
    }

    /// Format a value of this metric for display.
    pub fn display(&self, value: f64) -> String {
        match self {
            Metric::Salt => format!("{:.2}", value),
            Metric::Cost => format!("${:.2}", value),
            Metric::Popularity => format!("{:.2}%", value * 100.0),
        }
    }

    /// Value range used to normalize heat-map colors. Not used for bucketing.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Metric::Salt => (0.0, 2.0),
            Metric::Cost => (0.0, 100.0),
            Metric::Popularity => (0.0, 0.5),
        }
    }

    /// Read this metric from a card record.
    pub fn value(&self, record: &CardRecord) -> Option<f64> {
        match self {
            Metric::Salt => record.salt,
            Metric::Cost => record.price,
            Metric::Popularity => record.popularity,
        }
    }
}
