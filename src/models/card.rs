use serde::{Deserialize, Serialize};
use url::Url;

use super::page::CardLookup;

// ---------------------------------------------------------------------------
// CardRecord — Statistics for one card of a deck list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card name as it appeared in the deck list.
    pub name: String,
    /// EDHREC page slug the record was fetched from.
    pub slug: String,
    pub image_uri: Option<Url>,
    pub salt: Option<f64>,
    /// Average price across all price sources, in USD.
    pub price: Option<f64>,
    pub popularity: Option<f64>,
}

impl CardRecord {
    /// Build a record from a card page lookup.
    ///
    /// A `Missing` card object yields a record with every statistic absent.
    pub fn from_lookup(name: &str, slug: &str, lookup: CardLookup) -> Self {
        let mut record = Self {
            name: name.to_string(),
            slug: slug.to_string(),
            image_uri: None,
            salt: None,
            price: None,
            popularity: None,
        };

        match lookup {
            CardLookup::Missing => {}
            CardLookup::Found(card) => {
                record.image_uri = card
                    .image_uris
                    .iter()
                    .find_map(|uri| Url::parse(uri).ok());
                record.salt = card.salt;
                record.price = card.average_price();
                record.popularity = card.popularity();
            }
        }

        record
    }
}

// ---------------------------------------------------------------------------
// FetchOutcome — Settled result of fetching one card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Fetched(CardRecord),
    Failed { card_name: String, reason: String },
}

impl FetchOutcome {
    /// The deck list name this outcome belongs to.
    pub fn card_name(&self) -> &str {
        match self {
            FetchOutcome::Fetched(record) => &record.name,
            FetchOutcome::Failed { card_name, .. } => card_name,
        }
    }

    pub fn record(&self) -> Option<&CardRecord> {
        match self {
            FetchOutcome::Fetched(record) => Some(record),
            FetchOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }
}
