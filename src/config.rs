use std::time::Duration;

pub const EDHREC_BASE: &str = "https://json.edhrec.com/pages/cards";

/// Number of equal-width histogram buckets per metric.
pub const BUCKET_COUNT: usize = 10;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!("deckstats/", env!("CARGO_PKG_VERSION"));

/// Build the page URL for a card slug, e.g. `{base}/sol-ring.json`.
pub fn card_url(base: &str, slug: &str) -> String {
    format!("{}/{}.json", base.trim_end_matches('/'), slug)
}
