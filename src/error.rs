#[derive(Debug, thiserror::Error)]
pub enum DeckStatsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty sample: {0}")]
    EmptySample(String),

    #[error("Unable to fetch the following cards: {}", names.join(", "))]
    FetchFailed { names: Vec<String> },

    #[error("Batch superseded by a newer request")]
    Superseded,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DeckStatsError>;
