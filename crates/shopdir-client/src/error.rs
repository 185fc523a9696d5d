use thiserror::Error;

/// Failure of a single transport source. Never fatal on its own: the loader
/// moves on to the next source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport failure from {source_name}: unexpected HTTP status {status}")]
    UnexpectedStatus { source_name: String, status: u16 },

    #[error("transport failure from {source_name}: {source}")]
    Transport {
        source_name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("parse failure for response from {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    #[must_use]
    pub fn source_name(&self) -> &str {
        match self {
            Self::UnexpectedStatus { source_name, .. }
            | Self::Transport { source_name, .. }
            | Self::Parse { source_name, .. } => source_name,
        }
    }

    /// Non-2xx status or network error.
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. } | Self::Transport { .. })
    }

    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// Every configured source failed; carries the last failure.
    #[error("shop data unavailable after {attempts} source(s): {last}")]
    DataUnavailable {
        attempts: usize,
        #[source]
        last: SourceError,
    },

    #[error("no shop data sources configured")]
    NoSources,

    #[error("invalid source URL \"{url}\": {reason}")]
    InvalidSourceUrl { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
