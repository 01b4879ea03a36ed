//! Typed failures for the individual fetchers.

use thiserror::Error;

/// Broad classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection problems, timeouts and non-2xx responses.
    Network,
    /// An expected HTML marker is missing or its text is not a number.
    Parse,
    /// The upstream payload lacks the value we asked for.
    Data,
}

/// Why a single fetch did not produce a value.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: wreq::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("element `{selector}` not found")]
    MissingElement { selector: &'static str },

    #[error("element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute { selector: &'static str, attribute: &'static str },

    #[error("could not parse {text:?} as a number")]
    InvalidNumber { text: String },

    #[error("response does not contain a rate for {currency}")]
    MissingRate { currency: String },

    #[error("unusable exchange rate {rate} for {currency}")]
    InvalidRate { currency: String, rate: f64 },

    #[error("malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns the taxonomy bucket this error falls into.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Request { .. } | FetchError::Status { .. } => ErrorKind::Network,
            FetchError::MissingElement { .. }
            | FetchError::MissingAttribute { .. }
            | FetchError::InvalidNumber { .. } => ErrorKind::Parse,
            FetchError::MissingRate { .. } | FetchError::InvalidRate { .. } | FetchError::Json(_) => {
                ErrorKind::Data
            }
        }
    }
}
