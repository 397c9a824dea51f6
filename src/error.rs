use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes for a single fetch attempt.
///
/// Each variant corresponds to one stage of the request pipeline: sending,
/// status validation, body draining, decoding. The harness retries all of
/// them uniformly (see `retry`), so the distinction exists for diagnostics
/// and for unit tests, not for policy.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
