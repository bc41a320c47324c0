use thiserror::Error;

/// Failures fetching a quote from upstream.
///
/// The display text doubles as the response body when a fetch fails, so
/// variants carry message strings rather than source errors.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("quote service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("error decoding quote response: {0}")]
    Decode(String),
}
