use thiserror::Error;

/// Errors raised by the dashboard library.
#[derive(Debug, Error)]
pub enum Error {
    /// Request could not be sent or the response could not be read.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not a valid fetch payload.
    #[error("invalid response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Saved payload could not be parsed.
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    /// Backend answered with `success: false`.
    #[error("{0}")]
    Application(String),
}

pub type Result<T> = std::result::Result<T, Error>;
