use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection failure or non-2xx response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be read as an HTML document.
    #[error("unreadable document: {0}")]
    Parse(String),

    /// A selector the pipeline depends on matched nothing.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
