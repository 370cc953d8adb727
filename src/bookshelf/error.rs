use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Catalog request failed with status {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
