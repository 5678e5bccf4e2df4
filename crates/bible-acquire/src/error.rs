use thiserror::Error;

/// Everything that can go wrong between a URL and a verse map.
///
/// None of these are retried. A chapter-level error aborts its book, and a
/// book-level error aborts the version.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chapter content field not found past byte offset {offset}")]
    NotFound { offset: usize },

    #[error("malformed escape sequence in chapter content")]
    Decode(#[source] serde_json::Error),

    #[error("no verse marker above content span {text:?} (class {class:?})")]
    MalformedMarkup { text: String, class: String },

    #[error("unparseable verse class {0:?}")]
    MalformedClass(String),

    #[error("version metadata from {url} did not parse")]
    Metadata {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("book {code} not found in version {bible_id}")]
    UnknownBook { code: String, bible_id: u32 },

    #[error("chapter {book}.{chapter} failed")]
    Chapter {
        book: String,
        chapter: u32,
        #[source]
        source: Box<AcquireError>,
    },

    #[error("chapter worker did not finish")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T, E = AcquireError> = std::result::Result<T, E>;
