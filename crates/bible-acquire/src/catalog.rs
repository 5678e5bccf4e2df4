use bible_model::{BibleVersion, BookDescriptor};
use serde::Deserialize;

use crate::config::SiteConfig;
use crate::error::{AcquireError, Result};
use crate::fetch::Fetcher;

/// Version metadata as served by `/api/bible/version/{id}`.
///
/// Only the fields this tool reads are declared.
#[derive(Debug, Deserialize)]
struct VersionPayload {
    local_title: String,
    local_abbreviation: String,
    #[serde(default)]
    publisher: Option<Publisher>,
    language: Language,
    #[serde(default)]
    copyright_short: Option<Copyright>,
    #[serde(default)]
    books: Vec<BookPayload>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Language {
    iso_639_3: String,
}

#[derive(Debug, Deserialize)]
struct Copyright {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BookPayload {
    usfm: String,
    human_long: String,
    abbreviation: String,
    #[serde(default)]
    chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Deserialize)]
struct ChapterEntry {
    /// False for introductions and other front matter.
    #[serde(default)]
    canonical: bool,
}

impl BookPayload {
    fn descriptor(&self) -> BookDescriptor {
        let canonical = self.chapters.iter().filter(|c| c.canonical).count();
        BookDescriptor::new(
            &self.usfm,
            &self.human_long,
            &self.abbreviation,
            canonical as u32,
        )
    }
}

/// Fetch and resolve a version's metadata and book list.
pub async fn resolve_version(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    bible_id: u32,
) -> Result<BibleVersion> {
    let url = config.version_url(bible_id);
    let body = fetcher.fetch(&url).await?;
    let version = parse_version(bible_id, &body, &url)?;

    tracing::info!(
        id = bible_id,
        name = %version.name,
        abbreviation = %version.abbreviation,
        books = version.len(),
        "Resolved version"
    );

    Ok(version)
}

/// Resolve one book without a previously resolved version.
///
/// Costs a full metadata fetch; prefer `BibleVersion::book` when the
/// version is already at hand.
pub async fn resolve_book(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    bible_id: u32,
    code: &str,
) -> Result<BookDescriptor> {
    let url = config.version_url(bible_id);
    let body = fetcher.fetch(&url).await?;
    let payload = parse_payload(&body, &url)?;

    payload
        .books
        .iter()
        .find(|b| b.usfm == code)
        .map(BookPayload::descriptor)
        .ok_or_else(|| AcquireError::UnknownBook {
            code: code.to_string(),
            bible_id,
        })
}

/// Build a `BibleVersion` from a metadata payload.
pub fn parse_version(bible_id: u32, body: &str, url: &str) -> Result<BibleVersion> {
    let payload = parse_payload(body, url)?;
    let books = payload.books.iter().map(BookPayload::descriptor).collect();

    let publisher = payload
        .publisher
        .and_then(|p| p.name)
        .unwrap_or_default();
    let copyright = payload
        .copyright_short
        .and_then(|c| c.text)
        .unwrap_or_default();

    Ok(BibleVersion::new(
        bible_id,
        &payload.local_title,
        &payload.local_abbreviation,
        &publisher,
        &payload.language.iso_639_3,
        &copyright,
        books,
    ))
}

fn parse_payload(body: &str, url: &str) -> Result<VersionPayload> {
    serde_json::from_str(body).map_err(|source| AcquireError::Metadata {
        url: url.to_string(),
        source,
    })
}
