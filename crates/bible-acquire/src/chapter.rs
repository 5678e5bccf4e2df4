use bible_model::ChapterContent;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::fragment;
use crate::verses;

/// Fetch one chapter page and extract its verses.
pub async fn fetch_chapter(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    bible_id: u32,
    book: &str,
    chapter: u32,
) -> Result<ChapterContent> {
    let url = config.chapter_url(bible_id, book, chapter);
    let page = fetcher.fetch(&url).await?;

    let verses = fragment::extract_fragment(&page, config.content_search_offset)
        .and_then(|html| verses::extract_verses(&html))
        .inspect_err(|e| tracing::error!(url = %url, error = %e, "Chapter extraction failed"))?;

    tracing::debug!(url = %url, verses = verses.len(), "Extracted chapter");

    Ok(ChapterContent {
        book: book.to_string(),
        chapter,
        bible_id,
        verses,
    })
}
