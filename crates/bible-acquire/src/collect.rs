use std::sync::Arc;

use bible_model::{BibleText, BookText};

use crate::catalog;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::scheduler;

/// Collect the full text of one version.
///
/// Books are fetched one after another in site order; only the chapters
/// within a book run concurrently. Any book failure aborts the version, so
/// a returned `BibleText` is always complete.
pub async fn collect_bible(
    fetcher: Arc<dyn Fetcher>,
    config: &SiteConfig,
    bible_id: u32,
) -> Result<BibleText> {
    let version = catalog::resolve_version(fetcher.as_ref(), config, bible_id).await?;

    let mut books = Vec::with_capacity(version.len());
    for book in &version {
        let chapters = scheduler::fetch_book(fetcher.clone(), config, bible_id, book).await?;
        tracing::info!(book = %book.name, chapters = chapters.len(), "Collected book");
        books.push(BookText {
            descriptor: book.clone(),
            chapters,
        });
    }

    Ok(BibleText { version, books })
}
