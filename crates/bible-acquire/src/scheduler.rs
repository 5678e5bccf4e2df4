use std::sync::Arc;

use bible_model::{BookDescriptor, ChapterMap};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::chapter;
use crate::config::SiteConfig;
use crate::error::{AcquireError, Result};
use crate::fetch::Fetcher;

/// Fetch and extract every chapter of a book.
///
/// At most `config.max_concurrent_chapters` chapters are in flight at once.
/// All workers are awaited before anything is returned; if any chapter
/// failed, the first failure observed is returned and the chapters that did
/// succeed are dropped.
pub async fn fetch_book(
    fetcher: Arc<dyn Fetcher>,
    config: &SiteConfig,
    bible_id: u32,
    book: &BookDescriptor,
) -> Result<ChapterMap> {
    let permits = Arc::new(Semaphore::new(config.max_concurrent_chapters.max(1)));
    let config = Arc::new(config.clone());
    let mut workers = JoinSet::new();

    for number in 1..=book.chapter_count {
        let permits = permits.clone();
        let fetcher = fetcher.clone();
        let config = config.clone();
        let code = book.code.clone();

        workers.spawn(async move {
            // The semaphore is never closed, so acquiring cannot fail.
            let _permit = permits.acquire_owned().await.ok();
            let result =
                chapter::fetch_chapter(fetcher.as_ref(), &config, bible_id, &code, number).await;
            (number, result)
        });
    }

    let mut chapters = ChapterMap::new();
    let mut failure: Option<AcquireError> = None;

    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok((number, Ok(content))) => {
                chapters.insert(number, content);
            }
            Ok((number, Err(source))) => {
                tracing::error!(book = %book.code, chapter = number, error = %source, "Chapter failed");
                failure.get_or_insert(AcquireError::Chapter {
                    book: book.code.clone(),
                    chapter: number,
                    source: Box::new(source),
                });
            }
            Err(join_error) => {
                tracing::error!(book = %book.code, error = %join_error, "Chapter worker aborted");
                failure.get_or_insert(AcquireError::Worker(join_error));
            }
        }
    }

    if let Some(error) = failure {
        return Err(error);
    }

    tracing::debug!(book = %book.code, chapters = chapters.len(), "Fetched all chapters");
    Ok(chapters)
}
