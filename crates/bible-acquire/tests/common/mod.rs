#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use bible_acquire::error::Result;
use bible_acquire::{Fetcher, SiteConfig};

pub const BASE: &str = "http://bible.test";

pub fn config() -> SiteConfig {
    SiteConfig {
        base_url: BASE.to_string(),
        content_search_offset: 0,
        ..SiteConfig::default()
    }
}

/// Wrap chapter HTML the way bible.com embeds it in page data.
pub fn chapter_page(html: &str) -> String {
    let escaped = serde_json::to_string(html)
        .unwrap()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e");
    format!(
        r#"<!DOCTYPE html><html><body><script id="__NEXT_DATA__">{{"props":{{"pageProps":{{"chapterInfo":{{"content":{escaped},"reference":{{"human":"x"}}}}}}}}}}</script></body></html>"#
    )
}

pub fn verse_html(verses: &[(u32, &str)]) -> String {
    let spans: String = verses
        .iter()
        .map(|(n, text)| {
            format!(r#"<span class="verse v{n}"><span class="label">{n}</span><span class="content">{text}</span></span>"#)
        })
        .collect();
    format!(r#"<div class="chapter"><div class="p">{spans}</div></div>"#)
}

pub fn version_payload(books: &[(&str, &str, &str, u32)]) -> String {
    let books: Vec<serde_json::Value> = books
        .iter()
        .map(|(usfm, name, abbr, count)| {
            let chapters: Vec<serde_json::Value> = std::iter::once(serde_json::json!({
                "usfm": format!("{usfm}.INTRO1"), "canonical": false
            }))
            .chain((1..=*count).map(|c| serde_json::json!({
                "usfm": format!("{usfm}.{c}"), "canonical": true
            })))
            .collect();
            serde_json::json!({
                "usfm": usfm, "human_long": name, "abbreviation": abbr, "chapters": chapters
            })
        })
        .collect();

    serde_json::json!({
        "id": 1,
        "local_title": "Test & Trial Version",
        "local_abbreviation": "TTV",
        "publisher": {"name": "Test Press"},
        "language": {"iso_639_3": "eng"},
        "copyright_short": {"text": "Public domain"},
        "books": books,
    })
    .to_string()
}

/// In-memory site. Unknown URLs answer with an error page body, the way
/// the real transport passes a 404 body through.
#[derive(Default)]
pub struct PageTable {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl PageTable {
    pub fn with_page(mut self, url: String, body: String) -> Self {
        self.pages.insert(url, body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Fetcher for PageTable {
    async fn fetch(&self, url: &str) -> Result<String> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.requests.lock().unwrap().push(url.to_string());

        tokio::time::sleep(Duration::from_millis(5)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| "<html><body>Page not found</body></html>".to_string()))
    }
}
