/// Default site root.
pub const BASE_URL: &str = "https://www.bible.com";

/// Desktop browser user agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Chapter pages embed the content field well past this byte offset.
pub const CONTENT_SEARCH_OFFSET: usize = 120_000;

/// Upper bound on in-flight chapter fetches per book.
pub const MAX_CONCURRENT_CHAPTERS: usize = 20;

/// Where and how to talk to bible.com.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Byte offset at which the chapter content search starts.
    pub content_search_offset: usize,
    pub max_concurrent_chapters: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            content_search_offset: CONTENT_SEARCH_OFFSET,
            max_concurrent_chapters: MAX_CONCURRENT_CHAPTERS,
        }
    }
}

impl SiteConfig {
    /// Version metadata endpoint (`/api/bible/version/{id}`).
    pub fn version_url(&self, bible_id: u32) -> String {
        format!("{}/api/bible/version/{bible_id}", self.base())
    }

    /// Rendered chapter page (`/bible/{id}/{BOOK}.{chapter}`).
    pub fn chapter_url(&self, bible_id: u32, book: &str, chapter: u32) -> String {
        format!("{}/bible/{bible_id}/{book}.{chapter}", self.base())
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
