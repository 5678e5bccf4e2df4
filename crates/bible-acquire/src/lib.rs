//! Acquisition of Bible text from bible.com.
//!
//! The pipeline for one version is: resolve the version metadata
//! ([`catalog`]), then for each book fetch every chapter page concurrently
//! ([`scheduler`]), locate and unescape the embedded chapter HTML
//! ([`fragment`]) and pull verse text out of it ([`verses`]).

pub mod catalog;
pub mod chapter;
pub mod collect;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fragment;
pub mod scheduler;
pub mod verses;

pub use catalog::{resolve_book, resolve_version};
pub use chapter::fetch_chapter;
pub use collect::collect_bible;
pub use config::SiteConfig;
pub use error::AcquireError;
pub use fetch::{Fetcher, ReqwestFetcher};
pub use scheduler::fetch_book;
pub use verses::extract_verses;
