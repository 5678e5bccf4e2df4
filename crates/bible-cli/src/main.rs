use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bible_acquire::config::{BASE_URL, CONTENT_SEARCH_OFFSET, MAX_CONCURRENT_CHAPTERS, USER_AGENT};
use bible_acquire::{Fetcher, ReqwestFetcher, SiteConfig};
use bible_model::BibleVersion;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bible")]
#[command(about = "Download Bible versions from bible.com as Zefania XML")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(flatten)]
    site: SiteArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Args)]
struct SiteArgs {
    /// Site root to fetch from
    #[arg(long, global = true, default_value = BASE_URL)]
    base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, global = true, default_value = USER_AGENT, hide_default_value = true)]
    user_agent: String,

    /// Byte offset in a chapter page where the content search starts
    #[arg(long, global = true, default_value_t = CONTENT_SEARCH_OFFSET)]
    content_offset: usize,

    /// Maximum chapters fetched concurrently within a book
    #[arg(short = 'j', long, global = true, default_value_t = MAX_CONCURRENT_CHAPTERS)]
    concurrency: usize,
}

impl SiteArgs {
    fn config(&self) -> SiteConfig {
        SiteConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            content_search_offset: self.content_offset,
            max_concurrent_chapters: self.concurrency,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Download one or more versions and write each as Zefania XML
    Write {
        /// bible.com version ids (e.g., 1 for KJV, 149 for RVR1960)
        #[arg(required = true)]
        ids: Vec<u32>,

        /// Output directory for the XML files
        #[arg(short = 'O', long, default_value = "Bibles")]
        output_dir: PathBuf,
    },

    /// List the books of a version
    Books {
        /// bible.com version id
        id: u32,
    },

    /// Fetch a single chapter and print its verses as JSON
    Chapter {
        /// bible.com version id
        id: u32,

        /// USFM book code (e.g., "GEN")
        book: String,

        /// Chapter number
        chapter: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let site = cli.site.config();
    let fetcher: Arc<dyn Fetcher> = Arc::new(ReqwestFetcher::new(&site)?);

    match cli.command {
        Commands::Write { ids, output_dir } => {
            tracing::info!(versions = ids.len(), output = %output_dir.display(), "Starting");
            for id in ids {
                let bible = bible_acquire::collect_bible(fetcher.clone(), &site, id)
                    .await
                    .with_context(|| format!("Failed to collect version {id}"))?;
                bible_zefania::write_bible(&bible, &output_dir)?;
            }
        }
        Commands::Books { id } => {
            let version = bible_acquire::resolve_version(fetcher.as_ref(), &site, id)
                .await
                .with_context(|| format!("Failed to resolve version {id}"))?;
            print_books(&version);
        }
        Commands::Chapter { id, book, chapter } => {
            let content = bible_acquire::fetch_chapter(fetcher.as_ref(), &site, id, &book, chapter)
                .await
                .with_context(|| format!("Failed to fetch {book}.{chapter} from version {id}"))?;
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
    }

    Ok(())
}

fn print_books(version: &BibleVersion) {
    println!("{version}");
    for book in version {
        println!(
            "{:<6} {:>3}  {:<8} {}",
            book.code, book.chapter_count, book.abbreviation, book.name
        );
    }
}
