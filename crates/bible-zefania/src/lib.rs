use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use bible_model::BibleText;

pub mod render;

pub use render::render;

/// Write a collected version to `{output_dir}/{abbreviation}.xml`.
///
/// The document is rendered in memory and written to a `.part` file that is
/// renamed into place, so an interrupted write never leaves a truncated
/// `.xml` behind. Returns the final path.
pub fn write_bible(bible: &BibleText, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let stem = file_stem(&bible.version.abbreviation);
    let path = output_dir.join(format!("{stem}.xml"));
    let partial = output_dir.join(format!("{stem}.xml.part"));

    let xml = render(bible);
    fs::write(&partial, &xml).with_context(|| format!("Failed to write {}", partial.display()))?;
    fs::rename(&partial, &path)
        .with_context(|| format!("Failed to move {} into place", partial.display()))?;

    tracing::info!(
        path = %path.display(),
        books = bible.books.len(),
        verses = bible.verse_count(),
        bytes = xml.len(),
        "Wrote Zefania XML"
    );

    Ok(path)
}

/// Abbreviations are used verbatim except for path separators.
fn file_stem(abbreviation: &str) -> String {
    abbreviation.replace(['/', '\\'], "-")
}
