use bible_model::VerseMap;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{AcquireError, Result};

/// Class prefix of the element that carries a verse number.
const VERSE_PREFIX: &str = "verse v";

/// Extract verse text from one chapter's HTML.
///
/// Text lives in `<span class="content">` leaves. The verse number sits on
/// an ancestor `span` with a class like `verse v7`, either the direct
/// parent or some way further up (words-of-Jesus and note wrappers sit in
/// between). A class naming several verses (`verse v12 v13 v14`) is a
/// shared line and is credited to its lowest verse.
///
/// Consecutive leaves of the same verse are joined with one space. A verse
/// picked up again after another verse intervened is continued with no
/// separator. Leaf text is trimmed and otherwise kept byte for byte; a blank
/// leaf adds no text but still counts as the preceding leaf.
///
/// A leaf with no verse marker above it fails the whole chapter.
pub fn extract_verses(fragment: &str) -> Result<VerseMap> {
    let document = Html::parse_fragment(fragment);
    let leaf_sel = Selector::parse(r#"span > span[class="content"]"#).expect("valid selector");

    let (verses, _) = document.select(&leaf_sel).try_fold(
        (VerseMap::new(), None::<u32>),
        |(mut verses, previous), leaf| -> Result<(VerseMap, Option<u32>)> {
            let number = verse_number(leaf)?;
            let text = leaf.text().collect::<String>();
            let text = text.trim();
            if text.is_empty() {
                return Ok((verses, Some(number)));
            }

            let separator = if previous == Some(number) { " " } else { "" };
            verses.append(number, separator, text);
            Ok((verses, Some(number)))
        },
    )?;

    Ok(verses)
}

/// Resolve the verse number a content leaf belongs to.
fn verse_number(leaf: ElementRef<'_>) -> Result<u32> {
    let parent = leaf.parent().and_then(ElementRef::wrap);

    let marker = match parent {
        Some(parent) if marker_count(class_of(parent)) >= 2 => Some(parent),
        Some(parent) => find_verse_ancestor(*parent),
        None => None,
    };

    let Some(marker) = marker else {
        let text = leaf.text().collect::<String>();
        let class = parent.map(class_of).unwrap_or_default().to_string();
        tracing::error!(text = %text.trim(), class = %class, "Content span has no verse marker");
        return Err(AcquireError::MalformedMarkup { text, class });
    };

    parse_verse_class(class_of(marker))
}

/// Walk from `start` up to the root for the first `verse v...` element.
fn find_verse_ancestor(start: NodeRef<'_, Node>) -> Option<ElementRef<'_>> {
    std::iter::once(start)
        .chain(start.ancestors())
        .filter_map(ElementRef::wrap)
        .find(|el| class_of(*el).starts_with(VERSE_PREFIX))
}

/// Parse the verse number out of a marker class.
///
/// `verse v7` gives 7. A class naming a range, `verse v12 v13 v14`, gives
/// the minimum, 12.
pub fn parse_verse_class(class: &str) -> Result<u32> {
    let number = if marker_count(class) > 2 {
        class
            .replace("verse ", "")
            .replace('v', "")
            .split_whitespace()
            .map(|n| n.parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()
            .and_then(|numbers| numbers.into_iter().min())
    } else {
        class
            .strip_prefix(VERSE_PREFIX)
            .and_then(|n| n.trim().parse::<u32>().ok())
    };

    number
        .filter(|&n| n > 0)
        .ok_or_else(|| AcquireError::MalformedClass(class.to_string()))
}

/// Count of `v` characters in a class string, the one in `verse` included.
///
/// Fewer than two means the element carries no verse number of its own;
/// more than two means it names a range.
fn marker_count(class: &str) -> usize {
    class.matches('v').count()
}

fn class_of(el: ElementRef<'_>) -> &str {
    el.value().attr("class").unwrap_or("")
}
