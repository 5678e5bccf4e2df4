use serde::Serialize;
use std::collections::BTreeMap;

use crate::version::{BibleVersion, BookDescriptor};

/// One verse of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

/// Verse number to verse text, in first-seen order.
///
/// Insertion order is the order verses were first encountered while
/// scanning the chapter markup. It is usually ascending, but a verse range
/// collapsed onto its lowest number can make it non-monotonic, so this is
/// deliberately not a sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerseMap(Vec<Verse>);

impl VerseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` to verse `number`, creating the verse if unseen.
    ///
    /// `separator` is pushed before the text only when the verse already
    /// exists.
    pub fn append(&mut self, number: u32, separator: &str, text: &str) {
        match self.0.iter_mut().find(|v| v.number == number) {
            Some(verse) => {
                verse.text.push_str(separator);
                verse.text.push_str(text);
            }
            None => self.0.push(Verse {
                number,
                text: text.to_string(),
            }),
        }
    }

    pub fn get(&self, number: u32) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.number == number)
            .map(|v| v.text.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Verse> {
        self.0.iter()
    }

    pub fn numbers(&self) -> Vec<u32> {
        self.0.iter().map(|v| v.number).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a VerseMap {
    type Item = &'a Verse;
    type IntoIter = std::slice::Iter<'a, Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The extracted text of one chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterContent {
    /// USFM code of the book (e.g., "GEN").
    pub book: String,
    pub chapter: u32,
    pub bible_id: u32,
    pub verses: VerseMap,
}

impl ChapterContent {
    pub fn verse(&self, number: u32) -> Option<&str> {
        self.verses.get(number)
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Reference in `BOOK.CHAPTER` form, as used in bible.com URLs.
    pub fn reference(&self) -> String {
        format!("{}.{}", self.book, self.chapter)
    }
}

/// Chapter number to chapter content for one book.
pub type ChapterMap = BTreeMap<u32, ChapterContent>;

/// A book together with all of its collected chapters.
#[derive(Debug, Clone)]
pub struct BookText {
    pub descriptor: BookDescriptor,
    pub chapters: ChapterMap,
}

/// A fully collected version, ready to be written out.
///
/// `books` follows the order of `version.books()`.
#[derive(Debug, Clone)]
pub struct BibleText {
    pub version: BibleVersion,
    pub books: Vec<BookText>,
}

impl BibleText {
    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.values())
            .map(|c| c.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_first_seen_order() {
        let mut verses = VerseMap::new();
        verses.append(12, " ", "shared line");
        verses.append(15, " ", "next");
        verses.append(12, "", "tail");

        assert_eq!(verses.numbers(), vec![12, 15]);
        assert_eq!(verses.get(12), Some("shared linetail"));
        assert_eq!(verses.get(15), Some("next"));
    }

    #[test]
    fn test_separator_only_on_existing_verse() {
        let mut verses = VerseMap::new();
        verses.append(1, " ", "In");
        verses.append(1, " ", "the");
        assert_eq!(verses.get(1), Some("In the"));
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let mut verses = VerseMap::new();
        verses.append(2, " ", "b");
        verses.append(1, " ", "a");
        let json = serde_json::to_string(&verses).unwrap();
        assert_eq!(json, r#"[{"number":2,"text":"b"},{"number":1,"text":"a"}]"#);
    }

    #[test]
    fn test_chapter_content_serializes_with_verse_list() {
        let mut verses = VerseMap::new();
        verses.append(1, " ", "In the beginning");
        let content = ChapterContent {
            book: "GEN".into(),
            chapter: 1,
            bible_id: 1,
            verses,
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["book"], "GEN");
        assert_eq!(json["verses"][0]["text"], "In the beginning");
    }

    #[test]
    fn test_chapter_reference() {
        let chapter = ChapterContent {
            book: "JHN".into(),
            chapter: 3,
            bible_id: 111,
            verses: VerseMap::new(),
        };
        assert_eq!(chapter.reference(), "JHN.3");
        assert!(chapter.is_empty());
    }
}
