use std::collections::HashMap;

/// A Bible version as published on bible.com.
///
/// Built once from the version metadata payload and never mutated
/// afterwards. Books keep the site's canonical order; lookup by USFM
/// code goes through an index built at construction time.
#[derive(Debug, Clone)]
pub struct BibleVersion {
    /// Numeric version id on bible.com (e.g., 111 for NIV).
    pub id: u32,
    /// Localized display title.
    pub name: String,
    /// Localized abbreviation, also used as the output file stem.
    pub abbreviation: String,
    pub publisher: String,
    /// ISO 639-3 language code as reported by the site (e.g., "eng").
    pub language: String,
    /// Short copyright notice.
    pub copyright: String,
    books: Vec<BookDescriptor>,
    index: HashMap<String, usize>,
}

/// One book of a version, keyed by its USFM code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDescriptor {
    /// USFM code (e.g., "GEN"). Unique within a version.
    pub code: String,
    /// Full human-readable name (e.g., "Genesis").
    pub name: String,
    /// Short name with dots stripped (e.g., "Gen").
    pub abbreviation: String,
    /// Number of canonical chapters, taken from metadata.
    pub chapter_count: u32,
}

impl BookDescriptor {
    pub fn new(code: &str, name: &str, abbreviation: &str, chapter_count: u32) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            abbreviation: abbreviation.replace('.', ""),
            chapter_count,
        }
    }
}

impl BibleVersion {
    /// Build a version from its metadata and ordered book list.
    ///
    /// If the site lists a code twice, lookup resolves to the first entry.
    pub fn new(
        id: u32,
        name: &str,
        abbreviation: &str,
        publisher: &str,
        language: &str,
        copyright: &str,
        books: Vec<BookDescriptor>,
    ) -> Self {
        let mut index = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            index.entry(book.code.clone()).or_insert(position);
        }

        Self {
            id,
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            publisher: publisher.to_string(),
            language: language.to_string(),
            copyright: copyright.to_string(),
            books,
            index,
        }
    }

    /// Look up a book by USFM code.
    pub fn book(&self, code: &str) -> Option<&BookDescriptor> {
        self.index.get(code).map(|&i| &self.books[i])
    }

    /// All books in site order.
    pub fn books(&self) -> &[BookDescriptor] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookDescriptor> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a BibleVersion {
    type Item = &'a BookDescriptor;
    type IntoIter = std::slice::Iter<'a, BookDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl std::fmt::Display for BibleVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}
