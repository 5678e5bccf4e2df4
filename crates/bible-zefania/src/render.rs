// Zefania XML rendering.
//
// The layout is a fixed template: header, one BIBLEBOOK per book numbered
// from 1 in version order, chapters in map order, verses in first-seen
// order. Nothing is reordered or checked here.

use bible_model::{BibleText, BookText, ChapterContent};
use quick_xml::escape::escape;

const SCHEMA_ATTRS: &str = r#"revision="99" status="v" version="2.0.1.18" type="x-bible" p1:noNamespaceSchemaLocation="zef2005.xsd" xmlns:p1="http://www.w3.org/2001/XMLSchema-instance""#;

/// Render a collected version as a Zefania XML document.
pub fn render(bible: &BibleText) -> String {
    let mut out = header(bible);

    for (index, book) in bible.books.iter().enumerate() {
        push_book(&mut out, index + 1, book);
    }

    out.push_str("</XMLBIBLE>");
    out
}

fn header(bible: &BibleText) -> String {
    let version = &bible.version;
    let name = escape(version.name.as_str());

    format!(
        "<XMLBIBLE biblename=\"{name}\" {SCHEMA_ATTRS}>\n\
         <INFORMATION>\n\
         <title>{name}</title>\n\
         <creator/>\n\
         <subject/>\n\
         <identifier>{}</identifier>\n\
         <description>{}</description>\n\
         <publisher>{}</publisher>\n\
         <date/>\n\
         <language>{}</language>\n\
         <type>Bible</type>\n\
         </INFORMATION>\n",
        escape(version.abbreviation.as_str()),
        escape(version.copyright.as_str()),
        escape(version.publisher.as_str()),
        escape(version.language.to_uppercase().as_str()),
    )
}

fn push_book(out: &mut String, number: usize, book: &BookText) {
    out.push_str(&format!(
        "  <BIBLEBOOK bnumber=\"{number}\" bname=\"{}\" bsname=\"{}\">\n",
        escape(book.descriptor.name.as_str()),
        escape(book.descriptor.abbreviation.as_str()),
    ));
    for (number, chapter) in &book.chapters {
        push_chapter(out, *number, chapter);
    }
    out.push_str("  </BIBLEBOOK>\n");
}

fn push_chapter(out: &mut String, number: u32, chapter: &ChapterContent) {
    out.push_str(&format!("    <CHAPTER cnumber=\"{number}\">\n"));
    for verse in &chapter.verses {
        out.push_str(&format!(
            "       <VERS vnumber=\"{}\">{}</VERS>\n",
            verse.number,
            escape(verse.text.as_str()),
        ));
    }
    out.push_str("    </CHAPTER>\n");
}
