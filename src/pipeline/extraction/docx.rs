use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractionError;

/// Extract paragraph text from a DOCX file.
///
/// DOCX is a zip container; the body lives in word/document.xml as
/// WordprocessingML. Paragraph ends and explicit breaks become
/// newlines so downstream sentence splitting sees real boundaries.
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::DocxContainer(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::DocxContainer(e.to_string()))?
        .read_to_string(&mut xml)?;

    body_text(&xml)
}

fn body_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut out = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| ExtractionError::DocxMarkup(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::End(end)) => {
                if ends_with_tag(end.name().as_ref(), b"p") {
                    out.push('\n');
                }
            }
            Ok(Event::Empty(empty)) => {
                if ends_with_tag(empty.name().as_ref(), b"br") {
                    out.push('\n');
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractionError::DocxMarkup(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

/// Match a tag name with or without a namespace prefix, so both
/// `<p>` and `<w:p>` count as paragraph ends.
fn ends_with_tag(name: &[u8], tag: &[u8]) -> bool {
    if name == tag {
        return true;
    }
    if name.len() <= tag.len() + 1 {
        return false;
    }
    if !name.ends_with(tag) {
        return false;
    }
    name[name.len() - tag.len() - 1] == b':'
}
