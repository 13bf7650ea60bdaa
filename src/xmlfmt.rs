//! XML pretty-printer built on streaming reader/writer events.

use crate::jsonfmt::Indent;
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlFmtError {
    #[error("invalid XML: {0}")]
    Parse(#[from] quick_xml::Error),
    #[error("failed to write XML output: {0}")]
    Write(String),
    #[error("XML output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Re-indent a document, one element per line. Text, CDATA, comments and the
/// XML declaration pass through; inter-element whitespace is discarded.
pub fn beautify(src: &str, indent: Indent) -> Result<String, XmlFmtError> {
    let mut reader = Reader::from_str(src);
    reader.config_mut().trim_text(true);

    let (fill, count) = indent.fill();
    let mut writer = Writer::new_with_indent(Vec::new(), fill, count);

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            event => writer
                .write_event(event)
                .map_err(|e| XmlFmtError::Write(e.to_string()))?,
        }
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements_are_indented() {
        let out = beautify("<root><a><b>x</b></a></root>", Indent::Two).unwrap();
        let expected = "\
<root>
  <a>
    <b>x</b>
  </a>
</root>";
        assert_eq!(out, expected);
    }

    #[test]
    fn existing_whitespace_is_normalized() {
        let messy = "<root>\n      <a>   <b>x</b></a>\n</root>";
        let clean = beautify(messy, Indent::Two).unwrap();
        assert_eq!(clean, beautify("<root><a><b>x</b></a></root>", Indent::Two).unwrap());
    }

    #[test]
    fn declaration_and_attributes_survive() {
        let out = beautify(
            r#"<?xml version="1.0" encoding="UTF-8"?><doc id="1"><item name="x"/></doc>"#,
            Indent::Two,
        )
        .unwrap();
        assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#), "{out}");
        assert!(out.contains(r#"<item name="x"/>"#), "{out}");
    }

    #[test]
    fn tab_indentation() {
        let out = beautify("<a><b>x</b></a>", Indent::Tab).unwrap();
        assert!(out.contains("\n\t<b>x</b>"), "{out}");
    }

    #[test]
    fn unclosed_tag_is_an_error() {
        let err = beautify("<root><a></root>", Indent::Two).unwrap_err();
        assert!(err.to_string().starts_with("invalid XML"), "{err}");
    }
}
