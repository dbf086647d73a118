//! XFDF parsing.
//!
//! Only the file-specification element `<f href="..."/>` is consumed; the
//! annotations themselves belong to the viewer.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{Result, XfdfError};

const FILE_ELEMENT: &[u8] = b"f";
const HREF_ATTRIBUTE: &[u8] = b"href";

/// Extract the external document path from XFDF content.
///
/// The first `f` element with an `href` wins. The whole document is still
/// read so that malformed XML after that element is reported rather than
/// silently accepted.
pub fn extract_href(content: &str) -> Result<String> {
    let mut reader = Reader::from_str(content);
    let mut href: Option<String> = None;

    loop {
        match reader.read_event().map_err(XfdfError::parse)? {
            Event::Start(element) | Event::Empty(element) => {
                if href.is_none() {
                    href = file_href(&reader, &element)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match href {
        Some(href) if !href.trim().is_empty() => Ok(href),
        _ => Err(XfdfError::MalformedDescriptor),
    }
}

fn file_href(reader: &Reader<&[u8]>, element: &BytesStart<'_>) -> Result<Option<String>> {
    if element.local_name().as_ref() != FILE_ELEMENT {
        return Ok(None);
    }

    for attribute in element.attributes() {
        let attribute = attribute.map_err(XfdfError::parse)?;
        if attribute.key.local_name().as_ref() == HREF_ATTRIBUTE {
            let value = attribute
                .decode_and_unescape_value(reader.decoder())
                .map_err(XfdfError::parse)?;
            return Ok(Some(value.into_owned()));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<xfdf xmlns="http://ns.adobe.com/xfdf/" xml:space="preserve">
  <annots>
    <highlight page="0" rect="10,10,50,20" color="#FFFF00"/>
  </annots>
  <f href="../pdfs/paper.pdf"/>
</xfdf>"##;

    #[test]
    fn test_extract_href() {
        assert_eq!(extract_href(SAMPLE).unwrap(), "../pdfs/paper.pdf");
    }

    #[test]
    fn test_extract_href_unescapes_entities() {
        let content = r#"<xfdf><f href="G:/R&amp;D/report.pdf"></f></xfdf>"#;
        assert_eq!(extract_href(content).unwrap(), "G:/R&D/report.pdf");
    }

    #[test]
    fn test_extract_href_accepts_prefixed_element() {
        let content = r#"<x:xfdf xmlns:x="http://ns.adobe.com/xfdf/"><x:f href="a.pdf"/></x:xfdf>"#;
        assert_eq!(extract_href(content).unwrap(), "a.pdf");
    }

    #[test]
    fn test_first_file_element_wins() {
        let content = r#"<xfdf><f href="first.pdf"/><f href="second.pdf"/></xfdf>"#;
        assert_eq!(extract_href(content).unwrap(), "first.pdf");
    }

    #[test]
    fn test_missing_file_element() {
        let content = r#"<xfdf><annots/><ids original="abc"/></xfdf>"#;
        assert_eq!(extract_href(content), Err(XfdfError::MalformedDescriptor));
    }

    #[test]
    fn test_file_element_without_href() {
        let content = r#"<xfdf><f original="abc"/></xfdf>"#;
        assert_eq!(extract_href(content), Err(XfdfError::MalformedDescriptor));
    }

    #[test]
    fn test_empty_href_is_malformed() {
        let content = r#"<xfdf><f href=""/></xfdf>"#;
        assert_eq!(extract_href(content), Err(XfdfError::MalformedDescriptor));
    }

    #[test]
    fn test_href_on_other_element_is_ignored() {
        let content = r#"<xfdf><link href="a.pdf"/></xfdf>"#;
        assert_eq!(extract_href(content), Err(XfdfError::MalformedDescriptor));
    }

    #[test]
    fn test_mismatched_end_tag_is_parse_failure() {
        let content = r#"<xfdf><f href="a.pdf"/></annots>"#;
        assert!(matches!(
            extract_href(content),
            Err(XfdfError::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_plain_text_has_no_descriptor() {
        assert_eq!(
            extract_href("not xml at all"),
            Err(XfdfError::MalformedDescriptor)
        );
    }
}
