//! DOCX text extraction
//!
//! A `.docx` file is a zip container; the body lives in `word/document.xml`
//! as WordprocessingML. Each `w:p` element is a paragraph and its text is
//! the concatenation of the `w:t` runs beneath it. Non-empty paragraphs are
//! joined with a blank line.

use super::{extension_of, TextExtractor};
use crate::error::DocumentError;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

const WORD_NAMESPACE: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the document body as a string
    pub fn extract_text(&self, path: &Path) -> Result<String, DocumentError> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;

        let mut xml = Vec::new();
        match archive.by_name(DOCUMENT_PART) {
            Ok(mut part) => {
                part.read_to_end(&mut xml)?;
            }
            Err(ZipError::FileNotFound) => {
                return Err(DocumentError::MissingPart(DOCUMENT_PART.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        parse_document_xml(&xml)
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<u8>, DocumentError> {
        self.extract_text(path).map(String::into_bytes)
    }

    fn name(&self) -> &str {
        "DocxExtractor"
    }

    fn supports_file_type(&self, path: &Path) -> bool {
        extension_of(path) == "docx"
    }
}

/// Pull paragraph text out of a WordprocessingML body.
///
/// Paragraphs are listed in the order they open. A paragraph nested inside
/// another (text boxes) contributes its text to every enclosing paragraph too.
pub fn parse_document_xml(xml: &[u8]) -> Result<String, DocumentError> {
    let mut reader = NsReader::from_reader(xml);
    let mut buf = Vec::new();

    let mut paragraphs: Vec<String> = Vec::new();
    // Indices into `paragraphs` of the w:p elements currently open
    let mut open_paragraphs: Vec<usize> = Vec::new();
    let mut in_text_run = false;

    loop {
        match reader.read_resolved_event_into(&mut buf)? {
            (ResolveResult::Bound(Namespace(ns)), Event::Start(e)) if ns == WORD_NAMESPACE => {
                match e.local_name().as_ref() {
                    b"p" => {
                        open_paragraphs.push(paragraphs.len());
                        paragraphs.push(String::new());
                    }
                    b"t" => in_text_run = true,
                    _ => {}
                }
            }
            (ResolveResult::Bound(Namespace(ns)), Event::End(e)) if ns == WORD_NAMESPACE => {
                match e.local_name().as_ref() {
                    b"p" => {
                        open_paragraphs.pop();
                    }
                    b"t" => in_text_run = false,
                    _ => {}
                }
            }
            (_, Event::Text(t)) if in_text_run => {
                let text = t.unescape()?;
                for &index in &open_paragraphs {
                    paragraphs[index].push_str(&text);
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }

    let body: Vec<String> = paragraphs.into_iter().filter(|p| !p.is_empty()).collect();
    Ok(body.join(PARAGRAPH_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::FileOptions;

    fn body(inner: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{inner}</w:body></w:document>"#
        )
    }

    fn write_zip(dir: &TempDir, name: &str, parts: &[(&str, &str)]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        for (part, content) in parts {
            zip.start_file(*part, FileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    #[test]
    fn test_paragraphs_joined_by_blank_line() {
        let xml = body(
            "<w:p><w:r><w:t>今日は</w:t></w:r><w:r><w:t>晴れです。</w:t></w:r></w:p>\
             <w:p><w:r><w:t>明日は雨です。</w:t></w:r></w:p>",
        );
        let text = parse_document_xml(xml.as_bytes()).unwrap();
        assert_eq!(text, "今日は晴れです。\n\n明日は雨です。");
    }

    #[test]
    fn test_empty_paragraphs_are_dropped() {
        let xml = body("<w:p/><w:p><w:r><w:t>one</w:t></w:r></w:p><w:p></w:p><w:p><w:r><w:t>two</w:t></w:r></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "one\n\ntwo");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = body("<w:p><w:r><w:t>R&amp;D &lt;draft&gt;</w:t></w:r></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "R&D <draft>");
    }

    #[test]
    fn test_only_text_runs_contribute() {
        // w:instrText holds field codes, not body text
        let xml = body(
            "<w:p><w:r><w:instrText>PAGE</w:instrText></w:r><w:r><w:t xml:space=\"preserve\">body </w:t></w:r></w:p>",
        );
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "body ");
    }

    #[test]
    fn test_namespace_is_resolved_not_prefix_matched() {
        let xml = r#"<doc xmlns:x="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:w="urn:other">
            <w:p><w:t>ignored</w:t></w:p>
            <x:p><x:t>kept</x:t></x:p>
        </doc>"#;
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "kept");
    }

    #[test]
    fn test_nested_paragraph_text_counts_for_both() {
        let xml = body(
            "<w:p><w:r><w:t>outer </w:t></w:r><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:p>",
        );
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "outer inner\n\ninner");
    }

    #[test]
    fn test_mismatched_tags_are_xml_errors() {
        let xml = body("<w:p><w:r><w:t>broken</w:r></w:t></w:p>");
        let err = parse_document_xml(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, DocumentError::Xml(_)));
    }

    #[test]
    fn test_extract_from_container() {
        let dir = TempDir::new().unwrap();
        let xml = body("<w:p><w:r><w:t>日本語の文書</w:t></w:r></w:p>");
        let path = write_zip(&dir, "memo.docx", &[("word/document.xml", &xml)]);

        let bytes = DocxExtractor::new().extract(&path).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "日本語の文書");
    }

    #[test]
    fn test_not_a_zip_is_bad_zip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = DocxExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(err, DocumentError::BadZip(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_body_part() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, "empty.docx", &[("[Content_Types].xml", "<Types/>")]);

        let err = DocxExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(err, DocumentError::MissingPart(ref part) if part == DOCUMENT_PART));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = DocxExtractor::new()
            .extract(&dir.path().join("vanished.docx"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }
}
