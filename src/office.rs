//! Plain-text extraction from zipped-XML office documents (.docx, .odt).
//!
//! Both formats are a zip container holding one main XML part; the only
//! differences are the entry name and which elements mean "paragraph" and
//! "line break". Errors are mapped to plain messages here so no zip/XML
//! library error ever reaches the analysis core.

use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Which XML elements delimit text, per format.
struct XmlTextRules {
    /// zip entry holding the document body
    entry: &'static str,
    /// local element names whose end marks a paragraph
    paragraph_ends: &'static [&'static [u8]],
    /// local element names that are explicit line breaks
    line_breaks: &'static [&'static [u8]],
}

const DOCX_RULES: XmlTextRules = XmlTextRules {
    entry: "word/document.xml",
    paragraph_ends: &[b"p"],
    line_breaks: &[b"br"],
};

const ODT_RULES: XmlTextRules = XmlTextRules {
    entry: "content.xml",
    paragraph_ends: &[b"p", b"h"],
    line_breaks: &[b"line-break", b"br"],
};

/// Extracts the paragraph text of a `.docx` file.
pub fn docx_to_text(path: &Path) -> Result<String, String> {
    let xml = read_zip_entry(path, ".docx", DOCX_RULES.entry)?;
    xml_to_text(&xml, &DOCX_RULES).map_err(|e| format!("Parse .docx XML failed: {e}"))
}

/// Extracts the paragraph text of an `.odt` file.
pub fn odt_to_text(path: &Path) -> Result<String, String> {
    let xml = read_zip_entry(path, ".odt", ODT_RULES.entry)?;
    xml_to_text(&xml, &ODT_RULES).map_err(|e| format!("Parse .odt XML failed: {e}"))
}

fn read_zip_entry(path: &Path, kind: &str, entry: &str) -> Result<String, String> {
    let file = File::open(path).map_err(|e| format!("Open {kind} failed: {e}"))?;
    let mut zip = ZipArchive::new(file).map_err(|e| format!("Open {kind} zip failed: {e}"))?;
    let mut part = zip
        .by_name(entry)
        .map_err(|_| format!("Missing {entry}"))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| format!("Read {entry} failed: {e}"))?;
    Ok(xml)
}

fn xml_to_text(xml: &str, rules: &XmlTextRules) -> Result<String, String> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut out = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if rules.line_breaks.contains(&local_name(e.name().as_ref())) {
                    out.push('\n');
                }
            }
            Ok(Event::End(e)) => {
                if rules.paragraph_ends.contains(&local_name(e.name().as_ref())) {
                    out.push('\n');
                }
            }
            Ok(Event::Text(t)) => {
                out.push_str(&t.decode().map_err(|e| e.to_string())?);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        buf.clear();
    }
    Ok(squash_blank_lines(&out))
}

/// Strips the namespace prefix from a qualified element name.
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&b| b == b':') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// Trims every line and collapses runs of blank lines to one.
fn squash_blank_lines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_blank = false;
    for raw_line in s.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            if !last_blank {
                out.push('\n');
                last_blank = true;
            }
        } else {
            if !out.is_empty() && !last_blank {
                out.push('\n');
            }
            out.push_str(line);
            out.push('\n');
            last_blank = false;
        }
    }
    out.trim_end().to_string()
}
