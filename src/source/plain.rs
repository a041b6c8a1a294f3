//! Plain backend built directly on `lopdf`.
//!
//! More tolerant of malformed documents than the rich backend, at the
//! cost of style information: only raw page text and the info dictionary
//! are available here.

use crate::error::{Error, Result};
use crate::source::{Glyph, PageTextSource};

/// Fallback text source. No font sizes, but it can read documents the
/// rich backend rejects and exposes the info dictionary title.
pub struct PlainSource {
    doc: lopdf::Document,
}

impl PlainSource {
    /// Parse a document from memory.
    pub fn open(data: &[u8]) -> Result<Self> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::BackendOpen(e.to_string()))?;
        Ok(Self { doc })
    }
}

impl PageTextSource for PlainSource {
    fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().keys().copied().collect()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::PageExtract {
                page,
                reason: e.to_string(),
            })
    }

    fn page_glyphs(&self, _page: u32) -> Result<Option<Vec<Glyph>>> {
        Ok(None)
    }

    fn metadata_title(&self) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let info_ref = info.as_reference().ok()?;
        let info_dict = self.doc.get_dictionary(info_ref).ok()?;
        get_string_from_dict(info_dict, b"Title")
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| {
        match obj {
            lopdf::Object::String(bytes, _) => {
                // Try UTF-16BE first (PDF standard for Unicode)
                if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                    let utf16: Vec<u16> = bytes[2..]
                        .chunks(2)
                        .filter_map(|c| {
                            if c.len() == 2 {
                                Some(u16::from_be_bytes([c[0], c[1]]))
                            } else {
                                None
                            }
                        })
                        .collect();
                    String::from_utf16(&utf16).ok()
                } else {
                    // Try as Latin-1 or UTF-8
                    String::from_utf8(bytes.clone())
                        .ok()
                        .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
                }
            }
            lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Dictionary, Object};

    #[test]
    fn test_open_rejects_garbage() {
        assert!(PlainSource::open(b"not a pdf at all").is_err());
    }

    #[test]
    fn test_get_string_latin1() {
        let mut dict = Dictionary::new();
        dict.set("Title", Object::string_literal("Annual Report"));
        assert_eq!(
            get_string_from_dict(&dict, b"Title").as_deref(),
            Some("Annual Report")
        );
    }

    #[test]
    fn test_get_string_utf16be() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "Résumé".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let mut dict = Dictionary::new();
        dict.set(
            "Title",
            Object::String(bytes, lopdf::StringFormat::Literal),
        );
        assert_eq!(
            get_string_from_dict(&dict, b"Title").as_deref(),
            Some("Résumé")
        );
    }

    #[test]
    fn test_get_string_missing_key() {
        let dict = Dictionary::new();
        assert!(get_string_from_dict(&dict, b"Title").is_none());
    }
}
