//! The decoded text of one HTTP response.
//!
//! Offsets exposed by [`Document`] are character (Unicode scalar) offsets,
//! which is what the reports print. Byte offsets stay internal.

use std::string::FromUtf8Error;

/// How to treat response bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Substitute U+FFFD for every invalid sequence. Never fails.
    #[default]
    Replace,
    /// Reject the body.
    Strict,
}

/// A fetched page, immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    /// The URL that was requested.
    pub url: String,
    /// HTTP status of the response (0 for documents built from plain text).
    pub status: u16,
    /// Size of the raw body in bytes.
    pub byte_len: usize,
    /// Whether decoding replaced any invalid byte sequence.
    pub lossy: bool,
    text: String,
    lower: String,
    char_len: usize,
}

impl Document {
    /// Decode a raw response body according to `policy`.
    pub fn decode(
        url: &str,
        status: u16,
        bytes: Vec<u8>,
        policy: DecodePolicy,
    ) -> Result<Self, FromUtf8Error> {
        let byte_len = bytes.len();
        let (text, lossy) = match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            Err(e) if policy == DecodePolicy::Replace => {
                (String::from_utf8_lossy(e.as_bytes()).into_owned(), true)
            }
            Err(e) => return Err(e),
        };

        let mut doc = Self::from_text(url, text);
        doc.status = status;
        doc.byte_len = byte_len;
        doc.lossy = lossy;
        Ok(doc)
    }

    /// Build a document directly from text, e.g. a saved page or a fixture.
    pub fn from_text(url: &str, text: impl Into<String>) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        let char_len = text.chars().count();
        Self {
            url: url.to_string(),
            status: 0,
            byte_len: text.len(),
            lossy: false,
            text,
            lower,
            char_len,
        }
    }

    /// The original-case text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lowercased text, computed once at construction.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of the character at `char_idx`, or the text length when
    /// `char_idx` is past the end.
    pub fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Slice by character range, clipped to the document bounds.
    pub fn slice_chars(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.char_len);
        let start = start.min(end);
        let sb = self.char_to_byte(start);
        let eb = self.char_to_byte(end);
        &self.text[sb..eb]
    }
}
