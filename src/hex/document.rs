//! The loaded byte document and its hex code map.

use super::codec::{parse_hex_string, push_hex_pair, to_display_char, CodecError};

/// Immutable byte document shared by every reducer.
///
/// The hex code map is derived once at construction; a new document
/// replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexDocument {
    bytes: Vec<u8>,
    /// Concatenated upper-case pairs, two characters per byte.
    hex_codes: String,
}

impl HexDocument {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let mut hex_codes = String::with_capacity(bytes.len() * 2);
        for byte in &bytes {
            push_hex_pair(&mut hex_codes, *byte);
        }
        Self { bytes, hex_codes }
    }

    /// Build a document from whitespace-separated hex text.
    ///
    /// Empty text yields an empty document.
    pub fn from_hex_text(text: &str) -> Result<Self, CodecError> {
        Ok(Self::from_bytes(parse_hex_string(text)?))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Hex pair for `index`, or `None` past the end.
    pub fn hex_code(&self, index: usize) -> Option<&str> {
        let start = index.checked_mul(2)?;
        self.hex_codes.get(start..start + 2)
    }

    /// Hex pair for `index`, empty when out of range.
    pub fn hex_value(&self, index: usize) -> &str {
        self.hex_code(index).unwrap_or("")
    }

    /// Display glyph for `index`, empty when out of range.
    pub fn text_value(&self, index: usize) -> String {
        self.byte(index)
            .map(|b| to_display_char(b).to_string())
            .unwrap_or_default()
    }

    /// Clamp a signed index into `0..len`. An empty document clamps to 0.
    pub fn clamp_index(&self, index: i64) -> usize {
        if index <= 0 || self.bytes.is_empty() {
            0
        } else {
            (index as usize).min(self.bytes.len() - 1)
        }
    }

    /// Bytes in the inclusive range `[start, end]`, truncated to the document.
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        if start >= self.bytes.len() || start > end {
            return &[];
        }
        let stop = end.saturating_add(1).min(self.bytes.len());
        &self.bytes[start..stop]
    }

    /// Start offsets of every (overlapping) occurrence of `pattern`.
    pub fn find_all(&self, pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > self.bytes.len() {
            return Vec::new();
        }
        self.bytes
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, window)| *window == pattern)
            .map(|(offset, _)| offset)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_codes_are_indexed_per_byte() {
        let doc = HexDocument::from_bytes(vec![0x4d, 0x5a, 0x00]);
        assert_eq!(doc.hex_code(0), Some("4D"));
        assert_eq!(doc.hex_code(2), Some("00"));
        assert_eq!(doc.hex_code(3), None);
        assert_eq!(doc.hex_value(99), "");
        assert_eq!(doc.text_value(0), "M");
        assert_eq!(doc.text_value(2), "·");
        assert_eq!(doc.text_value(3), "");
    }

    #[test]
    fn empty_input_is_empty_document() {
        let doc = HexDocument::from_hex_text("").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.clamp_index(5), 0);
        assert!(doc.find_all(b"a").is_empty());
    }

    #[test]
    fn find_all_reports_overlapping_matches() {
        let doc = HexDocument::from_bytes(b"aaaa".to_vec());
        assert_eq!(doc.find_all(b"aa"), vec![0, 1, 2]);
    }

    #[test]
    fn slice_is_inclusive_and_truncated() {
        let doc = HexDocument::from_bytes(b"abcdef".to_vec());
        assert_eq!(doc.slice(1, 3), b"bcd");
        assert_eq!(doc.slice(4, 100), b"ef");
        assert_eq!(doc.slice(10, 12), b"");
    }
}
