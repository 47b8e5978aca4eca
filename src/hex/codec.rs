//! Stateless conversions between bytes, hex pairs and printable text.

use serde::Serialize;
use thiserror::Error;

const HEX_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Errors produced by the hex codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("'{0}' is not a valid hex byte")]
    InvalidHexPair(String),

    #[error("hex text has an odd number of digits ({0})")]
    OddLength(usize),

    #[error("radix {0} is not supported (expected 2..=36)")]
    InvalidBase(u32),
}

/// Display class of a byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AsciiClass {
    Null,
    NonPrintable,
    LowerAscii,
    HigherAscii,
}

impl AsciiClass {
    pub fn label(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::NonPrintable => "non printable",
            Self::LowerAscii => "lower ASCII",
            Self::HigherAscii => "higher ASCII",
        }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct AsciiRange {
    pub class: AsciiClass,
    pub start: u8,
    pub end: u8,
    /// Replacement glyph; `None` renders the byte literally.
    pub glyph: Option<char>,
}

/// The four disjoint byte ranges covering `0..=255`.
pub const ASCII_TABLE: [AsciiRange; 4] = [
    AsciiRange {
        class: AsciiClass::Null,
        start: 0,
        end: 0,
        glyph: Some('·'),
    },
    AsciiRange {
        class: AsciiClass::NonPrintable,
        start: 1,
        end: 31,
        glyph: Some('*'),
    },
    AsciiRange {
        class: AsciiClass::LowerAscii,
        start: 32,
        end: 127,
        glyph: None,
    },
    AsciiRange {
        class: AsciiClass::HigherAscii,
        start: 128,
        end: 255,
        glyph: Some('*'),
    },
];

fn range_of(byte: u8) -> &'static AsciiRange {
    // The table covers every u8, the fallback is never taken.
    ASCII_TABLE
        .iter()
        .find(|range| byte >= range.start && byte <= range.end)
        .unwrap_or(&ASCII_TABLE[3])
}

pub fn classify(byte: u8) -> AsciiClass {
    range_of(byte).class
}

/// Character shown in the text column for `byte`.
pub fn to_display_char(byte: u8) -> char {
    range_of(byte).glyph.unwrap_or(byte as char)
}

/// Two upper-case hex digits.
pub fn byte_to_hex_pair(byte: u8) -> String {
    let mut pair = String::with_capacity(2);
    push_hex_pair(&mut pair, byte);
    pair
}

pub(crate) fn push_hex_pair(out: &mut String, byte: u8) {
    out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
}

/// Parse exactly two hex digits (either case).
pub fn parse_hex_pair(pair: &str) -> Result<u8, CodecError> {
    if pair.len() != 2 || !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHexPair(pair.to_string()));
    }
    u8::from_str_radix(pair, 16).map_err(|_| CodecError::InvalidHexPair(pair.to_string()))
}

/// True when the text, with whitespace removed, is made only of hex digits.
///
/// A trailing single digit counts as a (short) chunk and is accepted; use
/// [`parse_hex_string`] when whole bytes are required.
pub fn is_valid_hex_string(text: &str) -> bool {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| c.is_ascii_hexdigit())
}

/// Parse hex text such as `"4D 5A 90"` or `"4d5a90"` into bytes.
pub fn parse_hex_string(text: &str) -> Result<Vec<u8>, CodecError> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(CodecError::OddLength(digits.len()));
    }
    digits
        .chunks(2)
        .map(|chunk| {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| CodecError::InvalidHexPair(String::from_utf8_lossy(chunk).into()))?;
            parse_hex_pair(pair)
        })
        .collect()
}

/// Upper-case pairs separated by single spaces.
pub fn bytes_to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_hex_pair(&mut out, *byte);
    }
    out
}

/// Lower-case pairs, each followed by a space (`"MZ"` -> `"4d 5a "`).
pub fn text_to_hex_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        push_hex_pair(&mut out, byte);
        out.push(' ');
    }
    out.to_ascii_lowercase()
}

/// Decode hex text to a string, replacing invalid UTF-8.
pub fn hex_to_text(hex: &str) -> Result<String, CodecError> {
    let bytes = parse_hex_string(hex)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render `index` in `base`, upper-cased and left-padded with zeros to `width`.
pub fn format_offset(index: usize, base: u32, width: usize) -> Result<String, CodecError> {
    if !(2..=36).contains(&base) {
        return Err(CodecError::InvalidBase(base));
    }
    let base = base as usize;
    let mut digits = Vec::new();
    let mut value = index;
    loop {
        digits.push(HEX_DIGITS[value % base]);
        value /= base;
        if value == 0 {
            break;
        }
    }
    while digits.len() < width {
        digits.push(b'0');
    }
    digits.reverse();
    Ok(String::from_utf8_lossy(&digits).into_owned())
}
