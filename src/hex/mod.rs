//! Hex/ASCII codec and the loaded document.

mod codec;
mod document;

pub use codec::{
    byte_to_hex_pair, bytes_to_hex_string, classify, format_offset, hex_to_text,
    is_valid_hex_string, parse_hex_pair, parse_hex_string, text_to_hex_string, to_display_char,
    AsciiClass, AsciiRange, CodecError, ASCII_TABLE,
};
pub use document::HexDocument;
