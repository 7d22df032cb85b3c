//! Lossless CSS syntax layer for cssscope.
//!
//! # Scope
//!
//! This crate implements:
//! - **Byte decoding** ([§ 3.2 The input byte stream](https://www.w3.org/TR/css-syntax-3/#input-byte-stream))
//!   - BOM sniffing, protocol encoding, `@charset`, environment encoding
//!
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - All token types: ident, function, at-keyword, hash, string, url, number, dimension, etc.
//!   - Comments kept as tokens
//!   - Escape sequences
//!   - Source text and line/column recorded for every token
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Component values (simple blocks, functions)
//!   - Stylesheets and nested rule lists (qualified rules and at-rules)
//!   - Unterminated qualified rules surfaced as [`parser::ParseError`] items
//!
//! - **Serializer**
//!   - Writes every token back exactly as read: parse then serialize is the identity
//!
//! # Not Implemented
//!
//! - Declaration parsing; rule blocks are kept as opaque component values
//! - `<unicode-range-token>`

/// Stylesheet byte decoding and encoding.
pub mod encoding;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Exact serialization of parsed structures.
pub mod serializer;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

use encoding_rs::Encoding;

// Re-exports for convenience
pub use encoding::{EncodingError, decode_stylesheet_bytes, encode_stylesheet, lookup_encoding};
pub use parser::{
    AtRule, AtRuleBlock, BlockContent, BlockKind, CSSParser, ComponentValue, EOF_IN_QUALIFIED_RULE,
    ParseError, QualifiedRule, SimpleBlock, TopLevelItem, parse_component_values,
    parse_rule_list, parse_stylesheet,
};
pub use serializer::{serialize, serialize_values};
pub use tokenizer::{CSSTokenizer, SourceLocation, Token, TokenKind};

/// Decode and parse a stylesheet, returning its rules and the encoding used.
#[must_use]
pub fn parse_stylesheet_bytes(
    css: &[u8],
    protocol_encoding: Option<&'static Encoding>,
    environment_encoding: Option<&'static Encoding>,
) -> (Vec<TopLevelItem>, &'static Encoding) {
    let (text, encoding) = decode_stylesheet_bytes(css, protocol_encoding, environment_encoding);
    (parse_stylesheet(&text), encoding)
}
