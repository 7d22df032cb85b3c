//! Stylesheet byte decoding and encoding.
//!
//! [§ 3.2 The input byte stream](https://www.w3.org/TR/css-syntax-3/#input-byte-stream)
//!
//! "When parsing a stylesheet, the stream of Unicode code points that comprises
//! the input to the tokenization stage might be initially seen by the user
//! agent as a stream of bytes ... the user agent must decode the byte stream
//! into a stream of code points."

use encoding_rs::{Encoder, EncoderResult, Encoding, UTF_8, UTF_16BE, UTF_16LE};
use thiserror::Error;

/// The prefix of an `@charset` rule, as it must appear byte for byte.
const CHARSET_PREFIX: &[u8] = b"@charset \"";

/// How far into the input the closing quote of an `@charset` label may be.
const CHARSET_SEARCH_LIMIT: usize = 100;

/// Extra output room reserved whenever the encoder runs out of space.
const OUTPUT_SLACK: usize = 16;

/// Errors from resolving caller-supplied encoding labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The label does not name an encoding in the WHATWG Encoding Standard.
    #[error("unknown encoding label '{0}'")]
    UnknownLabel(String),
}

/// [Encoding § 4.2 Get an encoding](https://encoding.spec.whatwg.org/#concept-encoding-get)
///
/// # Errors
///
/// Returns [`EncodingError::UnknownLabel`] if `label` names no known encoding.
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding, EncodingError> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| EncodingError::UnknownLabel(label.to_string()))
}

/// [§ 3.2 Determine the fallback encoding](https://www.w3.org/TR/css-syntax-3/#determine-the-fallback-encoding)
///
/// Decode `css` and return the text together with the encoding that was used.
/// A byte order mark always takes precedence over the fallback and is not part
/// of the returned text.
#[must_use]
pub fn decode_stylesheet_bytes(
    css: &[u8],
    protocol_encoding: Option<&'static Encoding>,
    environment_encoding: Option<&'static Encoding>,
) -> (String, &'static Encoding) {
    // STEP 1: "If HTTP or equivalent protocol provides an encoding label ...
    //          for the stylesheet, get an encoding from encoding label."
    // STEP 2: "Otherwise, check stylesheet's byte stream ... @charset"
    // STEP 3: "Otherwise, if an environment encoding is provided by the
    //          referring document, return it."
    // STEP 4: "Otherwise, return utf-8."
    let fallback = protocol_encoding
        .or_else(|| charset_rule_encoding(css))
        .or(environment_encoding)
        .unwrap_or(UTF_8);

    // "Decode stylesheet's stream of bytes with fallback encoding fallback"
    // The decode algorithm sniffs the BOM first.
    let (text, encoding, _had_errors) = fallback.decode(css);
    (text.into_owned(), encoding)
}

/// Encode `text` for output in `encoding`.
///
/// Encodings that can only be decoded (UTF-16, replacement) write UTF-8, per
/// the Encoding Standard's "get an output encoding". A character the output
/// encoding cannot hold is written as a CSS hex escape (`\65e5 `) instead of
/// the HTML numeric reference the Encoding Standard would produce.
#[must_use]
pub fn encode_stylesheet(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let mut encoder = encoding.new_encoder();
    let mut bytes = Vec::with_capacity(text.len() + OUTPUT_SLACK);
    let mut remaining = text;
    while let Some((unmappable, rest)) =
        encode_until_unmappable(&mut encoder, remaining, &mut bytes, false)
    {
        // Escapes are ASCII, which every output encoding holds.
        let _ = encode_until_unmappable(&mut encoder, &hex_escape(unmappable), &mut bytes, false);
        remaining = rest;
    }
    let _ = encode_until_unmappable(&mut encoder, "", &mut bytes, true);
    bytes
}

/// Feed `text` to `encoder`, growing `bytes` as needed.
///
/// Stops at the first character the encoding cannot hold and returns it with
/// the text after it.
fn encode_until_unmappable<'a>(
    encoder: &mut Encoder,
    mut text: &'a str,
    bytes: &mut Vec<u8>,
    last: bool,
) -> Option<(char, &'a str)> {
    loop {
        let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(text, bytes, last);
        text = &text[read..];
        match result {
            EncoderResult::InputEmpty => return None,
            EncoderResult::OutputFull => bytes.reserve(text.len() + OUTPUT_SLACK),
            EncoderResult::Unmappable(unmappable) => return Some((unmappable, text)),
        }
    }
}

/// [CSSOM § 2.1 Serialize a character as code point](https://drafts.csswg.org/cssom/#serialize-a-character-as-code-point)
///
/// "the character escaped as code point": `\`, the code point in lowercase
/// hex, and a single space.
fn hex_escape(c: char) -> String {
    format!("\\{:x} ", u32::from(c))
}

/// "If the first 1024 bytes of the stream begin with the hex sequence
/// 40 63 68 61 72 73 65 74 20 22 XX* 22 3B ... get an encoding from a string
/// formed out of the sequence of XX bytes, interpreted as ASCII."
///
/// "If the return value was utf-16be or utf-16le, return utf-8; if it was
/// anything else except failure, return it."
fn charset_rule_encoding(css: &[u8]) -> Option<&'static Encoding> {
    let rest = css.strip_prefix(CHARSET_PREFIX)?;
    let search = &rest[..rest.len().min(CHARSET_SEARCH_LIMIT - CHARSET_PREFIX.len())];
    let end_quote = search.iter().position(|&b| b == b'"')?;
    if rest.get(end_quote + 1) != Some(&b';') {
        return None;
    }

    let encoding = Encoding::for_label(&rest[..end_quote])?;
    if encoding == UTF_16BE || encoding == UTF_16LE {
        Some(UTF_8)
    } else {
        Some(encoding)
    }
}
