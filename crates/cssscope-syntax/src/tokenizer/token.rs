//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! "The output of the tokenization step is a stream of zero or more of the
//! following tokens: `<ident-token>`, `<function-token>`, `<at-keyword-token>`,
//! `<hash-token>`, `<string-token>`, `<bad-string-token>`, `<url-token>`,
//! `<bad-url-token>`, `<delim-token>`, `<number-token>`, `<percentage-token>`,
//! `<dimension-token>`, `<unicode-range-token>`, `<whitespace-token>`,
//! `<CDO-token>`, `<CDC-token>`, `<colon-token>`, `<semicolon-token>`,
//! `<comma-token>`, `<[-token>`, `<]-token>`, `<(-token>`, `<)-token>`, `<{-token>`,
//! and `<}-token>`."
//!
//! Unlike the CSS Syntax token stream, every [`Token`] here also keeps the exact
//! source text it was read from, and comments are kept as tokens. Serializing
//! the `repr` of every token reproduces the input byte for byte.

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<hash-token>` with the type flag set to 'id'... or 'unrestricted'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// "id" - the hash token's value is a valid identifier
    Id,
    /// "unrestricted" - the hash token's value is not a valid identifier
    Unrestricted,
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<number-token>` has a type flag set to either 'integer' or 'number'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    /// "integer" - the number is an integer
    Integer,
    /// "number" - the number has a decimal point or exponent
    Number,
}

/// A 1-based position in the decoded stylesheet text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column in code points, starting at 1.
    pub column: usize,
}

impl SourceLocation {
    /// Create a location from a line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// The kind of a token. Values are the *decoded* values (escapes resolved);
/// the source spelling lives in [`Token::repr`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// "`<ident-token>`"
    /// "has a value composed of one or more code points"
    Ident(String),

    /// "`<function-token>`"
    /// "has a value composed of one or more code points, followed by U+0028 LEFT PARENTHESIS"
    Function(String),

    /// "`<at-keyword-token>`"
    /// "has a value composed of one or more code points, preceded by U+0040 COMMERCIAL AT (@)"
    AtKeyword(String),

    /// "`<hash-token>`"
    /// "has a value composed of one or more code points, preceded by U+0023 NUMBER SIGN (#)"
    /// "has a type flag set to either 'id' or 'unrestricted'"
    Hash {
        /// "a value composed of one or more code points"
        value: String,
        /// "a type flag set to either 'id' or 'unrestricted'"
        hash_type: HashType,
    },

    /// "`<string-token>`"
    /// "has a value composed of zero or more code points"
    String(String),

    /// "`<bad-string-token>`"
    /// "represents a parsing error"
    BadString,

    /// "`<url-token>`"
    /// "has a value composed of zero or more code points"
    Url(String),

    /// "`<bad-url-token>`"
    /// "represents a parsing error"
    BadUrl,

    /// Exact-text punctuation: every `<delim-token>`, plus `<colon-token>`,
    /// `<semicolon-token>`, `<comma-token>`, `<CDO-token>` and `<CDC-token>`.
    /// The text is the token's `repr`.
    Literal,

    /// "`<number-token>`"
    /// "has a numeric value, and a type flag set to either 'integer' or 'number'"
    Number {
        /// "a numeric value"
        value: f64,
        /// The integer value if this is an integer type.
        int_value: Option<i64>,
        /// "a type flag set to either 'integer' or 'number'"
        numeric_type: NumericType,
    },

    /// "`<percentage-token>`"
    /// "has a numeric value, and a type flag set to either 'integer' or 'number'"
    Percentage {
        /// "a numeric value"
        value: f64,
        /// The integer value if this is an integer type.
        int_value: Option<i64>,
        /// "a type flag set to either 'integer' or 'number'"
        numeric_type: NumericType,
    },

    /// "`<dimension-token>`"
    /// "has a numeric value, a type flag, and a unit"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// The integer value if this is an integer type.
        int_value: Option<i64>,
        /// "a type flag set to either 'integer' or 'number'"
        numeric_type: NumericType,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`"
    /// "represents one or more whitespace code points"
    Whitespace,

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// A comment, with the text between `/*` and `*/`.
    Comment(String),

    /// `<[-token>`
    /// "represents U+005B LEFT SQUARE BRACKET ([)"
    LeftBracket,

    /// `<]-token>`
    /// "represents U+005D RIGHT SQUARE BRACKET (])"
    RightBracket,

    /// `<(-token>`
    /// "represents U+0028 LEFT PARENTHESIS (()"
    LeftParen,

    /// `<)-token>`
    /// "represents U+0029 RIGHT PARENTHESIS ())"
    RightParen,

    /// `<{-token>`
    /// "represents U+007B LEFT CURLY BRACKET ({)"
    LeftBrace,

    /// `<}-token>`
    /// "represents U+007D RIGHT CURLY BRACKET (})"
    RightBrace,
}

/// A token together with its source text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The exact text this token serializes to.
    pub repr: String,
    /// Where the token started in the source, if it came from the tokenizer.
    pub location: Option<SourceLocation>,
}

impl Token {
    /// Create a token read from source.
    #[must_use]
    pub fn new(kind: TokenKind, repr: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            repr: repr.into(),
            location: Some(location),
        }
    }

    /// Create a new literal token whose text is `value`.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Literal,
            repr: value.into(),
            location: None,
        }
    }

    /// Create a new ident token.
    ///
    /// The text is `value` serialized per
    /// [CSSOM § 2.1 serialize an identifier](https://drafts.csswg.org/cssom/#serialize-an-identifier),
    /// so any string round-trips as a single identifier.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            repr: serialize_identifier(&value),
            kind: TokenKind::Ident(value),
            location: None,
        }
    }

    /// Create a new whitespace token whose text is `value`.
    #[must_use]
    pub fn whitespace(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Whitespace,
            repr: value.into(),
            location: None,
        }
    }

    /// Create a new comment token, serialized as `/*value*/`.
    #[must_use]
    pub fn comment(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            repr: format!("/*{value}*/"),
            kind: TokenKind::Comment(value),
            location: None,
        }
    }

    /// Returns true if this is a literal token with exactly the text `text`.
    #[must_use]
    pub fn is_literal(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Literal) && self.repr == text
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    /// Returns true if this is a comment token.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment(_))
    }

    /// The decoded value of an ident token.
    #[must_use]
    pub fn ident_value(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(value) => Some(value),
            _ => None,
        }
    }

    /// ASCII case-insensitive comparison of an ident token's value with `name`.
    ///
    /// Always false for tokens that are not identifiers.
    #[must_use]
    pub fn ident_matches(&self, name: &str) -> bool {
        self.ident_value()
            .is_some_and(|value| value.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Ident(v) => write!(f, "<ident:{v}>"),
            TokenKind::Function(v) => write!(f, "<function:{v}(>"),
            TokenKind::AtKeyword(v) => write!(f, "<at-keyword:@{v}>"),
            TokenKind::Hash { value, hash_type } => {
                let t = match hash_type {
                    HashType::Id => "id",
                    HashType::Unrestricted => "unrestricted",
                };
                write!(f, "<hash:#{value} ({t})>")
            }
            TokenKind::String(v) => write!(f, "<string:\"{v}\">"),
            TokenKind::BadString => write!(f, "<bad-string>"),
            TokenKind::Url(v) => write!(f, "<url:{v}>"),
            TokenKind::BadUrl => write!(f, "<bad-url>"),
            TokenKind::Literal => write!(f, "<literal:{}>", self.repr),
            TokenKind::Number { value, .. } => write!(f, "<number:{value}>"),
            TokenKind::Percentage { value, .. } => write!(f, "<percentage:{value}%>"),
            TokenKind::Dimension { value, unit, .. } => write!(f, "<dimension:{value}{unit}>"),
            TokenKind::Whitespace => write!(f, "<whitespace>"),
            TokenKind::Comment(v) => write!(f, "<comment:{v}>"),
            TokenKind::LeftBracket => write!(f, "<[>"),
            TokenKind::RightBracket => write!(f, "<]>"),
            TokenKind::LeftParen => write!(f, "<(>"),
            TokenKind::RightParen => write!(f, "<)>"),
            TokenKind::LeftBrace => write!(f, "<{{>"),
            TokenKind::RightBrace => write!(f, "<}}>"),
        }
    }
}

/// [CSSOM § 2.1 Serialize an identifier](https://drafts.csswg.org/cssom/#serialize-an-identifier)
///
/// "To serialize an identifier means to create a string represented by the
/// concatenation of, for each character of the identifier..."
#[must_use]
pub fn serialize_identifier(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let starts_with_hyphen = value.starts_with('-');

    for (index, c) in value.chars().enumerate() {
        match c {
            // "If the character is NULL (U+0000), then the REPLACEMENT CHARACTER (U+FFFD)."
            '\0' => result.push('\u{FFFD}'),

            // "If the character is in the range [\1-\1f] (U+0001 to U+001F) or is U+007F,
            // then the character escaped as code point."
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_code_point_escape(&mut result, c),

            // "If the character is the first character and is in the range [0-9],
            // or the second character, is in the range [0-9] and the first
            // character is a "-", then the character escaped as code point."
            '0'..='9' if index == 0 || (index == 1 && starts_with_hyphen) => {
                push_code_point_escape(&mut result, c);
            }

            // "If the character is the first character and is a "-" (U+002D),
            // and there is no second character, then the escaped character."
            '-' if index == 0 && value.len() == 1 => result.push_str("\\-"),

            // "If the character is not handled by one of the above rules and is
            // greater than or equal to U+0080, is "-" (U+002D) or "_" (U+005F),
            // or is in one of the ranges [0-9], [A-Z], or [a-z], then the
            // character itself."
            c if !c.is_ascii() || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                result.push(c);
            }

            // "Otherwise, the escaped character."
            c => {
                result.push('\\');
                result.push(c);
            }
        }
    }

    result
}

/// "To escape a character as code point means to create a string of
/// "\" (U+005C), followed by the Unicode code point as the smallest possible
/// number of hexadecimal digits in the range 0-9 a-f (U+0030 to U+0039 and
/// U+0061 to U+0066) to represent the code point in base 16, followed by a
/// single SPACE (U+0020)."
fn push_code_point_escape(result: &mut String, c: char) {
    result.push('\\');
    result.push_str(&format!("{:x}", u32::from(c)));
    result.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_plain_identifier() {
        assert_eq!(serialize_identifier("container"), "container");
        assert_eq!(serialize_identifier("my-class_2"), "my-class_2");
    }

    #[test]
    fn test_serialize_leading_digit() {
        assert_eq!(serialize_identifier("1col"), "\\31 col");
        assert_eq!(serialize_identifier("-2x"), "-\\32 x");
    }

    #[test]
    fn test_serialize_lone_hyphen_and_specials() {
        assert_eq!(serialize_identifier("-"), "\\-");
        assert_eq!(serialize_identifier("a b"), "a\\ b");
        assert_eq!(serialize_identifier("a.b"), "a\\.b");
    }

    #[test]
    fn test_ident_matches_ignores_ascii_case() {
        let token = Token::ident("HTML");
        assert!(token.ident_matches("html"));
        assert!(!token.ident_matches("body"));
        assert!(!Token::literal("html").ident_matches("html"));
    }

    #[test]
    fn test_synthesized_tokens_have_no_location() {
        assert_eq!(Token::literal(".").location, None);
        assert_eq!(Token::comment("x").repr, "/*x*/");
        assert!(Token::whitespace(" ").is_whitespace());
    }
}
