//! Parsed stylesheet structures per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! Every structure keeps the tokens it was built from, including brackets,
//! so that [`crate::serializer`] can reproduce the source exactly.

use thiserror::Error;

use crate::tokenizer::{SourceLocation, Token, TokenKind};

/// [§ 5.4.8 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
///
/// "A component value is one of the preserved tokens, a function, or a simple block."
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(Token),
    /// A simple block.
    Block(SimpleBlock),
    /// A function with its arguments.
    Function(Function),
}

impl ComponentValue {
    /// The token, if this component value is a preserved token.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns true if this is a literal token with exactly the text `text`.
    #[must_use]
    pub fn is_literal(&self, text: &str) -> bool {
        self.as_token().is_some_and(|token| token.is_literal(text))
    }

    /// Returns true for whitespace and comment tokens.
    #[must_use]
    pub fn is_trivia(&self) -> bool {
        self.as_token()
            .is_some_and(|token| token.is_whitespace() || token.is_comment())
    }

    /// Returns true if this is a `{}` block.
    #[must_use]
    pub const fn is_curly_block(&self) -> bool {
        matches!(self, Self::Block(block) if matches!(block.kind, BlockKind::Curly))
    }

    /// Where this component value starts in the source, if known.
    #[must_use]
    pub const fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::Token(token) => token.location,
            Self::Block(block) => block.open.location,
            Self::Function(function) => function.name.location,
        }
    }
}

impl From<Token> for ComponentValue {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

/// The three bracket pairs that form a simple block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `{` ... `}`
    Curly,
    /// `[` ... `]`
    Square,
    /// `(` ... `)`
    Paren,
}

impl BlockKind {
    /// The block kind opened by `kind`, if any.
    #[must_use]
    pub const fn opened_by(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LeftBrace => Some(Self::Curly),
            TokenKind::LeftBracket => Some(Self::Square),
            TokenKind::LeftParen => Some(Self::Paren),
            _ => None,
        }
    }

    /// Returns true if `kind` is this block's "mirror variant".
    #[must_use]
    pub const fn is_closed_by(self, kind: &TokenKind) -> bool {
        matches!(
            (self, kind),
            (Self::Curly, TokenKind::RightBrace)
                | (Self::Square, TokenKind::RightBracket)
                | (Self::Paren, TokenKind::RightParen)
        )
    }
}

/// [§ 5.4.9 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBlock {
    /// Which brackets delimit the block.
    pub kind: BlockKind,
    /// The opening bracket token.
    pub open: Token,
    /// The block contents.
    pub content: Vec<ComponentValue>,
    /// The closing bracket token; `None` when the input ended first.
    pub close: Option<Token>,
}

/// [§ 5.4.10 Consume a function](https://www.w3.org/TR/css-syntax-3/#consume-function)
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The `<function-token>`, including its opening parenthesis.
    pub name: Token,
    /// The function arguments.
    pub arguments: Vec<ComponentValue>,
    /// The closing parenthesis; `None` when the input ended first.
    pub close: Option<Token>,
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
///
/// A qualified rule: a prelude (for style rules, the selector list) and a `{}` block.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedRule {
    /// The prelude component values, including whitespace and comments.
    pub prelude: Vec<ComponentValue>,
    /// The `{}` block. Its contents are never inspected.
    pub block: SimpleBlock,
}

/// The contents of an at-rule's `{}` block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    /// Raw component values, as parsed.
    Values(Vec<ComponentValue>),
    /// The contents reinterpreted as a nested list of rules.
    Rules(Vec<TopLevelItem>),
}

/// The `{}` block of an at-rule.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRuleBlock {
    /// The `{` token.
    pub open: Token,
    /// The block contents.
    pub content: BlockContent,
    /// The `}` token; `None` when the input ended first.
    pub close: Option<Token>,
}

impl From<SimpleBlock> for AtRuleBlock {
    fn from(block: SimpleBlock) -> Self {
        Self {
            open: block.open,
            content: BlockContent::Values(block.content),
            close: block.close,
        }
    }
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// The `<at-keyword-token>`, as written.
    pub at_keyword: Token,
    /// The at-keyword name (without the `@`), ASCII-lowercased.
    pub lower_keyword: String,
    /// The prelude component values.
    pub prelude: Vec<ComponentValue>,
    /// The optional `{}` block.
    pub block: Option<AtRuleBlock>,
    /// The terminating `;`, for at-rules without a block.
    pub semicolon: Option<Token>,
}

/// A rule list entry that could not be parsed.
///
/// It keeps the component values it consumed so an untouched stylesheet
/// still serializes exactly.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (at {location})")]
pub struct ParseError {
    /// What went wrong.
    pub message: String,
    /// Where the error was detected.
    pub location: SourceLocation,
    /// The component values that were consumed.
    pub values: Vec<ComponentValue>,
}

/// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
///
/// One entry of a stylesheet's rule list (or a nested rule list).
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevelItem {
    /// A qualified (style) rule.
    QualifiedRule(QualifiedRule),
    /// An at-rule.
    AtRule(AtRule),
    /// A comment between rules.
    Comment(Token),
    /// Whitespace between rules.
    Whitespace(Token),
    /// A rule that could not be parsed.
    ParseError(ParseError),
}
