//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the tokenization stage."
//!
//! Parsing happens in two passes. [`CSSParser`] groups tokens into component
//! values (blocks and functions nest), then the rule-list functions group
//! component values into rules. Nested rule lists (the contents of an
//! at-rule's block) only need the second pass, see [`parse_rule_list`].

use std::vec::IntoIter;

use super::ast::{
    AtRule, BlockKind, ComponentValue, Function, ParseError, QualifiedRule, SimpleBlock,
    TopLevelItem,
};
use crate::tokenizer::{SourceLocation, Token, TokenKind, tokenize};

/// Message carried by a qualified rule that never reached its block.
pub const EOF_IN_QUALIFIED_RULE: &str = "EOF reached before {} block for a qualified rule.";

/// CSS parser: groups a token stream into component values.
pub struct CSSParser {
    tokens: IntoIter<Token>,
}

impl CSSParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }

    /// [§ 5.3.10 Parse a list of component values](https://www.w3.org/TR/css-syntax-3/#parse-list-of-component-values)
    ///
    /// "Repeatedly consume a component value from input until an
    /// `<EOF-token>` is returned, appending the returned values (except the
    /// final `<EOF-token>`) into a list. Return the list."
    pub fn parse_component_values(&mut self) -> Vec<ComponentValue> {
        let mut values = Vec::new();
        while let Some(token) = self.tokens.next() {
            values.push(self.consume_component_value(token));
        }
        values
    }

    /// [§ 5.4.8 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self, token: Token) -> ComponentValue {
        // "If the current input token is a <{-token>, <[-token>, or <(-token>,
        // consume a simple block and return it."
        if let Some(kind) = BlockKind::opened_by(&token.kind) {
            return ComponentValue::Block(self.consume_simple_block(kind, token));
        }

        // "Otherwise, if the current input token is a <function-token>,
        // consume a function and return it."
        if matches!(token.kind, TokenKind::Function(_)) {
            return ComponentValue::Function(self.consume_function(token));
        }

        // "Otherwise, return the current input token."
        // A closing bracket with no matching opener ends up here too.
        ComponentValue::Token(token)
    }

    /// [§ 5.4.9 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    fn consume_simple_block(&mut self, kind: BlockKind, open: Token) -> SimpleBlock {
        // "Create a simple block with its associated token set to the current
        // input token and with its value initially set to an empty list."
        let mut content = Vec::new();

        while let Some(token) = self.tokens.next() {
            // "ending token"
            // "Return the block."
            if kind.is_closed_by(&token.kind) {
                return SimpleBlock {
                    kind,
                    open,
                    content,
                    close: Some(token),
                };
            }
            // "anything else"
            // "Reconsume the current input token. Consume a component value
            // and append it to the value of the block."
            content.push(self.consume_component_value(token));
        }

        // "EOF"
        // "This is a parse error. Return the block."
        SimpleBlock {
            kind,
            open,
            content,
            close: None,
        }
    }

    /// [§ 5.4.10 Consume a function](https://www.w3.org/TR/css-syntax-3/#consume-function)
    fn consume_function(&mut self, name: Token) -> Function {
        let mut arguments = Vec::new();

        while let Some(token) = self.tokens.next() {
            // "<)-token>"
            // "Return the function."
            if matches!(token.kind, TokenKind::RightParen) {
                return Function {
                    name,
                    arguments,
                    close: Some(token),
                };
            }
            // "anything else"
            // "Reconsume the current input token. Consume a component value
            // and append the returned value to the function's value."
            arguments.push(self.consume_component_value(token));
        }

        // "EOF"
        // "This is a parse error. Return the function."
        Function {
            name,
            arguments,
            close: None,
        }
    }
}

/// Tokenize `input` and group it into component values.
#[must_use]
pub fn parse_component_values(input: &str) -> Vec<ComponentValue> {
    CSSParser::new(tokenize(input)).parse_component_values()
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// "To parse a stylesheet from input..."
/// "Consume a list of rules from input, with the top-level flag set."
///
/// Whitespace and comments between rules are kept as items of their own.
#[must_use]
pub fn parse_stylesheet(input: &str) -> Vec<TopLevelItem> {
    consume_list_of_rules(parse_component_values(input), true)
}

/// [§ 5.3.4 Parse a list of rules](https://www.w3.org/TR/css-syntax-3/#parse-list-of-rules)
///
/// "To parse a list of rules from input..."
/// "Consume a list of rules from the input, with the top-level flag unset."
///
/// Takes component values rather than text so the contents of an at-rule's
/// block can be reparsed without tokenizing twice.
#[must_use]
pub fn parse_rule_list(values: Vec<ComponentValue>) -> Vec<TopLevelItem> {
    consume_list_of_rules(values, false)
}

/// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
fn consume_list_of_rules(values: Vec<ComponentValue>, top_level: bool) -> Vec<TopLevelItem> {
    // "Create an initially empty list of rules."
    let mut rules = Vec::new();
    let mut input = values.into_iter();

    while let Some(value) = input.next() {
        match value {
            // "<whitespace-token>"
            ComponentValue::Token(token) if token.is_whitespace() => {
                rules.push(TopLevelItem::Whitespace(token));
            }

            ComponentValue::Token(token) if token.is_comment() => {
                rules.push(TopLevelItem::Comment(token));
            }

            // "<CDO-token>" or "<CDC-token>"
            // "If the top-level flag is set, do nothing."
            ComponentValue::Token(token)
                if top_level && (token.is_literal("<!--") || token.is_literal("-->")) => {}

            // "<at-keyword-token>" and "anything else"
            value => rules.push(consume_rule(value, &mut input)),
        }
    }

    rules
}

/// Consume an at-rule or a qualified rule starting with `first`.
fn consume_rule(first: ComponentValue, input: &mut IntoIter<ComponentValue>) -> TopLevelItem {
    let lower_keyword = match first.as_token().map(|token| &token.kind) {
        Some(TokenKind::AtKeyword(name)) => Some(name.to_ascii_lowercase()),
        _ => None,
    };

    match (first, lower_keyword) {
        // "<at-keyword-token>"
        // "Reconsume the current input token. Consume an at-rule, and append
        // the returned value to the list of rules."
        (ComponentValue::Token(at_keyword), Some(lower_keyword)) => {
            TopLevelItem::AtRule(consume_at_rule(at_keyword, lower_keyword, input))
        }

        // A `{}` block straight away: a qualified rule with an empty prelude.
        (ComponentValue::Block(block), _) if block.kind == BlockKind::Curly => {
            TopLevelItem::QualifiedRule(QualifiedRule {
                prelude: Vec::new(),
                block,
            })
        }

        // "anything else"
        // "Reconsume the current input token. Consume a qualified rule. If
        // anything is returned, append it to the list of rules."
        (first, _) => consume_qualified_rule(first, input),
    }
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
fn consume_at_rule(
    at_keyword: Token,
    lower_keyword: String,
    input: &mut IntoIter<ComponentValue>,
) -> AtRule {
    // "Create a new at-rule with its name set to the value of the current input
    // token, its prelude initially set to an empty list, and its value initially
    // set to nothing."
    let mut prelude = Vec::new();

    for value in input.by_ref() {
        match value {
            // "<semicolon-token>"
            // "Return the at-rule."
            ComponentValue::Token(token) if token.is_literal(";") => {
                return AtRule {
                    at_keyword,
                    lower_keyword,
                    prelude,
                    block: None,
                    semicolon: Some(token),
                };
            }

            // "<{-token>"
            // "Consume a simple block and assign it to the at-rule's block.
            // Return the at-rule."
            ComponentValue::Block(block) if block.kind == BlockKind::Curly => {
                return AtRule {
                    at_keyword,
                    lower_keyword,
                    prelude,
                    block: Some(block.into()),
                    semicolon: None,
                };
            }

            // "anything else"
            // "Reconsume the current input token. Consume a component value.
            // Append the returned value to the at-rule's prelude."
            value => prelude.push(value),
        }
    }

    // "<EOF-token>"
    // "This is a parse error. Return the at-rule."
    AtRule {
        at_keyword,
        lower_keyword,
        prelude,
        block: None,
        semicolon: None,
    }
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
fn consume_qualified_rule(first: ComponentValue, input: &mut IntoIter<ComponentValue>) -> TopLevelItem {
    // "Create a new qualified rule with its prelude initially set to an empty list,
    // and its value initially set to nothing."
    let mut prelude = vec![first];

    for value in input.by_ref() {
        match value {
            // "<{-token>"
            // "Consume a simple block and assign it to the qualified rule's block.
            // Return the qualified rule."
            ComponentValue::Block(block) if block.kind == BlockKind::Curly => {
                return TopLevelItem::QualifiedRule(QualifiedRule { prelude, block });
            }

            // "anything else"
            // "Reconsume the current input token. Consume a component value.
            // Append the returned value to the qualified rule's prelude."
            value => prelude.push(value),
        }
    }

    // "<EOF-token>"
    // "This is a parse error. Return nothing."
    // The error points at the last thing consumed before the input ran out.
    let location = prelude
        .iter()
        .rev()
        .find_map(ComponentValue::location)
        .unwrap_or(SourceLocation::new(1, 1));

    TopLevelItem::ParseError(ParseError {
        message: EOF_IN_QUALIFIED_RULE.to_string(),
        location,
        values: prelude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclosed_block_has_no_close_token() {
        let values = parse_component_values("a { b");
        let Some(ComponentValue::Block(block)) = values.last() else {
            panic!("Expected trailing block, got {values:?}");
        };
        assert_eq!(block.kind, BlockKind::Curly);
        assert!(block.close.is_none());
        assert_eq!(block.content.len(), 2);
    }

    #[test]
    fn test_stray_closing_bracket_is_kept_as_token() {
        let values = parse_component_values("a ) b");
        assert_eq!(values.len(), 5);
        assert!(matches!(
            values[2].as_token().map(|t| &t.kind),
            Some(TokenKind::RightParen)
        ));
    }

    #[test]
    fn test_function_nests_blocks() {
        let values = parse_component_values(":not([a], .b)");
        let Some(ComponentValue::Function(function)) = values.get(1) else {
            panic!("Expected function, got {values:?}");
        };
        assert!(matches!(&function.name.kind, TokenKind::Function(name) if name == "not"));
        assert!(matches!(function.arguments[0], ComponentValue::Block(_)));
        assert!(function.close.is_some());
    }

    #[test]
    fn test_cdo_cdc_skipped_only_at_top_level() {
        let top = parse_stylesheet("<!-- a{} -->");
        assert_eq!(top.len(), 3);
        assert!(matches!(top[0], TopLevelItem::Whitespace(_)));
        assert!(matches!(top[1], TopLevelItem::QualifiedRule(_)));

        let nested = parse_rule_list(parse_component_values("<!-- a{}"));
        assert!(matches!(&nested[0], TopLevelItem::QualifiedRule(rule) if rule.prelude.len() == 3));
    }
}
