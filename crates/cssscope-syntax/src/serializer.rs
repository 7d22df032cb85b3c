//! Serialization back to text.
//!
//! [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
//! allows any serialization that reparses to the same tokens. This one is
//! stricter: every token is written exactly as it was read, so a stylesheet
//! that was parsed and not modified serializes to its original text.

use crate::parser::{
    AtRule, BlockContent, ComponentValue, Function, ParseError, QualifiedRule, SimpleBlock,
    TopLevelItem,
};
use crate::tokenizer::Token;

/// Serialize a rule list.
#[must_use]
pub fn serialize(items: &[TopLevelItem]) -> String {
    let mut out = String::new();
    write_items(&mut out, items);
    out
}

/// Serialize a list of component values.
#[must_use]
pub fn serialize_values(values: &[ComponentValue]) -> String {
    let mut out = String::new();
    write_values(&mut out, values);
    out
}

fn write_items(out: &mut String, items: &[TopLevelItem]) {
    for item in items {
        match item {
            TopLevelItem::QualifiedRule(rule) => write_qualified_rule(out, rule),
            TopLevelItem::AtRule(rule) => write_at_rule(out, rule),
            TopLevelItem::Comment(token) | TopLevelItem::Whitespace(token) => {
                write_token(out, token);
            }
            TopLevelItem::ParseError(error) => write_parse_error(out, error),
        }
    }
}

fn write_qualified_rule(out: &mut String, rule: &QualifiedRule) {
    write_values(out, &rule.prelude);
    write_block(out, &rule.block);
}

fn write_at_rule(out: &mut String, rule: &AtRule) {
    write_token(out, &rule.at_keyword);
    write_values(out, &rule.prelude);
    if let Some(block) = &rule.block {
        write_token(out, &block.open);
        match &block.content {
            BlockContent::Values(values) => write_values(out, values),
            BlockContent::Rules(items) => write_items(out, items),
        }
        write_optional_token(out, block.close.as_ref());
    }
    write_optional_token(out, rule.semicolon.as_ref());
}

fn write_parse_error(out: &mut String, error: &ParseError) {
    write_values(out, &error.values);
}

fn write_values(out: &mut String, values: &[ComponentValue]) {
    for value in values {
        match value {
            ComponentValue::Token(token) => write_token(out, token),
            ComponentValue::Block(block) => write_block(out, block),
            ComponentValue::Function(function) => write_function(out, function),
        }
    }
}

fn write_block(out: &mut String, block: &SimpleBlock) {
    write_token(out, &block.open);
    write_values(out, &block.content);
    write_optional_token(out, block.close.as_ref());
}

fn write_function(out: &mut String, function: &Function) {
    write_token(out, &function.name);
    write_values(out, &function.arguments);
    write_optional_token(out, function.close.as_ref());
}

fn write_optional_token(out: &mut String, token: Option<&Token>) {
    if let Some(token) = token {
        write_token(out, token);
    }
}

fn write_token(out: &mut String, token: &Token) {
    out.push_str(&token.repr);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_component_values, parse_stylesheet};

    #[test]
    fn test_serialize_values_round_trip() {
        let input = "a:not([x='y'], .b) > c";
        assert_eq!(serialize_values(&parse_component_values(input)), input);
    }

    #[test]
    fn test_serialize_unclosed_constructs() {
        for input in ["a { b", "@media (x", "url(", "f(", "\"open"] {
            assert_eq!(serialize(&parse_stylesheet(input)), input);
        }
    }
}
