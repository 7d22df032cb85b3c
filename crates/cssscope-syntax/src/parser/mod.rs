//! CSS parser module.

/// Parsed stylesheet structures: component values, rules, parse errors.
pub mod ast;
/// CSS parser implementation per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod css_parser;

pub use ast::{
    AtRule, AtRuleBlock, BlockContent, BlockKind, ComponentValue, Function, ParseError,
    QualifiedRule, SimpleBlock, TopLevelItem,
};
pub use css_parser::{
    CSSParser, EOF_IN_QUALIFIED_RULE, parse_component_values, parse_rule_list, parse_stylesheet,
};
