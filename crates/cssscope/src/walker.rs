//! Applying the selector rewrite to a whole rule list.

use cssscope_syntax::{
    AtRule, BlockContent, ParseError, QualifiedRule, Token, TopLevelItem, parse_rule_list,
};
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::rewrite::rewrite_selector;
use crate::selector::{join, split};

/// Source name used in diagnostics when the caller does not supply one.
pub const UNKNOWN_SOURCE: &str = "<unknown-file>";

/// At-rules whose block holds a rule list that is scoped as well.
///
/// Parsed ASCII case-insensitively from the keyword without its `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NestingAtRule {
    /// [Media Queries § 3](https://www.w3.org/TR/mediaqueries-4/#media-query)
    Media,
    /// [CSS Conditional § 6 Feature queries](https://www.w3.org/TR/css-conditional-3/#at-supports)
    Supports,
    /// [CSS Cascade 5 § 6.4 Cascade layers](https://www.w3.org/TR/css-cascade-5/#layering)
    Layer,
    /// [CSS Containment 3 § 3 Container queries](https://www.w3.org/TR/css-contain-3/#container-rule)
    Container,
}

impl NestingAtRule {
    /// Every nesting at-rule. This is the default set.
    pub const ALL: &'static [Self] = &[Self::Media, Self::Supports, Self::Layer, Self::Container];
}

/// A parse error turned into a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Source name of the stylesheet.
    pub source_name: String,
    /// 1-based line of the error.
    pub line: usize,
    /// 1-based column of the error.
    pub column: usize,
    /// What the parser reported.
    pub message: String,
}

impl Diagnostic {
    /// Text of the comment that replaces the error in the output.
    #[must_use]
    pub fn comment_text(&self) -> String {
        format!("<parse-error> at {}:{}:{}", self.source_name, self.line, self.column)
    }
}

/// Walks a rule list, scoping every style rule to one class.
///
/// Rules inside the nesting at-rules are scoped too, recursively. Parse errors
/// become comments and are recorded as [`Diagnostic`]s.
#[derive(Debug)]
pub struct Walker<'a> {
    class_name: &'a str,
    source_name: &'a str,
    nesting_at_rules: &'a [NestingAtRule],
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Walker<'a> {
    /// Create a walker that scopes to `class_name`, descending into every
    /// [`NestingAtRule`].
    #[must_use]
    pub const fn new(class_name: &'a str, source_name: &'a str) -> Self {
        Self {
            class_name,
            source_name,
            nesting_at_rules: NestingAtRule::ALL,
            diagnostics: Vec::new(),
        }
    }

    /// Only descend into the given at-rules.
    #[must_use]
    pub const fn with_nesting_at_rules(mut self, nesting_at_rules: &'a [NestingAtRule]) -> Self {
        self.nesting_at_rules = nesting_at_rules;
        self
    }

    /// Diagnostics recorded so far, in source order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the walker, returning its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Rewrite every item of a rule list. Items keep their order and there
    /// is exactly one output item per input item.
    pub fn rewrite_all(&mut self, items: Vec<TopLevelItem>) -> Vec<TopLevelItem> {
        items.into_iter().map(|item| self.rewrite_item(item)).collect()
    }

    fn rewrite_item(&mut self, item: TopLevelItem) -> TopLevelItem {
        match item {
            TopLevelItem::QualifiedRule(rule) => {
                TopLevelItem::QualifiedRule(self.scope_qualified_rule(rule))
            }
            TopLevelItem::AtRule(rule) => TopLevelItem::AtRule(self.rewrite_at_rule(rule)),
            TopLevelItem::ParseError(error) => TopLevelItem::Comment(self.report(&error)),
            item @ (TopLevelItem::Comment(_) | TopLevelItem::Whitespace(_)) => item,
        }
    }

    fn scope_qualified_rule(&self, mut rule: QualifiedRule) -> QualifiedRule {
        let selectors = split(&rule.prelude)
            .map(|selector| rewrite_selector(selector, self.class_name))
            .collect::<Vec<_>>();
        rule.prelude = join(selectors);
        rule
    }

    /// Recurse into the block of a nesting at-rule. The prelude is never
    /// touched, and neither is any other at-rule.
    fn rewrite_at_rule(&mut self, mut rule: AtRule) -> AtRule {
        if !self.is_nesting(&rule.lower_keyword) {
            return rule;
        }

        if let Some(block) = rule.block.as_mut() {
            let items = match std::mem::replace(&mut block.content, BlockContent::Rules(Vec::new()))
            {
                BlockContent::Values(values) => parse_rule_list(values),
                BlockContent::Rules(items) => items,
            };
            block.content = BlockContent::Rules(self.rewrite_all(items));
        }
        rule
    }

    fn is_nesting(&self, lower_keyword: &str) -> bool {
        lower_keyword
            .parse::<NestingAtRule>()
            .is_ok_and(|keyword| self.nesting_at_rules.contains(&keyword))
    }

    /// Record `error` and build the comment that replaces it.
    fn report(&mut self, error: &ParseError) -> Token {
        let diagnostic = Diagnostic {
            source_name: self.source_name.to_string(),
            line: error.location.line,
            column: error.location.column,
            message: error.message.clone(),
        };
        let comment = Token::comment(diagnostic.comment_text());
        self.diagnostics.push(diagnostic);
        comment
    }
}

/// Scope every rule of `items` to `class_name`, descending into all nesting
/// at-rules. Diagnostics are discarded.
#[must_use]
pub fn rewrite_all(
    items: Vec<TopLevelItem>,
    class_name: &str,
    source_name: &str,
) -> Vec<TopLevelItem> {
    Walker::new(class_name, source_name).rewrite_all(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssscope_syntax::{parse_stylesheet, serialize};

    fn scope(css: &str) -> String {
        serialize(&rewrite_all(parse_stylesheet(css), "c", UNKNOWN_SOURCE))
    }

    #[test]
    fn test_nesting_at_rule_parsing() {
        assert_eq!("media".parse::<NestingAtRule>(), Ok(NestingAtRule::Media));
        assert_eq!("LAYER".parse::<NestingAtRule>(), Ok(NestingAtRule::Layer));
        assert!("import".parse::<NestingAtRule>().is_err());
        assert_eq!(NestingAtRule::Container.to_string(), "container");
        let name: &'static str = NestingAtRule::Supports.into();
        assert_eq!(name, "supports");
    }

    #[test]
    fn test_qualified_rule() {
        assert_eq!(scope("a, b {x: y}"), ".c a, .c b {x: y}");
    }

    #[test]
    fn test_block_is_not_touched() {
        assert_eq!(scope("a { b {} }"), ".c a { b {} }");
    }

    #[test]
    fn test_nested_at_rules() {
        assert_eq!(
            scope("@supports (x) { @media screen { a {} } }"),
            "@supports (x) { @media screen { .c a {} } }"
        );
        assert_eq!(scope("@LAYER base { a {} }"), "@LAYER base { .c a {} }");
        assert_eq!(scope("@container (width > 1px) { a {} }"), "@container (width > 1px) { .c a {} }");
    }

    #[test]
    fn test_other_at_rules_untouched() {
        assert_eq!(scope("@font-face { a {} }"), "@font-face { a {} }");
        assert_eq!(scope("@layer a, b;"), "@layer a, b;");
    }

    #[test]
    fn test_restricted_nesting_set() {
        let items = parse_stylesheet("@media print { a {} } @supports (x) { a {} }");
        let mut walker = Walker::new("c", UNKNOWN_SOURCE).with_nesting_at_rules(&[NestingAtRule::Media]);
        assert_eq!(
            serialize(&walker.rewrite_all(items)),
            "@media print { .c a {} } @supports (x) { a {} }"
        );
    }

    #[test]
    fn test_parse_errors_become_comments_and_diagnostics() {
        let items = parse_stylesheet("@media print { a {} b, }\nc,");
        let mut walker = Walker::new("c", "style.css");
        let output = serialize(&walker.rewrite_all(items));
        assert_eq!(
            output,
            "@media print { .c a {} /*<parse-error> at style.css:1:23*/}\n/*<parse-error> at style.css:2:2*/"
        );
        let diagnostics = walker.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!((diagnostics[0].line, diagnostics[0].column), (1, 23));
        assert_eq!(diagnostics[1].source_name, "style.css");
    }

    #[test]
    fn test_rewriting_twice_scopes_twice() {
        let once = rewrite_all(parse_stylesheet("@media x { a {} }"), "c", UNKNOWN_SOURCE);
        let twice = rewrite_all(once, "c", UNKNOWN_SOURCE);
        assert_eq!(serialize(&twice), "@media x { .c .c a {} }");
    }
}
