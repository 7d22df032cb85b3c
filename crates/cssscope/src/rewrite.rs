//! Rewriting one selector so it only matches inside the scoping class.
//!
//! Selectors are scoped by putting the class in front of them as an ancestor
//! (`a` becomes `.scope a`), with two exceptions for the elements that can
//! never be inside the scoping element:
//!
//! - `html ...` keeps the root element first and puts the class right after
//!   it (`html > a` becomes `html .scope > a`). A lone `html` is left alone.
//! - `body ...` has the body element replaced by the class
//!   (`body.dark a` becomes `.scope.dark a`).

use cssscope_syntax::{ComponentValue, Token};

use crate::combinator::{first_semantic_index, next_combinator};

/// Tag name of the document's root element.
pub const ROOT_ELEMENT: &str = "html";

/// Tag name of the document's body element.
pub const BODY_ELEMENT: &str = "body";

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// "The class selector is given as a full stop (. U+002E) immediately
/// followed by an identifier."
const CLASS_SELECTOR: &str = ".";

/// How a selector is scoped, decided by its first semantic token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Anything else: the class is prepended as an ancestor.
    Plain,
    /// Starts with the `html` type selector.
    RootElement,
    /// Starts with the `body` type selector.
    BodyElement,
}

impl SelectorKind {
    /// Classify a selector by its first semantic value.
    ///
    /// Type selectors are matched ASCII case-insensitively.
    #[must_use]
    pub fn of(first: &ComponentValue) -> Self {
        match first.as_token() {
            Some(token) if token.ident_matches(ROOT_ELEMENT) => Self::RootElement,
            Some(token) if token.ident_matches(BODY_ELEMENT) => Self::BodyElement,
            _ => Self::Plain,
        }
    }
}

/// Scope one selector to `class_name`.
///
/// Leading whitespace and comments are kept in front of the result. A
/// selector with nothing but trivia is returned as it is.
#[must_use]
pub fn rewrite_selector(selector: &[ComponentValue], class_name: &str) -> Vec<ComponentValue> {
    let Some(start) = first_semantic_index(selector) else {
        return selector.to_vec();
    };
    let (head, tail) = selector.split_at(start);

    let mut rewritten = head.to_vec();
    match SelectorKind::of(&tail[0]) {
        SelectorKind::Plain => {
            rewritten.extend(class_prefix(class_name));
            rewritten.extend_from_slice(tail);
        }
        SelectorKind::RootElement => rewritten.extend(rewrite_root_selector(tail, class_name)),
        SelectorKind::BodyElement => {
            rewritten.extend(class_selector(class_name));
            rewritten.extend_from_slice(&tail[1..]);
        }
    }
    rewritten
}

/// Insert the class before the first combinator after `html`.
///
/// `html>a` has no whitespace before its combinator, so a space is added in
/// front of the class as well: `html .scope >a`.
fn rewrite_root_selector(selector: &[ComponentValue], class_name: &str) -> Vec<ComponentValue> {
    let Some(found) = next_combinator(selector) else {
        return selector.to_vec();
    };

    let (before, after) = selector.split_at(found.index);
    let mut rewritten = before.to_vec();
    if !found.leading_whitespace {
        rewritten.push(space());
    }
    rewritten.extend(class_prefix(class_name));
    rewritten.extend_from_slice(after);
    rewritten
}

/// `.class_name`
fn class_selector(class_name: &str) -> [ComponentValue; 2] {
    [
        Token::literal(CLASS_SELECTOR).into(),
        Token::ident(class_name).into(),
    ]
}

/// `.class_name ` (a class selector and a descendant combinator)
fn class_prefix(class_name: &str) -> [ComponentValue; 3] {
    let [dot, ident] = class_selector(class_name);
    [dot, ident, space()]
}

fn space() -> ComponentValue {
    Token::whitespace(" ").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssscope_syntax::{parse_component_values, serialize_values};

    fn rewrite(selector: &str) -> String {
        serialize_values(&rewrite_selector(&parse_component_values(selector), "scope"))
    }

    #[test]
    fn test_selector_kind() {
        let kind = |text: &str| SelectorKind::of(&parse_component_values(text)[0]);
        assert_eq!(kind("html"), SelectorKind::RootElement);
        assert_eq!(kind("HTML"), SelectorKind::RootElement);
        assert_eq!(kind("Body"), SelectorKind::BodyElement);
        assert_eq!(kind("div"), SelectorKind::Plain);
        assert_eq!(kind("#html"), SelectorKind::Plain);
        assert_eq!(kind("html("), SelectorKind::Plain);
    }

    #[test]
    fn test_plain_selector() {
        assert_eq!(rewrite("a > b"), ".scope a > b");
        assert_eq!(rewrite(" /**/a"), " /**/.scope a");
        assert_eq!(rewrite("*"), ".scope *");
    }

    #[test]
    fn test_trivia_only_selector_is_unchanged() {
        assert_eq!(rewrite(""), "");
        assert_eq!(rewrite(" /* x */ "), " /* x */ ");
    }

    #[test]
    fn test_root_selector() {
        assert_eq!(rewrite("html *"), "html .scope *");
        assert_eq!(rewrite("html>*"), "html .scope >*");
        assert_eq!(rewrite("Html ~ a"), "Html .scope ~ a");
        assert_eq!(rewrite("html.a"), "html.a");
        assert_eq!(rewrite("html"), "html");
    }

    #[test]
    fn test_body_selector() {
        assert_eq!(rewrite("body"), ".scope");
        assert_eq!(rewrite("BODY.a > b"), ".scope.a > b");
        assert_eq!(rewrite("\tbody "), "\t.scope ");
    }

    #[test]
    fn test_class_name_is_escaped() {
        let values = parse_component_values("a");
        assert_eq!(serialize_values(&rewrite_selector(&values, "1st")), ".\\31 st a");
        assert_eq!(serialize_values(&rewrite_selector(&values, "a b")), ".a\\ b a");
    }
}
