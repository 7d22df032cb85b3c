//! Locating combinators inside a single selector.
//!
//! A selector here is a run of component values, never a parsed selector
//! tree: whitespace and comments are tokens of their own, and anything
//! that is not a combinator is opaque.

use cssscope_syntax::ComponentValue;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The explicit combinator spelled by `value`, if it is one.
    ///
    /// Never returns [`Combinator::Descendant`]; that one is only ever implied
    /// by whitespace.
    #[must_use]
    pub fn from_component_value(value: &ComponentValue) -> Option<Self> {
        let token = value.as_token()?;
        if token.is_literal(">") {
            Some(Self::Child)
        } else if token.is_literal("+") {
            Some(Self::NextSibling)
        } else if token.is_literal("~") {
            Some(Self::SubsequentSibling)
        } else {
            None
        }
    }
}

/// Where the first combinator after the start of a selector sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinatorPosition {
    /// Index of the explicit combinator token, or for a descendant
    /// combinator, of the first token after the whitespace.
    pub index: usize,
    /// Whether whitespace appeared between the start and `index`.
    pub leading_whitespace: bool,
    /// Which combinator was found.
    pub combinator: Combinator,
}

/// Index of the first value that is neither whitespace nor a comment.
///
/// `None` for an empty selector or one made only of trivia.
#[must_use]
pub fn first_semantic_index(selector: &[ComponentValue]) -> Option<usize> {
    selector.iter().position(|value| !value.is_trivia())
}

/// Find the next combinator in `selector`, scanning from the start.
///
/// An explicit `>`, `+` or `~` is returned as soon as it is seen. Otherwise
/// whitespace followed by anything that is not a comment is a descendant
/// combinator, reported at the index of that following value. Comments never
/// end a scan and never count as whitespace, so `a/**/b` has no combinator.
#[must_use]
pub fn next_combinator(selector: &[ComponentValue]) -> Option<CombinatorPosition> {
    let mut leading_whitespace = false;

    for (index, value) in selector.iter().enumerate() {
        if let Some(combinator) = Combinator::from_component_value(value) {
            return Some(CombinatorPosition {
                index,
                leading_whitespace,
                combinator,
            });
        }

        match value.as_token() {
            Some(token) if token.is_whitespace() => leading_whitespace = true,
            Some(token) if token.is_comment() => {}
            _ if leading_whitespace => {
                return Some(CombinatorPosition {
                    index,
                    leading_whitespace,
                    combinator: Combinator::Descendant,
                });
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssscope_syntax::parse_component_values;

    fn position(selector: &str) -> Option<(usize, bool, Combinator)> {
        next_combinator(&parse_component_values(selector)).map(|found| {
            (found.index, found.leading_whitespace, found.combinator)
        })
    }

    #[test]
    fn test_first_semantic_index_skips_trivia() {
        let values = parse_component_values("/**/ /**//**/ a");
        assert_eq!(first_semantic_index(&values), Some(5));
        assert_eq!(first_semantic_index(&parse_component_values(" /**/ ")), None);
        assert_eq!(first_semantic_index(&[]), None);
    }

    #[test]
    fn test_explicit_combinators() {
        assert_eq!(position("html>*"), Some((1, false, Combinator::Child)));
        assert_eq!(position("html + a"), Some((2, true, Combinator::NextSibling)));
        assert_eq!(position("html~a"), Some((1, false, Combinator::SubsequentSibling)));
    }

    #[test]
    fn test_whitespace_implies_descendant() {
        assert_eq!(position("html *"), Some((2, true, Combinator::Descendant)));
    }

    #[test]
    fn test_comments_are_transparent() {
        // html, ws, comment, ws, comment, +
        assert_eq!(
            position("html /**/ /**/+ #id"),
            Some((5, true, Combinator::NextSibling))
        );
        assert_eq!(position("html/**/.a"), None);
    }

    #[test]
    fn test_no_combinator() {
        assert_eq!(position("html.a"), None);
        assert_eq!(position("html "), None);
        assert_eq!(position("html"), None);
    }

    #[test]
    fn test_function_after_whitespace_is_descendant() {
        assert_eq!(position("html :is(a)"), Some((2, true, Combinator::Descendant)));
    }
}
