//! Selector lists.
//!
//! [§ 4.1 Selector Lists](https://www.w3.org/TR/selectors-4/#grouping)
//!
//! "A comma-separated list of selectors represents the union of all elements
//! selected by each of the individual selectors in the list."
//!
//! A qualified rule's prelude is split into its selectors at top-level commas,
//! each selector is rewritten on its own, and the results are joined back with
//! a single comma between each pair.

use cssscope_syntax::{ComponentValue, Token};

/// The token text separating selectors in a selector list.
pub const SELECTOR_SEPARATOR: &str = ",";

/// The selectors of a prelude, in source order.
///
/// Each call to [`split`] starts a fresh scan; the cursor lives in the
/// iterator, never in the prelude.
#[derive(Debug, Clone)]
pub struct Selectors<'a> {
    prelude: &'a [ComponentValue],
    /// Index of the first component value not yet handed out.
    cursor: usize,
}

impl<'a> Iterator for Selectors<'a> {
    type Item = &'a [ComponentValue];

    fn next(&mut self) -> Option<Self::Item> {
        // Once the cursor reaches the end there are no more selectors, even
        // when the prelude ends on a comma.
        let rest = self
            .prelude
            .get(self.cursor..)
            .filter(|rest| !rest.is_empty())?;

        let end = rest
            .iter()
            .position(|value| value.is_literal(SELECTOR_SEPARATOR))
            .unwrap_or(rest.len());

        // Step over the comma as well.
        self.cursor += end + 1;
        Some(&rest[..end])
    }
}

/// Split `prelude` into its comma-separated selectors.
///
/// Selectors may be empty (`a,,b` has an empty middle selector), but a
/// prelude ending in a comma yields no empty selector after it: `a,` splits
/// into just `a`.
#[must_use]
pub const fn split(prelude: &[ComponentValue]) -> Selectors<'_> {
    Selectors {
        prelude,
        cursor: 0,
    }
}

/// Join `selectors` into a prelude, with one `,` token between each pair.
///
/// Joining no selectors gives an empty prelude.
#[must_use]
pub fn join<I>(selectors: I) -> Vec<ComponentValue>
where
    I: IntoIterator<Item = Vec<ComponentValue>>,
{
    let mut prelude = Vec::new();
    for (index, selector) in selectors.into_iter().enumerate() {
        if index > 0 {
            prelude.push(Token::literal(SELECTOR_SEPARATOR).into());
        }
        prelude.extend(selector);
    }
    prelude
}
