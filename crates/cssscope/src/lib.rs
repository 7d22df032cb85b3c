//! Selector scoping for stylesheets.
//!
//! Rewrites every selector of a stylesheet so that it only matches inside an
//! element carrying one class, leaving all other text byte for byte as it was.
//!
//! ```
//! let css = cssscope::scope_all_rules_bytes(b"body.dark a, p {}", "widget", None);
//! assert_eq!(css, b".widget.dark a, .widget p {}");
//! ```
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector lists** ([§ 4.1 Selector Lists](https://www.w3.org/TR/selectors-4/#grouping))
//!   - Splitting a rule prelude at its commas and joining it back
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Explicit `>`, `+` and `~`, and the descendant combinator implied by whitespace
//!   - Comments are transparent
//!
//! - **Selector rewriting**
//!   - Plain selectors get the class as an ancestor
//!   - `html` selectors get the class after the root element
//!   - `body` selectors have the body element replaced by the class
//!
//! - **Rule lists**
//!   - `@media`, `@supports`, `@layer` and `@container` blocks are scoped recursively
//!   - Parse errors become comments and [`Diagnostic`]s
//!
//! # Not Implemented
//!
//! - Selector validation; selectors are token runs, never parsed selector trees
//! - Deduplication: scoping already scoped CSS adds the class again
//! - Scoping inside CSS nesting (style rules within style rule blocks)

/// Combinator lookup within one selector.
pub mod combinator;
/// Configuration errors.
pub mod error;
/// Scoping of a single selector.
pub mod rewrite;
/// Whole-stylesheet entry points.
pub mod scope;
/// Splitting and joining selector lists.
pub mod selector;
/// Rule list traversal.
pub mod walker;

// Re-exports for convenience
pub use combinator::{Combinator, CombinatorPosition, first_semantic_index, next_combinator};
pub use error::ScopeError;
pub use rewrite::{BODY_ELEMENT, ROOT_ELEMENT, SelectorKind, rewrite_selector};
pub use scope::{ScopeOptions, ScopeOutput, Scoper, scope_all_rules_bytes};
pub use selector::{Selectors, join, split};
pub use walker::{Diagnostic, NestingAtRule, UNKNOWN_SOURCE, Walker, rewrite_all};
