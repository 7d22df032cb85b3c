//! Errors from configuring a [`crate::Scoper`].

use cssscope_syntax::EncodingError;
use thiserror::Error;

/// Why a set of [`crate::ScopeOptions`] was rejected.
///
/// Scoping itself cannot fail; only its configuration can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The class name was empty.
    #[error("class name must not be empty")]
    EmptyClassName,

    /// An encoding label was not recognised.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
