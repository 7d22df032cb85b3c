//! Scoping a whole stylesheet, from bytes to bytes.

use cssscope_syntax::{
    TopLevelItem, encode_stylesheet, lookup_encoding, parse_stylesheet, parse_stylesheet_bytes,
    serialize,
};
use encoding_rs::Encoding;

use crate::error::ScopeError;
use crate::walker::{Diagnostic, NestingAtRule, UNKNOWN_SOURCE, Walker};

/// Scope every rule of the stylesheet `css` to `class_name`.
///
/// The bytes are decoded as a browser would (BOM, then `@charset`, then
/// UTF-8) and the result is encoded back the same way. Parse errors become
/// comments naming `source_name`, or `<unknown-file>` when it is `None`.
#[must_use]
pub fn scope_all_rules_bytes(css: &[u8], class_name: &str, source_name: Option<&str>) -> Vec<u8> {
    let (items, encoding) = parse_stylesheet_bytes(css, None, None);
    let items = Walker::new(class_name, source_name.unwrap_or(UNKNOWN_SOURCE)).rewrite_all(items);
    encode_stylesheet(&serialize(&items), encoding)
}

/// Options for building a [`Scoper`].
#[derive(Debug, Clone)]
pub struct ScopeOptions {
    class_name: String,
    source_name: Option<String>,
    protocol_encoding: Option<String>,
    environment_encoding: Option<String>,
    nesting_at_rules: Vec<NestingAtRule>,
}

impl ScopeOptions {
    /// Options scoping to `class_name`, with everything else defaulted.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            source_name: None,
            protocol_encoding: None,
            environment_encoding: None,
            nesting_at_rules: NestingAtRule::ALL.to_vec(),
        }
    }

    /// Name of the stylesheet in diagnostics.
    #[must_use]
    pub fn source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    /// Encoding label supplied out of band, e.g. by a `Content-Type` header.
    /// It overrides `@charset`, but not a BOM.
    #[must_use]
    pub fn protocol_encoding(mut self, label: impl Into<String>) -> Self {
        self.protocol_encoding = Some(label.into());
        self
    }

    /// Encoding label of the referring document, used when neither the
    /// protocol nor the stylesheet names one.
    #[must_use]
    pub fn environment_encoding(mut self, label: impl Into<String>) -> Self {
        self.environment_encoding = Some(label.into());
        self
    }

    /// Replace the set of at-rules whose blocks are scoped.
    #[must_use]
    pub fn nesting_at_rules(
        mut self,
        nesting_at_rules: impl IntoIterator<Item = NestingAtRule>,
    ) -> Self {
        self.nesting_at_rules = nesting_at_rules.into_iter().collect();
        self
    }

    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::EmptyClassName`] for an empty class name and
    /// [`ScopeError::Encoding`] for an encoding label that names no encoding.
    pub fn build(self) -> Result<Scoper, ScopeError> {
        if self.class_name.is_empty() {
            return Err(ScopeError::EmptyClassName);
        }
        let protocol_encoding = self.protocol_encoding.as_deref().map(lookup_encoding).transpose()?;
        let environment_encoding = self
            .environment_encoding
            .as_deref()
            .map(lookup_encoding)
            .transpose()?;

        Ok(Scoper {
            class_name: self.class_name,
            source_name: self.source_name.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            protocol_encoding,
            environment_encoding,
            nesting_at_rules: self.nesting_at_rules,
        })
    }
}

/// The result of [`Scoper::scope_bytes`].
#[derive(Debug, Clone)]
pub struct ScopeOutput {
    /// The scoped stylesheet, encoded like the input.
    pub css: Vec<u8>,
    /// The encoding of `css`.
    ///
    /// This is the output encoding of [`Self::input_encoding`], which differs
    /// from it only for encodings that cannot be written, such as UTF-16.
    pub encoding: &'static Encoding,
    /// The encoding the input was decoded with.
    pub input_encoding: &'static Encoding,
    /// Parse errors that were turned into comments.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scopes stylesheets with a validated set of [`ScopeOptions`].
#[derive(Debug, Clone)]
pub struct Scoper {
    class_name: String,
    source_name: String,
    protocol_encoding: Option<&'static Encoding>,
    environment_encoding: Option<&'static Encoding>,
    nesting_at_rules: Vec<NestingAtRule>,
}

impl Scoper {
    /// The class every selector is scoped to.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Scope a stylesheet given as bytes.
    #[must_use]
    pub fn scope_bytes(&self, css: &[u8]) -> ScopeOutput {
        let (items, input_encoding) =
            parse_stylesheet_bytes(css, self.protocol_encoding, self.environment_encoding);
        let (items, diagnostics) = self.rewrite(items);
        ScopeOutput {
            css: encode_stylesheet(&serialize(&items), input_encoding),
            encoding: input_encoding.output_encoding(),
            input_encoding,
            diagnostics,
        }
    }

    /// Scope a stylesheet that is already text.
    #[must_use]
    pub fn scope_str(&self, css: &str) -> (String, Vec<Diagnostic>) {
        let (items, diagnostics) = self.rewrite(parse_stylesheet(css));
        (serialize(&items), diagnostics)
    }

    /// Scope an already parsed rule list.
    #[must_use]
    pub fn scope_items(&self, items: Vec<TopLevelItem>) -> (Vec<TopLevelItem>, Vec<Diagnostic>) {
        self.rewrite(items)
    }

    fn rewrite(&self, items: Vec<TopLevelItem>) -> (Vec<TopLevelItem>, Vec<Diagnostic>) {
        let mut walker = Walker::new(&self.class_name, &self.source_name)
            .with_nesting_at_rules(&self.nesting_at_rules);
        let items = walker.rewrite_all(items);
        (items, walker.into_diagnostics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssscope_syntax::EncodingError;

    #[test]
    fn test_empty_class_name_rejected() {
        assert_eq!(ScopeOptions::new("").build().err(), Some(ScopeError::EmptyClassName));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let error = ScopeOptions::new("c").protocol_encoding("klingon").build().err();
        assert_eq!(
            error,
            Some(ScopeError::Encoding(EncodingError::UnknownLabel("klingon".to_string())))
        );
        assert_eq!(
            error.as_ref().map(ToString::to_string).as_deref(),
            Some("unknown encoding label 'klingon'")
        );
    }

    #[test]
    fn test_scope_str_collects_diagnostics() {
        let scoper = ScopeOptions::new("c").source_name("x.css").build();
        let Ok(scoper) = scoper else {
            panic!("Expected valid options");
        };
        let (css, diagnostics) = scoper.scope_str("a{} b");
        assert_eq!(css, ".c a{} /*<parse-error> at x.css:1:5*/");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(scoper.class_name(), "c");
    }

    #[test]
    fn test_protocol_encoding_is_used() {
        let Ok(scoper) = ScopeOptions::new("c").protocol_encoding("latin1").build() else {
            panic!("Expected valid options");
        };
        let output = scoper.scope_bytes(b"a{content:\"\xe9\"}");
        assert_eq!(output.encoding, encoding_rs::WINDOWS_1252);
        assert_eq!(output.css, b".c a{content:\"\xe9\"}".to_vec());
    }

    #[test]
    fn test_utf16_input_is_written_as_utf8() {
        let Ok(scoper) = ScopeOptions::new("c").build() else {
            panic!("Expected valid options");
        };
        let output = scoper.scope_bytes(b"\xff\xfea\x00{\x00}\x00");
        assert_eq!(output.css, b".c a{}".to_vec());
        assert_eq!(output.input_encoding, encoding_rs::UTF_16LE);
        assert_eq!(output.encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_infallible_entry_point_uses_placeholder() {
        assert_eq!(
            scope_all_rules_bytes(b"asd,", "c", None),
            b"/*<parse-error> at <unknown-file>:1:4*/".to_vec()
        );
    }
}
