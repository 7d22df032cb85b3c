//! Integration tests for scoping whole stylesheets.

use cssscope::{NestingAtRule, ScopeOptions, scope_all_rules_bytes};

/// Helper to scope a stylesheet to `class` with no source name
fn scope(css: &str) -> String {
    let output = scope_all_rules_bytes(css.as_bytes(), "class", None);
    String::from_utf8(output).unwrap_or_else(|error| panic!("Expected UTF-8 output: {error}"))
}

/// Helper to check a list of (input, expected) pairs
fn assert_scoped(cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        assert_eq!(scope(input), *expected, "input: {input:?}");
    }
}

#[test]
fn test_basic() {
    assert_scoped(&[
        ("table {width: auto}", ".class table {width: auto}"),
        ("table.a:not(.table):hower {}", ".class table.a:not(.table):hower {}"),
        ("table td {}", ".class table td {}"),
    ]);
}

#[test]
fn test_multiple() {
    assert_scoped(&[
        ("{}", "{}"),
        ("table td, div * {width: auto}", ".class table td, .class div * {width: auto}"),
        (
            "div, div + div, div > div ~ div {}",
            ".class div, .class div + div, .class div > div ~ div {}",
        ),
    ]);
}

#[test]
fn test_comments() {
    assert_scoped(&[
        ("/**/ /**//**/ a {}", "/**/ /**//**/ .class a {}"),
        ("b/**/a {}", ".class b/**/a {}"),
        ("a,/**/b {}", ".class a,/**/.class b {}"),
        ("a,/**/ /**/b {}", ".class a,/**/ /**/.class b {}"),
    ]);
}

#[test]
fn test_root_element() {
    assert_scoped(&[
        ("html.a{}", "html.a{}"),
        ("/* comment */html{}", "/* comment */html{}"),
        ("div html.a{}", ".class div html.a{}"),
        ("html *{}", "html .class *{}"),
        ("html > asd{}", "html .class > asd{}"),
        ("html /**/ /**/+ #id{}", "html /**/ /**/.class + #id{}"),
        ("html>*{}", "html .class >*{}"),
        ("HTML body{}", "HTML .class body{}"),
    ]);
}

#[test]
fn test_body_element() {
    assert_scoped(&[
        ("body.a{}", ".class.a{}"),
        ("   /*comment*/   body{}", "   /*comment*/   .class{}"),
        ("div body{}", ".class div body{}"),
        ("body{}", ".class{}"),
    ]);
}

#[test]
fn test_nested_rules() {
    assert_scoped(&[
        ("@media print { .div {} }", "@media print { .class .div {} }"),
        (
            "@layer base { @supports (x: y) { a, html b {} } }",
            "@layer base { @supports (x: y) { .class a, html .class b {} } }",
        ),
    ]);
}

#[test]
fn test_ignored_at_rules() {
    assert_scoped(&[
        ("@import url(\"style.css\");", "@import url(\"style.css\");"),
        ("@font-face { font-family: a; }", "@font-face { font-family: a; }"),
        ("@keyframes k { from {} to {} }", "@keyframes k { from {} to {} }"),
    ]);
}

#[test]
fn test_parse_error_names_source() {
    let output = scope_all_rules_bytes(b"asd,", "class", Some("file"));
    assert_eq!(output, b"/*<parse-error> at file:1:4*/".to_vec());
}

#[test]
fn test_invalid() {
    assert_scoped(&[
        (
            "asd{}\n/*   */bsd,,",
            ".class asd{}\n/*   *//*<parse-error> at <unknown-file>:2:12*/",
        ),
        ("{} asd{}", "{} .class asd{}"),
        ("html +   {}", "html .class +   {}"),
        // The trailing empty selector after the last comma is dropped.
        (",,,{}", ",,{}"),
    ]);
}

#[test]
fn test_untouched_items_round_trip() {
    assert_scoped(&[
        ("", ""),
        ("  \n/* only a comment */\n", "  \n/* only a comment */\n"),
        ("@charset \"utf-8\";", "@charset \"utf-8\";"),
    ]);
}

#[test]
fn test_charset_encoding_round_trips() {
    let css = b"@charset \"iso-8859-1\";\na::after{content:\"\xe9\"}";
    let output = scope_all_rules_bytes(css, "class", None);
    assert_eq!(
        output,
        b"@charset \"iso-8859-1\";\n.class a::after{content:\"\xe9\"}".to_vec()
    );
}

#[test]
fn test_bom_is_dropped() {
    let output = scope_all_rules_bytes(b"\xef\xbb\xbfa{}", "class", None);
    assert_eq!(output, b".class a{}".to_vec());
}

#[test]
fn test_class_name_is_escaped() {
    let output = scope_all_rules_bytes(b"a{}", "2col", None);
    assert_eq!(output, b".\\32 col a{}".to_vec());
}

#[test]
fn test_class_name_outside_output_encoding_is_escaped() {
    let output = scope_all_rules_bytes(b"@charset \"latin1\";a{}", "\u{65e5}", None);
    assert_eq!(output, b"@charset \"latin1\";.\\65e5  a{}".to_vec());
}

#[test]
fn test_scoper_reports_diagnostics() {
    let Ok(scoper) = ScopeOptions::new("w")
        .source_name("site.css")
        .nesting_at_rules([NestingAtRule::Media])
        .build()
    else {
        panic!("Expected valid options");
    };

    let output = scoper.scope_bytes(b"@media x { a, }\n@supports (y) { b {} }\nc");
    assert_eq!(
        String::from_utf8_lossy(&output.css),
        "@media x { /*<parse-error> at site.css:1:14*/}\n@supports (y) { b {} }\n/*<parse-error> at site.css:3:1*/"
    );
    assert_eq!(output.encoding, encoding_rs::UTF_8);
    assert_eq!(output.input_encoding, encoding_rs::UTF_8);

    let report = serde_json::to_value(&output.diagnostics).unwrap_or_default();
    assert_eq!(
        report[1],
        serde_json::json!({
            "source_name": "site.css",
            "line": 3,
            "column": 1,
            "message": "EOF reached before {} block for a qualified rule.",
        })
    );
}
