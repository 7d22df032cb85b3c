//! cssscope command-line front end
//!
//! Reads a stylesheet, scopes every selector to one class and writes the
//! result. `-` stands for stdin or stdout.
//!
//! - cssscope --classname widget in.css out.css
//! - cat in.css | cssscope --classname widget - -

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cssscope::{Diagnostic, NestingAtRule, ScopeOptions};
use cssscope_common::warning::warn_once;
use owo_colors::OwoColorize;

/// Path argument meaning stdin or stdout.
const STDIO: &str = "-";

/// Source name used in diagnostics for stylesheets read from stdin.
const STDIN_SOURCE: &str = "<stdin>";

/// cssscope: scope every selector of a stylesheet to a container class
#[derive(Parser, Debug)]
#[command(name = "cssscope")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Scope a file
    cssscope --classname widget widget.css widget.scoped.css

    # Use stdin and stdout
    cat widget.css | cssscope --classname widget - -

    # Only descend into @media blocks
    cssscope --classname widget --nest media widget.css -

    # Decode as Latin-1 unless the file has a BOM, and keep a report
    cssscope --classname widget --encoding latin1 --report errors.json in.css out.css
"#)]
struct Cli {
    /// Stylesheet to read, or - for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the scoped stylesheet, or - for stdout
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Class every selector is scoped to
    #[arg(long, value_name = "NAME")]
    classname: String,

    /// Name of the stylesheet in parse error comments (default: the input path)
    #[arg(long, value_name = "NAME")]
    source_name: Option<String>,

    /// Encoding label to decode the input with; a BOM still wins
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// At-rule whose block is scoped too (repeatable; default: all of media, supports, layer, container)
    #[arg(long = "nest", value_name = "KEYWORD")]
    nest: Vec<NestingAtRule>,

    /// Write parse errors as JSON to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Do not print parse errors to stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(error) = run(&Cli::parse()) {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut options = ScopeOptions::new(&cli.classname)
        .source_name(cli.source_name.clone().unwrap_or_else(|| source_name(&cli.input)));
    if let Some(label) = &cli.encoding {
        options = options.protocol_encoding(label);
    }
    if !cli.nest.is_empty() {
        options = options.nesting_at_rules(cli.nest.iter().copied());
    }
    let scoper = options.build().context("invalid options")?;

    let css = read_input(&cli.input)?;
    let output = scoper.scope_bytes(&css);

    if !cli.quiet {
        report_to_stderr(&output.diagnostics);
    }
    if let Some(path) = &cli.report {
        write_report(path, &output.diagnostics)?;
    }
    write_output(&cli.output, &output.css)
}

/// The input path as shown in diagnostics.
fn source_name(input: &Path) -> String {
    if is_stdio(input) {
        STDIN_SOURCE.to_string()
    } else {
        input.display().to_string()
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if is_stdio(path) {
        let mut css = Vec::new();
        let _ = io::stdin()
            .read_to_end(&mut css)
            .context("failed to read stylesheet from stdin")?;
        Ok(css)
    } else {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn write_output(path: &Path, css: &[u8]) -> Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(css)
            .and_then(|()| stdout.flush())
            .context("failed to write stylesheet to stdout")
    } else {
        fs::write(path, css).with_context(|| format!("failed to write {}", path.display()))
    }
}

fn report_to_stderr(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        warn_once(
            "parse",
            &format!(
                "{}:{}:{}: {}",
                diagnostic.source_name, diagnostic.line, diagnostic.column, diagnostic.message
            ),
        );
    }
}

fn write_report(path: &Path, diagnostics: &[Diagnostic]) -> Result<()> {
    let json = serde_json::to_string_pretty(diagnostics).context("failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("failed to write report {}", path.display()))
}
