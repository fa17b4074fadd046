//! # npp
//!
//! npp is a small interpreted language with keywords borrowed from Hindi
//! slang. This crate holds its whole pipeline: a lexer, a recursive-descent
//! parser producing an abstract syntax tree, and a tree-walking interpreter.
//!
//! ```text
//! sun number = 2;
//! suna number;
//! agar number >= 10 { suna "big" } magar { suna "small" }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::interpreter::{evaluator::core::Interpreter, parser::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and walked
/// by the evaluator.
///
/// # Responsibilities
/// - Defines closed enums for every statement and expression form.
/// - Attaches the source position of the originating token to every node.
/// - Renders trees back to source text through `Display`.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Every error carries the position it refers to and renders as a complete
/// diagnostic line, `Error at line L, col C: <message>`.
///
/// # Responsibilities
/// - Defines `ParseError` for malformed source and illegal characters.
/// - Defines `RuntimeError` for failures while a statement runs.
/// - Implements `std::error::Error` for both.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, values and the
/// variable environment.
pub mod interpreter;

/// Parses and runs a program, writing all output to `out`.
///
/// The whole source is parsed first. Parse diagnostics are written before the
/// program runs, followed by printed values and runtime diagnostics in the
/// order they occur. Neither kind of diagnostic stops the run.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
///
/// # Examples
/// ```
/// let source = r#"
///     sun number = 2;
///     suna number;
///     sun a = "hello ";
///     sun b = "world";
///     suna a + b;
/// "#;
///
/// let mut out = Vec::new();
/// npp::run(source, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2\nhello world\n");
///
/// // A bad statement is reported and skipped.
/// let mut out = Vec::new();
/// npp::run("suna ; suna 3", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "Error at line 1, col 6: Expected number, string, or identifier, got ;\n3\n");
/// ```
pub fn run<W: Write>(source: &str, out: &mut W) -> io::Result<()> {
    let (program, errors) = parse(source);
    for error in &errors {
        writeln!(out, "{error}")?;
    }

    Interpreter::new().interpret(&program, out)
}
