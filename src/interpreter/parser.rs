/// Parses a `{ ... }` delimited block of statements.
///
/// Also hosts the statement-list loop shared by blocks and the program root,
/// which records parse failures and resynchronizes.
pub mod block;

/// Parses binary expressions by precedence climbing.
///
/// Maps tokens to operators, assigns each operator its precedence level and
/// builds left-associative `Expr::Binary` trees.
pub mod binary;

/// Core parsing routines.
///
/// Declares the `Parser` itself, the entry points for whole programs and for
/// expressions, and the token cursor.
pub mod core;

/// Parses statements.
///
/// Dispatches on the leading keyword to declarations, prints and
/// conditionals.
pub mod statement;

/// Parses unary and primary expressions.
///
/// Handles literals, identifiers and a leading minus on an integer literal.
pub mod unary;

/// Utility functions for the parser.
///
/// Helpers for expecting specific tokens and skipping optional semicolons.
pub mod utils;

pub use self::core::{ParseResult, Parser};
use crate::{ast::Program, error::ParseError, interpreter::lexer::Lexer};

/// Parses a whole source string.
///
/// Returns the program made of every well-formed statement together with the
/// diagnostics for the statements that were skipped, in source order.
///
/// # Example
/// ```
/// use npp::interpreter::parser::parse;
///
/// let (program, errors) = parse("sun x = 1; suna x; sun = 2");
/// assert_eq!(program.statements.len(), 2);
/// assert!(!errors.is_empty());
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}
