use std::mem;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::binary::Precedence,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a lazily pulled token stream.
///
/// The parser holds the current token and one token of lookahead. Parse
/// failures never abort the run: each one is recorded as a diagnostic, the
/// offending token is skipped and parsing carries on with the next statement.
pub struct Parser<'src> {
    lexer:       Lexer<'src>,
    current:     Token,
    peek:        Token,
    diagnostics: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes the current and lookahead tokens.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               current,
               peek,
               diagnostics: Vec::new() }
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Malformed statements are left out of the program; their diagnostics are
    /// available from [`Parser::diagnostics`] afterwards.
    ///
    /// # Example
    /// ```
    /// use npp::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("suna 1 + 2;;; suna \"hi\""));
    /// let program = parser.parse_program();
    ///
    /// assert_eq!(program.statements.len(), 2);
    /// assert!(parser.diagnostics().is_empty());
    /// ```
    pub fn parse_program(&mut self) -> Program {
        let statements = self.parse_statement_list(TokenKind::Eof);
        debug!(statements = statements.len(),
               errors = self.diagnostics.len(),
               "parsed program");
        Program { statements }
    }

    /// Parses a full expression, starting at the lowest precedence.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_binary(Precedence::Lowest)
    }

    /// Diagnostics recorded so far, in the order they were found.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    /// Consumes the parser and returns its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseError> {
        self.diagnostics
    }

    /// The token under the cursor.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// The token after the cursor.
    pub(in crate::interpreter::parser) const fn peek(&self) -> &Token {
        &self.peek
    }

    /// Moves the cursor one token forward and returns the token it left.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let next = mem::replace(&mut self.peek, self.lexer.next_token());
        mem::replace(&mut self.current, next)
    }

    /// Records a diagnostic and skips the token under the cursor.
    pub(in crate::interpreter::parser) fn recover(&mut self, error: ParseError) {
        debug!(%error, skipped = %self.current.kind, "resynchronizing after parse error");
        self.diagnostics.push(error);
        self.advance();
    }
}
