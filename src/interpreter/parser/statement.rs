use tracing::debug;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is one of:
    /// - a declaration, `sun <identifier> = <expression>`,
    /// - a print, `suna <expression>`,
    /// - a conditional, `agar <expression> { ... } magar { ... }`.
    ///
    /// The leading keyword selects the form. Any other token, including the
    /// reserved keywords, is rejected.
    ///
    /// # Errors
    /// Returns `InvalidStatement` (or `IllegalCharacter`) for a token that
    /// starts no statement, and propagates any error from the selected form.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let current = self.current();
        debug!(token = %current.kind,
               next = %self.peek().kind,
               line = current.position.line,
               column = current.position.column,
               "parsing statement");

        let (kind, position) = (current.kind, current.position);

        match kind {
            TokenKind::Sun => self.parse_assignment(),
            TokenKind::Suna => self.parse_print(),
            TokenKind::Agar => self.parse_if(),
            TokenKind::Illegal => Err(self.illegal_character()),
            found => Err(ParseError::InvalidStatement { found, position }),
        }
    }

    /// Parses a declaration statement.
    ///
    /// A declaration has the form `sun <identifier> = <expression>` and binds
    /// or rebinds the variable.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the identifier is missing,
    /// - `=` is missing,
    /// - the expression is malformed.
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let position = self.advance().position;

        let name = self.expect_identifier()?;
        self.expect_assign()?;
        let value = self.parse_expression()?;

        Ok(Statement::Assignment { name,
                                   value,
                                   position })
    }

    /// Parses `suna <expression>`.
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let position = self.advance().position;
        let value = self.parse_expression()?;

        Ok(Statement::Print { value, position })
    }

    /// Parses a conditional with an optional `magar` branch.
    ///
    /// Syntax:
    /// ```text
    ///     agar <condition> { <statements> }
    ///     agar <condition> { <statements> } magar { <statements> }
    /// ```
    /// Semicolons between the consequence and `magar` are skipped.
    ///
    /// # Errors
    /// - `ExpectedOpeningBrace` if a branch does not start with `{`.
    /// - `UnclosedBlock` if a branch is not closed.
    /// - Propagates any errors from condition parsing.
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let position = self.advance().position;

        let condition = self.parse_expression()?;
        let consequence = self.parse_block("condition")?;

        self.skip_semicolons();
        let alternative = if self.current().kind == TokenKind::Magar {
            self.advance();
            Some(self.parse_block("magar")?)
        } else {
            None
        };

        Ok(Statement::If { condition,
                           consequence,
                           alternative,
                           position })
    }
}
