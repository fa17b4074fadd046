use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a plain identifier and returns its name.
    ///
    /// Keywords are not identifiers, so `sun suna = 1` fails here.
    ///
    /// # Errors
    /// Returns `ExpectedIdentifier` if the token under the cursor is not an
    /// identifier.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self) -> ParseResult<String> {
        let current = self.current();
        if current.kind != TokenKind::Identifier {
            return Err(ParseError::ExpectedIdentifier { found:    current.kind,
                                                        position: current.position, });
        }
        Ok(self.advance().literal)
    }

    /// Consumes the `=` of a declaration.
    pub(in crate::interpreter::parser) fn expect_assign(&mut self) -> ParseResult<()> {
        let current = self.current();
        if current.kind != TokenKind::Assign {
            return Err(ParseError::ExpectedAssign { found:    current.kind,
                                                    position: current.position, });
        }
        self.advance();
        Ok(())
    }

    /// Skips any run of `;` tokens.
    pub(in crate::interpreter::parser) fn skip_semicolons(&mut self) {
        while self.current().kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Builds the diagnostic for an `Illegal` token under the cursor.
    pub(in crate::interpreter::parser) fn illegal_character(&self) -> ParseError {
        let current = self.current();
        ParseError::IllegalCharacter { literal:  current.literal.clone(),
                                       position: current.position, }
    }
}
