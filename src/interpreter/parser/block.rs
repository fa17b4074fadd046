use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block of statements delimited by braces.
    ///
    /// The cursor must be on the opening `{`; `after` names what precedes the
    /// block for the diagnostic when it is not. On success the closing `}` is
    /// consumed.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// - `ExpectedOpeningBrace` if the block does not start with `{`.
    /// - `UnclosedBlock` if the input ends before the matching `}`.
    pub(in crate::interpreter::parser) fn parse_block(&mut self,
                                                      after: &'static str)
                                                      -> ParseResult<Block> {
        let open = self.current();
        if open.kind != TokenKind::LBrace {
            return Err(ParseError::ExpectedOpeningBrace { after,
                                                          found: open.kind,
                                                          position: open.position });
        }
        let position = open.position;
        self.advance();

        let statements = self.parse_statement_list(TokenKind::RBrace);

        let close = self.current();
        if close.kind != TokenKind::RBrace {
            return Err(ParseError::UnclosedBlock { found:    close.kind,
                                                   position: close.position, });
        }
        self.advance();

        Ok(Block { statements, position })
    }

    /// Parses statements until `terminator` or the end of input, without
    /// consuming the terminator.
    ///
    /// Semicolons are skipped before and after every statement. A statement
    /// that fails to parse is reported, the token under the cursor is skipped,
    /// and parsing resumes.
    pub(in crate::interpreter::parser) fn parse_statement_list(&mut self,
                                                               terminator: TokenKind)
                                                               -> Vec<Statement> {
        let mut statements = Vec::new();

        loop {
            self.skip_semicolons();

            let kind = self.current().kind;
            if kind == terminator || kind == TokenKind::Eof {
                break;
            }

            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.recover(error),
            }
        }

        statements
    }
}
