use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Position, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// The only prefix operator is `-`, and it must be followed directly by an
    /// integer literal. The pair folds into a single negative literal placed
    /// at the minus sign. Without a leading minus this delegates to
    /// [`Parser::parse_primary`].
    ///
    /// Grammar:
    /// ```text
    ///     unary := "-" INTEGER
    ///            | primary
    /// ```
    /// # Errors
    /// - `ExpectedNumber` if `-` is not followed by an integer literal.
    /// - `InvalidNumber` if the negated literal does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use npp::{ast::Expr, interpreter::{lexer::Lexer, parser::Parser}};
    ///
    /// let mut parser = Parser::new(Lexer::new("-42"));
    /// let expr = parser.parse_expression().unwrap();
    ///
    /// assert!(matches!(expr, Expr::Integer { value: -42, .. }));
    /// ```
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if self.current().kind != TokenKind::Minus {
            return self.parse_primary();
        }

        let position = self.advance().position;
        let current = self.current();
        if current.kind != TokenKind::Integer {
            return Err(ParseError::ExpectedNumber { found:    current.kind,
                                                    position: current.position, });
        }

        let literal = format!("-{}", current.literal);
        let value = parse_integer(&literal, position)?;
        self.advance();

        Ok(Expr::Integer { value, position })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := INTEGER | STRING | IDENT
    /// ```
    /// # Errors
    /// - `InvalidNumber` if an integer literal does not fit in an `i64`.
    /// - `IllegalCharacter` at an illegal token.
    /// - `ExpectedPrimary` for any other token, keywords included.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let current = self.current();
        let position = current.position;

        match current.kind {
            TokenKind::Integer => {
                let value = parse_integer(&current.literal, position)?;
                self.advance();
                Ok(Expr::Integer { value, position })
            },
            TokenKind::Text => Ok(Expr::Text { value: self.advance().literal,
                                               position }),
            TokenKind::Identifier => Ok(Expr::Identifier { name: self.advance().literal,
                                                           position }),
            TokenKind::Illegal => Err(self.illegal_character()),
            found => Err(ParseError::ExpectedPrimary { found, position }),
        }
    }
}

/// Converts a decimal literal to an `i64`.
fn parse_integer(literal: &str, position: Position) -> ParseResult<i64> {
    literal.parse()
           .map_err(|_| ParseError::InvalidNumber { literal: literal.to_owned(),
                                                    position })
}
