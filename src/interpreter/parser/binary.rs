use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Binding strength of binary operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level of a full expression.
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`, `%`
    Product,
}

impl Parser<'_> {
    /// Parses a binary expression by precedence climbing.
    ///
    /// After the leading operand, the loop keeps absorbing operators that bind
    /// tighter than `precedence`. Each right operand is parsed at the
    /// operator's own level, so operators of equal precedence associate to the
    /// left: `1 - 2 - 3` parses as `(1 - 2) - 3`.
    ///
    /// The loop stops at any token that is not a binary operator, which
    /// includes `;`, `{`, `}` and the end of input.
    ///
    /// # Example
    /// ```
    /// use npp::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("1 + 2 * 3 == 7"));
    /// let expr = parser.parse_expression().unwrap();
    ///
    /// assert_eq!(expr.to_string(), "1 + 2 * 3 == 7");
    /// ```
    pub(in crate::interpreter::parser) fn parse_binary(&mut self,
                                                       precedence: Precedence)
                                                       -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Some(op) = token_to_binary_operator(self.current().kind)
              && precedence < operator_precedence(op)
        {
            let position = self.advance().position;
            let right = self.parse_binary(operator_precedence(op))?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  position };
        }

        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every token that does not continue a binary expression.
///
/// # Example
/// ```
/// use npp::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

/// Returns the precedence level of a binary operator.
#[must_use]
pub const fn operator_precedence(op: BinaryOperator) -> Precedence {
    match op {
        BinaryOperator::Equal | BinaryOperator::NotEqual => Precedence::Equals,
        BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => Precedence::LessGreater,
        BinaryOperator::Add | BinaryOperator::Sub => Precedence::Sum,
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => Precedence::Product,
    }
}
