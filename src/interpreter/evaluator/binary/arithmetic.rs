use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::invalid_operation,
            core::{EvalResult, Interpreter},
        },
        lexer::Position,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `+ - * / %` on two integers.
    ///
    /// All operations are checked. Division and remainder by zero fail with
    /// `DivisionByZero`; any result outside the `i64` range, such as
    /// `i64::MIN / -1`, fails with `Overflow`. Division truncates toward zero
    /// and the remainder takes the sign of the dividend.
    ///
    /// # Example
    /// ```
    /// use npp::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, lexer::Position, value::core::Value},
    /// };
    ///
    /// let position = Position::new(1, 1);
    ///
    /// let rem = Interpreter::eval_arithmetic(BinaryOperator::Mod, -7, 3, position);
    /// assert_eq!(rem.unwrap(), Value::Integer(-1));
    ///
    /// assert!(Interpreter::eval_arithmetic(BinaryOperator::Div, 1, 0, position).is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           a: i64,
                           b: i64,
                           position: Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero { position }),
            Div => a.checked_div(b),
            Mod => a.checked_rem(b),
            _ => return Err(invalid_operation(op, &a, &b, position)),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: Position = Position::new(2, 9);

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(Interpreter::eval_arithmetic(BinaryOperator::Add, i64::MAX, 1, AT),
                   Err(RuntimeError::Overflow { position: AT }));
        assert_eq!(Interpreter::eval_arithmetic(BinaryOperator::Div, i64::MIN, -1, AT),
                   Err(RuntimeError::Overflow { position: AT }));
    }

    #[test]
    fn remainder_by_zero_is_division_by_zero() {
        assert_eq!(Interpreter::eval_arithmetic(BinaryOperator::Mod, 5, 0, AT),
                   Err(RuntimeError::DivisionByZero { position: AT }));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Interpreter::eval_arithmetic(BinaryOperator::Div, -7, 2, AT),
                   Ok(Value::Integer(-3)));
    }
}
