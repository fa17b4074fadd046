use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Position,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// The operand kinds select the handler:
    /// - integer and integer: comparisons via `eval_comparison`, everything
    ///   else via `eval_arithmetic`,
    /// - text and text: `eval_text_op`, which only knows `+`,
    /// - mixed kinds: always an `InvalidOperation`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
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
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Integer(3),
    ///                                    &Value::Integer(4),
    ///                                    position);
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let mixed = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                      &Value::Integer(3),
    ///                                      &Value::from("4"),
    ///                                      position);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => match Self::eval_comparison(op, a.cmp(b)) {
                Some(holds) => Ok(Value::from(holds)),
                None => Self::eval_arithmetic(op, *a, *b, position),
            },
            (Value::Text(a), Value::Text(b)) => Self::eval_text_op(op, a, b, position),
            _ => Err(invalid_operation(op, left, right, position)),
        }
    }
}

/// Builds the error for an operator that is not defined on its operands.
pub(in crate::interpreter::evaluator) fn invalid_operation(op: BinaryOperator,
                                                           left: &impl ToString,
                                                           right: &impl ToString,
                                                           position: Position)
                                                           -> RuntimeError {
    RuntimeError::InvalidOperation { op,
                                     left: left.to_string(),
                                     right: right.to_string(),
                                     position }
}
