use crate::{
    ast::BinaryOperator,
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
    /// Evaluates an operator on two text values.
    ///
    /// Only `+` is defined, and it concatenates left then right. Text cannot
    /// be compared, not even for equality.
    ///
    /// # Errors
    /// Returns `InvalidOperation` for every operator other than `+`.
    pub fn eval_text_op(op: BinaryOperator,
                        left: &str,
                        right: &str,
                        position: Position)
                        -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::Text(format!("{left}{right}"))),
            _ => Err(invalid_operation(op, &left, &right, position)),
        }
    }
}
