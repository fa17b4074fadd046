use std::cmp::Ordering;

use crate::{ast::BinaryOperator, interpreter::evaluator::core::Interpreter};

impl Interpreter {
    /// Decides a comparison operator from the ordering of its operands.
    ///
    /// Returns `None` when `op` is not a comparison.
    ///
    /// # Example
    /// ```
    /// use npp::{ast::BinaryOperator, interpreter::evaluator::core::Interpreter};
    ///
    /// assert_eq!(Interpreter::eval_comparison(BinaryOperator::LessEqual, 3.cmp(&3)), Some(true));
    /// assert_eq!(Interpreter::eval_comparison(BinaryOperator::Add, 3.cmp(&3)), None);
    /// ```
    #[must_use]
    pub const fn eval_comparison(op: BinaryOperator, ordering: Ordering) -> Option<bool> {
        match op {
            BinaryOperator::Equal => Some(ordering.is_eq()),
            BinaryOperator::NotEqual => Some(ordering.is_ne()),
            BinaryOperator::Less => Some(ordering.is_lt()),
            BinaryOperator::Greater => Some(ordering.is_gt()),
            BinaryOperator::LessEqual => Some(ordering.is_le()),
            BinaryOperator::GreaterEqual => Some(ordering.is_ge()),
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod => None,
        }
    }
}
