/// Checked integer arithmetic.
pub mod arithmetic;

/// Integer comparisons.
///
/// Comparisons yield the integers `1` and `0`; there is no boolean kind.
pub mod comparison;

/// Operand dispatch for binary operators.
pub mod core;

/// Text operators.
pub mod text;
