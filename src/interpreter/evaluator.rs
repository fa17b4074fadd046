/// Binary operator evaluation logic.
///
/// Handles integer arithmetic, integer comparisons and text concatenation,
/// and rejects every other operator and operand combination.
pub mod binary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, statement execution, expression evaluation and
/// the reporting of runtime diagnostics.
pub mod core;
