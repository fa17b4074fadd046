/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a
/// program: unexpected tokens, missing delimiters, illegal characters and
/// integer literals that do not fit in 64 bits.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables, division by zero, integer overflow and
/// operators applied to incompatible values.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
