/// The `Value` enum and its conversions.
///
/// Declares the two runtime kinds, their canonical rendering and the truthiness
/// rule used by conditionals.
pub mod core;
