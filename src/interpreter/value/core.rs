use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// Every expression that evaluates successfully produces one of these. There is
/// no null value; a failed evaluation is an error, never a `Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer. Comparisons also produce integers, `1` for
    /// true and `0` for false.
    Integer(i64),
    /// A text value, produced by literals and concatenation.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl Value {
    /// Checks whether a conditional treats the value as true.
    ///
    /// Integers are truthy when non-zero, text when non-empty.
    ///
    /// # Example
    /// ```
    /// use npp::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(Value::from("no").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Name of the value's kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
