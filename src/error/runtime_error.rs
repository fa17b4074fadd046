use crate::{ast::BinaryOperator, interpreter::lexer::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// A runtime error aborts only the statement that raised it. `Display` renders
/// the complete diagnostic line.
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where the identifier appears.
        position: Position,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// Position of the operator.
        position: Position,
    },
    /// Integer arithmetic overflowed 64 bits.
    Overflow {
        /// Position of the operator.
        position: Position,
    },
    /// An operator is not defined for the operand kinds it was given.
    InvalidOperation {
        /// The operator.
        op:       BinaryOperator,
        /// Rendering of the left operand.
        left:     String,
        /// Rendering of the right operand.
        right:    String,
        /// Position of the operator.
        position: Position,
    },
}

impl RuntimeError {
    /// Gets the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownVariable { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::InvalidOperation { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error at {}: ", self.position())?;
        match self {
            Self::UnknownVariable { name, .. } => write!(f, "Undefined variable {name}"),
            Self::DivisionByZero { .. } => write!(f, "Division by zero"),
            Self::Overflow { .. } => write!(f, "Integer overflow while trying to compute result"),
            Self::InvalidOperation { op, left, right, .. } => {
                write!(f, "Invalid operation {op} between {left} and {right}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
