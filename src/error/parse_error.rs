use crate::interpreter::lexer::{Position, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// `Display` renders the complete diagnostic line, e.g.
/// `Error at line 1, col 5: Expected = after identifier, got INT`.
pub enum ParseError {
    /// A statement started with a token that begins no statement.
    InvalidStatement {
        /// The token encountered.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// `sun` was not followed by an identifier.
    ExpectedIdentifier {
        /// The token encountered instead.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// The identifier of a declaration was not followed by `=`.
    ExpectedAssign {
        /// The token encountered instead.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// An opening `{` was expected.
    ExpectedOpeningBrace {
        /// What the brace should have followed, e.g. `condition`.
        after:    &'static str,
        /// The token encountered instead.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// The input ended before a block was closed.
    UnclosedBlock {
        /// The token encountered instead of `}`.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// A unary `-` was not followed by an integer literal.
    ExpectedNumber {
        /// The token encountered instead.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// An expression was expected but the token starts none.
    ExpectedPrimary {
        /// The token encountered instead.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    InvalidNumber {
        /// The literal as written, including a folded minus sign.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// The lexer met a character that starts no token.
    IllegalCharacter {
        /// The offending text.
        literal:  String,
        /// Where the character is.
        position: Position,
    },
}

impl ParseError {
    /// Gets the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::InvalidStatement { position, .. }
            | Self::ExpectedIdentifier { position, .. }
            | Self::ExpectedAssign { position, .. }
            | Self::ExpectedOpeningBrace { position, .. }
            | Self::UnclosedBlock { position, .. }
            | Self::ExpectedNumber { position, .. }
            | Self::ExpectedPrimary { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::IllegalCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error at {}: ", self.position())?;
        match self {
            Self::InvalidStatement { found, .. } => write!(f, "Invalid statement, got {found}"),
            Self::ExpectedIdentifier { found, .. } => {
                write!(f, "Expected identifier after sun, got {found}")
            },
            Self::ExpectedAssign { found, .. } => {
                write!(f, "Expected = after identifier, got {found}")
            },
            Self::ExpectedOpeningBrace { after, found, .. } => {
                write!(f, "Expected {{ after {after}, got {found}")
            },
            Self::UnclosedBlock { found, .. } => write!(f, "Expected }} to close block, got {found}"),
            Self::ExpectedNumber { found, .. } => write!(f, "Expected number after -, got {found}"),
            Self::ExpectedPrimary { found, .. } => {
                write!(f, "Expected number, string, or identifier, got {found}")
            },
            Self::InvalidNumber { literal, .. } => write!(f, "Invalid number {literal}"),
            Self::IllegalCharacter { literal, .. } => write!(f, "Illegal character '{literal}'"),
        }
    }
}

impl std::error::Error for ParseError {}
