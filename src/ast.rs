use std::fmt;

use crate::interpreter::lexer::Position;

/// The root of a parsed source file.
///
/// `Display` renders the program back to source text, one statement per line.
/// For every program produced by the parser, re-parsing the rendering yields
/// a program of the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A `{ ... }` delimited sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Position of the opening brace.
    pub position:   Position,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `suna <expr>`
    Print {
        /// The expression whose value is printed.
        value:    Expr,
        /// Position of the `suna` keyword.
        position: Position,
    },
    /// `sun <name> = <expr>`, which declares or rebinds a variable.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Expr,
        /// Position of the `sun` keyword.
        position: Position,
    },
    /// `agar <condition> { ... } magar { ... }`
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        consequence: Block,
        /// Statements run otherwise, if a `magar` branch was given.
        alternative: Option<Block>,
        /// Position of the `agar` keyword.
        position:    Position,
    },
    /// A nested block of statements.
    Block(Block),
}

impl Statement {
    /// Gets the source position of the statement's leading token.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Print { position, .. }
            | Self::Assignment { position, .. }
            | Self::If { position, .. } => *position,
            Self::Block(block) => block.position,
        }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:     String,
        /// Position in the source code.
        position: Position,
    },
    /// A 64-bit signed integer literal. A leading `-` is folded into the value.
    Integer {
        /// The literal value.
        value:    i64,
        /// Position in the source code.
        position: Position,
    },
    /// A text literal.
    Text {
        /// The literal content, without quotes.
        value:    String,
        /// Position in the source code.
        position: Position,
    },
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of the expression.
    /// ## Example
    /// ```
    /// use npp::{ast::Expr, interpreter::lexer::Position};
    ///
    /// let expr = Expr::Identifier { name:     "x".to_string(),
    ///                               position: Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Identifier { position, .. }
            | Self::Integer { position, .. }
            | Self::Text { position, .. }
            | Self::Binary { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, " {statement}")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Print { value, .. } => write!(f, "suna {value}"),
            Self::Assignment { name, value, .. } => write!(f, "sun {name} = {value}"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "agar {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " magar {alternative}")?;
                }
                Ok(())
            },
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

// No parentheses: the grammar has no grouping, so parsed trees are already in
// precedence order.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Text { value, .. } => write!(f, "\"{value}\""),
            Self::Binary { left, op, right, .. } => write!(f, "{left} {op} {right}"),
        }
    }
}
