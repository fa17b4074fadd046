use std::io::{self, Write};

use tracing::debug;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state and executes programs.
///
/// ## Usage
///
/// An `Interpreter` is created once and owns the single global
/// [`Environment`]. Every statement of every program it runs reads and writes
/// the same bindings.
///
/// Runtime errors never stop execution. Each one aborts only the statement
/// that raised it and is written to the output stream as a diagnostic line,
/// in order with the printed values.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes every statement of `program` in order.
    ///
    /// Printed values and runtime diagnostics are written to `out`, one line
    /// each.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    ///
    /// # Example
    /// ```
    /// use npp::interpreter::{evaluator::core::Interpreter, parser::parse};
    ///
    /// let (program, _) = parse("sun x = 7; suna x * 6; suna y; suna x");
    /// let mut out = Vec::new();
    ///
    /// Interpreter::new().interpret(&program, &mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(),
    ///            "42\nError at line 1, col 29: Undefined variable y\n7\n");
    /// ```
    pub fn interpret<W: Write>(&mut self, program: &Program, out: &mut W) -> io::Result<()> {
        for statement in &program.statements {
            self.exec_statement(statement, out)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// - A print writes the value's canonical text followed by a newline.
    /// - An assignment binds or rebinds the name. On failure the previous
    ///   binding stays untouched.
    /// - A conditional runs the consequence when the condition is truthy and
    ///   the alternative, if any, otherwise.
    /// - A block runs its statements in order.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub fn exec_statement<W: Write>(&mut self,
                                    statement: &Statement,
                                    out: &mut W)
                                    -> io::Result<()> {
        match statement {
            Statement::Print { value, .. } => match self.eval(value) {
                Ok(value) => writeln!(out, "{value}"),
                Err(error) => Self::report(&error, out),
            },
            Statement::Assignment { name, value, .. } => match self.eval(value) {
                Ok(value) => {
                    self.environment.set(name.as_str(), value);
                    Ok(())
                },
                Err(error) => Self::report(&error, out),
            },
            Statement::If { condition,
                            consequence,
                            alternative,
                            .. } => match self.eval(condition) {
                Ok(value) if value.is_truthy() => self.exec_block(consequence, out),
                Ok(_) => {
                    if let Some(alternative) = alternative {
                        self.exec_block(alternative, out)?;
                    }
                    Ok(())
                },
                Err(error) => Self::report(&error, out),
            },
            Statement::Block(block) => self.exec_block(block, out),
        }
    }

    fn exec_block<W: Write>(&mut self, block: &Block, out: &mut W) -> io::Result<()> {
        for statement in &block.statements {
            self.exec_statement(statement, out)?;
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals evaluate to themselves and identifiers are looked up in the
    /// environment. A binary expression evaluates its left operand, then its
    /// right, and stops at the first failure.
    ///
    /// # Errors
    /// - `UnknownVariable` for an unbound identifier.
    /// - Any error raised by a binary operator.
    ///
    /// # Example
    /// ```
    /// use npp::interpreter::{
    ///     evaluator::core::Interpreter, lexer::Lexer, parser::Parser, value::core::Value,
    /// };
    ///
    /// let expr = Parser::new(Lexer::new("\"a\" + \"b\"")).parse_expression().unwrap();
    ///
    /// assert_eq!(Interpreter::new().eval(&expr).unwrap(), Value::from("ab"));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expr::Text { value, .. } => Ok(Value::Text(value.clone())),
            Expr::Identifier { name, position } => {
                self.environment
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name:     name.clone(),
                                                                   position: *position, })
            },
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *position)
            },
        }
    }

    fn report<W: Write>(error: &RuntimeError, out: &mut W) -> io::Result<()> {
        debug!(%error, "statement failed");
        writeln!(out, "{error}")
    }
}
