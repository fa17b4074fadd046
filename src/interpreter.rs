/// The environment module holds variable bindings.
///
/// A single flat mapping from names to values, owned by one interpreter and
/// shared by every statement it runs. There are no nested scopes.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the program statement by statement, evaluates
/// expressions against the environment and writes printed values and runtime
/// diagnostics to one output stream.
///
/// # Responsibilities
/// - Executes prints, declarations, conditionals and blocks.
/// - Evaluates integer arithmetic, comparisons and text concatenation.
/// - Reports runtime errors such as division by zero or unknown variables
///   without stopping the run.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand, each
/// carrying its kind, literal text and 1-based line and column. It never
/// fails: unknown characters become `Illegal` tokens and the end of input is
/// reported as an endless run of `Eof` tokens.
///
/// # Responsibilities
/// - Skips whitespace and `//` line comments.
/// - Recognizes keywords, identifiers, integer and text literals, operators
///   and punctuation.
/// - Tracks source positions, including across newlines inside text literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// builds the whole program before anything runs. Malformed statements are
/// recorded as diagnostics and skipped.
///
/// # Responsibilities
/// - Dispatches statements on their leading keyword.
/// - Resolves operator precedence by precedence climbing.
/// - Resynchronizes after errors so one mistake never hides the rest of the
///   program.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are either 64-bit integers or text.
pub mod value;
