use std::fmt;

use logos::Logos;
use tracing::trace;

/// The kind of a lexical token.
///
/// Whitespace and comments are matched so that logos can skip them; they never
/// reach the parser. `Eof` and `Illegal` are produced by [`Lexer`] itself.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Identifier tokens; variable names such as `x` or `number`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`. The digits are kept as text.
    #[regex(r"[0-9]+")]
    Integer,
    /// Double quoted text literal tokens, such as `"hello"`.
    #[token("\"", lex_text)]
    Text,

    /// `sun` (variable declaration)
    #[token("sun")]
    Sun,
    /// `suna` (print)
    #[token("suna")]
    Suna,
    /// `agar` (if)
    #[token("agar")]
    Agar,
    /// `magar` (else)
    #[token("magar")]
    Magar,
    /// `glow` (function, reserved)
    #[token("glow")]
    Glow,
    /// `fhek` (return, reserved)
    #[token("fhek")]
    Fhek,
    /// `yas` (true, reserved)
    #[token("yas")]
    Yas,
    /// `nah` (false, reserved)
    #[token("nah")]
    Nah,
    /// `grind` (loop, reserved)
    #[token("grind")]
    Grind,

    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `// Comments.`
    #[token("//", skip_comment)]
    Comment,
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n]+", skip_whitespace)]
    Whitespace,

    /// End of input. Returned forever once the source is exhausted.
    Eof,
    /// A character that starts no valid token.
    Illegal,
}

impl TokenKind {
    /// Returns `true` for the keywords that are recognized but have no
    /// statement or expression form.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Glow | Self::Fhek | Self::Yas | Self::Nah | Self::Grind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "IDENT",
            Self::Integer => "INT",
            Self::Text => "STRING",
            Self::Sun => "SUN",
            Self::Suna => "SUNA",
            Self::Agar => "AGAR",
            Self::Magar => "MAGAR",
            Self::Glow => "GLOW",
            Self::Fhek => "FHEK",
            Self::Yas => "YAS",
            Self::Nah => "NAH",
            Self::Grind => "GRIND",
            Self::Assign => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comment => "COMMENT",
            Self::Whitespace => "WHITESPACE",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        };
        f.write_str(name)
    }
}

/// A 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// A token together with its source text and the position of its first
/// character.
///
/// For text literals `literal` holds the content without the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:     TokenKind,
    pub literal:  String,
    pub position: Position,
}

/// Line bookkeeping carried by the logos lexer.
///
/// `line_start` is the byte offset where the current line begins; columns are
/// counted from there.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

impl LexerExtras {
    /// Accounts for every newline in `text`, which starts at byte `offset`.
    fn advance_lines(&mut self, text: &str, offset: usize) {
        if let Some(last) = text.rfind('\n') {
            self.line += text.matches('\n').count();
            self.line_start = offset + last + 1;
        }
    }
}

/// Consumes the body of a text literal up to and including the closing quote.
///
/// An unterminated literal runs to the end of input.
fn lex_text(lex: &mut logos::Lexer<TokenKind>) {
    let rest = lex.remainder();
    let len = rest.find('"').map_or(rest.len(), |end| end + 1);
    lex.bump(len);
}

/// Skips a `//` comment up to, but not including, the newline.
fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let rest = lex.remainder();
    let len = rest.find('\n').unwrap_or(rest.len());
    lex.bump(len);
    logos::Skip
}

fn skip_whitespace(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let offset = lex.span().start;
    let text = lex.slice().to_owned();
    lex.extras.advance_lines(&text, offset);
    logos::Skip
}

/// Pull-based tokenizer over a source string.
///
/// Each call to [`Lexer::next_token`] yields exactly one token. Once the
/// input is exhausted every further call yields an `Eof` token.
///
/// # Example
/// ```
/// use npp::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("sun x = 5");
/// assert_eq!(lexer.next_token().kind, TokenKind::Sun);
/// assert_eq!(lexer.next_token().literal, "x");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().kind, TokenKind::Integer);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    source: &'src str,
    inner:  logos::Lexer<'src, TokenKind>,
    done:   bool,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: TokenKind::lexer(source),
               done: false }
    }

    /// Returns the next token.
    pub fn next_token(&mut self) -> Token {
        let kind = match self.inner.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => TokenKind::Illegal,
            None => {
                return Token { kind:     TokenKind::Eof,
                               literal:  String::new(),
                               position: self.position_of(self.source.len()), };
            },
        };

        let source = self.source;
        let span = self.inner.span();
        let raw = &source[span.clone()];
        let position = self.position_of(span.start);

        let literal = if kind == TokenKind::Text {
            self.inner.extras.advance_lines(raw, span.start);
            let body = &raw[1..];
            body.strip_suffix('"').unwrap_or(body)
        } else {
            raw
        };

        trace!(%kind, literal, line = position.line, column = position.column, "token");

        Token { kind,
                literal: literal.to_string(),
                position }
    }

    fn position_of(&self, offset: usize) -> Position {
        let extras = &self.inner.extras;
        let column = self.source[extras.line_start..offset].chars().count() + 1;
        Position::new(extras.line, column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        self.done = token.kind == TokenKind::Eof;
        Some(token)
    }
}

/// Tokenizes a whole source string, ending with a single `Eof` token.
///
/// # Example
/// ```
/// use npp::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("a >= 10").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::GreaterEqual, TokenKind::Integer, TokenKind::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
