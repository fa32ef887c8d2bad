use logos::Logos;

use crate::{ast::Position, error::LexError};

/// The category of a lexical token.
///
/// Besides the tokens the parser consumes, the lexer also yields whitespace,
/// newline and comment tokens so that the token stream reproduces the source
/// text exactly. The parser drops them (see [`TokenKind::is_trivia`]); the
/// highlighter keeps them.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// `=>`
    #[token("=>")]
    Match,
    /// `>`
    #[token(">")]
    Send,
    /// `;`
    #[token(";")]
    Terminator,
    /// A double-quoted string literal. Holds the decoded contents.
    #[token("\"", lex_string)]
    String(String),
    /// A balanced `{ ... }` literal. Holds the text between the outer braces,
    /// untokenized.
    #[token("{", lex_block)]
    Block(String),
    /// `any`
    #[token("any")]
    Any,
    /// Names such as `variable`, or actor references such as `@print`.
    #[regex(r"@?[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# comment until end of line`
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+")]
    Whitespace,
    /// A line break.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        lex.extras.offset     = 0;
    })]
    Newline,
}

impl TokenKind {
    /// Returns `true` for tokens that carry no meaning for the parser.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment | Self::Whitespace | Self::Newline)
    }

    /// Returns `true` for tokens that may appear in data position.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self,
                 Self::String(_) | Self::Block(_) | Self::Identifier(_) | Self::Any)
    }
}

/// Failure categories produced by the token callbacks.
///
/// Logos reports characters that start no token through the `Default`
/// variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// End of input inside a string literal.
    UnterminatedString,
    /// End of input before the closing brace of a block literal.
    UnterminatedBlock,
    /// End of input right after a backslash inside a string literal.
    InvalidTrailingEscape,
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
}

/// Position bookkeeping carried by the lexer during tokenization.
///
/// Updated by every token that consumes a line break, so that the state
/// before each call to `next` describes where the next token starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number.
    pub line:       usize,
    /// Byte offset where the current line starts.
    pub line_start: usize,
    /// Columns preceding the first character of the current line. Non-zero
    /// only on the first line of a block literal's contents.
    pub offset:     usize,
}

/// A classified token together with its exact source text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category of the token.
    pub kind:   TokenKind,
    /// The source slice that produced the token.
    pub text:   String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// Location of the first character of the token.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { line:   self.line,
                   column: self.column, }
    }

    /// Location just past the last character of the token.
    #[must_use]
    pub fn end(&self) -> Position {
        match self.text.rfind('\n') {
            Some(last) => Position { line:   self.line + self.text.matches('\n').count(),
                                     column: self.text[last + 1..].chars().count() + 1, },
            None => Position { line:   self.line,
                               column: self.column + self.text.chars().count(), },
        }
    }

    /// A short human-readable description used in parse errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Match => "'=>'".to_string(),
            TokenKind::Send => "'>'".to_string(),
            TokenKind::Terminator => "';'".to_string(),
            TokenKind::String(_) => format!("string {}", self.text),
            TokenKind::Block(_) => "block literal".to_string(),
            TokenKind::Any => "'any'".to_string(),
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::Comment => "comment".to_string(),
            TokenKind::Whitespace => "whitespace".to_string(),
            TokenKind::Newline => "newline".to_string(),
        }
    }
}

/// Tokenizes a complete source text.
///
/// Returns every token, trivia included, in source order.
///
/// # Errors
/// Returns the first [`LexError`] encountered; no tokens are returned in that
/// case.
///
/// # Example
/// ```
/// use arrow::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("\"hi\" > @print;").unwrap();
/// let kinds: Vec<_> = tokens.into_iter()
///                           .map(|t| t.kind)
///                           .filter(|k| !k.is_trivia())
///                           .collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::String("hi".into()),
///                 TokenKind::Send,
///                 TokenKind::Identifier("@print".into()),
///                 TokenKind::Terminator]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_at(source, 1, 0)
}

/// Tokenizes text that starts somewhere inside a larger source.
///
/// Used for the contents of block literals: `line` is the line the text
/// starts on and `offset` the number of columns before its first character,
/// so reported positions refer to the enclosing source.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize_at(source: &str, line: usize, offset: usize) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source,
                                                 LexerExtras { line,
                                                               line_start: 0,
                                                               offset });
    let mut tokens = Vec::new();

    loop {
        let LexerExtras { line,
                          line_start,
                          offset, } = lexer.extras;
        let Some(result) = lexer.next() else {
            break;
        };
        let span = lexer.span();
        let column = source[line_start..span.start].chars().count() + offset + 1;

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            text: lexer.slice().to_string(),
                                            line,
                                            column }),
            Err(kind) => return Err(lex_error(kind, lexer.slice(), line, column)),
        }
    }

    Ok(tokens)
}

fn lex_error(kind: LexErrorKind, slice: &str, line: usize, column: usize) -> LexError {
    match kind {
        LexErrorKind::UnterminatedString => LexError::UnterminatedString { line, column },
        LexErrorKind::UnterminatedBlock => LexError::UnterminatedBlock { line, column },
        LexErrorKind::InvalidTrailingEscape => LexError::InvalidTrailingEscape { line, column },
        LexErrorKind::UnexpectedCharacter => {
            LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or_default(),
                                            line,
                                            column }
        },
    }
}

/// Scans a string literal after its opening quote and decodes escapes.
///
/// Known escapes are `\n`, `\t`, `\r`, `\"`, `\\`, `\{` and `\}`. Any other
/// escaped character keeps its backslash.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let mut value = String::new();
    let mut chars = remainder.char_indices();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '"' => {
                lex.bump(index + 1);
                track_newlines(lex);
                return Ok(value);
            },
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, escaped @ ('"' | '\\' | '{' | '}'))) => value.push(escaped),
                Some((_, other)) => {
                    value.push('\\');
                    value.push(other);
                },
                None => {
                    lex.bump(remainder.len());
                    return Err(LexErrorKind::InvalidTrailingEscape);
                },
            },
            other => value.push(other),
        }
    }

    lex.bump(remainder.len());
    Err(LexErrorKind::UnterminatedString)
}

/// Scans a block literal after its opening brace.
///
/// Braces are counted by depth so blocks nest arbitrarily. Braces inside
/// string literals and comments do not count.
fn lex_block(lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let mut depth = 1_usize;
    let mut chars = remainder.char_indices();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    lex.bump(index + 1);
                    track_newlines(lex);
                    return Ok(remainder[..index].to_string());
                }
            },
            '"' => {
                while let Some((_, c)) = chars.next() {
                    match c {
                        '\\' => {
                            chars.next();
                        },
                        '"' => break,
                        _ => {},
                    }
                }
            },
            '#' => {
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            },
            _ => {},
        }
    }

    lex.bump(remainder.len());
    Err(LexErrorKind::UnterminatedBlock)
}

/// Moves the line bookkeeping past any line breaks inside the current token.
fn track_newlines(lex: &mut logos::Lexer<TokenKind>) {
    let slice = lex.slice();
    let count = slice.matches('\n').count();

    if let Some(last) = slice.rfind('\n') {
        lex.extras.line += count;
        lex.extras.line_start = lex.span().start + last + 1;
        lex.extras.offset = 0;
    }
}
