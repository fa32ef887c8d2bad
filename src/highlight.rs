use crate::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, tokenize_at},
};

const RESET: &str = "\x1b[0m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";

/// Colors source text for a terminal.
///
/// Every token is wrapped in an ANSI color by kind; whitespace, newlines and
/// comments are copied verbatim, so stripping the escape codes gives back
/// the input. The contents of block literals are highlighted recursively
/// between cyan braces.
///
/// # Errors
/// Returns the [`LexError`] that stops tokenization, including errors inside
/// block literals.
///
/// # Example
/// ```
/// use arrow::highlight::highlight;
///
/// let colored = highlight("v > @print;").unwrap();
/// assert_eq!(colored,
///            "\x1b[33mv\x1b[0m \x1b[34m>\x1b[0m \x1b[33m@print\x1b[0m\x1b[31m;\x1b[0m");
/// ```
pub fn highlight(source: &str) -> Result<String, LexError> {
    highlight_at(source, 1, 0)
}

fn highlight_at(source: &str, line: usize, offset: usize) -> Result<String, LexError> {
    let mut out = String::with_capacity(source.len());

    for token in tokenize_at(source, line, offset)? {
        highlight_token(&mut out, &token)?;
    }

    Ok(out)
}

fn highlight_token(out: &mut String, token: &Token) -> Result<(), LexError> {
    let color = match &token.kind {
        TokenKind::Comment | TokenKind::Whitespace | TokenKind::Newline => {
            out.push_str(&token.text);
            return Ok(());
        },
        TokenKind::Block(inner) => {
            let contents = highlight_at(inner, token.line, token.column)?;
            out.push_str(&format!("{CYAN}{{{RESET}{contents}{CYAN}}}{RESET}"));
            return Ok(());
        },
        TokenKind::Send => BLUE,
        TokenKind::Match => MAGENTA,
        TokenKind::Terminator | TokenKind::Any => RED,
        TokenKind::String(_) => GREEN,
        TokenKind::Identifier(_) => YELLOW,
    };

    out.push_str(color);
    out.push_str(&token.text);
    out.push_str(RESET);
    Ok(())
}
