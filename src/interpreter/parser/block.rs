use crate::{
    ast::{Position, Program},
    interpreter::{
        lexer::{Token, tokenize_at},
        parser::core::{ParseResult, parse_tokens},
    },
};

/// Parses the contents of a block literal into a nested program.
///
/// The inner text is tokenized as if it still sat at its place in the
/// enclosing source: it starts on the block's line, one column past the
/// opening brace. Running out of tokens mid-statement is reported at the
/// closing brace.
///
/// # Parameters
/// - `inner`: The text between the braces.
/// - `token`: The block literal token.
///
/// # Returns
/// The program the block contains.
///
/// # Errors
/// - `NestedLex` if the contents fail to tokenize.
/// - Any error from parsing the nested program.
pub fn parse_block(inner: &str, token: &Token) -> ParseResult<Program> {
    let tokens = tokenize_at(inner, token.line, token.column)?;
    let end = token.end();
    let closing = Position::new(end.line, end.column.saturating_sub(1));

    parse_tokens(&tokens, closing)
}
