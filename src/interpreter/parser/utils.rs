use std::iter::Peekable;

use crate::{
    ast::{Data, Position},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{block::parse_block, core::ParseResult},
    },
};

/// Parses a data token.
///
/// Grammar: `data := STRING | BLOCK | IDENTIFIER | "any"`
///
/// Identifiers starting with `@` become actor references. Block literals are
/// parsed into nested programs right away.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the data.
/// - `end`: Position of the end of input.
///
/// # Errors
/// Returns a `ParseError` if the next token is not data, if input ends, or if
/// a nested block fails to lex or parse.
pub(in crate::interpreter::parser) fn parse_data<'a, I>(tokens: &mut Peekable<I>,
                                                        end: Position)
                                                        -> ParseResult<Data>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token { kind: TokenKind::String(text),
                     .. }) => Ok(Data::String(text.clone())),
        Some(token @ Token { kind: TokenKind::Block(inner),
                             .. }) => Ok(Data::Block(parse_block(inner, token)?)),
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => match name.strip_prefix('@') {
            Some(actor) => Ok(Data::ActorRef(actor.to_string())),
            None => Ok(Data::Identifier(name.clone())),
        },
        Some(Token { kind: TokenKind::Any,
                     .. }) => Ok(Data::Any),
        Some(token) => Err(unexpected("data", token)),
        None => Err(end_of_input("data", end)),
    }
}

/// Consumes the `;` that ends a statement.
///
/// # Errors
/// Returns a `ParseError` if the next token is anything else or input ends.
pub(in crate::interpreter::parser) fn expect_terminator<'a, I>(tokens: &mut Peekable<I>,
                                                               end: Position)
                                                               -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token { kind: TokenKind::Terminator,
                     .. }) => Ok(()),
        Some(token) => Err(unexpected("';'", token)),
        None => Err(end_of_input("';'", end)),
    }
}

/// Builds an `UnexpectedToken` error located at `token`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str, token: &Token) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    token.describe(),
                                  line:     token.line,
                                  column:   token.column, }
}

/// Builds an `UnexpectedEndOfInput` error located at `end`.
pub(in crate::interpreter::parser) fn end_of_input(expected: &str, end: Position) -> ParseError {
    ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                       line:     end.line,
                                       column:   end.column, }
}
