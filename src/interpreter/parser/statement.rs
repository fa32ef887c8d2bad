use std::iter::Peekable;

use crate::{
    ast::{Position, Slot, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            utils::{end_of_input, parse_data, unexpected},
        },
    },
};

/// A parsed statement before overloads are merged.
#[derive(Debug)]
pub enum Parsed {
    /// A complete statement.
    Statement(Statement),
    /// A `=>`-led overload. Its actions belong to the pattern case right
    /// before it.
    Overload {
        /// The overload's actions.
        actions:  Vec<Statement>,
        /// Position of the leading `=>`.
        position: Position,
    },
}

/// Parses a single statement, without its terminator.
///
/// A statement may be one of:
/// - an overload: `=> command (=> command)*`
/// - a pattern definition: `data => command (=> command)*`
/// - a basic command: `[data] > target`
///
/// Pattern definitions are told apart from basic commands by looking one
/// token past the leading data.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
/// - `end`: Position of the end of input.
///
/// # Returns
/// The parsed statement, or an overload still to be merged.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, end: Position) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(end_of_input("a statement", end));
    };

    match &token.kind {
        TokenKind::Match => {
            let actions = parse_actions(tokens, end)?;
            Ok(Parsed::Overload { actions,
                                  position: token.position() })
        },
        TokenKind::Send => Ok(Parsed::Statement(parse_basic_command(tokens, end, false)?)),
        kind if kind.is_data() => {
            let mut lookahead = tokens.clone();
            lookahead.next();

            match lookahead.peek() {
                Some(Token { kind: TokenKind::Match,
                             .. }) => Ok(Parsed::Statement(parse_match_command(tokens, end)?)),
                _ => Ok(Parsed::Statement(parse_basic_command(tokens, end, false)?)),
            }
        },
        _ => Err(unexpected("a statement", token)),
    }
}

/// Parses a pattern definition.
///
/// Grammar: `match_command := data "=>" basic_command ("=>" basic_command)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the pattern key.
/// - `end`: Position of the end of input.
///
/// # Returns
/// A `Statement::PatternDef` positioned at its key.
pub fn parse_match_command<'a, I>(tokens: &mut Peekable<I>, end: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let position = tokens.peek()
                         .map_or(end, |token| token.position());
    let key = parse_data(tokens, end)?;
    let actions = parse_actions(tokens, end)?;

    Ok(Statement::PatternDef { key,
                               actions,
                               position })
}

/// Parses one or more `=> basic_command` actions.
///
/// `any` is accepted as a target here, since every action belongs to a
/// pattern case.
fn parse_actions<'a, I>(tokens: &mut Peekable<I>, end: Position) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut actions = Vec::new();

    match tokens.next() {
        Some(Token { kind: TokenKind::Match,
                     .. }) => {},
        Some(token) => return Err(unexpected("'=>'", token)),
        None => return Err(end_of_input("'=>'", end)),
    }
    actions.push(parse_basic_command(tokens, end, true)?);

    while let Some(Token { kind: TokenKind::Match,
                           .. }) = tokens.peek()
    {
        tokens.next();
        actions.push(parse_basic_command(tokens, end, true)?);
    }

    Ok(actions)
}

/// Parses an assignment or an actor call.
///
/// Grammar: `basic_command := [data] ">" target`
///
/// A target starting with `@` makes the command an actor call; any other
/// identifier makes it an assignment. `any` is only a valid target when
/// `allow_any` is set.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the data or at `>`.
/// - `end`: Position of the end of input.
/// - `allow_any`: Whether the command is an action of a pattern case.
///
/// # Returns
/// A `Statement::Assign` or `Statement::Send` positioned at its first token.
///
/// # Errors
/// - `MisplacedAny` if `any` is the target and `allow_any` is not set.
/// - `UnexpectedToken`/`UnexpectedEndOfInput` if `>` or the target is
///   missing.
pub fn parse_basic_command<'a, I>(tokens: &mut Peekable<I>,
                                  end: Position,
                                  allow_any: bool)
                                  -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(first) = tokens.peek().copied() else {
        return Err(end_of_input("data or '>'", end));
    };
    let position = first.position();

    let data = if first.kind.is_data() {
        Some(parse_data(tokens, end)?)
    } else {
        None
    };

    match tokens.next() {
        Some(Token { kind: TokenKind::Send,
                     .. }) => {},
        Some(token) => return Err(unexpected("'>'", token)),
        None => return Err(end_of_input("'>'", end)),
    }

    match tokens.next() {
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => match name.strip_prefix('@') {
            Some(actor) => Ok(Statement::Send { data,
                                                actor: actor.to_string(),
                                                position }),
            None => Ok(Statement::Assign { data,
                                           slot: Slot::Name(name.clone()),
                                           position }),
        },
        Some(token @ Token { kind: TokenKind::Any,
                             .. }) => {
            if allow_any {
                Ok(Statement::Assign { data,
                                       slot: Slot::Any,
                                       position })
            } else {
                Err(ParseError::MisplacedAny { line:   token.line,
                                               column: token.column, })
            }
        },
        Some(token) => Err(unexpected("an identifier or 'any'", token)),
        None => Err(end_of_input("an identifier or 'any'", end)),
    }
}
