use std::iter::Peekable;

use crate::{
    ast::{Position, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            statement::{Parsed, parse_statement},
            utils::expect_terminator,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a program.
///
/// Whitespace, newline and comment tokens are skipped, so the output of
/// [`tokenize`](crate::interpreter::lexer::tokenize) can be passed in as is.
///
/// # Parameters
/// - `tokens`: Every token of the source, in order.
///
/// # Returns
/// The parsed program. No partial program is ever returned.
///
/// # Errors
/// Returns the first [`ParseError`] encountered, including lexing failures
/// inside nested block literals.
///
/// # Example
/// ```
/// use arrow::{
///     ast::{Data, Slot, Statement},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("\"hi\" > greeting;").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert!(matches!(&program.statements[..],
///                  [Statement::Assign { data: Some(Data::String(s)),
///                                       slot: Slot::Name(n),
///                                       .. }] if s == "hi" && n == "greeting"));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let end = tokens.last()
                    .map_or_else(|| Position::new(1, 1), Token::end);

    parse_tokens(tokens, end)
}

/// Parses tokens whose end of input lies at `end`.
///
/// `end` is the position reported when the tokens run out in the middle of a
/// statement.
pub(in crate::interpreter::parser) fn parse_tokens(tokens: &[Token],
                                                   end: Position)
                                                   -> ParseResult<Program> {
    let mut iter = tokens.iter()
                         .filter(|token| !token.kind.is_trivia())
                         .peekable();

    parse_program(&mut iter, end)
}

/// Parses statements until the tokens run out.
///
/// Grammar: `program := (statement ";")*`
///
/// Stray `;` tokens between statements are skipped. An overload statement is
/// appended to the pattern definition right before it in the same program.
///
/// # Parameters
/// - `tokens`: Token iterator over non-trivia tokens.
/// - `end`: Position of the end of input.
///
/// # Errors
/// - `DanglingOverload` if an overload does not follow a pattern definition.
/// - `UnexpectedToken`/`UnexpectedEndOfInput` if a statement is not
///   terminated by `;`.
/// - Propagates any errors from statement parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>, end: Position) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements: Vec<Statement> = Vec::new();

    loop {
        while let Some(Token { kind: TokenKind::Terminator,
                               .. }) = tokens.peek()
        {
            tokens.next();
        }

        if tokens.peek().is_none() {
            break;
        }

        match parse_statement(tokens, end)? {
            Parsed::Statement(statement) => statements.push(statement),
            Parsed::Overload { actions, position } => match statements.last_mut() {
                Some(Statement::PatternDef { actions: primary, .. }) => primary.extend(actions),
                _ => {
                    return Err(ParseError::DanglingOverload { line:   position.line,
                                                              column: position.column, });
                },
            },
        }

        expect_terminator(tokens, end)?;
    }

    Ok(Program::new(statements))
}
