use std::error::Error;
use std::fmt;
use std::fs;

use lalrpop_util::lexer::Token;
use lalrpop_util::ParseError;
use log::trace;

use crate::ast::ast::{Expr, Program, SourceLocation};
use crate::boogie;

/// The single failure kind of the front end: the input text does not match
/// the grammar. Carries the position of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub loc: SourceLocation,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at [{}]: {}", self.loc, self.message)
    }
}

impl Error for SyntaxError {}

/// Raised from grammar actions for tokens the lexer accepts but whose value
/// is unrepresentable, currently only oversized integer literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    pub offset: usize,
    pub message: &'static str,
}

#[derive(Debug)]
pub enum LoadError {
    NotFoundError(String),
    ParseError(SyntaxError),
}

/// Parses a whole program. All-or-nothing: any malformed or trailing input
/// fails, there is no partial result.
pub fn parse_program(text: &str) -> Result<Program, SyntaxError> {
    let program = boogie::ProgramParser::new()
        .parse(text)
        .map_err(|err| to_syntax_error(text, err))?;
    trace!("parsed {} declaration(s)", program.decls.len());
    Ok(program)
}

/// Parses a standalone expression with the same failure contract as
/// [`parse_program`].
pub fn parse_expr(text: &str) -> Result<Expr, SyntaxError> {
    boogie::ExprParser::new()
        .parse(text)
        .map_err(|err| to_syntax_error(text, err))
}

pub fn load_program(path: &str) -> Result<Program, LoadError> {
    let input = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            return Err(LoadError::NotFoundError(format!(
                "Error reading file '{}': {}",
                path, err
            )));
        }
    };

    parse_program(&input).map_err(LoadError::ParseError)
}

fn to_syntax_error(text: &str, err: ParseError<usize, Token<'_>, LiteralError>) -> SyntaxError {
    let (offset, message) = match err {
        ParseError::InvalidToken { location } => (location, String::from("invalid token")),
        ParseError::UnrecognizedEof { location, expected } => (
            location,
            format!("unexpected end of input, expected {}", expected.join(" or ")),
        ),
        ParseError::UnrecognizedToken {
            token: (start, token, _),
            expected,
        } => (
            start,
            format!("unexpected token '{}', expected {}", token, expected.join(" or ")),
        ),
        ParseError::ExtraToken {
            token: (start, token, _),
        } => (start, format!("unexpected trailing token '{}'", token)),
        ParseError::User { error } => (error.offset, String::from(error.message)),
    };

    SyntaxError {
        loc: line_column(text, offset),
        message,
    }
}

pub(crate) fn line_column(text: &str, offset: usize) -> SourceLocation {
    let mut line = 1;
    let mut column = 1;
    for ch in text[..offset].chars() {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    SourceLocation { line, column }
}
