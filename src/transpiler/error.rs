//! Errors produced while transpiling a single line.
use thiserror::Error;
use super::lexer::TokenKind;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum LexError {
    #[error("unrecognized character: {0}")]
    UnrecognizedCharacter(char),
    #[error("integer literal {0} does not fit in 64 bits")]
    IntegerOverflow(String),
}

/// A token of the wrong kind was found where the grammar required
/// one of `expected`.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("unexpected token: expected {}, found {}", join_kinds(.expected), .found)]
pub struct ParseError {
    pub expected: &'static [TokenKind],
    pub found: TokenKind,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum TranspileError {
    #[error("lexing error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds.iter()
        .map(|k| k.to_string())
        .collect::<Vec<String>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(LexError::UnrecognizedCharacter('+').to_string(), "unrecognized character: +");

        let e = ParseError { expected: &[TokenKind::Identifier], found: TokenKind::Number };
        assert_eq!(e.to_string(), "unexpected token: expected IDENTIFIER, found NUMBER");

        let e = ParseError { expected: &[TokenKind::Number, TokenKind::String], found: TokenKind::Eof };
        assert_eq!(e.to_string(), "unexpected token: expected NUMBER or STRING, found EOF");

        let e: TranspileError = LexError::UnrecognizedCharacter('@').into();
        assert_eq!(e.to_string(), "lexing error: unrecognized character: @");
    }
}
