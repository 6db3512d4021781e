//! The Parser module pulls tokens from the Lexer one at a time and
//! turns each `var` declaration into a line of Python.
use super::ast::*;
use super::error::{ParseError, TranspileError};
use super::lexer::{Lexer, Token, TokenKind};

/// Result of transpiling one line of input.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Transpiled {
    pub statements: Vec<Statement>,
}

impl Transpiled {
    /// One diagnostic line per statement, in input order.
    pub fn trace(&self) -> Vec<String> {
        self.statements.iter().map(Statement::trace).collect()
    }

    /// The generated Python, one assignment per line.
    pub fn code(&self) -> String {
        self.statements.iter()
            .map(Statement::emit)
            .collect::<Vec<String>>()
            .join("\n")
    }
}

pub struct Transpiler {
    lexer:   Lexer,
    current: Token,
}

impl Transpiler {
    /// Reads the first token eagerly, so this fails if the input
    /// starts with an unrecognized character.
    pub fn new(mut lexer: Lexer) -> Result<Self, TranspileError> {
        let current = lexer.next_token()?;
        Ok(Transpiler{lexer, current})
    }

    /// Run the transpiler, consuming itself and returning every
    /// statement in the input.
    pub fn run(mut self) -> Result<Transpiled, TranspileError> {
        let mut out = Transpiled::default();

        while self.current != Token::Eof {
            let stmt = self.parse_statement()?;
            debug!("{}", stmt.trace());
            out.statements.push(stmt);
        }

        Ok(out)
    }

    /// var IDENTIFIER = (NUMBER | STRING) ;
    pub fn parse_statement(&mut self) -> Result<Statement, TranspileError> {
        self.expect_and_consume(TokenKind::Var)?;

        let name = match self.expect_and_consume(TokenKind::Identifier)? {
            Token::Identifier(name) => name,
            tok => return Err(unexpected(&[TokenKind::Identifier], &tok)),
        };

        self.expect_and_consume(TokenKind::Equals)?;

        let value = match self.current.kind() {
            TokenKind::Number | TokenKind::String => match self.consume()? {
                Token::Number(n) => Value::Integer(n),
                Token::String(s) => Value::Str(s),
                tok => return Err(unexpected(&[TokenKind::Number, TokenKind::String], &tok)),
            },
            _ => return Err(unexpected(&[TokenKind::Number, TokenKind::String], &self.current)),
        };

        self.expect_and_consume(TokenKind::Semicolon)?;

        Ok(Statement::new(name, value))
    }

    /// Consumes the current token if it is of the given kind, returning it.
    pub fn expect_and_consume(&mut self, kind: TokenKind) -> Result<Token, TranspileError> {
        if self.current.kind() == kind {
            self.consume()
        } else {
            Err(TranspileError::Parse(ParseError {
                expected: expected(kind),
                found: self.current.kind(),
            }))
        }
    }

    /// Swaps the next token in and hands back the old current one.
    #[inline]
    fn consume(&mut self) -> Result<Token, TranspileError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}

/// Convenience wrapper to transpile a whole line.
pub fn transpile(text: &str) -> Result<Transpiled, TranspileError> {
    Transpiler::new(Lexer::new(text))?.run()
}

fn unexpected(expected: &'static [TokenKind], found: &Token) -> TranspileError {
    TranspileError::Parse(ParseError{expected, found: found.kind()})
}

fn expected(kind: TokenKind) -> &'static [TokenKind] {
    match kind {
        TokenKind::Number     => &[TokenKind::Number],
        TokenKind::String     => &[TokenKind::String],
        TokenKind::Identifier => &[TokenKind::Identifier],
        TokenKind::Var        => &[TokenKind::Var],
        TokenKind::Equals     => &[TokenKind::Equals],
        TokenKind::Semicolon  => &[TokenKind::Semicolon],
        TokenKind::Eof        => &[TokenKind::Eof],
    }
}
