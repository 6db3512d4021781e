//! This lexer tokenizes JavaScript `var` declarations.
//!
//! Tokens are produced on demand, one per call to `Lexer::next_token`,
//! from a single cursor that only ever moves forward.
use std::fmt;
use super::error::LexError;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Number(u64),
    String(String),
    Identifier(String),
    Var,
    Equals,
    Semicolon,
    Eof,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Number,
    String,
    Identifier,
    Var,
    Equals,
    Semicolon,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_)     => TokenKind::Number,
            Token::String(_)     => TokenKind::String,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Var           => TokenKind::Var,
            Token::Equals        => TokenKind::Equals,
            Token::Semicolon     => TokenKind::Semicolon,
            Token::Eof           => TokenKind::Eof,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Number     => "NUMBER",
            TokenKind::String     => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Var        => "VAR",
            TokenKind::Equals     => "EQUALS",
            TokenKind::Semicolon  => "SEMICOLON",
            TokenKind::Eof        => "EOF",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n)     => write!(f, "{}({})", self.kind(), n),
            Token::String(s)     => write!(f, "{}({:?})", self.kind(), s),
            Token::Identifier(s) => write!(f, "{}({})", self.kind(), s),
            Token::Var           => write!(f, "{}(var)", self.kind()),
            Token::Equals        => write!(f, "{}(=)", self.kind()),
            Token::Semicolon     => write!(f, "{}(;)", self.kind()),
            Token::Eof           => write!(f, "{}", self.kind()),
        }
    }
}

pub struct Lexer {
    chars: Vec<char>,
    pos:   usize,
    trace: bool,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Lexer{chars: text.chars().collect(), pos: 0, trace: false}
    }

    /// Log every token produced at debug level.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Produces the next token. Once the input is exhausted this
    /// returns `Token::Eof` on every call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let tok = self.scan()?;
        if self.trace {
            debug!("token at {}: {}", self.pos, tok);
        }
        Ok(tok)
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let c = match self.current() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        match c {
            c if c.is_ascii_digit() => self.integer(),
            '"' => Ok(Token::String(self.string())),
            c if c.is_alphabetic() || c == '_' => {
                let ident = self.identifier();
                if ident == "var" {
                    Ok(Token::Var)
                } else {
                    Ok(Token::Identifier(ident))
                }
            },
            '=' => {
                self.advance();
                Ok(Token::Equals)
            },
            ';' => {
                self.advance();
                Ok(Token::Semicolon)
            },
            _ => Err(LexError::UnrecognizedCharacter(c)),
        }
    }

    /// The character under the cursor, or None at end of text.
    #[inline]
    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() { break; }
            self.advance();
        }
    }

    fn integer(&mut self) -> Result<Token, LexError> {
        let mut sb = String::new();
        while let Some(c) = self.current() {
            if !c.is_ascii_digit() { break; }
            sb.push(c);
            self.advance();
        }
        match sb.parse::<u64>() {
            Ok(val) => Ok(Token::Number(val)),
            Err(_) => Err(LexError::IntegerOverflow(sb)),
        }
    }

    // A string runs until the next quote. Hitting the end of the text
    // first is not an error: whatever was read is the value.
    fn string(&mut self) -> String {
        let mut sb = String::new();
        self.advance();
        while let Some(c) = self.current() {
            if c == '"' { break; }
            sb.push(c);
            self.advance();
        }
        if self.current() == Some('"') {
            self.advance();
        }
        sb
    }

    fn identifier(&mut self) -> String {
        let mut sb = String::new();
        while let Some(c) = self.current() {
            if !(c.is_alphanumeric() || c == '_') { break; }
            sb.push(c);
            self.advance();
        }
        sb
    }
}

/// Collects every token in `text`, ending with (and including) `Token::Eof`.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(text);
    let mut out = Vec::with_capacity(8);
    loop {
        let tok = lexer.next_token()?;
        let done = tok == Token::Eof;
        out.push(tok);
        if done {
            return Ok(out);
        }
    }
}
