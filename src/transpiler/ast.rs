//! A parsed declaration and its rendering in both directions: the Python
//! assignment it transpiles to, and the hex trace logged while doing so.
//!
//! ```js
//! var x = 10;          // x = 10
//! var nome = "AB";     // nome = 'AB'
//! var q = "it's";      // q = "it's"
//! ```

use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    Integer(u64),
    Str(String),
}

impl Value {
    /// The Python literal for this value.
    pub fn to_python(&self) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Str(s)     => python_repr(s),
        }
    }

    /// Hexadecimal form of the value. Integers render as a single
    /// number; strings as the code point of each character.
    pub fn hex(&self) -> String {
        match self {
            Value::Integer(n) => format!("{:#x}", n),
            Value::Str(s)     => s.chars()
                .map(|c| format!("{:#x}", c as u32))
                .collect::<Vec<String>>()
                .join(" "),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Str(s)     => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Statement {
    pub name:  String,
    pub value: Value,
}

impl Statement {
    pub fn new(name: String, value: Value) -> Self {
        Statement{name, value}
    }

    /// The generated Python line, `name = literal`.
    pub fn emit(&self) -> String {
        format!("{} = {}", self.name, self.value.to_python())
    }

    /// The diagnostic line logged for this statement.
    pub fn trace(&self) -> String {
        format!("Processing ('{}', {}): Hex: {}", self.name, self.value, self.value.hex())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "var {} = {};", self.name, self.value)
    }
}

/// Renders `s` the way Python's `repr` does for a str.
fn python_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\'                => out.push_str("\\\\"),
            '\n'                => out.push_str("\\n"),
            '\r'                => out.push_str("\\r"),
            '\t'                => out.push_str("\\t"),
            c if c == quote     => { out.push('\\'); out.push(c); },
            c if c.is_control() => {
                let cp = c as u32;
                if cp <= 0xFF {
                    out.push_str(&format!("\\x{:02x}", cp));
                } else {
                    out.push_str(&format!("\\u{:04x}", cp));
                }
            },
            c                   => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(name: &str, value: &str) -> Statement {
        Statement::new(name.to_owned(), Value::Str(value.to_owned()))
    }

    #[test]
    fn test_hex() {
        assert_eq!(Value::Integer(0).hex(), "0x0");
        assert_eq!(Value::Integer(10).hex(), "0xa");
        assert_eq!(Value::Integer(255).hex(), "0xff");
        assert_eq!(Value::Integer(u64::MAX).hex(), "0xffffffffffffffff");

        assert_eq!(Value::Str("AB".to_owned()).hex(), "0x41 0x42");
        assert_eq!(Value::Str(String::new()).hex(), "");
        assert_eq!(Value::Str("ç €".to_owned()).hex(), "0xe7 0x20 0x20ac");
    }

    #[test]
    fn test_python_repr() {
        assert_eq!(python_repr("AB"), "'AB'");
        assert_eq!(python_repr(""), "''");
        assert_eq!(python_repr("it's"), "\"it's\"");
        assert_eq!(python_repr("it's \"x\""), "'it\\'s \"x\"'");
        assert_eq!(python_repr("a\\b"), "'a\\\\b'");
        assert_eq!(python_repr("a\tb\n"), "'a\\tb\\n'");
        assert_eq!(python_repr("\u{1}\u{7f}"), "'\\x01\\x7f'");
        assert_eq!(python_repr("ação"), "'ação'");
    }

    #[test]
    fn test_emit() {
        assert_eq!(Statement::new("x".to_owned(), Value::Integer(10)).emit(), "x = 10");
        assert_eq!(string("nome", "AB").emit(), "nome = 'AB'");
        assert_eq!(string("q", "it's").emit(), "q = \"it's\"");
    }

    #[test]
    fn test_trace() {
        assert_eq!(Statement::new("x".to_owned(), Value::Integer(10)).trace(),
            "Processing ('x', 10): Hex: 0xa");
        assert_eq!(string("nome", "AB").trace(),
            "Processing ('nome', \"AB\"): Hex: 0x41 0x42");
        assert_eq!(string("e", "").trace(),
            "Processing ('e', \"\"): Hex: ");
    }

    #[test]
    fn test_display() {
        assert_eq!(string("nome", "AB").to_string(), "var nome = \"AB\";");
        assert_eq!(Statement::new("x".to_owned(), Value::Integer(3)).to_string(), "var x = 3;");
    }
}
