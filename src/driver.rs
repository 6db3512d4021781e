//! Drives the transpiler over user input, either interactively
//! line by line or over every line of a file.
use std::io::{self, BufRead, Write};
use term_grid::{Grid, GridOptions, Direction, Filling, Cell};

use crate::transpiler::lexer::Lexer;
use crate::transpiler::parser::{Transpiled, Transpiler};
use crate::transpiler::error::TranspileError;

const RULE: &str = "============================================================";
const PROMPT: &str = "Enter declarations (or 'exit' to quit): ";

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub verbosity:   u64,
    pub input:       Option<String>,
    pub output:      Option<String>,
    pub print_debug: bool,
    pub dump_tokens: bool,
}

fn transpile(config: &Config, line: &str) -> Result<Transpiled, TranspileError> {
    let lexer = Lexer::new(line).with_trace(config.dump_tokens);
    Transpiler::new(lexer)?.run()
}

fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Runs the interactive loop until `exit` or end of input. Errors in a
/// line are reported and the loop carries on; only I/O errors end it early.
pub fn repl<R: BufRead, W: Write>(config: &Config, mut input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "JavaScript to Python transpiler")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "\nEnter variable declarations in JavaScript syntax:")?;
    writeln!(out, "Example: var x = 10; var nome = \"Lucas\";")?;
    writeln!(out, "Type 'exit' to quit\n")?;

    let mut buf = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            info!("end of input, leaving");
            break;
        }

        let line = buf.trim();
        if is_exit(line) {
            break;
        }
        if line.is_empty() {
            writeln!(out, "Please enter a valid declaration.\n")?;
            continue;
        }

        match transpile(config, line) {
            Ok(result) => {
                writeln!(out, "--- TRANSPILATION LOG ---")?;
                for trace in result.trace() {
                    writeln!(out, "{}", trace)?;
                }
                writeln!(out, "\n--- GENERATED CODE (Python) ---")?;
                writeln!(out, "{}", result.code())?;
                if config.print_debug {
                    print_grid(out, &result)?;
                }
                writeln!(out)?;
            },
            Err(e) => writeln!(out, "\nError: {}\n", e)?,
        }
    }

    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "Goodbye!")?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// Transpiles every non-empty line of `input`. Traces go to `out`, generated
/// code to `code`. Returns the number of lines that failed.
pub fn batch<R: BufRead, W: Write, C: Write>(config: &Config, input: R, out: &mut W, code: &mut C) -> io::Result<usize> {
    let mut error_count: usize = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match transpile(config, line) {
            Ok(result) => {
                for trace in result.trace() {
                    writeln!(out, "{}", trace)?;
                }
                if config.print_debug {
                    print_grid(out, &result)?;
                }
                if !result.statements.is_empty() {
                    writeln!(code, "{}", result.code())?;
                }
            },
            Err(e) => {
                error_count += 1;
                error!("Error on line {}: {}", index + 1, e);
            },
        }
    }

    if error_count > 0 {
        error!("{} line(s) failed to transpile.", error_count);
    }
    Ok(error_count)
}

fn print_grid<W: Write>(out: &mut W, result: &Transpiled) -> io::Result<()> {
    let mut grid = Grid::new(GridOptions {
        filling:     Filling::Spaces(1),
        direction:   Direction::LeftToRight,
    });

    for (idx, stmt) in result.statements.iter().enumerate() {
        grid.add(Cell::from(format!("0x{:04X}:", idx)));
        grid.add(Cell::from(format!("{}", stmt)));
        grid.add(Cell::from("=>".to_string()));
        grid.add(Cell::from(stmt.emit()));
    }

    writeln!(out, "{}", grid.fit_into_columns(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_repl(config: &Config, input: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        repl(config, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_is_exit() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("Quit"));
        assert!(!is_exit("exit;"));
        assert!(!is_exit(""));
    }

    #[test]
    fn test_repl_transpiles() {
        let out = run_repl(&Config::default(), "var x = 10; var nome = \"AB\";\nexit\n");
        assert!(out.contains("--- TRANSPILATION LOG ---\n\
            Processing ('x', 10): Hex: 0xa\n\
            Processing ('nome', \"AB\"): Hex: 0x41 0x42\n"));
        assert!(out.contains("--- GENERATED CODE (Python) ---\nx = 10\nnome = 'AB'\n"));
        assert!(out.ends_with(&format!("Goodbye!\n{}\n", RULE)));
    }

    #[test]
    fn test_repl_keeps_going() {
        let out = run_repl(&Config::default(), "var 5 = 10;\n\n  \nvar y = 2;\n");
        assert!(out.contains("Error: syntax error: unexpected token: expected IDENTIFIER, found NUMBER"));
        assert_eq!(out.matches("Please enter a valid declaration.").count(), 2);
        assert!(out.contains("y = 2\n"));
        // Four prompts for four lines, plus the one that hit end of input.
        assert_eq!(out.matches(PROMPT).count(), 5);
    }

    #[test]
    fn test_repl_exit_stops_reading() {
        let out = run_repl(&Config::default(), "  Exit  \nvar y = 2;\n");
        assert!(!out.contains("y = 2"));
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn test_repl_lex_error() {
        let out = run_repl(&Config::default(), "var x = 10;+\n");
        assert!(out.contains("\nError: lexing error: unrecognized character: +\n"));
        assert!(!out.contains("--- GENERATED CODE"));
    }

    #[test]
    fn test_repl_print_debug() {
        let config = Config{print_debug: true, ..Config::default()};
        let out = run_repl(&config, "var x = 10;\n");
        assert!(out.contains("0x0000:"));
        assert!(out.contains("var x = 10;"));
        assert!(out.contains("=>"));
    }

    #[test]
    fn test_batch() {
        let input = "var a = 1;\n\nvar 5 = 1;\nvar b = \"hi\"; var c = 3;\n";
        let mut out: Vec<u8> = Vec::new();
        let mut code: Vec<u8> = Vec::new();

        let failed = batch(&Config::default(), input.as_bytes(), &mut out, &mut code).unwrap();
        assert_eq!(failed, 1);
        assert_eq!(String::from_utf8(code).unwrap(), "a = 1\nb = 'hi'\nc = 3\n");
        assert_eq!(String::from_utf8(out).unwrap(),
            "Processing ('a', 1): Hex: 0x1\n\
             Processing ('b', \"hi\"): Hex: 0x68 0x69\n\
             Processing ('c', 3): Hex: 0x3\n");
    }
}
