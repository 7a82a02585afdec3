#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{ErrorTip, LexError};

pub mod errors;
pub mod lexer;
pub mod macros;

/// 1-based line and column in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line ending.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Caret diagnostic for a `LexError`, rendered through `Display`.
pub struct Diagnostic<'a> {
    pub error: &'a LexError,
    pub source: &'a str,
    pub file: &'a str,
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        /*
            Error: name (tip)
            -> main.pas:20:6
               |
            20 | x := #;
               | -----^
        */

        let error = self.error;
        let position = error.get_position();
        let line_string = position.line.to_string();
        let padding = line_string.len() + 2;

        if let ErrorTip::None = error.get_tip() {
            writeln!(f, "Error: {}", error.get_error_name())?;
        } else {
            writeln!(f, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
        }
        writeln!(f, "-> {}:{}", self.file, position)?;

        let Some(line_text) = get_line(self.source, position.line) else {
            return Ok(());
        };

        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

pub fn format_error(error: &LexError, source: &str, file: &str) -> String {
    Diagnostic { error, source, file }.to_string()
}

pub fn display_error(error: &LexError, source: &str, file: &str) {
    eprint!("{}", Diagnostic { error, source, file });
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{ErrorImpl, LexError},
        Position,
    };

    #[test]
    fn test_get_line() {
        let source = "PROGRAM Main;\r\n  VAR x : INTEGER;\nEND.";

        assert_eq!(super::get_line(source, 1), Some("PROGRAM Main;"));
        assert_eq!(super::get_line(source, 2), Some("  VAR x : INTEGER;"));
        assert_eq!(super::get_line(source, 3), Some("END."));
        assert_eq!(super::get_line(source, 4), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "BEGIN\n   x := @;\nEND.";
        let error = LexError::new(
            ErrorImpl::UnrecognisedCharacter,
            Some('@'),
            Position::new(2, 9),
        );

        let rendered = super::format_error(&error, source, "main.pas");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedCharacter");
        assert_eq!(lines[1], "-> main.pas:2:9");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x := @;");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_diagnostic_writes_through_formatter() {
        use std::fmt::Write;

        let source = "x := 1 $";
        let error = LexError::new(
            ErrorImpl::UnrecognisedCharacter,
            Some('$'),
            Position::new(1, 8),
        );

        let mut out = String::new();
        write!(out, "{}", super::Diagnostic { error: &error, source, file: "a.pas" }).unwrap();

        assert_eq!(out, super::format_error(&error, source, "a.pas"));
        assert!(out.ends_with("1 | x := 1 $\n  | -------^\n"));
    }

    #[test]
    fn test_format_error_past_last_line() {
        let source = "{ never closed";
        let error = LexError::new(ErrorImpl::UnterminatedComment, None, Position::new(3, 1));

        let rendered = super::format_error(&error, source, "main.pas");

        assert!(rendered.starts_with("Error: UnterminatedComment ("));
        assert!(rendered.contains("-> main.pas:3:1"));
        assert!(!rendered.contains('^'));
    }
}
