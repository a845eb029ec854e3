//! Structural checker for preprocessed IDL
//!
//! A replaceable implementation of the [`IdlParser`] port. It does not know the
//! IDL grammar; it reports the structural mistakes that make a file
//! unparseable:
//! - unbalanced or mismatched `{}`, `()`, `[]`
//! - a closing `}` not followed by `;`
//! - unterminated string/character literals and block comments
//! - characters that cannot appear in IDL outside literals
//!
//! Line markers emitted by the preprocessor are honoured, and a marker naming
//! the raw temp copy is reported under the user's file name.

mod diagnostic;
mod scanner;

use std::io::BufRead;

use log::debug;

use crate::domain::entities::SourceNames;
use crate::domain::ports::IdlParser;

pub use diagnostic::Diagnostic;
use scanner::{is_directive, opener_for, parse_line_marker, Scanner, Token};

#[derive(Debug, Clone)]
struct Location {
    file: String,
    line: usize,
}

/// Checks delimiter structure, literals and the character set.
#[derive(Debug, Default)]
pub struct StructuralParser {
    diagnostics: Vec<Diagnostic>,
}

impl StructuralParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics from the most recent [`IdlParser::parse`] call.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl IdlParser for StructuralParser {
    fn parse(&mut self, input: &mut dyn BufRead, names: &SourceNames) -> usize {
        let mut check = Check::new(names);
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            match input.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => {
                    let text = String::from_utf8_lossy(&buffer);
                    check.line(text.trim_end_matches(['\n', '\r']));
                }
                Err(e) => {
                    check.error_here(format!("could not read preprocessed input: {e}"));
                    break;
                }
            }
        }

        self.diagnostics = check.finish();
        debug!("structural check found {} error(s)", self.diagnostics.len());
        self.diagnostics.len()
    }
}

/// State of one pass over the input.
struct Check<'a> {
    names: &'a SourceNames,
    file: String,
    line: usize,
    scanner: Scanner,
    open: Vec<(char, Location)>,
    awaiting_semicolon: Option<Location>,
    comment_start: Option<Location>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Check<'a> {
    fn new(names: &'a SourceNames) -> Self {
        Self {
            names,
            file: names.file_name.clone(),
            line: 0,
            scanner: Scanner::new(),
            open: Vec::new(),
            awaiting_semicolon: None,
            comment_start: None,
            diagnostics: Vec::new(),
        }
    }

    fn here(&self) -> Location {
        Location {
            file: self.file.clone(),
            line: self.line,
        }
    }

    fn error_at(&mut self, at: Location, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::new(at.file, at.line, message));
    }

    fn error_here(&mut self, message: impl Into<String>) {
        let at = self.here();
        self.error_at(at, message);
    }

    fn line(&mut self, text: &str) {
        self.line += 1;

        if !self.scanner.in_block_comment() && is_directive(text) {
            if let Some(marker) = parse_line_marker(text) {
                // The marker names the line that follows it.
                self.line = marker.line.saturating_sub(1);
                if let Some(file) = marker.file {
                    self.file = self.names.display_name_for(&file).to_string();
                }
            }
            return;
        }

        let was_in_comment = self.scanner.in_block_comment();
        for token in self.scanner.scan_line(text) {
            self.token(token);
        }
        if !was_in_comment && self.scanner.in_block_comment() {
            self.comment_start = Some(self.here());
        }
    }

    fn token(&mut self, token: Token) {
        if let Some(brace) = self.awaiting_semicolon.take() {
            if token != Token::Semicolon {
                self.error_at(brace, "expected ';' after '}'");
            }
        }

        match token {
            Token::Open(c) => {
                let at = self.here();
                self.open.push((c, at));
            }
            Token::Close(c) => self.close(c),
            Token::Stray(c) => self.error_here(format!("stray '{}' in input", c.escape_default())),
            Token::UnterminatedString => self.error_here("unterminated literal"),
            Token::Semicolon | Token::Word | Token::Punct => {}
        }
    }

    fn close(&mut self, c: char) {
        let expected = opener_for(c);
        match self.open.pop() {
            Some((open, _)) if Some(open) == expected => {
                if c == '}' {
                    self.awaiting_semicolon = Some(self.here());
                }
            }
            Some((open, at)) => {
                let message = format!(
                    "'{c}' does not match '{open}' opened at {}:{}",
                    at.file, at.line
                );
                self.error_here(message);
            }
            None => self.error_here(format!("unmatched '{c}'")),
        }
    }

    fn finish(mut self) -> Vec<Diagnostic> {
        if let Some(brace) = self.awaiting_semicolon.take() {
            self.error_at(brace, "expected ';' after '}'");
        }
        if self.scanner.in_block_comment() {
            let at = self.comment_start.take().unwrap_or_else(|| self.here());
            self.error_at(at, "unterminated comment");
        }
        for (open, at) in std::mem::take(&mut self.open) {
            self.error_at(at, format!("unclosed '{open}'"));
        }
        self.diagnostics
    }
}
