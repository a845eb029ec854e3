//! Line-oriented lexical scan of preprocessed IDL.
//!
//! The scanner knows about comments, string and character literals, and
//! preprocessor line markers. It reduces everything else to the handful of
//! tokens the structural checks care about.

/// A significant token on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open(char),
    Close(char),
    Semicolon,
    /// Identifier, keyword, number or literal
    Word,
    /// Any other permitted punctuation
    Punct,
    Stray(char),
    UnterminatedString,
}

/// The opener matching a closing delimiter.
pub fn opener_for(close: char) -> Option<char> {
    match close {
        '}' => Some('{'),
        ')' => Some('('),
        ']' => Some('['),
        _ => None,
    }
}

const PUNCTUATION: &str = ":,=+-*/%~|^&<>.@!?#";

/// Carries block-comment state from one line to the next.
#[derive(Debug, Default)]
pub struct Scanner {
    in_block_comment: bool,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Tokenize one line, without its terminator.
    pub fn scan_line(&mut self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if self.in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '"' | '\'' => {
                    let mut terminated = false;
                    while let Some(s) = chars.next() {
                        if s == '\\' {
                            chars.next();
                        } else if s == c {
                            terminated = true;
                            break;
                        }
                    }
                    tokens.push(if terminated {
                        Token::Word
                    } else {
                        Token::UnterminatedString
                    });
                }
                '{' | '(' | '[' => tokens.push(Token::Open(c)),
                '}' | ')' | ']' => tokens.push(Token::Close(c)),
                ';' => tokens.push(Token::Semicolon),
                c if c.is_ascii_alphanumeric() || c == '_' => {
                    while chars
                        .peek()
                        .is_some_and(|n| n.is_ascii_alphanumeric() || *n == '_')
                    {
                        chars.next();
                    }
                    tokens.push(Token::Word);
                }
                c if c.is_whitespace() => {}
                c if PUNCTUATION.contains(c) => tokens.push(Token::Punct),
                c => tokens.push(Token::Stray(c)),
            }
        }

        tokens
    }
}

/// A preprocessor line marker: the next line is `line` of `file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMarker {
    pub line: usize,
    pub file: Option<String>,
}

/// Whether `line` is a preprocessor directive left in the output.
pub fn is_directive(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Parse `# 12 "file" flags...` (gcc) or `#line 12 "file"` (ucpp).
pub fn parse_line_marker(line: &str) -> Option<LineMarker> {
    let rest = line.trim_start().strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix("line").unwrap_or(rest).trim_start();

    let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits == 0 {
        return None;
    }
    let number = rest[..digits].parse().ok()?;

    let rest = rest[digits..].trim_start();
    let file = rest.strip_prefix('"').and_then(unquote);

    Some(LineMarker { line: number, file })
}

fn unquote(quoted: &str) -> Option<String> {
    let mut name = String::new();
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(name),
            '\\' => name.push(chars.next()?),
            c => name.push(c),
        }
    }
    None
}
