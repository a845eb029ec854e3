//! Environment variable validation
//!
//! Invalid values never abort a run: the validator reports them with a
//! typo suggestion and the caller keeps its current value.

use std::io::Write;

/// Validator for one enum-like environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, warning on stderr and returning `fallback` if invalid.
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Parse `value`, writing any warning to `writer`.
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let _ = writeln!(
            writer,
            "warning: ignoring {}={:?}{} (expected one of: {})",
            self.var_name,
            value,
            self.suggestion(value),
            self.valid_values.join(", ")
        );
        fallback
    }

    fn suggestion(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|&(_, dist)| dist)
            .filter(|&(_, dist)| dist > 0 && dist <= 2)
            .map(|(valid, _)| format!(", did you mean '{valid}'?"))
            .unwrap_or_default()
    }
}

/// Edit distance between two ASCII-ish strings, used for typo suggestions.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
