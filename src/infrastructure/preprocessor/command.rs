//! Preprocessor command-line assembly
//!
//! The argument order is fixed:
//! 1. `-DIDL` and `-C` (IDL mode, keep comments)
//! 2. the flavor's "no standard include path" flag
//! 3. `-I<dir>` for the directory of the input file, if it has one
//! 4. `-D<name>` per configured definition
//! 5. `-I<dir>` per configured include path
//! 6. `-o <output>`
//! 7. the raw input file, last

use std::ffi::OsString;
use std::path::{Component, Path};

use crate::domain::entities::ProcessInvocation;
use crate::domain::value_objects::PreprocessorFlavor;

/// Defines the `IDL` macro so shared headers can detect IDL compilation.
pub const IDL_MODE_FLAG: &str = "-DIDL";
/// Keeps comments in the preprocessed output.
pub const KEEP_COMMENTS_FLAG: &str = "-C";
/// Precedes the output path.
pub const OUTPUT_FLAG: &str = "-o";

/// Builder for one preprocessor invocation.
#[derive(Debug, Clone, Copy)]
pub struct PreprocessorCommand<'a> {
    flavor: PreprocessorFlavor,
    input: Option<&'a Path>,
    defines: &'a [String],
    include_paths: &'a [String],
}

impl<'a> PreprocessorCommand<'a> {
    pub fn new(flavor: PreprocessorFlavor) -> Self {
        Self {
            flavor,
            input: None,
            defines: &[],
            include_paths: &[],
        }
    }

    /// The input file as the user named it; `None` for stdin.
    pub fn input(mut self, input: Option<&'a Path>) -> Self {
        self.input = input;
        self
    }

    pub fn defines(mut self, defines: &'a [String]) -> Self {
        self.defines = defines;
        self
    }

    pub fn include_paths(mut self, include_paths: &'a [String]) -> Self {
        self.include_paths = include_paths;
        self
    }

    /// Assemble the argument vector.
    pub fn args(&self, output: &Path, raw_input: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            IDL_MODE_FLAG.into(),
            KEEP_COMMENTS_FLAG.into(),
            self.flavor.no_std_include_flag().into(),
        ];

        if let Some(flag) = self.input.and_then(input_dir_flag) {
            args.push(flag);
        }

        args.extend(prefixed_tokens("-D", self.defines));
        args.extend(prefixed_tokens("-I", self.include_paths));

        args.push(OUTPUT_FLAG.into());
        args.push(output.as_os_str().to_owned());
        args.push(raw_input.as_os_str().to_owned());
        args
    }

    /// Assemble the full invocation of `program`.
    pub fn build(&self, program: &Path, output: &Path, raw_input: &Path) -> ProcessInvocation {
        ProcessInvocation::new(program, self.args(output, raw_input))
    }
}

fn prefixed_tokens<'t>(
    flag: &'t str,
    tokens: &'t [String],
) -> impl Iterator<Item = OsString> + 't {
    tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(move |token| OsString::from(format!("{flag}{token}")))
}

/// `-I<dir>` for the directory part of `input`, with `\` rewritten to `/`.
///
/// `None` when the input has no directory component or its directory is the
/// current directory or the filesystem root.
fn input_dir_flag(input: &Path) -> Option<OsString> {
    let dir = input.parent()?;
    let meaningful = dir
        .components()
        .any(|c| matches!(c, Component::Normal(_) | Component::ParentDir));
    if !meaningful {
        return None;
    }

    let mut flag = OsString::from("-I");
    match dir.to_str() {
        Some(text) => flag.push(text.replace('\\', "/")),
        None => flag.push(dir.as_os_str()),
    }
    Some(flag)
}
