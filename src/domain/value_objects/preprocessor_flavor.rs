//! Preprocessor Flavor Value Object
//!
//! Which preprocessor variant the driver talks to. The variants disagree on
//! the spelling of "do not search the standard include path".

use serde::{Deserialize, Serialize};

/// The preprocessor variant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PreprocessorFlavor {
    /// The bundled `ucpp` shipped next to the driver (default)
    #[default]
    Ucpp,
    /// A gcc-compatible `cpp`
    Gcc,
}

impl PreprocessorFlavor {
    /// All accepted spellings, for validation messages
    pub const NAMES: &'static [&'static str] = &["ucpp", "gcc"];

    /// The flavor selected at build time.
    ///
    /// Builds against a system gcc preprocessor set
    /// `IDLC_SYSTEM_PREPROCESSOR_IS_GCC` in the build environment.
    pub fn build_default() -> Self {
        if option_env!("IDLC_SYSTEM_PREPROCESSOR_IS_GCC").is_some() {
            PreprocessorFlavor::Gcc
        } else {
            PreprocessorFlavor::Ucpp
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ucpp" => Some(PreprocessorFlavor::Ucpp),
            "gcc" | "cpp" => Some(PreprocessorFlavor::Gcc),
            _ => None,
        }
    }

    /// Flag that disables the standard system include search path.
    ///
    /// Without `-nostdinc`, gcc's cpp injects `stdc-predef.h` even when the
    /// source includes nothing.
    pub fn no_std_include_flag(self) -> &'static str {
        match self {
            PreprocessorFlavor::Ucpp => "-zI",
            PreprocessorFlavor::Gcc => "-nostdinc",
        }
    }
}
