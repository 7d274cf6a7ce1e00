//! # Runtime Configuration
//!
//! Options are collected from the command line by the binary and handed down
//! by reference. There are no configuration files.

use std::fmt;
use std::str::FromStr;

pub struct Config {
    /// Skips the banner line printed before the demonstration.
    pub no_banner: bool,
    /// Verbosity reduction. Any value above zero hides banner and headers.
    pub quiet: u8,
    /// Language used for every line of demonstration output.
    pub lang: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            lang: Language::English,
        }
    }
}

/// Output language of the demonstration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl FromStr for Language {
    type Err = String;

    /// Accepts the ISO 639-1 code or the English name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "pt" | "portuguese" => Ok(Language::Portuguese),
            other => Err(format!("unsupported language '{other}', expected 'en' or 'pt'")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        };
        f.write_str(code)
    }
}
