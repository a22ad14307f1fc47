use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::codec::detect_format;

/// Concrete layout of a binary input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Space,
    Comma,
    Continuous,
    Invalid,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Space => "space",
            Format::Comma => "comma",
            Format::Continuous => "continuous",
            Format::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format selected by the user; `Auto` defers to format detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    #[default]
    Auto,
    Space,
    Comma,
    Continuous,
}

impl FormatMode {
    pub fn resolve(&self, raw: &str) -> Format {
        match self {
            FormatMode::Auto => detect_format(raw),
            FormatMode::Space => Format::Space,
            FormatMode::Comma => Format::Comma,
            FormatMode::Continuous => Format::Continuous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatMode::Auto => "auto",
            FormatMode::Space => "space",
            FormatMode::Comma => "comma",
            FormatMode::Continuous => "continuous",
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                if Self::looks_like_path(s) {
                    eprintln!("Warning: treating '{}' as literal data. Use @{} to read from file.", s, s);
                }
                InputSource::Literal(s.to_string())
            }
        }
    }

    /// Name used to decide whether the source is a JSON document.
    /// Stdin and literals have none and are taken as JSON content.
    pub fn file_name(&self) -> Option<String> {
        match self {
            InputSource::File(path) => Some(path.display().to_string()),
            InputSource::Literal(_) | InputSource::Stdin => None,
        }
    }

    fn looks_like_path(s: &str) -> bool {
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        [".txt", ".json", ".bin"].iter().any(|ext| s.ends_with(ext))
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}
