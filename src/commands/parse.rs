use serde::Serialize;

use crate::io::read_input;
use binconv::codec::parse_chunks;
use binconv::error::Result;
use binconv::types::{Format, FormatMode, InputSource};

#[derive(Debug, Serialize)]
pub struct ParseResult {
    pub schema_version: u32,
    pub mode: FormatMode,
    pub format: Format,
    pub valid: bool,
    pub chunks: Vec<String>,
}

pub fn run_parse(input: &InputSource, mode: FormatMode) -> Result<ParseResult> {
    let raw = read_input(input)?;
    let chunks = parse_chunks(&raw, mode);

    Ok(ParseResult {
        schema_version: 1,
        mode,
        format: mode.resolve(raw.trim()),
        valid: chunks.is_some(),
        chunks: chunks.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str, mode: FormatMode) -> ParseResult {
        run_parse(&InputSource::Literal(s.to_string()), mode).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let r = parse("101,1100", FormatMode::Auto);
        assert!(r.valid);
        assert_eq!(r.format, Format::Comma);
        assert_eq!(r.chunks, vec!["101", "1100"]);
    }

    #[test]
    fn test_parse_space_precedence_rejects() {
        let r = parse("1 0,1 1", FormatMode::Auto);
        assert!(!r.valid);
        assert_eq!(r.format, Format::Space);
        assert!(r.chunks.is_empty());
    }

    #[test]
    fn test_parse_explicit_mode_reported() {
        let r = parse("0100000101", FormatMode::Continuous);
        assert_eq!(r.mode, FormatMode::Continuous);
        assert_eq!(r.chunks, vec!["01000001", "01"]);
    }
}
