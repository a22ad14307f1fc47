use super::bits;
use crate::types::Format;

/// Classifies trimmed input. A space wins over a comma, which wins over
/// an undelimited run of binary digits.
pub fn detect_format(raw: &str) -> Format {
    let trimmed = raw.trim();

    if trimmed.contains(' ') {
        Format::Space
    } else if trimmed.contains(',') {
        Format::Comma
    } else if bits::is_binary(trimmed) {
        Format::Continuous
    } else {
        Format::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_space() {
        assert_eq!(detect_format("01000001 01000010"), Format::Space);
    }

    #[test]
    fn test_detect_comma() {
        assert_eq!(detect_format("01000001,01000010"), Format::Comma);
    }

    #[test]
    fn test_detect_continuous() {
        assert_eq!(detect_format("0100000101000010"), Format::Continuous);
        assert_eq!(detect_format("  1  "), Format::Continuous);
    }

    #[test]
    fn test_detect_invalid() {
        assert_eq!(detect_format("hello"), Format::Invalid);
        assert_eq!(detect_format(""), Format::Invalid);
        assert_eq!(detect_format("   "), Format::Invalid);
        assert_eq!(detect_format("0102"), Format::Invalid);
    }

    #[test]
    fn test_detect_space_beats_comma() {
        assert_eq!(detect_format("1 0,1 1"), Format::Space);
        assert_eq!(detect_format("101, 1100"), Format::Space);
    }

    #[test]
    fn test_detect_space_ignores_content() {
        assert_eq!(detect_format("hello world"), Format::Space);
        assert_eq!(detect_format("a,b"), Format::Comma);
    }

    #[test]
    fn test_detect_newline_only_is_invalid() {
        assert_eq!(detect_format("0100\n0001"), Format::Invalid);
    }
}
