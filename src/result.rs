use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::display::display_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionType {
    #[serde(rename = "text-to-binary")]
    TextToBinary,
    #[serde(rename = "binary-to-text")]
    BinaryToText,
}

impl ConversionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionType::TextToBinary => "text-to-binary",
            ConversionType::BinaryToText => "binary-to-text",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text-to-binary" => Some(ConversionType::TextToBinary),
            "binary-to-text" => Some(ConversionType::BinaryToText),
            _ => None,
        }
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the per-character audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub character: String,
    pub display_char: String,
    pub ascii_value: u32,
    pub binary_code: String,
}

impl BreakdownEntry {
    pub fn new(character: char, binary_code: String) -> Self {
        Self {
            character: character.to_string(),
            display_char: display_char(character),
            ascii_value: character as u32,
            binary_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    pub original_text: String,
    pub character_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryOutput {
    pub binary_string: String,
    pub binary_array: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryInput {
    pub binary_string: String,
    pub binary_array: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOutput {
    pub decoded_text: String,
    pub character_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResult {
    #[serde(default)]
    pub timestamp: String,
    pub input: TextInput,
    pub output: BinaryOutput,
    #[serde(default)]
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResult {
    #[serde(default)]
    pub timestamp: String,
    pub input: BinaryInput,
    pub output: TextOutput,
    #[serde(default)]
    pub breakdown: Vec<BreakdownEntry>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "conversionType")]
pub enum ConversionResult {
    #[serde(rename = "text-to-binary")]
    Encoded(EncodeResult),
    #[serde(rename = "binary-to-text")]
    Decoded(DecodeResult),
}

impl ConversionResult {
    pub fn conversion_type(&self) -> ConversionType {
        match self {
            ConversionResult::Encoded(_) => ConversionType::TextToBinary,
            ConversionResult::Decoded(_) => ConversionType::BinaryToText,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            ConversionResult::Encoded(r) => &r.timestamp,
            ConversionResult::Decoded(r) => &r.timestamp,
        }
    }

    /// The text a session restores into its input field.
    pub fn source(&self) -> &str {
        match self {
            ConversionResult::Encoded(r) => &r.input.original_text,
            ConversionResult::Decoded(r) => &r.input.binary_string,
        }
    }

    /// The converted text, as copied to the clipboard.
    pub fn output_text(&self) -> &str {
        match self {
            ConversionResult::Encoded(r) => &r.output.binary_string,
            ConversionResult::Decoded(r) => &r.output.decoded_text,
        }
    }

    pub fn breakdown(&self) -> &[BreakdownEntry] {
        match self {
            ConversionResult::Encoded(r) => &r.breakdown,
            ConversionResult::Decoded(r) => &r.breakdown,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            ConversionResult::Encoded(_) => &[],
            ConversionResult::Decoded(r) => &r.warnings,
        }
    }

    pub fn character_count(&self) -> usize {
        match self {
            ConversionResult::Encoded(r) => r.input.character_count,
            ConversionResult::Decoded(r) => r.output.character_count,
        }
    }

    pub fn as_encoded(&self) -> Option<&EncodeResult> {
        match self {
            ConversionResult::Encoded(r) => Some(r),
            ConversionResult::Decoded(_) => None,
        }
    }

    pub fn as_decoded(&self) -> Option<&DecodeResult> {
        match self {
            ConversionResult::Decoded(r) => Some(r),
            ConversionResult::Encoded(_) => None,
        }
    }
}

pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

/// RFC 3339 UTC with millisecond precision.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_epoch() {
        assert_eq!(format_timestamp(DateTime::<Utc>::UNIX_EPOCH), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_format_timestamp_leap_day() {
        let t = Utc.with_ymd_and_hms(2000, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(t), "2000-02-29T00:00:00.000Z");
    }

    #[test]
    fn test_format_timestamp_millis() {
        let t = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(format_timestamp(t), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_timestamp_now_parses_back() {
        let stamp = timestamp_now();
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[test]
    fn test_conversion_type_names() {
        assert_eq!(ConversionType::from_name("text-to-binary"), Some(ConversionType::TextToBinary));
        assert_eq!(ConversionType::from_name("binary-to-text"), Some(ConversionType::BinaryToText));
        assert_eq!(ConversionType::from_name("hex-to-text"), None);
        assert_eq!(ConversionType::BinaryToText.to_string(), "binary-to-text");
    }

    #[test]
    fn test_breakdown_entry_serializes_camel_case() {
        let entry = BreakdownEntry::new(' ', "00100000".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["character"], " ");
        assert_eq!(json["displayChar"], "(space)");
        assert_eq!(json["asciiValue"], 32);
        assert_eq!(json["binaryCode"], "00100000");
    }
}
