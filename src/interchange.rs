use serde_json::{Map, Value};

use crate::codec::{decode, encode};
use crate::error::{BinconvError, Result};
use crate::result::{ConversionResult, ConversionType};
use crate::types::FormatMode;

const REQUIRED_FIELDS: [&str; 3] = ["conversionType", "input", "output"];

pub fn to_json(result: &ConversionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Parses a saved conversion. Nothing is returned unless the whole
/// document is usable.
pub fn from_json(text: &str) -> Result<ConversionResult> {
    let value: Value = serde_json::from_str(text)?;
    let doc = value
        .as_object()
        .ok_or_else(|| BinconvError::malformed_json("document is not a JSON object"))?;

    for field in REQUIRED_FIELDS {
        if !is_present(doc, field) {
            return Err(BinconvError::malformed_json(format!("missing field `{}`", field)));
        }
    }

    let name = match &doc["conversionType"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match ConversionType::from_name(&name) {
        Some(ConversionType::TextToBinary) => Ok(ConversionResult::Encoded(serde_json::from_value(value)?)),
        Some(ConversionType::BinaryToText) => Ok(ConversionResult::Decoded(serde_json::from_value(value)?)),
        None => Err(BinconvError::unknown_conversion_type(name)),
    }
}

fn is_present(doc: &Map<String, Value>, field: &str) -> bool {
    match doc.get(field) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

pub fn is_json_file_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".json")
}

pub fn suggested_file_name(conversion: ConversionType, millis: u128) -> String {
    format!("{}-{}.json", conversion, millis)
}

/// Re-runs the recorded conversion and checks it reproduces the stored output.
pub fn verify(result: &ConversionResult) -> Result<()> {
    match result {
        ConversionResult::Encoded(r) => {
            let fresh = encode(&r.input.original_text)
                .ok_or_else(|| BinconvError::empty_input("document has no original text"))?;
            if fresh.output_text() != r.output.binary_string {
                return Err(BinconvError::mismatch(format!(
                    "stored binary '{}' does not match '{}'",
                    r.output.binary_string,
                    fresh.output_text()
                )));
            }
        }
        ConversionResult::Decoded(r) => {
            // Chunks were already split, so re-joining them with spaces
            // is independent of the format originally selected.
            let joined = r.input.binary_array.join(" ");
            let fresh = decode(&joined, FormatMode::Space)
                .ok_or_else(|| BinconvError::invalid_binary("stored binary array does not decode"))?;
            if fresh.output_text() != r.output.decoded_text {
                return Err(BinconvError::mismatch(format!(
                    "stored text {:?} does not match {:?}",
                    r.output.decoded_text,
                    fresh.output_text()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_encode() {
        let result = encode("Hi!").unwrap();
        let json = to_json(&result).unwrap();
        assert!(json.contains("\"conversionType\": \"text-to-binary\""));
        assert!(json.contains("\"originalText\": \"Hi!\""));
        assert_eq!(from_json(&json).unwrap(), result);
    }

    #[test]
    fn test_save_decode_includes_warnings() {
        let result = decode("00000111", FormatMode::Auto).unwrap();
        let value: Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(value["conversionType"], "binary-to-text");
        assert_eq!(value["output"]["decodedText"], "\u{7}");
        assert_eq!(value["output"]["characterCount"], 1);
        assert_eq!(value["warnings"][0], "Non-printable character detected: ASCII 7");
    }

    #[test]
    fn test_encode_document_has_no_warnings_field() {
        let value: Value = serde_json::from_str(&to_json(&encode("a").unwrap()).unwrap()).unwrap();
        assert!(value.get("warnings").is_none());
        assert!(value.get("breakdown").is_some());
    }

    #[test]
    fn test_load_minimal_document() {
        let json = r#"{
            "conversionType": "text-to-binary",
            "input": { "originalText": "A", "characterCount": 1 },
            "output": { "binaryString": "01000001", "binaryArray": ["01000001"] }
        }"#;
        let result = from_json(json).unwrap();
        assert_eq!(result.source(), "A");
        assert!(result.breakdown().is_empty());
        assert_eq!(result.timestamp(), "");
    }

    #[test]
    fn test_load_rejects_non_json() {
        let err = from_json("not json at all").unwrap_err();
        assert!(matches!(err, BinconvError::MalformedJson { .. }));
    }

    #[test]
    fn test_load_rejects_non_object() {
        assert!(matches!(from_json("[1, 2]").unwrap_err(), BinconvError::MalformedJson { .. }));
    }

    #[test]
    fn test_load_rejects_missing_fields() {
        for json in [
            r#"{"input": {}, "output": {}}"#,
            r#"{"conversionType": "text-to-binary", "output": {}}"#,
            r#"{"conversionType": "text-to-binary", "input": {}}"#,
            r#"{"conversionType": "", "input": {}, "output": {}}"#,
            r#"{"conversionType": "text-to-binary", "input": null, "output": {}}"#,
        ] {
            let err = from_json(json).unwrap_err();
            assert!(matches!(err, BinconvError::MalformedJson { .. }), "{}", json);
        }
    }

    #[test]
    fn test_load_rejects_incomplete_sections() {
        let json = r#"{"conversionType": "text-to-binary", "input": {"characterCount": 1}, "output": {}}"#;
        assert!(matches!(from_json(json).unwrap_err(), BinconvError::MalformedJson { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_type() {
        let json = r#"{"conversionType": "hex-to-text", "input": {}, "output": {}}"#;
        match from_json(json).unwrap_err() {
            BinconvError::UnknownConversionType { name } => assert_eq!(name, "hex-to-text"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_non_string_type_is_unknown() {
        let json = r#"{"conversionType": 7, "input": {}, "output": {}}"#;
        assert!(matches!(from_json(json).unwrap_err(), BinconvError::UnknownConversionType { .. }));
    }

    #[test]
    fn test_is_json_file_name() {
        assert!(is_json_file_name("result.json"));
        assert!(is_json_file_name("RESULT.JSON"));
        assert!(!is_json_file_name("result.txt"));
        assert!(!is_json_file_name("json"));
    }

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(
            suggested_file_name(ConversionType::TextToBinary, 1_700_000_000_000),
            "text-to-binary-1700000000000.json"
        );
    }

    #[test]
    fn test_verify_round_trip() {
        verify(&encode("verify me").unwrap()).unwrap();
        verify(&decode("1001000,1101001", FormatMode::Comma).unwrap()).unwrap();
    }

    #[test]
    fn test_verify_detects_tampering() {
        let json = r#"{
            "conversionType": "text-to-binary",
            "input": { "originalText": "A", "characterCount": 1 },
            "output": { "binaryString": "01000010", "binaryArray": ["01000010"] }
        }"#;
        let err = verify(&from_json(json).unwrap()).unwrap_err();
        assert!(matches!(err, BinconvError::Mismatch { .. }));
    }
}
