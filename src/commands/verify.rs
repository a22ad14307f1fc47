use serde::Serialize;

use crate::io::read_input;
use binconv::error::Result;
use binconv::interchange::{from_json, verify};
use binconv::result::ConversionType;
use binconv::types::InputSource;

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub schema_version: u32,
    pub valid: bool,
    pub conversion_type: ConversionType,
    pub error: Option<String>,
}

pub fn run_verify(input: &InputSource) -> Result<VerifyResult> {
    let content = read_input(input)?;
    let document = from_json(&content)?;

    let error = verify(&document).err().map(|e| e.to_string());
    Ok(VerifyResult {
        schema_version: 1,
        valid: error.is_none(),
        conversion_type: document.conversion_type(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use binconv::interchange::to_json;

    #[test]
    fn test_verify_valid_document() {
        let doc = to_json(&binconv::encode("check").unwrap()).unwrap();
        let result = run_verify(&InputSource::Literal(doc)).unwrap();
        assert!(result.valid);
        assert!(result.error.is_none());
        assert_eq!(result.conversion_type, ConversionType::TextToBinary);
    }

    #[test]
    fn test_verify_tampered_document() {
        let doc = r#"{
            "conversionType": "binary-to-text",
            "input": { "binaryString": "01000001", "binaryArray": ["01000001"] },
            "output": { "decodedText": "B", "characterCount": 1 }
        }"#;
        let result = run_verify(&InputSource::Literal(doc.to_string())).unwrap();
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("does not match"));
    }

    #[test]
    fn test_verify_malformed_document() {
        assert!(run_verify(&InputSource::Literal("{}".to_string())).is_err());
    }
}
