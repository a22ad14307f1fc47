use super::bits;
use crate::result::{timestamp_now, BinaryOutput, BreakdownEntry, ConversionResult, EncodeResult, TextInput};

/// Binary code for one character, widened past 8 bits only above U+00FF.
pub fn encode_char(c: char) -> String {
    let value = c as u32;
    bits::to_binary(value, bits::width_for(value))
}

/// Converts text to space-separated binary codes. Empty text yields `None`.
pub fn encode(text: &str) -> Option<ConversionResult> {
    if text.is_empty() {
        return None;
    }

    let breakdown: Vec<BreakdownEntry> = text
        .chars()
        .map(|c| BreakdownEntry::new(c, encode_char(c)))
        .collect();
    let binary_array: Vec<String> = breakdown.iter().map(|e| e.binary_code.clone()).collect();

    Some(ConversionResult::Encoded(EncodeResult {
        timestamp: timestamp_now(),
        input: TextInput {
            original_text: text.to_string(),
            character_count: breakdown.len(),
        },
        output: BinaryOutput {
            binary_string: binary_array.join(" "),
            binary_array,
        },
        breakdown,
    }))
}
