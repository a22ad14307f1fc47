use super::{bits, display, parse_chunks};
use crate::result::{timestamp_now, BinaryInput, BreakdownEntry, ConversionResult, DecodeResult, TextOutput};
use crate::types::FormatMode;

/// Converts binary input back to text. Returns `None` when the input does
/// not parse, or when a chunk does not name a Unicode scalar value.
pub fn decode(raw: &str, mode: FormatMode) -> Option<ConversionResult> {
    let chunks = parse_chunks(raw, mode)?;
    if chunks.is_empty() {
        return None;
    }

    let mut breakdown = Vec::with_capacity(chunks.len());
    let mut warnings = Vec::new();
    let mut decoded_text = String::with_capacity(chunks.len());

    for chunk in &chunks {
        let value = bits::from_binary(chunk)?;
        let character = char::from_u32(value)?;
        let binary_code = bits::to_binary(value, bits::width_for(value));

        if display::is_non_printable(value) {
            warnings.push(display::non_printable_warning(value));
        }

        decoded_text.push(character);
        breakdown.push(BreakdownEntry::new(character, binary_code));
    }

    Some(ConversionResult::Decoded(DecodeResult {
        timestamp: timestamp_now(),
        input: BinaryInput {
            binary_string: raw.trim().to_string(),
            binary_array: chunks,
        },
        output: TextOutput {
            decoded_text,
            character_count: breakdown.len(),
        },
        breakdown,
        warnings,
    }))
}
