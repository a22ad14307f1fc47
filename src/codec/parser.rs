use super::bits::{self, BYTE_WIDTH};
use crate::types::{Format, FormatMode};

/// Splits raw input into binary chunks. Returns `None` for blank input, an
/// unresolvable format, or when any chunk is not made of `0`/`1` only.
pub fn parse_chunks(raw: &str, mode: FormatMode) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let chunks: Vec<String> = match mode.resolve(trimmed) {
        Format::Space => trimmed.split_whitespace().map(str::to_string).collect(),
        Format::Comma => trimmed.split(',').map(|piece| piece.trim().to_string()).collect(),
        Format::Continuous => trimmed
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<Vec<_>>()
            .chunks(BYTE_WIDTH)
            .map(|group| group.iter().collect())
            .collect(),
        Format::Invalid => return None,
    };

    if chunks.iter().all(|chunk| bits::is_binary(chunk)) {
        Some(chunks)
    } else {
        None
    }
}
