use serde::Serialize;
use std::ops::RangeInclusive;

use crate::codec::encode_char;

pub const PRINTABLE: RangeInclusive<u8> = 32..=126;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    pub character: char,
    pub display: String,
    pub value: u8,
    pub binary: String,
}

/// Printable ASCII reference, one row per code 32 through 126.
pub fn ascii_reference() -> Vec<ReferenceRow> {
    PRINTABLE
        .map(|value| {
            let character = char::from(value);
            let display = if value == b' ' {
                "SPC".to_string()
            } else {
                character.to_string()
            };
            ReferenceRow {
                character,
                display,
                value,
                binary: encode_char(character),
            }
        })
        .collect()
}
