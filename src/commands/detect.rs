use serde::Serialize;

use crate::io::read_input;
use binconv::codec::detect_format;
use binconv::error::Result;
use binconv::render::input_bit_count;
use binconv::types::{Format, InputSource};

#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub schema_version: u32,
    pub format: Format,
    pub bits: usize,
    pub input_preview: String,
}

pub(crate) fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() > 60 {
        format!("{}...", trimmed.chars().take(60).collect::<String>())
    } else {
        trimmed.to_string()
    }
}

pub fn run_detect(input: &InputSource) -> Result<DetectResult> {
    let raw = read_input(input)?;

    Ok(DetectResult {
        schema_version: 1,
        format: detect_format(&raw),
        bits: input_bit_count(&raw),
        input_preview: preview(&raw),
    })
}
