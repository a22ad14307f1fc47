use crate::result::ConversionResult;

/// Presentation seam. `None` clears whatever is currently displayed.
pub trait Render {
    fn render(&mut self, result: Option<&ConversionResult>) -> crate::error::Result<()>;
}

pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

pub fn character_label(count: usize) -> String {
    format!("{} character{}", count, if count == 1 { "" } else { "s" })
}

/// Number of binary symbols typed, ignoring delimiters and noise.
pub fn input_bit_count(raw: &str) -> usize {
    raw.chars().filter(|c| matches!(c, '0' | '1')).count()
}

pub fn output_bit_count(result: &ConversionResult) -> usize {
    match result {
        ConversionResult::Encoded(r) => r.output.binary_array.iter().map(String::len).sum(),
        ConversionResult::Decoded(r) => r.breakdown.iter().map(|e| e.binary_code.len()).sum(),
    }
}

/// Plain-text breakdown table. Column order follows the direction of the
/// conversion.
pub fn breakdown_table(result: &ConversionResult) -> String {
    let mut out = String::new();
    match result {
        ConversionResult::Encoded(r) => {
            out.push_str(&format!("{:<12} {:>7}  {}\n", "CHAR", "CODE", "BINARY"));
            out.push_str(&format!("{}\n", "-".repeat(40)));
            for e in &r.breakdown {
                out.push_str(&format!(
                    "{:<12} {:>7}  {}\n",
                    e.display_char.escape_debug().to_string(),
                    e.ascii_value,
                    e.binary_code
                ));
            }
        }
        ConversionResult::Decoded(r) => {
            out.push_str(&format!("{:<16} {:>7}  {}\n", "BINARY", "CODE", "CHAR"));
            out.push_str(&format!("{}\n", "-".repeat(40)));
            for e in &r.breakdown {
                out.push_str(&format!(
                    "{:<16} {:>7}  {}\n",
                    e.binary_code,
                    e.ascii_value,
                    e.display_char.escape_debug()
                ));
            }
        }
    }
    out
}
