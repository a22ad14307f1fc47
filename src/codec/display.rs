pub fn display_char(c: char) -> String {
    match c {
        ' ' => "(space)".to_string(),
        '\n' => "(newline)".to_string(),
        '\t' => "(tab)".to_string(),
        '\r' => "(return)".to_string(),
        other => other.to_string(),
    }
}

/// Control characters other than tab, newline and carriage return.
pub fn is_non_printable(value: u32) -> bool {
    value < 32 && !matches!(value, 9 | 10 | 13)
}

pub fn non_printable_warning(value: u32) -> String {
    format!("Non-printable character detected: ASCII {}", value)
}
