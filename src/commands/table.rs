use binconv::reference::{ascii_reference, ReferenceRow};

pub fn run_table() -> Vec<ReferenceRow> {
    ascii_reference()
}

pub fn format_table(rows: &[ReferenceRow]) -> String {
    let mut out = format!("{:<6} {:>5}  {}\n", "CHAR", "CODE", "BINARY");
    out.push_str(&"-".repeat(26));
    out.push('\n');
    for row in rows {
        out.push_str(&format!("{:<6} {:>5}  {}\n", row.display, row.value, row.binary));
    }
    out
}
