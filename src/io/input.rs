use std::fs::File;
use std::io::{self, Read};

use binconv::error::Result;
use binconv::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        InputSource::File(path) => {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        InputSource::Literal(text) => Ok(text.clone()),
    }
}

/// Like [`read_input`], minus the single line ending that piped or saved
/// text usually carries.
pub fn read_text(source: &InputSource) -> Result<String> {
    let mut text = read_input(source)?;
    if !matches!(source, InputSource::Literal(_)) && text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
