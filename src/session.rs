use crate::codec::{decode, encode};
use crate::error::{BinconvError, Result};
use crate::interchange::{from_json, is_json_file_name};
use crate::notify::{Notice, Notifier};
use crate::result::{ConversionResult, ConversionType};
use crate::types::FormatMode;

pub const MSG_CONVERTED: &str = "Converted successfully!";
pub const MSG_EMPTY_TEXT: &str = "Please enter some text to convert";
pub const MSG_EMPTY_BINARY: &str = "Please enter binary code to convert";
pub const MSG_INVALID_BINARY: &str = "Invalid binary format. Use only 0s and 1s.";
pub const MSG_NOT_JSON_FILE: &str = "Please upload a .json file";
pub const MSG_INVALID_DOCUMENT: &str = "Invalid JSON file structure";

/// Text-to-binary side: the input field, its real-time toggle and the
/// current result.
#[derive(Debug, Default)]
pub struct EncodeSession {
    input: String,
    realtime: bool,
    current: Option<ConversionResult>,
}

impl EncodeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn realtime(&self) -> bool {
        self.realtime
    }

    pub fn current(&self) -> Option<&ConversionResult> {
        self.current.as_ref()
    }

    /// Replaces the input. In real-time mode the result follows the input,
    /// including being cleared when the input becomes empty.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if self.realtime {
            self.current = encode(&self.input);
        }
    }

    pub fn set_realtime(&mut self, enabled: bool) {
        self.realtime = enabled;
        if enabled && !self.input.is_empty() {
            self.current = encode(&self.input);
        }
    }

    /// Converts the current input, keeping the previous result when there
    /// is nothing to convert.
    pub fn convert(&mut self) -> Option<&ConversionResult> {
        let result = encode(&self.input)?;
        self.current = Some(result);
        self.current.as_ref()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.current = None;
    }

    fn restore(&mut self, result: ConversionResult) {
        self.input = result.source().to_string();
        self.current = Some(result);
    }
}

/// Binary-to-text side. Unlike the encode side, an input that fails to
/// decode never replaces the current result.
#[derive(Debug, Default)]
pub struct DecodeSession {
    input: String,
    realtime: bool,
    mode: FormatMode,
    current: Option<ConversionResult>,
}

impl DecodeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn realtime(&self) -> bool {
        self.realtime
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn current(&self) -> Option<&ConversionResult> {
        self.current.as_ref()
    }

    pub fn set_mode(&mut self, mode: FormatMode) {
        self.mode = mode;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if self.realtime {
            self.refresh();
        }
    }

    pub fn set_realtime(&mut self, enabled: bool) {
        self.realtime = enabled;
        if enabled && !self.input.is_empty() {
            self.refresh();
        }
    }

    pub fn convert(&mut self) -> Option<&ConversionResult> {
        let result = decode(&self.input, self.mode)?;
        self.current = Some(result);
        self.current.as_ref()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.current = None;
    }

    fn refresh(&mut self) {
        if let Some(result) = decode(&self.input, self.mode) {
            self.current = Some(result);
        }
    }

    fn restore(&mut self, result: ConversionResult) {
        self.input = result.source().to_string();
        self.current = Some(result);
    }
}

/// Both conversion directions plus the user-facing actions that report
/// through a [`Notifier`].
#[derive(Debug, Default)]
pub struct Workbench {
    pub encode: EncodeSession,
    pub decode: DecodeSession,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convert_text<N: Notifier>(&mut self, notifier: &mut N) -> Result<&ConversionResult> {
        if self.encode.input().trim().is_empty() {
            notifier.notify(Notice::warning(MSG_EMPTY_TEXT));
            return Err(BinconvError::empty_input(MSG_EMPTY_TEXT));
        }

        match self.encode.convert() {
            Some(result) => {
                notifier.notify(Notice::success(MSG_CONVERTED));
                Ok(result)
            }
            None => Err(BinconvError::empty_input(MSG_EMPTY_TEXT)),
        }
    }

    pub fn convert_binary<N: Notifier>(&mut self, notifier: &mut N) -> Result<&ConversionResult> {
        if self.decode.input().trim().is_empty() {
            notifier.notify(Notice::warning(MSG_EMPTY_BINARY));
            return Err(BinconvError::empty_input(MSG_EMPTY_BINARY));
        }

        match self.decode.convert() {
            Some(result) => {
                if let Some(first) = result.warnings().first() {
                    notifier.notify(Notice::warning(first.clone()));
                }
                notifier.notify(Notice::success(MSG_CONVERTED));
                Ok(result)
            }
            None => {
                notifier.notify(Notice::error(MSG_INVALID_BINARY));
                Err(BinconvError::invalid_binary(MSG_INVALID_BINARY))
            }
        }
    }

    /// Loads a saved document into the session matching its conversion
    /// type. `file_name` is `None` for content that did not come from a
    /// named file. On failure neither session is touched.
    pub fn load_document<N: Notifier>(
        &mut self,
        file_name: Option<&str>,
        content: &str,
        notifier: &mut N,
    ) -> Result<ConversionType> {
        if let Some(name) = file_name {
            if !is_json_file_name(name) {
                notifier.notify(Notice::error(MSG_NOT_JSON_FILE));
                return Err(BinconvError::unsupported_file(name));
            }
        }

        let result = match from_json(content) {
            Ok(result) => result,
            Err(e) => {
                notifier.notify(Notice::error(MSG_INVALID_DOCUMENT));
                return Err(e);
            }
        };

        let conversion = result.conversion_type();
        match conversion {
            ConversionType::TextToBinary => {
                self.encode.restore(result);
                notifier.notify(Notice::success("Text-to-binary conversion loaded!"));
            }
            ConversionType::BinaryToText => {
                self.decode.restore(result);
                notifier.notify(Notice::success("Binary-to-text conversion loaded!"));
            }
        }
        Ok(conversion)
    }
}
