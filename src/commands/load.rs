use super::Context;
use crate::io::read_input;
use binconv::error::{BinconvError, Result};
use binconv::result::{ConversionResult, ConversionType};
use binconv::types::InputSource;

/// Restores a saved document into its session and returns the restored result.
pub fn run_load(ctx: &mut Context, input: &InputSource) -> Result<ConversionResult> {
    let content = read_input(input)?;
    let name = input.file_name();
    let kind = ctx
        .workbench
        .load_document(name.as_deref(), &content, &mut ctx.notifier)?;

    let session_result = match kind {
        ConversionType::TextToBinary => ctx.workbench.encode.current(),
        ConversionType::BinaryToText => ctx.workbench.decode.current(),
    };
    session_result
        .cloned()
        .ok_or_else(|| BinconvError::malformed_json("document was not restored"))
}
