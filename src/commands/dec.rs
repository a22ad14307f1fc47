use super::Context;
use crate::io::read_input;
use binconv::error::Result;
use binconv::result::ConversionResult;
use binconv::types::{FormatMode, InputSource};

pub fn run_decode(ctx: &mut Context, input: &InputSource, mode: FormatMode) -> Result<ConversionResult> {
    let raw = read_input(input)?;
    ctx.workbench.decode.set_mode(mode);
    ctx.workbench.decode.set_input(raw);
    ctx.workbench.convert_binary(&mut ctx.notifier).cloned()
}
