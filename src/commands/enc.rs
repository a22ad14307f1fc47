use super::Context;
use crate::io::read_text;
use binconv::error::Result;
use binconv::result::ConversionResult;
use binconv::types::InputSource;

pub fn run_encode(ctx: &mut Context, input: &InputSource) -> Result<ConversionResult> {
    let text = read_text(input)?;
    ctx.workbench.encode.set_input(text);
    ctx.workbench.convert_text(&mut ctx.notifier).cloned()
}
