mod dec;
mod detect;
mod enc;
mod load;
mod parse;
mod table;
mod verify;

pub use dec::run_decode;
pub use detect::run_detect;
pub use enc::run_encode;
pub use load::run_load;
pub use parse::run_parse;
pub use table::{format_table, run_table};
pub use verify::run_verify;

use chrono::Utc;

use crate::io::{write_output, OutputConfig, StderrNotifier, TerminalRenderer};
use binconv::error::{BinconvError, Result};
use binconv::interchange::{is_json_file_name, suggested_file_name, to_json};
use binconv::notify::{Notice, Notifier};
use binconv::render::{character_label, Render};
use binconv::result::ConversionResult;
use binconv::session::Workbench;
use binconv::types::{FormatMode, InputSource, OutputDest};

pub struct Context {
    pub workbench: Workbench,
    pub notifier: StderrNotifier,
}

impl Context {
    pub fn new(quiet: bool) -> Self {
        Self {
            workbench: Workbench::new(),
            notifier: StderrNotifier { quiet },
        }
    }

    #[cfg(test)]
    pub fn quiet() -> Self {
        Self::new(true)
    }
}

pub trait CommandHandler {
    fn execute(&self, ctx: &mut Context) -> Result<()>;
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit_result(
    ctx: &mut Context,
    result: &ConversionResult,
    output: &OutputDest,
    json: bool,
    breakdown: bool,
    force: bool,
) -> Result<()> {
    if json {
        let document = to_json(result)? + "\n";
        let dest = match output {
            OutputDest::File(dir) if dir.is_dir() => {
                let millis = u128::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
                OutputDest::File(dir.join(suggested_file_name(result.conversion_type(), millis)))
            }
            other => other.clone(),
        };
        let config = OutputConfig {
            dest: dest.clone(),
            force: true,
        };
        write_output(&document, &config)?;
        if let OutputDest::File(path) = &dest {
            if !is_json_file_name(&path.display().to_string()) {
                ctx.notifier
                    .notify(Notice::warning("Saved file does not end in .json and cannot be loaded as-is"));
            }
            ctx.notifier.notify(Notice::success("JSON file saved successfully!"));
        }
        return Ok(());
    }

    let mut renderer = TerminalRenderer {
        output: OutputConfig {
            dest: output.clone(),
            force,
        },
        breakdown,
    };
    renderer.render(Some(result))
}

pub struct EncCommand {
    pub input: InputSource,
    pub output: OutputDest,
    pub breakdown: bool,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &mut Context) -> Result<()> {
        let result = run_encode(ctx, &self.input)?;
        emit_result(ctx, &result, &self.output, self.json, self.breakdown, true)
    }
}

pub struct DecCommand {
    pub input: InputSource,
    pub output: OutputDest,
    pub mode: FormatMode,
    pub breakdown: bool,
    pub json: bool,
    pub force: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &mut Context) -> Result<()> {
        let result = run_decode(ctx, &self.input, self.mode)?;
        emit_result(ctx, &result, &self.output, self.json, self.breakdown, self.force)
    }
}

pub struct DetectCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for DetectCommand {
    fn execute(&self, _ctx: &mut Context) -> Result<()> {
        let result = run_detect(&self.input)?;
        if self.json {
            print_json(&result)?;
        } else {
            println!("Input:  {}", result.input_preview);
            println!("Format: {}", result.format);
            println!("Bits:   {}", result.bits);
        }
        Ok(())
    }
}

pub struct ParseCommand {
    pub input: InputSource,
    pub mode: FormatMode,
    pub json: bool,
}

impl CommandHandler for ParseCommand {
    fn execute(&self, _ctx: &mut Context) -> Result<()> {
        let result = run_parse(&self.input, self.mode)?;
        if self.json {
            print_json(&result)?;
        } else if result.valid {
            for chunk in &result.chunks {
                println!("{}", chunk);
            }
        } else {
            return Err(BinconvError::invalid_binary(format!(
                "input does not split into binary chunks as {} ({})",
                result.format,
                result.mode.as_str()
            )));
        }
        Ok(())
    }
}

pub struct LoadCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for LoadCommand {
    fn execute(&self, ctx: &mut Context) -> Result<()> {
        let result = run_load(ctx, &self.input)?;
        if self.json {
            print_json(&result)?;
        } else {
            println!("Type:      {}", result.conversion_type());
            if !result.timestamp().is_empty() {
                println!("Timestamp: {}", result.timestamp());
            }
            println!("Input:     {}", result.source().escape_debug());
            println!("Output:    {}", result.output_text().escape_debug());
            println!("Size:      {}", character_label(result.character_count()));
            for warning in result.warnings() {
                println!("Warning:   {}", warning);
            }
        }
        Ok(())
    }
}

pub struct VerifyCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for VerifyCommand {
    fn execute(&self, _ctx: &mut Context) -> Result<()> {
        let result = run_verify(&self.input)?;
        if self.json {
            print_json(&result)?;
        } else if result.valid {
            println!("valid");
        } else {
            let message = result.error.unwrap_or_default();
            println!("invalid: {}", message);
            return Err(BinconvError::mismatch(message));
        }
        Ok(())
    }
}

pub struct TableCommand {
    pub json: bool,
}

impl CommandHandler for TableCommand {
    fn execute(&self, _ctx: &mut Context) -> Result<()> {
        let rows = run_table();
        if self.json {
            print_json(&rows)?;
        } else {
            print!("{}", format_table(&rows));
        }
        Ok(())
    }
}
