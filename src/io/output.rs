use std::fs::File;
use std::io::{self, Write};

use is_terminal::IsTerminal;

use binconv::error::Result;
use binconv::notify::{Notice, Notifier, Severity};
use binconv::render::{breakdown_table, character_label, output_bit_count, Render};
use binconv::result::ConversionResult;
use binconv::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
    pub force: bool,
}

pub fn write_output(data: &str, config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(data.as_bytes())?;
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            if stdout.is_terminal() && !config.force && !is_safe_for_terminal(data) {
                print_escaped_preview(data);
            } else {
                let mut handle = stdout.lock();
                handle.write_all(data.as_bytes())?;
                handle.flush()?;
            }
            Ok(())
        }
    }
}

fn is_safe_for_terminal(data: &str) -> bool {
    data.chars().all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
}

fn print_escaped_preview(data: &str) {
    eprintln!("Output contains control characters. Showing escaped text (use --force to output raw or --out @file):\n");
    print!("{}", data.escape_debug());
}

/// Prints notices on stderr. Quiet mode keeps only warnings and errors.
pub struct StderrNotifier {
    pub quiet: bool,
}

impl Notifier for StderrNotifier {
    fn notify(&mut self, notice: Notice) {
        if self.quiet && matches!(notice.severity, Severity::Success | Severity::Info) {
            return;
        }
        eprintln!("{}: {}", notice.severity, notice.message);
    }
}

/// Writes the converted text to the configured destination, optionally
/// followed by the breakdown table on stderr.
pub struct TerminalRenderer {
    pub output: OutputConfig,
    pub breakdown: bool,
}

impl Render for TerminalRenderer {
    fn render(&mut self, result: Option<&ConversionResult>) -> Result<()> {
        let Some(result) = result else {
            return Ok(());
        };

        write_output(result.output_text(), &self.output)?;
        if matches!(self.output.dest, OutputDest::Stdout) {
            println!();
        }

        if self.breakdown {
            eprintln!();
            eprint!("{}", breakdown_table(result));
            eprintln!(
                "{}, {} bits",
                character_label(result.character_count()),
                output_bit_count(result)
            );
        }
        Ok(())
    }
}
