mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;

use binconv::error;
use binconv::types::{InputSource, OutputDest};
use cli::{Cli, Command};
use commands::{CommandHandler, Context};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let mut ctx = Context::new(cli.quiet);

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc {
            r#in,
            out,
            breakdown,
            json,
        } => Box::new(commands::EncCommand {
            input: InputSource::parse(&r#in),
            output: OutputDest::parse(&out),
            breakdown,
            json,
        }),

        Command::Dec {
            r#in,
            out,
            format,
            breakdown,
            json,
            force,
        } => Box::new(commands::DecCommand {
            input: InputSource::parse(&r#in),
            output: OutputDest::parse(&out),
            mode: format.into(),
            breakdown,
            json,
            force,
        }),

        Command::Detect { r#in, json } => Box::new(commands::DetectCommand {
            input: InputSource::parse(&r#in),
            json,
        }),

        Command::Parse { r#in, format, json } => Box::new(commands::ParseCommand {
            input: InputSource::parse(&r#in),
            mode: format.into(),
            json,
        }),

        Command::Load { r#in, json } => Box::new(commands::LoadCommand {
            input: InputSource::parse(&r#in),
            json,
        }),

        Command::Verify { r#in, json } => Box::new(commands::VerifyCommand {
            input: InputSource::parse(&r#in),
            json,
        }),

        Command::Table { json } => Box::new(commands::TableCommand { json }),
    };

    handler.execute(&mut ctx)
}
