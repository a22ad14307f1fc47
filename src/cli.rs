use clap::{Parser, Subcommand, ValueEnum};

use binconv::types::FormatMode;

#[derive(Parser)]
#[command(name = "binconv")]
#[command(about = "Convert text to binary and back, with JSON save/load")]
#[command(version)]
pub struct Cli {
    #[arg(long, short = 'q', global = true, help = "Only print warnings and errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Convert text to binary")]
    Enc {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Print the per-character breakdown")]
        breakdown: bool,

        #[arg(long, help = "Output the full conversion as JSON")]
        json: bool,
    },

    #[command(about = "Convert binary to text")]
    Dec {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, short = 'f', default_value = "auto")]
        format: FormatArg,

        #[arg(long, help = "Print the per-chunk breakdown")]
        breakdown: bool,

        #[arg(long, help = "Output the full conversion as JSON")]
        json: bool,

        #[arg(long, help = "Write control characters to a terminal as-is")]
        force: bool,
    },

    #[command(about = "Detect the delimiter format of binary input")]
    Detect {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Split binary input into chunks")]
    Parse {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'f', default_value = "auto")]
        format: FormatArg,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Load a saved conversion")]
    Load {
        #[arg(long, short = 'i', default_value = "-", help = "Saved document (@file.json or - for stdin)")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Check that a saved conversion reproduces its output")]
    Verify {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show the printable ASCII reference table")]
    Table {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Auto,
    Space,
    Comma,
    Continuous,
}

impl From<FormatArg> for FormatMode {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => FormatMode::Auto,
            FormatArg::Space => FormatMode::Space,
            FormatArg::Comma => FormatMode::Comma,
            FormatArg::Continuous => FormatMode::Continuous,
        }
    }
}
