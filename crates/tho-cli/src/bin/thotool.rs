use std::path::Path;

use clap::{Parser, Subcommand};
use tho_cli::commands::config_ops::{self, OptionFlags};
use tho_cli::commands::{check_ops, convert_ops};

#[derive(Parser)]
#[command(name = "thotool", about = "POJ and Tâi-lô romanization converter")]
struct Cli {
    /// Write JSON span logs here (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text line by line
    Convert {
        /// Conversion mode (see `thotool modes`)
        mode: String,
        /// Input file (default: stdin)
        input: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        flags: OptionFlags,
    },
    /// Transcribe Tâi-lô digit-tone text to IPA
    Ipa {
        /// Input file (default: stdin)
        input: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Write tone categories as numbers instead of symbols
        #[arg(long)]
        numbers: bool,
    },
    /// Convert a file and compare it line by line with a reference
    Check {
        /// Conversion mode (see `thotool modes`)
        mode: String,
        /// Source file, one input per line
        source: String,
        /// Reference file with the expected output lines
        reference: String,
        /// Also write the converted lines here
        #[arg(long)]
        hypothesis: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        flags: OptionFlags,
    },
    /// List conversion modes
    Modes,
    /// Conversion options file
    Options {
        #[command(subcommand)]
        action: OptionsAction,
    },
}

#[derive(Subcommand)]
enum OptionsAction {
    /// Print the default options TOML
    Export,
    /// Validate an options TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        thokit::trace_init::init_tracing(Path::new(dir));
    }

    match cli.command {
        Command::Convert {
            mode,
            input,
            output,
            flags,
        } => {
            let opts = flags.resolve();
            convert_ops::convert_cmd(&mode, input.as_deref(), output.as_deref(), &opts);
        }
        Command::Ipa {
            input,
            output,
            numbers,
        } => convert_ops::ipa_cmd(input.as_deref(), output.as_deref(), numbers),
        Command::Check {
            mode,
            source,
            reference,
            hypothesis,
            json,
            flags,
        } => {
            let opts = flags.resolve();
            check_ops::check_cmd(
                &mode,
                &source,
                &reference,
                hypothesis.as_deref(),
                json,
                &opts,
            );
        }
        Command::Modes => convert_ops::modes_cmd(),
        Command::Options { action } => match action {
            OptionsAction::Export => config_ops::options_export(),
            OptionsAction::Validate { file } => config_ops::options_validate(&file),
        },
    }
}
