use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use braille_cli::commands::{
    config_ops, default_data_dir, history_ops, shell_ops, translate_ops,
};
use braille_cli::trace_init::init_tracing;
use braille_core::Direction;

#[derive(Parser)]
#[command(name = "brailletool", about = "Spanish ↔ Braille translator")]
struct Cli {
    /// Directory holding the translation history
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom alphabet TOML
    #[arg(long, global = true)]
    alphabet: Option<String>,
    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// Spanish to Braille
    S2b,
    /// Braille to Spanish
    B2s,
    /// Braille if the text contains any Braille cell, Spanish otherwise
    Auto,
}

impl DirectionArg {
    fn resolve(self) -> Option<Direction> {
        match self {
            Self::S2b => Some(Direction::SpanishToBraille),
            Self::B2s => Some(Direction::BrailleToSpanish),
            Self::Auto => None,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Translate text and record it in the history
    Translate {
        text: String,
        #[arg(short, long, value_enum, default_value = "auto")]
        direction: DirectionArg,
        /// Do not add the translation to the history
        #[arg(long)]
        no_record: bool,
    },
    /// Show or clear the translation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Show the keypad for a direction
    Keypad {
        #[arg(short, long, value_enum, default_value = "s2b")]
        direction: DirectionArg,
    },
    /// Produce a printable HTML sheet (newest history entry when no text is given)
    Print {
        text: Option<String>,
        #[arg(short, long, value_enum, default_value = "auto")]
        direction: DirectionArg,
        /// Image file (inlined as a data URI), data URI or URL to include
        #[arg(long)]
        image: Option<String>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Interactive translator session
    Shell,
    /// Export or validate the letter/cell table
    Alphabet {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recorded translations, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete all recorded translations
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in default TOML
    Export,
    /// Check a TOML file
    Validate { file: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    config_ops::load_custom(cli.settings.as_deref(), cli.alphabet.as_deref());

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Command::Translate {
            text,
            direction,
            no_record,
        } => translate_ops::translate_cmd(&data_dir, &text, direction.resolve(), !no_record),
        Command::History { action } => match action {
            HistoryAction::List { json } => history_ops::history_list(&data_dir, json),
            HistoryAction::Clear => history_ops::history_clear(&data_dir),
        },
        Command::Keypad { direction } => translate_ops::keypad_cmd(
            direction.resolve().unwrap_or(Direction::SpanishToBraille),
        ),
        Command::Print {
            text,
            direction,
            image,
            output,
        } => translate_ops::print_cmd(
            &data_dir,
            &translate_ops::PrintOptions {
                text: text.as_deref(),
                direction: direction.resolve(),
                image: image.as_deref(),
                output_file: output.as_deref(),
            },
        ),
        Command::Shell => shell_ops::shell_cmd(&data_dir),
        Command::Alphabet { action } => match action {
            ConfigAction::Export => config_ops::alphabet_export(),
            ConfigAction::Validate { file } => config_ops::alphabet_validate(&file),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
