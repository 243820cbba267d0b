//! Command-line front end for the byte / number converter.
//!
//! ```text
//! byteconv convert text "Hi"
//! byteconv convert hex "48 69" --save
//! byteconv text url encode "a b"
//! byteconv history list
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use devsuite_byteconv::logging::{init_logging, LoggingConfig};
use devsuite_byteconv::text_tools::{self, Action, TextMode};
use devsuite_byteconv::{ByteConverter, ConverterConfig, Field, History, HistoryEntry, Settings};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "byteconv", version, about = "Convert between text, bytes and numbers")]
struct Cli {
    /// Settings file (JSON).
    #[arg(long, global = true, env = "DEVSUITE_SETTINGS", default_value = "devsuite_settings.json")]
    settings: PathBuf,

    /// History file (JSON).
    #[arg(long, global = true, env = "DEVSUITE_HISTORY", default_value = "devsuite_history.json")]
    history: PathBuf,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill one field and print every view.
    Convert {
        from: Source,
        value: String,
        /// Append the result to the history file.
        #[arg(long)]
        save: bool,
    },
    /// URL / HTML / ROT13 encoding.
    Text {
        mode: ModeArg,
        action: ActionArg,
        input: String,
        #[arg(long)]
        save: bool,
    },
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Debug, Subcommand)]
enum HistoryCommand {
    List,
    Clear,
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Source {
    Text,
    Base64,
    Hex,
    Bin,
    Dec,
    BinNum,
    HexNum,
}

impl From<Source> for Field {
    fn from(source: Source) -> Self {
        match source {
            Source::Text => Field::Text,
            Source::Base64 => Field::Base64,
            Source::Hex => Field::HexBytes,
            Source::Bin => Field::BinaryStream,
            Source::Dec => Field::Decimal,
            Source::BinNum => Field::BinaryNum,
            Source::HexNum => Field::HexNum,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Url,
    Html,
    Rot13,
}

impl From<ModeArg> for TextMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Url => TextMode::Url,
            ModeArg::Html => TextMode::Html,
            ModeArg::Rot13 => TextMode::Rot13,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ActionArg {
    Encode,
    Decode,
}

impl From<ActionArg> for Action {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Encode => Action::Encode,
            ActionArg::Decode => Action::Decode,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        json: cli.log_json,
    });

    let settings = Settings::load(&cli.settings)
        .with_context(|| format!("loading settings from {}", cli.settings.display()))?;

    match cli.command {
        Command::Convert { from, value, save } => {
            let field = Field::from(from);
            let mut conv = ByteConverter::new(ConverterConfig::from(&settings));
            if let Err(err) = conv.edit(field, &value) {
                bail!("{}: {err}", field.label());
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(conv.views())?);
            } else {
                for f in Field::BYTES.into_iter().chain(Field::NUMERIC) {
                    println!("{:<13} {}", f.label(), conv.views().get(f));
                }
            }

            if save {
                if let Some(entry) = conv.save_snapshot() {
                    record(&cli.history, &settings, entry)?;
                }
            }
        }
        Command::Text {
            mode,
            action,
            input,
            save,
        } => {
            let (mode, action) = (TextMode::from(mode), Action::from(action));
            let output = text_tools::process(mode, action, &input)?;
            if cli.json {
                println!("{}", serde_json::json!({ "input": input, "output": output }));
            } else {
                println!("{output}");
            }

            if save {
                let tool = ConverterConfig::from(&settings).tool_name;
                if let Some(entry) = text_tools::snapshot(&tool, mode, action, &input, &output) {
                    record(&cli.history, &settings, entry)?;
                }
            }
        }
        Command::History { command } => {
            let mut history = History::load(&cli.history, settings.history_limit)?;
            match command {
                HistoryCommand::List => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(history.items())?);
                    } else {
                        for item in history.items() {
                            println!(
                                "{}  {}  [{}] {} => {}",
                                item.id,
                                item.timestamp,
                                item.entry.details,
                                item.entry.input,
                                item.entry.output
                            );
                        }
                    }
                }
                HistoryCommand::Clear => {
                    history.clear();
                    history.save(&cli.history)?;
                }
                HistoryCommand::Delete { id } => {
                    if !history.delete(&id) {
                        bail!("no history item with id {id}");
                    }
                    history.save(&cli.history)?;
                }
            }
        }
    }

    Ok(())
}

fn record(path: &Path, settings: &Settings, entry: HistoryEntry) -> Result<()> {
    let mut history = History::load(path, settings.history_limit)?;
    if let Some(item) = history.add(entry) {
        info!(id = %item.id, "saved to history");
    }
    history
        .save(path)
        .with_context(|| format!("writing history to {}", path.display()))
}
