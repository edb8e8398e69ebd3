use std::io::{self, IsTerminal, Read};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use notestats_core::{AppState, CommandId, Msg};
use notestats_host::{dispatch, EffectRunner, SystemClock};
use notestats_logging::{notes_info, notes_warn};

use super::config::load_settings;
use super::logging::{self, LogDestination};
use super::terminal::{OutputFormat, TerminalHost};

/// Runs a note stats command against text piped on stdin.
#[derive(Debug, Parser)]
#[command(name = "notestats", version, about, long_about = None)]
struct CliArgs {
    /// Command id to run
    #[arg(value_parser = parse_command, default_value = "show-note-stats")]
    command: CommandId,

    /// Print statistics as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Also write logs to ./notestats.log
    #[arg(long)]
    log_file: bool,

    /// Disable terminal logging
    #[arg(short, long)]
    quiet: bool,

    /// List registered commands and exit
    #[arg(long)]
    list: bool,
}

impl CliArgs {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

fn parse_command(id: &str) -> Result<CommandId, String> {
    CommandId::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = CommandId::all().iter().map(|c| c.id()).collect();
        format!("unknown command {id} (expected one of: {})", known.join(", "))
    })
}

pub fn run_app() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let destination = match (args.log_file, args.quiet) {
        (true, true) => Some(LogDestination::File),
        (true, false) => Some(LogDestination::Both),
        (false, false) => Some(LogDestination::Terminal),
        (false, true) => None,
    };
    if let Some(destination) = destination {
        logging::initialize(destination, level);
    }

    if args.list {
        for command in CommandId::all() {
            println!("{}\t{}", command.id(), command.name());
        }
        return Ok(());
    }

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let settings = load_settings(&cwd);
    let text = match args.command {
        CommandId::ShowNoteStats => read_active_text()?,
        CommandId::InsertTodayDate => None,
    };

    let host = TerminalHost::new(text, io::stdout().lock(), args.output_format());
    let mut runner = EffectRunner::new(host, SystemClock);
    notes_info!("Running command {}", args.command.id());
    dispatch(
        AppState::with_settings(settings),
        Msg::CommandInvoked(args.command),
        &mut runner,
    );
    Ok(())
}

/// An interactive stdin means no note was piped in.
fn read_active_text() -> anyhow::Result<Option<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .context("reading text from stdin")?;
    Ok(Some(decode_active_text(bytes)))
}

/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
fn decode_active_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| {
        notes_warn!(
            "Input is not valid UTF-8 at byte {}; replacing invalid sequences",
            err.utf8_error().valid_up_to()
        );
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("notestats").chain(raw.iter().copied()))
    }

    #[test]
    fn defaults_to_show_stats() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.command, CommandId::ShowNoteStats);
        assert_eq!(parsed.output_format(), OutputFormat::Plain);
        assert!(!parsed.verbose && !parsed.quiet && !parsed.log_file && !parsed.list);
    }

    #[test]
    fn parses_command_and_flags() {
        let parsed = args(&["insert-today-date", "--json", "-v", "-q", "--log-file"]).unwrap();
        assert_eq!(parsed.command, CommandId::InsertTodayDate);
        assert_eq!(parsed.output_format(), OutputFormat::Json);
        assert!(parsed.verbose);
        assert!(parsed.quiet);
        assert!(parsed.log_file);
        assert!(!parsed.list);
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(args(&["open-sample-modal"]).is_err());
        assert!(args(&["--nope"]).is_err());
        assert!(args(&["show-note-stats", "insert-today-date"]).is_err());
    }

    #[test]
    fn valid_utf8_input_is_kept_verbatim() {
        assert_eq!(decode_active_text("naïve café".as_bytes().to_vec()), "naïve café");
    }

    #[test]
    fn invalid_utf8_input_is_replaced_not_rejected() {
        let text = decode_active_text(b"Hello \xFF world".to_vec());
        assert_eq!(text, "Hello \u{FFFD} world");
        assert_eq!(notestats_core::compute_statistics(&text).word_count, 3);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
