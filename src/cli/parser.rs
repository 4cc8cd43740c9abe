use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for SignalBook
/// Interactive radio logbook with a simulated clock
#[derive(Parser)]
#[command(
    name = "signalbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive radio logbook: boat roster, simulated clock and timestamped log",
    long_about = None
)]
pub struct Cli {
    /// Directory holding roster and log files (default: the executable's directory)
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,
}

/// Commands accepted at the session prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Time,
    TimeSet,
    TimeStop,
    TimeStart,
    ConfigShow,
    ConfigEdit,
    ConfigLoad,
    ConfigSave,
    Log,
    LogShow,
    LogLoad,
    LogSave,
    LogDelete,
    Info,
    Help,
    Exit,
}

/// Command words and their summaries, in the order `help` prints them.
pub const COMMANDS: &[(&str, &str)] = &[
    ("time", "Show the current simulated time"),
    ("time set", "Set the simulated time"),
    ("time stop", "Pause the clock"),
    ("time start", "Resume the clock"),
    ("config show", "Show the boat roster"),
    ("config edit", "Edit each boat's number, operator and colour"),
    ("config load", "Load a roster file"),
    ("config save", "Save the roster to a file"),
    ("log", "Enter log mode, type 'exit' to leave"),
    ("log show", "Show all log entries"),
    ("log load", "Append the entries of a log file"),
    ("log save", "Save the log to today's log file"),
    ("log delete", "Delete the most recent log entry"),
    ("info", "Show version and license"),
    ("help", "Show this help"),
    ("exit, quit", "Leave SignalBook"),
];

impl Command {
    /// Match a line typed at the prompt. Surrounding whitespace and case are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let cmd = match line.trim().to_lowercase().as_str() {
            "time" => Self::Time,
            "time set" => Self::TimeSet,
            "time stop" => Self::TimeStop,
            "time start" => Self::TimeStart,
            "config show" => Self::ConfigShow,
            "config edit" => Self::ConfigEdit,
            "config load" => Self::ConfigLoad,
            "config save" => Self::ConfigSave,
            "log" => Self::Log,
            "log show" => Self::LogShow,
            "log load" => Self::LogLoad,
            "log save" => Self::LogSave,
            "log delete" => Self::LogDelete,
            "info" => Self::Info,
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            _ => return None,
        };
        Some(cmd)
    }
}
