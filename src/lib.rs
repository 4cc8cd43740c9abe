//! SignalBook library root.
//! Exposes the clock, the logbook, the interactive session and run().

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Command};
use cli::session::Session;
use config::Config;
use errors::AppResult;
use std::io::{self, BufRead};

/// Central command dispatcher
pub fn dispatch<R: BufRead>(cmd: &Command, session: &mut Session<R>) -> AppResult<()> {
    match cmd {
        Command::Time | Command::TimeSet | Command::TimeStop | Command::TimeStart => {
            cli::commands::time::handle(cmd, session)
        }
        Command::ConfigShow | Command::ConfigEdit | Command::ConfigLoad | Command::ConfigSave => {
            cli::commands::config::handle(cmd, session)
        }
        Command::Log
        | Command::LogShow
        | Command::LogLoad
        | Command::LogSave
        | Command::LogDelete => cli::commands::log::handle(cmd, session),
        Command::Info | Command::Help => cli::commands::info::handle(cmd),
        Command::Exit => cli::commands::exit::handle(session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ base directory: --base-dir or the executable's folder
    let base_dir = match &cli.base_dir {
        Some(dir) => utils::path::expand_tilde(&dir.to_string_lossy()),
        None => utils::path::exe_dir(),
    };

    // 3️⃣ load config once
    let cfg = Config::load(&base_dir)?;

    // 4️⃣ startup prompts, then the command loop
    let stdin = io::stdin();
    let mut session = Session::start(cfg, stdin.lock())?;
    session.run()
}
