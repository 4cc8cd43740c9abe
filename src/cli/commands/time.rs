use crate::cli::parser::Command;
use crate::cli::session::Session;
use crate::core::clock::TimeSource;
use crate::errors::AppResult;
use crate::ui::input::ask;
use crate::ui::messages::{info, success};
use crate::utils::formatting::bold;
use std::io::BufRead;

/// Handle `time`, `time set`, `time stop` and `time start`.
pub fn handle<R: BufRead>(cmd: &Command, session: &mut Session<R>) -> AppResult<()> {
    match cmd {
        Command::Time => print_time(session),
        Command::TimeSet => {
            let input = ask(&mut session.input, "Enter the time in a HH:MM:SS format.")?;
            if session.clock.initialise(Some(input.as_str())) == TimeSource::Parsed {
                success("Clock set.");
            }
            session.clock.start()?;
            print_time(session);
        }
        Command::TimeStop => {
            session.clock.stop(false);
            info("Clock paused.");
        }
        Command::TimeStart => {
            session.clock.start()?;
            info("Clock running.");
        }
        _ => {}
    }

    Ok(())
}

fn print_time<R: BufRead>(session: &Session<R>) {
    let now = session.clock.current_time();
    let state = if session.clock.is_running() {
        ""
    } else {
        " (paused)"
    };
    println!(
        "🕒 {} {}{}",
        bold(&now.format("%H:%M:%S").to_string()),
        now.format("%Y-%m-%d"),
        state
    );
}
