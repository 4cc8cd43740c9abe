use crate::cli::parser::Command;
use crate::cli::session::Session;
use crate::errors::AppResult;
use crate::ui::input::{ask, read_answer};
use crate::ui::messages::{info, log_prompt, success, warning};
use std::io::BufRead;

/// Handle the `log` commands
pub fn handle<R: BufRead>(cmd: &Command, session: &mut Session<R>) -> AppResult<()> {
    match cmd {
        Command::Log => log_mode(session)?,

        Command::LogShow => {
            let entries = session.logbook.entries();
            if entries.is_empty() {
                info("The radio log is empty.");
                return Ok(());
            }

            println!("📜 Radio log:\n");
            for entry in entries {
                println!("{entry}");
            }
        }

        Command::LogLoad => {
            // Enter reloads the file `log save` writes today.
            let default = session.logbook.log_path(Some(&session.clock), "");
            let default_name = default
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let name = ask(
                &mut session.input,
                &format!("Enter the log file name (or press Enter for {default_name}):"),
            )?;
            let name = if name.is_empty() {
                default.to_string_lossy().into_owned()
            } else {
                name
            };
            let count = session.logbook.load_log(&name)?;
            success(format!("Appended {count} entr(ies) to the radio log."));
        }

        Command::LogSave => {
            let Session { clock, logbook, .. } = session;
            let path = logbook.save_log(Some(&*clock), "")?;
            success(format!("Radio log saved to {}", path.display()));
        }

        Command::LogDelete => match session.logbook.delete_last_entry() {
            Some(entry) => success(format!("Deleted: {entry}")),
            None => warning("Nothing to delete."),
        },

        _ => {}
    }

    Ok(())
}

/// Every line becomes a log entry until `exit` or end of input.
fn log_mode<R: BufRead>(session: &mut Session<R>) -> AppResult<()> {
    info("Log mode: every line is logged with the current time. Type 'exit' to leave.");

    loop {
        log_prompt();
        let Some(line) = read_answer(&mut session.input)? else {
            println!();
            break;
        };
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let entry = session.logbook.append_entry(&line, &session.clock)?;
        println!("{entry}");
    }

    Ok(())
}
