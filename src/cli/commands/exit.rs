use crate::cli::session::Session;
use crate::errors::AppResult;
use crate::ui::input::ask_confirmation;
use crate::ui::messages::{error, info, success};
use std::io::BufRead;

/// Leave the session: offer to save a dirty log, then release the clock.
pub fn handle<R: BufRead>(session: &mut Session<R>) -> AppResult<()> {
    if session.logbook.has_unsaved_changes() {
        let save = ask_confirmation(
            &mut session.input,
            "The radio log has unsaved entries. Save the radio log before exiting?",
        )?;

        if save {
            let Session { clock, logbook, .. } = &mut *session;
            match logbook.save_log(Some(&*clock), "") {
                Ok(path) => success(format!("Radio log saved to {}", path.display())),
                Err(e) => error(e),
            }
        }
    }

    session.clock.stop(true);
    info("Goodbye.");
    Ok(())
}
