use crate::cli::parser::Command;
use crate::cli::session::Session;
use crate::errors::AppResult;
use crate::ui::input::ask;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};
use std::io::BufRead;

/// Handle the `config` commands (roster show, edit, load, save)
pub fn handle<R: BufRead>(cmd: &Command, session: &mut Session<R>) -> AppResult<()> {
    match cmd {
        // ---- SHOW ----
        Command::ConfigShow => {
            let boats = session.logbook.boats();
            if boats.is_empty() {
                info("The roster is empty.");
                return Ok(());
            }

            if let Some(path) = session.logbook.roster_path() {
                println!("📄 Roster ({}):\n", path.display());
            }

            let mut table = Table::new(vec![
                Column::new("#"),
                Column::new("Number"),
                Column::new("Radio Operator"),
                Column::new("Colour"),
            ]);
            for (i, boat) in boats.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    boat.painted_number(),
                    boat.radio_operator.clone(),
                    boat.colour_name.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        // ---- EDIT ----
        Command::ConfigEdit => {
            let Session { logbook, input, .. } = session;
            logbook.edit_roster(input)?;
            success("Roster updated. Use 'config save' to keep the changes.");
        }

        // ---- LOAD ----
        Command::ConfigLoad => {
            let name = ask(
                &mut session.input,
                "Enter the configuration file name (or press Enter to use default):",
            )?;
            let path = session.logbook.load_roster(&name)?;
            success(format!(
                "Loaded {} boat(s) from {}",
                session.logbook.boats().len(),
                path.display()
            ));
        }

        // ---- SAVE ----
        Command::ConfigSave => {
            let default = session.logbook.config().user_roster.clone();
            let name = ask(
                &mut session.input,
                &format!("Enter the file name to save to (or press Enter for {default}):"),
            )?;
            let path = session.logbook.save_roster(&name)?;
            success(format!("Roster saved to {}", path.display()));
        }

        _ => {}
    }

    Ok(())
}
