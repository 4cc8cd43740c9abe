use crate::cli::parser::{COMMANDS, Command};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::italic;
use crate::utils::table::{Column, Table};

/// Handle `info` and `help`.
pub fn handle(cmd: &Command) -> AppResult<()> {
    match cmd {
        Command::Info => {
            header("SignalBook");
            println!("Version : {}", env!("CARGO_PKG_VERSION"));
            println!("Authors : {}", env!("CARGO_PKG_AUTHORS"));
            println!("License : {}", env!("CARGO_PKG_LICENSE"));
            println!("{}", italic(env!("CARGO_PKG_DESCRIPTION")));
        }
        Command::Help => {
            let mut table = Table::new(vec![Column::new("Command"), Column::new("Description")]);
            for (name, about) in COMMANDS {
                table.add_row(vec![name.to_string(), about.to_string()]);
            }
            print!("{}", table.render());
        }
        _ => {}
    }

    Ok(())
}
