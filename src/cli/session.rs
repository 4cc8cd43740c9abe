//! Interactive session: startup prompts and the command loop.

use crate::cli::commands;
use crate::cli::parser::Command;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::logbook::Logbook;
use crate::errors::AppResult;
use crate::ui::input::{ask, read_answer};
use crate::ui::messages::{banner, error, info, success};
use std::io::{self, BufRead, Write};

pub struct Session<R: BufRead> {
    pub clock: Clock,
    pub logbook: Logbook,
    pub input: R,
}

impl<R: BufRead> Session<R> {
    /// Ask for the starting time and the roster, then start the clock.
    ///
    /// Fails only when no roster can be loaded at all; the clock is released
    /// on the way out.
    pub fn start(cfg: Config, mut input: R) -> AppResult<Self> {
        banner();

        let mut clock = Clock::new();
        let time = ask(&mut input, "Enter the time in a HH:MM:SS format.")?;
        clock.initialise(Some(time.as_str()));
        clock.start()?;

        let mut logbook = Logbook::new(cfg);
        let roster = ask(
            &mut input,
            "Enter the configuration file name (or press Enter to use default):",
        )?;
        let path = logbook.load_roster(&roster)?;
        success(format!(
            "Loaded {} boat(s) from {}",
            logbook.boats().len(),
            path.display()
        ));
        info("Type 'help' for a list of commands.");

        Ok(Self {
            clock,
            logbook,
            input,
        })
    }

    /// Read and run commands until `exit`, `quit` or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let Some(line) = read_answer(&mut self.input)? else {
                println!();
                return commands::exit::handle(self);
            };
            if line.is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Exit) => return commands::exit::handle(self),
                Some(cmd) => {
                    if let Err(e) = crate::dispatch(&cmd, self) {
                        error(e);
                    }
                }
                None => error(format!(
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    line
                )),
            }
        }
    }
}
