//! Logbook: boat roster and radio log.
//!
//! All file I/O of the session lives here. The roster is a JSON file, the
//! radio log a plain text file with one `HH:MM:SS: message` entry per line.
//! Names are resolved against the configured base directory.

use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::models::boat::{Boat, RosterFile};
use crate::ui::input::read_answer;
use crate::ui::messages::{prompt, warning};
use crate::utils::{date, time};
use regex::Regex;
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::LazyLock;

static ENTRY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}: ").expect("valid log entry pattern")
});

pub struct Logbook {
    cfg: Config,
    boats: Vec<Boat>,
    /// Radio log, oldest first. Only ever pushed to or popped from the end.
    entries: Vec<String>,
    /// Number of entries at the last successful save.
    saved_entries: usize,
    roster_path: Option<PathBuf>,
}

impl Logbook {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            boats: Vec::new(),
            entries: Vec::new(),
            saved_entries: 0,
            roster_path: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// File the current roster was loaded from, if any.
    pub fn roster_path(&self) -> Option<&PathBuf> {
        self.roster_path.as_ref()
    }

    // ---------------------------
    // Roster
    // ---------------------------

    /// Load the roster from `file_name` (the user roster when empty).
    ///
    /// A missing file falls back to the default roster with a warning. If the
    /// default roster is missing as well, [`AppError::DefaultRosterMissing`]
    /// is returned and the current roster is left untouched.
    pub fn load_roster(&mut self, file_name: &str) -> AppResult<PathBuf> {
        let name = non_empty_or(file_name, &self.cfg.user_roster);
        let mut path = self.cfg.resolve(name);

        if !path.exists() {
            let fallback = self.cfg.resolve(&self.cfg.default_roster);
            if !fallback.exists() {
                return Err(AppError::DefaultRosterMissing(fallback));
            }
            warning(format!("Cannot load {}, reverting to default config.", name));
            path = fallback;
        }

        let json = fs::read_to_string(&path)?;
        let roster = RosterFile::from_json(&json)?;

        for boat in roster.boats.iter().filter(|b| !b.has_known_colour()) {
            warning(format!(
                "Boat {}: unknown colour '{}'",
                boat.number, boat.colour_name
            ));
        }

        self.boats = roster.boats;
        self.roster_path = Some(path.clone());
        Ok(path)
    }

    /// Walk through every boat asking for a new number, operator and colour.
    ///
    /// An empty answer keeps the current value. Each answer is applied as
    /// soon as it is read; end of input stops the walk early.
    pub fn edit_roster<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        for (i, boat) in self.boats.iter_mut().enumerate() {
            let n = i + 1;

            prompt(format!("Enter boat number for boat {n} [{}]:", boat.number));
            let Some(number) = read_answer(input)? else {
                return Ok(());
            };
            if !number.is_empty() {
                boat.number = number;
            }

            prompt(format!(
                "Enter radio operator for boat {n} [{}]:",
                boat.radio_operator
            ));
            let Some(operator) = read_answer(input)? else {
                return Ok(());
            };
            if !operator.is_empty() {
                boat.radio_operator = operator;
            }

            prompt(format!(
                "Enter colour string for boat {n} [{}]:",
                boat.colour_name
            ));
            let Some(colour) = read_answer(input)? else {
                return Ok(());
            };
            if !colour.is_empty() {
                boat.colour_name = colour;
                if !boat.has_known_colour() {
                    warning(format!("Unknown colour '{}'", boat.colour_name));
                }
            }
        }

        Ok(())
    }

    /// Write the roster as JSON to `file_name` (the user roster when empty),
    /// replacing whatever is there.
    pub fn save_roster(&self, file_name: &str) -> AppResult<PathBuf> {
        let name = non_empty_or(file_name, &self.cfg.user_roster);
        let path = self.cfg.resolve(name);

        let roster = RosterFile {
            boats: self.boats.clone(),
        };
        fs::write(&path, roster.to_json()?)?;

        Ok(path)
    }

    // ---------------------------
    // Radio log
    // ---------------------------

    /// Stamp `message` with the clock's time and push it onto the log.
    pub fn append_entry(&mut self, message: &str, clock: &Clock) -> AppResult<&str> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::EmptyMessage);
        }

        let stamp = time::format_stamp(&clock.current_time());
        self.entries.push(format!("{stamp}: {message}"));

        Ok(self.entries.last().map(String::as_str).unwrap_or_default())
    }

    /// Append every line of a log file after the current entries.
    ///
    /// Returns how many lines were appended. Lines without a `HH:MM:SS: `
    /// stamp are kept but reported.
    pub fn load_log(&mut self, file_name: &str) -> AppResult<usize> {
        let path = self.cfg.resolve(non_empty_or(file_name, &self.cfg.log_file));
        if !path.exists() {
            return Err(AppError::LogNotFound(path));
        }

        let content = fs::read_to_string(&path)?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();

        let unstamped = lines.iter().filter(|l| !ENTRY_PREFIX.is_match(l)).count();
        if unstamped > 0 {
            warning(format!(
                "{} line(s) in {} have no HH:MM:SS stamp",
                unstamped,
                path.display()
            ));
        }

        let count = lines.len();
        self.entries.extend(lines);
        Ok(count)
    }

    /// Write the whole log, one entry per line, to `file_name` (the default
    /// log when empty). With a clock, the name gets the clock's date in front.
    pub fn save_log(&mut self, clock: Option<&Clock>, file_name: &str) -> AppResult<PathBuf> {
        let path = self.log_path(clock, file_name);

        let mut content = self.entries.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content)?;

        self.saved_entries = self.entries.len();
        Ok(path)
    }

    /// Where `save_log` writes: `file_name` (the default log when empty),
    /// with the clock's date in front of the file name when a clock is given.
    pub fn log_path(&self, clock: Option<&Clock>, file_name: &str) -> PathBuf {
        let mut path = self.cfg.resolve(non_empty_or(file_name, &self.cfg.log_file));
        if let Some(c) = clock
            && let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned())
        {
            path.set_file_name(date::date_prefixed(&c.current_time(), &name));
        }
        path
    }

    /// Undo the most recent entry. `None` when there is nothing to delete.
    pub fn delete_last_entry(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Count-based dirty check: true when the log holds more entries than at
    /// the last save. Edits that keep the count equal go unnoticed.
    ///
    /// The comparison is strict (`saved < len`): an untouched log after a
    /// save, or a fresh empty log, does not ask to be saved on exit.
    pub fn has_unsaved_changes(&self) -> bool {
        self.saved_entries < self.entries.len()
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    let v = value.trim();
    if v.is_empty() { default } else { v }
}
