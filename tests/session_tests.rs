use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};
use signalbook::cli::parser::COMMANDS;
use std::fs;

mod common;
use common::{empty_base, files_ending_with, sb, setup_base};

/// Startup answers (time, roster) followed by the given session lines.
fn script(time: &str, roster: &str, lines: &[&str]) -> String {
    let mut s = format!("{time}\n{roster}\n");
    for l in lines {
        s.push_str(l);
        s.push('\n');
    }
    s
}

#[test]
fn test_log_mode_entry_shows_in_log() {
    let base = setup_base("session_log_mode");

    let output = sb(&base)
        .write_stdin(script(
            "12:00:00",
            "",
            &["log", "Target bearing 090", "exit", "log show", "exit", "n"],
        ))
        .output()
        .expect("run session");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let (_, shown) = stdout
        .split_once("Radio log:")
        .expect("log show header missing");
    let entries: Vec<&str> = shown
        .lines()
        .filter(|l| l.ends_with("Target bearing 090"))
        .collect();

    assert_eq!(entries.len(), 1, "expected exactly one entry: {stdout}");
    let re = regex::Regex::new(r"^\d{2}:\d{2}:\d{2}: Target bearing 090$").unwrap();
    assert!(re.is_match(entries[0]), "bad entry: {}", entries[0]);
}

#[test]
fn test_missing_default_roster_aborts_startup() {
    let base = empty_base("session_no_roster");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["time", "exit"]))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Default roster file is missing"))
        .stdout(contains("Goodbye.").not());
}

#[test]
fn test_named_roster_missing_reverts_to_default() {
    let base = setup_base("session_roster_fallback");

    sb(&base)
        .write_stdin(script("12:00:00", "fleet.json", &["config show", "exit"]))
        .assert()
        .success()
        .stdout(contains("Cannot load fleet.json, reverting to default config."))
        .stdout(contains("Loaded 4 boat(s)"))
        .stdout(contains("CadetBlue"));
}

#[test]
fn test_unknown_command_keeps_loop_alive() {
    let base = setup_base("session_unknown");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["launch torpedo", "info", "quit"]))
        .assert()
        .success()
        .stderr(contains("Unknown command 'launch torpedo'"))
        .stdout(contains(env!("CARGO_PKG_VERSION")))
        .stdout(contains("Goodbye."));
}

#[test]
fn test_commands_are_trimmed_and_case_insensitive() {
    let base = setup_base("session_case");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["   HELP  ", "Log Show", "EXIT"]))
        .assert()
        .success()
        .stdout(contains("config edit"))
        .stdout(contains("The radio log is empty."));
}

#[test]
fn test_time_set_reinitialises_clock() {
    let base = setup_base("session_time_set");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["time set", "08:30:00", "exit"]))
        .assert()
        .success()
        .stdout(contains("Clock set."))
        .stdout(is_match(r"08:30:0\d").unwrap());
}

#[test]
fn test_invalid_start_time_warns_and_continues() {
    let base = setup_base("session_bad_time");

    sb(&base)
        .write_stdin(script("quarter past", "", &["time", "exit"]))
        .assert()
        .success()
        .stdout(contains("Reverting to current system time."));
}

#[test]
fn test_log_delete_on_empty_log() {
    let base = setup_base("session_delete_empty");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["log delete", "exit"]))
        .assert()
        .success()
        .stdout(contains("Nothing to delete."));
}

#[test]
fn test_exit_with_unsaved_entries_saves_on_yes() {
    let base = setup_base("session_exit_save");

    sb(&base)
        .write_stdin(script(
            "12:00:00",
            "",
            &["log", "All boats ashore", "exit", "exit", "y"],
        ))
        .assert()
        .success()
        .stdout(contains("Save the radio log before exiting?"))
        .stdout(contains("Radio log saved to"));

    let logs = files_ending_with(&base, " Radio Log.txt");
    assert_eq!(logs.len(), 1);
    let content = fs::read_to_string(&logs[0]).unwrap();
    assert!(content.trim_end().ends_with(": All boats ashore"));
}

#[test]
fn test_exit_with_unsaved_entries_discards_on_no() {
    let base = setup_base("session_exit_discard");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["log", "Drifting", "exit", "exit", "n"]))
        .assert()
        .success()
        .stdout(contains("Save the radio log before exiting?"));

    assert!(files_ending_with(&base, "Radio Log.txt").is_empty());
}

#[test]
fn test_exit_after_save_does_not_prompt() {
    let base = setup_base("session_exit_clean");

    sb(&base)
        .write_stdin(script(
            "12:00:00",
            "",
            &["log", "Signal received", "exit", "log save", "exit"],
        ))
        .assert()
        .success()
        .stdout(contains("Radio log saved to"))
        .stdout(contains("Save the radio log before exiting?").not());
}

#[test]
fn test_end_of_input_ends_session() {
    let base = setup_base("session_eof");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["log", "Half a message"]))
        .assert()
        .success()
        .stdout(contains("Goodbye."));

    assert!(files_ending_with(&base, "Radio Log.txt").is_empty());
}

#[test]
fn test_config_edit_then_save_and_reload() {
    let base = setup_base("session_config_edit");

    let mut lines = vec!["config edit", "U-77", "Mike", "Teal"];
    lines.extend(["", "", ""].repeat(3));
    lines.extend(["config save", "crew.json", "config load", "crew.json", "config show", "exit"]);

    sb(&base)
        .write_stdin(script("12:00:00", "", &lines))
        .assert()
        .success()
        .stdout(contains("Roster saved to"))
        .stdout(contains("Mike"));

    let saved = fs::read_to_string(base.join("crew.json")).unwrap();
    assert!(saved.contains("\"number\": \"U-77\""));
    assert!(saved.contains("\"colourString\": \"Teal\""));
}

#[test]
fn test_log_load_missing_file_reports_error() {
    let base = setup_base("session_log_load_missing");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["log load", "ghost.txt", "exit"]))
        .assert()
        .success()
        .stderr(contains("Log file not found"));
}

#[test]
fn test_log_load_appends_file_lines() {
    let base = setup_base("session_log_load");
    fs::write(
        base.join("yesterday.txt"),
        "09:00:00: Morning check\n17:30:00: Evening check\n",
    )
    .unwrap();

    sb(&base)
        .write_stdin(script(
            "12:00:00",
            "",
            &["log load", "yesterday.txt", "log show", "exit", "n"],
        ))
        .assert()
        .success()
        .stdout(contains("Appended 2 entr(ies)"))
        .stdout(contains("09:00:00: Morning check"))
        .stdout(contains("17:30:00: Evening check"));
}

#[test]
fn test_config_file_overrides_log_name() {
    let base = setup_base("session_conf");
    fs::write(base.join("signalbook.conf"), "log_file: watch.txt\n").unwrap();

    sb(&base)
        .write_stdin(script(
            "12:00:00",
            "",
            &["log", "Buoy sighted", "exit", "log save", "exit"],
        ))
        .assert()
        .success();

    assert_eq!(files_ending_with(&base, " watch.txt").len(), 1);
}

#[test]
fn test_log_save_then_load_default_file() {
    let base = setup_base("session_log_save_load");

    let output = sb(&base)
        .write_stdin(script(
            "12:00:00",
            "",
            &[
                "log", "alpha", "exit", "log save", "log load", "", "log show", "exit", "n",
            ],
        ))
        .output()
        .expect("run session");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Log file not found"), "{stderr}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Appended 1 entr(ies)"), "{stdout}");
    let (_, shown) = stdout
        .split_once("Radio log:")
        .expect("log show header missing");
    let entries = shown.lines().filter(|l| l.ends_with(": alpha")).count();
    assert_eq!(entries, 2, "expected the entry twice: {stdout}");
}

#[test]
fn test_help_lists_every_command() {
    let base = setup_base("session_help");

    let output = sb(&base)
        .write_stdin(script("12:00:00", "", &["help", "exit"]))
        .output()
        .expect("run session");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for (name, about) in COMMANDS {
        assert!(stdout.contains(*name), "help is missing '{name}'");
        assert!(stdout.contains(*about), "help is missing '{about}'");
    }
}

#[test]
fn test_info_shows_version_and_license() {
    let base = setup_base("session_info");

    sb(&base)
        .write_stdin(script("12:00:00", "", &["info", "exit"]))
        .assert()
        .success()
        .stdout(contains(format!("Version : {}", env!("CARGO_PKG_VERSION"))))
        .stdout(contains("License : MIT"));
}

#[test]
fn test_time_stop_and_start() {
    let base = setup_base("session_time_pause");

    let output = sb(&base)
        .write_stdin(script(
            "12:00:00",
            "",
            &["time stop", "time", "time start", "time", "exit"],
        ))
        .output()
        .expect("run session");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let (paused, resumed) = stdout
        .split_once("Clock running.")
        .expect("time start message missing");

    assert!(paused.contains("Clock paused."));
    assert!(paused.contains("(paused)"), "{paused}");
    assert!(!resumed.contains("(paused)"), "{resumed}");
    assert!(resumed.contains("12:00:0"), "{resumed}");
}
