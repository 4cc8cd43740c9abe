#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use signalbook::config::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROSTER: &str = r#"{
  "boats": [
    { "number": "U-1", "radioOperator": "A", "colourString": "Red" },
    { "number": "U-2", "radioOperator": "B", "colourString": "Green" },
    { "number": "U-3", "radioOperator": "C", "colourString": "Gold" },
    { "number": "U-4", "radioOperator": "D", "colourString": "CadetBlue" }
  ]
}"#;

pub fn sb(base: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("signalbook");
    cmd.arg("--base-dir").arg(base);
    cmd
}

/// Create an empty, unique base directory inside the system temp dir
pub fn empty_base(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("signalbook_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test base dir");
    path
}

/// Base directory holding the four-boat default roster
pub fn setup_base(name: &str) -> PathBuf {
    let base = empty_base(name);
    fs::write(base.join("defaultConfig.json"), DEFAULT_ROSTER).expect("write default roster");
    base
}

pub fn config_for(base: &Path) -> Config {
    Config::load(base).expect("load config")
}

/// Files in `base` whose name ends with `suffix`
pub fn files_ending_with(base: &Path, suffix: &str) -> Vec<PathBuf> {
    fs::read_dir(base)
        .expect("read base dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().ends_with(suffix))
                .unwrap_or(false)
        })
        .collect()
}
