#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Command for the jot binary with its journal and config kept inside `dir`
pub fn jot_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    cmd.env("JOT_FILE", journal_path(dir));
    cmd.env("JOT_CONFIG", config_path(dir));
    cmd.env_remove("JOT_LOG");
    cmd
}

pub fn journal_path(dir: &Path) -> PathBuf {
    dir.join("jot.txt")
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}
