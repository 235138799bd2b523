#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use messlog::config::Config;
use messlog::store::Stores;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mess() -> Command {
    cargo_bin_cmd!("messlog")
}

/// Create a unique, empty data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("messlog_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path.to_string_lossy().to_string()
}

/// Configuration whose data files all live in `dir`
pub fn test_config(dir: &str) -> Config {
    Config::default().with_data_dir(dir)
}

/// Open (and repair) the stores in a fresh data directory
pub fn open_stores(name: &str) -> Stores {
    let dir = setup_data_dir(name);
    Stores::open(&test_config(&dir)).expect("open stores")
}

/// Initialize the data files through the CLI
pub fn init_data_dir(dir: &str) {
    mess()
        .args(["--data-dir", dir, "--test", "init"])
        .assert()
        .success();
}

/// Initialize and register Alice (1) and Bob (2)
pub fn init_with_students(dir: &str) {
    init_data_dir(dir);
    for name in ["Alice", "Bob"] {
        mess()
            .args(["--data-dir", dir, "add", name])
            .assert()
            .success();
    }
}
