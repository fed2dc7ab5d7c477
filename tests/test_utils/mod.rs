use std::path::PathBuf;
use std::process::{Command, Output};

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[allow(dead_code)]
pub fn run_trackrecord(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trackrecord"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute trackrecord")
}
