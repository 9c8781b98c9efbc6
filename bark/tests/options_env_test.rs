//! Environment variables are process-wide, so the `BARK_*` overlay is checked
//! in its own test binary with a single test.

use bark::BarkOptions;
use std::env;
use std::io::Write;

#[test]
fn test_environment_overlays_options() {
    env::set_var("BARK_INFO_HEX", "#0a0b0c");
    env::set_var("BARK_TIME_FORMAT", "15:04");

    let from_env = BarkOptions::from_env().unwrap();
    assert_eq!(from_env.info_hex, "#0a0b0c");
    assert_eq!(from_env.time_format, "15:04");
    assert!(from_env.warn_hex.is_empty());

    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "info_hex = \"#abcdef\"").unwrap();
    writeln!(file, "warn_hex = \"#111111\"").unwrap();
    file.flush().unwrap();

    let loaded = BarkOptions::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(loaded.info_hex, "#0a0b0c");
    assert_eq!(loaded.warn_hex, "#111111");
    assert_eq!(loaded.time_format, "15:04");

    env::remove_var("BARK_INFO_HEX");
    env::remove_var("BARK_TIME_FORMAT");

    let file_only = BarkOptions::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(file_only.info_hex, "#abcdef");
    assert!(file_only.time_format.is_empty());
}
