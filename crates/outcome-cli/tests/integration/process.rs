//! End-to-end runs through `process`.

use std::io::Write;

use clap::Parser;
use outcome_cli::cli::Args;
use outcome_cli::config::{Config, Settings};
use outcome_cli::process;
use outcome_cli::report::total_line;

fn run(argv: &[&str]) -> (Vec<String>, Option<String>, bool) {
    let args = Args::try_parse_from(argv).unwrap();
    let config = Config::load(args.config.as_deref()).unwrap();
    let settings = Settings::resolve(&args, &config).unwrap();
    let (reports, total) = process(&args.inputs, &settings, args.sum);
    let all_ok = reports.iter().all(|r| r.is_acceptable());
    (
        reports.iter().map(ToString::to_string).collect(),
        total.map(total_line),
        all_ok,
    )
}

#[test]
fn test_mixed_inputs() {
    let (lines, total, all_ok) = run(&["outcome", "--divisor", "4", "8", "x", "-4", "6"]);
    assert_eq!(
        lines,
        vec![
            "8: ok 2",
            "x: failed (Invalid integer \"x\": invalid digit found in string)",
            "-4: failed (Negative value: -4)",
            "6: failed (6 is not divisible by 4)",
        ]
    );
    assert_eq!(total, None);
    assert!(!all_ok);
}

#[test]
fn test_default_and_sum() {
    let (lines, total, all_ok) = run(&["outcome", "--divisor", "2", "-d", "100", "--sum", "4", "5"]);
    assert_eq!(lines, vec!["4: ok 2", "5: default 100"]);
    assert_eq!(total.as_deref(), Some("total: 102"));
    assert!(all_ok);
}

#[test]
fn test_sum_overflow_is_reported() {
    let (lines, total, all_ok) = run(&["outcome", "--sum", "9223372036854775807", "1"]);
    assert_eq!(lines, vec!["9223372036854775807: ok 9223372036854775807", "1: ok 1"]);
    assert_eq!(total.as_deref(), Some("total: failed (Sum overflows i64)"));
    assert!(all_ok);
}

#[test]
fn test_config_file_supplies_settings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "divisor = 3\ndefault = 0").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (lines, _, all_ok) = run(&["outcome", "--config", &path, "9", "10"]);
    assert_eq!(lines, vec!["9: ok 3", "10: default 0"]);
    assert!(all_ok);
}

#[test]
fn test_flag_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "divisor = 3").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (lines, _, _) = run(&["outcome", "-c", &path, "--divisor", "5", "10"]);
    assert_eq!(lines, vec!["10: ok 2"]);
}

#[test]
fn test_zero_divisor_aborts_before_processing() {
    let args = Args::try_parse_from(["outcome", "--divisor", "0", "1"]).unwrap();
    let err = Settings::resolve(&args, &Config::default()).unwrap_err();
    assert_eq!(err.to_string(), "Divisor must not be zero");
}
