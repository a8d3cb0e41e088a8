//! Runs the `taggen` binary the way a release pipeline would.

use std::process::{Command, Output};

use mjolnir::build_info::RUNTIME_VERSION;
use mjolnir::tag::{short_version, ADJECTIVES, NOUNS};

fn taggen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taggen"))
        .args(args)
        .output()
        .expect("Failed to run taggen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap().trim_end().to_string()
}

fn assert_name(name: &str) {
    let (adjective, noun) = name.split_once('-').expect("name has a dash");
    assert!(
        ADJECTIVES.contains(&adjective),
        "unknown adjective in {name:?}"
    );
    assert!(NOUNS.contains(&noun), "unknown noun in {name:?}");
}

#[test]
fn test_full_tag() {
    let output = taggen(&[]);
    assert!(output.status.success());

    let tag = stdout(&output);
    let prefix = format!("{}-", short_version(RUNTIME_VERSION));
    assert_name(tag.strip_prefix(&prefix).expect("tag starts with version"));
}

#[test]
fn test_name_only() {
    let output = taggen(&["--name"]);
    assert!(output.status.success());
    assert_name(&stdout(&output));
}

#[test]
fn test_version_only() {
    let output = taggen(&["--version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), short_version(RUNTIME_VERSION));
}

#[test]
fn test_help() {
    for flag in ["--help", "-h"] {
        let output = taggen(&[flag]);
        assert!(output.status.success());
        assert!(stdout(&output).starts_with("Usage: taggen"));
    }
}

#[test]
fn test_unknown_argument_prints_full_tag() {
    let output = taggen(&["--bogus", "--name"]);
    assert!(output.status.success());

    let tag = stdout(&output);
    let prefix = format!("{}-", short_version(RUNTIME_VERSION));
    assert_name(tag.strip_prefix(&prefix).expect("tag starts with version"));
}
