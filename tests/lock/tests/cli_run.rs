//! The `degrees` program flow driven through in-memory input and output.

use std::io::Cursor;

use clap::Parser;
use degrees_cli::{run, Args, CliError};
use lock_tests::small_dataset_dir;

fn args(extra: &[&str]) -> Args {
    let dir = small_dataset_dir();
    let mut argv = vec!["degrees".to_string(), dir.display().to_string()];
    argv.extend(extra.iter().map(ToString::to_string));
    Args::try_parse_from(argv).unwrap()
}

fn run_with(args: &Args, stdin: &str) -> (Result<(), CliError>, String) {
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    let result = run(args, &mut input, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn prints_each_hop_for_connected_people() {
    let (result, out) = run_with(&args(&[]), "Tom Cruise\nTom Hanks\n");
    result.unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Loading data...");
    assert_eq!(lines[1], "Data loaded.");
    assert!(out.contains("2 degrees of separation.\n"), "{out}");
    assert!(out.contains("1: Tom Cruise and Kevin Bacon starred in A Few Good Men\n"));
    assert!(out.contains("2: Kevin Bacon and Tom Hanks starred in Apollo 13\n"));
}

#[test]
fn names_can_come_from_flags() {
    let (result, out) = run_with(&args(&["--source", "kevin bacon", "--target", "TOM HANKS"]), "");
    result.unwrap();
    assert!(!out.contains("Name: "), "no prompt when both names are given");
    assert!(out.ends_with(
        "1 degrees of separation.\n1: Kevin Bacon and Tom Hanks starred in Apollo 13\n"
    ));
}

#[test]
fn disconnected_people_print_not_connected() {
    let (result, out) = run_with(&args(&["--source", "Emma Watson", "--target", "Tom Hanks"]), "");
    result.unwrap();
    assert!(out.ends_with("Not connected.\n"), "{out}");
}

#[test]
fn same_person_is_zero_degrees() {
    let (result, out) = run_with(&args(&["--source", "Tom Hanks", "--target", "Tom Hanks"]), "");
    result.unwrap();
    assert!(out.ends_with("0 degrees of separation.\n"), "{out}");
}

#[test]
fn unknown_name_is_person_not_found() {
    let (result, _) = run_with(&args(&[]), "Nobody Here\n");
    let err = result.unwrap_err();
    assert!(matches!(&err, CliError::PersonNotFound { name } if name == "Nobody Here"));
    assert_eq!(err.to_string(), "Person not found.");
}

#[test]
fn missing_directory_is_a_dataset_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args::try_parse_from(["degrees".into(), dir.path().display().to_string()]).unwrap();
    let (result, out) = run_with(&args, "");
    assert!(matches!(result, Err(CliError::Dataset(_))));
    assert_eq!(out, "Loading data...\n");
}

#[test]
fn trace_flag_writes_canonical_json() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.json");
    let trace_arg = trace_path.display().to_string();
    let (result, _) = run_with(
        &args(&["--source", "Cary Elwes", "--target", "Tom Hanks", "--trace", &trace_arg]),
        "",
    );
    result.unwrap();

    let bytes = std::fs::read(&trace_path).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["metadata"]["source"], "144");
    assert_eq!(value["metadata"]["target"], "158");
    assert_eq!(value["metadata"]["frontier_kind"], "queue");
    assert_eq!(value["metadata"]["termination"]["type"], "goal_reached");
    // Re-serializing the parsed value gives the same bytes: keys were sorted.
    assert_eq!(serde_json::to_vec(&value).unwrap(), bytes);
}
