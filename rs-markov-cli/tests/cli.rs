//! Runs the `rs-markov` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_rs-markov"))
		.args(args)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();
	child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
	child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn reads_stdin_and_prints_newline() {
	let output = run(&["-l", "10", "--seed", "1"], "ababab");
	assert!(output.status.success());
	let text = stdout(&output);
	assert!(text == "ababababab\n" || text == "bababababa\n", "got {text:?}");
}

#[test]
fn same_seed_same_output() {
	let corpus = "the rain in spain falls mainly on the plain";
	let a = run(&["-k", "2", "-l", "60", "--seed", "99"], corpus);
	let b = run(&["-k", "2", "-l", "60", "--seed", "99"], corpus);
	assert_eq!(stdout(&a), stdout(&b));
	assert_eq!(stdout(&a).trim_end_matches('\n').chars().count(), 60);
}

#[test]
fn corpus_too_short_prints_starter() {
	let output = run(&["-k", "2", "-l", "5", "--starter", "hi"], "x");
	assert!(output.status.success());
	assert_eq!(stdout(&output), "hi\n");
}

#[test]
fn negative_length_prints_empty_line() {
	let output = run(&["-l", "-5"], "ababab");
	assert!(output.status.success());
	assert_eq!(stdout(&output), "\n");
}

#[test]
fn negative_order_falls_back_to_starter() {
	let output = run(&["-k", "-1", "-l", "3", "--starter", "hey"], "ababab");
	assert!(output.status.success());
	assert_eq!(stdout(&output), "hey\n");
}

#[test]
fn starter_beginning_with_hyphen() {
	let output = run(&["--starter", "-x", "-l", "2", "--seed", "0"], "ababab");
	assert!(output.status.success());
	assert_eq!(stdout(&output), "-x\n");
}

#[test]
fn stats_go_to_stderr() {
	let output = run(&["--stats", "-l", "3", "--seed", "0"], "ababab");
	assert!(output.status.success());
	let stderr = String::from_utf8(output.stderr.clone()).unwrap();
	assert!(stderr.contains("order 1, 2 states, 5 transitions"));
	assert_eq!(stdout(&output).chars().count(), 4);
}

#[test]
fn missing_input_file_fails() {
	let output = run(&["-i", "no/such/corpus.txt"], "");
	assert!(!output.status.success());
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.starts_with("Error: failed to load corpus"));
}
