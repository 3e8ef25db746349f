use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use rpcval_testkit::{VectorInput, target_dir as workspace_target_dir};

static RPCVAL_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_rpcval(args: &[&str]) -> Output {
	Command::new(rpcval_bin()).args(args).output().expect("rpcval command executes")
}

pub(crate) fn run_rpcval_logged(args: &[&str], filter: &str) -> Output {
	Command::new(rpcval_bin())
		.args(args)
		.env("RPCVAL_LOG", filter)
		.output()
		.expect("rpcval command executes")
}

pub(crate) fn run_rpcval_json(args: &[&str]) -> serde_json::Value {
	let output = run_rpcval(args);
	assert!(
		output.status.success(),
		"rpcval command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Command-line literal and `--kind` value for a shared vector input.
pub(crate) fn vector_args(input: &VectorInput) -> (String, &'static str) {
	match input {
		VectorInput::Null => ("null".to_owned(), "null"),
		VectorInput::Bytes(bytes) => (serde_json::to_string(bytes).expect("byte vector serializes"), "bytes"),
		VectorInput::Text(text) => (text.clone(), "text"),
		VectorInput::Number(value) => (value.to_string(), "number"),
		VectorInput::BigInt(digits) => (digits.clone(), "bigint"),
	}
}

fn rpcval_bin() -> &'static PathBuf {
	RPCVAL_BIN.get_or_init(resolve_rpcval_bin)
}

fn resolve_rpcval_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_rpcval") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "rpcval.exe" } else { "rpcval" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "rpcval"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build rpcval binary at {}", bin.display());

	bin
}
