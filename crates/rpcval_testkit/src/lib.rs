//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Golden conversion vectors shared by library and CLI tests.
#[derive(Debug, Clone, Deserialize)]
pub struct Vectors {
	/// Fixed-width `Data` cases.
	pub data: Vec<DataVector>,
	/// Canonical `Quantity` cases.
	pub quantity: Vec<QuantityVector>,
}

/// Raw input of one vector, tagged by source kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum VectorInput {
	/// Absent input.
	Null,
	/// Byte values.
	Bytes(Vec<u8>),
	/// Hex text.
	Text(String),
	/// Machine number.
	Number(f64),
	/// Decimal big-integer literal.
	BigInt(String),
}

/// One `Data` expectation.
#[derive(Debug, Clone, Deserialize)]
pub struct DataVector {
	/// Short case label.
	pub name: String,
	/// Raw input.
	pub input: VectorInput,
	/// Configured byte length.
	pub byte_length: Option<usize>,
	/// Expected hex string.
	pub string: String,
	/// Expected bytes, as hex without prefix.
	pub bytes: String,
}

/// One `Quantity` expectation.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityVector {
	/// Short case label.
	pub name: String,
	/// Raw input.
	pub input: VectorInput,
	/// Nullable flag.
	#[serde(default)]
	pub nullable: bool,
	/// Expected hex string, `None` for null.
	pub string: Option<String>,
	/// Expected bytes as hex without prefix, `None` for null.
	pub bytes: Option<String>,
	/// Expected machine number, `None` for null.
	pub number: Option<f64>,
}

/// Load `fixtures/vectors.json`.
pub fn load_vectors() -> Vectors {
	let path = fixture_path("vectors.json");
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

/// Decode unprefixed hex used in vector expectations.
pub fn hex_bytes(digits: &str) -> Vec<u8> {
	(0..digits.len())
		.step_by(2)
		.map(|at| u8::from_str_radix(&digits[at..at + 2], 16).unwrap_or_else(|err| panic!("bad vector hex {digits:?}: {err}")))
		.collect()
}
