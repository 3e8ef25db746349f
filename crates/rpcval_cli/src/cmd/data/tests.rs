use crate::cmd::test_support::{run_rpcval, run_rpcval_json, vector_args};

#[test]
fn data_json_pads_to_byte_length() {
	let json = run_rpcval_json(&["data", "[18,52]", "--byte-length", "4", "--json"]);

	assert_eq!(json["kind"], "bytes");
	assert_eq!(json["byte_length"], 4);
	assert_eq!(json["hex"], "0x00001234");
	assert_eq!(json["bytes"], serde_json::json!([0, 0, 18, 52]));
}

#[test]
fn data_json_truncates_text_to_leading_bytes() {
	let json = run_rpcval_json(&["data", "0x1234567890", "--byte-length", "2", "--json"]);

	assert_eq!(json["kind"], "text");
	assert_eq!(json["hex"], "0x1234");
	assert_eq!(json["bytes"], serde_json::json!([18, 52]));
}

#[test]
fn data_json_matches_shared_vectors() {
	for case in rpcval_testkit::load_vectors().data {
		let (value, kind) = vector_args(&case.input);
		let width = case.byte_length.map(|item| item.to_string());
		let mut argv = vec!["data", value.as_str(), "--kind", kind, "--json"];
		if let Some(width) = width.as_deref() {
			argv.extend(["--byte-length", width]);
		}
		let json = run_rpcval_json(&argv);
		assert_eq!(json["hex"], case.string.as_str(), "hex for {}", case.name);
	}
}

#[test]
fn data_rejects_malformed_text() {
	let output = run_rpcval(&["data", "0xnothex", "--kind", "text"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: "), "unexpected stderr: {stderr}");
	assert!(stderr.contains("prefixed with \"0x\""), "unexpected stderr: {stderr}");
}

#[test]
fn data_rejects_negative_byte_length() {
	let output = run_rpcval(&["data", "0x12", "--byte-length", "-1"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("byteLength must be a number greater than or equal to 0, provided: -1"));
}
