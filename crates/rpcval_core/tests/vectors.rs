#![allow(missing_docs)]

use num_bigint::BigUint;
use rpcval::jsonrpc::{ByteLength, Data, Quantity, Source};
use rpcval_testkit::{VectorInput, hex_bytes, load_vectors};

fn source(input: &VectorInput) -> Source {
	match input {
		VectorInput::Null => Source::Absent,
		VectorInput::Bytes(bytes) => Source::Bytes(bytes.clone()),
		VectorInput::Text(text) => Source::Text(text.clone()),
		VectorInput::Number(value) => Source::Number(*value),
		VectorInput::BigInt(digits) => Source::BigInt(BigUint::parse_bytes(digits.as_bytes(), 10).expect("decimal bigint vector")),
	}
}

#[test]
fn data_vectors_match() {
	for case in load_vectors().data {
		let width = case.byte_length.map(|width| ByteLength::new(width).expect("width in range"));
		let data = Data::wrap(source(&case.input), width).expect("vector input wraps");
		assert_eq!(data.to_hex_string(), case.string, "string for {}", case.name);
		assert_eq!(data.to_bytes(), Ok(hex_bytes(&case.bytes)), "bytes for {}", case.name);
	}
}

#[test]
fn quantity_vectors_match() {
	for case in load_vectors().quantity {
		let quantity = Quantity::wrap(source(&case.input), case.nullable).expect("vector input wraps");
		assert_eq!(quantity.to_hex_string(), case.string, "string for {}", case.name);
		assert_eq!(quantity.to_bytes(), Ok(case.bytes.as_deref().map(hex_bytes)), "bytes for {}", case.name);
		assert_eq!(quantity.to_number(), Ok(case.number), "number for {}", case.name);
	}
}
