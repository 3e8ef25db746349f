#![allow(missing_docs)]

use num_bigint::BigUint;
use proptest::prelude::*;
use rpcval::jsonrpc::{ByteLength, Data, Quantity};

/// Largest integer a machine number holds exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

proptest! {
	#[test]
	fn data_pads_short_bytes_on_the_left(bytes in proptest::collection::vec(any::<u8>(), 0..32), extra in 0_usize..16) {
		let width = bytes.len() + extra;
		let data = Data::with_byte_length(bytes.clone(), ByteLength::new(width).expect("width in range")).expect("bytes wrap");
		let out = data.to_bytes().expect("bytes decode");

		prop_assert_eq!(out.len(), width);
		prop_assert!(out[..extra].iter().all(|byte| *byte == 0));
		prop_assert_eq!(&out[extra..], bytes.as_slice());
	}

	#[test]
	fn data_truncates_wide_bytes_to_the_leading_bytes(bytes in proptest::collection::vec(any::<u8>(), 1..48), cut in 1_usize..48) {
		let width = bytes.len().saturating_sub(cut);
		prop_assume!(width < bytes.len());
		let data = Data::with_byte_length(bytes.clone(), ByteLength::new(width).expect("width in range")).expect("bytes wrap");

		prop_assert_eq!(data.to_bytes(), Ok(bytes[..width].to_vec()));
	}

	#[test]
	fn data_text_round_trips_lower_cased(text in "0x[0-9a-fA-F]{0,64}") {
		let data = Data::new(text.as_str()).expect("hex text wraps");
		prop_assert_eq!(data.to_hex_string(), text.to_ascii_lowercase());
	}

	#[test]
	fn quantity_numbers_round_trip(value in 0_u64..=MAX_SAFE_INTEGER) {
		let quantity = Quantity::new(value as f64).expect("number wraps");
		prop_assert_eq!(quantity.to_big_uint(), Ok(Some(BigUint::from(value))));
		prop_assert_eq!(quantity.to_number(), Ok(Some(value as f64)));
		prop_assert_eq!(quantity.to_u64(), Ok(Some(value)));
	}

	#[test]
	fn quantity_text_is_minimal(bytes in proptest::collection::vec(any::<u8>(), 0..24)) {
		let quantity = Quantity::new(bytes.clone()).expect("bytes wrap");
		let text = quantity.to_hex_string().expect("non-nullable");
		let digits = text.strip_prefix("0x").expect("prefixed");

		prop_assert!(digits == "0" || !digits.starts_with('0'), "non-minimal {}", text);
		let out = quantity.to_bytes().expect("bytes decode").expect("non-nullable");
		prop_assert!(out.first() != Some(&0));
		prop_assert_eq!(BigUint::from_bytes_be(&out), BigUint::from_bytes_be(&bytes));
	}

	#[test]
	fn rewrapping_is_identity(value in any::<u32>()) {
		let quantity = Quantity::new(value).expect("number wraps");
		let again = Quantity::wrap(quantity.clone(), true).expect("existing value passes through");
		prop_assert_eq!(again, quantity);
	}
}
