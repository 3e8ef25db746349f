use num_bigint::BigUint;

use crate::jsonrpc::source::{validate_number, validate_text};
use crate::jsonrpc::{ByteLength, Result, Source, digits};

/// Fixed-width converter selected for one source kind.
///
/// The effective width of every output is the per-call override, else the configured width, else the
/// natural width of the value (no padding or truncation).
#[derive(Debug, Clone, Copy)]
pub(super) enum DataConverter<'a> {
	Bytes(&'a [u8]),
	Text(&'a str),
	Number(f64),
	BigInt(&'a BigUint),
	Absent,
}

impl<'a> DataConverter<'a> {
	pub(super) fn select(source: &'a Source) -> Self {
		match source {
			Source::Bytes(bytes) => Self::Bytes(bytes),
			Source::Text(text) => Self::Text(text),
			Source::Number(value) => Self::Number(*value),
			Source::BigInt(value) => Self::BigInt(value),
			Source::Absent => Self::Absent,
		}
	}

	pub(super) fn validate(self) -> Result<()> {
		match self {
			Self::Text(text) => validate_text(text),
			Self::Number(value) => validate_number(value),
			Self::Bytes(_) | Self::BigInt(_) | Self::Absent => Ok(()),
		}
	}

	/// Hex digits without the `0x` prefix.
	pub(super) fn to_digits(self, byte_length: Option<ByteLength>) -> String {
		let natural = match self {
			Self::Bytes(bytes) => digits::encode(bytes),
			Self::Text(text) => digits::text_digits(text),
			Self::Number(value) => digits::integer_digits(&digits::number_to_big(value)),
			Self::BigInt(value) => digits::integer_digits(value),
			Self::Absent => return String::new(),
		};

		match byte_length {
			Some(byte_length) => digits::fit_digits(&natural, byte_length).into_owned(),
			None => natural,
		}
	}

	pub(super) fn to_bytes(self, byte_length: Option<ByteLength>) -> Result<Vec<u8>> {
		let bytes = match self {
			Self::Bytes(bytes) => match byte_length {
				Some(byte_length) => digits::fit_bytes(bytes, byte_length),
				None => bytes.to_vec(),
			},
			Self::Text(text) => {
				let natural = digits::text_digits(text);
				match byte_length {
					Some(byte_length) => digits::decode(&digits::fit_digits(&natural, byte_length))?,
					None => digits::decode(&natural)?,
				}
			}
			Self::Number(value) => fit_integer(&digits::number_to_big(value), byte_length),
			Self::BigInt(value) => fit_integer(value, byte_length),
			Self::Absent => Vec::new(),
		};
		Ok(bytes)
	}
}

/// Big-endian bytes of an integer; zero is the single byte `0x00`.
fn fit_integer(value: &BigUint, byte_length: Option<ByteLength>) -> Vec<u8> {
	let bytes = value.to_bytes_be();
	match byte_length {
		Some(byte_length) => digits::fit_bytes(&bytes, byte_length),
		None => bytes,
	}
}
