use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::jsonrpc::source::{validate_number, validate_text};
use crate::jsonrpc::{Result, Source, digits};

/// Canonical-minimal converter selected for one source kind.
///
/// `nullable` is the resolved per-call decision; only the absent converter and the numeric accessors
/// of empty byte and text values consult it.
#[derive(Debug, Clone, Copy)]
pub(super) enum QuantityConverter<'a> {
	Bytes(&'a [u8]),
	Text(&'a str),
	Number(f64),
	BigInt(&'a BigUint),
	Absent,
}

impl<'a> QuantityConverter<'a> {
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

	pub(super) fn to_hex_string(self, nullable: bool) -> Option<String> {
		let digits = match self {
			Self::Bytes(bytes) => minimal(&digits::encode(bytes)),
			Self::Text(text) => minimal(&digits::text_digits(text)),
			Self::Number(value) => digits::integer_digits(&digits::number_to_big(value)),
			Self::BigInt(value) => digits::integer_digits(value),
			Self::Absent => return (!nullable).then(|| "0x".to_owned()),
		};
		Some(format!("0x{digits}"))
	}

	pub(super) fn to_bytes(self, nullable: bool) -> Result<Option<Vec<u8>>> {
		let bytes = match self {
			Self::Bytes(bytes) => digits::strip_zero_bytes(bytes).to_vec(),
			Self::Text(text) => {
				let decoded = digits::decode(&digits::text_digits(text))?;
				digits::strip_zero_bytes(&decoded).to_vec()
			}
			Self::Number(value) => digits::integer_bytes(&digits::number_to_big(value)),
			Self::BigInt(value) => digits::integer_bytes(value),
			Self::Absent => return Ok((!nullable).then(Vec::new)),
		};
		Ok(Some(bytes))
	}

	pub(super) fn to_big_uint(self, nullable: bool) -> Result<Option<BigUint>> {
		let value = match self {
			Self::Bytes([]) => zero_unless(nullable),
			Self::Bytes(bytes) => Some(BigUint::from_bytes_be(bytes)),
			Self::Text(text) => match digits::text_digits(text).as_str() {
				"" => zero_unless(nullable),
				hex_digits => Some(BigUint::from_bytes_be(&digits::decode(hex_digits)?)),
			},
			Self::Number(value) => Some(digits::number_to_big(value)),
			Self::BigInt(value) => Some(value.clone()),
			Self::Absent => zero_unless(nullable),
		};
		Ok(value)
	}

	pub(super) fn to_number(self, nullable: bool) -> Result<Option<f64>> {
		match self {
			Self::Number(value) => Ok(Some(value)),
			other => Ok(other
				.to_big_uint(nullable)?
				.map(|value| value.to_f64().unwrap_or(f64::INFINITY))),
		}
	}
}

fn minimal(digits: &str) -> String {
	match digits::strip_zero_digits(digits) {
		"" => "0".to_owned(),
		stripped => stripped.to_owned(),
	}
}

fn zero_unless(nullable: bool) -> Option<BigUint> {
	(!nullable).then(BigUint::default)
}
