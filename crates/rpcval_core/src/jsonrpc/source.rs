use num_bigint::BigUint;

use crate::jsonrpc::{Result, RpcValueError, digits};

/// Raw host value accepted by json-rpc wrappers, tagged by its runtime kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
	/// Missing value (`null`).
	Absent,
	/// Raw byte sequence.
	Bytes(Vec<u8>),
	/// Hex-encoded text; validated as `0x[0-9a-fA-F]*` on wrap.
	Text(String),
	/// Fixed-precision machine number; must be a finite non-negative integer.
	Number(f64),
	/// Arbitrary-precision non-negative integer.
	BigInt(BigUint),
}

/// Fieldless tag of a [`Source`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
	/// [`Source::Absent`].
	Absent,
	/// [`Source::Bytes`].
	Bytes,
	/// [`Source::Text`].
	Text,
	/// [`Source::Number`].
	Number,
	/// [`Source::BigInt`].
	BigInt,
}

impl SourceKind {
	/// Stable lower-case label used in diagnostics and CLI output.
	pub fn label(self) -> &'static str {
		match self {
			Self::Absent => "null",
			Self::Bytes => "bytes",
			Self::Text => "text",
			Self::Number => "number",
			Self::BigInt => "bigint",
		}
	}
}

impl Source {
	/// Return the runtime kind of this value.
	pub fn kind(&self) -> SourceKind {
		match self {
			Self::Absent => SourceKind::Absent,
			Self::Bytes(_) => SourceKind::Bytes,
			Self::Text(_) => SourceKind::Text,
			Self::Number(_) => SourceKind::Number,
			Self::BigInt(_) => SourceKind::BigInt,
		}
	}

	/// Return `true` for [`Source::Absent`].
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Build a byte source from loosely typed element values.
	///
	/// Every element must lie in `0..=255`.
	pub fn from_byte_values<I>(values: I) -> Result<Self>
	where
		I: IntoIterator<Item = i64>,
	{
		let mut out = Vec::new();
		for (index, value) in values.into_iter().enumerate() {
			let byte = u8::try_from(value).map_err(|_| RpcValueError::InvalidByteSequence {
				value: value.to_string(),
				index,
			})?;
			out.push(byte);
		}
		Ok(Self::Bytes(out))
	}

	/// Reject a value whose dynamic kind has no [`Source`] counterpart.
	pub fn unsupported(kind: &'static str, value: impl std::fmt::Display) -> RpcValueError {
		RpcValueError::UnsupportedKind {
			kind,
			value: value.to_string(),
		}
	}
}

/// Reject text that is not `0x`-prefixed hex.
pub(crate) fn validate_text(text: &str) -> Result<()> {
	if !digits::is_prefixed_hex(text) {
		return Err(RpcValueError::MalformedText { value: text.to_owned() });
	}
	Ok(())
}

/// Reject machine numbers that are not finite non-negative integers.
pub(crate) fn validate_number(value: f64) -> Result<()> {
	if !value.is_finite() {
		return Err(RpcValueError::NonFinite { value });
	}
	if value.fract() != 0.0 {
		return Err(RpcValueError::NonInteger { value });
	}
	if value < 0.0 {
		return Err(RpcValueError::NegativeValue { value });
	}
	Ok(())
}

impl std::fmt::Display for Source {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Absent => f.write_str("null"),
			Self::Bytes(bytes) => write!(f, "bytes[{}]", bytes.len()),
			Self::Text(text) => write!(f, "{text:?}"),
			Self::Number(value) => write!(f, "{value}"),
			Self::BigInt(value) => write!(f, "{value}n"),
		}
	}
}

impl From<Vec<u8>> for Source {
	fn from(value: Vec<u8>) -> Self {
		Self::Bytes(value)
	}
}

impl From<&[u8]> for Source {
	fn from(value: &[u8]) -> Self {
		Self::Bytes(value.to_vec())
	}
}

impl<const N: usize> From<[u8; N]> for Source {
	fn from(value: [u8; N]) -> Self {
		Self::Bytes(value.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Source {
	fn from(value: &[u8; N]) -> Self {
		Self::Bytes(value.to_vec())
	}
}

impl From<String> for Source {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for Source {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<BigUint> for Source {
	fn from(value: BigUint) -> Self {
		Self::BigInt(value)
	}
}

impl From<f64> for Source {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<f32> for Source {
	fn from(value: f32) -> Self {
		Self::Number(f64::from(value))
	}
}

macro_rules! number_source {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Source {
				fn from(value: $ty) -> Self {
					Self::Number(f64::from(value))
				}
			}
		)*
	};
}

number_source!(u8, u16, u32, i8, i16, i32);

macro_rules! bigint_source {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Source {
				fn from(value: $ty) -> Self {
					Self::BigInt(BigUint::from(value))
				}
			}
		)*
	};
}

bigint_source!(u64, u128, usize);

impl From<i64> for Source {
	fn from(value: i64) -> Self {
		match u64::try_from(value) {
			Ok(unsigned) => Self::BigInt(BigUint::from(unsigned)),
			// Negative input stays a machine number so wrapping rejects it.
			Err(_) => Self::Number(value as f64),
		}
	}
}

impl<T: Into<Source>> From<Option<T>> for Source {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Absent, Into::into)
	}
}
