//! Hex digit and byte helpers shared by both converter families.
//!
//! Widths are measured from the most-significant end: padding prepends zero units and truncation
//! keeps the leading units.

use std::borrow::Cow;

use num_bigint::BigUint;
use num_traits::{FromPrimitive, Zero};

use crate::jsonrpc::{ByteLength, Result, RpcValueError};

/// Return `true` when `text` is `0x` followed by zero or more hex digits.
pub(crate) fn is_prefixed_hex(text: &str) -> bool {
	text.strip_prefix("0x").is_some_and(|digits| digits.bytes().all(|byte| byte.is_ascii_hexdigit()))
}

/// Digits after the `0x` prefix, lower-cased.
pub(crate) fn text_digits(text: &str) -> String {
	text.get(2..).unwrap_or_default().to_ascii_lowercase()
}

/// Lower-case hex digits of `bytes`, two per byte.
pub(crate) fn encode(bytes: &[u8]) -> String {
	hex::encode(bytes)
}

/// Minimal lower-case hex digits of an integer; zero renders as `0`.
pub(crate) fn integer_digits(value: &BigUint) -> String {
	value.to_str_radix(16)
}

/// Promote a validated machine number to an exact big integer.
pub(crate) fn number_to_big(value: f64) -> BigUint {
	BigUint::from_f64(value).unwrap_or_default()
}

/// Pad or truncate hex digits to exactly `byte_length` digit pairs.
pub(crate) fn fit_digits(digits: &str, byte_length: ByteLength) -> Cow<'_, str> {
	let want = byte_length.digits();
	match digits.len() {
		len if len == want => Cow::Borrowed(digits),
		len if len < want => Cow::Owned(format!("{}{digits}", "0".repeat(want - len))),
		_ => Cow::Borrowed(&digits[..want]),
	}
}

/// Pad or truncate bytes to exactly `byte_length` bytes.
pub(crate) fn fit_bytes(bytes: &[u8], byte_length: ByteLength) -> Vec<u8> {
	let want = byte_length.get();
	if bytes.len() >= want {
		return bytes[..want].to_vec();
	}

	let mut out = vec![0_u8; want];
	out[want - bytes.len()..].copy_from_slice(bytes);
	out
}

/// Decode hex digits into bytes, left-padding an odd digit count with one zero.
pub(crate) fn decode(digits: &str) -> Result<Vec<u8>> {
	let decoded = if digits.len() % 2 == 1 {
		hex::decode(format!("0{digits}"))
	} else {
		hex::decode(digits)
	};
	decoded.map_err(|_| RpcValueError::MalformedText {
		value: format!("0x{digits}"),
	})
}

/// Drop leading zero bytes.
pub(crate) fn strip_zero_bytes(bytes: &[u8]) -> &[u8] {
	let start = bytes.iter().position(|byte| *byte != 0).unwrap_or(bytes.len());
	&bytes[start..]
}

/// Drop leading `0` digits.
pub(crate) fn strip_zero_digits(digits: &str) -> &str {
	digits.trim_start_matches('0')
}

/// Minimal big-endian bytes of an integer; zero yields an empty sequence.
pub(crate) fn integer_bytes(value: &BigUint) -> Vec<u8> {
	if value.is_zero() { Vec::new() } else { value.to_bytes_be() }
}
