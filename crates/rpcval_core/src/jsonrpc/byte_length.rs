use std::str::FromStr;

use crate::jsonrpc::{Result, RpcValueError};

/// Non-negative output width, in bytes, for `Data` conversions.
///
/// Widths are capped at [`ByteLength::MAX`] so the digit count always fits a `usize` and every
/// output buffer stays addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteLength(usize);

impl ByteLength {
	/// Largest accepted width.
	pub const MAX: Self = Self(isize::MAX as usize / 2);

	/// Wrap `bytes`, or `None` above [`ByteLength::MAX`].
	pub const fn new(bytes: usize) -> Option<Self> {
		if bytes > Self::MAX.0 {
			return None;
		}
		Some(Self(bytes))
	}

	/// Width known to be in range.
	pub(crate) const fn new_unchecked(bytes: usize) -> Self {
		Self(bytes)
	}

	/// Width in bytes.
	pub const fn get(self) -> usize {
		self.0
	}

	/// Width in hex digits.
	pub(crate) const fn digits(self) -> usize {
		self.0.saturating_mul(2)
	}
}

fn configuration(value: impl std::fmt::Display) -> RpcValueError {
	RpcValueError::Configuration { value: value.to_string() }
}

impl TryFrom<usize> for ByteLength {
	type Error = RpcValueError;

	fn try_from(value: usize) -> Result<Self> {
		Self::new(value).ok_or_else(|| configuration(value))
	}
}

impl TryFrom<i64> for ByteLength {
	type Error = RpcValueError;

	fn try_from(value: i64) -> Result<Self> {
		usize::try_from(value)
			.ok()
			.and_then(Self::new)
			.ok_or_else(|| configuration(value))
	}
}

impl TryFrom<f64> for ByteLength {
	type Error = RpcValueError;

	fn try_from(value: f64) -> Result<Self> {
		if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > Self::MAX.0 as f64 {
			return Err(configuration(value));
		}
		Self::new(value as usize).ok_or_else(|| configuration(value))
	}
}

impl FromStr for ByteLength {
	type Err = RpcValueError;

	fn from_str(value: &str) -> Result<Self> {
		let trimmed = value.trim();
		if let Ok(parsed) = trimmed.parse::<i64>() {
			return Self::try_from(parsed);
		}
		match trimmed.parse::<f64>() {
			Ok(parsed) => Self::try_from(parsed).map_err(|_| configuration(value)),
			Err(_) => Err(configuration(value)),
		}
	}
}

impl std::fmt::Display for ByteLength {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::jsonrpc::Data;

	fn width(bytes: usize) -> ByteLength {
		ByteLength::new(bytes).expect("width in range")
	}

	#[test]
	fn accepts_non_negative_integral_widths() {
		assert_eq!(ByteLength::try_from(0_i64), Ok(width(0)));
		assert_eq!(ByteLength::try_from(20.0_f64), Ok(width(20)));
		assert_eq!(ByteLength::try_from(32_usize), Ok(width(32)));
		assert_eq!("32".parse::<ByteLength>(), Ok(width(32)));
		assert_eq!("4.0".parse::<ByteLength>(), Ok(width(4)));
		assert_eq!(ByteLength::new(ByteLength::MAX.get()), Some(ByteLength::MAX));
	}

	#[test]
	fn rejects_negative_non_finite_fractional_and_non_numeric_widths() {
		for err in [
			ByteLength::try_from(-1_i64).expect_err("negative"),
			ByteLength::try_from(f64::INFINITY).expect_err("infinite"),
			ByteLength::try_from(f64::NAN).expect_err("nan"),
			ByteLength::try_from(1.5_f64).expect_err("fractional"),
			"abc".parse::<ByteLength>().expect_err("non-numeric"),
			"-3".parse::<ByteLength>().expect_err("negative text"),
		] {
			assert!(matches!(err, RpcValueError::Configuration { .. }), "unexpected error: {err}");
		}
	}

	#[test]
	fn rejects_widths_above_the_maximum() {
		let over = ByteLength::MAX.get() + 1;
		assert_eq!(ByteLength::new(over), None);
		assert_eq!(ByteLength::new(usize::MAX), None);
		for err in [
			ByteLength::try_from(over).expect_err("usize over max"),
			ByteLength::try_from(i64::MAX).expect_err("i64 over max"),
			ByteLength::try_from(18_446_744_073_709_551_616.0_f64).expect_err("2^64"),
			ByteLength::try_from(1e300_f64).expect_err("huge float"),
			"9223372036854775808".parse::<ByteLength>().expect_err("text over i64"),
			"18446744073709551616".parse::<ByteLength>().expect_err("text at 2^64"),
		] {
			assert!(matches!(err, RpcValueError::Configuration { .. }), "unexpected error: {err}");
		}
	}

	#[test]
	fn out_of_range_override_fails_where_it_is_parsed() {
		let data = Data::new("0x12").expect("text wraps");
		let rendered = "9223372036854775808".parse::<ByteLength>().map(|width| data.to_hex_string_with(Some(width)));
		assert!(matches!(rendered, Err(RpcValueError::Configuration { .. })));
		assert_eq!(data.to_hex_string_with(Some(width(2))), "0x0012");
	}

	#[test]
	fn digit_count_does_not_overflow_at_the_maximum() {
		assert_eq!(ByteLength::MAX.digits(), ByteLength::MAX.get() * 2);
		assert!(ByteLength::MAX.digits() <= isize::MAX as usize);
	}

	#[test]
	fn configuration_error_reports_the_provided_value() {
		let err = ByteLength::try_from(-1_i64).expect_err("negative");
		assert_eq!(err.to_string(), "byteLength must be a number greater than or equal to 0, provided: -1");
		let err = "9223372036854775808".parse::<ByteLength>().expect_err("too wide");
		assert_eq!(
			err.to_string(),
			"byteLength must be a number greater than or equal to 0, provided: 9223372036854775808"
		);
	}
}
