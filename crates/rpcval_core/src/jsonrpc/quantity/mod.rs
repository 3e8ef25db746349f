use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::jsonrpc::value::Sealed;
use crate::jsonrpc::{Flavor, IntoRpcValue, Result, RpcValue, RpcValueError, Source};

mod convert;

use convert::QuantityConverter;

/// Canonical big-integer value (numeric json-rpc fields).
///
/// Output never carries leading zero bytes or digits. The magnitude zero renders as `0x0` and as an
/// empty byte sequence. An absent value renders as `null` when nullable, else as the zero forms.
pub type Quantity = RpcValue<QuantityFlavor>;

/// Flavor marker for [`Quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityFlavor;

impl Sealed for QuantityFlavor {}

impl Flavor for QuantityFlavor {
	type Config = bool;

	const NAME: &'static str = "quantity";

	fn validate(source: &Source, _config: &Self::Config) -> Result<()> {
		QuantityConverter::select(source).validate()
	}
}

impl RpcValue<QuantityFlavor> {
	/// Empty byte value; renders as `0x0`.
	pub const EMPTY: Self = Self::new_unchecked(Source::Bytes(Vec::new()), false);
	/// Zero.
	pub const ZERO: Self = Self::new_unchecked(Source::Number(0.0), false);
	/// One.
	pub const ONE: Self = Self::new_unchecked(Source::Number(1.0), false);
	/// One gwei, 10^9 wei.
	pub const GWEI: Self = Self::new_unchecked(Source::Number(1_000_000_000.0), false);

	/// Wrap `value` as a non-nullable quantity.
	pub fn new<V: IntoRpcValue<QuantityFlavor>>(value: V) -> Result<Self> {
		Self::wrap(value, false)
	}

	/// Wrap `value`, rendering absent input as `null` in every representation.
	pub fn nullable<V: IntoRpcValue<QuantityFlavor>>(value: V) -> Result<Self> {
		Self::wrap(value, true)
	}

	/// Nullable flag captured at construction.
	pub fn is_nullable(&self) -> bool {
		self.config
	}

	/// Minimal `0x`-prefixed lower-case hex.
	pub fn to_hex_string(&self) -> Option<String> {
		self.to_hex_string_with(None)
	}

	/// Minimal hex with an optional nullable override.
	pub fn to_hex_string_with(&self, nullable: Option<bool>) -> Option<String> {
		self.converter().to_hex_string(self.resolve(nullable))
	}

	/// Big-endian magnitude bytes without leading zeros.
	///
	/// Fails only when text digits cannot be decoded.
	pub fn to_bytes(&self) -> Result<Option<Vec<u8>>> {
		self.to_bytes_with(None)
	}

	/// Magnitude bytes with an optional nullable override.
	pub fn to_bytes_with(&self, nullable: Option<bool>) -> Result<Option<Vec<u8>>> {
		self.converter().to_bytes(self.resolve(nullable))
	}

	/// Magnitude as a machine number; precision is lost above 2^53.
	pub fn to_number(&self) -> Result<Option<f64>> {
		self.to_number_with(None)
	}

	/// Machine number with an optional nullable override.
	pub fn to_number_with(&self, nullable: Option<bool>) -> Result<Option<f64>> {
		self.converter().to_number(self.resolve(nullable))
	}

	/// Magnitude as a big integer.
	pub fn to_big_uint(&self) -> Result<Option<BigUint>> {
		self.to_big_uint_with(None)
	}

	/// Big integer with an optional nullable override.
	pub fn to_big_uint_with(&self, nullable: Option<bool>) -> Result<Option<BigUint>> {
		self.converter().to_big_uint(self.resolve(nullable))
	}

	/// Magnitude as a `u64`, failing when it does not fit.
	pub fn to_u64(&self) -> Result<Option<u64>> {
		self.to_u64_with(None)
	}

	/// Checked `u64` with an optional nullable override.
	pub fn to_u64_with(&self, nullable: Option<bool>) -> Result<Option<u64>> {
		let Some(value) = self.to_big_uint_with(nullable)? else {
			return Ok(None);
		};
		value.to_u64().map(Some).ok_or_else(|| RpcValueError::Overflow {
			value: format!("0x{}", value.to_str_radix(16)),
			target: "u64",
		})
	}

	/// Big-integer interpretation; `None` when the raw value is absent.
	pub fn value_of(&self) -> Result<Option<BigUint>> {
		if self.is_null() {
			return Ok(None);
		}
		self.to_big_uint()
	}

	fn resolve(&self, nullable: Option<bool>) -> bool {
		nullable.unwrap_or(self.config)
	}

	fn converter(&self) -> QuantityConverter<'_> {
		QuantityConverter::select(&self.source)
	}
}

impl std::fmt::Display for RpcValue<QuantityFlavor> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.to_hex_string() {
			Some(text) => f.write_str(&text),
			None => f.write_str("null"),
		}
	}
}

impl FromStr for RpcValue<QuantityFlavor> {
	type Err = RpcValueError;

	fn from_str(value: &str) -> Result<Self> {
		Self::new(value)
	}
}
