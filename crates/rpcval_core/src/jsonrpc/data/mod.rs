use std::str::FromStr;

use crate::jsonrpc::value::Sealed;
use crate::jsonrpc::{ByteLength, Flavor, IntoRpcValue, Result, RpcValue, RpcValueError, Source};

mod convert;

use convert::DataConverter;

/// Fixed-width byte value (addresses, hashes, opaque blobs).
///
/// Every byte is significant, leading zeros included. Output is padded on the left or truncated on the
/// right to the effective byte length.
pub type Data = RpcValue<DataFlavor>;

/// Flavor marker for [`Data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFlavor;

impl Sealed for DataFlavor {}

impl Flavor for DataFlavor {
	type Config = Option<ByteLength>;

	const NAME: &'static str = "data";

	fn validate(source: &Source, _config: &Self::Config) -> Result<()> {
		DataConverter::select(source).validate()
	}
}

impl RpcValue<DataFlavor> {
	/// Empty byte value, rendered as `0x`.
	pub const EMPTY: Self = Self::new_unchecked(Source::Bytes(Vec::new()), None);

	/// Wrap `value` without a configured byte length.
	pub fn new<V: IntoRpcValue<DataFlavor>>(value: V) -> Result<Self> {
		Self::wrap(value, None)
	}

	/// Wrap `value` with a fixed output width.
	pub fn with_byte_length<V: IntoRpcValue<DataFlavor>>(value: V, byte_length: ByteLength) -> Result<Self> {
		Self::wrap(value, Some(byte_length))
	}

	/// Byte length captured at construction.
	pub fn byte_length(&self) -> Option<ByteLength> {
		self.config
	}

	/// `0x`-prefixed lower-case hex at the configured width.
	pub fn to_hex_string(&self) -> String {
		self.to_hex_string_with(None)
	}

	/// `0x`-prefixed lower-case hex, with `byte_length` overriding the configured width.
	pub fn to_hex_string_with(&self, byte_length: Option<ByteLength>) -> String {
		let digits = self.converter().to_digits(byte_length.or(self.config));
		format!("0x{digits}")
	}

	/// Bytes at the configured width.
	///
	/// Fails only when text digits cannot be decoded.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		self.to_bytes_with(None)
	}

	/// Bytes, with `byte_length` overriding the configured width.
	pub fn to_bytes_with(&self, byte_length: Option<ByteLength>) -> Result<Vec<u8>> {
		self.converter().to_bytes(byte_length.or(self.config))
	}

	fn converter(&self) -> DataConverter<'_> {
		DataConverter::select(&self.source)
	}
}

impl std::fmt::Display for RpcValue<DataFlavor> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex_string())
	}
}

impl FromStr for RpcValue<DataFlavor> {
	type Err = RpcValueError;

	fn from_str(value: &str) -> Result<Self> {
		Self::new(value)
	}
}
