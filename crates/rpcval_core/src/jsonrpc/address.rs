use crate::jsonrpc::{ByteLength, Data, DataFlavor, IntoRpcValue, Result, RpcValueError, Source};

/// Account identifier: a [`Data`] value fixed at 20 bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Address(Data);

impl Address {
	/// Identifier width in bytes.
	pub const BYTE_LENGTH: ByteLength = ByteLength::new_unchecked(20);

	/// Empty address source; renders as twenty zero bytes.
	pub const EMPTY: Self = Self(Data::new_unchecked(Source::Bytes(Vec::new()), Some(Self::BYTE_LENGTH)));

	/// Wrap `value` at the fixed address width.
	///
	/// An existing [`Data`] is re-wrapped from its raw source so the address width always applies.
	pub fn wrap<V: IntoRpcValue<DataFlavor>>(value: V) -> Result<Self> {
		let data = Data::new(value)?;
		Data::with_byte_length(data.into_source(), Self::BYTE_LENGTH).map(Self)
	}

	/// `0x`-prefixed 40-digit lower-case hex.
	pub fn to_hex_string(&self) -> String {
		self.0.to_hex_string()
	}

	/// Twenty bytes; empty when the raw value is absent.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		self.0.to_bytes()
	}

	/// Twenty bytes as a fixed array; all zero when the raw value is absent.
	pub fn to_array(&self) -> Result<[u8; 20]> {
		let bytes = self.0.to_bytes_with(Some(Self::BYTE_LENGTH))?;
		let mut out = [0_u8; 20];
		let keep = bytes.len().min(out.len());
		let start = out.len() - keep;
		out[start..].copy_from_slice(&bytes[..keep]);
		Ok(out)
	}

	/// Underlying fixed-width value.
	pub fn as_data(&self) -> &Data {
		&self.0
	}

	/// Return `true` when the raw value is absent.
	pub fn is_null(&self) -> bool {
		self.0.is_null()
	}
}

impl From<Address> for Data {
	fn from(value: Address) -> Self {
		value.0
	}
}

impl From<[u8; 20]> for Address {
	fn from(value: [u8; 20]) -> Self {
		Self(Data::new_unchecked(Source::Bytes(value.to_vec()), Some(Self::BYTE_LENGTH)))
	}
}

impl std::fmt::Display for Address {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(&self.0, f)
	}
}

impl std::str::FromStr for Address {
	type Err = RpcValueError;

	fn from_str(value: &str) -> Result<Self> {
		Self::wrap(value)
	}
}
