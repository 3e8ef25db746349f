use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RpcValueError>;

/// Errors produced while classifying, validating, and converting json-rpc values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpcValueError {
	/// Raw value kind is not one of the accepted source kinds.
	#[error("cannot wrap {value} with kind {kind} as a json-rpc type")]
	UnsupportedKind {
		/// Runtime kind label of the rejected value.
		kind: &'static str,
		/// Rendering of the rejected value.
		value: String,
	},
	/// Text is not `0x`-prefixed hex.
	#[error("cannot wrap {value:?} as a json-rpc type; strings must be hex-encoded and prefixed with \"0x\"")]
	MalformedText {
		/// Offending text.
		value: String,
	},
	/// Machine number has a fractional part.
	#[error("cannot wrap decimal {value} as a json-rpc type")]
	NonInteger {
		/// Offending number.
		value: f64,
	},
	/// Machine number is NaN or infinite.
	#[error("cannot wrap non-finite {value} as a json-rpc type")]
	NonFinite {
		/// Offending number.
		value: f64,
	},
	/// Machine number is below zero.
	#[error("cannot wrap negative {value} as a json-rpc type")]
	NegativeValue {
		/// Offending number.
		value: f64,
	},
	/// Byte-sequence input holds an element that is not a byte.
	#[error("cannot wrap {value} as a byte sequence: element at index {index} is out of range")]
	InvalidByteSequence {
		/// Offending element value.
		value: String,
		/// Element position inside the sequence.
		index: usize,
	},
	/// Byte length is negative, fractional, non-finite, or not a number.
	#[error("byteLength must be a number greater than or equal to 0, provided: {value}")]
	Configuration {
		/// Rendering of the rejected byte length.
		value: String,
	},
	/// Quantity magnitude does not fit the requested machine integer.
	#[error("quantity {value} does not fit in {target}")]
	Overflow {
		/// Hex rendering of the magnitude.
		value: String,
		/// Requested target type.
		target: &'static str,
	},
	/// Command-line literal could not be parsed as the requested kind.
	#[error("invalid {kind} literal: {value}")]
	InvalidLiteral {
		/// Requested source kind label.
		kind: &'static str,
		/// User-provided literal.
		value: String,
	},
}
