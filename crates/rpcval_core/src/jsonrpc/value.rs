use std::marker::PhantomData;

use num_bigint::BigUint;

use crate::jsonrpc::{Result, Source, SourceKind};

mod sealed {
	pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Conversion policy bound into an [`RpcValue`].
///
/// A flavor names its per-value configuration and validates a classified source against it once, at
/// wrap time. Implemented by [`DataFlavor`](crate::jsonrpc::DataFlavor) and
/// [`QuantityFlavor`](crate::jsonrpc::QuantityFlavor) only.
pub trait Flavor: Sealed + Sized {
	/// Configuration captured at construction.
	type Config: Copy + Default + std::fmt::Debug + PartialEq;

	/// Flavor name used in diagnostics.
	const NAME: &'static str;

	/// Check `source` with the converter selected for its kind.
	fn validate(source: &Source, config: &Self::Config) -> Result<()>;
}

/// Immutable, validated json-rpc value.
///
/// Holds the raw [`Source`] exactly as supplied plus the flavor configuration. Every conversion is a
/// pure function of those two and an optional per-call override.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcValue<F: Flavor> {
	pub(crate) source: Source,
	pub(crate) config: F::Config,
	flavor: PhantomData<F>,
}

impl<F: Flavor> RpcValue<F> {
	/// Wrap `value`, validating it eagerly.
	///
	/// An existing `RpcValue<F>` is returned unchanged and `config` is ignored.
	pub fn wrap<V: IntoRpcValue<F>>(value: V, config: F::Config) -> Result<Self> {
		value.into_rpc_value(config)
	}

	/// Classify, validate, and store a raw source.
	pub fn from_source(source: Source, config: F::Config) -> Result<Self> {
		F::validate(&source, &config)?;
		tracing::trace!(flavor = F::NAME, kind = source.kind().label(), "wrapped json-rpc value");
		Ok(Self::new_unchecked(source, config))
	}

	pub(crate) const fn new_unchecked(source: Source, config: F::Config) -> Self {
		Self {
			source,
			config,
			flavor: PhantomData,
		}
	}

	/// Raw value as supplied.
	pub fn source(&self) -> &Source {
		&self.source
	}

	/// Consume the wrapper and return the raw value.
	pub fn into_source(self) -> Source {
		self.source
	}

	/// Kind of the raw value.
	pub fn kind(&self) -> SourceKind {
		self.source.kind()
	}

	/// Configuration captured at construction.
	pub fn config(&self) -> F::Config {
		self.config
	}

	/// Return `true` when the raw value is absent.
	pub fn is_null(&self) -> bool {
		self.source.is_absent()
	}
}

/// Values accepted by [`RpcValue::wrap`].
pub trait IntoRpcValue<F: Flavor> {
	/// Produce a validated wrapper using `config` when a new one is built.
	fn into_rpc_value(self, config: F::Config) -> Result<RpcValue<F>>;
}

impl<F: Flavor> IntoRpcValue<F> for RpcValue<F> {
	fn into_rpc_value(self, _config: F::Config) -> Result<RpcValue<F>> {
		Ok(self)
	}
}

impl<F: Flavor, T: Into<Source>> IntoRpcValue<F> for Option<T> {
	fn into_rpc_value(self, config: F::Config) -> Result<RpcValue<F>> {
		RpcValue::from_source(Source::from(self), config)
	}
}

impl<F: Flavor, const N: usize> IntoRpcValue<F> for [u8; N] {
	fn into_rpc_value(self, config: F::Config) -> Result<RpcValue<F>> {
		RpcValue::from_source(Source::from(self), config)
	}
}

impl<F: Flavor, const N: usize> IntoRpcValue<F> for &[u8; N] {
	fn into_rpc_value(self, config: F::Config) -> Result<RpcValue<F>> {
		RpcValue::from_source(Source::from(self), config)
	}
}

macro_rules! into_rpc_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl<F: Flavor> IntoRpcValue<F> for $ty {
				fn into_rpc_value(self, config: F::Config) -> Result<RpcValue<F>> {
					RpcValue::from_source(Source::from(self), config)
				}
			}
		)*
	};
}

into_rpc_value!(Source, Vec<u8>, &[u8], String, &str, BigUint, f64, f32, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64);
