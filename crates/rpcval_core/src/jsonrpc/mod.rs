mod address;
mod byte_length;
mod data;
mod digits;
mod error;
mod json;
mod quantity;
mod source;
mod value;

/// Fixed 20-byte account identifier.
pub use address::Address;
/// Validated `Data` output width.
pub use byte_length::ByteLength;
/// Fixed-width byte value flavor.
pub use data::{Data, DataFlavor};
/// Error and result aliases.
pub use error::{Result, RpcValueError};
/// Canonical big-integer value flavor.
pub use quantity::{Quantity, QuantityFlavor};
/// Raw host values and their kind tags.
pub use source::{Source, SourceKind};
/// Generic wrapper and flavor plumbing.
pub use value::{Flavor, IntoRpcValue, RpcValue};
