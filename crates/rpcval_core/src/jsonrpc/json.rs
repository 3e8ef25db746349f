//! Serde glue: values serialize as their hex string and deserialize by classifying the input kind.

use std::fmt;

use num_bigint::BigUint;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::jsonrpc::{Address, Data, Quantity, Source};

/// Largest integer a machine number holds exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

impl Serialize for Data {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_hex_string())
	}
}

impl Serialize for Quantity {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self.to_hex_string() {
			Some(text) => serializer.serialize_str(&text),
			None => serializer.serialize_none(),
		}
	}
}

impl Serialize for Address {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_hex_string())
	}
}

impl<'de> Deserialize<'de> for Source {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(SourceVisitor)
	}
}

impl<'de> Deserialize<'de> for Data {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let source = Source::deserialize(deserializer)?;
		Data::new(source).map_err(de::Error::custom)
	}
}

impl<'de> Deserialize<'de> for Quantity {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let source = Source::deserialize(deserializer)?;
		// A `null` field stays `null` when serialized back.
		let nullable = source.is_absent();
		Quantity::wrap(source, nullable).map_err(de::Error::custom)
	}
}

impl<'de> Deserialize<'de> for Address {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let source = Source::deserialize(deserializer)?;
		Address::wrap(source).map_err(de::Error::custom)
	}
}

struct SourceVisitor;

impl<'de> Visitor<'de> for SourceVisitor {
	type Value = Source;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("null, a 0x-prefixed hex string, a non-negative integer, or an array of bytes")
	}

	fn visit_unit<E: de::Error>(self) -> Result<Source, E> {
		Ok(Source::Absent)
	}

	fn visit_none<E: de::Error>(self) -> Result<Source, E> {
		Ok(Source::Absent)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Source, D::Error> {
		deserializer.deserialize_any(self)
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Source, E> {
		Ok(Source::Text(value.to_owned()))
	}

	fn visit_string<E: de::Error>(self, value: String) -> Result<Source, E> {
		Ok(Source::Text(value))
	}

	fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Source, E> {
		Ok(Source::Bytes(value.to_vec()))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<Source, E> {
		if value > MAX_SAFE_INTEGER {
			return Ok(Source::BigInt(BigUint::from(value)));
		}
		Ok(Source::Number(value as f64))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> Result<Source, E> {
		Ok(Source::Number(value as f64))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> Result<Source, E> {
		Ok(Source::Number(value))
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> Result<Source, E> {
		Err(de::Error::custom(Source::unsupported("boolean", value)))
	}

	fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Source, A::Error> {
		Err(de::Error::custom(Source::unsupported("object", "{..}")))
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Source, A::Error> {
		let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(value) = seq.next_element::<ByteElement>()? {
			values.push(value.0);
		}
		Source::from_byte_values(values).map_err(de::Error::custom)
	}
}

/// Sequence element; any integer is accepted here and range-checked afterwards.
struct ByteElement(i64);

impl<'de> Deserialize<'de> for ByteElement {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct ElementVisitor;

		impl Visitor<'_> for ElementVisitor {
			type Value = ByteElement;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("an integer byte value")
			}

			fn visit_u64<E: de::Error>(self, value: u64) -> Result<ByteElement, E> {
				Ok(ByteElement(i64::try_from(value).unwrap_or(i64::MAX)))
			}

			fn visit_i64<E: de::Error>(self, value: i64) -> Result<ByteElement, E> {
				Ok(ByteElement(value))
			}

			fn visit_f64<E: de::Error>(self, value: f64) -> Result<ByteElement, E> {
				if value.fract() != 0.0 || !value.is_finite() {
					return Err(E::invalid_value(de::Unexpected::Float(value), &self));
				}
				Ok(ByteElement(value as i64))
			}
		}

		deserializer.deserialize_any(ElementVisitor)
	}
}
