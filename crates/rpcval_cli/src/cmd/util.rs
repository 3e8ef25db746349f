use num_bigint::BigUint;
use rpcval::jsonrpc::{ByteLength, Result, RpcValueError, Source, SourceKind};

/// Source kind requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum KindArg {
	/// Classify the literal by its syntax.
	#[default]
	Auto,
	/// `0x`-prefixed hex text.
	Text,
	/// Machine number.
	Number,
	/// Decimal big integer.
	Bigint,
	/// JSON-style byte array, e.g. `[18,52]`.
	Bytes,
	/// Absent value; the literal is ignored.
	Null,
}

/// Turn a command-line literal into a [`Source`].
pub(crate) fn parse_source(value: &str, kind: KindArg) -> Result<Source> {
	match kind {
		KindArg::Auto => {
			let resolved = classify(value)?;
			tracing::debug!(?resolved, "classified command-line literal");
			parse_source(value, resolved)
		}
		KindArg::Null => Ok(Source::Absent),
		KindArg::Text => Ok(Source::Text(value.to_owned())),
		KindArg::Number => value
			.trim()
			.parse::<f64>()
			.map(Source::Number)
			.map_err(|_| invalid_literal(SourceKind::Number, value)),
		KindArg::Bigint => value
			.trim()
			.parse::<BigUint>()
			.map(Source::BigInt)
			.map_err(|_| invalid_literal(SourceKind::BigInt, value)),
		KindArg::Bytes => {
			let values: Vec<i64> = serde_json::from_str(value).map_err(|_| invalid_literal(SourceKind::Bytes, value))?;
			Source::from_byte_values(values)
		}
	}
}

/// Parse an optional `--byte-length` literal.
pub(crate) fn parse_byte_length(value: Option<&str>) -> Result<Option<ByteLength>> {
	value.map(str::parse::<ByteLength>).transpose()
}

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}

/// Resolve `auto` to a concrete kind; never returns [`KindArg::Auto`].
fn classify(value: &str) -> Result<KindArg> {
	let trimmed = value.trim();
	if trimmed.is_empty() || trimmed == "null" {
		return Ok(KindArg::Null);
	}
	if trimmed.starts_with('[') {
		return Ok(KindArg::Bytes);
	}
	if trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
		return Ok(KindArg::Bigint);
	}
	match trimmed {
		"true" | "false" => return Err(Source::unsupported("boolean", trimmed)),
		_ if trimmed.starts_with('{') => return Err(Source::unsupported("object", trimmed)),
		_ => {}
	}
	if looks_numeric(trimmed) && trimmed.parse::<f64>().is_ok() {
		return Ok(KindArg::Number);
	}
	Ok(KindArg::Text)
}

/// Float syntax only; words such as `inf` or `NaN` stay text.
fn looks_numeric(value: &str) -> bool {
	let body = value.strip_prefix(['-', '+']).unwrap_or(value);
	body.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.')
		&& body.chars().all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '-' | '+'))
}

fn invalid_literal(kind: SourceKind, value: &str) -> RpcValueError {
	RpcValueError::InvalidLiteral {
		kind: kind.label(),
		value: value.to_owned(),
	}
}
