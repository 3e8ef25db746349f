use rpcval::jsonrpc::{Quantity, Result};

use crate::cmd::util::{KindArg, emit_json, parse_source};

#[derive(clap::Args)]
pub struct Args {
	#[arg(allow_hyphen_values = true)]
	pub value: String,
	#[arg(long, value_enum, default_value_t = KindArg::Auto)]
	pub kind: KindArg,
	#[arg(long)]
	pub nullable: bool,
	#[arg(long)]
	pub json: bool,
}

/// Convert one literal to a canonical Quantity and print every output form.
pub fn run(args: Args) -> Result<()> {
	let Args {
		value,
		kind,
		nullable,
		json,
	} = args;

	let source = parse_source(&value, kind)?;
	let quantity = Quantity::wrap(source, nullable)?;
	let hex = quantity.to_hex_string();
	let bytes = quantity.to_bytes()?;
	let number = quantity.to_number()?;
	let decimal = quantity.to_big_uint()?.map(|item| item.to_string());

	if json {
		let payload = QuantityJson {
			input: value,
			kind: quantity.kind().label(),
			nullable,
			hex,
			bytes,
			number,
			decimal,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("kind: {}", quantity.kind().label());
	println!("hex: {}", hex.as_deref().unwrap_or("null"));
	match bytes {
		Some(bytes) => println!("bytes: {bytes:?}"),
		None => println!("bytes: null"),
	}
	match number {
		Some(number) => println!("number: {number}"),
		None => println!("number: null"),
	}
	println!("decimal: {}", decimal.as_deref().unwrap_or("null"));
	Ok(())
}

#[derive(serde::Serialize)]
struct QuantityJson {
	input: String,
	kind: &'static str,
	nullable: bool,
	hex: Option<String>,
	bytes: Option<Vec<u8>>,
	number: Option<f64>,
	decimal: Option<String>,
}
