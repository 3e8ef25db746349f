use rpcval::jsonrpc::{Address, Result};

use crate::cmd::util::{KindArg, emit_json, parse_source};

#[derive(clap::Args)]
pub struct Args {
	#[arg(allow_hyphen_values = true)]
	pub value: String,
	#[arg(long, value_enum, default_value_t = KindArg::Auto)]
	pub kind: KindArg,
	#[arg(long)]
	pub json: bool,
}

/// Convert one literal to a 20-byte address.
pub fn run(args: Args) -> Result<()> {
	let Args { value, kind, json } = args;

	let source = parse_source(&value, kind)?;
	let address = Address::wrap(source)?;
	let hex = address.to_hex_string();

	if json {
		let payload = AddressJson {
			input: value,
			kind: address.as_data().kind().label(),
			hex,
			bytes: address.to_bytes()?,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("{hex}");
	Ok(())
}

#[derive(serde::Serialize)]
struct AddressJson {
	input: String,
	kind: &'static str,
	hex: String,
	bytes: Vec<u8>,
}
