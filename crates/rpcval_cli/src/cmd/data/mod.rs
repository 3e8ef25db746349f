use rpcval::jsonrpc::{Data, Result};

use crate::cmd::util::{KindArg, emit_json, parse_byte_length, parse_source};

#[derive(clap::Args)]
pub struct Args {
	#[arg(allow_hyphen_values = true)]
	pub value: String,
	#[arg(long, value_enum, default_value_t = KindArg::Auto)]
	pub kind: KindArg,
	#[arg(long = "byte-length", allow_hyphen_values = true)]
	pub byte_length: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Convert one literal to fixed-width Data and print its hex and byte forms.
pub fn run(args: Args) -> Result<()> {
	let Args {
		value,
		kind,
		byte_length,
		json,
	} = args;

	let byte_length = parse_byte_length(byte_length.as_deref())?;
	let source = parse_source(&value, kind)?;
	let data = Data::wrap(source, byte_length)?;
	let hex = data.to_hex_string();
	let bytes = data.to_bytes()?;

	if json {
		let payload = DataJson {
			input: value,
			kind: data.kind().label(),
			byte_length: byte_length.map(|item| item.get()),
			hex,
			bytes,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("kind: {}", data.kind().label());
	match byte_length {
		Some(width) => println!("byte_length: {width}"),
		None => println!("byte_length: natural"),
	}
	println!("hex: {hex}");
	println!("bytes: {bytes:?}");
	Ok(())
}

#[derive(serde::Serialize)]
struct DataJson {
	input: String,
	kind: &'static str,
	byte_length: Option<usize>,
	hex: String,
	bytes: Vec<u8>,
}

#[cfg(test)]
mod tests;
