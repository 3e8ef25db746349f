/// Address conversion command.
pub mod address;
/// Fixed-width Data conversion command.
pub mod data;
/// Canonical Quantity conversion command.
pub mod quantity;

#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;
