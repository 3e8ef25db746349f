//! Public library API for converting json-rpc `Data` and `Quantity` values.

/// Source classification, fixed-width `Data`, canonical `Quantity`, and address helpers.
pub mod jsonrpc;
