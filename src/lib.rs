//! This crate implements the transaction-acceptance core of a simple UTXO ledger.
//! It validates transactions against the pool of unspent outputs and applies
//! each epoch's candidates to that pool in a mutually consistent way.

pub mod types; // Transactions, output identifiers and validation errors.
pub mod registry; // The unspent output registry.
pub mod validation; // Single-transaction validation and batch acceptance.
pub mod scheduler; // Processing order of an epoch's candidates.
pub mod batch; // Epoch sealing.
pub mod pool; // Candidates waiting for the next epoch.
pub mod state; // Shared async handle to the ledger.
pub mod loader; // Genesis and epoch file loading.
pub mod config; // Defines and loads configuration.

#[cfg(test)]
mod test_utils;

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use registry::UnspentOutputRegistry;
pub use validation::TransactionValidator;
