//! Unspent Output Registry Module
//! 
//! This module holds the authoritative set of currently spendable outputs.
//! Entries are keyed by output identifier (origin transaction hash, output index).

mod utxo_set;
pub use utxo_set::{GenesisEntry, RegistryError, UnspentOutputRegistry};
