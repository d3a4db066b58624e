//! Transaction Validation Module
//! 
//! This module validates ledger transactions against the unspent output registry
//! and applies batches of candidates to it.
//! Checks input existence, signatures, double claims, output values and value conservation.

mod signature;
mod validator;


pub use signature::{EcdsaVerifier, SignatureVerifier};
pub use validator::TransactionValidator;
