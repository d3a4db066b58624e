//! Shared Ledger State Module
//! 
//! This module provides a cloneable async handle to the ledger for multi-task callers.
//! All registry access is serialized so an epoch is never observed half-applied.

mod shared;


pub use shared::SharedLedger;
