//! Candidate Pool Module
//! 
//! This module holds submitted transactions waiting for the next epoch.

mod tx_pool;

pub use tx_pool::CandidatePool;
