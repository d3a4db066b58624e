//! Transaction Scheduler Module
//! 
//! Applies the configured ordering policy to an epoch's candidates
//! before they are handed to the validator.

use crate::{scheduler::OrderingPolicy, Transaction};
use tracing::debug;

/// Transaction scheduler
/// 
/// Determines the processing order of candidates within an epoch.
pub struct Scheduler {
    policy: Box<dyn OrderingPolicy>,
}

impl Scheduler {
    /// Creates a new scheduler with the specified policy
    pub fn new(policy: Box<dyn OrderingPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Order candidates for sequential processing
    pub fn schedule(&self, candidates: Vec<Transaction>) -> Vec<Transaction> {
        debug!(
            "Scheduling {} candidates with {} policy",
            candidates.len(),
            self.policy.name()
        );
        self.policy.order_transactions(candidates)
    }
}
