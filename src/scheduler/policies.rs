//! Ordering Policies Module
//! 
//! Each policy turns an unordered epoch submission into a deterministic processing order.

use crate::Transaction;
use serde::Deserialize;

/// Strategy for ordering an epoch's candidates
pub trait OrderingPolicy: Send + Sync {
    /// Short policy name used in logs
    fn name(&self) -> &'static str;

    /// Reorder candidates for processing
    fn order_transactions(&self, candidates: Vec<Transaction>) -> Vec<Transaction>;
}

/// Selects a policy from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum OrderingPolicyType {
    #[default]
    Arrival,
    TransactionId,
}

/// Keeps submission order
pub struct ArrivalPolicy;

impl OrderingPolicy for ArrivalPolicy {
    fn name(&self) -> &'static str {
        "Arrival"
    }

    fn order_transactions(&self, candidates: Vec<Transaction>) -> Vec<Transaction> {
        candidates
    }
}

/// Sorts by content identifier, so the outcome does not depend on submission order
pub struct TransactionIdPolicy;

impl OrderingPolicy for TransactionIdPolicy {
    fn name(&self) -> &'static str {
        "TransactionId"
    }

    fn order_transactions(&self, mut candidates: Vec<Transaction>) -> Vec<Transaction> {
        // Stable sort: identical transactions keep their relative order
        candidates.sort_by_cached_key(|tx| tx.hash());
        candidates
    }
}

/// Build the policy named by `policy_type`
pub fn create_policy(policy_type: OrderingPolicyType) -> Box<dyn OrderingPolicy> {
    match policy_type {
        OrderingPolicyType::Arrival => Box::new(ArrivalPolicy),
        OrderingPolicyType::TransactionId => Box::new(TransactionIdPolicy),
    }
}
