//! Transaction Scheduling Module
//! 
//! This module decides the order in which an epoch's candidates are processed,
//! using the Strategy design pattern:
//! - Arrival: Candidates processed in submission order
//! - TransactionId: Candidates processed by ascending content identifier
//! 
//! Order matters only between conflicting candidates: the first one processed wins.

mod scheduler;
mod policies;


pub use scheduler::Scheduler;
pub use policies::{
    OrderingPolicy,
    OrderingPolicyType,
    ArrivalPolicy,
    TransactionIdPolicy,
    create_policy,
};
