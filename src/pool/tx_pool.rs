//! Candidate Pool Module
//! 
//! This module implements a pool for transactions submitted during an epoch.
//! Candidates are stored in a FIFO queue and drained when the epoch is sealed.

use crate::Transaction;
use std::collections::VecDeque;
use tokio::sync::RwLock;

/// Pool for pending candidate transactions
/// 
/// Candidates are not validated on submission: validity depends on the
/// registry state at the moment the epoch is processed.
#[derive(Default)]
pub struct CandidatePool {
    /// Queue of pending candidates, protected by a read-write lock
    transactions: RwLock<VecDeque<Transaction>>,
}

impl CandidatePool {
    /// Creates a new empty candidate pool
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Add a candidate to the back of the queue
    pub async fn add(&self, tx: Transaction) {
        let mut txs = self.transactions.write().await;
        txs.push_back(tx);
    }
    
    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }
    
    pub async fn is_empty(&self) -> bool {
        self.transactions.read().await.is_empty()
    }
    
    /// Remove and return every pending candidate in submission order
    pub async fn drain(&self) -> Vec<Transaction> {
        let mut txs = self.transactions.write().await;
        txs.drain(..).collect()
    }
}
