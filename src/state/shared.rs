use crate::{
    batch::EpochEngine,
    pool::CandidatePool,
    registry::UnspentOutputRegistry,
    validation::{EcdsaVerifier, SignatureVerifier},
    ClaimableOutput, EpochReport, Transaction, UtxoId,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Cloneable handle to the ledger
/// 
/// The engine sits behind one exclusive lock: sealing an epoch holds it for the
/// whole batch, and reads take the same lock.
pub struct SharedLedger<V = EcdsaVerifier> {
    engine: Arc<Mutex<EpochEngine<V>>>,
    pool: Arc<CandidatePool>,
}

impl<V> Clone for SharedLedger<V> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            pool: Arc::clone(&self.pool),
        }
    }
}

impl<V: SignatureVerifier> SharedLedger<V> {
    pub fn new(engine: EpochEngine<V>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            pool: Arc::new(CandidatePool::new()),
        }
    }
    
    /// Queue a candidate for the next epoch
    pub async fn submit(&self, tx: Transaction) {
        debug!("Candidate {:?} queued", tx.hash());
        self.pool.add(tx).await;
    }
    
    /// Number of candidates waiting for the next epoch
    pub async fn pending(&self) -> usize {
        self.pool.len().await
    }
    
    /// Check a transaction against the current state without queueing it
    pub async fn is_valid(&self, tx: &Transaction) -> bool {
        let engine = self.engine.lock().await;
        engine.validator().is_valid(tx)
    }
    
    /// Seal the next epoch from every pending candidate
    pub async fn seal_epoch(&self) -> EpochReport {
        // Take the engine first: candidates submitted while we wait go into this epoch
        let mut engine = self.engine.lock().await;
        let candidates = self.pool.drain().await;
        engine.seal_epoch(candidates)
    }
    
    pub async fn utxo(&self, id: &UtxoId) -> Option<ClaimableOutput> {
        let engine = self.engine.lock().await;
        engine.registry().get(id).cloned()
    }
    
    /// Copy of the current registry
    pub async fn snapshot(&self) -> UnspentOutputRegistry {
        let engine = self.engine.lock().await;
        engine.registry().clone()
    }
}
