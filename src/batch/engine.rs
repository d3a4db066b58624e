//! Epoch Engine Module
//! 
//! This module is responsible for sealing epochs from candidate transactions.
//! Each epoch is assigned a unique sequential number and timestamp.

use crate::{
    scheduler::Scheduler,
    validation::{EcdsaVerifier, SignatureVerifier, TransactionValidator},
    registry::UnspentOutputRegistry,
    EpochReport, Transaction,
};
use tracing::info;

/// Epoch sealing engine
/// 
/// Owns the validator (and through it the registry) and a scheduler.
/// Maintains a sequential epoch counter.
pub struct EpochEngine<V = EcdsaVerifier> {
    validator: TransactionValidator<V>,
    scheduler: Scheduler,
    /// Next epoch number to assign (starts at 1, increments for each epoch)
    next_epoch: u64,
}

impl<V: SignatureVerifier> EpochEngine<V> {
    /// Creates a new epoch engine
    /// 
    /// # Arguments
    /// * `validator` - Validator holding the current spendable state
    /// * `scheduler` - Scheduler deciding the processing order within an epoch
    pub fn new(validator: TransactionValidator<V>, scheduler: Scheduler) -> Self {
        Self {
            validator,
            scheduler,
            next_epoch: 1,
        }
    }

    pub fn registry(&self) -> &UnspentOutputRegistry {
        self.validator.registry()
    }

    pub fn validator(&self) -> &TransactionValidator<V> {
        &self.validator
    }

    /// Number the next sealed epoch will carry
    pub fn next_epoch(&self) -> u64 {
        self.next_epoch
    }

    /// Seal an epoch from its candidates
    /// 
    /// Orders the candidates with the scheduler, then accepts a mutually
    /// consistent subset, updating the registry.
    /// 
    /// # Returns
    /// An `EpochReport` listing the accepted transactions in processing order
    pub fn seal_epoch(&mut self, candidates: Vec<Transaction>) -> EpochReport {
        let submitted = candidates.len();
        let ordered = self.scheduler.schedule(candidates);
        let accepted = self.validator.accept_batch(ordered);

        let report = EpochReport {
            epoch: self.next_epoch,
            submitted,
            accepted,
            utxo_count: self.validator.registry().len(),
            timestamp: chrono::Utc::now().timestamp() as u64,
        };

        info!(
            "Epoch #{} sealed ({} policy): {} accepted, {} rejected",
            report.epoch,
            self.scheduler.policy_name(),
            report.accepted.len(),
            report.rejected()
        );

        // Increment for next epoch
        self.next_epoch += 1;
        report
    }
}
