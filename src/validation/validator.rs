use crate::{
    registry::{RegistryError, UnspentOutputRegistry},
    validation::{EcdsaVerifier, SignatureVerifier},
    ClaimableOutput, Transaction, TxHash, UtxoId, ValidationError,
};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

/// Transaction validator
///
/// Owns a private copy of the unspent output registry. Single transactions are
/// checked against it, and accepted batches mutate it.
pub struct TransactionValidator<V = EcdsaVerifier> {
    registry: UnspentOutputRegistry,
    verifier: V,
}

impl TransactionValidator<EcdsaVerifier> {
    /// Creates a validator over a copy of `registry`.
    ///
    /// Later changes to `registry` are not visible to the validator, and vice versa.
    pub fn new(registry: &UnspentOutputRegistry) -> Self {
        Self::with_verifier(registry, EcdsaVerifier)
    }
}

impl<V: SignatureVerifier> TransactionValidator<V> {
    /// Creates a validator that authorises spends with `verifier`
    pub fn with_verifier(registry: &UnspentOutputRegistry, verifier: V) -> Self {
        Self {
            registry: registry.clone(),
            verifier,
        }
    }

    /// Current spendable state
    pub fn registry(&self) -> &UnspentOutputRegistry {
        &self.registry
    }

    /// Give up the validator, keeping its registry
    pub fn into_registry(self) -> UnspentOutputRegistry {
        self.registry
    }

    /// True iff `tx` may be committed against the current registry
    pub fn is_valid(&self, tx: &Transaction) -> bool {
        self.check(tx).is_ok()
    }

    /// Validate a transaction against the current registry
    /// Returns Ok(()) if valid, Err(ValidationError) naming the first rule broken
    pub fn check(&self, tx: &Transaction) -> Result<(), ValidationError> {
        // 1. Every claimed output must exist
        let claimed = self.claimed_outputs(tx)?;

        // 2. No output claimed twice
        check_unique_claims(tx)?;

        // 3. Every input authorised by the owner of the claimed output
        self.verify_signatures(tx, &claimed)?;

        // 4. Non-negative outputs
        check_output_values(tx)?;

        // 5. Value conservation
        check_balance(tx, &claimed)
    }

    /// Process an epoch's candidates and commit a mutually consistent subset.
    ///
    /// Candidates are checked one at a time in the order given, each against the
    /// registry as left by the candidates committed before it. When two candidates
    /// claim the same output, the first one wins and the other fails the existence check.
    ///
    /// # Returns
    /// The accepted transactions in processing order
    pub fn accept_batch(&mut self, candidates: Vec<Transaction>) -> Vec<Transaction> {
        let submitted = candidates.len();
        let mut accepted = Vec::new();
        let mut accepted_ids: HashSet<TxHash> = HashSet::new();

        for tx in candidates {
            let tx_hash = tx.hash();

            if accepted_ids.contains(&tx_hash) {
                debug!("Skipping duplicate of accepted transaction {:?}", tx_hash);
                continue;
            }

            if let Err(e) = self.check(&tx) {
                debug!("Rejecting transaction {:?}: {}", tx_hash, e);
                continue;
            }

            if let Some(id) = self.first_existing_output(&tx, tx_hash) {
                warn!(
                    "Rejecting transaction {:?}: output {:?} is already spendable",
                    tx_hash, id
                );
                continue;
            }

            if let Err(e) = self.commit(&tx, tx_hash) {
                // Unreachable after a successful check, but never accept on failure
                error!("Failed to commit transaction {:?}: {}", tx_hash, e);
                continue;
            }

            accepted_ids.insert(tx_hash);
            accepted.push(tx);
        }

        info!(
            "Accepted {} of {} candidate transactions ({} spendable outputs)",
            accepted.len(),
            submitted,
            self.registry.len()
        );
        accepted
    }

    /// Resolve every input to the output it claims
    fn claimed_outputs<'a>(
        &'a self,
        tx: &Transaction,
    ) -> Result<Vec<&'a ClaimableOutput>, ValidationError> {
        tx.inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                self.registry
                    .get(&input.prev_out)
                    .ok_or(ValidationError::MissingInput {
                        index,
                        prev_out: input.prev_out,
                    })
            })
            .collect()
    }

    fn verify_signatures(
        &self,
        tx: &Transaction,
        claimed: &[&ClaimableOutput],
    ) -> Result<(), ValidationError> {
        for (index, (input, output)) in tx.inputs.iter().zip(claimed).enumerate() {
            let authorised = match &input.signature {
                Some(signature) => {
                    let message = tx.signable_content(index);
                    self.verifier.verify(&output.owner, &message, signature)
                }
                None => false,
            };

            if !authorised {
                warn!("Signature verification failed for input {}", index);
                return Err(ValidationError::InvalidSignature { index });
            }
        }

        Ok(())
    }

    /// First output of `tx` whose identifier is already in the registry, if any
    fn first_existing_output(&self, tx: &Transaction, tx_hash: TxHash) -> Option<UtxoId> {
        (0..tx.outputs.len() as u32)
            .map(|index| UtxoId::new(tx_hash, index))
            .find(|id| self.registry.contains(id))
    }

    /// Consume the claimed outputs, then create the declared ones
    fn commit(&mut self, tx: &Transaction, tx_hash: TxHash) -> Result<(), RegistryError> {
        for input in &tx.inputs {
            self.registry.remove(&input.prev_out)?;
        }

        for (index, output) in tx.outputs.iter().enumerate() {
            let id = UtxoId::new(tx_hash, index as u32);
            self.registry
                .insert(id, ClaimableOutput::new(output.owner, output.value))?;
        }

        debug!(
            "Committed transaction {:?}: {} spent, {} created",
            tx_hash,
            tx.inputs.len(),
            tx.outputs.len()
        );
        Ok(())
    }
}

fn check_unique_claims(tx: &Transaction) -> Result<(), ValidationError> {
    let mut seen: HashSet<UtxoId> = HashSet::with_capacity(tx.inputs.len());
    for input in &tx.inputs {
        if !seen.insert(input.prev_out) {
            return Err(ValidationError::DuplicateInput {
                prev_out: input.prev_out,
            });
        }
    }
    Ok(())
}

fn check_output_values(tx: &Transaction) -> Result<(), ValidationError> {
    match tx.outputs.iter().enumerate().find(|(_, output)| output.value < 0) {
        Some((index, output)) => Err(ValidationError::NegativeOutput {
            index,
            value: output.value,
        }),
        None => Ok(()),
    }
}

fn check_balance(tx: &Transaction, claimed: &[&ClaimableOutput]) -> Result<(), ValidationError> {
    // i128 sums cannot overflow for any realistic number of i64 terms
    let have: i128 = claimed.iter().map(|output| output.value as i128).sum();
    let need: i128 = tx.outputs.iter().map(|output| output.value as i128).sum();

    if have < need {
        return Err(ValidationError::InsufficientInput { have, need });
    }
    Ok(())
}
