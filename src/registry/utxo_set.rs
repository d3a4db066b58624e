use crate::{Amount, ClaimableOutput, UtxoId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

/// Registry misuse. These signal a caller bug, never an invalid transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("output not found: {0:?}")]
    NotFound(UtxoId),

    #[error("output already present: {0:?}")]
    DuplicateKey(UtxoId),

    #[error("output {id:?} has negative value {value}")]
    NegativeValue { id: UtxoId, value: Amount },
}

/// One entry of a serialized registry snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisEntry {
    pub id: UtxoId,
    pub output: ClaimableOutput,
}

/// Pool of unspent outputs
///
/// Cloning performs a deep copy: the clone shares nothing with the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnspentOutputRegistry {
    utxos: HashMap<UtxoId, ClaimableOutput>,
}

impl UnspentOutputRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from snapshot entries
    ///
    /// Fails on the first duplicate identifier or negative value.
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = GenesisEntry>,
    {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert(entry.id, entry.output)?;
        }
        Ok(registry)
    }

    /// True iff `id` is currently spendable
    pub fn contains(&self, id: &UtxoId) -> bool {
        self.utxos.contains_key(id)
    }

    pub fn get(&self, id: &UtxoId) -> Option<&ClaimableOutput> {
        self.utxos.get(id)
    }

    /// Look up a spendable output that the caller expects to be present
    pub fn lookup(&self, id: &UtxoId) -> Result<&ClaimableOutput, RegistryError> {
        self.utxos.get(id).ok_or(RegistryError::NotFound(*id))
    }

    /// Add a newly created output
    ///
    /// # Returns
    /// * `Err(DuplicateKey)` if `id` is already spendable
    /// * `Err(NegativeValue)` if the output carries a negative value
    pub fn insert(&mut self, id: UtxoId, output: ClaimableOutput) -> Result<(), RegistryError> {
        if output.value < 0 {
            return Err(RegistryError::NegativeValue { id, value: output.value });
        }
        match self.utxos.entry(id) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateKey(id)),
            Entry::Vacant(slot) => {
                slot.insert(output);
                Ok(())
            }
        }
    }

    /// Consume a spendable output, returning it
    pub fn remove(&mut self, id: &UtxoId) -> Result<ClaimableOutput, RegistryError> {
        self.utxos.remove(id).ok_or(RegistryError::NotFound(*id))
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    /// Iterate over every spendable output, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&UtxoId, &ClaimableOutput)> {
        self.utxos.iter()
    }

    /// Sum of all spendable value
    pub fn total_value(&self) -> i128 {
        self.utxos.values().map(|output| output.value as i128).sum()
    }

    /// Snapshot entries sorted by identifier, suitable for serialization
    pub fn entries(&self) -> Vec<GenesisEntry> {
        let mut entries: Vec<GenesisEntry> = self
            .utxos
            .iter()
            .map(|(id, output)| GenesisEntry { id: *id, output: output.clone() })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::{Address, H256};

    fn id(byte: u8, index: u32) -> UtxoId {
        UtxoId::new(H256::repeat_byte(byte), index)
    }

    fn output(value: Amount) -> ClaimableOutput {
        ClaimableOutput::new(Address::repeat_byte(0xaa), value)
    }

    #[test]
    fn test_insert_then_lookup() {
        let mut registry = UnspentOutputRegistry::new();
        registry.insert(id(1, 0), output(50)).unwrap();

        assert!(registry.contains(&id(1, 0)));
        assert!(!registry.contains(&id(1, 1)));
        assert_eq!(registry.lookup(&id(1, 0)).unwrap().value, 50);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_missing_is_not_found() {
        let registry = UnspentOutputRegistry::new();
        assert_eq!(registry.lookup(&id(9, 0)), Err(RegistryError::NotFound(id(9, 0))));
        assert!(registry.get(&id(9, 0)).is_none());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut registry = UnspentOutputRegistry::new();
        registry.insert(id(1, 0), output(50)).unwrap();

        let err = registry.insert(id(1, 0), output(70)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKey(id(1, 0)));
        // Original entry untouched
        assert_eq!(registry.lookup(&id(1, 0)).unwrap().value, 50);
    }

    #[test]
    fn test_negative_value_rejected() {
        let mut registry = UnspentOutputRegistry::new();
        let err = registry.insert(id(1, 0), output(-1)).unwrap_err();
        assert!(matches!(err, RegistryError::NegativeValue { value: -1, .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut registry = UnspentOutputRegistry::new();
        registry.insert(id(1, 0), output(50)).unwrap();

        assert_eq!(registry.remove(&id(1, 0)).unwrap().value, 50);
        assert!(!registry.contains(&id(1, 0)));
        assert_eq!(registry.remove(&id(1, 0)), Err(RegistryError::NotFound(id(1, 0))));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut source = UnspentOutputRegistry::new();
        source.insert(id(1, 0), output(50)).unwrap();

        let mut copy = source.clone();
        copy.remove(&id(1, 0)).unwrap();
        copy.insert(id(2, 0), output(10)).unwrap();

        assert!(source.contains(&id(1, 0)));
        assert!(!source.contains(&id(2, 0)));
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_from_entries_and_snapshot() {
        let entries = vec![
            GenesisEntry { id: id(2, 0), output: output(20) },
            GenesisEntry { id: id(1, 3), output: output(10) },
        ];
        let registry = UnspentOutputRegistry::from_entries(entries).unwrap();

        assert_eq!(registry.total_value(), 30);
        let snapshot = registry.entries();
        assert_eq!(snapshot[0].id, id(1, 3));
        assert_eq!(snapshot[1].id, id(2, 0));
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let entries = vec![
            GenesisEntry { id: id(1, 0), output: output(20) },
            GenesisEntry { id: id(1, 0), output: output(10) },
        ];
        assert_eq!(
            UnspentOutputRegistry::from_entries(entries),
            Err(RegistryError::DuplicateKey(id(1, 0)))
        );
    }
}
