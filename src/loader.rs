//! Snapshot Loading Module
//!
//! Reads the genesis registry and per-epoch candidate lists from JSON files.

use crate::{
    registry::{GenesisEntry, UnspentOutputRegistry},
    Transaction,
};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Load the initial registry from a JSON array of `{ "id": .., "output": .. }` entries
pub fn load_genesis(path: &Path) -> anyhow::Result<UnspentOutputRegistry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading genesis file {}", path.display()))?;
    parse_genesis(&content).with_context(|| format!("parsing genesis file {}", path.display()))
}

pub fn parse_genesis(content: &str) -> anyhow::Result<UnspentOutputRegistry> {
    let entries: Vec<GenesisEntry> = serde_json::from_str(content)?;
    Ok(UnspentOutputRegistry::from_entries(entries)?)
}

/// Load one epoch's candidates from a JSON array of transactions
pub fn load_epoch(path: &Path) -> anyhow::Result<Vec<Transaction>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading epoch file {}", path.display()))?;
    let candidates = serde_json::from_str(&content)
        .with_context(|| format!("parsing epoch file {}", path.display()))?;
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{addr, alice, bob, genesis_id, registry_with, signed_transfer};

    #[test]
    fn test_genesis_round_trips_through_json() {
        let registry = registry_with(&[(1, addr(&alice()), 100), (2, addr(&bob()), 7)]);
        let json = serde_json::to_string(&registry.entries()).unwrap();

        assert_eq!(parse_genesis(&json).unwrap(), registry);
    }

    #[test]
    fn test_genesis_with_duplicate_ids_is_rejected() {
        let registry = registry_with(&[(1, addr(&alice()), 100)]);
        let mut entries = registry.entries();
        entries.push(entries[0].clone());
        let json = serde_json::to_string(&entries).unwrap();

        assert!(parse_genesis(&json).is_err());
    }

    #[test]
    fn test_signed_transaction_survives_serialization() {
        let tx = signed_transfer(&[(genesis_id(1), &alice())], &[(100, addr(&bob()))]);
        let json = serde_json::to_string(&vec![tx.clone()]).unwrap();

        let decoded: Vec<Transaction> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded[0].hash(), tx.hash());
    }

    #[test]
    fn test_missing_epoch_file_is_an_error() {
        assert!(load_epoch(Path::new("/nonexistent/epoch.json")).is_err());
    }
}
