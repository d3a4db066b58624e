//! Fixtures shared by the unit tests: well-known keys, a funded genesis and signing helpers.

use crate::{
    registry::UnspentOutputRegistry, validation::SignatureVerifier, Amount, ClaimableOutput,
    Transaction, UtxoId,
};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, H256, Signature};
use ethers::utils::keccak256;

pub const ALICE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const BOB_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
pub const CAROL_KEY: &str = "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";

pub fn wallet(key: &str) -> LocalWallet {
    key.parse().unwrap()
}

pub fn alice() -> LocalWallet {
    wallet(ALICE_KEY)
}

pub fn bob() -> LocalWallet {
    wallet(BOB_KEY)
}

pub fn carol() -> LocalWallet {
    wallet(CAROL_KEY)
}

/// Identifier of a genesis output
pub fn genesis_id(byte: u8) -> UtxoId {
    UtxoId::new(H256::repeat_byte(byte), 0)
}

/// Registry holding one output per `(byte, owner, value)` at `genesis_id(byte)`
pub fn registry_with(outputs: &[(u8, Address, Amount)]) -> UnspentOutputRegistry {
    let mut registry = UnspentOutputRegistry::new();
    for (byte, owner, value) in outputs {
        registry
            .insert(genesis_id(*byte), ClaimableOutput::new(*owner, *value))
            .unwrap();
    }
    registry
}

/// Sign input `index` of `tx` with `wallet`
pub fn sign_input(tx: &mut Transaction, index: usize, wallet: &LocalWallet) {
    let digest = H256::from(keccak256(tx.signable_content(index)));
    let signature = wallet.sign_hash(digest).unwrap();
    assert!(tx.set_signature(index, signature));
}

/// Transaction spending `inputs` (each signed by its paired wallet) into `outputs`
pub fn signed_transfer(
    inputs: &[(UtxoId, &LocalWallet)],
    outputs: &[(Amount, Address)],
) -> Transaction {
    let mut tx = Transaction::new();
    for (prev_out, _) in inputs {
        tx.add_input(*prev_out);
    }
    for (value, owner) in outputs {
        tx.add_output(*value, *owner);
    }
    for (index, (_, wallet)) in inputs.iter().enumerate() {
        sign_input(&mut tx, index, wallet);
    }
    tx
}

/// Verifier with a fixed verdict
pub struct FixedVerifier(pub bool);

impl SignatureVerifier for FixedVerifier {
    fn verify(&self, _owner: &Address, _message: &[u8], _proof: &Signature) -> bool {
        self.0
    }
}

/// Address helper so tests read `addr(&alice())`
pub fn addr(wallet: &LocalWallet) -> Address {
    wallet.address()
}
