use ethers::types::{Address, H256, Signature};
use ethers::utils::keccak256;

/// Capability that decides whether a proof authorises a spend.
///
/// Implementations must be deterministic and free of side effects.
pub trait SignatureVerifier {
    fn verify(&self, owner: &Address, message: &[u8], proof: &Signature) -> bool;
}

/// secp256k1 recoverable signatures over `keccak256(message)`
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaVerifier;

impl SignatureVerifier for EcdsaVerifier {
    fn verify(&self, owner: &Address, message: &[u8], proof: &Signature) -> bool {
        let digest = H256::from(keccak256(message));
        // Recovering the signer also rejects malformed r/s/v values
        proof.verify(digest, *owner).is_ok()
    }
}
