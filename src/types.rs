use ethers::types::{Address, H256, Signature};
use ethers::utils::keccak256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monetary value in indivisible base units.
///
/// Signed so that a declared negative output can be represented and rejected.
pub type Amount = i64;

/// Content identifier of a transaction
pub type TxHash = H256;

/// Domain tag mixed into every per-input signable message
const SIGNABLE_TAG: &[u8] = b"utxo-ledger/input";

/// Identifier of one claimable output: the transaction that created it and its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtxoId {
    pub tx_hash: TxHash,
    pub output_index: u32,
}

impl UtxoId {
    pub const fn new(tx_hash: TxHash, output_index: u32) -> Self {
        Self { tx_hash, output_index }
    }

    fn encode_into(&self, data: &mut Vec<u8>) {
        data.extend_from_slice(self.tx_hash.as_bytes());
        data.extend_from_slice(&self.output_index.to_be_bytes());
    }
}

/// Value currently available to be spent by its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimableOutput {
    pub owner: Address,
    pub value: Amount,
}

impl ClaimableOutput {
    pub fn new(owner: Address, value: Amount) -> Self {
        Self { owner, value }
    }
}

/// Transaction input spending a previously created output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Output being claimed
    pub prev_out: UtxoId,
    /// Proof that the owner of `prev_out` authorised this spend.
    /// `None` until the input has been signed.
    pub signature: Option<Signature>,
}

/// Transaction output creating a new claimable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub value: Amount,
    pub owner: Address,
}

/// Ledger transaction: ordered inputs and ordered outputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unsigned input claiming `prev_out`
    pub fn add_input(&mut self, prev_out: UtxoId) {
        self.inputs.push(TxInput { prev_out, signature: None });
    }

    pub fn add_output(&mut self, value: Amount, owner: Address) {
        self.outputs.push(TxOutput { value, owner });
    }

    /// Attach the proof for the input at `index`. Returns false if there is no such input.
    pub fn set_signature(&mut self, index: usize, signature: Signature) -> bool {
        match self.inputs.get_mut(index) {
            Some(input) => {
                input.signature = Some(signature);
                true
            }
            None => false,
        }
    }

    /// Compute the content identifier of the transaction.
    ///
    /// Covers every input reference, every proof and every output, so two
    /// transactions share an identifier only if they are identical.
    pub fn hash(&self) -> TxHash {
        let mut data = Vec::new();
        data.extend_from_slice(&(self.inputs.len() as u32).to_be_bytes());
        for input in &self.inputs {
            input.prev_out.encode_into(&mut data);
            match &input.signature {
                Some(signature) => {
                    data.push(1);
                    data.extend_from_slice(&signature.to_vec());
                }
                None => data.push(0),
            }
        }
        data.extend_from_slice(&(self.outputs.len() as u32).to_be_bytes());
        self.encode_outputs(&mut data);

        H256::from_slice(&keccak256(data))
    }

    /// Bytes the owner of the output claimed by input `index` must sign.
    ///
    /// Excludes every proof and binds the input position, so a proof made for
    /// one input cannot be replayed at another position.
    pub fn signable_content(&self, index: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(
            SIGNABLE_TAG.len() + 4 + self.inputs.len() * 36 + self.outputs.len() * 28,
        );
        data.extend_from_slice(SIGNABLE_TAG);
        data.extend_from_slice(&(index as u32).to_be_bytes());
        for input in &self.inputs {
            input.prev_out.encode_into(&mut data);
        }
        self.encode_outputs(&mut data);
        data
    }

    /// Identifier of the output at `index` once this transaction is accepted
    pub fn output_id(&self, index: u32) -> UtxoId {
        UtxoId::new(self.hash(), index)
    }

    fn encode_outputs(&self, data: &mut Vec<u8>) {
        for output in &self.outputs {
            data.extend_from_slice(&output.value.to_be_bytes());
            data.extend_from_slice(output.owner.as_bytes());
        }
    }
}

/// Reason a transaction was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input {index} claims unknown output {prev_out:?}")]
    MissingInput { index: usize, prev_out: UtxoId },

    #[error("input {index} carries an invalid signature")]
    InvalidSignature { index: usize },

    #[error("output {prev_out:?} is claimed more than once")]
    DuplicateInput { prev_out: UtxoId },

    #[error("output {index} has negative value {value}")]
    NegativeOutput { index: usize, value: Amount },

    #[error("insufficient input value: have {have}, need {need}")]
    InsufficientInput { have: i128, need: i128 },
}

/// Summary of one sealed epoch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochReport {
    pub epoch: u64,
    pub submitted: usize,
    pub accepted: Vec<Transaction>,
    pub utxo_count: usize,
    pub timestamp: u64,
}

impl EpochReport {
    pub fn rejected(&self) -> usize {
        self.submitted - self.accepted.len()
    }

    pub fn accepted_hashes(&self) -> Vec<TxHash> {
        self.accepted.iter().map(Transaction::hash).collect()
    }
}
