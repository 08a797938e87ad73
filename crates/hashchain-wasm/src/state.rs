//! Plain data handed back to JavaScript.

use hashchain_core::{Block, Transaction};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A sealed transaction, hex-encoded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInfo {
    /// Transaction hash.
    pub hash: String,
    /// The signed text.
    pub text: String,
    /// Sender address hash.
    pub sender_hash: String,
    /// Signature bytes.
    pub signature: String,
    /// Creation time in milliseconds.
    pub timestamp: f64,
}

impl From<&Transaction> for TransactionInfo {
    fn from(tx: &Transaction) -> Self {
        TransactionInfo {
            hash: tx.hash().to_hex(),
            text: tx.text().to_string(),
            sender_hash: tx.sender_hash().to_hex(),
            signature: hex::encode(tx.signature()),
            timestamp: tx.timestamp() as f64,
        }
    }
}

/// A sealed block, hex-encoded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Block hash.
    pub hash: String,
    /// Predecessor hash, absent for a genesis block.
    pub previous_hash: Option<String>,
    /// Merkle root over the transaction hashes.
    pub merkle_root: String,
    /// Tries counter the hash was computed with.
    pub tries: u32,
    /// Seal time in milliseconds.
    pub timestamp: f64,
    /// Number of leading zero bytes in the hash.
    pub leading_zeros: u32,
    /// Algorithm name.
    pub algorithm: String,
    /// Free-text annotation.
    pub data: String,
    /// Included transactions, in Merkle order.
    pub transactions: Vec<TransactionInfo>,
}

impl BlockInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

impl From<&Block> for BlockInfo {
    fn from(block: &Block) -> Self {
        BlockInfo {
            hash: block.hash().to_hex(),
            previous_hash: block.previous_block_hash().map(|h| h.to_hex()),
            merkle_root: block.merkle_root().to_hex(),
            tries: u32::try_from(block.tries()).unwrap_or(u32::MAX),
            timestamp: block.timestamp() as f64,
            leading_zeros: block.leading_zeros_count() as u32,
            algorithm: block.algorithm().name().to_string(),
            data: block.data().to_string(),
            transactions: block.transactions().iter().map(TransactionInfo::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashchain_core::{BlockDraft, DigestCombiner, Hash};

    #[test]
    fn test_block_info_from_block() {
        let combiner = DigestCombiner::new();
        let tx = Transaction::builder()
            .text("hi")
            .sender_hash(Hash::new(vec![0xaa]))
            .signature(vec![0xbb])
            .timestamp(10)
            .build(&combiner)
            .unwrap();
        let block = BlockDraft::on_top_of(Hash::new(vec![0x01; 32]))
            .transactions(vec![tx])
            .tries(5)
            .timestamp(20)
            .data("memo")
            .seal(&combiner);

        let info = BlockInfo::from(&block);
        assert_eq!(info.hash, block.hash().to_hex());
        assert_eq!(info.previous_hash.as_deref(), Some("01".repeat(32).as_str()));
        assert_eq!(info.tries, 5);
        assert_eq!(info.timestamp, 20.0);
        assert_eq!(info.algorithm, "SHA-256");
        assert_eq!(info.data, "memo");
        assert_eq!(info.transactions.len(), 1);
        assert_eq!(info.transactions[0].sender_hash, "aa");
        assert_eq!(info.transactions[0].signature, "bb");
    }
}
