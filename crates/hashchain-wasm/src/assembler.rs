//! Block assembly controller for JS callers.

use hashchain_core::{
    leading_zero_bytes, Address, BlockDraft, DigestCombiner, Field, HashAlgorithm, Transaction,
};
use wasm_bindgen::prelude::*;

use crate::convert::{parse_algorithm, parse_hash, parse_hashes, parse_optional_hash};
use crate::state::{BlockInfo, TransactionInfo};

fn js_error(e: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Milliseconds since the epoch from the JS clock; wasm32 has no system time.
fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Collects transactions and seals them into blocks.
#[wasm_bindgen]
pub struct BlockAssembler {
    /// Shared digest combiner with the SHA-256 fallback.
    combiner: DigestCombiner,
    /// Algorithm for every transaction and block this assembler produces.
    algorithm: HashAlgorithm,
    /// Transactions waiting for the next seal.
    pending: Vec<Transaction>,
}

#[wasm_bindgen]
impl BlockAssembler {
    /// Create an assembler.
    ///
    /// # Arguments
    /// * `algorithm` - Algorithm name ("SHA-256", "SHA-1", ...). Unrecognized
    ///   names fall back to SHA-256; `undefined` is rejected.
    #[wasm_bindgen(constructor)]
    pub fn new(algorithm: Option<String>) -> Result<BlockAssembler, JsValue> {
        let combiner = DigestCombiner::new();
        let algorithm = combiner.resolve(parse_algorithm(algorithm).map_err(js_error)?);

        Ok(BlockAssembler {
            combiner,
            algorithm,
            pending: Vec::new(),
        })
    }

    /// Hash a transaction and queue it for the next block.
    ///
    /// # Returns
    /// The transaction hash as hex.
    pub fn add_transaction(
        &mut self,
        text: &str,
        sender_hash: &str,
        signature: &str,
    ) -> Result<String, JsValue> {
        let sender_hash = parse_hash(sender_hash).map_err(js_error)?;
        let signature = hex::decode(signature.trim()).map_err(js_error)?;

        let tx = Transaction::builder()
            .text(text)
            .sender_hash(sender_hash)
            .signature(signature)
            .timestamp(now_millis())
            .algorithm(self.algorithm)
            .build(&self.combiner)
            .map_err(js_error)?;

        let hash = tx.hash().to_hex();
        self.pending.push(tx);
        Ok(hash)
    }

    /// Seal every pending transaction into a block.
    ///
    /// # Arguments
    /// * `previous_hash` - Predecessor block hash, or empty/undefined for genesis
    /// * `tries` - Tries counter to hash with
    /// * `data` - Optional annotation, not hashed
    pub fn seal(
        &mut self,
        previous_hash: Option<String>,
        tries: u32,
        data: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let draft = match parse_optional_hash(previous_hash).map_err(js_error)? {
            Some(prev) => BlockDraft::on_top_of(prev),
            None => BlockDraft::genesis(),
        };

        let block = draft
            .transactions(std::mem::take(&mut self.pending))
            .tries(u64::from(tries))
            .timestamp(now_millis())
            .data(data.unwrap_or_default())
            .algorithm(self.algorithm)
            .seal(&self.combiner);

        console_log(&format!(
            "sealed block {} ({} transactions, {} leading zero bytes)",
            block.hash(),
            block.transactions().len(),
            block.leading_zeros_count()
        ));

        BlockInfo::from(&block).to_js()
    }

    /// Pending transactions as plain objects.
    pub fn pending(&self) -> Result<JsValue, JsValue> {
        let infos: Vec<TransactionInfo> = self.pending.iter().map(TransactionInfo::from).collect();
        serde_wasm_bindgen::to_value(&infos)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }

    /// Number of transactions waiting to be sealed.
    #[wasm_bindgen(getter)]
    pub fn pending_count(&self) -> u32 {
        self.pending.len() as u32
    }

    /// Drop all pending transactions.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Identity hash of an address under this assembler's algorithm.
    pub fn address_hash(&self, name: &str, public_key: &str) -> Result<String, JsValue> {
        let public_key = hex::decode(public_key.trim()).map_err(js_error)?;
        let address = Address::derive(name, public_key, &self.combiner, self.algorithm);
        Ok(address.hash().to_hex())
    }

    /// The resolved algorithm name.
    #[wasm_bindgen(getter)]
    pub fn algorithm(&self) -> String {
        self.algorithm.name().to_string()
    }
}

/// Digest hex-encoded fields, concatenated in order.
#[wasm_bindgen]
pub fn digest_hex(fields: Vec<String>, algorithm: Option<String>) -> Result<String, JsValue> {
    let algorithm = parse_algorithm(algorithm).map_err(js_error)?;
    let decoded = fields
        .iter()
        .map(|f| hex::decode(f.trim()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(js_error)?;
    let fields: Vec<Field<'_>> = decoded.iter().map(Field::from).collect();

    Ok(DigestCombiner::new().digest_with(&fields, algorithm).to_hex())
}

/// Merkle root of hex-encoded leaves.
#[wasm_bindgen]
pub fn merkle_root_hex(leaves: Vec<String>, algorithm: Option<String>) -> Result<String, JsValue> {
    let algorithm = parse_algorithm(algorithm).map_err(js_error)?;
    let leaves = parse_hashes(&leaves).map_err(js_error)?;

    Ok(DigestCombiner::new().merkle_root_with(&leaves, algorithm).to_hex())
}

/// Leading zero bytes of a hex-encoded hash.
#[wasm_bindgen]
pub fn leading_zero_bytes_hex(hash: &str) -> Result<u32, JsValue> {
    let hash = parse_hash(hash).map_err(js_error)?;
    Ok(leading_zero_bytes(hash.as_bytes()) as u32)
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
