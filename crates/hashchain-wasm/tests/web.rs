//! Browser-side tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use hashchain_wasm::assembler::{digest_hex, leading_zero_bytes_hex, merkle_root_hex};
use hashchain_wasm::state::BlockInfo;
use hashchain_wasm::BlockAssembler;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn digest_of_hello() {
    let hash = digest_hex(vec![hex::encode("hello")], Some("SHA-256".into())).unwrap();
    assert_eq!(
        hash,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[wasm_bindgen_test]
fn missing_algorithm_is_an_error() {
    assert!(merkle_root_hex(vec!["aa".into(), "bb".into()], None).is_err());
    assert!(BlockAssembler::new(None).is_err());
}

#[wasm_bindgen_test]
fn unknown_algorithm_falls_back() {
    let leaves = vec!["aa".to_string(), "bb".to_string()];
    let unknown = merkle_root_hex(leaves.clone(), Some("whirlpool".into())).unwrap();
    let sha256 = merkle_root_hex(leaves, Some("SHA-256".into())).unwrap();
    assert_eq!(unknown, sha256);
}

#[wasm_bindgen_test]
fn leading_zeros() {
    assert_eq!(leading_zero_bytes_hex("000001").unwrap(), 2);
    assert_eq!(leading_zero_bytes_hex("000000").unwrap(), 3);
}

#[wasm_bindgen_test]
fn assemble_and_chain() {
    let mut assembler = BlockAssembler::new(Some("SHA-256".into())).unwrap();
    let sender = assembler.address_hash("alice", "02aa").unwrap();

    assembler.add_transaction("pay bob 5", &sender, "51").unwrap();
    assert_eq!(assembler.pending_count(), 1);

    let genesis: BlockInfo =
        serde_wasm_bindgen::from_value(assembler.seal(None, 0, None).unwrap()).unwrap();
    assert_eq!(genesis.previous_hash, None);
    assert_eq!(genesis.transactions.len(), 1);
    assert_eq!(assembler.pending_count(), 0);

    let next: BlockInfo = serde_wasm_bindgen::from_value(
        assembler.seal(Some(genesis.hash.clone()), 1, Some("second".into())).unwrap(),
    )
    .unwrap();
    assert_eq!(next.previous_hash.as_deref(), Some(genesis.hash.as_str()));
    assert_eq!(next.data, "second");
}
