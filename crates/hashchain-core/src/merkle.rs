//! Merkle root reduction over ordered leaf digests.

use tracing::trace;

use crate::algorithm::HashAlgorithm;
use crate::engine::DigestEngine;
use crate::hash::{DigestCombiner, Field, Hash};

/// Fold an ordered list of leaf digests into a single root.
///
/// Each level is scanned left to right and adjacent pairs `(a, b)` become
/// `digest(a || b)`. When a level has an odd number of nodes the last one is
/// paired with itself. A single leaf is its own root.
///
/// An empty list yields the all-zero sentinel, as long as a digest of the
/// resolved algorithm.
///
/// Duplicating the last node makes the root malleable: `[a, b, c]` and
/// `[a, b, c, c]` reduce to the same root, and so do the blocks built on
/// them. Callers that need a unique leaf list must reject repeated trailing
/// leaves themselves.
pub fn compute_merkle_root<E: DigestEngine>(
    combiner: &DigestCombiner<E>,
    leaves: &[Hash],
    algorithm: HashAlgorithm,
) -> Hash {
    let algorithm = combiner.resolve(algorithm);

    if leaves.is_empty() {
        let len = algorithm
            .output_len()
            .unwrap_or_else(|| combiner.digest_with(&[], algorithm).len());
        return Hash::zero(len);
    }

    let mut current_level: Vec<Hash> = leaves.to_vec();
    let mut depth = 0usize;

    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity(current_level.len().div_ceil(2));

        for pair in current_level.chunks(2) {
            let left = &pair[0];
            // Odd level: duplicate the last node
            let right = pair.get(1).unwrap_or(left);
            next_level.push(
                combiner.digest_with(&[Field::from(left), Field::from(right)], algorithm),
            );
        }

        trace!(depth, width = next_level.len(), "merkle level reduced");
        current_level = next_level;
        depth += 1;
    }

    current_level.swap_remove(0)
}
