use crate::merkle_tree::ZeroHashes;
use crate::poseidon::FieldHasher;
use ark_std::{end_timer, start_timer};
use halo2_proofs::halo2curves::bn256::Fr as Fp;
use rayon::prelude::*;

/// Builds every level of the tree, leaves first. Level `l` holds `ceil(n / 2^l)` nodes; a node
/// without a right sibling is paired with the zero hash of its level.
/// Every level is empty when there are no leaves.
pub fn build_merkle_tree_from_leaves<H: FieldHasher>(
    leaves: &[Fp],
    zero_hashes: &ZeroHashes,
    hasher: &H,
) -> Vec<Vec<Fp>> {
    let depth = zero_hashes.depth();
    let mut tree: Vec<Vec<Fp>> = Vec::with_capacity(depth + 1);
    tree.push(leaves.to_vec());

    let pf_time = start_timer!(|| "compute middle levels");

    for level in 0..depth {
        let next = build_middle_level(&tree[level], zero_hashes.as_slice()[level], hasher);
        tree.push(next);
    }

    end_timer!(pf_time);

    tree
}

fn build_middle_level<H: FieldHasher>(previous_level: &[Fp], zero_hash: Fp, hasher: &H) -> Vec<Fp> {
    previous_level
        .par_chunks(2)
        .map(|pair| match pair {
            [left, right] => hasher.hash2(*left, *right),
            [left] => hasher.hash2(*left, zero_hash),
            _ => unreachable!("chunks hold one or two nodes"),
        })
        .collect()
}
