use crate::merkle_tree::{MerkleProof, ZeroHashes};
use halo2_proofs::halo2curves::bn256::Fr as Fp;

/// Collects the sibling and the position of the node at every level, from the leaf up to just below the root.
/// `index` must point to an existing leaf of `nodes[0]`.
pub fn create_proof(index: usize, nodes: &[Vec<Fp>], zero_hashes: &ZeroHashes) -> MerkleProof {
    let depth = zero_hashes.depth();

    let mut sibling_hashes = Vec::with_capacity(depth);
    let mut path_indices = Vec::with_capacity(depth);
    let mut current_index = index;

    for level in 0..depth {
        let position = current_index % 2;
        let sibling_index = current_index ^ 1;

        let sibling = nodes[level]
            .get(sibling_index)
            .copied()
            .unwrap_or(zero_hashes.as_slice()[level]);

        sibling_hashes.push(sibling);
        path_indices.push(position as u8);

        current_index /= 2;
    }

    MerkleProof {
        sibling_hashes,
        path_indices,
    }
}
