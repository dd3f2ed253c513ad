use crate::merkle_tree::MerkleProof;
use crate::poseidon::FieldHasher;
use halo2_proofs::halo2curves::bn256::Fr as Fp;

/// Recomputes the root from `leaf` and the proof path and compares it with `root`.
///
/// Proofs may come from untrusted parties, so a malformed proof (wrong lengths, a path index
/// other than 0 or 1) is reported as a failed verification and never panics.
pub fn verify_proof<H: FieldHasher>(
    hasher: &H,
    depth: usize,
    leaf: Fp,
    proof: &MerkleProof,
    root: Fp,
) -> bool {
    if proof.sibling_hashes.len() != depth || proof.path_indices.len() != depth {
        return false;
    }

    let mut node = leaf;

    for (sibling, position) in proof.sibling_hashes.iter().zip(proof.path_indices.iter()) {
        node = match *position {
            0 => hasher.hash2(node, *sibling),
            1 => hasher.hash2(*sibling, node),
            _ => return false,
        };
    }

    node == root
}
