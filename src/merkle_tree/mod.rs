mod accumulator;
mod error;
pub mod params;
pub mod utils;
mod zero_hashes;

use halo2_proofs::halo2curves::bn256::Fr as Fp;
use serde::{Deserialize, Serialize};

/// Membership proof of a single leaf.
///
/// Both vectors are ordered from the leaf level up to the level just below the root.
/// `path_indices[i] == 1` means the proved node is the right child at level `i`, so its sibling is on the left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    #[serde(with = "utils::serialization::decimal_vec")]
    pub sibling_hashes: Vec<Fp>,
    pub path_indices: Vec<u8>,
}

pub use accumulator::MerkleAccumulator;
pub use error::AccumulatorError;
pub use utils::{
    big_uint_to_fp, bytes_to_fp, fp_to_big_uint, fp_to_bytes, parse_csv_to_commitments,
    verify_proof,
};
pub use zero_hashes::ZeroHashes;
