use crate::merkle_tree::params::MAX_DEPTH;
use crate::merkle_tree::utils::{
    build_merkle_tree_from_leaves, create_proof, verify_proof, AccumulatorState,
};
use crate::merkle_tree::{AccumulatorError, MerkleProof, ZeroHashes};
use crate::poseidon::{FieldHasher, PoseidonHasher};
use ark_std::{end_timer, start_timer};
use halo2_proofs::halo2curves::bn256::Fr as Fp;
use std::ops::Range;

/// Append-only Merkle tree of fixed depth over commitments.
///
/// Leaves are stored in insertion order, missing leaves are padded with the zero hashes, so a tree of
/// depth `d` behaves as if it held `2^d` leaves. The root and the proofs are recomputed from the
/// leaves on every call and are not cached.
///
/// Mutations take `&mut self`; sharing an accumulator between threads needs an external lock.
#[derive(Clone, Debug)]
pub struct MerkleAccumulator<H: FieldHasher = PoseidonHasher> {
    depth: usize,
    leaves: Vec<Fp>,
    zero_hashes: ZeroHashes,
    hasher: H,
}

impl<H: FieldHasher> MerkleAccumulator<H> {
    /// Creates an empty accumulator and computes its zero hashes.
    pub fn new(depth: usize, hasher: H) -> Result<Self, AccumulatorError> {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(AccumulatorError::InvalidDepth {
                depth,
                max: MAX_DEPTH,
            });
        }

        let zero_hashes = ZeroHashes::new(depth, &hasher);

        Ok(MerkleAccumulator {
            depth,
            leaves: Vec::new(),
            zero_hashes,
            hasher,
        })
    }

    /// Creates an accumulator holding `leaves`, in order.
    pub fn from_leaves(depth: usize, leaves: Vec<Fp>, hasher: H) -> Result<Self, AccumulatorError> {
        let mut accumulator = Self::new(depth, hasher)?;
        accumulator.add_leaves(leaves)?;
        Ok(accumulator)
    }

    /// Appends a commitment and returns its index.
    pub fn add_leaf(&mut self, commitment: Fp) -> Result<usize, AccumulatorError> {
        if self.is_full() {
            return Err(AccumulatorError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.leaves.push(commitment);
        Ok(self.leaves.len() - 1)
    }

    /// Appends all the commitments or none of them, returns the range of their indices.
    pub fn add_leaves<I: IntoIterator<Item = Fp>>(
        &mut self,
        commitments: I,
    ) -> Result<Range<usize>, AccumulatorError> {
        let commitments: Vec<Fp> = commitments.into_iter().collect();
        let start = self.leaves.len();

        if (start + commitments.len()) as u64 > self.capacity() {
            return Err(AccumulatorError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.leaves.extend(commitments);
        Ok(start..self.leaves.len())
    }

    pub fn root(&self) -> Fp {
        if self.leaves.is_empty() {
            return self.zero_hashes.root();
        }

        let nodes = build_merkle_tree_from_leaves(&self.leaves, &self.zero_hashes, &self.hasher);
        nodes[self.depth][0]
    }

    /// Generates the membership proof of the leaf at `index`.
    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, AccumulatorError> {
        if index >= self.leaves.len() {
            return Err(AccumulatorError::InvalidIndex {
                index,
                leaf_count: self.leaves.len(),
            });
        }

        let pf_time = start_timer!(|| format!("generate proof for leaf {}", index));
        let nodes = build_merkle_tree_from_leaves(&self.leaves, &self.zero_hashes, &self.hasher);
        let proof = create_proof(index, &nodes, &self.zero_hashes);
        end_timer!(pf_time);

        Ok(proof)
    }

    /// Checks `proof` for `leaf` against `root` with this accumulator's depth and hasher.
    /// Does not look at the stored leaves, so roots published by other instances can be checked too.
    pub fn verify_proof(&self, leaf: Fp, proof: &MerkleProof, root: Fp) -> bool {
        verify_proof(&self.hasher, self.depth, leaf, proof, root)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn leaf(&self, index: usize) -> Option<Fp> {
        self.leaves.get(index).copied()
    }

    pub fn leaves(&self) -> &[Fp] {
        &self.leaves
    }

    /// Returns the index of the first leaf equal to `commitment`.
    pub fn index_of(&self, commitment: &Fp) -> Option<usize> {
        self.leaves.iter().position(|leaf| leaf == commitment)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn capacity(&self) -> u64 {
        1u64 << self.depth
    }

    pub fn is_full(&self) -> bool {
        self.leaves.len() as u64 >= self.capacity()
    }

    pub fn zero_hashes(&self) -> &ZeroHashes {
        &self.zero_hashes
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Encodes the depth and the leaves as JSON, leaves as decimal strings.
    pub fn to_json(&self) -> Result<String, AccumulatorError> {
        let state = AccumulatorState::new(self.depth, &self.leaves);
        Ok(serde_json::to_string(&state)?)
    }

    /// Rebuilds an accumulator from [`MerkleAccumulator::to_json`] output.
    /// The zero hashes are recomputed with `hasher`.
    pub fn from_json(json: &str, hasher: H) -> Result<Self, AccumulatorError> {
        let pf_time = start_timer!(|| "load accumulator state");

        let state: AccumulatorState = serde_json::from_str(json)?;
        let leaves = state.decode_leaves()?;
        let accumulator = Self::from_leaves(state.depth, leaves, hasher)?;

        end_timer!(pf_time);

        Ok(accumulator)
    }
}
