//! This crate contains the commitment accumulator used by the identity and reputation layer.
//! Commitments are appended to a fixed-depth Merkle tree over the BN256 scalar field, hashed with
//! Poseidon, so that an external zk circuit can prove membership of a commitment against a published root.

/// Poseidon hashing over the BN256 scalar field and the two-input hasher abstraction.
pub mod poseidon;
/// The Merkle accumulator data structure, its proofs and codecs. No zk proof in here.
pub mod merkle_tree;
