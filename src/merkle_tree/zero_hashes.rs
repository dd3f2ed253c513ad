use crate::poseidon::FieldHasher;
use halo2_proofs::halo2curves::bn256::Fr as Fp;

/// Hashes of empty subtrees, one per level from the leaves (level 0) up to the root (level `depth`).
///
/// `zero_hashes[0]` is the empty leaf, `0`, and `zero_hashes[i] = H(zero_hashes[i - 1], zero_hashes[i - 1])`.
/// They stand in for the missing right siblings so that a sparse tree hashes as if it were full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZeroHashes {
    hashes: Vec<Fp>,
}

impl ZeroHashes {
    pub fn new<H: FieldHasher>(depth: usize, hasher: &H) -> Self {
        let mut hashes = Vec::with_capacity(depth + 1);
        hashes.push(Fp::zero());

        for level in 1..=depth {
            let below = hashes[level - 1];
            hashes.push(hasher.hash2(below, below));
        }

        ZeroHashes { hashes }
    }

    /// Returns the empty subtree hash at `level`, `None` above the root.
    pub fn get(&self, level: usize) -> Option<Fp> {
        self.hashes.get(level).copied()
    }

    /// The root of a tree without any leaf.
    pub fn root(&self) -> Fp {
        self.hashes[self.hashes.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.hashes.len() - 1
    }

    pub fn as_slice(&self) -> &[Fp] {
        &self.hashes
    }
}
