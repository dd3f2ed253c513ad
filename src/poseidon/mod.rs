mod hasher;
pub mod params;

pub use hasher::{FieldHasher, PoseidonHasher};
pub use params::PoseidonParams;

/// Width of the Poseidon state used to hash a pair of field elements.
pub const WIDTH: usize = 3;
