// Depth used when none is given, supports 2^20 members
pub const DEFAULT_DEPTH: usize = 20;
// Deepest tree accepted by the accumulator
pub const MAX_DEPTH: usize = 32;
// modulus from bn256 curve impl => https://github.com/privacy-scaling-explorations/halo2curves/blob/main/src/bn256/fr.rs#L38
pub const MODULUS_STR: &str = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
