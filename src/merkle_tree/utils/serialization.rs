use crate::merkle_tree::utils::{decimal_to_fp, fp_to_decimal};
use crate::merkle_tree::AccumulatorError;
use halo2_proofs::halo2curves::bn256::Fr as Fp;
use serde::{Deserialize, Serialize};

/// Persisted form of an accumulator: `{ "depth": <integer>, "leaves": ["<decimal string>", ...] }`.
/// The zero hashes are not part of it, they are recomputed with the hasher at hand when loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorState {
    pub depth: usize,
    pub leaves: Vec<String>,
}

impl AccumulatorState {
    pub fn new(depth: usize, leaves: &[Fp]) -> Self {
        AccumulatorState {
            depth,
            leaves: leaves.iter().map(fp_to_decimal).collect(),
        }
    }

    pub fn decode_leaves(&self) -> Result<Vec<Fp>, AccumulatorError> {
        self.leaves.iter().map(|leaf| decimal_to_fp(leaf)).collect()
    }
}

/// Serde adapter writing a list of field elements as decimal strings.
pub mod decimal_vec {
    use crate::merkle_tree::utils::{decimal_to_fp, fp_to_decimal};
    use halo2_proofs::halo2curves::bn256::Fr as Fp;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[Fp], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(fp_to_decimal))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Fp>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|value| decimal_to_fp(value).map_err(D::Error::custom))
            .collect()
    }
}
