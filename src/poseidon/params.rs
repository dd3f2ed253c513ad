//! Parameters for width 3 Poseidon over the BN256 scalar field, x^5 s-box, 8 full and 57 partial rounds.
//! The round constants and the MDS matrix are the fixed circom table shipped by `light-poseidon`, moved
//! once into the halo2 field representation.

use super::WIDTH;
use crate::merkle_tree::utils::big_uint_to_fp;
use ark_bn254::Fr as ArkFr;
use ark_ff::{BigInteger, PrimeField};
use halo2_proofs::halo2curves::bn256::Fr as Fp;
use light_poseidon::parameters::bn254_x5::get_poseidon_parameters;
use num_bigint::BigUint;
use std::error::Error;

pub(crate) type Mds<F, const T: usize> = [[F; T]; T];

#[derive(Clone, Debug)]
pub struct PoseidonParams {
    pub round_constants: Vec<[Fp; WIDTH]>,
    pub mds: Mds<Fp, WIDTH>,
    pub full_rounds: usize,
    pub partial_rounds: usize,
    pub alpha: u64,
}

impl PoseidonParams {
    /// Loads the circom compatible parameters for a state of `WIDTH` elements.
    pub fn circom() -> Result<Self, Box<dyn Error>> {
        let params = get_poseidon_parameters::<ArkFr>(WIDTH.try_into()?)
            .map_err(|e| format!("poseidon parameters unavailable: {:?}", e))?;

        let full_rounds = params.full_rounds as usize;
        let partial_rounds = params.partial_rounds as usize;
        let rounds = full_rounds + partial_rounds;
        if params.width as usize != WIDTH || params.ark.len() != rounds * WIDTH || params.mds.len() != WIDTH {
            return Err(format!(
                "unexpected poseidon parameters: width {}, {} round constants, {} mds rows",
                params.width,
                params.ark.len(),
                params.mds.len()
            )
            .into());
        }

        let round_constants = params
            .ark
            .chunks(WIDTH)
            .map(|chunk| [ark_to_fp(&chunk[0]), ark_to_fp(&chunk[1]), ark_to_fp(&chunk[2])])
            .collect();

        let mut mds = [[Fp::zero(); WIDTH]; WIDTH];
        for (row, ark_row) in mds.iter_mut().zip(params.mds.iter()) {
            if ark_row.len() != WIDTH {
                return Err(format!("mds row of length {}", ark_row.len()).into());
            }
            for (cell, value) in row.iter_mut().zip(ark_row.iter()) {
                *cell = ark_to_fp(value);
            }
        }

        Ok(PoseidonParams {
            round_constants,
            mds,
            full_rounds,
            partial_rounds,
            alpha: params.alpha as u64,
        })
    }
}

fn ark_to_fp(value: &ArkFr) -> Fp {
    big_uint_to_fp(&BigUint::from_bytes_le(&value.into_bigint().to_bytes_le()))
}

#[cfg(test)]
mod tests {
    use super::PoseidonParams;
    use crate::poseidon::WIDTH;

    #[test]
    fn test_circom_params_shape() {
        let params = PoseidonParams::circom().unwrap();

        assert_eq!(params.full_rounds, 8);
        assert_eq!(params.partial_rounds, 57);
        assert_eq!(params.alpha, 5);
        assert_eq!(params.round_constants.len(), 65);
        assert_eq!(params.mds.len(), WIDTH);
    }
}
