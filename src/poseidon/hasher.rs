use super::params::PoseidonParams;
use super::WIDTH;
use ark_std::{end_timer, start_timer};
use halo2_proofs::arithmetic::Field;
use halo2_proofs::halo2curves::bn256::Fr as Fp;
use lazy_static::lazy_static;

lazy_static! {
    static ref CIRCOM_PARAMS: PoseidonParams = {
        let timer = start_timer!(|| "load poseidon parameters");
        let params = PoseidonParams::circom().expect("circom poseidon table covers width 3");
        end_timer!(timer);
        params
    };
}

/// A deterministic two-input hash over the BN256 scalar field.
///
/// The accumulator is generic over this trait so that tests can swap Poseidon for a cheap mock and
/// several accumulators with different hash configurations can live side by side.
pub trait FieldHasher: Sync {
    /// Hashes an ordered pair of field elements. `hash2(a, b)` and `hash2(b, a)` are expected to differ.
    fn hash2(&self, left: Fp, right: Fp) -> Fp;
}

impl<H: FieldHasher + ?Sized> FieldHasher for &H {
    fn hash2(&self, left: Fp, right: Fp) -> Fp {
        (**self).hash2(left, right)
    }
}

/// Poseidon with a state of 3 elements, hashing exactly two field elements the way circomlib's
/// `Poseidon(2)` template does: the state starts as `[0, left, right]` and the output is `state[0]`.
///
/// The parameter table is loaded on the first construction and shared by every instance afterwards.
#[derive(Debug, Clone, Copy)]
pub struct PoseidonHasher {
    params: &'static PoseidonParams,
}

impl PoseidonHasher {
    pub fn new() -> Self {
        PoseidonHasher {
            params: &CIRCOM_PARAMS,
        }
    }

    pub fn params(&self) -> &PoseidonParams {
        self.params
    }

    fn permute(&self, state: &mut [Fp; WIDTH]) {
        let params = self.params;
        let half_full_rounds = params.full_rounds / 2;
        let rounds = params.full_rounds + params.partial_rounds;

        for round in 0..rounds {
            for (element, constant) in state.iter_mut().zip(params.round_constants[round].iter()) {
                *element += constant;
            }

            if round < half_full_rounds || round >= half_full_rounds + params.partial_rounds {
                for element in state.iter_mut() {
                    *element = element.pow_vartime([params.alpha]);
                }
            } else {
                state[0] = state[0].pow_vartime([params.alpha]);
            }

            let mut mixed = [Fp::zero(); WIDTH];
            for (out, row) in mixed.iter_mut().zip(params.mds.iter()) {
                for (coefficient, element) in row.iter().zip(state.iter()) {
                    *out += *coefficient * element;
                }
            }
            *state = mixed;
        }
    }
}

impl Default for PoseidonHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldHasher for PoseidonHasher {
    fn hash2(&self, left: Fp, right: Fp) -> Fp {
        let mut state = [Fp::zero(), left, right];
        self.permute(&mut state);
        state[0]
    }
}
