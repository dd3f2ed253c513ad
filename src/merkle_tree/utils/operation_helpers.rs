use crate::merkle_tree::params::MODULUS_STR;
use crate::merkle_tree::AccumulatorError;
use halo2_proofs::halo2curves::{bn256::Fr as Fp, group::ff::PrimeField};
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Num;

lazy_static! {
    static ref MODULUS: BigUint =
        BigUint::from_str_radix(MODULUS_STR, 16).expect("modulus constant is valid hex");
}

/// Returns the order of the BN256 scalar field
pub fn modulus() -> &'static BigUint {
    &MODULUS
}

/// Converts a BigUint to a Field Element, reducing it modulo the field order first
pub fn big_uint_to_fp(big_uint: &BigUint) -> Fp {
    let reduced = big_uint % modulus();

    let mut limbs = [0u64; 4];
    for (limb, digit) in limbs.iter_mut().zip(reduced.to_u64_digits()) {
        *limb = digit;
    }

    Fp::from_raw(limbs)
}

/// Converts a Field Element to its canonical integer value
pub fn fp_to_big_uint(fp: &Fp) -> BigUint {
    BigUint::from_bytes_le(fp.to_repr().as_ref())
}

/// Decodes a 32-byte big-endian buffer. Values above the modulus are reduced, not rejected.
pub fn bytes_to_fp(bytes: &[u8; 32]) -> Fp {
    big_uint_to_fp(&BigUint::from_bytes_be(bytes))
}

/// Encodes a Field Element as a 32-byte big-endian buffer
pub fn fp_to_bytes(fp: &Fp) -> [u8; 32] {
    let repr = fp.to_repr();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(repr.as_ref());
    bytes.reverse();
    bytes
}

/// Parses a canonical decimal string: ASCII digits only, no sign, no separators.
pub fn decimal_to_fp(decimal: &str) -> Result<Fp, AccumulatorError> {
    if decimal.is_empty() || !decimal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AccumulatorError::InvalidLeafEncoding(format!(
            "{:?} is not a decimal integer",
            decimal
        )));
    }

    let big_uint = BigUint::from_str_radix(decimal, 10).map_err(|e| {
        AccumulatorError::InvalidLeafEncoding(format!("{:?} is not a decimal integer: {}", decimal, e))
    })?;

    Ok(big_uint_to_fp(&big_uint))
}

pub fn fp_to_decimal(fp: &Fp) -> String {
    fp_to_big_uint(fp).to_str_radix(10)
}

/// Returns the digits after a `0x` or `0X` prefix, `None` when there is no prefix
pub fn strip_hex_prefix(value: &str) -> Option<&str> {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
}

/// Parses big-endian hex, with or without the `0x` prefix. Odd-length digits are left-padded.
pub fn hex_to_fp(hex_str: &str) -> Result<Fp, AccumulatorError> {
    let digits = strip_hex_prefix(hex_str).unwrap_or(hex_str);
    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };

    let bytes = hex::decode(&padded).map_err(|e| {
        AccumulatorError::InvalidLeafEncoding(format!("{:?} is not valid hex: {}", hex_str, e))
    })?;

    Ok(big_uint_to_fp(&BigUint::from_bytes_be(&bytes)))
}

/// `0x` prefixed big-endian hex of the 32-byte encoding
pub fn fp_to_hex(fp: &Fp) -> String {
    format!("0x{}", hex::encode(fp_to_bytes(fp)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo2_proofs::arithmetic::Field;
    use num_bigint::ToBigUint;
    use rand::rngs::OsRng;

    #[test]
    fn test_big_uint_conversion() {
        let big_uint = 3.to_biguint().unwrap();
        let fp = big_uint_to_fp(&big_uint);

        assert_eq!(fp, 3.into());

        let big_uint_over_64 = (18446744073709551616_u128).to_biguint().unwrap();
        let fp_2 = big_uint_to_fp(&big_uint_over_64);

        let fp_3 = fp_2 - fp;
        assert_eq!(fp_3, 18446744073709551613.into());

        assert_eq!(fp_to_big_uint(&fp_2), big_uint_over_64);
    }

    #[test]
    fn test_reduction_modulo_field_order() {
        let modulus = modulus().clone();

        assert_eq!(big_uint_to_fp(&modulus), Fp::zero());
        assert_eq!(big_uint_to_fp(&(modulus.clone() + 5u32)), Fp::from(5));

        let max_bytes = [0xffu8; 32];
        let expected = BigUint::from_bytes_be(&max_bytes) % &modulus;
        assert_eq!(fp_to_big_uint(&bytes_to_fp(&max_bytes)), expected);
    }

    #[test]
    fn test_bytes_round_trip() {
        for _ in 0..16 {
            let fp = Fp::random(OsRng);
            assert_eq!(bytes_to_fp(&fp_to_bytes(&fp)), fp);
        }

        // big-endian: the value 1 lives in the last byte
        let one = fp_to_bytes(&Fp::one());
        assert_eq!(one[31], 1);
        assert!(one[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_decimal_encoding() {
        let fp = Fp::from(1234567890);
        assert_eq!(fp_to_decimal(&fp), "1234567890");
        assert_eq!(decimal_to_fp("1234567890").unwrap(), fp);

        let random = Fp::random(OsRng);
        assert_eq!(decimal_to_fp(&fp_to_decimal(&random)).unwrap(), random);

        // out of range decimals are folded into the field
        let above = (modulus().clone() + 1u32).to_str_radix(10);
        assert_eq!(decimal_to_fp(&above).unwrap(), Fp::one());

        assert!(matches!(
            decimal_to_fp("12ab"),
            Err(AccumulatorError::InvalidLeafEncoding(_))
        ));
        assert!(decimal_to_fp("").is_err());
    }

    #[test]
    fn test_decimal_encoding_is_strict() {
        for text in ["+5", "1_000", " 5", "5 ", "-1", "1e3"] {
            assert!(
                matches!(decimal_to_fp(text), Err(AccumulatorError::InvalidLeafEncoding(_))),
                "{:?} should be rejected",
                text
            );
        }
        assert_eq!(decimal_to_fp("007").unwrap(), Fp::from(7));
    }

    #[test]
    fn test_hex_encoding() {
        let fp = Fp::from(255);
        let hex_str = fp_to_hex(&fp);

        assert_eq!(hex_str.len(), 66);
        assert!(hex_str.ends_with("ff"));
        assert_eq!(hex_to_fp(&hex_str).unwrap(), fp);
        assert_eq!(hex_to_fp("00ff").unwrap(), fp);
        assert!(hex_to_fp("0xzz").is_err());

        // odd length digits and an upper case prefix
        assert_eq!(hex_to_fp("0x5").unwrap(), Fp::from(5));
        assert_eq!(hex_to_fp("0xfff").unwrap(), Fp::from(4095));
        assert_eq!(hex_to_fp("0XFF").unwrap(), fp);
        assert_eq!(strip_hex_prefix("0Xab"), Some("ab"));
        assert_eq!(strip_hex_prefix("12"), None);
    }
}
