use crate::merkle_tree::utils::{decimal_to_fp, hex_to_fp, strip_hex_prefix};
use crate::merkle_tree::AccumulatorError;
use ark_std::{end_timer, start_timer};
use halo2_proofs::halo2curves::bn256::Fr as Fp;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvCommitment {
    commitment: String,
}

/// Reads the commitments of a csv file with a `commitment` column, one per row, in insertion order.
/// A commitment is either a decimal integer or `0x` / `0X` prefixed big-endian hex.
pub fn parse_csv_to_commitments<P: AsRef<Path>>(path: P) -> Result<Vec<Fp>, AccumulatorError> {
    let pf_time = start_timer!(|| "parse commitments csv");

    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut commitments = Vec::new();
    for result in rdr.deserialize() {
        let record: CsvCommitment = result?;
        commitments.push(parse_commitment(&record.commitment)?);
    }

    end_timer!(pf_time);

    Ok(commitments)
}

pub fn parse_commitment(commitment: &str) -> Result<Fp, AccumulatorError> {
    if strip_hex_prefix(commitment).is_some() {
        hex_to_fp(commitment)
    } else {
        decimal_to_fp(commitment)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_commitment;
    use halo2_proofs::halo2curves::bn256::Fr as Fp;

    #[test]
    fn test_parse_commitment() {
        assert_eq!(parse_commitment("42").unwrap(), Fp::from(42));
        assert_eq!(parse_commitment("0x2a").unwrap(), Fp::from(42));
        assert_eq!(parse_commitment("0X2A").unwrap(), Fp::from(42));
        assert_eq!(parse_commitment("0xa").unwrap(), Fp::from(10));
        assert!(parse_commitment("+42").is_err());
        assert!(parse_commitment("0xg1").is_err());
    }
}
