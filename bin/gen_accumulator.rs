use commitment_accumulator::{
    merkle_tree::{
        params::DEFAULT_DEPTH,
        parse_csv_to_commitments,
        utils::{fp_to_decimal, fp_to_hex},
        MerkleAccumulator, MerkleProof,
    },
    poseidon::PoseidonHasher,
};
use serde::Serialize;
use serde_json::to_string_pretty;
use std::{env, error::Error, fs::File, io::Write, path::PathBuf};

const DEFAULT_CSV: &str = "src/merkle_tree/csv/commitments_16.csv";

#[derive(Serialize)]
struct InclusionProofData {
    index: usize,
    leaf: String,
    root: String,
    proof: MerkleProof,
}

/// Usage: gen_accumulator [commitments.csv] [depth] [output directory]
///
/// Builds the accumulator from the csv, prints its root and, when an output directory is given, writes
/// the accumulator state and the inclusion proof of every commitment there.
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let csv_path = args.next().unwrap_or_else(|| DEFAULT_CSV.to_string());
    let depth = match args.next() {
        Some(depth) => depth.parse::<usize>()?,
        None => DEFAULT_DEPTH,
    };
    let out_dir = args.next().map(PathBuf::from);

    let commitments = parse_csv_to_commitments(&csv_path)?;
    let accumulator = MerkleAccumulator::from_leaves(depth, commitments, PoseidonHasher::new())?;
    let root = accumulator.root();

    println!("leaves: {}", accumulator.leaf_count());
    println!("depth:  {}", accumulator.depth());
    println!("root:   {}", fp_to_hex(&root));

    if let Some(out_dir) = out_dir {
        std::fs::create_dir_all(&out_dir)?;

        let mut file = File::create(out_dir.join("accumulator.json"))?;
        file.write_all(accumulator.to_json()?.as_bytes())?;

        let proofs = (0..accumulator.leaf_count())
            .map(|index| -> Result<InclusionProofData, Box<dyn Error>> {
                let proof = accumulator.generate_proof(index)?;
                Ok(InclusionProofData {
                    index,
                    leaf: fp_to_decimal(&accumulator.leaves()[index]),
                    root: fp_to_decimal(&root),
                    proof,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut file = File::create(out_dir.join("inclusion_proofs.json"))?;
        file.write_all(to_string_pretty(&proofs)?.as_bytes())?;

        println!("state and proofs written to {}", out_dir.display());
    }

    Ok(())
}
