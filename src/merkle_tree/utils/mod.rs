mod build_tree;
mod create_proof;
mod csv_parser;
mod operation_helpers;
mod proof_verification;
pub mod serialization;

pub use build_tree::build_merkle_tree_from_leaves;
pub use create_proof::create_proof;
pub use csv_parser::{parse_commitment, parse_csv_to_commitments};
pub use operation_helpers::*;
pub use proof_verification::verify_proof;
pub use serialization::AccumulatorState;
