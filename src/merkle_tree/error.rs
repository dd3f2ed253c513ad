use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccumulatorError {
    #[error("The accumulator is full, it holds at most {capacity} leaves")]
    CapacityExceeded { capacity: u64 },

    #[error("The leaf at index {index} does not exist, the accumulator holds {leaf_count} leaves")]
    InvalidIndex { index: usize, leaf_count: usize },

    #[error("The tree depth must be between 1 and {max}, got {depth}")]
    InvalidDepth { depth: usize, max: usize },

    #[error("Invalid leaf encoding: {0}")]
    InvalidLeafEncoding(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
