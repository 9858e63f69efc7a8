use thiserror::Error;

/// Structural defects in proof data. These are reported as errors rather
/// than as a failed verification so callers can tell corrupt input apart
/// from a non-member.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedProof {
    #[error("step {step}: sibling is {actual} bytes, expected {expected}")]
    SiblingLength {
        step: usize,
        expected: usize,
        actual: usize,
    },

    #[error("root is {actual} bytes, expected {expected}")]
    RootLength { expected: usize, actual: usize },

    #[error("leaf is {actual} bytes, expected {expected}")]
    LeafLength { expected: usize, actual: usize },

    #[error("step {step}: missing sibling side for unsorted pairing")]
    MissingSide { step: usize },

    #[error("step {step}: unknown side flag {flag:#04x}")]
    UnknownSideFlag { step: usize, flag: u8 },

    #[error("encoded step {step} is {actual} bytes, expected {expected}")]
    StepLength {
        step: usize,
        expected: usize,
        actual: usize,
    },

    #[error("digest length must be non-zero")]
    ZeroDigestLength,

    #[error("digest length {digest_len} leaves no room for the side flag")]
    DigestLengthOverflow { digest_len: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum MerkleError {
    #[error("cannot build a merkle tree from zero items")]
    EmptyInput,

    #[error("item is not a leaf of this merkle tree")]
    NotFound,

    #[error("leaf index {index} out of range for {leaf_count} leaves")]
    IndexOutOfBounds { index: usize, leaf_count: usize },

    #[error("hash method produced a {actual}-byte digest, expected {expected}")]
    DigestLength { expected: usize, actual: usize },

    #[error("malformed proof: {0}")]
    MalformedProof(#[from] MalformedProof),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Wrapper result type.
pub type MerkleResult<T> = Result<T, MerkleError>;
