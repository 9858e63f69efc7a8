//! Flat byte encoding of proofs for display and transport.
//!
//! Each step is `1 + digest_len` bytes:
//!   * byte 0 => side flag (`0x00` sibling right, `0x01` sibling left, `0x02` unsided)
//!   * bytes 1.. => the sibling digest

use super::{Proof, ProofStep, Side};
use crate::domain::digest::Digest;
use crate::error::{MalformedProof, MerkleResult};

const SIDE_RIGHT: u8 = 0x00;
const SIDE_LEFT: u8 = 0x01;
const UNSIDED: u8 = 0x02;

/// Encoded size of one step for `digest_len`-byte siblings.
fn step_len(digest_len: usize) -> Result<usize, MalformedProof> {
    if digest_len == 0 {
        return Err(MalformedProof::ZeroDigestLength);
    }
    digest_len
        .checked_add(1)
        .ok_or(MalformedProof::DigestLengthOverflow { digest_len })
}

impl ProofStep {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut combined = Vec::with_capacity(1 + self.sibling.len());
        combined.push(match self.side {
            Some(Side::Right) => SIDE_RIGHT,
            Some(Side::Left) => SIDE_LEFT,
            None => UNSIDED,
        });
        combined.extend_from_slice(&self.sibling);
        combined
    }

    /// Decode a single encoded step. `step` is only used for error reporting.
    pub fn from_bytes(data: &[u8], digest_len: usize, step: usize) -> MerkleResult<Self> {
        let expected = step_len(digest_len)?;
        if data.len() != expected {
            return Err(MalformedProof::StepLength {
                step,
                expected,
                actual: data.len(),
            }
            .into());
        }

        let side = match data[0] {
            SIDE_RIGHT => Some(Side::Right),
            SIDE_LEFT => Some(Side::Left),
            UNSIDED => None,
            flag => return Err(MalformedProof::UnknownSideFlag { step, flag }.into()),
        };
        Ok(Self::new(Digest::from(&data[1..]), side))
    }
}

impl Proof {
    /// Concatenation of every encoded step, leaf-adjacent first.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.steps().iter().flat_map(ProofStep::to_bytes).collect()
    }

    pub fn from_bytes(bytes: &[u8], digest_len: usize) -> MerkleResult<Self> {
        let step_size = step_len(digest_len)?;
        if !bytes.len().is_multiple_of(step_size) {
            let step = bytes.len() / step_size;
            return Err(MalformedProof::StepLength {
                step,
                expected: step_size,
                actual: bytes.len() % step_size,
            }
            .into());
        }

        bytes
            .chunks_exact(step_size)
            .enumerate()
            .map(|(step, chunk)| ProofStep::from_bytes(chunk, digest_len, step))
            .collect::<MerkleResult<Vec<_>>>()
            .map(Proof::new)
    }

    /// Each encoded step as `0x`-prefixed lowercase hex.
    pub fn to_hex_steps(&self) -> Vec<String> {
        self.steps()
            .iter()
            .map(|step| format!("0x{}", hex::encode(step.to_bytes())))
            .collect()
    }

    pub fn from_hex_steps<S: AsRef<str>>(steps: &[S], digest_len: usize) -> MerkleResult<Self> {
        steps
            .iter()
            .enumerate()
            .map(|(step, encoded)| {
                let encoded = encoded.as_ref();
                let trimmed = encoded
                    .strip_prefix("0x")
                    .or_else(|| encoded.strip_prefix("0X"))
                    .unwrap_or(encoded);
                let bytes = hex::decode(trimmed)?;
                ProofStep::from_bytes(&bytes, digest_len, step)
            })
            .collect::<MerkleResult<Vec<_>>>()
            .map(Proof::new)
    }
}
