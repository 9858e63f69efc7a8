use log::trace;
use subtle::ConstantTimeEq;

use super::{Proof, Side};
use crate::domain::digest::Digest;
use crate::domain::hash::HashMethod;
use crate::domain::options::TreeOptions;
use crate::domain::pairing::combine_with_sibling;
use crate::error::{MalformedProof, MerkleResult};

/// Verify that `item` is committed to by `root`.
///
/// Returns `Ok(false)` for any well-formed proof that does not lead to `root`.
/// Errors only with [`MalformedProof`](crate::error::MerkleError::MalformedProof)
/// when the proof or root cannot be a proof for this hash method at all.
pub fn verify<H: HashMethod + ?Sized>(
    item: &[u8],
    proof: &Proof,
    root: &Digest,
    hash: &H,
    options: &TreeOptions,
) -> MerkleResult<bool> {
    let leaf = hash.hash_leaf(item);
    verify_leaf_hash(&leaf, proof, root, hash, options)
}

/// Same as [`verify`], for a caller that already holds the leaf digest.
pub fn verify_leaf_hash<H: HashMethod + ?Sized>(
    leaf: &Digest,
    proof: &Proof,
    root: &Digest,
    hash: &H,
    options: &TreeOptions,
) -> MerkleResult<bool> {
    let expected = hash.digest_len();
    if root.len() != expected {
        return Err(MalformedProof::RootLength {
            expected,
            actual: root.len(),
        }
        .into());
    }

    let computed = proof.compute_root(leaf, hash, options)?;
    let matches: bool = computed.as_bytes().ct_eq(root.as_bytes()).into();
    trace!(
        "verified {}-step proof for leaf {}: {}",
        proof.len(),
        leaf,
        matches
    );
    Ok(matches)
}

impl Proof {
    /// Fold the proof over `leaf` and return the root it commits to.
    ///
    /// Every step is applied; there is no early exit on a mismatch.
    pub fn compute_root<H: HashMethod + ?Sized>(
        &self,
        leaf: &Digest,
        hash: &H,
        options: &TreeOptions,
    ) -> MerkleResult<Digest> {
        self.check_structure(leaf, hash.digest_len(), options.sort_pairs)?;

        let mut current = leaf.clone();
        for step in self.steps() {
            let side = step.side.unwrap_or(Side::Right);
            current = combine_with_sibling(hash, &current, &step.sibling, side, options.sort_pairs);
        }
        Ok(current)
    }

    /// Convenience for [`verify`] with this proof.
    pub fn verify<H: HashMethod + ?Sized>(
        &self,
        item: &[u8],
        root: &Digest,
        hash: &H,
        options: &TreeOptions,
    ) -> MerkleResult<bool> {
        verify(item, self, root, hash, options)
    }

    fn check_structure(
        &self,
        leaf: &Digest,
        digest_len: usize,
        sort_pairs: bool,
    ) -> Result<(), MalformedProof> {
        if leaf.len() != digest_len {
            return Err(MalformedProof::LeafLength {
                expected: digest_len,
                actual: leaf.len(),
            });
        }
        for (step, proof_step) in self.steps().iter().enumerate() {
            if proof_step.sibling.len() != digest_len {
                return Err(MalformedProof::SiblingLength {
                    step,
                    expected: digest_len,
                    actual: proof_step.sibling.len(),
                });
            }
            if !sort_pairs && proof_step.side.is_none() {
                return Err(MalformedProof::MissingSide { step });
            }
        }
        Ok(())
    }
}
