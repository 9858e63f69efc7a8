use log::{debug, info, trace};
use rayon::prelude::*;
use std::time::Instant;

use super::digest::Digest;
use super::hash::HashMethod;
use super::options::TreeOptions;
use super::proof::{verify::verify, Proof, ProofStep, Side};
use crate::error::{MerkleError, MerkleResult};

mod layers;

/// Static binary Merkle tree over a fixed sequence of items.
///
/// Layers are stored leaves first. Every layer below the root has even length;
/// an odd layer is padded by duplicating its last digest. The tree never
/// changes after construction.
#[derive(Clone, Debug)]
pub struct MerkleTree<H: HashMethod> {
    hash: H,
    options: TreeOptions,
    layers: Vec<Vec<Digest>>,
    leaf_count: usize,
}

impl<H: HashMethod> MerkleTree<H> {
    /// Hash every item into a leaf and build the tree on top of them.
    pub fn build<T>(items: &[T], hash: H, options: TreeOptions) -> MerkleResult<Self>
    where
        T: AsRef<[u8]> + Sync,
    {
        if items.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let start = Instant::now();
        let leaves: Vec<Digest> = items
            .par_iter()
            .map(|item| hash.hash_leaf(item.as_ref()))
            .collect();
        debug!("Hashing {} leaves took {:?}", leaves.len(), start.elapsed());

        Self::from_leaf_hashes(leaves, hash, options)
    }

    /// Build a tree from already-hashed leaves.
    pub fn from_leaf_hashes(leaves: Vec<Digest>, hash: H, options: TreeOptions) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }
        let expected = hash.digest_len();
        if let Some(bad) = leaves.iter().find(|leaf| leaf.len() != expected) {
            return Err(MerkleError::DigestLength {
                expected,
                actual: bad.len(),
            });
        }

        let total_start = Instant::now();
        let leaf_count = leaves.len();
        let layers = layers::build_layers(leaves, &hash, &options);
        info!(
            "Built merkle tree over {} leaves (height {}, sort_pairs {}) in {:?}",
            leaf_count,
            layers.len() - 1,
            options.sort_pairs,
            total_start.elapsed()
        );

        Ok(Self {
            hash,
            options,
            layers,
            leaf_count,
        })
    }

    pub fn root(&self) -> &Digest {
        // `from_leaf_hashes` rejects empty input, so the top layer holds exactly one digest.
        &self.layers[self.layers.len() - 1][0]
    }

    pub fn root_hex(&self) -> String {
        self.root().to_prefixed_hex()
    }

    /// Leaf digests in input order, without padding.
    pub fn leaves(&self) -> &[Digest] {
        &self.layers[0][..self.leaf_count]
    }

    pub fn leaf(&self, index: usize) -> Option<&Digest> {
        self.leaves().get(index)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// All layers, leaves first, root last.
    pub fn layers(&self) -> &[Vec<Digest>] {
        &self.layers
    }

    /// Number of proof steps for any leaf: `ceil(log2(leaf_count))`.
    pub fn height(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn hasher(&self) -> &H {
        &self.hash
    }

    /// Position of the first leaf equal to `hash(item)`.
    pub fn index_of(&self, item: &[u8]) -> Option<usize> {
        self.index_of_hash(&self.hash.hash_leaf(item))
    }

    pub fn index_of_hash(&self, leaf: &Digest) -> Option<usize> {
        self.leaves().iter().position(|h| h == leaf)
    }

    pub fn contains(&self, item: &[u8]) -> bool {
        self.index_of(item).is_some()
    }

    /// Proof of membership for `item`. With duplicate items the proof is for
    /// the first occurrence.
    pub fn proof(&self, item: &[u8]) -> MerkleResult<Proof> {
        self.proof_for_hash(&self.hash.hash_leaf(item))
    }

    pub fn proof_for_hash(&self, leaf: &Digest) -> MerkleResult<Proof> {
        let index = self.index_of_hash(leaf).ok_or(MerkleError::NotFound)?;
        self.proof_at(index)
    }

    /// Proof for the leaf at `index` in input order.
    pub fn proof_at(&self, index: usize) -> MerkleResult<Proof> {
        if index >= self.leaf_count {
            return Err(MerkleError::IndexOutOfBounds {
                index,
                leaf_count: self.leaf_count,
            });
        }

        let mut steps = Vec::with_capacity(self.height());
        let mut position = index;

        for layer in &self.layers[..self.height()] {
            let sibling = layer[position ^ 1].clone();
            let step = if self.options.sort_pairs {
                ProofStep::sorted(sibling)
            } else if position.is_multiple_of(2) {
                ProofStep::new(sibling, Some(Side::Right))
            } else {
                ProofStep::new(sibling, Some(Side::Left))
            };
            steps.push(step);
            position /= 2;
        }

        trace!("Generated {}-step proof for leaf {}", steps.len(), index);
        Ok(Proof::new(steps))
    }

    /// Verify `proof` for `item` against this tree's root.
    pub fn verify(&self, item: &[u8], proof: &Proof) -> MerkleResult<bool> {
        verify(item, proof, self.root(), &self.hash, &self.options)
    }
}
