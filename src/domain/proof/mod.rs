use super::digest::Digest;

pub mod codec;
pub mod verify;

/// Position of a proof sibling relative to the running digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Sibling is the left operand: `hash(sibling || current)`.
    Left,
    /// Sibling is the right operand: `hash(current || sibling)`.
    Right,
}

/// One level of a Merkle proof. `side` is `None` for proofs generated with
/// sorted pairing, where the verifier re-sorts every pair itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProofStep {
    pub sibling: Digest,
    pub side: Option<Side>,
}

impl ProofStep {
    pub fn new(sibling: Digest, side: Option<Side>) -> Self {
        Self { sibling, side }
    }

    pub fn sorted(sibling: Digest) -> Self {
        Self::new(sibling, None)
    }

    pub fn left(sibling: Digest) -> Self {
        Self::new(sibling, Some(Side::Left))
    }

    pub fn right(sibling: Digest) -> Self {
        Self::new(sibling, Some(Side::Right))
    }
}

/// Sibling path from a leaf up to the root, leaf-adjacent step first.
///
/// Proofs are plain data; they do not borrow from the tree that produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<ProofStep> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Return the sibling hashes only.
    pub fn proof_hashes(&self) -> Vec<&Digest> {
        self.steps.iter().map(|step| &step.sibling).collect()
    }

    pub fn proof_hashes_hex(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| step.sibling.to_prefixed_hex())
            .collect()
    }
}

impl From<Vec<ProofStep>> for Proof {
    fn from(steps: Vec<ProofStep>) -> Self {
        Self::new(steps)
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a ProofStep;
    type IntoIter = std::slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
