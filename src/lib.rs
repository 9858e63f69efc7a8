#![deny(clippy::all)]

//! Binary Merkle tree commitments over a fixed set of byte items.
//!
//! Build a [`MerkleTree`] once from the items, publish its [`root`](MerkleTree::root),
//! and hand each member a [`Proof`]. Anyone holding only the root can check
//! membership with [`verify`].
//!
//! ```
//! use merkle_whitelist::{verify, MerkleTree, Sha256Hash, TreeOptions};
//!
//! let emails = ["email1@example.com", "email2@example.com", "email3@example.com"];
//! let tree = MerkleTree::build(&emails, Sha256Hash::new(), TreeOptions::sorted())?;
//!
//! let proof = tree.proof(b"email2@example.com")?;
//! let root = tree.root().clone();
//! assert!(verify(b"email2@example.com", &proof, &root, &Sha256Hash::new(), &TreeOptions::sorted())?);
//! # Ok::<(), merkle_whitelist::MerkleError>(())
//! ```

mod domain;
mod error;

pub use domain::digest::Digest;
pub use domain::hash::{
    func::FnHash,
    sha256::{DigestHash, DoubleSha256Hash, Sha256Hash, Sha512Hash},
    HashMethod,
};
pub use domain::options::{TreeOptions, DEFAULT_PARALLEL_THRESHOLD};
pub use domain::proof::{
    verify::{verify, verify_leaf_hash},
    Proof, ProofStep, Side,
};
pub use domain::tree::MerkleTree;
pub use error::{MalformedProof, MerkleError, MerkleResult};
