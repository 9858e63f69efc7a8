use std::marker::PhantomData;

use sha2::{digest::FixedOutput, Digest as _, Sha256, Sha512};

use super::HashMethod;
use crate::domain::digest::Digest;

/// [`HashMethod`] over any RustCrypto digest, hashing the input once.
pub struct DigestHash<D>(PhantomData<fn() -> D>);

impl<D> DigestHash<D> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D> Default for DigestHash<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHash<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHash<D> {}

impl<D> std::fmt::Debug for DigestHash<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigestHash")
            .field(&std::any::type_name::<D>())
            .finish()
    }
}

impl<D: sha2::Digest> HashMethod for DigestHash<D> {
    fn digest_len(&self) -> usize {
        <D as sha2::Digest>::output_size()
    }

    fn hash(&self, data: &[u8]) -> Digest {
        Digest::new(D::digest(data).to_vec())
    }

    fn hash_nodes(&self, left: &[u8], right: &[u8]) -> Digest {
        let mut hasher = D::new();
        hasher.update(left);
        hasher.update(right);
        Digest::new(hasher.finalize().to_vec())
    }
}

pub type Sha256Hash = DigestHash<Sha256>;
pub type Sha512Hash = DigestHash<Sha512>;

/// `SHA256(SHA256(data))`, for trees whose leaves follow bitcoin's double hashing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleSha256Hash;

impl HashMethod for DoubleSha256Hash {
    fn digest_len(&self) -> usize {
        32
    }

    fn hash(&self, data: &[u8]) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let once = hasher.finalize_fixed();

        let mut hasher = Sha256::new();
        hasher.update(once);
        Digest::new(hasher.finalize_fixed().to_vec())
    }
}
