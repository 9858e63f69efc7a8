use super::digest::Digest;

pub mod func;
pub mod sha256;

/// A deterministic one-way hash producing fixed-length digests.
///
/// Implementors only provide [`hash`](HashMethod::hash) and the digest length;
/// leaf and node hashing are derived from it. Swapping the method changes the
/// root and every proof.
pub trait HashMethod: Send + Sync {
    /// Length in bytes of every digest returned by `hash`.
    fn digest_len(&self) -> usize;

    fn hash(&self, data: &[u8]) -> Digest;

    /// Hash a leaf's data.
    fn hash_leaf(&self, data: &[u8]) -> Digest {
        self.hash(data)
    }

    /// Hash two child nodes together as `left || right`.
    fn hash_nodes(&self, left: &[u8], right: &[u8]) -> Digest {
        let mut buf = Vec::with_capacity(left.len() + right.len());
        buf.extend_from_slice(left);
        buf.extend_from_slice(right);
        self.hash(&buf)
    }
}

impl<H: HashMethod + ?Sized> HashMethod for &H {
    fn digest_len(&self) -> usize {
        (**self).digest_len()
    }

    fn hash(&self, data: &[u8]) -> Digest {
        (**self).hash(data)
    }

    fn hash_leaf(&self, data: &[u8]) -> Digest {
        (**self).hash_leaf(data)
    }

    fn hash_nodes(&self, left: &[u8], right: &[u8]) -> Digest {
        (**self).hash_nodes(left, right)
    }
}

impl<H: HashMethod + ?Sized> HashMethod for Box<H> {
    fn digest_len(&self) -> usize {
        (**self).digest_len()
    }

    fn hash(&self, data: &[u8]) -> Digest {
        (**self).hash(data)
    }

    fn hash_leaf(&self, data: &[u8]) -> Digest {
        (**self).hash_leaf(data)
    }

    fn hash_nodes(&self, left: &[u8], right: &[u8]) -> Digest {
        (**self).hash_nodes(left, right)
    }
}
