use super::HashMethod;
use crate::domain::digest::Digest;

/// Adapts a plain function or closure into a [`HashMethod`].
///
/// The closure must be deterministic and always return `digest_len` bytes;
/// tree construction rejects leaves of any other length.
#[derive(Clone)]
pub struct FnHash<F> {
    digest_len: usize,
    func: F,
}

impl<F> FnHash<F>
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    pub fn new(digest_len: usize, func: F) -> Self {
        Self { digest_len, func }
    }
}

impl<F> HashMethod for FnHash<F>
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn digest_len(&self) -> usize {
        self.digest_len
    }

    fn hash(&self, data: &[u8]) -> Digest {
        Digest::new((self.func)(data))
    }
}

impl<F> std::fmt::Debug for FnHash<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHash")
            .field("digest_len", &self.digest_len)
            .finish_non_exhaustive()
    }
}
