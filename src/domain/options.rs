/// Pairs per layer from which node hashing is spread over the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Construction and verification policy. The same value must be used on both
/// sides: a proof generated with `sort_pairs` only verifies with `sort_pairs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeOptions {
    /// Order each sibling pair byte-wise before hashing, so proofs need no
    /// left/right bookkeeping.
    pub sort_pairs: bool,
    /// Minimum number of pairs in a layer before it is reduced in parallel.
    /// Has no effect on the resulting digests.
    pub parallel_threshold: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            sort_pairs: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl TreeOptions {
    pub fn sorted() -> Self {
        Self::default().with_sort_pairs(true)
    }

    pub fn with_sort_pairs(mut self, sort_pairs: bool) -> Self {
        self.sort_pairs = sort_pairs;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold.max(1);
        self
    }
}
