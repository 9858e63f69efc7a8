use super::digest::Digest;
use super::hash::HashMethod;
use super::proof::Side;

/// Hash two siblings in tree position order. With `sort_pairs` the smaller
/// digest always goes first.
pub(crate) fn combine<H: HashMethod + ?Sized>(
    hash: &H,
    left: &Digest,
    right: &Digest,
    sort_pairs: bool,
) -> Digest {
    if sort_pairs && right < left {
        hash.hash_nodes(right, left)
    } else {
        hash.hash_nodes(left, right)
    }
}

/// Recombine the running digest with a proof sibling. `side` is where the
/// sibling sits; it is ignored when `sort_pairs` is set.
pub(crate) fn combine_with_sibling<H: HashMethod + ?Sized>(
    hash: &H,
    current: &Digest,
    sibling: &Digest,
    side: Side,
    sort_pairs: bool,
) -> Digest {
    if sort_pairs {
        combine(hash, current, sibling, true)
    } else {
        match side {
            Side::Left => hash.hash_nodes(sibling, current),
            Side::Right => hash.hash_nodes(current, sibling),
        }
    }
}
