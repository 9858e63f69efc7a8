use itertools::Itertools;
use rayon::prelude::*;

use crate::domain::digest::Digest;
use crate::domain::hash::HashMethod;
use crate::domain::options::TreeOptions;
use crate::domain::pairing::combine;

/// Pad `layer` to even length by repeating its last digest.
pub(crate) fn pad_odd(layer: &mut Vec<Digest>) {
    if !layer.len().is_multiple_of(2) {
        if let Some(last) = layer.last().cloned() {
            layer.push(last);
        }
    }
}

/// Hash each adjacent pair of an even-length layer into the layer above.
///
/// Pairs are independent, so large layers are reduced on the rayon pool.
/// The output is the same either way.
pub(crate) fn reduce_layer<H: HashMethod + ?Sized>(
    layer: &[Digest],
    hash: &H,
    options: &TreeOptions,
) -> Vec<Digest> {
    debug_assert!(layer.len().is_multiple_of(2), "layer must be padded before reduction");

    if layer.len() / 2 >= options.parallel_threshold {
        layer
            .par_chunks_exact(2)
            .map(|pair| combine(hash, &pair[0], &pair[1], options.sort_pairs))
            .collect()
    } else {
        layer
            .iter()
            .tuples()
            .map(|(left, right)| combine(hash, left, right, options.sort_pairs))
            .collect()
    }
}

/// Build every layer from the leaves up. Non-root layers come back padded.
pub(crate) fn build_layers<H: HashMethod + ?Sized>(
    leaves: Vec<Digest>,
    hash: &H,
    options: &TreeOptions,
) -> Vec<Vec<Digest>> {
    let mut layers = vec![leaves];

    while let Some(current) = layers.last_mut() {
        if current.len() <= 1 {
            break;
        }
        pad_odd(current);
        let parent = reduce_layer(current, hash, options);
        layers.push(parent);
    }

    layers
}
