pub mod digest;
pub mod hash;
pub mod options;
pub(crate) mod pairing;
pub mod proof;
pub mod tree;
