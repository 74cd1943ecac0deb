pub mod cs;
pub mod error;

pub use cs::hashing;
pub use cs::hashing::fnv::{fnv1, fnv1a, FnvBuilder, FnvVariant};
pub use error::{Error, Result};
