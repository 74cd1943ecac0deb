pub mod fnv;

pub use fnv::{
    accumulate, accumulate_fnv1, accumulate_fnv1a, encode_signed_be, fnv1, fnv1_digest, fnv1a,
    fnv1a_digest, fold, select, CanonicalSize, Fnv, FnvBuilder, FnvParams, FnvVariant, Selection,
    MAX_LENGTH_BITS, MIN_LENGTH_BITS,
};
