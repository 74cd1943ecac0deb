//! # FNV Hash Implementation (arbitrary length)
//!
//! This module provides the FNV (Fowler–Noll–Vo) hash algorithm, variants `FNV-1` and `FNV-1a`,
//! at **any** digest length from 16 to 1024 bits inclusive. FNV only defines constants for the
//! canonical sizes 32, 64, 128, 256, 512 and 1024 bits, so a request for another length is hashed
//! at the smallest canonical size that covers it and then XOR-folded down to the exact width, as
//! described in the FNV IETF draft (`draft-eastlake-fnv`, section 3).
//!
//! **Note**: FNV is not cryptographically secure. Never rely on it for collision resistance
//! against adversarial input; use a modern cryptographic hash (e.g. SHA-2 or BLAKE3) for that.
//!
//! ## Key Features
//! - **Any length** in `[16, 1024]` bits, for both `FNV-1` and `FNV-1a`.
//! - **Exact** big-integer arithmetic via `num-bigint`; reduction modulo `2^size` after every multiply.
//! - **Builder** pattern to configure the variant and length once and reuse the resulting [`Fnv`].
//! - **Byte encoding** compatible with signed big-endian integer serialization: the output carries
//!   a leading zero byte whenever its top bit lands on a byte boundary (see [`encode_signed_be`]).
//!
//! ```
//! use fnv_fold::hashing::fnv::{fnv1a, FnvBuilder, FnvVariant};
//!
//! let digest = fnv1a(b"asdfasdfasdfasdf", 32).unwrap();
//! assert_eq!(digest, vec![0x00, 0xf4, 0xa8, 0x09, 0x6d]);
//!
//! let hasher = FnvBuilder::new().variant(FnvVariant::Fnv1a).bits(19).build().unwrap();
//! assert_eq!(hasher.hash(b"asdfasdfasdfasdf"), vec![0x17, 0xf8]);
//! ```

use std::fmt;
use std::sync::LazyLock;

use log::trace;
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{Error, Result};

/// Smallest supported digest length, in bits.
pub const MIN_LENGTH_BITS: usize = 16;
/// Largest supported digest length, in bits.
pub const MAX_LENGTH_BITS: usize = 1024;

// Published FNV primes and offset bases, big-endian hex.
const FNV32_PRIME: &str = "01000193";
const FNV32_OFFSET_BASIS: &str = "811c9dc5";

const FNV64_PRIME: &str = "00000100000001b3";
const FNV64_OFFSET_BASIS: &str = "cbf29ce484222325";

const FNV128_PRIME: &str = "0000000001000000000000000000013b";
const FNV128_OFFSET_BASIS: &str = "6c62272e07bb014262b821756295c58d";

const FNV256_PRIME: &str = "0000000000000000000001000000000000000000000000000000000000000163";
const FNV256_OFFSET_BASIS: &str = "dd268dbcaac550362d98c384c4e576ccc8b1536847b6bbb31023b4c8caee0535";

const FNV512_PRIME: &str = concat!(
    "0000000000000000000000000000000000000000010000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000157",
);
const FNV512_OFFSET_BASIS: &str = concat!(
    "b86db0b1171f4416dca1e50f309990acac87d059c90000000000000000000d21",
    "e948f68a34c192f62ea79bc942dbe7ce182036415f56e34bac982aac4afe9fd9",
);

const FNV1024_PRIME: &str = concat!(
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000001000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000018d",
);
const FNV1024_OFFSET_BASIS: &str = concat!(
    "0000000000000000005f7a76758ecc4d32e56d5a591028b74b29fc4223fdada1",
    "6c3bf34eda3674da9a21d9000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000004c6d7",
    "eb6e73802734510a555f256cc005ae556bde8cc9c6a93b21aff4b16c71ee90b3",
);

/// Which FNV variant: FNV-1 or FNV-1a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FnvVariant {
    /// FNV-1: multiply by the prime, then XOR in the byte.
    Fnv1,
    /// FNV-1a: XOR in the byte, then multiply by the prime.
    Fnv1a,
}

impl FnvVariant {
    /// Returns `true` when each byte is mixed into the digest before the multiply (FNV-1a).
    pub fn mix_before_multiply(self) -> bool {
        matches!(self, FnvVariant::Fnv1a)
    }
}

impl fmt::Display for FnvVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FnvVariant::Fnv1 => f.write_str("FNV-1"),
            FnvVariant::Fnv1a => f.write_str("FNV-1a"),
        }
    }
}

/// The bit widths for which FNV publishes a prime and offset basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalSize {
    Bits32,
    Bits64,
    Bits128,
    Bits256,
    Bits512,
    Bits1024,
}

impl CanonicalSize {
    /// All canonical sizes, smallest first.
    pub const ALL: [CanonicalSize; 6] = [
        CanonicalSize::Bits32,
        CanonicalSize::Bits64,
        CanonicalSize::Bits128,
        CanonicalSize::Bits256,
        CanonicalSize::Bits512,
        CanonicalSize::Bits1024,
    ];

    /// Width in bits.
    pub fn bits(self) -> usize {
        match self {
            CanonicalSize::Bits32 => 32,
            CanonicalSize::Bits64 => 64,
            CanonicalSize::Bits128 => 128,
            CanonicalSize::Bits256 => 256,
            CanonicalSize::Bits512 => 512,
            CanonicalSize::Bits1024 => 1024,
        }
    }

    /// The smallest canonical size that is at least `length_bits` wide, if any.
    /// Does not enforce the lower bound; see [`select`].
    pub fn covering(length_bits: usize) -> Option<CanonicalSize> {
        Self::ALL.into_iter().find(|size| size.bits() >= length_bits)
    }

    /// The constants for this size.
    pub fn params(self) -> &'static FnvParams {
        &FNV_PARAMS[self as usize]
    }
}

/// Basis, prime and modulus for one canonical size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnvParams {
    /// The canonical size these constants belong to.
    pub size: CanonicalSize,
    /// Initial digest value (the FNV offset basis).
    pub basis: BigUint,
    /// The FNV prime multiplier.
    pub prime: BigUint,
    /// `2^size`; all arithmetic is reduced modulo this value.
    pub modulus: BigUint,
}

impl FnvParams {
    fn from_hex(size: CanonicalSize, basis: &str, prime: &str) -> Self {
        Self {
            size,
            basis: parse_hex(basis),
            prime: parse_hex(prime),
            modulus: BigUint::one() << size.bits(),
        }
    }
}

fn parse_hex(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("FNV constants are valid hex literals")
}

/// Process-wide constant table, indexed by `CanonicalSize as usize`.
static FNV_PARAMS: LazyLock<[FnvParams; 6]> = LazyLock::new(|| {
    [
        FnvParams::from_hex(CanonicalSize::Bits32, FNV32_OFFSET_BASIS, FNV32_PRIME),
        FnvParams::from_hex(CanonicalSize::Bits64, FNV64_OFFSET_BASIS, FNV64_PRIME),
        FnvParams::from_hex(CanonicalSize::Bits128, FNV128_OFFSET_BASIS, FNV128_PRIME),
        FnvParams::from_hex(CanonicalSize::Bits256, FNV256_OFFSET_BASIS, FNV256_PRIME),
        FnvParams::from_hex(CanonicalSize::Bits512, FNV512_OFFSET_BASIS, FNV512_PRIME),
        FnvParams::from_hex(CanonicalSize::Bits1024, FNV1024_OFFSET_BASIS, FNV1024_PRIME),
    ]
});

/// The outcome of mapping a requested length onto a canonical size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Constants of the selected canonical size.
    pub params: &'static FnvParams,
    /// The requested output length in bits.
    pub length_bits: usize,
    /// Whether the canonical digest must be XOR-folded down to `length_bits`.
    pub fold_needed: bool,
}

impl Selection {
    pub fn canonical_size(&self) -> CanonicalSize {
        self.params.size
    }
}

/// Maps `length_bits` to the smallest canonical size covering it.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLength`] when `length_bits` is outside `[16, 1024]`.
/// Out-of-range lengths are never clamped.
pub fn select(length_bits: usize) -> Result<Selection> {
    if !(MIN_LENGTH_BITS..=MAX_LENGTH_BITS).contains(&length_bits) {
        return Err(Error::UnsupportedLength(length_bits));
    }
    let size = CanonicalSize::covering(length_bits).ok_or(Error::UnsupportedLength(length_bits))?;
    let fold_needed = length_bits < size.bits();
    trace!(
        "fnv: {} bits -> canonical {} bits (fold: {})",
        length_bits,
        size.bits(),
        fold_needed
    );
    Ok(Selection {
        params: size.params(),
        length_bits,
        fold_needed,
    })
}

/// Runs the FNV byte loop starting from `basis`, reducing modulo `modulus` after each multiply.
///
/// The only difference between the variants is whether a byte is XORed in before or after the
/// multiply, controlled by [`FnvVariant::mix_before_multiply`].
pub fn accumulate(
    data: &[u8],
    variant: FnvVariant,
    basis: &BigUint,
    prime: &BigUint,
    modulus: &BigUint,
) -> BigUint {
    let mix_first = variant.mix_before_multiply();
    let mut digest = basis.clone();
    for &b in data {
        // `u8` already holds exactly the low 8 bits of the byte.
        let byte = BigUint::from(b);
        if mix_first {
            digest ^= &byte;
            digest = (&digest * prime) % modulus;
        } else {
            digest = (&digest * prime) % modulus;
            digest ^= &byte;
        }
    }
    digest
}

/// FNV-1 accumulation: `digest = digest * prime mod modulus`, then `digest ^= byte`.
pub fn accumulate_fnv1(
    data: &[u8],
    basis: &BigUint,
    prime: &BigUint,
    modulus: &BigUint,
) -> BigUint {
    accumulate(data, FnvVariant::Fnv1, basis, prime, modulus)
}

/// FNV-1a accumulation: `digest ^= byte`, then `digest = digest * prime mod modulus`.
pub fn accumulate_fnv1a(
    data: &[u8],
    basis: &BigUint,
    prime: &BigUint,
    modulus: &BigUint,
) -> BigUint {
    accumulate(data, FnvVariant::Fnv1a, basis, prime, modulus)
}

/// XOR-folds `digest` down to `target_bits`: `(digest ^ (digest >> target_bits)) & (2^target_bits - 1)`.
///
/// Meant for a `target_bits` strictly below the width the digest was computed at; the result
/// always fits in `target_bits` bits.
pub fn fold(digest: &BigUint, target_bits: usize) -> BigUint {
    let mask = (BigUint::one() << target_bits) - BigUint::one();
    let high = digest >> target_bits;
    (digest ^ &high) & mask
}

/// Serializes a non-negative integer the way a signed big-endian integer encoder would.
///
/// The magnitude is written in the fewest big-endian bytes, and a `0x00` byte is prepended when
/// the first byte has its high bit set, so the value never reads back as negative. Zero encodes
/// as a single `0x00`. The result is always `bits / 8 + 1` bytes long.
pub fn encode_signed_be(value: &BigUint) -> Vec<u8> {
    let mut bytes = value.to_bytes_be();
    if bytes.first().is_some_and(|&b| b & 0x80 != 0) {
        bytes.insert(0, 0);
    }
    bytes
}

fn digest_with(data: &[u8], variant: FnvVariant, selection: &Selection) -> BigUint {
    let params = selection.params;
    let digest = accumulate(data, variant, &params.basis, &params.prime, &params.modulus);
    if selection.fold_needed {
        fold(&digest, selection.length_bits)
    } else {
        digest
    }
}

/// FNV-1 of `data` at `length_bits`, as an integer.
pub fn fnv1_digest(data: &[u8], length_bits: usize) -> Result<BigUint> {
    let selection = select(length_bits)?;
    Ok(digest_with(data, FnvVariant::Fnv1, &selection))
}

/// FNV-1a of `data` at `length_bits`, as an integer.
pub fn fnv1a_digest(data: &[u8], length_bits: usize) -> Result<BigUint> {
    let selection = select(length_bits)?;
    Ok(digest_with(data, FnvVariant::Fnv1a, &selection))
}

/// Computes the FNV-1 hash of `data`, XOR-folded to `length_bits` when that is not a canonical size.
///
/// The bytes are encoded by [`encode_signed_be`], so the result may be one byte longer than
/// `length_bits` strictly needs. Lengths that are not a multiple of 8 leave `8 - length_bits % 8`
/// zero bits at the top of the first byte.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLength`] when `length_bits` is outside `[16, 1024]`.
pub fn fnv1(data: &[u8], length_bits: usize) -> Result<Vec<u8>> {
    fnv1_digest(data, length_bits).map(|digest| encode_signed_be(&digest))
}

/// Computes the FNV-1a hash of `data`, XOR-folded to `length_bits` when that is not a canonical size.
///
/// Same output encoding and errors as [`fnv1`].
pub fn fnv1a(data: &[u8], length_bits: usize) -> Result<Vec<u8>> {
    fnv1a_digest(data, length_bits).map(|digest| encode_signed_be(&digest))
}

/// A builder for a configured [`Fnv`] hasher, letting you pick the variant and output length.
#[derive(Debug, Clone)]
pub struct FnvBuilder {
    variant: FnvVariant,
    bits: usize,
}

impl Default for FnvBuilder {
    fn default() -> Self {
        // default to FNV-1a 64-bit
        Self {
            variant: FnvVariant::Fnv1a,
            bits: 64,
        }
    }
}

impl FnvBuilder {
    /// Create a new builder with default (FNV-1a, 64-bit).
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the variant: FNV-1 or FNV-1a.
    pub fn variant(mut self, variant: FnvVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the output length in bits, from 16 to 1024.
    pub fn bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Validates the length and builds the hasher.
    pub fn build(self) -> Result<Fnv> {
        let selection = select(self.bits)?;
        trace!("fnv: built {} hasher at {} bits", self.variant, self.bits);
        Ok(Fnv {
            variant: self.variant,
            selection,
        })
    }
}

/// An immutable FNV hasher with a fixed variant and output length. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct Fnv {
    variant: FnvVariant,
    selection: Selection,
}

impl Fnv {
    pub fn variant(&self) -> FnvVariant {
        self.variant
    }

    /// Output length in bits.
    pub fn bits(&self) -> usize {
        self.selection.length_bits
    }

    /// The canonical size the digest is computed at before folding.
    pub fn canonical_size(&self) -> CanonicalSize {
        self.selection.canonical_size()
    }

    /// Whether digests are XOR-folded.
    pub fn folds(&self) -> bool {
        self.selection.fold_needed
    }

    /// Hash of `data` as an integer below `2^bits`.
    pub fn digest(&self, data: &[u8]) -> BigUint {
        digest_with(data, self.variant, &self.selection)
    }

    /// Hash of `data`, encoded like [`fnv1`] / [`fnv1a`].
    pub fn hash(&self, data: &[u8]) -> Vec<u8> {
        encode_signed_be(&self.digest(data))
    }
}
