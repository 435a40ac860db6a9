//! Hashing utilities for the whitelist tree.
//!
//! This module provides the hash functions used for:
//! - Leaves (the hash of an entry's bytes)
//! - Internal nodes (the hash of a sorted pair of child hashes)
//! - Hex formatting and parsing of 32-byte hashes
//!
//! The same [`WhitelistHasher`] must be used for construction, proof generation and
//! verification. Trees and proofs are parameterized by the hasher type, so mixing two
//! hash functions is a type error rather than a silently failing proof.

use sha2::{Digest, Sha256};
use strum::{Display, EnumString};

use crate::error::WhitelistError;

/// Type alias for a 32-byte hash value.
/// Used for leaves, internal nodes, roots and proof elements.
pub type Hash32 = [u8; 32];

/// Hash functions a whitelist tree can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HashAlgo {
    /// Keccak-256, as used by Solidity's `keccak256` and OpenZeppelin's `MerkleProof`.
    #[default]
    Keccak256,
    /// SHA-256.
    Sha256,
}

/// A fixed-width hash function for whitelist trees.
///
/// Implementors only provide [`WhitelistHasher::hash`]; the pair hash sorts its
/// inputs so that `hash_pair(a, b) == hash_pair(b, a)`.
pub trait WhitelistHasher {
    /// The algorithm this hasher implements.
    const ALGO: HashAlgo;

    /// Hash arbitrary bytes. Used for leaves.
    fn hash(data: &[u8]) -> Hash32;

    /// Hash two child nodes into their parent.
    ///
    /// The children are ordered with [`sorted_pair`] and their 64-byte
    /// concatenation is hashed.
    fn hash_pair(a: &Hash32, b: &Hash32) -> Hash32 {
        let (lo, hi) = sorted_pair(a, b);
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(lo);
        buf[32..].copy_from_slice(hi);
        Self::hash(&buf)
    }
}

/// Keccak-256 hasher, compatible with EVM verifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl WhitelistHasher for Keccak256Hasher {
    const ALGO: HashAlgo = HashAlgo::Keccak256;

    fn hash(data: &[u8]) -> Hash32 {
        alloy_primitives::keccak256(data).0
    }
}

/// SHA-256 hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl WhitelistHasher for Sha256Hasher {
    const ALGO: HashAlgo = HashAlgo::Sha256;

    fn hash(data: &[u8]) -> Hash32 {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    fn hash_pair(a: &Hash32, b: &Hash32) -> Hash32 {
        let (lo, hi) = sorted_pair(a, b);
        let mut hasher = Sha256::new();
        hasher.update(lo);
        hasher.update(hi);
        hasher.finalize().into()
    }
}

/// Orders two hashes ascending by their bytes.
///
/// # Returns
/// `(smaller, larger)`; equal hashes are returned as given
pub fn sorted_pair<'a>(a: &'a Hash32, b: &'a Hash32) -> (&'a Hash32, &'a Hash32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Formats a hash as a `0x`-prefixed lowercase hex string.
pub fn format_hash(h: &Hash32) -> String {
    format!("0x{}", hex::encode(h))
}

/// Parses a 32-byte hash from hex, with or without the `0x` prefix.
///
/// # Errors
/// Returns [`WhitelistError::InvalidHex`] if the input is not hex or not 32 bytes long
pub fn parse_hash(s: &str) -> Result<Hash32, WhitelistError> {
    let s = s.trim();
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out).map_err(|_| WhitelistError::InvalidHex(s.to_owned()))?;
    Ok(out)
}
