//! Merkle proofs for whitelist membership.
//!
//! A [`Proof`] is the list of sibling hashes met on the way from a leaf to the root.
//! Because every pair is sorted before hashing, a proof carries no left/right bits:
//! the verifier folds `current = H(sort(current, sibling))` and compares with the root.
//!
//! Verification is total. A wrong entry, a tampered sibling or a stale root all
//! produce `false`, never an error.

use std::ops::Deref;

use crate::error::WhitelistError;
use crate::hasher::{format_hash, parse_hash, Hash32, WhitelistHasher};

/// Sibling path from a leaf up to the root, leaf side first.
///
/// Levels where the leaf's ancestor was the unpaired trailing node contribute no
/// element, so the length can be shorter than the tree depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proof(Vec<Hash32>);

impl Proof {
    pub fn new(siblings: Vec<Hash32>) -> Self {
        Proof(siblings)
    }

    pub fn siblings(&self) -> &[Hash32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Hash32> {
        self.0
    }

    /// Serializes the proof as the concatenation of its 32-byte elements,
    /// the layout of an ABI `bytes32[]` payload without its length prefix.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.0.len() * 32);
        for sibling in &self.0 {
            res.extend_from_slice(sibling);
        }
        res
    }

    /// Inverse of [`Proof::to_bytes`].
    ///
    /// # Errors
    /// Returns [`WhitelistError::MalformedProof`] if the length is not a multiple of 32
    pub fn from_bytes(bz: &[u8]) -> Result<Self, WhitelistError> {
        if bz.len() % 32 != 0 {
            return Err(WhitelistError::MalformedProof(bz.len()));
        }
        let siblings = bz
            .chunks_exact(32)
            .map(|chunk| {
                let mut h = [0u8; 32];
                h.copy_from_slice(chunk);
                h
            })
            .collect();
        Ok(Proof(siblings))
    }

    /// `0x`-prefixed hex strings, one per element.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(format_hash).collect()
    }

    pub fn from_hex_strings<S: AsRef<str>>(items: &[S]) -> Result<Self, WhitelistError> {
        let siblings = items
            .iter()
            .map(|s| parse_hash(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Proof(siblings))
    }
}

impl Deref for Proof {
    type Target = [Hash32];

    fn deref(&self) -> &[Hash32] {
        &self.0
    }
}

impl From<Vec<Hash32>> for Proof {
    fn from(siblings: Vec<Hash32>) -> Self {
        Proof(siblings)
    }
}

/// Checks that `leaf` folds up to `root` through `proof`.
pub fn verify_leaf<H: WhitelistHasher>(proof: &[Hash32], leaf: &Hash32, root: &Hash32) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |current, sibling| H::hash_pair(&current, sibling));
    computed == *root
}

/// Checks that `entry` is a member of the whitelist committed to by `root`.
///
/// Needs nothing but the proof, the entry and the root, mirroring the on-chain check.
pub fn verify_proof<H: WhitelistHasher>(proof: &[Hash32], entry: &[u8], root: &Hash32) -> bool {
    verify_leaf::<H>(proof, &H::hash(entry), root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::{Keccak256Hasher, Sha256Hasher};

    #[test]
    fn test_empty_proof() {
        let leaf = Keccak256Hasher::hash(b"solo");
        assert!(verify_proof::<Keccak256Hasher>(&[], b"solo", &leaf));
        assert!(!verify_proof::<Keccak256Hasher>(&[], b"other", &leaf));
    }

    #[test]
    fn test_two_leaves_either_side() {
        let a = Keccak256Hasher::hash(b"a");
        let b = Keccak256Hasher::hash(b"b");
        let root = Keccak256Hasher::hash_pair(&a, &b);
        assert!(verify_proof::<Keccak256Hasher>(&[b], b"a", &root));
        assert!(verify_proof::<Keccak256Hasher>(&[a], b"b", &root));
        // same bytes, different hash function
        assert!(!verify_proof::<Sha256Hasher>(&[b], b"a", &root));
    }

    #[test]
    fn test_bytes_codec() {
        let proof = Proof::new(vec![[1u8; 32], [2u8; 32], [3u8; 32]]);
        let bz = proof.to_bytes();
        assert_eq!(bz.len(), 96);
        assert_eq!(bz[32], 2);
        assert_eq!(Proof::from_bytes(&bz).unwrap(), proof);
        assert_eq!(Proof::from_bytes(&[]).unwrap(), Proof::default());
        assert_eq!(
            Proof::from_bytes(&bz[..95]),
            Err(WhitelistError::MalformedProof(95))
        );
    }

    #[test]
    fn test_hex_codec() {
        let proof = Proof::new(vec![[0xabu8; 32], [0x01u8; 32]]);
        let strs = proof.to_hex_strings();
        assert_eq!(strs[1], format!("0x{}", "01".repeat(32)));
        assert_eq!(Proof::from_hex_strings(&strs).unwrap(), proof);
        assert!(Proof::from_hex_strings(&["0x00"]).is_err());
    }
}
