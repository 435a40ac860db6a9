//! Options for building a whitelist tree from textual entries.
//!
//! # Usage Examples
//! ```
//! use merkle_whitelist::{HashAlgo, LeafEncoding, WhitelistConfig};
//!
//! let mut config = WhitelistConfig::default();
//! config.set_leaf_encoding(LeafEncoding::Utf8);
//! config.set_dedup(true);
//! assert_eq!(config.hash_algo, HashAlgo::Keccak256);
//! ```

use std::collections::HashSet;

use crate::entry::LeafEncoding;
use crate::error::WhitelistError;
use crate::hasher::HashAlgo;

/// Configuration for turning a whitelist file into a tree.
///
/// The defaults (Keccak-256 over raw address bytes, duplicates kept) produce the
/// same root as an EVM contract checking `keccak256(abi.encodePacked(msg.sender))`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhitelistConfig {
    pub hash_algo: HashAlgo,
    pub leaf_encoding: LeafEncoding,
    /// Collapse entries with identical bytes before hashing.
    pub dedup: bool,
}

impl WhitelistConfig {
    pub fn new(hash_algo: HashAlgo, leaf_encoding: LeafEncoding, dedup: bool) -> Self {
        WhitelistConfig {
            hash_algo,
            leaf_encoding,
            dedup,
        }
    }

    pub fn set_hash_algo(&mut self, hash_algo: HashAlgo) {
        self.hash_algo = hash_algo;
    }

    pub fn set_leaf_encoding(&mut self, leaf_encoding: LeafEncoding) {
        self.leaf_encoding = leaf_encoding;
    }

    pub fn set_dedup(&mut self, dedup: bool) {
        self.dedup = dedup;
    }

    /// Encodes every entry with the configured [`LeafEncoding`], dropping repeats
    /// (first occurrence wins) when `dedup` is set.
    pub fn encode_entries<S: AsRef<str>>(
        &self,
        entries: &[S],
    ) -> Result<Vec<Vec<u8>>, WhitelistError> {
        let mut seen = HashSet::new();
        let mut res = Vec::with_capacity(entries.len());
        for entry in entries {
            let bz = self.leaf_encoding.encode(entry.as_ref())?;
            if self.dedup && !seen.insert(bz.clone()) {
                continue;
            }
            res.push(bz);
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_entries_dedup() {
        let entries = [
            "0x00000000000000000000000000000000000000aa",
            "0x00000000000000000000000000000000000000AA",
            "0x00000000000000000000000000000000000000bb",
        ];
        let mut config = WhitelistConfig::default();
        assert_eq!(config.encode_entries(&entries).unwrap().len(), 3);

        config.set_dedup(true);
        let encoded = config.encode_entries(&entries).unwrap();
        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded[0][19], 0xaa);
        assert_eq!(encoded[1][19], 0xbb);
    }

    #[test]
    fn test_encode_entries_error() {
        let config = WhitelistConfig::new(HashAlgo::Sha256, LeafEncoding::Address, false);
        assert!(matches!(
            config.encode_entries(&["0x00000000000000000000000000000000000000aa", "bogus"]),
            Err(WhitelistError::InvalidAddress(_))
        ));
    }
}
