//! The whitelist Merkle tree.
//!
//! The tree is stored level by level. `levels[0]` holds the sorted leaves and the
//! last level holds only the root:
//!
//! ```text
//! level 2:            root
//!                   /      \
//! level 1:      H(l0,l1)    l2        <- l2 has no sibling, promoted unchanged
//!               /    \       |
//! level 0:     l0    l1     l2
//! ```
//!
//! Construction is one-shot. Adding or removing an entry means building a new tree
//! and publishing its new root.

use std::marker::PhantomData;

use log::debug;

use crate::config::WhitelistConfig;
use crate::error::WhitelistError;
use crate::hasher::{format_hash, Hash32, Keccak256Hasher, WhitelistHasher};
use crate::proof::{verify_leaf, verify_proof, Proof};

#[derive(Debug, Clone)]
pub struct MerkleWhitelist<H: WhitelistHasher = Keccak256Hasher> {
    levels: Vec<Vec<Hash32>>,
    _hasher: PhantomData<H>,
}

impl<H: WhitelistHasher> MerkleWhitelist<H> {
    /// Builds the tree over the hashes of `entries`.
    ///
    /// Input order does not matter: leaves are sorted before pairing. Duplicates
    /// are kept as separate leaves.
    ///
    /// # Errors
    /// Returns [`WhitelistError::EmptyWhitelist`] if `entries` is empty
    pub fn new<I, E>(entries: I) -> Result<Self, WhitelistError>
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[u8]>,
    {
        let leaves = entries
            .into_iter()
            .map(|entry| H::hash(entry.as_ref()))
            .collect();
        Self::from_leaves(leaves)
    }

    /// Builds the tree from precomputed leaf hashes.
    pub fn from_leaves(mut leaves: Vec<Hash32>) -> Result<Self, WhitelistError> {
        if leaves.is_empty() {
            return Err(WhitelistError::EmptyWhitelist);
        }
        leaves.sort_unstable();

        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let parents: Vec<Hash32> = level
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => H::hash_pair(a, b),
                    [single] => *single,
                    _ => unreachable!(),
                })
                .collect();
            levels.push(parents);
        }

        let tree = MerkleWhitelist {
            levels,
            _hasher: PhantomData,
        };
        debug!(
            "Built {} whitelist tree: leaves={} depth={} root={}",
            H::ALGO,
            tree.leaf_count(),
            tree.depth(),
            format_hash(&tree.root())
        );
        Ok(tree)
    }

    /// Builds the tree from textual entries, encoded and optionally deduplicated
    /// as `config` says.
    ///
    /// # Errors
    /// - [`WhitelistError::HasherMismatch`] if `config.hash_algo` is not `H`'s algorithm
    /// - any error from [`WhitelistConfig::encode_entries`]
    /// - [`WhitelistError::EmptyWhitelist`] if there are no entries
    pub fn from_config<S: AsRef<str>>(
        config: &WhitelistConfig,
        entries: &[S],
    ) -> Result<Self, WhitelistError> {
        if config.hash_algo != H::ALGO {
            return Err(WhitelistError::HasherMismatch {
                configured: config.hash_algo,
                hasher: H::ALGO,
            });
        }
        Self::new(config.encode_entries(entries)?)
    }

    pub fn root(&self) -> Hash32 {
        // levels is never empty and its last level holds exactly one node
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves. A single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The sorted leaf hashes.
    pub fn leaves(&self) -> &[Hash32] {
        &self.levels[0]
    }

    pub fn contains<E: AsRef<[u8]>>(&self, entry: E) -> bool {
        self.leaf_index(&H::hash(entry.as_ref())).is_some()
    }

    /// Generates the membership proof of `entry`.
    ///
    /// # Errors
    /// Returns [`WhitelistError::EntryNotFound`] if `entry` is not whitelisted
    pub fn proof<E: AsRef<[u8]>>(&self, entry: E) -> Result<Proof, WhitelistError> {
        self.proof_for_leaf(&H::hash(entry.as_ref()))
    }

    /// Generates the proof for an already hashed leaf. With duplicate leaves the
    /// first one is used; all copies verify against the same root.
    pub fn proof_for_leaf(&self, leaf: &Hash32) -> Result<Proof, WhitelistError> {
        let mut idx = self
            .leaf_index(leaf)
            .ok_or_else(|| WhitelistError::EntryNotFound(format_hash(leaf)))?;

        let mut siblings = Vec::with_capacity(self.depth());
        for level in &self.levels[..self.levels.len() - 1] {
            let peer = idx ^ 1;
            if peer < level.len() {
                siblings.push(level[peer]);
            }
            idx /= 2;
        }
        Ok(Proof::new(siblings))
    }

    /// Checks `proof` for `entry` against `root`, without needing a tree.
    pub fn verify<E: AsRef<[u8]>>(proof: &[Hash32], entry: E, root: &Hash32) -> bool {
        verify_proof::<H>(proof, entry.as_ref(), root)
    }

    /// Like [`MerkleWhitelist::verify`] but for an already hashed leaf.
    pub fn verify_leaf(proof: &[Hash32], leaf: &Hash32, root: &Hash32) -> bool {
        verify_leaf::<H>(proof, leaf, root)
    }

    fn leaf_index(&self, leaf: &Hash32) -> Option<usize> {
        let leaves = &self.levels[0];
        let idx = leaves.partition_point(|l| l < leaf);
        (idx < leaves.len() && leaves[idx] == *leaf).then_some(idx)
    }
}
