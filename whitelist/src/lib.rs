//! Merkle whitelist: membership proofs for a published root.
//!
//! # Overview
//! A whitelist (typically a list of EVM addresses) is reduced to a single 32-byte
//! root that is published on-chain. Any member can later prove inclusion with a
//! short list of sibling hashes, and anyone holding only the root can check it.
//!
//! ## Components
//! - [`MerkleWhitelist`]: builds the tree, exposes the root and produces proofs
//! - [`Proof`]: sibling path from a leaf to the root, plus its byte/hex codecs
//! - [`hasher`]: the [`WhitelistHasher`] seam and the Keccak-256 / SHA-256 hashers
//! - [`entry`]: turns textual whitelist entries into entry bytes
//! - [`config`]: options for building a tree from textual entries
//!
//! # Tree shape
//! - Leaves are `H(entry)`, sorted ascending before the tree is built
//! - Parents are `H(min(a, b) || max(a, b))`
//! - An unpaired trailing node is promoted to the next level unchanged
//!
//! Sorting both the leaves and every pair makes the root independent of the input
//! order and lets a verifier fold a proof without left/right bits, which is exactly
//! what OpenZeppelin's `MerkleProof.verify` does on-chain.
//!
//! # Example Usage
//! ```
//! use merkle_whitelist::{Keccak256Hasher, MerkleWhitelist};
//!
//! let entries = [b"alice".to_vec(), b"bob".to_vec(), b"carol".to_vec()];
//! let tree: MerkleWhitelist = MerkleWhitelist::new(&entries).unwrap();
//! let root = tree.root();
//!
//! let proof = tree.proof(b"bob").unwrap();
//! assert!(MerkleWhitelist::<Keccak256Hasher>::verify(&proof, b"bob", &root));
//! assert!(!MerkleWhitelist::<Keccak256Hasher>::verify(&proof, b"mallory", &root));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod hasher;
pub mod proof;
pub mod tree;

pub use config::WhitelistConfig;
pub use entry::LeafEncoding;
pub use error::WhitelistError;
pub use hasher::{HashAlgo, Hash32, Keccak256Hasher, Sha256Hasher, WhitelistHasher};
pub use proof::{verify_leaf, verify_proof, Proof};
pub use tree::MerkleWhitelist;
