use serde::{Deserialize, Serialize};

/// Membership proof of one entry, hashes as `0x` hex.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProofReport {
    pub entry: String,
    pub leaf: String,
    pub root: String,
    pub proof: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub entry: String,
    pub root: String,
    pub valid: bool,
}

/// Everything needed to publish a whitelist and hand out its proofs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DumpReport {
    pub hasher: String,
    pub encoding: String,
    pub root: String,
    pub leaf_count: usize,
    pub depth: usize,
    pub entries: Vec<ProofReport>,
}
