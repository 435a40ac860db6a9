use crate::hasher::HashAlgo;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WhitelistError {
    #[error("Whitelist: cannot build a tree from zero entries")]
    EmptyWhitelist,

    #[error("Whitelist: no leaf {0} in the tree")]
    EntryNotFound(String), // hex of the looked-up leaf

    #[error("Whitelist: invalid address {0:?}")]
    InvalidAddress(String),

    #[error("Whitelist: invalid hex {0:?}")]
    InvalidHex(String),

    #[error("Whitelist: proof length {0} is not a multiple of 32 bytes")]
    MalformedProof(usize),

    #[error("Whitelist: config asks for {configured} but the tree hashes with {hasher}")]
    HasherMismatch {
        configured: HashAlgo,
        hasher: HashAlgo,
    },
}
