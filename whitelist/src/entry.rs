//! Conversion of textual whitelist entries into entry bytes.
//!
//! Whitelist files list members as text. The leaf of an entry is the hash of its
//! bytes, so the text must be decoded the same way everywhere the leaf is computed.

use std::str::FromStr;

use alloy_primitives::Address;
use strum::{Display, EnumString};

use crate::error::WhitelistError;

/// How a textual entry is turned into the bytes that get hashed into a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeafEncoding {
    /// A 20-byte EVM address in hex. The leaf is `H(address bytes)`, the same value
    /// Solidity computes with `keccak256(abi.encodePacked(addr))`. Hex case is
    /// ignored, so checksummed and lowercase forms are the same member.
    #[default]
    Address,
    /// Arbitrary bytes written as hex, `0x` prefix optional.
    Hex,
    /// The UTF-8 bytes of the text as written.
    Utf8,
}

impl LeafEncoding {
    /// Encodes one textual entry. Surrounding whitespace is ignored for the
    /// `Address` and `Hex` encodings.
    ///
    /// # Errors
    /// - [`WhitelistError::InvalidAddress`] for a malformed address
    /// - [`WhitelistError::InvalidHex`] for malformed hex
    pub fn encode(&self, entry: &str) -> Result<Vec<u8>, WhitelistError> {
        match self {
            LeafEncoding::Address => {
                let trimmed = entry.trim();
                let addr = Address::from_str(trimmed)
                    .map_err(|_| WhitelistError::InvalidAddress(trimmed.to_owned()))?;
                Ok(addr.to_vec())
            }
            LeafEncoding::Hex => {
                let trimmed = entry.trim();
                let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
                hex::decode(digits).map_err(|_| WhitelistError::InvalidHex(trimmed.to_owned()))
            }
            LeafEncoding::Utf8 => Ok(entry.as_bytes().to_vec()),
        }
    }
}
