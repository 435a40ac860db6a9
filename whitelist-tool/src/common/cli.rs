use clap::{Parser, Subcommand};
use merkle_whitelist::{HashAlgo, LeafEncoding, WhitelistConfig};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the root to publish on-chain
    Root {
        /// Whitelist file: a JSON array of strings, or one entry per line
        #[arg(long)]
        input: String,
    },
    /// Print the membership proof of one entry as JSON
    Proof {
        #[arg(long)]
        input: String,

        #[arg(long)]
        entry: String,
    },
    /// Check a proof against a root. Exits with status 1 if it does not hold.
    Verify {
        #[arg(long)]
        root: String,

        #[arg(long)]
        entry: String,

        /// Comma-separated sibling hashes, leaf side first. Empty for a single-entry whitelist.
        #[arg(long, default_value = "", value_delimiter = ',')]
        proof: Vec<String>,
    },
    /// Write the root and every entry's proof as JSON
    Dump {
        #[arg(long)]
        input: String,

        /// Output filename. Prints to stdout when empty.
        #[arg(long, default_value = "")]
        output: String,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(name = "whitelist-tool", about = "Merkle whitelist roots and proofs")]
pub struct WhitelistCli {
    #[command(subcommand)]
    pub command: Command,

    /// Hash function. Valid choices are "keccak256" and "sha256".
    #[arg(long, global = true, default_value = "keccak256")]
    pub hasher: HashAlgo,

    /// How entries are turned into bytes. Valid choices are "address", "hex" and "utf8".
    #[arg(long, global = true, default_value = "address")]
    pub encoding: LeafEncoding,

    /// Collapse duplicate entries before building the tree
    #[arg(long, global = true, default_value_t = false)]
    pub dedup: bool,
}

impl WhitelistCli {
    pub fn config(&self) -> WhitelistConfig {
        WhitelistConfig::new(self.hasher, self.encoding, self.dedup)
    }
}
