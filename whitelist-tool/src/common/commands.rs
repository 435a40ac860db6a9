use anyhow::{Context, Result};
use log::info;
use merkle_whitelist::{
    hasher::{format_hash, parse_hash},
    HashAlgo, Keccak256Hasher, MerkleWhitelist, Proof, Sha256Hasher, WhitelistConfig,
    WhitelistHasher,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::cli::{Command, WhitelistCli};
use super::input::load_entries;
use super::report::{DumpReport, ProofReport, VerifyReport};

/// What a command prints on stdout, and whether the process should exit cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

pub fn run(cli: &WhitelistCli) -> Result<CommandOutput> {
    match cli.hasher {
        HashAlgo::Keccak256 => run_with::<Keccak256Hasher>(cli),
        HashAlgo::Sha256 => run_with::<Sha256Hasher>(cli),
    }
}

fn run_with<H: WhitelistHasher>(cli: &WhitelistCli) -> Result<CommandOutput> {
    let config = cli.config();
    match &cli.command {
        Command::Root { input } => {
            let (tree, _) = build_tree::<H>(&config, input)?;
            Ok(CommandOutput {
                text: format_hash(&tree.root()),
                success: true,
            })
        }
        Command::Proof { input, entry } => {
            let (tree, _) = build_tree::<H>(&config, input)?;
            let report = proof_report(&tree, &config, entry)?;
            Ok(CommandOutput {
                text: serde_json::to_string_pretty(&report)?,
                success: true,
            })
        }
        Command::Verify { root, entry, proof } => {
            let report = verify_report::<H>(&config, root, entry, proof)?;
            if !report.valid {
                info!("Proof for {} does not match root {}", entry, root);
            }
            Ok(CommandOutput {
                success: report.valid,
                text: serde_json::to_string_pretty(&report)?,
            })
        }
        Command::Dump { input, output } => {
            let (tree, entries) = build_tree::<H>(&config, input)?;
            let report = dump_report(&tree, &config, &entries)?;
            let json = serde_json::to_string_pretty(&report)?;
            if output.is_empty() {
                return Ok(CommandOutput {
                    text: json,
                    success: true,
                });
            }
            write_file(output, &json)?;
            info!("Dumped {} proofs to {}", report.entries.len(), output);
            Ok(CommandOutput {
                text: report.root,
                success: true,
            })
        }
    }
}

/// Loads a whitelist file and builds its tree.
pub fn build_tree<H: WhitelistHasher>(
    config: &WhitelistConfig,
    input: &str,
) -> Result<(MerkleWhitelist<H>, Vec<String>)> {
    let entries = load_entries(input)?;
    let tree = MerkleWhitelist::<H>::from_config(config, &entries)
        .with_context(|| format!("failed to build whitelist tree from {}", input))?;
    info!(
        "Whitelist {}: {} entries, {} leaves, depth {}, root {}",
        input,
        entries.len(),
        tree.leaf_count(),
        tree.depth(),
        format_hash(&tree.root())
    );
    Ok((tree, entries))
}

pub fn proof_report<H: WhitelistHasher>(
    tree: &MerkleWhitelist<H>,
    config: &WhitelistConfig,
    entry: &str,
) -> Result<ProofReport> {
    let bz = config.leaf_encoding.encode(entry)?;
    let proof = tree
        .proof(&bz)
        .with_context(|| format!("{} is not on the whitelist", entry))?;
    Ok(ProofReport {
        entry: entry.to_owned(),
        leaf: format_hash(&H::hash(&bz)),
        root: format_hash(&tree.root()),
        proof: proof.to_hex_strings(),
    })
}

pub fn verify_report<H: WhitelistHasher>(
    config: &WhitelistConfig,
    root: &str,
    entry: &str,
    proof: &[String],
) -> Result<VerifyReport> {
    let root_hash = parse_hash(root).context("invalid root")?;
    let siblings: Vec<&str> = proof
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let proof = Proof::from_hex_strings(&siblings).context("invalid proof")?;
    let bz = config.leaf_encoding.encode(entry)?;
    Ok(VerifyReport {
        entry: entry.to_owned(),
        root: format_hash(&root_hash),
        valid: MerkleWhitelist::<H>::verify(&proof, &bz, &root_hash),
    })
}

pub fn dump_report<H: WhitelistHasher>(
    tree: &MerkleWhitelist<H>,
    config: &WhitelistConfig,
    entries: &[String],
) -> Result<DumpReport> {
    let mut seen = HashSet::new();
    let mut reports = Vec::with_capacity(entries.len());
    for entry in entries {
        if config.dedup && !seen.insert(config.leaf_encoding.encode(entry)?) {
            continue;
        }
        reports.push(proof_report(tree, config, entry)?);
    }
    Ok(DumpReport {
        hasher: config.hash_algo.to_string(),
        encoding: config.leaf_encoding.to_string(),
        root: format_hash(&tree.root()),
        leaf_count: tree.leaf_count(),
        depth: tree.depth(),
        entries: reports,
    })
}

fn write_file(output: &str, contents: &str) -> Result<()> {
    if let Some(parent) = Path::new(output).parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, contents).with_context(|| format!("failed to write {}", output))
}
