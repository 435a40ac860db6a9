use anyhow::{bail, Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads whitelist entries from a file.
///
/// A file whose first non-blank character is `[` is parsed as a JSON array of
/// strings. Otherwise every line is an entry; blank lines and lines starting with
/// `#` are skipped.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read whitelist {}", path.display()))?;
    let entries = parse_entries(&text)
        .with_context(|| format!("failed to parse whitelist {}", path.display()))?;
    debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

pub fn parse_entries(text: &str) -> Result<Vec<String>> {
    let entries: Vec<String> = if text.trim_start().starts_with('[') {
        serde_json::from_str(text).context("expected a JSON array of strings")?
    } else {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect()
    };
    if entries.is_empty() {
        bail!("whitelist has no entries");
    }
    Ok(entries)
}
