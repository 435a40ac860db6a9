use clap::Parser;
use std::fs;
use whitelist_tool::common::{
    cli::WhitelistCli,
    commands::run,
    report::{DumpReport, ProofReport, VerifyReport},
};

const WHITELIST: &str = "\
# launch whitelist
0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1
0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa2

0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA3
";
const ROOT: &str = "0x3685ba002cc66e9dacae33c11e2fc1fa4ff9b2258a2fd84b6c4afb458d3f3c20";

fn write_whitelist(dir: &tempfile::TempDir, contents: &str) -> String {
    let path = dir.path().join("whitelist.txt");
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_owned()
}

fn run_args(args: &[&str]) -> anyhow::Result<whitelist_tool::common::commands::CommandOutput> {
    let cli = WhitelistCli::try_parse_from(args).unwrap();
    run(&cli)
}

#[test]
fn test_root() {
    let dir = tempfile::Builder::new().prefix("wl-root").tempdir().unwrap();
    let input = write_whitelist(&dir, WHITELIST);
    let out = run_args(&["whitelist-tool", "root", "--input", input.as_str()]).unwrap();
    assert!(out.success);
    assert_eq!(out.text, ROOT);

    let args = ["whitelist-tool", "--hasher", "sha256", "root", "--input", input.as_str()];
    let out = run_args(&args).unwrap();
    assert_eq!(
        out.text,
        "0x2b57b4d2b8b392c708d721f400471d26bac63af0e843d453f77b0489dcd1bdec"
    );
}

#[test]
fn test_proof_then_verify() {
    let dir = tempfile::Builder::new().prefix("wl-proof").tempdir().unwrap();
    let input = write_whitelist(&dir, WHITELIST);
    let entry = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa3";

    let out = run_args(&["whitelist-tool", "proof", "--input", input.as_str(), "--entry", entry]).unwrap();
    let report: ProofReport = serde_json::from_str(&out.text).unwrap();
    assert_eq!(report.root, ROOT);
    assert_eq!(report.proof.len(), 1);

    let proof = report.proof.join(",");
    let out = run_args(&[
        "whitelist-tool", "verify", "--root", ROOT, "--entry", entry, "--proof", proof.as_str(),
    ])
    .unwrap();
    let verdict: VerifyReport = serde_json::from_str(&out.text).unwrap();
    assert!(out.success);
    assert!(verdict.valid);

    let outsider = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa4";
    let out = run_args(&[
        "whitelist-tool", "verify", "--root", ROOT, "--entry", outsider, "--proof", proof.as_str(),
    ])
    .unwrap();
    assert!(!out.success);
}

#[test]
fn test_proof_for_outsider_fails() {
    let dir = tempfile::Builder::new().prefix("wl-outsider").tempdir().unwrap();
    let input = write_whitelist(&dir, WHITELIST);
    let res = run_args(&[
        "whitelist-tool",
        "proof",
        "--input",
        input.as_str(),
        "--entry",
        "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa4",
    ]);
    let err = res.unwrap_err();
    assert!(format!("{:#}", err).contains("is not on the whitelist"));
}

#[test]
fn test_verify_single_entry_without_proof() {
    let dir = tempfile::Builder::new().prefix("wl-single").tempdir().unwrap();
    let input = write_whitelist(&dir, "[\"hero\"]");
    let args = ["whitelist-tool", "--encoding", "utf8", "root", "--input", input.as_str()];
    let out = run_args(&args).unwrap();
    let root = out.text;

    let out = run_args(&[
        "whitelist-tool", "--encoding", "utf8", "verify", "--root", root.as_str(), "--entry", "hero",
    ])
    .unwrap();
    assert!(out.success);
}

#[test]
fn test_dump_to_file() {
    let dir = tempfile::Builder::new().prefix("wl-dump").tempdir().unwrap();
    let dup = format!("{}0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1\n", WHITELIST);
    let input = write_whitelist(&dir, &dup);
    let output = dir.path().join("out/proofs.json");
    let output = output.to_str().unwrap();

    let out = run_args(&[
        "whitelist-tool", "--dedup", "dump", "--input", input.as_str(), "--output", output,
    ])
    .unwrap();
    assert_eq!(out.text, ROOT);

    let report: DumpReport = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(report.hasher, "keccak256");
    assert_eq!(report.encoding, "address");
    assert_eq!(report.root, ROOT);
    assert_eq!(report.leaf_count, 3);
    assert_eq!(report.depth, 2);
    assert_eq!(report.entries.len(), 3);
    for entry in &report.entries {
        assert_eq!(entry.root, ROOT);
    }
}

#[test]
fn test_bad_input() {
    let dir = tempfile::Builder::new().prefix("wl-bad").tempdir().unwrap();
    let contents = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1\nnot-an-address\n";
    let input = write_whitelist(&dir, contents);
    assert!(run_args(&["whitelist-tool", "root", "--input", input.as_str()]).is_err());

    let missing = dir.path().join("missing.txt");
    assert!(run_args(&["whitelist-tool", "root", "--input", missing.to_str().unwrap()]).is_err());
}
