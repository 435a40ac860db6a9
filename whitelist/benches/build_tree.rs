//! Tree construction and proof benchmarks.
//!
//! Run with: `cargo bench --package merkle-whitelist`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use merkle_whitelist::{Keccak256Hasher, MerkleWhitelist};

fn addresses(count: usize) -> Vec<Vec<u8>> {
    (0..count as u64)
        .map(|i| {
            let mut addr = vec![0u8; 20];
            addr[12..].copy_from_slice(&i.to_be_bytes());
            addr
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for count in [1_000, 10_000, 100_000] {
        let entries = addresses(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| {
                let tree = MerkleWhitelist::<Keccak256Hasher>::new(entries).unwrap();
                black_box(tree.root())
            });
        });
    }
    group.finish();
}

fn bench_prove_and_verify(c: &mut Criterion) {
    let entries = addresses(100_000);
    let tree = MerkleWhitelist::<Keccak256Hasher>::new(&entries).unwrap();
    let root = tree.root();

    c.bench_function("proof_100k", |b| {
        b.iter(|| black_box(tree.proof(&entries[54_321]).unwrap()));
    });

    let proof = tree.proof(&entries[54_321]).unwrap();
    c.bench_function("verify_100k", |b| {
        b.iter(|| {
            black_box(MerkleWhitelist::<Keccak256Hasher>::verify(
                &proof,
                &entries[54_321],
                &root,
            ))
        });
    });
}

criterion_group!(benches, bench_build, bench_prove_and_verify);
criterion_main!(benches);
