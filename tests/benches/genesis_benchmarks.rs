//! # Genesis Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Genesis build (coinbase, Merkle, header hash) | < 50µs |
//! | Full registry build (3 networks, self-checks) | < 1ms |
//! | Merkle root over N leaves | linear in N |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chain_params::adapters::{SystemTimeSource, ThreadRandomSource};
use chain_params::{build_genesis, compute_merkle_root, main_genesis_inputs, ChainParamsRegistry};
use shared_types::Hash256;

fn bench_genesis_build(c: &mut Criterion) {
    let inputs = main_genesis_inputs().unwrap();
    c.bench_function("genesis_build", |b| b.iter(|| black_box(build_genesis(black_box(&inputs)))));
}

fn bench_registry_build(c: &mut Criterion) {
    let time = SystemTimeSource::new();
    let rng = ThreadRandomSource::new();
    c.bench_function("registry_build", |b| {
        b.iter(|| black_box(ChainParamsRegistry::build(&time, &rng).unwrap()))
    });
}

fn bench_merkle_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_root");
    for size in [1usize, 16, 256, 2048] {
        let leaves: Vec<Hash256> = (0..size)
            .map(|i| Hash256::sha256d(&(i as u64).to_le_bytes()))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &leaves, |b, leaves| {
            b.iter(|| black_box(compute_merkle_root(leaves)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_genesis_build, bench_registry_build, bench_merkle_root);
criterion_main!(benches);
