//! Performance benchmarks for subnet suggestions

use cidr_allocator::{merge_with_provider, suggest, AllocationRequest, CidrBlock};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Benchmark suggestions in an empty parent at several sizes
fn bench_empty_parent(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_empty_parent");
    let parent = CidrBlock::from_str("10.0.0.0/16").unwrap();

    for prefix in [20u8, 24, 28].iter() {
        group.throughput(Throughput::Elements(8));
        group.bench_with_input(BenchmarkId::new("prefix", prefix), prefix, |b, &prefix| {
            let request = AllocationRequest::new(parent, prefix);
            b.iter(|| black_box(suggest(black_box(&request)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark suggestions when most of the parent is already carved up
fn bench_fragmented_parent(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_fragmented_parent");
    let parent = CidrBlock::from_str("10.0.0.0/16").unwrap();

    for used_count in [64u32, 128, 256].iter() {
        // Every other /26 from the start of the parent is used
        let used: Vec<CidrBlock> = (0..*used_count)
            .map(|i| {
                let addr = u32::from(Ipv4Addr::new(10, 0, 0, 0)) + i * 128;
                CidrBlock::new(Ipv4Addr::from(addr), 26).unwrap()
            })
            .collect();
        let request = AllocationRequest::new(parent, 25).with_used(used);

        group.throughput(Throughput::Elements(u64::from(*used_count)));
        group.bench_with_input(
            BenchmarkId::new("used", used_count),
            &request,
            |b, request| {
                b.iter(|| black_box(suggest(black_box(request)).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark /32 suggestions across the whole address space with a large used prefix
fn bench_full_space(c: &mut Criterion) {
    let parent = CidrBlock::from_str("0.0.0.0/0").unwrap();
    let used = vec![
        CidrBlock::from_str("0.0.0.0/1").unwrap(),
        CidrBlock::from_str("128.0.0.0/2").unwrap(),
    ];
    let request = AllocationRequest::new(parent, 32).with_used(used);

    c.bench_function("suggest_full_space_host_blocks", |b| {
        b.iter(|| black_box(suggest(black_box(&request)).unwrap()));
    });
}

/// Benchmark merging local suggestions with provider-reported blocks
fn bench_merge(c: &mut Criterion) {
    let parent = CidrBlock::from_str("10.0.0.0/16").unwrap();
    let local = suggest(&AllocationRequest::new(parent, 24)).unwrap().suggestions;
    let provider: Vec<String> = (0..32).map(|i| format!("10.0.{}.0/24", i)).collect();

    c.bench_function("merge_with_provider", |b| {
        b.iter(|| black_box(merge_with_provider(black_box(&local), black_box(&provider))));
    });
}

criterion_group!(
    benches,
    bench_empty_parent,
    bench_fragmented_parent,
    bench_full_space,
    bench_merge,
);

criterion_main!(benches);
