use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fnv_fold::hashing::fnv::{fnv1, fnv1a};

fn bench_fnv_lengths(c: &mut Criterion) {
    let data: Vec<u8> = (0..1024u32).map(|i| (i % 251) as u8).collect();
    let mut group = c.benchmark_group("fnv");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for &bits in &[32, 64, 160, 256, 512, 1019, 1024] {
        group.bench_with_input(BenchmarkId::new("fnv1", bits), &bits, |b, &bits| {
            b.iter(|| fnv1(black_box(&data), bits))
        });
        group.bench_with_input(BenchmarkId::new("fnv1a", bits), &bits, |b, &bits| {
            b.iter(|| fnv1a(black_box(&data), bits))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fnv_lengths);
criterion_main!(benches);
