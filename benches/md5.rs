use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use quickdigest::digest;

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5");
    for size in [64usize, 4096, 65536] {
        let data = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("digest_{}", size), |b| {
            b.iter(|| digest(black_box(&data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_digest);
criterion_main!(benches);
