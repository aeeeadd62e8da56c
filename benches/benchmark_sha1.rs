use sharng::hash::Sha1;
use sharng::hash::sha1::core::sha1;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha1(c: &mut Criterion) {
    c.bench_function("sha1 64 bytes", |b| b.iter(|| sha1(black_box(&[0u8; 64]))));

    let data = vec![0x5au8; 1 << 20];
    let mut group = c.benchmark_group("sha1 streaming");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("1 MiB in 4 KiB writes", |b| {
        let mut hasher = Sha1::new();
        b.iter(|| {
            for chunk in data.chunks(4096) {
                hasher.update(black_box(chunk));
            }
            hasher.hash()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sha1);
criterion_main!(benches);
