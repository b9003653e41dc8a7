use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vacmap_decoder::MapDecoder;
use vacmap_driver::{DefaultNormalizer, MapNormalizer};
use vacmap_tests::PayloadBuilder;

fn sample_map(side: u32) -> PayloadBuilder {
    let pixels: Vec<u8> = (0..side * side).map(|i| (i % 3) as u8).collect();
    let path: Vec<(u32, u32)> = (0..500).map(|i| (i * 10, i * 20)).collect();

    let mut builder = PayloadBuilder::new();
    builder
        .header(0, 1)
        .charger(25_000, 25_000, 0)
        .robot_position(26_000, 24_500, 9000)
        .path(&path)
        .no_go_areas(&[[20_000, 20_000, 22_000, 21_000]])
        .virtual_walls(&[[21_000, 25_000, 21_000, 27_000]])
        .obstacles(&[(23_000, 23_000, 1), (24_000, 23_500, 4)])
        .image(0, 0, side, side, &pixels);
    builder
}

fn bench_decode_small(c: &mut Criterion) {
    let buf = PayloadBuilder::new().robot_position(1000, 2000, 9000).build();

    c.bench_function("decode_small", |b| {
        b.iter(|| MapDecoder::decode(&buf).unwrap());
    });
}

fn bench_decode_envelope(c: &mut Criterion) {
    let builder = sample_map(200);
    let plain = builder.build();
    let wrapped = builder.build_gzip();

    let mut group = c.benchmark_group("decode_envelope");
    group.bench_function("plain", |b| {
        b.iter(|| MapDecoder::decode(&plain).unwrap());
    });
    group.bench_function("gzip", |b| {
        b.iter(|| MapDecoder::decode(&wrapped).unwrap());
    });
    group.finish();
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    // Image payloads must fit a u16 block length.
    for side in [32u32, 128, 250] {
        let buf = sample_map(side).build();
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &buf, |b, buf| {
            b.iter(|| {
                let decoded = MapDecoder::decode(buf).unwrap();
                DefaultNormalizer.normalize(&decoded.map)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_envelope,
    bench_decode_throughput
);
criterion_main!(benches);
