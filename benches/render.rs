use criterion::{criterion_group, criterion_main, Criterion};
use nexus_core::{create_trait_record, describe_traits, render, Compositor, MintPolicy, RenderConfig};

const BIRTH: u64 = 1_700_000_000;

fn bench_render(c: &mut Criterion) {
    let record = create_trait_record(b"bench-seed", true, 1, BIRTH, &MintPolicy::default()).unwrap();
    let nexus_age = BIRTH + 90 * 86_400;

    c.bench_function("render_spark_static", |b| {
        b.iter(|| render(&record, BIRTH, 0))
    });

    c.bench_function("render_nexus_frame_240", |b| {
        b.iter(|| render(&record, nexus_age, 240))
    });

    let animated = Compositor::new(RenderConfig::animated()).unwrap();
    c.bench_function("render_nexus_animated", |b| {
        b.iter(|| animated.render(&record, nexus_age, 0))
    });

    c.bench_function("describe_traits", |b| {
        b.iter(|| describe_traits(&record, nexus_age))
    });

    c.bench_function("create_trait_record", |b| {
        b.iter(|| create_trait_record(b"bench-seed", false, 2, BIRTH, &MintPolicy::default()))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
