use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tbvec_algorithms::{FieldValue, Layout, WordSerializer};
use tbvec_fixtures::{all_suites, EmitConfig, Runner};
use tbvec_params::ALL_PROFILES;

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for spec in ALL_PROFILES {
        let layout = Layout::from_spec(spec).unwrap();
        let values: Vec<(&str, FieldValue)> = spec
            .fields
            .iter()
            .map(|f| (f.name, FieldValue::Uint(1)))
            .collect();

        group.bench_with_input(BenchmarkId::new("to_words", spec.name), &values, |b, values| {
            b.iter(|| {
                let bits = layout.pack(values.iter().map(|(n, v)| (*n, v))).unwrap();
                WordSerializer::to_words(&bits).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_raw(c: &mut Criterion) {
    let tag = "dfa66747de9ae63030ca32611497c827";
    c.bench_function("raw/tag128", |b| {
        b.iter(|| WordSerializer::to_words_raw("tag", tag).unwrap())
    });
}

fn bench_suites(c: &mut Criterion) {
    let suites = all_suites();
    c.bench_function("build/all_suites", |b| {
        b.iter(|| {
            for s in &suites {
                Runner::build_suite(s).unwrap();
            }
        })
    });

    let config = EmitConfig::listing();
    c.bench_function("emit/listing", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64 * 1024);
            Runner::new(&config).unwrap().run(&mut out).unwrap()
        })
    });
}

criterion_group!(benches, bench_pack, bench_raw, bench_suites);
criterion_main!(benches);
