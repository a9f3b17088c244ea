// crates/qualifier-core/benches/render.rs
// Run with: cargo bench --bench render

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qualifier_core::{Dispatcher, MemoryStore, VariantMode, render};

const SAMPLE: &str = "the rules are real until you learn them";

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for mode in VariantMode::ALL {
        group.bench_function(mode.as_str(), |b| {
            b.iter(|| render(black_box(SAMPLE), black_box(mode)))
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    c.bench_function("dispatch/uwu", |b| {
        b.iter(|| {
            let dispatcher = Dispatcher::new(MemoryStore::new());
            dispatcher.run(black_box(r#"quote uwu "the rules are real until you learn them""#))
        })
    });
}

criterion_group!(benches, bench_render, bench_dispatch);
criterion_main!(benches);
