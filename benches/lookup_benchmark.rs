use criterion::{black_box, criterion_group, criterion_main, Criterion};
use guidebook_engine::content::resolver::GENERAL;
use guidebook_engine::content::sample::{generate_sample_document, SampleConfig};
use guidebook_engine::currency::convert::convert;
use guidebook_engine::currency::rates::{CurrencyCode, RateTable};

fn bench_resolve_builtin_catalog(c: &mut Criterion) {
    let config = SampleConfig::default();
    let document = generate_sample_document(&config);

    c.bench_function("resolve_city_hit", |b| {
        b.iter(|| document.lookup(black_box("Arriving in Nepal"), black_box(GENERAL)))
    });

    c.bench_function("resolve_general_fallback", |b| {
        b.iter(|| document.lookup(black_box("Arriving in Nepal"), black_box("Lumbini")))
    });
}

fn bench_resolve_wide_document(c: &mut Criterion) {
    let config = SampleConfig {
        menu_items: (0..500).map(|i| format!("Topic {}", i)).collect(),
        cities: (0..20).map(|i| format!("City {}", i)).collect(),
        items_per_bucket: 8,
        city_coverage: 0.5,
    };
    let document = generate_sample_document(&config);

    c.bench_function("resolve_wide_document", |b| {
        b.iter(|| document.lookup(black_box("Topic 250"), black_box("City 10")))
    });
}

fn bench_convert(c: &mut Criterion) {
    let rates = RateTable::builtin();
    let usd = CurrencyCode::new("USD");
    let npr = CurrencyCode::new("NPR");

    c.bench_function("convert_usd_to_npr", |b| {
        b.iter(|| convert(black_box("1234.56"), &usd, &npr, &rates))
    });
}

criterion_group!(
    benches,
    bench_resolve_builtin_catalog,
    bench_resolve_wide_document,
    bench_convert
);
criterion_main!(benches);
