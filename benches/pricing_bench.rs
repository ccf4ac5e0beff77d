// 定价引擎性能基准测试
//
// 测试项目:
// 1. 分档查找 (二分查找)
// 2. 超出最后一档的计算
// 3. 金额格式化

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use errand_pricing::pricing::{format_currency, PricingEngine};

fn benchmark_tier_lookup(c: &mut Criterion) {
    let engine = PricingEngine::default();
    c.bench_function("tier_lookup", |b| {
        b.iter(|| engine.calculate_delivery_price(black_box(13.7)));
    });
}

fn benchmark_overflow(c: &mut Criterion) {
    let engine = PricingEngine::default();
    c.bench_function("overflow_price", |b| {
        b.iter(|| engine.calculate_delivery_price(black_box(48.2)));
    });
}

fn benchmark_format_currency(c: &mut Criterion) {
    c.bench_function("format_currency", |b| {
        b.iter(|| format_currency(black_box(1_234_567.891)));
    });
}

criterion_group!(
    benches,
    benchmark_tier_lookup,
    benchmark_overflow,
    benchmark_format_currency
);
criterion_main!(benches);
