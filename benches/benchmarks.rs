use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xrpl_core::{Amount, Currency, Decimal, UInt160};

pub fn bench_decimal_parse(c: &mut Criterion) {
    c.bench_function("decimal::parse", |b| {
        b.iter(|| Decimal::parse(black_box("1234.56789")))
    });
}

pub fn bench_decimal_divide(c: &mut Criterion) {
    let a = Decimal::parse("1000000.123456789").unwrap();
    let d = Decimal::parse("3.0").unwrap();
    c.bench_function("decimal::divide", |b| {
        b.iter(|| a.divide(black_box(&d)))
    });
}

pub fn bench_amount_from_human(c: &mut Criterion) {
    c.bench_function("amount::from_human", |b| {
        b.iter(|| Amount::from_human(black_box("10.5 USD")))
    });
}

pub fn bench_amount_to_json(c: &mut Criterion) {
    let amount = Amount::issued(
        "10.5",
        Currency::from_human("USD").unwrap(),
        UInt160::account_one(),
    )
    .unwrap();
    c.bench_function("amount::to_json", |b| b.iter(|| amount.to_json()));
}

pub fn bench_uint160_to_address(c: &mut Criterion) {
    let id = UInt160::account_one();
    c.bench_function("uint160::to_address", |b| {
        b.iter(|| id.to_address())
    });
}

criterion_group!(
    benches,
    bench_decimal_parse,
    bench_decimal_divide,
    bench_amount_from_human,
    bench_amount_to_json,
    bench_uint160_to_address,
);
criterion_main!(benches);
