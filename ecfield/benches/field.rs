//! Prime and binary field element benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ecfield::{Field, FieldElement, num_bigint::BigUint};
use hex_literal::hex;
use std::hint::black_box;

/// P-256 base field.
fn p256() -> Field {
    Field::prime(BigUint::from_bytes_be(&hex!(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
    )))
    .unwrap()
}

/// NIST B-163 / K-163 field.
fn f163() -> Field {
    Field::pentanomial(163, 3, 6, 7).unwrap()
}

/// NIST B-233 / K-233 field.
fn f233() -> Field {
    Field::trinomial(233, 74).unwrap()
}

fn test_field_element_x(field: &Field) -> FieldElement {
    let bytes = hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    );
    let len = field.byte_len();
    let mut x = BigUint::from_bytes_be(&bytes[..len]);
    for i in field.bits() - 1..x.bits() {
        x.set_bit(i, false);
    }
    field.element(x).unwrap()
}

fn test_field_element_y(field: &Field) -> FieldElement {
    let bytes = hex!(
        "67e2f68071ed8281e8aed6bcf1c5207c5e633722d920afd6ae22d06eeb8035e3"
    );
    let len = field.byte_len();
    let mut x = BigUint::from_bytes_be(&bytes[..len]);
    for i in field.bits() - 1..x.bits() {
        x.set_bit(i, false);
    }
    field.element(x).unwrap()
}

fn bench_field_element_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, field: &Field) {
    let x = test_field_element_x(field);
    let y = test_field_element_y(field);
    group.bench_function("mul", |b| b.iter(|| black_box(&x) * black_box(&y)));
}

fn bench_field_element_square<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, field: &Field) {
    let x = test_field_element_x(field);
    group.bench_function("square", |b| b.iter(|| black_box(&x).square()));
}

fn bench_field_element_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, field: &Field) {
    let x = test_field_element_x(field);
    group.bench_function("invert", |b| b.iter(|| black_box(&x).invert()));
}

fn bench_field_element_sqrt<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, field: &Field) {
    let x = test_field_element_x(field).square();
    group.bench_function("sqrt", |b| b.iter(|| black_box(&x).sqrt()));
}

fn bench_field_element(c: &mut Criterion) {
    for (name, field) in [("P-256", p256()), ("F2^163", f163()), ("F2^233", f233())] {
        let mut group = c.benchmark_group(format!("{name} field element operations"));
        bench_field_element_mul(&mut group, &field);
        bench_field_element_square(&mut group, &field);
        bench_field_element_invert(&mut group, &field);
        bench_field_element_sqrt(&mut group, &field);
        group.finish();
    }
}

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
