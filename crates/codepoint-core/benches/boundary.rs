//! Criterion benchmark: boundary primitives vs the substring oracle.
//! Run with: cargo bench -p codepoint-core --bench boundary --features test-support

use codepoint_core::boundary::{utf16, utf8};
use codepoint_core::normalize;
use codepoint_core::oracle::all_substrings;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn mixed_text(scalars: usize) -> String {
    ['a', '\u{e9}', '\u{4e2d}', '\u{1F600}']
        .iter()
        .cycle()
        .take(scalars)
        .collect()
}

fn bench_utf8(c: &mut Criterion) {
    let text = mixed_text(1024);
    c.bench_function("utf8_remove_last", |b| {
        b.iter(|| utf8::remove_last_scalar_value(black_box(&text)))
    });
    c.bench_function("utf8_walk_down_edge", |b| {
        b.iter(|| {
            let mut rest = black_box(text.as_str());
            while !rest.is_empty() {
                rest = utf8::remove_first_scalar_value(rest);
            }
        })
    });
}

fn bench_utf16(c: &mut Criterion) {
    let units: Vec<u16> = mixed_text(1024).encode_utf16().collect();
    c.bench_function("utf16_last", |b| {
        b.iter(|| utf16::last_scalar_value(black_box(&units)))
    });
    c.bench_function("utf16_walk_down_edge", |b| {
        b.iter(|| {
            let mut rest = black_box(units.as_slice());
            while !rest.is_empty() {
                rest = utf16::remove_first_scalar_value(rest);
            }
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let text = "The Quick Brown Fox, jumps over 42 lazy dogs! ".repeat(64);
    c.bench_function("normalize_3kb", |b| b.iter(|| normalize(black_box(&text))));
}

fn bench_oracle(c: &mut Criterion) {
    let text = mixed_text(48);
    c.bench_function("oracle_48_scalars", |b| {
        b.iter(|| all_substrings(black_box(&text)))
    });
}

criterion_group!(benches, bench_utf8, bench_utf16, bench_normalize, bench_oracle);
criterion_main!(benches);
