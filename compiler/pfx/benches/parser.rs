//! Parser, evaluator, and serializer benchmarks.

#![allow(clippy::unwrap_used, reason = "Benchmarks use unwrap for brevity")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pfx::{evaluate, parse, serialize, Notation};
use std::hint::black_box;

/// Small nested expression
const NESTED_ARITHMETIC: &str = "(* (+ x 1) (- y (/ z 2)))";

/// Every operator once
const ALL_OPERATORS: &str =
    "(+ (- (* x y) (/ z 2)) (negate (atan (exp (min3 (max5 x))))))";

/// Right-leaning chain of `depth` additions
fn generate_chain(depth: usize) -> String {
    let mut expr = "x".to_string();
    for i in 0..depth {
        expr = format!("(+ {i} {expr})");
    }
    expr
}

/// Balanced binary tree of multiplications
fn generate_balanced(levels: usize) -> String {
    if levels == 0 {
        "y".to_string()
    } else {
        let child = generate_balanced(levels - 1);
        format!("(* {child} {child})")
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("nested_arithmetic", |b| {
        b.iter(|| parse(black_box(NESTED_ARITHMETIC)));
    });
    group.bench_function("all_operators", |b| {
        b.iter(|| parse(black_box(ALL_OPERATORS)));
    });
    for depth in [10, 100, 1000] {
        let source = generate_chain(depth);
        group.bench_with_input(BenchmarkId::new("chain", depth), &source, |b, source| {
            b.iter(|| parse(black_box(source)));
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for levels in [4, 8, 12] {
        let expr = parse(&generate_balanced(levels)).unwrap();
        group.bench_with_input(BenchmarkId::new("balanced", levels), &expr, |b, expr| {
            b.iter(|| evaluate(black_box(expr), black_box(&[1.0, 1.0001, 0.0])));
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let expr = parse(&generate_chain(1000)).unwrap();
    let mut group = c.benchmark_group("serialize");
    group.bench_function("chain_flat", |b| {
        b.iter(|| serialize(black_box(&expr), Notation::Flat));
    });
    group.bench_function("chain_prefix", |b| {
        b.iter(|| serialize(black_box(&expr), Notation::Prefix));
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_evaluate, bench_serialize);
criterion_main!(benches);
