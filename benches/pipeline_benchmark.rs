// Pipeline benchmarks
// Author: Gabriel Demetrios Lafis

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_pipe_combinators::processing::{drop, filter, fold, iota, map, reverse, take, Pipeline};

fn operator_chain(input: Vec<i64>) -> i64 {
    let result = input
        | filter(|e: &i64| e % 2 != 0)
        | map(|e: i64| e + 1)
        | fold(0, |acc: i64, e: i64| acc + e)
        | iota()
        | reverse()
        | drop(4)
        | take(2)
        | fold(1, |acc: i64, e: i64| acc * e);

    result.unwrap_or_default()
}

fn dynamic_chain(input: Vec<i64>) -> i64 {
    let pipeline = Pipeline::new("bench")
        .add(filter(|e: &i64| e % 2 != 0))
        .add(map(|e: i64| e + 1))
        .add(fold(0, |acc: i64, e: i64| acc + e))
        .add(iota())
        .add(reverse())
        .add(drop(4))
        .add(take(2))
        .add(fold(1, |acc: i64, e: i64| acc * e));

    match pipeline.execute(input) {
        Ok(value) => value.into_scalar(rust_pipe_combinators::StageKind::Fold).unwrap_or_default(),
        Err(_) => 0,
    }
}

fn bench_reference_chain(c: &mut Criterion) {
    c.bench_function("operator chain", |b| {
        b.iter(|| operator_chain(black_box(vec![1, 2, 3, 4, 5])))
    });

    c.bench_function("dynamic chain", |b| {
        b.iter(|| dynamic_chain(black_box(vec![1, 2, 3, 4, 5])))
    });
}

fn bench_large_input(c: &mut Criterion) {
    let input: Vec<i64> = (0..10_000).collect();

    c.bench_function("filter map fold 10k", |b| {
        b.iter(|| {
            black_box(input.clone())
                | filter(|e: &i64| e % 3 == 0)
                | map(|e: i64| e * 2)
                | fold(0, |acc: i64, e: i64| acc + e)
        })
    });
}

criterion_group!(benches, bench_reference_chain, bench_large_input);
criterion_main!(benches);
