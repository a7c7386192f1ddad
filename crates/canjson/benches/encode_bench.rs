use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use canjson::{Field, Map, Options, Value};

fn gen_rows(n: usize) -> Value {
    let rows = (0..n)
        .map(|i| {
            let label = (0..8)
                .map(|_| (b'a' + rand::random::<u8>() % 26) as char)
                .collect::<String>();
            Value::Struct(vec![
                Field::omit_empty("id", Value::Int(i as i64)),
                Field::omit_empty("label", Value::Str(label)),
                Field::omit_empty("flag", Value::Bool(rand::random::<bool>())),
                Field::omit_empty("score", Value::Float(rand::random::<u8>() as f64 / 8.0)),
            ])
        })
        .collect();
    Value::Struct(vec![Field::new("rows", Value::Seq(rows))])
}

fn gen_wide_map(keys: usize) -> Value {
    let mut m = Map::with_capacity(keys);
    for k in 0..keys {
        m.insert(format!("k{}", rand::random::<u32>()), Value::Int(k as i64));
    }
    Value::Map(m)
}

pub fn encode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let opts = Options::default();
    for &n in &[100, 1_000, 10_000] {
        let rows = gen_rows(n);
        let out_sz = canjson::encode(&rows).map(|b| b.len()).unwrap_or(0) as u64;
        group.throughput(Throughput::Bytes(out_sz));
        group.bench_function(format!("rows::{n}"), |b| {
            b.iter(|| black_box(canjson::encode_with(&rows, &opts)))
        });

        let map = gen_wide_map(n);
        group.bench_function(format!("sorted_map::{n}"), |b| {
            b.iter_batched(
                || map.clone(),
                |m| black_box(canjson::encode_with(&m, &opts)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, encode_benchmarks);
criterion_main!(benches);
