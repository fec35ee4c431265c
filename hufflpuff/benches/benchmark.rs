extern crate criterion;

use self::criterion::*;
use common::count_str;
use hufflpuff::build_tree;
use hufflpuff::encode_symbols;
use hufflpuff::tree_to_table;

const SAMPLE: &str = "Huffman coding assigns short codes to frequent symbols. Häufige Zeichen \
                      bekommen kurze Codes, seltene längere: ⚡ 𝄞 ✓. ";

fn gen_text(repeat: usize) -> String {
    SAMPLE.repeat(repeat)
}

fn compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression");
    for repeat in [10_usize, 100, 1000].iter() {
        let input = gen_text(*repeat);
        let input_bytes = input.len() as u64;
        group.throughput(Throughput::Bytes(input_bytes));
        group.bench_with_input(BenchmarkId::new("count", input_bytes), &input, |b, i| {
            b.iter(|| count_str(i).unwrap());
        });
        group.bench_with_input(
            BenchmarkId::new("build_tree", input_bytes),
            &input,
            |b, i| {
                let counts = count_str(i).unwrap();
                b.iter(|| build_tree(&counts).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("build_tree_complete", input_bytes),
            &input,
            |b, i| {
                b.iter(|| {
                    let counts = count_str(i).unwrap();
                    let tree = build_tree(&counts).unwrap();
                    tree_to_table(&tree)
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("encode_symbols", input_bytes),
            &input,
            |b, i| {
                let counts = count_str(i).unwrap();
                let table = tree_to_table(&build_tree(&counts).unwrap());
                let mut out = Vec::with_capacity(i.len());
                b.iter(|| {
                    out.clear();
                    encode_symbols(i.chars().map(Ok), &table, &mut out).unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, compression);
criterion_main!(benches);
