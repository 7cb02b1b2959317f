use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use rcft::parser::parse_table;
use rcft::reader::RawTable;
use rcft::write_rcft;

// a table the size of a hand-written model: 200 classes x 40 members
fn sample_table() -> String {
    let mut text = String::from("FormalContext Bench\n| |");
    for p in 0..40 {
        text.push_str(&format!(" member{p}() |"));
    }
    text.push('\n');
    for o in 0..200 {
        text.push_str(&format!("| Class{o} |"));
        for p in 0..40 {
            text.push_str(if (o + p) % 3 == 0 { " X |" } else { " |" });
        }
        text.push('\n');
    }
    text
}

fn parse_benchmark(c: &mut Criterion) {
    let text = sample_table();
    c.bench_function("parse 200x40 table", |b| {
        b.iter(|| {
            let table = RawTable::from_text(black_box(&text));
            parse_table(&table).unwrap()
        })
    });
}

fn write_benchmark(c: &mut Criterion) {
    let context = parse_table(&RawTable::from_text(&sample_table())).unwrap();
    c.bench_function("write 200x40 table", |b| {
        b.iter(|| write_rcft("Bench", black_box(&context)))
    });
}

criterion_group!(benches, parse_benchmark, write_benchmark);
criterion_main!(benches);
