//! Performance benchmarks for the Salary Tracker.
//!
//! The whole pipeline is linear in the number of records and is
//! expected to complete in well under a second for realistic volumes
//! (hundreds of records). These benchmarks track that expectation for
//! parsing, index building, and summary queries.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use salary_tracker::calculation::{after_tax_income, gross_salary};
use salary_tracker::config::PayRates;
use salary_tracker::index::AnnualIndex;
use salary_tracker::models::ShiftRecord;
use salary_tracker::parser::parse_record_line;

/// Generates `count` input lines spread across all twelve months.
fn generate_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let month = (i % 12) + 1;
            let day = (i % 28) + 1;
            let start = 6 + (i % 4);
            let end = start + 8 + (i % 3);
            format!("{:02}.{:02}: {}-{}", day, month, start, end.min(24))
        })
        .collect()
}

fn parse_records(lines: &[String]) -> Vec<ShiftRecord> {
    lines
        .iter()
        .map(|line| parse_record_line(line, 2024).expect("generated line must parse"))
        .collect()
}

/// Benchmark: parsing a batch of input lines.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [10, 100, 500].iter() {
        let lines = generate_lines(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("lines", count), &lines, |b, lines| {
            b.iter(|| black_box(parse_records(lines)))
        });
    }

    group.finish();
}

/// Benchmark: building the annual index from parsed records.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for count in [10, 100, 500].iter() {
        let records = parse_records(&generate_lines(*count));
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(
            BenchmarkId::new("records", count),
            &records,
            |b, records| b.iter(|| black_box(AnnualIndex::from_records(records.clone()))),
        );
    }

    group.finish();
}

/// Benchmark: salary figures for every month of a built index.
fn bench_salary_queries(c: &mut Criterion) {
    let records = parse_records(&generate_lines(500));
    let index = AnnualIndex::from_records(records);
    let rates = PayRates::default();

    c.bench_function("salary_all_months", |b| {
        b.iter(|| {
            for aggregate in index.months() {
                black_box(gross_salary(aggregate, &rates));
                black_box(after_tax_income(aggregate, &rates));
            }
        })
    });
}

/// Benchmark: the full pipeline, lines to one month's gross salary.
fn bench_full_pass(c: &mut Criterion) {
    let lines = generate_lines(500);
    let rates = PayRates::default();

    c.bench_function("full_pass_500", |b| {
        b.iter(|| {
            let index = AnnualIndex::from_records(parse_records(&lines));
            let aggregate = index.lookup(3).expect("March has data");
            black_box(gross_salary(aggregate, &rates))
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_index_build,
    bench_salary_queries,
    bench_full_pass,
);
criterion_main!(benches);
