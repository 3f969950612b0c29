// ABOUTME: Benchmark suite for delivery receipt parsing and serialization
// ABOUTME: Measures the locate/slice/convert pass and canonical rendering

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use smpp_dlr::receipt::scan;
use smpp_dlr::{DeliveryReceipt, ParseMode, parse};
use std::time::Duration;

const CANONICAL: &str = "id:1234567890 sub:001 dlvrd:001 submit date:2101011200 done date:2101011205 stat:DELIVRD err:000 text:Hello World";

const SHUFFLED: &str = "STAT:DELIVRD text:Hello World err:000 Done Date:2101011205 id:1234567890 Submit Date:2101011200 dlvrd:001 sub:001";

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("canonical", |b| b.iter(|| scan::scan(black_box(CANONICAL))));
    group.bench_function("shuffled", |b| b.iter(|| scan::scan(black_box(SHUFFLED))));

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("strict", |b| {
        b.iter(|| DeliveryReceipt::parse(black_box(CANONICAL), &Utc).unwrap())
    });

    group.bench_function("lenient_partial", |b| {
        b.iter(|| parse(black_box("id:42 stat:UNDELIV"), &Utc, ParseMode::Lenient).unwrap())
    });

    group.bench_function("shuffled", |b| {
        b.iter(|| DeliveryReceipt::parse(black_box(SHUFFLED), &Utc).unwrap())
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.measurement_time(Duration::from_secs(10));

    let receipt = DeliveryReceipt::parse(CANONICAL, &Utc).unwrap();
    group.bench_function("to_short_message", |b| {
        b.iter(|| black_box(&receipt).to_short_message())
    });

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            let text = black_box(&receipt).to_short_message();
            DeliveryReceipt::parse(&text, &Utc).unwrap()
        })
    });

    group.finish();
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    group.measurement_time(Duration::from_secs(10));

    let text_sizes = [0, 20, 100, 160, 254]; // Up to a full short message

    for &size in &text_sizes {
        let receipt_text = CANONICAL.replace("Hello World", &"A".repeat(size));

        group.bench_with_input(
            BenchmarkId::new("parse", size),
            &receipt_text,
            |b, receipt_text| {
                b.iter(|| DeliveryReceipt::parse(black_box(receipt_text), &Utc).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scan,
    bench_parse,
    bench_serialization,
    bench_text_sizes
);
criterion_main!(benches);
