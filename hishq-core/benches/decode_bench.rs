//! Decode throughput on a synthetic multi-year envelope.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hishq_core::decode;

/// Build an envelope with `rows` daily rows of realistic field widths.
fn synthetic_envelope(rows: usize) -> String {
    let mut hq = String::new();
    for i in 0..rows {
        if i > 0 {
            hq.push(',');
        }
        let day = 19900101 + i as u64;
        hq.push_str(&format!(
            "[\"{day}\",\"10.00\",\"10.50\",\"0.50\",\"5.00%\",\
             \"9.90\",\"10.60\",\"123456\",\"7890123\",\"0.55%\"]"
        ));
    }
    format!(
        "historySearchHandler([{{\"status\":\"0\",\"hq\":[{hq}],\
         \"stat\":[\"accumulated:\",\"range\",\"0.80\",\"8.00%\",\
         \"9.90\",\"10.90\",\"35801\",\"146791\",\"1.20%\"]}}])"
    )
}

fn bench_decode(c: &mut Criterion) {
    let envelope = synthetic_envelope(5_000);

    c.bench_function("decode_5000_rows", |b| {
        b.iter(|| decode(black_box(&envelope)).unwrap())
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
