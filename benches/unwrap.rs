// benches/unwrap.rs
//! Single-tier Unwrap benchmarks (pre-wrapped payloads)

use coinglass_codec::aliases::Aes128Key16;
use coinglass_codec::{unwrap, wrap};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

/// JSON-ish rows with some non-ASCII so the text repair does real work.
fn payload(size: usize) -> String {
    let row = r#"{"symbol":"ETH","exchange":"币安","flow":-12.5},"#;
    row.chars().cycle().take(size).collect()
}

fn bench_unwrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("unwrap");
    let key = Aes128Key16::new(*b"0123456789abcdef");

    let sizes = [KB, 64 * KB, MB];

    for &size in &sizes {
        // --- Pre-wrap once (outside the timed loop) ---
        let plaintext = payload(size);
        let field = wrap(&plaintext, &key).unwrap();

        group.throughput(Throughput::Bytes(plaintext.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("size", format_size(size)),
            &field,
            |b, field| {
                b.iter(|| black_box(unwrap(black_box(field), &key).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_unwrap);
criterion_main!(benches);
