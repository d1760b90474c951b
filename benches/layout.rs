use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tradedeck::core::{compute_canvas_extent, compute_tile_layout};
use tradedeck_types::{ContentKind, Instrument, PanelData, PanelGeometry};

fn scattered_panels(count: usize) -> Vec<PanelData> {
    (0..count)
        .map(|i| {
            PanelData::new(
                ContentKind::Chart,
                Instrument::new("BTCUSDT", "Bitcoin / Tether", "icons/btc.svg"),
                PanelGeometry::new(
                    (i as f64 * 137.0) % 3000.0,
                    (i as f64 * 89.0) % 2000.0,
                    420.0,
                    320.0,
                ),
            )
        })
        .collect()
}

fn bench_tile_layout(c: &mut Criterion) {
    c.bench_function("tile_40_panels", |b| {
        b.iter(|| compute_tile_layout(black_box(40), black_box(1920.0), black_box(1080.0)))
    });
}

fn bench_canvas_extent(c: &mut Criterion) {
    let panels = scattered_panels(100);
    c.bench_function("canvas_extent_100_panels", |b| {
        b.iter(|| compute_canvas_extent(black_box(&panels)))
    });
}

criterion_group!(benches, bench_tile_layout, bench_canvas_extent);
criterion_main!(benches);
