use chart_core::{Chart, Entry, PointChart, RecordingCanvas};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_chart(n: usize) -> Chart {
    let entries = (0..n)
        .map(|i| {
            let v = (i as f64 * 0.37).sin() * 100.0 + 20.0;
            Entry::new(v)
                .with_label(format!("{}", i + 1))
                .with_value_label(format!("{v:.0}"))
        })
        .collect();
    let mut chart = Chart::new(PointChart::default()).with_entries(entries);
    chart.apply_selection(n / 2).ok();
    chart
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_chart_draw");
    for &n in &[8usize, 64, 512] {
        let chart = build_chart(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &chart, |b, chart| {
            let mut canvas = RecordingCanvas::new();
            b.iter(|| {
                let frame = chart.draw(&mut canvas, 1600, 600).expect("draw");
                black_box(frame.touch_targets().len());
                canvas.take_ops();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
