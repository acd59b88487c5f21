// File: crates/chart-core/tests/layout.rs
// Purpose: Validate point chart geometry: header/footer sizing, origin placement and point positions.

use chart_core::layout::{footer_height, header_height, item_size, y_origin};
use chart_core::{Chart, ChartConfig, ChartError, Color, Entry, PointChart, RecordingCanvas, Rect, ValueBounds};

fn sample_entries() -> Vec<Entry> {
    [10.0, 14.0, 16.0, 25.0, 10.0, 15.0, 2.0, 19.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Entry::new(v)
                .with_label((i + 1).to_string())
                .with_value_label(" ")
                .with_color(Color::WHITE)
                .with_text_color(Color::from_argb(127, 255, 255, 255))
        })
        .collect()
}

fn chart_with(values: &[f64]) -> Chart {
    Chart::new(PointChart::default()).with_entries(values.iter().map(|&v| Entry::new(v)).collect())
}

#[test]
fn sample_series_layout() {
    let chart = Chart::new(PointChart::default()).with_entries(sample_entries());
    assert_eq!(chart.min_value(), 0.0);
    assert_eq!(chart.max_value(), 25.0);
    assert_eq!(chart.value_range(), 25.0);

    let mut canvas = RecordingCanvas::new();
    let frame = chart.draw(&mut canvas, 800, 400).expect("draw");
    let layout = frame.layout().expect("layout");

    // labels present: margin + text size + margin
    assert_eq!(layout.footer_height, 56.0);
    // " " measures 8px wide at 16px: margin + 8 + margin
    assert_eq!(layout.header_height, 48.0);
    assert_eq!(layout.item_size.width, 77.5);
    assert_eq!(layout.item_size.height, 276.0);
    // all values >= 0: zero sits on the bottom edge
    assert_eq!(layout.origin_y, 324.0);

    let ys: Vec<f32> = layout.points.iter().map(|p| p.y).collect();
    let highest = ys.iter().enumerate().min_by(|a, b| a.1.total_cmp(b.1)).map(|(i, _)| i);
    let lowest = ys.iter().enumerate().max_by(|a, b| a.1.total_cmp(b.1)).map(|(i, _)| i);
    assert_eq!(highest, Some(3));
    assert_eq!(lowest, Some(6));

    assert!((layout.points[3].x - 351.25).abs() < 1e-4);
    assert!((layout.points[3].y - 48.0).abs() < 1e-4);
    assert!((layout.points[6].y - 301.92).abs() < 1e-3);
}

#[test]
fn points_stay_inside_plot_band() {
    for values in [
        vec![10.0, 14.0, 16.0, 25.0],
        vec![-4.0, -1.0, -9.0],
        vec![-50.0, 20.0, 0.0, 75.0],
        vec![1e6, 2.5e6],
    ] {
        let chart = chart_with(&values);
        let mut canvas = RecordingCanvas::new();
        let frame = chart.draw(&mut canvas, 640, 360).expect("draw");
        let l = frame.layout().expect("layout");
        let top = l.header_height;
        let bottom = l.header_height + l.item_size.height;
        for p in &l.points {
            assert!(p.y >= top - 1e-3 && p.y <= bottom + 1e-3, "{} outside [{top}, {bottom}] for {values:?}", p.y);
        }
    }
}

#[test]
fn origin_follows_sign_of_range() {
    let header = 30.0;
    let h = 200.0;
    assert_eq!(y_origin(ValueBounds::new(-9.0, 0.0), h, header), header);
    assert_eq!(y_origin(ValueBounds::new(3.0, 7.0), h, header), header + h);

    let mixed = y_origin(ValueBounds::new(-5.0, 10.0), h, header);
    assert!(mixed > header && mixed < header + h);
    assert!((mixed - (header + 10.0 / 15.0 * h)).abs() < 1e-4);
}

#[test]
fn origin_for_negative_and_overridden_series() {
    let chart = chart_with(&[-4.0, -1.0, -9.0]);
    let mut canvas = RecordingCanvas::new();
    let frame = chart.draw(&mut canvas, 400, 300).expect("draw");
    let l = frame.layout().expect("layout");
    assert_eq!(l.origin_y, l.header_height);

    let chart = chart_with(&[5.0, 7.0]).with_config(ChartConfig::default().with_min_value(3.0));
    assert_eq!(chart.min_value(), 3.0);
    let frame = chart.draw(&mut canvas, 400, 300).expect("draw");
    let l = frame.layout().expect("layout");
    assert_eq!(l.origin_y, l.header_height + l.item_size.height);
}

#[test]
fn flat_series_is_centered_without_nan() {
    let chart = chart_with(&[0.0, 0.0, 0.0]);
    assert_eq!(chart.value_range(), 0.0);
    let mut canvas = RecordingCanvas::new();
    let frame = chart.draw(&mut canvas, 300, 200).expect("draw");
    let l = frame.layout().expect("layout");
    let mid = l.header_height + l.item_size.height / 2.0;
    for p in &l.points {
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p.y, mid);
    }
    assert!(l.origin_y.is_finite());
}

#[test]
fn header_and_footer_collapse_without_labels() {
    let entries = vec![Entry::new(1.0), Entry::new(2.0)];
    assert_eq!(footer_height(&entries, 20.0, 16.0), 20.0);
    assert_eq!(header_height(&[Rect::EMPTY, Rect::EMPTY], 20.0), 20.0);

    let labelled = vec![Entry::new(1.0), Entry::new(2.0).with_label("b")];
    assert_eq!(footer_height(&labelled, 20.0, 16.0), 56.0);
    // empty strings count as no label
    let blank = vec![Entry::new(1.0).with_label("")];
    assert_eq!(footer_height(&blank, 20.0, 16.0), 20.0);

    let sizes = [Rect::EMPTY, Rect::from_ltrb(0.0, -12.0, 33.0, 4.0)];
    assert_eq!(header_height(&sizes, 20.0), 73.0);
}

#[test]
fn item_size_splits_width_between_margins() {
    let s = item_size(800.0, 400.0, 8, 20.0, 56.0, 48.0);
    assert_eq!(s.width, 77.5);
    assert_eq!(s.height, 276.0);
}

#[test]
fn empty_chart_draws_background_only() {
    let chart = Chart::new(PointChart::default());
    let mut canvas = RecordingCanvas::new();
    let frame = chart.draw(&mut canvas, 800, 400).expect("draw");
    assert!(frame.touch_targets().is_empty());
    assert!(frame.layout().is_none());
    assert_eq!(canvas.ops().len(), 1);
}

#[test]
fn draw_rejects_bad_input() {
    let mut canvas = RecordingCanvas::new();

    let chart = chart_with(&[1.0, 2.0]);
    assert_eq!(
        chart.draw(&mut canvas, 0, 400).unwrap_err(),
        ChartError::InvalidSurface { width: 0, height: 400 }
    );

    let chart = chart_with(&[1.0, f64::NAN]);
    assert!(matches!(chart.draw(&mut canvas, 800, 400), Err(ChartError::NonFiniteValue { index: 1, .. })));

    let chart = chart_with(&[1.0, 2.0])
        .with_config(ChartConfig::default().with_min_value(10.0).with_max_value(5.0));
    assert_eq!(
        chart.draw(&mut canvas, 800, 400).unwrap_err(),
        ChartError::InvalidValueBounds { min: 10.0, max: 5.0 }
    );
    assert!(canvas.ops().is_empty(), "nothing drawn for rejected frames");
}
