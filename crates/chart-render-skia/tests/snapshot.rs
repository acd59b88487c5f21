// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic point chart (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Chart, Entry, PointChart};
use chart_render_skia::{RenderOptions, SkiaRenderer};

fn render_bytes(selected: Option<usize>) -> Vec<u8> {
    // No labels and no axis text: glyph rasterization varies across platforms
    let values = [10.0, 14.0, 16.0, 25.0, 10.0, 15.0, 2.0, 19.0];
    let mut chart = Chart::new(PointChart::default().with_axis_labels(false))
        .with_entries(values.iter().map(|&v| Entry::new(v)).collect());
    chart.select(selected).expect("select");
    let (bytes, _) = SkiaRenderer::new()
        .render_to_png_bytes(&chart, &RenderOptions { width: 400, height: 200 })
        .expect("render bytes");
    bytes
}

fn check_snapshot(name: &str, bytes: &[u8]) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_point_chart() {
    check_snapshot("point_chart.png", &render_bytes(None));
}

#[test]
fn golden_point_chart_selected() {
    check_snapshot("point_chart_selected.png", &render_bytes(Some(3)));
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes(Some(1))).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes(Some(1))).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
