// File: crates/demo/src/main.rs
// Summary: Demo loads label,value CSV (or a built-in sample), renders a point chart to PNG,
// then simulates a tap on the highest point and renders the selected state.

use anyhow::{Context, Result};
use chart_core::{theme, BoundaryMarkers, Chart, ChartConfig, ChartView, Color, Entry, PointChart, TouchPhase};
use chart_render_skia::{RenderOptions, SkiaRenderer};
use chrono::NaiveDate;
use log::{info, warn};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: demo [entries.csv] [theme]
    let mut args = std::env::args().skip(1);
    let csv_path = args.next().filter(|a| a != "-");
    let theme_name = args.next().unwrap_or_else(|| "dark".to_string());

    let entries = match &csv_path {
        Some(p) => load_entries_csv(Path::new(p)).with_context(|| format!("failed to load CSV '{p}'"))?,
        None => sample_entries()?,
    };
    if entries.is_empty() {
        warn!("no entries loaded; output will be background only");
    }
    info!("Loaded {} entries", entries.len());

    let theme = theme::find(&theme_name);
    info!("Using theme '{}'", theme.name);

    let start = date(2024, 3, 14)?;
    let end = date(2024, 7, 14)?;
    let chart = Chart::new(PointChart::default().with_boundary_markers(BoundaryMarkers::months(start, end)))
        .with_config(ChartConfig::default().with_theme(theme))
        .with_entries(entries);

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let out_dir = PathBuf::from("target/out");
    let mut view = ChartView::new(chart);

    let out = out_dir.join("point_chart.png");
    renderer.paint_view_to_png(&mut view, &opts, &out)?;
    info!("Wrote {}", out.display());

    // Tap the highest point, as a host would forward a released touch
    let tap = view.frame().and_then(|frame| {
        let layout = frame.layout()?;
        let entries = view.chart().entries();
        let (i, _) = entries
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.value.total_cmp(&b.1.value))?;
        layout.points.get(i).copied()
    });
    let Some(p) = tap else {
        info!("Nothing to select");
        return Ok(());
    };

    if view.touch(TouchPhase::Released, p.x, p.y) {
        info!("Selected entry {:?}", view.chart().selected());
    }
    if view.needs_repaint() {
        let out_sel = out_dir.join("point_chart_selected.png");
        renderer.paint_view_to_png(&mut view, &opts, &out_sel)?;
        info!("Wrote {}", out_sel.display());
    }
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))
}

fn sample_entries() -> Result<Vec<Entry>> {
    let values = [10.0, 14.0, 16.0, 25.0, 10.0, 15.0, 2.0, 19.0];
    let start = date(2024, 3, 14)?;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let from = start + chrono::Duration::weeks(2 * i as i64);
            let to = from + chrono::Duration::weeks(2);
            Ok(Entry::new(v)
                .with_label(format!("{}", i + 1))
                .with_value_label(format!("{v}"))
                .with_annotation(format!("${}", v * 40.0), "")
                .with_period(from, to)
                .with_color(Color::WHITE)
                .with_text_color(Color::from_argb(127, 255, 255, 255)))
        })
        .collect()
}

fn load_entries_csv(path: &Path) -> Result<Vec<Entry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("Headers: {:?}", headers);

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "date"]);
    let i_value = idx(&["value", "amount", "y"])
        .ok_or_else(|| anyhow::anyhow!("no value column in {}", path.display()))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw = rec.get(i_value).unwrap_or("").trim();
        let Ok(value) = raw.parse::<f64>() else {
            warn!("row {}: skipping unparsable value '{raw}'", row + 1);
            continue;
        };
        let mut entry = Entry::new(value).with_value_label(raw.to_string());
        if let Some(label) = i_label.and_then(|i| rec.get(i)) {
            entry = entry.with_label(label.trim().to_string());
        }
        out.push(entry);
    }
    Ok(out)
}
