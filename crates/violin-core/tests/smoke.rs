// File: crates/violin-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use violin_core::dataset::{synthesize_support_data, DEFAULT_SEED};
use violin_core::{Chart, RenderOptions};

#[test]
fn render_smoke_png() {
    let table = synthesize_support_data(DEFAULT_SEED).expect("synthesize");
    let mut chart = Chart::from_table(&table);
    chart.title = "Support response times".to_string();
    chart.add_reference_line(30.0, Some("SLA target: 30 min".to_string()));
    chart.value_axis.limit(0.0, 120.0);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // The output contract: 8 in x 64 dpi = exactly 512x512 pixels.
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(img.width(), 512);
    assert_eq!(img.height(), 512);
}
