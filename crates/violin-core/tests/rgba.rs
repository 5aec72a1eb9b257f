// File: crates/violin-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use violin_core::{Chart, RenderOptions, ViolinSeries};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.add_violin(ViolinSeries::from_values(
        "A",
        (0..50).map(|i| 10.0 + (i % 9) as f64).collect(),
    ));
    chart.autoscale_value_axis();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w, 512);
    assert_eq!(h, 512);
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}
