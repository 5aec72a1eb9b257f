// File: crates/violin-core/src/chart.rs
// Summary: Chart model and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use thiserror::Error;

use crate::axis::{CategoryAxis, ValueAxis};
use crate::dataset::{Channel, SampleTable, MAX_RESPONSE_MIN};
use crate::grid::ticks;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, DPI, FIG_HEIGHT_IN, FIG_WIDTH_IN};
use crate::violin::ViolinSeries;

/// Widest point of a violin as a fraction of its category slot.
const VIOLIN_SLOT_FILL: f32 = 0.8;
/// Target number of horizontal gridline intervals.
const GRID_TICK_TARGET: usize = 6;

/// Renderer-internal failure points; everything else is a filesystem error
/// and propagates unmodified.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    Surface,
    #[error("PNG encoding failed")]
    EncodePng,
    #[error("reading pixels back from surface failed")]
    ReadPixels,
}

pub struct RenderOptions {
    /// Figure size in physical units; pixel size is `size * dpi`.
    pub fig_width_in: f32,
    pub fig_height_in: f32,
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable for font-independent deterministic output (snapshots).
    pub draw_labels: bool,
}

impl RenderOptions {
    pub fn width_px(&self) -> i32 {
        (self.fig_width_in * self.dpi).round() as i32
    }

    pub fn height_px(&self) -> i32 {
        (self.fig_height_in * self.dpi).round() as i32
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fig_width_in: FIG_WIDTH_IN,
            fig_height_in: FIG_HEIGHT_IN,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::whitegrid(),
            draw_labels: true,
        }
    }
}

/// Dashed horizontal guide across the full category axis (e.g. an SLA target).
#[derive(Clone, Debug)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: Option<String>,
}

pub struct Chart {
    pub title: String,
    pub violins: Vec<ViolinSeries>,
    pub category_axis: CategoryAxis,
    pub value_axis: ValueAxis,
    pub reference_lines: Vec<ReferenceLine>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            violins: Vec::new(),
            category_axis: CategoryAxis::new("Category", Vec::new()),
            value_axis: ValueAxis::new("Value", 0.0, 1.0),
            reference_lines: Vec::new(),
        }
    }

    /// One violin per support channel, categories in display order.
    pub fn from_table(table: &SampleTable) -> Self {
        let mut chart = Chart::new();
        chart.category_axis.label = "Channel".to_string();
        for channel in Channel::ALL {
            chart.add_violin(ViolinSeries::from_values(channel.label(), table.values_for(channel)));
        }
        chart.value_axis = ValueAxis::new("Response time (min)", 0.0, MAX_RESPONSE_MIN);
        chart.autoscale_value_axis();
        chart
    }

    /// Adding a violin also appends its category slot.
    pub fn add_violin(&mut self, violin: ViolinSeries) {
        self.category_axis.categories.push(violin.label.clone());
        self.violins.push(violin);
    }

    pub fn add_reference_line(&mut self, value: f64, label: Option<String>) {
        self.reference_lines.push(ReferenceLine { value, label });
    }

    /// Fit the value axis to the data (and reference lines) with a 2% margin.
    pub fn autoscale_value_axis(&mut self) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in &self.violins {
            if let Some((lo, hi)) = v.value_range() {
                min = min.min(lo);
                max = max.max(hi);
            }
        }
        for r in &self.reference_lines {
            min = min.min(r.value);
            max = max.max(r.value);
        }
        if !min.is_finite() || !max.is_finite() {
            self.value_axis.min = 0.0;
            self.value_axis.max = 1.0;
            return;
        }
        if (max - min).abs() < 1e-9 {
            max = min + 1.0;
        }
        let margin = (max - min) * 0.02;
        self.value_axis.min = min - margin;
        self.value_axis.max = max + margin;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = make_surface(opts)?;
        self.draw_scene(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::EncodePng)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = make_surface(opts)?;
        self.draw_scene(surface.canvas(), opts);

        let (w, h) = (opts.width_px(), opts.height_px());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels.into());
        }
        Ok((pixels, w, h, stride))
    }

    fn draw_scene(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Paddings & plot rect
        let l = opts.insets.left as i32;
        let r = opts.width_px() - opts.insets.right as i32;
        let t = opts.insets.top as i32;
        let b = opts.height_px() - opts.insets.bottom as i32;
        if r <= l || b <= t {
            return;
        }

        let tick_values = ticks(self.value_axis.min, self.value_axis.max, GRID_TICK_TARGET);

        draw_grid(canvas, l, t, r, b, &self.value_axis, &tick_values, theme);
        draw_axis_lines(canvas, l, t, r, b, theme);

        // Violin bodies, inner quartiles, and guides stay inside the plot rect
        // (the presentation window may cut tall violins).
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(l as f32, t as f32, r as f32, b as f32),
            None,
            true,
        );
        let slots = self.category_axis.slot_count().max(1);
        for (idx, violin) in self.violins.iter().enumerate() {
            draw_violin_body(canvas, l, t, r, b, &self.value_axis, violin, idx, slots, theme);
            draw_quartile_lines(canvas, l, t, r, b, &self.value_axis, violin, idx, slots, theme);
        }
        draw_reference_lines(canvas, l, t, r, b, &self.value_axis, &self.reference_lines, theme);
        canvas.restore();

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(canvas, l, t, r, b, self, &tick_values, opts, &shaper);
            draw_legend(canvas, t, r, &self.reference_lines, theme, &shaper);
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn make_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width_px(), opts.height_px()))
        .ok_or_else(|| RenderError::Surface.into())
}

/// Map a data value to a screen Y inside [t, b].
fn value_to_y(axis: &ValueAxis, t: i32, b: i32, v: f64) -> f32 {
    b as f32 - ((v - axis.min) / axis.span()) as f32 * (b - t) as f32
}

fn draw_grid(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    axis: &ValueAxis,
    tick_values: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // Horizontal gridlines only: the X axis is categorical.
    for &v in tick_values {
        let y = value_to_y(axis, t, b, v);
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

/// Center X of category slot `idx` out of `slots`.
fn slot_center(l: i32, r: i32, idx: usize, slots: usize) -> f32 {
    let slot_w = (r - l) as f32 / slots as f32;
    l as f32 + (idx as f32 + 0.5) * slot_w
}

fn draw_violin_body(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    axis: &ValueAxis,
    violin: &ViolinSeries,
    idx: usize,
    slots: usize,
    theme: &Theme,
) {
    let profile = match &violin.profile {
        Some(p) if p.max_density > 0.0 && p.grid.len() >= 2 => p,
        _ => return,
    };

    let cx = slot_center(l, r, idx, slots);
    let slot_w = (r - l) as f32 / slots as f32;
    let half_max = slot_w * 0.5 * VIOLIN_SLOT_FILL;

    // Mirror the density curve around the slot center line: up the right
    // flank, back down the left.
    let mut builder = skia::PathBuilder::new();
    let n = profile.grid.len();
    for i in 0..n {
        let w = (profile.density[i] / profile.max_density) as f32 * half_max;
        let y = value_to_y(axis, t, b, profile.grid[i]);
        if i == 0 {
            builder.move_to((cx + w, y));
        } else {
            builder.line_to((cx + w, y));
        }
    }
    for i in (0..n).rev() {
        let w = (profile.density[i] / profile.max_density) as f32 * half_max;
        let y = value_to_y(axis, t, b, profile.grid[i]);
        builder.line_to((cx - w, y));
    }
    builder.close();
    let path = builder.detach();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.violin_fill(idx));
    canvas.draw_path(&path, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.2);
    stroke.set_color(theme.violin_outline);
    canvas.draw_path(&path, &stroke);
}

/// Inner quartile lines, clipped to the violin's width at their height.
fn draw_quartile_lines(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    axis: &ValueAxis,
    violin: &ViolinSeries,
    idx: usize,
    slots: usize,
    theme: &Theme,
) {
    let q = match violin.quartiles {
        Some(q) => q,
        None => return,
    };

    let cx = slot_center(l, r, idx, slots);
    let slot_w = (r - l) as f32 / slots as f32;
    let half_max = slot_w * 0.5 * VIOLIN_SLOT_FILL;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_color(theme.quartile);
    if let Some(dash) = skia::PathEffect::dash(&[3.0, 3.0], 0.0) {
        paint.set_path_effect(dash);
    }

    for (v, width) in [(q.q1, 1.0), (q.median, 1.8), (q.q3, 1.0)] {
        let half = violin.half_width_at(v) as f32 * half_max;
        if half <= 0.0 {
            continue;
        }
        let y = value_to_y(axis, t, b, v);
        paint.set_stroke_width(width);
        canvas.draw_line((cx - half, y), (cx + half, y), &paint);
    }
}

fn draw_reference_lines(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    axis: &ValueAxis,
    lines: &[ReferenceLine],
    theme: &Theme,
) {
    if lines.is_empty() {
        return;
    }

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);
    paint.set_color(theme.reference);
    if let Some(dash) = skia::PathEffect::dash(&[7.0, 5.0], 0.0) {
        paint.set_path_effect(dash);
    }

    for line in lines {
        let y = value_to_y(axis, t, b, line.value);
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    chart: &Chart,
    tick_values: &[f64],
    opts: &RenderOptions,
    shaper: &TextShaper,
) {
    let theme = &opts.theme;

    // Value-axis tick labels, flush right against the axis.
    for &v in tick_values {
        let y = value_to_y(&chart.value_axis, t, b, v);
        shaper.draw_right(canvas, &format_tick(v), l as f32 - 6.0, y + 4.0, 10.0, theme.tick, true);
    }

    // Category labels under their slots.
    let slots = chart.category_axis.slot_count().max(1);
    for (idx, cat) in chart.category_axis.categories.iter().enumerate() {
        let cx = slot_center(l, r, idx, slots);
        shaper.draw_centered(canvas, cat, cx, b as f32 + 18.0, 11.5, theme.axis_label);
    }

    // Axis titles.
    let mid_x = (l + r) as f32 * 0.5;
    shaper.draw_centered(canvas, &chart.category_axis.label, mid_x, b as f32 + 42.0, 12.5, theme.axis_label);
    let mid_y = (t + b) as f32 * 0.5;
    shaper.draw_vertical(canvas, &chart.value_axis.label, 16.0, mid_y, 12.5, theme.axis_label);

    // Chart title across the top strip.
    if !chart.title.is_empty() {
        shaper.draw_title(canvas, &chart.title, opts.width_px() as f32 * 0.5, 26.0, 14.5, theme.title);
    }
}

/// Small legend for labeled reference lines, upper right inside the plot.
fn draw_legend(
    canvas: &skia::Canvas,
    t: i32,
    r: i32,
    lines: &[ReferenceLine],
    theme: &Theme,
    shaper: &TextShaper,
) {
    let entries: Vec<&ReferenceLine> = lines.iter().filter(|l| l.label.is_some()).collect();
    if entries.is_empty() {
        return;
    }

    let text_size = 10.5f32;
    let sample_w = 20.0f32;
    let pad = 7.0f32;
    let row_h = 16.0f32;

    let max_text_w = entries
        .iter()
        .filter_map(|e| e.label.as_deref())
        .map(|s| shaper.measure_width(s, text_size, false))
        .fold(0.0f32, f32::max);
    let box_w = pad + sample_w + 6.0 + max_text_w + pad;
    let box_h = pad + entries.len() as f32 * row_h + pad - 4.0;
    let x1 = r as f32 - box_w - 8.0;
    let y1 = t as f32 + 8.0;
    let rect = skia::Rect::from_xywh(x1, y1, box_w, box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    let mut sample = skia::Paint::default();
    sample.set_anti_alias(true);
    sample.set_style(skia::paint::Style::Stroke);
    sample.set_stroke_width(1.5);
    sample.set_color(theme.reference);
    if let Some(dash) = skia::PathEffect::dash(&[5.0, 3.0], 0.0) {
        sample.set_path_effect(dash);
    }

    for (i, entry) in entries.iter().enumerate() {
        let cy = y1 + pad + i as f32 * row_h + row_h * 0.35;
        canvas.draw_line((x1 + pad, cy), (x1 + pad + sample_w, cy), &sample);
        if let Some(label) = entry.label.as_deref() {
            shaper.draw_left(canvas, label, x1 + pad + sample_w + 6.0, cy + 4.0, text_size, theme.axis_label, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_yield_512_square() {
        let opts = RenderOptions::default();
        assert_eq!(opts.width_px(), 512);
        assert_eq!(opts.height_px(), 512);
    }

    #[test]
    fn add_violin_tracks_categories() {
        let mut chart = Chart::new();
        chart.add_violin(ViolinSeries::from_values("A", vec![1.0, 2.0]));
        chart.add_violin(ViolinSeries::from_values("B", vec![3.0, 4.0]));
        assert_eq!(chart.category_axis.categories, vec!["A", "B"]);
        assert_eq!(chart.violins.len(), chart.category_axis.slot_count());
    }

    #[test]
    fn autoscale_covers_data_and_reference_lines() {
        let mut chart = Chart::new();
        chart.add_violin(ViolinSeries::from_values("A", vec![10.0, 40.0]));
        chart.add_reference_line(90.0, None);
        chart.autoscale_value_axis();
        assert!(chart.value_axis.min <= 10.0);
        assert!(chart.value_axis.max >= 90.0);
    }

    #[test]
    fn autoscale_with_no_data_falls_back_to_unit_range() {
        let mut chart = Chart::new();
        chart.autoscale_value_axis();
        assert_eq!(chart.value_axis.min, 0.0);
        assert_eq!(chart.value_axis.max, 1.0);
    }

    #[test]
    fn tick_formatting_drops_trailing_zeroes() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(2.5), "2.5");
    }
}
