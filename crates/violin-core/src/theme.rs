// File: crates/violin-core/src/theme.rs
// Summary: Chart themes: background/grid/label colors plus the categorical fill palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub violin_outline: skia::Color,
    pub quartile: skia::Color,
    pub reference: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 6],
}

impl Theme {
    /// Light preset with faint horizontal grid and a muted categorical palette.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 228),
            axis_line: skia::Color::from_argb(255, 70, 70, 80),
            axis_label: skia::Color::from_argb(255, 40, 40, 48),
            tick: skia::Color::from_argb(255, 90, 90, 100),
            title: skia::Color::from_argb(255, 25, 25, 32),
            violin_outline: skia::Color::from_argb(255, 60, 60, 70),
            quartile: skia::Color::from_argb(220, 45, 45, 52),
            reference: skia::Color::from_argb(180, 211, 47, 47),
            legend_fill: skia::Color::from_argb(235, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 206),
            palette: [
                skia::Color::from_argb(230, 0x48, 0x78, 0xd0), // blue
                skia::Color::from_argb(230, 0xee, 0x85, 0x4a), // orange
                skia::Color::from_argb(230, 0x6a, 0xcc, 0x64), // green
                skia::Color::from_argb(230, 0xd6, 0x5f, 0x5f), // red
                skia::Color::from_argb(230, 0x95, 0x6c, 0xb4), // purple
                skia::Color::from_argb(230, 0x8c, 0x61, 0x3c), // brown
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            violin_outline: skia::Color::from_argb(255, 210, 210, 220),
            quartile: skia::Color::from_argb(220, 235, 235, 245),
            reference: skia::Color::from_argb(200, 255, 99, 99),
            legend_fill: skia::Color::from_argb(230, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 80),
            palette: [
                skia::Color::from_argb(230, 0x64, 0xa0, 0xff),
                skia::Color::from_argb(230, 0xff, 0xa0, 0x5a),
                skia::Color::from_argb(230, 0x6e, 0xd6, 0x6e),
                skia::Color::from_argb(230, 0xe8, 0x6a, 0x6a),
                skia::Color::from_argb(230, 0xb0, 0x88, 0xd8),
                skia::Color::from_argb(230, 0xa8, 0x7a, 0x52),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            violin_outline: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            quartile: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            reference: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            legend_fill: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            palette: [
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xaa, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xaa),
                skia::Color::from_argb(255, 0xaa, 0x88, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            ],
        }
    }

    /// Palette color for category slot `idx`, cycling past the palette length.
    pub fn violin_fill(&self, idx: usize) -> skia::Color {
        self.palette[idx % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::whitegrid(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to whitegrid.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::whitegrid()
}
