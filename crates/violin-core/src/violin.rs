// File: crates/violin-core/src/violin.rs
// Summary: Per-category violin series: density profile plus inner quartiles.

use crate::kde::{gaussian_kde, DensityProfile};
use crate::stats::{quartiles, Quartiles};

/// Grid resolution of each violin's density profile.
pub const KDE_GRID_POINTS: usize = 128;

/// One category's worth of data, ready to render: the raw values, their
/// density profile, and the quartile summary for the inner lines.
#[derive(Clone, Debug)]
pub struct ViolinSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub profile: Option<DensityProfile>,
    pub quartiles: Option<Quartiles>,
}

impl ViolinSeries {
    pub fn from_values(label: impl Into<String>, values: Vec<f64>) -> Self {
        let profile = gaussian_kde(&values, KDE_GRID_POINTS);
        let quartiles = quartiles(&values);
        Self { label: label.into(), values, profile, quartiles }
    }

    /// Observed [min, max] of the underlying values, if any are finite.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min.is_finite() { Some((min, max)) } else { None }
    }

    /// Normalized half-width of the violin at value `v`, in [0, 1].
    /// 1.0 is the widest point of this violin (per-violin normalization, so
    /// every category reaches the same maximum width).
    pub fn half_width_at(&self, v: f64) -> f64 {
        match &self.profile {
            Some(p) if p.max_density > 0.0 => p.density_at(v) / p.max_density,
            _ => 0.0,
        }
    }
}
