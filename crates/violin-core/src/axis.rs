// File: crates/violin-core/src/axis.rs
// Summary: Categorical X axis and numeric value axis models.

/// Ordered category labels along the horizontal axis.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxis {
    pub label: String,
    pub categories: Vec<String>,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>, categories: Vec<String>) -> Self {
        Self { label: label.into(), categories }
    }

    pub fn slot_count(&self) -> usize {
        self.categories.len()
    }
}

/// Numeric value axis (vertical), in data units.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Restrict the visible range to a fixed presentation window.
    pub fn limit(&mut self, lo: f64, hi: f64) {
        self.min = self.min.max(lo);
        self.max = self.max.min(hi);
        if self.max <= self.min {
            self.max = self.min + 1.0;
        }
    }
}
