// File: crates/violin-core/src/lib.rs
// Summary: Core library entry point; exports dataset synthesis, violin geometry, and rendering API.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod grid;
pub mod kde;
pub mod stats;
pub mod text;
pub mod theme;
pub mod types;
pub mod violin;

pub use axis::{CategoryAxis, ValueAxis};
pub use chart::{Chart, ReferenceLine, RenderError, RenderOptions};
pub use dataset::{synthesize_support_data, Channel, Sample, SampleTable};
pub use kde::{gaussian_kde, DensityProfile};
pub use stats::Quartiles;
pub use text::TextShaper;
pub use theme::Theme;
pub use violin::ViolinSeries;
