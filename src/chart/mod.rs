//! Chart geometry engine: plane geometry derived from aggregation output.

pub mod pie;
pub mod render;
pub mod trend;

use serde::Serialize;

use crate::core::services::{CategoryAmount, SeriesPoint};

pub use pie::{
    build_pie_slices, locate_slice, point_at_fraction, unrotate_display_point, PieSlice,
    SliceShape, PIE_ROTATION_DEGREES,
};
pub use trend::{
    build_smooth_path, locate_nearest_index, project_points, PathCommand, Point, SmoothPath,
    ValueRange, Viewport,
};

/// Renderable output for the trend and pie charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub trend_path: SmoothPath,
    pub pie_slices: Vec<PieSlice>,
}

impl ChartGeometry {
    pub fn build(
        series: &[SeriesPoint],
        breakdown: &[CategoryAmount],
        total_for_kind: f64,
        viewport: &Viewport,
    ) -> Self {
        Self {
            trend_path: build_smooth_path(series, viewport),
            pie_slices: build_pie_slices(breakdown, total_for_kind),
        }
    }
}
