//! Smoothed trend curve through the cumulative series, and its inverse
//! x mapping for pointer hit testing.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::services::SeriesPoint;

/// Floor for the top of the value range, so an all-zero or all-negative
/// series still has a non-empty span.
pub const RANGE_EPSILON: f64 = 1e-6;

/// A position in chart pixel space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel box the trend chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 300.0, 40.0)
    }
}

/// Vertical extent of the plotted values. Zero is always inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .fold((0.0_f64, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self {
            min,
            max: max.max(RANGE_EPSILON),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
}

/// Move-to followed by cubic segments; empty when there is nothing to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SmoothPath {
    pub commands: Vec<PathCommand>,
}

impl SmoothPath {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The on-curve points, in drawing order.
    pub fn anchors(&self) -> Vec<Point> {
        self.commands
            .iter()
            .map(|command| match command {
                PathCommand::MoveTo(point) => *point,
                PathCommand::CubicTo { to, .. } => *to,
            })
            .collect()
    }
}

impl fmt::Display for SmoothPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::CubicTo {
                    control1: c1,
                    control2: c2,
                    to,
                } => write!(
                    f,
                    "C {} {}, {} {}, {} {}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                )?,
            }
        }
        Ok(())
    }
}

/// Maps series values into pixel space.
///
/// x is spaced evenly by index, not by elapsed time; y is inverted so larger
/// values plot higher. Requires at least two points to space them.
pub fn project_points(points: &[SeriesPoint], viewport: &Viewport) -> Vec<Point> {
    if points.len() < 2 {
        trace!(points = points.len(), "too few points to project");
        return Vec::new();
    }
    let range = ValueRange::of(points.iter().map(|p| p.value));
    let last = (points.len() - 1) as f64;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = viewport.padding + (i as f64 / last) * viewport.inner_width();
            let y = viewport.height
                - viewport.padding
                - ((p.value - range.min) / range.span()) * viewport.inner_height();
            Point::new(x, y)
        })
        .collect()
}

/// Builds the smoothed trend curve.
///
/// Each segment's control points share the horizontal midpoint of its two
/// endpoints and take their respective endpoint's y, so the curve passes
/// through every data point.
pub fn build_smooth_path(points: &[SeriesPoint], viewport: &Viewport) -> SmoothPath {
    let coords = project_points(points, viewport);
    let Some(first) = coords.first() else {
        return SmoothPath::default();
    };

    let mut commands = Vec::with_capacity(coords.len());
    commands.push(PathCommand::MoveTo(*first));
    for pair in coords.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let mid_x = (from.x + to.x) / 2.0;
        commands.push(PathCommand::CubicTo {
            control1: Point::new(mid_x, from.y),
            control2: Point::new(mid_x, to.y),
            to,
        });
    }
    SmoothPath { commands }
}

/// Resolves a pointer x coordinate to the nearest series index.
///
/// Inverts the x spacing of [`project_points`], rounds, and clamps to
/// `0..point_count`. Returns `None` only when there are no points.
pub fn locate_nearest_index(
    pointer_x: f64,
    container_width: f64,
    padding: f64,
    point_count: usize,
) -> Option<usize> {
    let last = point_count.checked_sub(1)?;
    if last == 0 {
        return Some(0);
    }
    let inner = container_width - padding * 2.0;
    if inner.is_nan() || inner <= 0.0 {
        // collapsed plot area: split at the centre to stay monotonic
        return Some(if pointer_x <= container_width / 2.0 { 0 } else { last });
    }
    let raw = ((pointer_x - padding) / inner * last as f64).round();
    // NaN casts to 0
    Some(raw.clamp(0.0, last as f64) as usize)
}
