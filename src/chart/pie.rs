//! Angular partition of category totals into pie slices on the unit circle.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::trace;

use crate::core::services::CategoryAmount;
use crate::domain::Category;

use super::trend::Point;

/// How a slice is drawn on the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SliceShape {
    /// Zero share; nothing to draw.
    Empty,
    /// The only category: a whole disc instead of a zero-length arc.
    FullCircle,
    /// Wedge from `start` around the rim to `end`, closed through the centre.
    Sector {
        start: Point,
        end: Point,
        large_arc: bool,
    },
}

/// One category's share of the circle, as fractions of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSlice {
    pub category: Category,
    pub amount: f64,
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub color_key: &'static str,
    pub shape: SliceShape,
}

impl PieSlice {
    pub fn fraction(&self) -> f64 {
        self.end_fraction - self.start_fraction
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.shape, SliceShape::Empty)
    }
}

/// Rotation applied when drawing, so fraction 0 sits at 12 o'clock.
pub const PIE_ROTATION_DEGREES: f64 = -90.0;

/// Maps a point on the drawn pie (y down, after the -90 degree rotation) back
/// into the frame slices are built in.
pub fn unrotate_display_point(x: f64, y: f64) -> (f64, f64) {
    (-y, x)
}

/// Point on the unit circle `fraction` of a turn from the positive x axis.
pub fn point_at_fraction(fraction: f64) -> Point {
    let angle = TAU * fraction;
    Point::new(angle.cos(), angle.sin())
}

/// Partitions the circle between the (already sorted) category totals.
///
/// Each slice covers `amount / total` of a turn, starting where the previous
/// one ended. With a positive `total` the last slice ends at exactly one
/// turn. A zero `total` gives zero-width slices that draw nothing.
pub fn build_pie_slices(rows: &[CategoryAmount], total: f64) -> Vec<PieSlice> {
    if rows.len() == 1 && total > 0.0 {
        let row = rows[0];
        return vec![PieSlice {
            category: row.category,
            amount: row.amount,
            start_fraction: 0.0,
            end_fraction: 1.0,
            color_key: row.category.color_key(),
            shape: SliceShape::FullCircle,
        }];
    }

    if total <= 0.0 && !rows.is_empty() {
        trace!(rows = rows.len(), "zero kind total, slices left empty");
    }

    let last = rows.len().saturating_sub(1);
    let mut cumulative = 0.0;
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let fraction = if total > 0.0 { row.amount / total } else { 0.0 };
            let start_fraction = cumulative;
            cumulative += fraction;
            if index == last && total > 0.0 {
                // summed shares can drift past a full turn
                cumulative = 1.0;
            }
            let shape = if fraction > 0.0 {
                SliceShape::Sector {
                    start: point_at_fraction(start_fraction),
                    end: point_at_fraction(cumulative),
                    large_arc: fraction > 0.5,
                }
            } else {
                SliceShape::Empty
            };
            PieSlice {
                category: row.category,
                amount: row.amount,
                start_fraction,
                end_fraction: cumulative,
                color_key: row.category.color_key(),
                shape,
            }
        })
        .collect()
}

/// Finds the slice under a point of the unit-circle plane.
///
/// `x` and `y` are in the unrotated frame: fraction 0 lies on the positive x
/// axis and fractions grow towards positive y. Pointer positions on the drawn
/// pie go through [`unrotate_display_point`] first. Returns the slice index,
/// or `None` outside the disc or when nothing is drawn.
pub fn locate_slice(slices: &[PieSlice], x: f64, y: f64) -> Option<usize> {
    let radius_sq = x * x + y * y;
    if radius_sq.is_nan() || radius_sq > 1.0 {
        return None;
    }
    let fraction = y.atan2(x).rem_euclid(TAU) / TAU;
    let mut last = None;
    for (index, slice) in slices.iter().enumerate() {
        if !slice.is_visible() {
            continue;
        }
        if fraction < slice.end_fraction {
            return Some(index);
        }
        last = Some(index);
    }
    // rounding can leave the last end a hair below 1.0
    last
}
