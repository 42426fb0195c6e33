//! Renders chart geometry as SVG documents using the `svg` crate.

use svg::{
    node::element::{path::Data, Circle, Group, Line, Path},
    Document,
};

use super::{
    pie::{PieSlice, SliceShape, PIE_ROTATION_DEGREES},
    trend::{PathCommand, Point, SmoothPath, Viewport},
};

const TREND_STROKE: &str = "#6366f1";
const FALLBACK_FILL: &str = "#94a3b8";
const STROKE_WIDTH: f64 = 3.0;

fn xy(point: Point) -> (f32, f32) {
    (point.x as f32, point.y as f32)
}

/// Converts a smooth path into SVG path data.
pub fn trend_data(path: &SmoothPath) -> Data {
    path.commands
        .iter()
        .fold(Data::new(), |data, command| match command {
            PathCommand::MoveTo(p) => data.move_to(xy(*p)),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                let (c1x, c1y) = xy(*control1);
                let (c2x, c2y) = xy(*control2);
                let (x, y) = xy(*to);
                data.cubic_curve_to((c1x, c1y, c2x, c2y, x, y))
            }
        })
}

/// Wedge outline for a sector slice; `None` for empty or full-circle slices.
pub fn sector_data(slice: &PieSlice) -> Option<Data> {
    match slice.shape {
        SliceShape::Sector {
            start,
            end,
            large_arc,
        } => {
            let (ex, ey) = xy(end);
            let large = if large_arc { 1.0_f32 } else { 0.0 };
            Some(
                Data::new()
                    .move_to(xy(start))
                    .elliptical_arc_to((1.0_f32, 1.0_f32, 0.0_f32, large, 1.0_f32, ex, ey))
                    .line_to((0.0_f32, 0.0_f32))
                    .close(),
            )
        }
        SliceShape::Empty | SliceShape::FullCircle => None,
    }
}

/// Trend chart with a zero baseline and an optional hover marker.
pub fn render_trend(path: &SmoothPath, viewport: &Viewport, marker: Option<Point>) -> Document {
    let baseline_y = viewport.height - viewport.padding;
    let baseline = Line::new()
        .set("x1", viewport.padding)
        .set("x2", viewport.width - viewport.padding)
        .set("y1", baseline_y)
        .set("y2", baseline_y)
        .set("stroke", "#cbd5e1")
        .set("stroke-width", 1);

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, viewport.width, viewport.height))
        .add(baseline);

    if !path.is_empty() {
        document = document.add(
            Path::new()
                .set("fill", "none")
                .set("stroke", TREND_STROKE)
                .set("stroke-width", STROKE_WIDTH)
                .set("stroke-linecap", "round")
                .set("d", trend_data(path)),
        );
    }
    if let Some(point) = marker {
        document = document.add(
            Circle::new()
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", 6)
                .set("fill", TREND_STROKE),
        );
    }
    document
}

/// Pie chart on the unit square centred at the origin, first slice at
/// 12 o'clock.
pub fn render_pie(slices: &[PieSlice]) -> Document {
    let rotated = Group::new().set("transform", format!("rotate({PIE_ROTATION_DEGREES})"));
    let group = slices.iter().fold(rotated, |group, slice| {
        let fill = if slice.color_key.is_empty() {
            FALLBACK_FILL
        } else {
            slice.color_key
        };
        match slice.shape {
            SliceShape::Empty => group,
            SliceShape::FullCircle => group.add(
                Circle::new()
                    .set("cx", 0)
                    .set("cy", 0)
                    .set("r", 1)
                    .set("fill", fill),
            ),
            SliceShape::Sector { .. } => match sector_data(slice) {
                Some(data) => group.add(Path::new().set("fill", fill).set("d", data)),
                None => group,
            },
        }
    });
    Document::new().set("viewBox", (-1, -1, 2, 2)).add(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::pie::build_pie_slices;
    use crate::core::services::CategoryAmount;
    use crate::domain::Category;

    #[test]
    fn empty_path_renders_only_the_baseline() {
        let doc = render_trend(&SmoothPath::default(), &Viewport::default(), None).to_string();
        assert!(doc.contains("<line"));
        assert!(!doc.contains("<path"));
    }

    #[test]
    fn single_category_pie_renders_a_circle() {
        let rows = [CategoryAmount {
            category: Category::Food,
            amount: 10.0,
        }];
        let doc = render_pie(&build_pie_slices(&rows, 10.0)).to_string();
        assert!(doc.contains("<circle"));
        assert!(doc.contains(Category::Food.color_key()));
        assert!(!doc.contains("<path"));
    }

    #[test]
    fn sectors_render_as_paths() {
        let rows = [
            CategoryAmount {
                category: Category::Food,
                amount: 30.0,
            },
            CategoryAmount {
                category: Category::Gift,
                amount: 10.0,
            },
        ];
        let doc = render_pie(&build_pie_slices(&rows, 40.0)).to_string();
        assert_eq!(doc.matches("<path").count(), 2);
    }

    #[test]
    fn pie_is_turned_to_start_at_the_top() {
        let rows = [
            CategoryAmount {
                category: Category::Housing,
                amount: 3.0,
            },
            CategoryAmount {
                category: Category::Food,
                amount: 1.0,
            },
        ];
        let doc = render_pie(&build_pie_slices(&rows, 4.0)).to_string();
        assert!(doc.contains("<g"));
        assert!(doc.contains("transform=\"rotate(-90)\""));
        assert_eq!(doc.matches("<path").count(), 2);
    }
}
