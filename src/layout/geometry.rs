//! Year/lane to pixel mapping.
//!
//! All coordinates are integer pixels. Nothing is clipped: years outside the
//! scale map outside the drawn axis and it is up to the caller to keep data
//! in range.

use crate::types::{Event, Geometry, TimelineScale};

/// Horizontal gap between a shape and its label.
pub const LABEL_GAP: i64 = 6;
/// Corner radius of ranged event bars.
pub const CORNER_RADIUS: i64 = 6;

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i64,
    pub height: i64,
}

/// Drawn shape for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Point event marker
    Circle { cx: i64, cy: i64, r: i64 },
    /// Ranged event bar
    RoundedRect {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        rx: i64,
    },
}

/// Shape plus the baseline anchor of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventGeometry {
    pub shape: Shape,
    pub label_x: i64,
    pub label_y: i64,
}

/// Scale and geometry bound together for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineLayout {
    pub scale: TimelineScale,
    pub geometry: Geometry,
}

impl TimelineLayout {
    pub fn new(scale: TimelineScale, geometry: Geometry) -> Self {
        Self { scale, geometry }
    }

    /// Horizontal pixel position of `year`.
    ///
    /// Saturates at the `i64` bounds for years far outside the scale.
    #[inline]
    pub fn year_to_x(&self, year: i64) -> i64 {
        self.scale
            .start_year
            .saturating_sub(year)
            .saturating_mul(self.scale.pixels_per_year)
            .saturating_add(self.geometry.left_margin)
    }

    /// Inverse of [`Self::year_to_x`]. A partial year maps to the year whose
    /// pixel span contains `x`. Returns `None` for a zero scale factor.
    pub fn x_to_year(&self, x: i64) -> Option<i64> {
        x.saturating_sub(self.geometry.left_margin)
            .checked_div_euclid(self.scale.pixels_per_year)
            .map(|years| self.scale.start_year.saturating_sub(years))
    }

    /// Top edge of `lane`.
    #[inline]
    pub fn lane_to_y(&self, lane: usize) -> i64 {
        let lane = i64::try_from(lane).unwrap_or(i64::MAX);
        self.geometry.top_margin + lane.saturating_mul(self.geometry.lane_stride())
    }

    /// Total height of the lane area; an empty layout still reserves one lane.
    pub fn track_height(&self, lane_count: usize) -> i64 {
        let lanes = i64::try_from(lane_count.max(1)).unwrap_or(i64::MAX);
        lanes.saturating_mul(self.geometry.lane_stride())
    }

    /// Canvas size for `lane_count` lanes.
    pub fn canvas_size(&self, lane_count: usize) -> CanvasSize {
        let g = &self.geometry;
        CanvasSize {
            width: g
                .left_margin
                .saturating_add(self.scale.axis_width())
                .saturating_add(g.right_margin),
            height: g
                .top_margin
                .saturating_add(self.track_height(lane_count))
                .saturating_add(g.bottom_margin),
        }
    }

    /// Shape and label anchor for a placed event.
    pub fn event_geometry(&self, event: &Event) -> EventGeometry {
        let node = self.geometry.node_height;
        let x = self.year_to_x(event.start_year);
        let y = self.lane_to_y(event.lane);

        if event.is_point() {
            let r = node / 2;
            let cy = y.saturating_add(r);
            EventGeometry {
                shape: Shape::Circle {
                    cx: x.saturating_add(r),
                    cy,
                    r,
                },
                label_x: x.saturating_add(node).saturating_add(LABEL_GAP),
                label_y: cy.saturating_add(4),
            }
        } else {
            let end_x = self.year_to_x(event.end_year);
            let left = x.min(end_x);
            let width = x.saturating_sub(end_x).saturating_abs().max(node);
            EventGeometry {
                shape: Shape::RoundedRect {
                    x: left,
                    y,
                    width,
                    height: node,
                    rx: CORNER_RADIUS,
                },
                label_x: left.saturating_add(width).saturating_add(LABEL_GAP),
                label_y: y.saturating_add(node).saturating_sub(6),
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn layout() -> TimelineLayout {
        TimelineLayout::default()
    }

    #[test_case(4004, 120; "scale start sits on the left margin")]
    #[test_case(400, 7328; "scale end sits at the axis end")]
    #[test_case(3000, 2128; "inside the axis")]
    #[test_case(5000, -1872; "before the scale is not clipped")]
    #[test_case(-100, 8328; "after the scale is not clipped")]
    fn test_year_to_x(year: i64, expected: i64) {
        assert_eq!(layout().year_to_x(year), expected);
    }

    #[test]
    fn test_year_to_x_is_linear() {
        let l = layout();
        for (a, b) in [(4004, 400), (3000, 2999), (1500, 2000), (-50, 120)] {
            let dx = (l.year_to_x(a) - l.year_to_x(b)).abs();
            assert_eq!(dx, (a - b).abs() * l.scale.pixels_per_year);
        }
    }

    #[test]
    fn test_x_to_year_inverts_year_to_x() {
        let l = layout();
        for year in [4004, 3000, 1446, 400, -20] {
            assert_eq!(l.x_to_year(l.year_to_x(year)), Some(year));
        }
        let flat = TimelineLayout::new(TimelineScale::new(4004, 400, 0), Geometry::default());
        assert_eq!(flat.x_to_year(500), None);
    }

    #[test_case(2128, 3000; "on a year boundary")]
    #[test_case(2129, 3000; "inside a year span")]
    #[test_case(119, 4005; "left of the margin")]
    #[test_case(117, 4006; "further left of the margin")]
    fn test_x_to_year_partial_pixels(x: i64, expected: i64) {
        assert_eq!(layout().x_to_year(x), Some(expected));
    }

    #[test]
    fn test_extreme_years_saturate() {
        let l = layout();
        assert_eq!(l.year_to_x(-5_000_000_000_000_000_000), i64::MAX);
        assert_eq!(l.year_to_x(5_000_000_000_000_000_000), i64::MIN + 120);
        assert_eq!(l.year_to_x(i64::MIN), i64::MAX);
    }

    #[test]
    fn test_extreme_events_have_geometry() {
        let l = layout();

        let far = l.event_geometry(&Event::point("Far", -5_000_000_000_000_000_000));
        assert_eq!(far.label_x, i64::MAX);

        let huge = l.event_geometry(&Event::new("Huge", 5_000_000_000_000_000_000, 0));
        let Shape::RoundedRect { x, width, .. } = huge.shape else {
            panic!("expected a bar, got {:?}", huge.shape);
        };
        assert_eq!(x, i64::MIN + 120);
        assert_eq!(width, i64::MAX);
    }

    #[test]
    fn test_lane_to_y() {
        let l = layout();
        assert_eq!(l.lane_to_y(0), 40);
        assert_eq!(l.lane_to_y(3), 40 + 3 * 28);
    }

    #[test]
    fn test_canvas_size() {
        let l = layout();
        assert_eq!(
            l.canvas_size(2),
            CanvasSize {
                width: 120 + 7208 + 80,
                height: 40 + 56 + 60,
            }
        );
    }

    #[test]
    fn test_canvas_height_reserves_one_lane_when_empty() {
        let l = layout();
        assert_eq!(l.canvas_size(0), l.canvas_size(1));
    }

    #[test]
    fn test_point_event_is_circle() {
        let geom = layout().event_geometry(&Event::point("Flood", 3000));
        assert_eq!(
            geom.shape,
            Shape::Circle {
                cx: 2138,
                cy: 50,
                r: 10,
            }
        );
        assert_eq!((geom.label_x, geom.label_y), (2154, 54));
    }

    #[test]
    fn test_ranged_event_spans_both_years() {
        let mut event = Event::new("Kingdom A", 2000, 1500);
        event.lane = 1;
        let geom = layout().event_geometry(&event);
        assert_eq!(
            geom.shape,
            Shape::RoundedRect {
                x: 4128,
                y: 68,
                width: 1000,
                height: 20,
                rx: 6,
            }
        );
        assert_eq!((geom.label_x, geom.label_y), (5134, 82));
    }

    #[test]
    fn test_reversed_range_starts_at_leftmost_year() {
        let forward = layout().event_geometry(&Event::new("Span", 2000, 1500));
        let reversed = layout().event_geometry(&Event::new("Span", 1500, 2000));
        assert_eq!(forward.shape, reversed.shape);
    }

    #[test]
    fn test_short_range_has_minimum_width() {
        let geom = layout().event_geometry(&Event::new("Brief", 1001, 1000));
        let Shape::RoundedRect { width, .. } = geom.shape else {
            panic!("expected a bar, got {:?}", geom.shape);
        };
        assert_eq!(width, 20);
    }
}
