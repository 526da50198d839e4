/// Linear year axis for one export run.
///
/// Years count backwards (BC), so `start_year` is normally the larger value
/// and x grows as the year shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineScale {
    pub start_year: i64,
    pub end_year: i64,
    pub pixels_per_year: i64,
}

impl TimelineScale {
    pub const fn new(start_year: i64, end_year: i64, pixels_per_year: i64) -> Self {
        Self {
            start_year,
            end_year,
            pixels_per_year,
        }
    }

    /// Width of the drawn axis in pixels, without margins.
    pub fn axis_width(&self) -> i64 {
        self.start_year
            .saturating_sub(self.end_year)
            .saturating_mul(self.pixels_per_year)
    }
}

impl Default for TimelineScale {
    /// 4004 BC to 400 BC at 2 px per year.
    fn default() -> Self {
        Self::new(4004, 400, 2)
    }
}

/// Fixed pixel dimensions around and inside the lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub left_margin: i64,
    pub right_margin: i64,
    pub top_margin: i64,
    pub bottom_margin: i64,
    /// Height of an event shape; also the diameter of point markers
    pub node_height: i64,
    pub lane_gap: i64,
}

impl Geometry {
    /// Vertical distance between the tops of two adjacent lanes.
    #[inline]
    pub fn lane_stride(&self) -> i64 {
        self.node_height.saturating_add(self.lane_gap)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            left_margin: 120,
            right_margin: 80,
            top_margin: 40,
            bottom_margin: 60,
            node_height: 20,
            lane_gap: 8,
        }
    }
}
