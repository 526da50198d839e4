/// One timeline entry from the events sheet.
///
/// `start_year` and `end_year` are stored exactly as read; either may be the
/// larger one. Use [`Event::lo`] and [`Event::hi`] for the normalized span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub start_year: i64,
    pub end_year: i64,
    /// Lane index, only meaningful after [`crate::layout::assign_lanes`] ran
    pub lane: usize,
}

impl Event {
    /// Create an unplaced event (lane 0).
    pub fn new(title: impl Into<String>, start_year: i64, end_year: i64) -> Self {
        Self {
            title: title.into(),
            start_year,
            end_year,
            lane: 0,
        }
    }

    /// Create a point event, where start and end are the same year.
    pub fn point(title: impl Into<String>, year: i64) -> Self {
        Self::new(title, year, year)
    }

    /// Lower bound of the closed year interval.
    #[inline]
    pub fn lo(&self) -> i64 {
        self.start_year.min(self.end_year)
    }

    /// Upper bound of the closed year interval.
    #[inline]
    pub fn hi(&self) -> i64 {
        self.start_year.max(self.end_year)
    }

    /// True when the event covers a single year.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start_year == self.end_year
    }

    /// Closed-interval overlap test against `[lo, hi]`.
    ///
    /// Touching endpoints count as overlapping.
    #[inline]
    pub fn overlaps(&self, lo: i64, hi: i64) -> bool {
        !(self.hi() < lo || hi < self.lo())
    }
}
