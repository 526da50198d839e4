//! Greedy first-fit lane packing.
//!
//! Events are visited oldest first (largest start year, then largest end
//! year, then title ignoring case) and dropped into the lowest lane whose
//! placed intervals they do not touch. The visiting order is what makes the
//! result reproducible, so it is part of the contract.

use std::cmp::Reverse;

use crate::types::Event;

/// Placed `[lo, hi]` intervals, one list per lane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneSet {
    lanes: Vec<Vec<(i64, i64)>>,
}

impl LaneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lanes opened so far.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Intervals placed in `lane`, in placement order.
    pub fn intervals(&self, lane: usize) -> &[(i64, i64)] {
        self.lanes.get(lane).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Place `event` in the first lane it fits, opening a new lane if needed.
    ///
    /// Returns the lane index.
    pub fn place(&mut self, event: &Event) -> usize {
        let span = (event.lo(), event.hi());
        let free = self.lanes.iter().position(|placed| {
            placed
                .iter()
                .all(|&(lo, hi)| !event.overlaps(lo, hi))
        });

        match free.and_then(|idx| self.lanes.get_mut(idx).map(|lane| (idx, lane))) {
            Some((idx, lane)) => {
                lane.push(span);
                idx
            }
            None => {
                self.lanes.push(vec![span]);
                self.lanes.len() - 1
            }
        }
    }
}

/// Key used to visit events during packing: latest start first, then
/// latest end, then title ignoring case.
pub fn packing_key(event: &Event) -> (Reverse<i64>, Reverse<i64>, String) {
    (
        Reverse(event.start_year),
        Reverse(event.end_year),
        event.title.to_lowercase(),
    )
}

/// Indices into `events` in packing order.
///
/// Keys are computed once per event. The sort is stable, so full ties keep
/// their extraction order.
pub fn packing_order(events: &[Event]) -> Vec<usize> {
    let mut keyed: Vec<(usize, _)> = events.iter().map(packing_key).enumerate().collect();
    keyed.sort_by(|(_, a), (_, b)| a.cmp(b));
    keyed.into_iter().map(|(idx, _)| idx).collect()
}

/// Assign a lane to every event and return the number of lanes used.
///
/// Events keep their position in the slice; only `lane` is written.
/// An empty slice uses zero lanes.
pub fn assign_lanes(events: &mut [Event]) -> usize {
    let mut lanes = LaneSet::new();

    for idx in packing_order(events) {
        if let Some(event) = events.get_mut(idx) {
            event.lane = lanes.place(event);
        }
    }

    tracing::debug!(events = events.len(), lanes = lanes.len(), "assigned lanes");
    lanes.len()
}
