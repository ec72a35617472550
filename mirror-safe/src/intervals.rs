use std::collections::BTreeMap;

use crate::beam::BeamSegment;

/// Closed intervals on a single row or column, keyed by their high end.
///
/// A coordinate is covered iff the first interval ending at or after it also
/// starts at or before it. Segments of one beam on one line never nest, so
/// probing only that nearest interval is enough.
#[derive(Debug, Clone, Default)]
pub struct SegmentIntervals {
    ends: BTreeMap<u32, u32>,
}

impl SegmentIntervals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoints may come in either order.
    pub fn add_segment(&mut self, start: u32, end: u32) {
        let (low, high) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        self.ends
            .entry(high)
            .and_modify(|stored| *stored = (*stored).min(low))
            .or_insert(low);
    }

    pub fn has_intersection(&self, position: u32) -> bool {
        self.ends
            .range(position..)
            .next()
            .is_some_and(|(_, &low)| low <= position)
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }
}

/// Interval indexes for every line a beam touched, keyed by line coordinate.
pub type LineIntervals = BTreeMap<u32, SegmentIntervals>;

pub fn index_segments(segments: &[BeamSegment]) -> LineIntervals {
    let mut lines = LineIntervals::new();
    for segment in segments {
        lines
            .entry(segment.line)
            .or_default()
            .add_segment(segment.low, segment.high);
    }
    lines
}
