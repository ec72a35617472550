use std::collections::BTreeSet;

use crate::beam::{BeamSegment, BeamTrace};
use crate::grid::{MirrorGrid, Point};
use crate::intervals::{index_segments, LineIntervals};

/// Forward beam segments indexed per line, ready to be probed by another beam.
#[derive(Debug, Clone, Default)]
pub struct CrossingIndex {
    rows: LineIntervals,
    cols: LineIntervals,
}

impl CrossingIndex {
    pub fn new(trace: &BeamTrace) -> Self {
        Self {
            rows: index_segments(&trace.horizontal),
            cols: index_segments(&trace.vertical),
        }
    }

    /// Empty cells where a segment of `other` crosses a perpendicular indexed
    /// segment. Cells already holding a mirror are skipped, and a cell found
    /// by both passes is reported once.
    pub fn crossings(&self, grid: &MirrorGrid, other: &BeamTrace) -> BTreeSet<Point> {
        let across_rows = other.horizontal.iter().flat_map(|segment| {
            probe(&self.cols, segment).map(move |col| Point::new(segment.line, col))
        });
        let across_cols = other.vertical.iter().flat_map(|segment| {
            probe(&self.rows, segment).map(move |row| Point::new(row, segment.line))
        });

        across_rows
            .chain(across_cols)
            .filter(|&point| !grid.has_mirror(point))
            .collect()
    }
}

/// Perpendicular lines inside the segment's span whose intervals cover the
/// segment's own line.
fn probe<'a>(
    lines: &'a LineIntervals,
    segment: &'a BeamSegment,
) -> impl Iterator<Item = u32> + 'a {
    lines
        .range(segment.low..=segment.high)
        .filter(|(_, intervals)| intervals.has_intersection(segment.line))
        .map(|(&line, _)| line)
}

pub fn find(
    grid: &MirrorGrid,
    forward: &BeamTrace,
    backward: &BeamTrace,
) -> BTreeSet<Point> {
    CrossingIndex::new(forward).crossings(grid, backward)
}
