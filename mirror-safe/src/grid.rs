use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound::{Excluded, Unbounded};

use crate::error::SafeError;

/// First row and column of the grid. Coordinates are 1-based.
pub const START_POSITION: u32 = 1;

/// A cell on the grid. Ordering is row-major, so the smallest point of a set
/// is also the lexicographically smallest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: u32,
    pub col: u32,
}

impl Point {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Coordinate of the line this point sits on when travelling along `axis`.
    fn line(self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.row,
            Axis::Vertical => self.col,
        }
    }

    /// Coordinate of this point along `axis`.
    fn offset(self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.col,
            Axis::Vertical => self.row,
        }
    }

    /// Same line, new offset along `axis`.
    pub(crate) fn moved_to(self, axis: Axis, offset: u32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(self.row, offset),
            Axis::Vertical => Self::new(offset, self.col),
        }
    }

    pub(crate) fn split(self, axis: Axis) -> (u32, u32) {
        (self.line(axis), self.offset(axis))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorOrientation {
    /// `/`
    LeftToUp,
    /// `\`
    LeftToDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn turned(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Travel direction along an axis. Rightward and downward are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Mirrors of a single row or column, keyed by the perpendicular coordinate.
pub type MirrorLine = BTreeMap<u32, MirrorOrientation>;

/// Every mirror of the mechanism, stored twice: once per row and once per
/// column. Both tables are filled together and never touched afterwards.
#[derive(Debug, Clone)]
pub struct MirrorGrid {
    rows: u32,
    cols: u32,
    by_row: BTreeMap<u32, MirrorLine>,
    by_col: BTreeMap<u32, MirrorLine>,
}

impl MirrorGrid {
    /// Builds the index. `left_to_down` is applied after `left_to_up`, so a
    /// cell listed in both ends up holding a `LeftToDown` mirror.
    pub fn new(
        rows: u32,
        cols: u32,
        left_to_up: &[Point],
        left_to_down: &[Point],
    ) -> Result<Self, SafeError> {
        if rows < START_POSITION {
            return Err(SafeError::InvalidRows(rows));
        }
        if cols < START_POSITION {
            return Err(SafeError::InvalidColumns(cols));
        }

        let mut grid = Self {
            rows,
            cols,
            by_row: BTreeMap::new(),
            by_col: BTreeMap::new(),
        };

        // Validate everything up front so a failed build never leaves
        // half-filled tables behind.
        for &point in left_to_up.iter().chain(left_to_down) {
            grid.check_bounds(point)?;
        }

        let placed = left_to_up
            .iter()
            .map(|&p| (p, MirrorOrientation::LeftToUp))
            .chain(
                left_to_down
                    .iter()
                    .map(|&p| (p, MirrorOrientation::LeftToDown)),
            );
        for (point, orientation) in placed {
            grid.by_row
                .entry(point.row)
                .or_default()
                .insert(point.col, orientation);
            grid.by_col
                .entry(point.col)
                .or_default()
                .insert(point.row, orientation);
        }

        Ok(grid)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    fn check_bounds(&self, point: Point) -> Result<(), SafeError> {
        let rows_ok = (START_POSITION..=self.rows).contains(&point.row);
        let cols_ok = (START_POSITION..=self.cols).contains(&point.col);
        if rows_ok && cols_ok {
            Ok(())
        } else {
            Err(SafeError::MirrorOutOfBounds {
                point,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn orientation(&self, point: Point) -> Option<MirrorOrientation> {
        self.by_row.get(&point.row)?.get(&point.col).copied()
    }

    pub fn has_mirror(&self, point: Point) -> bool {
        self.orientation(point).is_some()
    }

    /// Mirrors on the line a beam travelling along `axis` would follow:
    /// a row for horizontal travel, a column for vertical travel.
    pub fn line(&self, axis: Axis, line: u32) -> Option<&MirrorLine> {
        match axis {
            Axis::Horizontal => self.by_row.get(&line),
            Axis::Vertical => self.by_col.get(&line),
        }
    }

    /// Nearest mirror strictly ahead of `from` on the given line.
    pub fn next_mirror(
        &self,
        axis: Axis,
        line: u32,
        from: u32,
        sign: Sign,
    ) -> Option<(u32, MirrorOrientation)> {
        let mirrors = self.line(axis, line)?;
        let found = match sign {
            Sign::Positive => mirrors.range((Excluded(from), Unbounded)).next(),
            Sign::Negative => mirrors.range(..from).next_back(),
        };
        found.map(|(&at, &orientation)| (at, orientation))
    }

    /// Last cell a beam reaches on its line before leaving the grid.
    pub fn edge(&self, axis: Axis, sign: Sign) -> u32 {
        match (axis, sign) {
            (_, Sign::Negative) => START_POSITION,
            (Axis::Horizontal, Sign::Positive) => self.cols,
            (Axis::Vertical, Sign::Positive) => self.rows,
        }
    }

    pub fn len(&self) -> usize {
        self.by_row.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_row.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn sample() -> MirrorGrid {
        MirrorGrid::new(
            5,
            6,
            &[Point::new(2, 3)],
            &[
                Point::new(1, 2),
                Point::new(2, 5),
                Point::new(4, 2),
                Point::new(5, 5),
            ],
        )
        .expect("sample grid is valid")
    }

    #[test]
    fn both_tables_agree() {
        let grid = sample();
        assert_eq!(grid.len(), 5);
        for (&row, line) in &grid.by_row {
            for (&col, &orientation) in line {
                assert_eq!(grid.by_col[&col][&row], orientation);
            }
        }
        let col_count: usize = grid.by_col.values().map(BTreeMap::len).sum();
        assert_eq!(col_count, grid.len());
    }

    #[test]
    fn looks_up_orientation() {
        let grid = sample();
        assert_eq!(
            grid.orientation(Point::new(2, 3)),
            Some(MirrorOrientation::LeftToUp)
        );
        assert_eq!(
            grid.orientation(Point::new(5, 5)),
            Some(MirrorOrientation::LeftToDown)
        );
        assert!(!grid.has_mirror(Point::new(3, 3)));
        assert!(!grid.has_mirror(Point::new(2, 4)));
    }

    #[rstest]
    #[case(Axis::Horizontal, 2, 1, Sign::Positive, Some((3, MirrorOrientation::LeftToUp)))]
    #[case(Axis::Horizontal, 2, 3, Sign::Positive, Some((5, MirrorOrientation::LeftToDown)))]
    #[case(Axis::Horizontal, 2, 5, Sign::Positive, None)]
    #[case(Axis::Horizontal, 2, 5, Sign::Negative, Some((3, MirrorOrientation::LeftToUp)))]
    #[case(Axis::Horizontal, 2, 3, Sign::Negative, None)]
    #[case(Axis::Horizontal, 3, 1, Sign::Positive, None)]
    #[case(Axis::Vertical, 2, 1, Sign::Positive, Some((4, MirrorOrientation::LeftToDown)))]
    #[case(Axis::Vertical, 5, 5, Sign::Negative, Some((2, MirrorOrientation::LeftToDown)))]
    #[case(Axis::Vertical, 5, 2, Sign::Negative, None)]
    fn finds_nearest_mirror_ahead(
        #[case] axis: Axis,
        #[case] line: u32,
        #[case] from: u32,
        #[case] sign: Sign,
        #[case] expected: Option<(u32, MirrorOrientation)>,
    ) {
        assert_eq!(sample().next_mirror(axis, line, from, sign), expected);
    }

    #[test]
    fn edges_follow_direction() {
        let grid = sample();
        assert_eq!(grid.edge(Axis::Horizontal, Sign::Positive), 6);
        assert_eq!(grid.edge(Axis::Vertical, Sign::Positive), 5);
        assert_eq!(grid.edge(Axis::Horizontal, Sign::Negative), 1);
        assert_eq!(grid.edge(Axis::Vertical, Sign::Negative), 1);
    }

    #[test]
    fn later_orientation_wins() {
        let cell = Point::new(2, 2);
        let grid = MirrorGrid::new(3, 3, &[cell], &[cell]).expect("valid grid");
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.orientation(cell), Some(MirrorOrientation::LeftToDown));
        assert_eq!(
            grid.next_mirror(Axis::Vertical, 2, 1, Sign::Positive),
            Some((2, MirrorOrientation::LeftToDown))
        );
    }

    #[rstest]
    #[case(0, 1, SafeError::InvalidRows(0))]
    #[case(1, 0, SafeError::InvalidColumns(0))]
    #[case(0, 0, SafeError::InvalidRows(0))]
    fn rejects_empty_grid(#[case] rows: u32, #[case] cols: u32, #[case] expected: SafeError) {
        assert_eq!(MirrorGrid::new(rows, cols, &[], &[]).unwrap_err(), expected);
    }

    #[rstest]
    #[case(Point::new(0, 1))]
    #[case(Point::new(7, 1))]
    #[case(Point::new(1, 0))]
    #[case(Point::new(1, 6))]
    fn rejects_mirrors_off_the_grid(#[case] point: Point) {
        let expected = SafeError::MirrorOutOfBounds {
            point,
            rows: 6,
            cols: 5,
        };
        assert_eq!(
            MirrorGrid::new(6, 5, &[point], &[]).unwrap_err(),
            expected
        );
        assert_eq!(
            MirrorGrid::new(6, 5, &[], &[point]).unwrap_err(),
            expected
        );
    }
}
