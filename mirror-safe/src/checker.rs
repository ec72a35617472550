use std::fmt;

use tracing::{debug, info};

use crate::beam::{trace, BeamState, BeamTrace};
use crate::crossings::CrossingIndex;
use crate::error::SafeError;
use crate::grid::{Axis, MirrorGrid, Point, Sign, START_POSITION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeCheckResult {
    OpensWithoutInserting,
    CannotBeOpened,
    /// `row` and `col` locate the lexicographically smallest cell out of
    /// `count` cells where one new mirror opens the safe.
    RequiresMirrorInsertion { count: u32, row: u32, col: u32 },
}

impl fmt::Display for SafeCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafeCheckResult::OpensWithoutInserting => write!(f, "0"),
            SafeCheckResult::CannotBeOpened => write!(f, "-1"),
            SafeCheckResult::RequiresMirrorInsertion { count, row, col } => {
                write!(f, "{count} {row} {col}")
            }
        }
    }
}

/// Decides how the safe opens: the beam enters the top-left cell moving right
/// and has to leave the bottom-right cell moving right.
#[derive(Debug, Clone)]
pub struct SafeChecker {
    grid: MirrorGrid,
}

impl SafeChecker {
    pub fn new(
        rows: u32,
        cols: u32,
        left_to_up: &[Point],
        left_to_down: &[Point],
    ) -> Result<Self, SafeError> {
        let grid = MirrorGrid::new(rows, cols, left_to_up, left_to_down)?;
        Ok(Self { grid })
    }

    pub fn grid(&self) -> &MirrorGrid {
        &self.grid
    }

    fn entry(&self) -> BeamState {
        BeamState::new(
            Point::new(START_POSITION, START_POSITION),
            Sign::Positive,
            Axis::Horizontal,
        )
    }

    /// The beam that would have to leave through the detector, followed in
    /// reverse from the bottom-right cell.
    fn exit(&self) -> BeamState {
        BeamState::new(
            Point::new(self.grid.rows(), self.grid.cols()),
            Sign::Negative,
            Axis::Horizontal,
        )
    }

    pub fn trace_forward(&self) -> BeamTrace {
        trace(&self.grid, self.entry())
    }

    pub fn trace_backward(&self) -> BeamTrace {
        trace(&self.grid, self.exit())
    }

    #[tracing::instrument(
        skip(self),
        fields(rows = self.grid.rows(), cols = self.grid.cols(), mirrors = self.grid.len())
    )]
    pub fn check_safe(&self) -> Result<SafeCheckResult, SafeError> {
        let forward = self.trace_forward();
        let target = Point::new(self.grid.rows(), self.grid.cols());
        if forward
            .end
            .is_leaving(target, Sign::Positive, Axis::Horizontal)
        {
            info!("safe opens without inserting a mirror");
            return Ok(SafeCheckResult::OpensWithoutInserting);
        }

        // The forward index and the backward trace only read the grid.
        let (index, backward) = rayon::join(
            || CrossingIndex::new(&forward),
            || self.trace_backward(),
        );
        debug!(
            forward_segments = forward.horizontal.len() + forward.vertical.len(),
            backward_segments = backward.horizontal.len() + backward.vertical.len(),
            "traced both beams"
        );

        let crossings = index.crossings(&self.grid, &backward);
        let Some(&first) = crossings.first() else {
            info!("no crossing cell, safe cannot be opened");
            return Ok(SafeCheckResult::CannotBeOpened);
        };

        let count =
            u32::try_from(crossings.len()).map_err(|_| SafeError::CountOverflow(crossings.len()))?;
        info!(count, first = %first, "safe opens after inserting one mirror");

        Ok(SafeCheckResult::RequiresMirrorInsertion {
            count,
            row: first.row,
            col: first.col,
        })
    }
}
