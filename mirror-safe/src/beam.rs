use crate::grid::{Axis, MirrorGrid, MirrorOrientation, Point, Sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamState {
    pub position: Point,
    pub sign: Sign,
    pub axis: Axis,
}

impl BeamState {
    pub const fn new(position: Point, sign: Sign, axis: Axis) -> Self {
        Self {
            position,
            sign,
            axis,
        }
    }

    /// Turns the beam on a mirror. Both orientations swap the axis; `/` also
    /// reverses the sign (rightward becomes upward, downward becomes leftward).
    pub fn reflect(&mut self, mirror: MirrorOrientation) {
        self.axis = self.axis.turned();
        if mirror == MirrorOrientation::LeftToUp {
            self.sign = self.sign.flipped();
        }
    }

    pub fn is_leaving(&self, position: Point, sign: Sign, axis: Axis) -> bool {
        self.position == position && self.sign == sign && self.axis == axis
    }
}

/// A straight run of a beam. `line` is the row of a horizontal segment or the
/// column of a vertical one; `low..=high` spans the other coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamSegment {
    pub line: u32,
    pub low: u32,
    pub high: u32,
}

impl BeamSegment {
    pub fn new(line: u32, from: u32, to: u32) -> Self {
        Self {
            line,
            low: from.min(to),
            high: from.max(to),
        }
    }

    pub fn contains(&self, offset: u32) -> bool {
        (self.low..=self.high).contains(&offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeamTrace {
    /// State on the last cell, just before the beam leaves the grid.
    pub end: BeamState,
    pub horizontal: Vec<BeamSegment>,
    pub vertical: Vec<BeamSegment>,
}

impl BeamTrace {
    pub fn segments(&self, axis: Axis) -> &[BeamSegment] {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

/// Follows a beam from `start` until it leaves the grid.
///
/// A mirror on the start cell turns the beam before it moves. After that
/// every step jumps straight to the next mirror ahead (or to the edge) and
/// records the segment it covered.
pub fn trace(grid: &MirrorGrid, start: BeamState) -> BeamTrace {
    let mut state = start;
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();

    if let Some(mirror) = grid.orientation(state.position) {
        state.reflect(mirror);
    }

    loop {
        let (line, from) = state.position.split(state.axis);
        let next = grid.next_mirror(state.axis, line, from, state.sign);
        let to = next.map_or_else(|| grid.edge(state.axis, state.sign), |(at, _)| at);

        let segment = BeamSegment::new(line, from, to);
        match state.axis {
            Axis::Horizontal => horizontal.push(segment),
            Axis::Vertical => vertical.push(segment),
        }
        state.position = state.position.moved_to(state.axis, to);

        match next {
            Some((_, mirror)) => state.reflect(mirror),
            None => break,
        }
    }

    tracing::trace!(
        horizontal = horizontal.len(),
        vertical = vertical.len(),
        end = %state.position,
        "beam left the grid"
    );

    BeamTrace {
        end: state,
        horizontal,
        vertical,
    }
}
