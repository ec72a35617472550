use miette::Diagnostic;
use thiserror::Error;

use crate::grid::Point;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SafeError {
    #[error("incorrect rows count: {0}")]
    #[diagnostic(code(mirror_safe::grid::rows), help("the grid needs at least one row"))]
    InvalidRows(u32),

    #[error("incorrect columns count: {0}")]
    #[diagnostic(
        code(mirror_safe::grid::columns),
        help("the grid needs at least one column")
    )]
    InvalidColumns(u32),

    #[error("mirror at {point} lies outside the {rows}x{cols} grid")]
    #[diagnostic(
        code(mirror_safe::grid::out_of_bounds),
        help("rows and columns are 1-based")
    )]
    MirrorOutOfBounds { point: Point, rows: u32, cols: u32 },

    #[error("{what} is {value}, expected at most {max}")]
    #[diagnostic(code(mirror_safe::input::limit))]
    LimitExceeded {
        what: &'static str,
        value: u32,
        max: u32,
    },

    #[error("expected {expected} mirror coordinates, found {found}")]
    #[diagnostic(
        code(mirror_safe::input::coordinates),
        help("every mirror is given as a `row column` pair")
    )]
    CoordinateCount { expected: usize, found: usize },

    #[error("{0} crossing points do not fit the result counter")]
    #[diagnostic(
        code(mirror_safe::internal::count_overflow),
        help("this is a bug in the crossing search, not an input problem")
    )]
    CountOverflow(usize),
}
