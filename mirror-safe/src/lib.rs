pub mod beam;
pub mod checker;
pub mod crossings;
pub mod error;
pub mod grid;
pub mod input;
pub mod intervals;

pub use checker::{SafeCheckResult, SafeChecker};
pub use error::SafeError;
pub use grid::{MirrorOrientation, Point};
pub use input::{process, InputLimits};
