use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

use crate::checker::SafeChecker;
use crate::error::SafeError;
use crate::grid::Point;

/// Upper bounds accepted for puzzle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Largest row or column count.
    pub max_side: u32,
    /// Largest number of mirrors of one orientation.
    pub max_mirrors: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_side: 1_000_000,
            max_mirrors: 200_000,
        }
    }
}

fn at_most(what: &'static str, value: u32, max: u32) -> Result<(), SafeError> {
    if value > max {
        return Err(SafeError::LimitExceeded { what, value, max });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mechanism {
    pub rows: u32,
    pub cols: u32,
    pub left_to_up: Vec<Point>,
    pub left_to_down: Vec<Point>,
}

impl Mechanism {
    pub fn into_checker(self) -> Result<SafeChecker, SafeError> {
        SafeChecker::new(self.rows, self.cols, &self.left_to_up, &self.left_to_down)
    }
}

#[derive(Debug)]
struct RawInput {
    header: [u32; 4],
    coordinates: Vec<u32>,
}

/// `R C M N` followed by `M + N` coordinate pairs. Any whitespace separates
/// the numbers.
fn parser<'a>() -> impl Parser<'a, &'a str, RawInput, extra::Err<Rich<'a, char>>> {
    let number = text::int(10)
        .try_map(|digits: &str, span| {
            digits
                .parse::<u32>()
                .map_err(|e| Rich::custom(span, format!("{digits} is not a valid number: {e}")))
        })
        .padded();

    number
        .clone()
        .then(number.clone())
        .then(number.clone())
        .then(number.clone())
        .map(|(((rows, cols), m), n)| [rows, cols, m, n])
        .then(number.repeated().collect::<Vec<u32>>())
        .then_ignore(end())
        .map(|(header, coordinates)| RawInput {
            header,
            coordinates,
        })
}

fn build(raw: RawInput, limits: &InputLimits) -> Result<Mechanism, SafeError> {
    let [rows, cols, m, n] = raw.header;
    at_most("rows count", rows, limits.max_side)?;
    at_most("columns count", cols, limits.max_side)?;
    at_most("`/` mirrors count", m, limits.max_mirrors)?;
    at_most("`\\` mirrors count", n, limits.max_mirrors)?;

    let expected = 2 * (m as usize + n as usize);
    if raw.coordinates.len() != expected {
        return Err(SafeError::CoordinateCount {
            expected,
            found: raw.coordinates.len(),
        });
    }

    let mut mirrors = raw
        .coordinates
        .into_iter()
        .tuples::<(u32, u32)>()
        .map(|(row, col)| Point::new(row, col));
    let left_to_up = mirrors.by_ref().take(m as usize).collect();
    let left_to_down = mirrors.collect();

    Ok(Mechanism {
        rows,
        cols,
        left_to_up,
        left_to_down,
    })
}

pub fn parse_with_limits(input: &str, limits: &InputLimits) -> Result<Mechanism> {
    let raw = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    Ok(build(raw, limits)?)
}

pub fn parse(input: &str) -> Result<Mechanism> {
    parse_with_limits(input, &InputLimits::default())
}

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn process_with_limits(input: &str, limits: &InputLimits) -> Result<String> {
    let checker = parse_with_limits(input, limits)?.into_checker()?;
    let result = checker.check_safe()?;
    Ok(result.to_string())
}

/// Solves one mechanism description and returns the answer line.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_with_limits(input, &InputLimits::default())
}
