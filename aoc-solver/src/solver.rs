//! Parse-once, solve-per-part traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on
///
/// `SharedData` may borrow from the input (`&'a str` slices) or own it, and
/// may carry caches that one part fills in for the next.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split("\n\n")
///             .map(|elf| {
///                 elf.lines()
///                     .map(|l| l.parse::<u32>().map_err(|e| ParseError::InvalidFormat(e.to_string())))
///                     .sum::<Result<u32, ParseError>>()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Calories::parse("1\n2\n\n4").unwrap(), vec![3, 4]);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer for part `N` of a puzzle
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Calories {
///     fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         elves
///             .iter()
///             .max()
///             .map(u32::to_string)
///             .ok_or_else(|| SolveError::NoSolution("no elves".into()))
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A puzzle with `PARTS` answerable parts
///
/// Normally derived with `#[derive(AocSolver)]`, which routes part `k` to
/// `PartSolver<k>`. A hand-written impl looks like:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Snafu;
///
/// impl AocParser for Snafu {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Snafu {
///     const PARTS: u8 = 1;
///
///     fn solve_part(numbers: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(numbers.len().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Answer `part`; callers normally go through [`SolverExt`] instead
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Part dispatch with the `1..=PARTS` bound enforced
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if !(1..=Self::PARTS).contains(&part) {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
