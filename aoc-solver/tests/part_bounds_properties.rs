//! Property-based tests for part range checking

use aoc_solver::{AocParser, DynSolver, ParseError, SolveError, Solver, SolverExt, SolverInstance};
use proptest::prelude::*;

/// Solver answering `partN` for any part it is asked about
struct EchoSolver<const N: u8>;

impl<const N: u8> AocParser for EchoSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for EchoSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked<const N: u8>(part: u8) -> Result<String, SolveError> {
    EchoSolver::<N>::solve_part_checked_range(&mut (), part)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parts outside `1..=PARTS` are rejected with the offending part number.
    #[test]
    fn prop_out_of_range_rejection(parts in 1u8..=3, part in 0u8..=255) {
        let result = match parts {
            1 => checked::<1>(part),
            2 => checked::<2>(part),
            _ => checked::<3>(part),
        };

        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// The type-erased instance applies the same range check.
    #[test]
    fn prop_instance_matches_checked_dispatch(part in 0u8..=4) {
        let mut instance = SolverInstance::<EchoSolver<2>>::new(2022, 1, "").unwrap();
        let erased = instance.solve(part).map(|r| r.answer);
        let direct = checked::<2>(part);

        prop_assert_eq!(erased.is_ok(), direct.is_ok());
        if let (Ok(a), Ok(b)) = (erased, direct) {
            prop_assert_eq!(a, b);
        }
    }
}

#[test]
fn test_instance_metadata() {
    let instance = SolverInstance::<EchoSolver<1>>::new(2024, 25, "ignored").unwrap();

    assert_eq!(instance.year(), 2024);
    assert_eq!(instance.day(), 25);
    assert_eq!(instance.parts(), 1);
    assert!(instance.parse_duration().num_microseconds().unwrap() >= 0);
}

#[test]
fn test_solve_result_duration_is_non_negative() {
    let mut instance = SolverInstance::<EchoSolver<2>>::new(2024, 1, "").unwrap();
    let result = instance.solve(2).unwrap();

    assert_eq!(result.answer, "part2");
    assert!(result.duration() >= chrono::TimeDelta::zero());
}
