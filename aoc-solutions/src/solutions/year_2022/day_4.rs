use std::ops::RangeInclusive;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["2022", "intervals"])]
pub struct Solver;

type Section = RangeInclusive<u32>;

fn parse_range(text: &str) -> anyhow::Result<Section> {
    let (lo, hi) = text
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `a-b`, found {:?}", text))?;
    let lo: u32 = lo.parse().with_context(|| format!("bad start {:?}", lo))?;
    let hi: u32 = hi.parse().with_context(|| format!("bad end {:?}", hi))?;
    if lo > hi {
        return Err(anyhow!("range {}-{} is reversed", lo, hi));
    }
    Ok(lo..=hi)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Section, Section)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let pair = || -> anyhow::Result<(Section, Section)> {
                    let (a, b) = line
                        .trim()
                        .split_once(',')
                        .ok_or_else(|| anyhow!("expected two ranges"))?;
                    Ok((parse_range(a)?, parse_range(b)?))
                };
                pair().map_err(|e| ParseError::at_line(line_idx, e))
            })
            .collect()
    }
}

fn contains(outer: &Section, inner: &Section) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &Section, b: &Section) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| contains(a, b) || contains(b, a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|(a, b)| overlaps(a, b)).count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(Solver::parse("4-2,1-1").is_err());
    }
}
