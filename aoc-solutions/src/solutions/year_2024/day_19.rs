use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use rayon::prelude::*;

use crate::utils::dp_cache::{DpCache, VecBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["2024", "dp", "strings"])]
pub struct Solver;

#[derive(Debug)]
pub struct Onsen<'a> {
    towels: Vec<&'a str>,
    designs: Vec<&'a str>,
    /// Arrangement count per design, filled on first use
    arrangements: Option<Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Onsen<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (towels, designs) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line before designs".into()))?;
        let towels: Vec<&str> = towels
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if towels.is_empty() {
            return Err(ParseError::MissingData("towel patterns".into()));
        }
        Ok(Onsen {
            towels,
            designs: designs.lines().map(str::trim).collect(),
            arrangements: None,
        })
    }
}

/// Ways to build `design` from `towels`, memoized over the start of each suffix
fn arrangements(towels: &[&str], design: &str) -> u64 {
    let ways = DpCache::new(
        VecBackend::with_capacity(design.len() + 1),
        |&start: &usize| {
            towels
                .iter()
                .filter(|towel| design[start..].starts_with(*towel))
                .map(|towel| start + towel.len())
                .collect()
        },
        |&start: &usize, suffixes: Vec<u64>| {
            if start == design.len() { 1 } else { suffixes.iter().sum() }
        },
    );
    ways.get(&0)
}

impl Onsen<'_> {
    fn arrangements(&mut self) -> &[u64] {
        let (towels, designs) = (&self.towels, &self.designs);
        self.arrangements.get_or_insert_with(|| {
            designs
                .par_iter()
                .map(|design| arrangements(towels, design))
                .collect()
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared.arrangements().iter().filter(|&&ways| ways > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.arrangements().iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "16");
    }

    #[test]
    fn test_arrangements() {
        let towels = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        assert_eq!(arrangements(&towels, "rrbgbr"), 6);
        assert_eq!(arrangements(&towels, "ubwu"), 0);
    }
}
