use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["2024", "dp"])]
pub struct Solver;

/// Stone engraving paired with the blinks still to come
type Key = (u64, u8);

/// How many stones a single stone turns into after some blinks
pub struct Blink;

/// Stones produced by one blink
fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

impl DpProblem<Key, u64> for Blink {
    fn deps(&self, &(stone, blinks): &Key) -> Vec<Key> {
        match blinks {
            0 => vec![],
            _ => blink(stone).into_iter().map(|s| (s, blinks - 1)).collect(),
        }
    }

    fn compute(&self, &(_, blinks): &Key, deps: Vec<u64>) -> u64 {
        match blinks {
            0 => 1,
            _ => deps.iter().sum(),
        }
    }
}

/// The initial arrangement plus a stone-count cache shared by both parts
pub struct Stones {
    stones: Vec<u64>,
    counts: DpCache<Key, u64, HashMapBackend<Key, u64>, Blink>,
}

impl Stones {
    fn after(&self, blinks: u8) -> u64 {
        self.stones
            .iter()
            .map(|&stone| self.counts.get(&(stone, blinks)))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Stones;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|e| ParseError::at_line(0, format!("stone `{}`: {}", s, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Stones {
            stones,
            counts: DpCache::with_problem(HashMapBackend::new(), Blink),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.after(25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.after(75).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("125 17\n").unwrap();
        assert_eq!(shared.after(6), 22);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "55312");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "65601038650482");
    }

    #[test]
    fn test_blink_rules() {
        assert_eq!(blink(0), vec![1]);
        assert_eq!(blink(1000), vec![10, 0]);
        assert_eq!(blink(99), vec![9, 9]);
        assert_eq!(blink(1), vec![2024]);
    }
}
