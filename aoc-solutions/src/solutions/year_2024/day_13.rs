use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

use crate::utils::blocks::blocks;
use crate::utils::coord::Point2;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["2024", "math"])]
pub struct Solver;

const PRESS_LIMIT: i64 = 100;
const PRIZE_OFFSET: i64 = 10_000_000_000_000;
const A_COST: i64 = 3;
const B_COST: i64 = 1;

#[derive(Debug, Clone, Copy)]
pub struct Machine {
    a: Point2,
    b: Point2,
    prize: Point2,
}

impl Machine {
    /// Cheapest token cost via Cramer's rule
    ///
    /// Only whole, non-negative press counts within `limit` count.
    /// Parallel buttons have no unique answer and are treated as unwinnable.
    fn tokens(&self, limit: Option<i64>) -> Option<i64> {
        let det = self.a.x * self.b.y - self.a.y * self.b.x;
        if det == 0 {
            return None;
        }
        let a = self.prize.x * self.b.y - self.prize.y * self.b.x;
        let b = self.a.x * self.prize.y - self.a.y * self.prize.x;
        if a % det != 0 || b % det != 0 {
            return None;
        }
        let (a, b) = (a / det, b / det);
        let within = |n: i64| n >= 0 && limit.is_none_or(|limit| n <= limit);
        (within(a) && within(b)).then_some(a * A_COST + b * B_COST)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(
            r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
        )
        .map_err(|e| ParseError::Other(e.to_string()))?;

        let mut machines = Vec::new();
        for (first_line, block) in blocks(input) {
            let caps = re
                .captures(block)
                .ok_or_else(|| ParseError::at_line(first_line, "expected a claw machine"))?;
            let num = |i: usize| {
                caps[i]
                    .parse::<i64>()
                    .map_err(|e| ParseError::at_line(first_line, e))
            };
            machines.push(Machine {
                a: Point2::new(num(1)?, num(2)?),
                b: Point2::new(num(3)?, num(4)?),
                prize: Point2::new(num(5)?, num(6)?),
            });
        }
        Ok(machines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tokens: i64 = shared
            .iter()
            .filter_map(|m| m.tokens(Some(PRESS_LIMIT)))
            .sum();
        Ok(tokens.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let offset = Point2::new(PRIZE_OFFSET, PRIZE_OFFSET);
        let tokens: i64 = shared
            .iter()
            .filter_map(|m| {
                Machine {
                    prize: m.prize + offset,
                    ..*m
                }
                .tokens(None)
            })
            .sum();
        Ok(tokens.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "480");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "875318608908");
    }

    #[test]
    fn test_first_machine() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared[0].tokens(Some(PRESS_LIMIT)), Some(280));
        assert_eq!(shared[1].tokens(Some(PRESS_LIMIT)), None);
    }

    #[test]
    fn test_parallel_buttons_unwinnable() {
        let machine = Machine {
            a: Point2::new(1, 1),
            b: Point2::new(2, 2),
            prize: Point2::new(4, 4),
        };
        assert_eq!(machine.tokens(None), None);
    }

    #[test]
    fn test_errors_name_input_line() {
        let err = Solver::parse(&EXAMPLE.replace("Prize: X=7870", "Prize: X=?")).unwrap_err();
        assert!(err.to_string().contains("(line 9)"), "{}", err);
    }
}
