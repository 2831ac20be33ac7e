use std::collections::HashMap;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["2023", "cycles"])]
pub struct Solver;

#[derive(Debug)]
pub struct Network<'a> {
    /// `false` = left, `true` = right
    turns: Vec<bool>,
    names: Vec<&'a str>,
    links: Vec<[usize; 2]>,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim_end().lines();
        let turns = lines
            .next()
            .unwrap_or_default()
            .trim()
            .bytes()
            .map(|b| match b {
                b'L' => Ok(false),
                b'R' => Ok(true),
                _ => Err(ParseError::at_line(0, format!("unknown turn {:?}", b as char))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if turns.is_empty() {
            return Err(ParseError::MissingData("instructions".into()));
        }

        let mut nodes = Vec::new();
        for (line_idx, line) in lines.enumerate().map(|(i, l)| (i + 1, l)) {
            if line.trim().is_empty() {
                continue;
            }
            let parsed = line.split_once(" = ").and_then(|(name, pair)| {
                let (left, right) = pair.trim().strip_prefix('(')?.strip_suffix(')')?.split_once(", ")?;
                Some((name.trim(), left, right))
            });
            nodes.push(parsed.ok_or_else(|| ParseError::at_line(line_idx, "expected `AAA = (BBB, CCC)`"))?);
        }

        let index: HashMap<&str, usize> = nodes.iter().enumerate().map(|(i, n)| (n.0, i)).collect();
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| ParseError::InvalidFormat(format!("unknown node {}", name)))
        };
        let links = nodes
            .iter()
            .map(|(_, left, right)| Ok([lookup(left)?, lookup(right)?]))
            .collect::<Result<_, ParseError>>()?;

        Ok(Network {
            turns,
            names: nodes.iter().map(|n| n.0).collect(),
            links,
        })
    }
}

impl Network<'_> {
    /// Steps from `start` until a node satisfying `is_end`
    fn steps(&self, start: usize, is_end: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        // visiting every (node, turn index) state without an end means a loop
        let limit = self.names.len() * self.turns.len();
        let mut node = start;
        for (step, &right) in self.turns.iter().cycle().enumerate().take(limit + 1) {
            if is_end(self.names[node]) {
                return Ok(step as u64);
            }
            node = self.links[node][right as usize];
        }
        Err(SolveError::NoSolution(format!("{} never reaches an end node", self.names[start])))
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared
            .names
            .iter()
            .position(|&n| n == "AAA")
            .ok_or_else(|| SolveError::NoSolution("no node AAA".into()))?;
        Ok(shared.steps(start, |n| n == "ZZZ")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // each ghost loops back to its first end node, so the cycles line up at the LCM
        let starts: Vec<usize> = (0..shared.names.len())
            .filter(|&i| shared.names[i].ends_with('A'))
            .collect();
        if starts.is_empty() {
            return Err(SolveError::NoSolution("no start nodes ending in A".into()));
        }

        let mut lcm: u64 = 1;
        for start in starts {
            let cycle = shared.steps(start, |n| n.ends_with('Z'))?;
            lcm = (lcm / gcd(lcm, cycle))
                .checked_mul(cycle)
                .ok_or_else(|| SolveError::NoSolution("ghost cycles overflow u64".into()))?;
        }
        Ok(lcm.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example_part1() {
        let mut shared = Solver::parse("LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
    }

    #[test]
    fn test_example_part2() {
        let input = "LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_dangling_link() {
        assert!(Solver::parse("L\n\nAAA = (BBB, AAA)\n").is_err());
    }

    #[test]
    fn test_no_ghost_starts() {
        let mut shared = Solver::parse("L\n\nBBB = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(_))
        ));
    }
}
