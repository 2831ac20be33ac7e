use std::cmp::Ordering;
use std::collections::HashSet;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct Manual {
    /// `(before, after)` page pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Manual {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn in_order(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

fn middle(update: &[u32]) -> u32 {
    update.get(update.len() / 2).copied().unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (rules_src, updates) = input
            .trim_end()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line before updates".into()))?;

        let rules = rules_src
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let (before, after) = line
                    .split_once('|')
                    .ok_or_else(|| ParseError::at_line(line_idx, "expected `X|Y`"))?;
                let page = |s: &str| {
                    s.trim()
                        .parse::<u32>()
                        .map_err(|e| ParseError::at_line(line_idx, e))
                };
                Ok((page(before)?, page(after)?))
            })
            .collect::<Result<HashSet<_>, ParseError>>()?;

        let first_update = rules_src.lines().count() + 1;
        let updates = updates
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.split(',')
                    .map(|page| {
                        page.trim()
                            .parse::<u32>()
                            .map_err(|e| ParseError::at_line(first_update + i, format!("update `{}`: {}", line, e)))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Manual { rules, updates })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let manual: &Manual = shared;
        let sum: u32 = manual
            .updates
            .iter()
            .filter(|update| manual.in_order(update))
            .map(|update| middle(update))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let manual: &Manual = shared;
        let sum: u32 = manual
            .updates
            .iter()
            .filter(|update| !manual.in_order(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|&a, &b| manual.compare(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "143");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "123");
    }

    #[test]
    fn test_missing_updates_section() {
        assert!(matches!(Solver::parse("1|2\n3|4"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_errors_name_input_line() {
        let err = Solver::parse(&EXAMPLE.replace("97|13", "97|x")).unwrap_err();
        assert!(err.to_string().contains("(line 2)"), "{}", err);

        let err = Solver::parse(&EXAMPLE.replace("75,29,13", "75,x,13")).unwrap_err();
        assert!(err.to_string().contains("(line 25)"), "{}", err);
    }
}
