use std::collections::HashMap;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 21, tags = ["2022", "expression-tree"])]
pub struct Solver;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy)]
enum Job<'a> {
    Number(i64),
    Op(&'a str, u8, &'a str),
}

#[derive(Debug)]
pub struct Troop<'a> {
    jobs: HashMap<&'a str, Job<'a>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Troop<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut jobs = HashMap::new();
        for (line_idx, line) in input.trim_end().lines().enumerate() {
            let (name, job) = line
                .split_once(": ")
                .ok_or_else(|| ParseError::at_line(line_idx, "expected `name: job`"))?;
            let job = match job.trim().split_whitespace().collect::<Vec<_>>()[..] {
                [number] => Job::Number(
                    number
                        .parse()
                        .map_err(|e| ParseError::at_line(line_idx, e))?,
                ),
                [lhs, op @ ("+" | "-" | "*" | "/"), rhs] => Job::Op(lhs, op.as_bytes()[0], rhs),
                _ => return Err(ParseError::at_line(line_idx, format!("unrecognised job {:?}", job))),
            };
            if jobs.insert(name.trim(), job).is_some() {
                return Err(ParseError::at_line(line_idx, format!("monkey {} listed twice", name)));
            }
        }

        for job in jobs.values() {
            if let Job::Op(lhs, _, rhs) = job {
                if let Some(missing) = [lhs, rhs].into_iter().find(|n| !jobs.contains_key(*n)) {
                    return Err(ParseError::InvalidFormat(format!("unknown monkey {}", missing)));
                }
            }
        }
        if !jobs.contains_key(ROOT) {
            return Err(ParseError::MissingData(format!("monkey {}", ROOT)));
        }
        Ok(Troop { jobs })
    }
}

fn apply(lhs: i64, op: u8, rhs: i64) -> Result<i64, SolveError> {
    let value = match op {
        b'+' => lhs.checked_add(rhs),
        b'-' => lhs.checked_sub(rhs),
        b'*' => lhs.checked_mul(rhs),
        _ => lhs.checked_div(rhs),
    };
    value.ok_or_else(|| SolveError::NoSolution(format!("{} {} {} is not representable", lhs, op as char, rhs)))
}

impl<'a> Troop<'a> {
    fn yell(&self, name: &str) -> Result<i64, SolveError> {
        match self.jobs[name] {
            Job::Number(n) => Ok(n),
            Job::Op(lhs, op, rhs) => apply(self.yell(lhs)?, op, self.yell(rhs)?),
        }
    }

    fn depends_on_human(&self, name: &str) -> bool {
        name == HUMAN
            || match self.jobs[name] {
                Job::Number(_) => false,
                Job::Op(lhs, _, rhs) => self.depends_on_human(lhs) || self.depends_on_human(rhs),
            }
    }

    /// Value `humn` must yell for `name` to yell `target`
    fn solve_for_human(&self, name: &str, target: i64) -> Result<i64, SolveError> {
        if name == HUMAN {
            return Ok(target);
        }
        let Job::Op(lhs, op, rhs) = self.jobs[name] else {
            return Err(SolveError::NoSolution(format!("{} does not depend on {}", name, HUMAN)));
        };
        let unknown_left = self.depends_on_human(lhs);
        let (unknown, known) = if unknown_left {
            (lhs, self.yell(rhs)?)
        } else {
            (rhs, self.yell(lhs)?)
        };
        let inverse = match (op, unknown_left) {
            (b'+', _) => apply(target, b'-', known)?,
            (b'*', _) => {
                if known == 0 || target % known != 0 {
                    return Err(SolveError::NoSolution(format!("{} is not a multiple of {}", target, known)));
                }
                target / known
            }
            // x - k = t
            (b'-', true) => apply(target, b'+', known)?,
            // k - x = t
            (b'-', false) => apply(known, b'-', target)?,
            // x / k = t
            (_, true) => apply(target, b'*', known)?,
            // k / x = t
            (_, false) => apply(known, b'/', target)?,
        };
        self.solve_for_human(unknown, inverse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.yell(ROOT)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Job::Op(lhs, _, rhs) = shared.jobs[ROOT] else {
            return Err(SolveError::NoSolution(format!("{} has no operands", ROOT)));
        };
        if !shared.jobs.contains_key(HUMAN) {
            return Err(SolveError::NoSolution(format!("no {} in the troop", HUMAN)));
        }
        let answer = if shared.depends_on_human(lhs) {
            shared.solve_for_human(lhs, shared.yell(rhs)?)?
        } else {
            shared.solve_for_human(rhs, shared.yell(lhs)?)?
        };
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "152");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "301");
    }

    #[test]
    fn test_unknown_operand() {
        assert!(Solver::parse("root: aaaa + bbbb\naaaa: 1\n").is_err());
    }
}
