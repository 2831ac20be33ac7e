use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::blocks::blocks;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["2022", "modular-arithmetic"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add(u64),
    Mul(u64),
    Square,
}

impl Operation {
    fn apply(self, old: u64) -> Option<u64> {
        match self {
            Operation::Add(n) => old.checked_add(n),
            Operation::Mul(n) => old.checked_mul(n),
            Operation::Square => old.checked_mul(old),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

/// Text following `prefix` on `line`
fn field<'a>(line: Option<&'a str>, prefix: &str) -> anyhow::Result<&'a str> {
    let line = line.ok_or_else(|| anyhow!("missing `{}` line", prefix))?.trim();
    line.strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| anyhow!("expected `{}`, found {:?}", prefix, line))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let mut lines = block.lines().skip(1);

    let items = field(lines.next(), "Starting items:")?
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<u64>().context("bad worry level"))
        .collect::<anyhow::Result<_>>()?;

    let operation = match field(lines.next(), "Operation: new = old")?.split_once(' ') {
        Some(("*", "old")) => Operation::Square,
        Some(("*", n)) => Operation::Mul(n.parse().context("bad multiplier")?),
        Some(("+", n)) => Operation::Add(n.parse().context("bad addend")?),
        _ => return Err(anyhow!("unsupported operation")),
    };

    let divisor: u64 = field(lines.next(), "Test: divisible by")?
        .parse()
        .context("bad divisor")?;
    if divisor == 0 {
        return Err(anyhow!("divisor must be positive"));
    }
    let if_true = field(lines.next(), "If true: throw to monkey")?
        .parse()
        .context("bad target")?;
    let if_false = field(lines.next(), "If false: throw to monkey")?
        .parse()
        .context("bad target")?;

    Ok(Monkey {
        items,
        operation,
        divisor,
        if_true,
        if_false,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let monkeys = blocks(&input)
            .enumerate()
            .map(|(idx, (first_line, block))| {
                parse_monkey(block).map_err(|e| ParseError::at_line(first_line, format!("monkey {}: {}", idx, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(m) = monkeys.iter().find(|m| m.if_true >= monkeys.len() || m.if_false >= monkeys.len()) {
            return Err(ParseError::InvalidFormat(format!(
                "throw target out of range: {} / {}",
                m.if_true, m.if_false
            )));
        }
        Ok(monkeys)
    }
}

/// Product of the two highest inspection counts
fn monkey_business(monkeys: &[Monkey], rounds: usize, relief: bool) -> Result<u64, SolveError> {
    let overflow = || SolveError::NoSolution("worry level overflows u64".into());
    let mut monkeys = monkeys.to_vec();
    let modulus = monkeys
        .iter()
        .try_fold(1u64, |acc, m| acc.checked_mul(m.divisor))
        .ok_or_else(overflow)?;
    let mut inspected = vec![0u64; monkeys.len()];

    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspected[i] += items.len() as u64;
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[i];
            for item in items {
                let mut worry = operation.apply(item).ok_or_else(overflow)?;
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }

    inspected.sort_unstable_by(|a, b| b.cmp(a));
    Ok(inspected.iter().take(2).product())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 20, true)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 10_000, false)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 4);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "10605");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2713310158");
    }

    #[test]
    fn test_bad_target() {
        let bad = EXAMPLE.replace("throw to monkey 1\n", "throw to monkey 7\n");
        assert!(Solver::parse(&bad).is_err());
    }

    #[test]
    fn test_errors_name_input_line() {
        let bad = EXAMPLE.replace("divisible by 13", "divisible by x");
        let err = Solver::parse(&bad).unwrap_err();
        assert!(err.to_string().contains("(line 15) monkey 2"), "{}", err);
    }

    #[test]
    fn test_worry_overflow_reported() {
        let input = "Monkey 0:
  Starting items: 4294967296
  Operation: new = old * old
  Test: divisible by 3
    If true: throw to monkey 0
    If false: throw to monkey 0
";
        let mut shared = Solver::parse(input).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
