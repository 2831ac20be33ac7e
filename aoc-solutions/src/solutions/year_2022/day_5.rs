use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["2022", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub struct Cargo {
    /// Bottom crate first
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

fn parse_drawing(drawing: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let mut lines: Vec<(usize, &str)> = drawing
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    let (_, labels) = lines
        .pop()
        .ok_or_else(|| ParseError::MissingData("crate drawing".into()))?;
    let stack_count = labels.split_whitespace().count();
    let mut stacks = vec![Vec::new(); stack_count];

    for &(line_idx, line) in lines.iter().rev() {
        let row = line.as_bytes();
        for (i, stack) in stacks.iter_mut().enumerate() {
            match row.get(1 + 4 * i) {
                Some(c) if c.is_ascii_uppercase() => stack.push(*c),
                Some(b' ') | None => {}
                Some(c) => {
                    return Err(ParseError::at_line(
                        line_idx,
                        format!("unexpected crate {:?}", *c as char),
                    ));
                }
            }
        }
    }
    Ok(stacks)
}

fn parse_move(line: &str, stack_count: usize) -> anyhow::Result<Move> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let [_, count, _, from, _, to] = words[..] else {
        return Err(anyhow!("expected `move n from a to b`"));
    };
    let count = count.parse().context("bad count")?;
    let from: usize = from.parse().context("bad source stack")?;
    let to: usize = to.parse().context("bad target stack")?;
    for stack in [from, to] {
        if !(1..=stack_count).contains(&stack) {
            return Err(anyhow!("stack {} does not exist", stack));
        }
    }
    Ok(Move {
        count,
        from: from - 1,
        to: to - 1,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Cargo;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (drawing, procedure) = input
            .trim_end()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line between drawing and moves".into()))?;

        let stacks = parse_drawing(drawing)?;
        // moves start after the drawing and the blank separator
        let first_move = drawing.lines().count() + 1;
        let moves = procedure
            .lines()
            .enumerate()
            .map(|(i, line)| {
                parse_move(line, stacks.len()).map_err(|e| ParseError::at_line(first_move + i, e))
            })
            .collect::<Result<_, _>>()?;

        Ok(Cargo { stacks, moves })
    }
}

/// Run the procedure and read the top crates; `batch` moves a whole pile at once
fn rearrange(cargo: &Cargo, batch: bool) -> Result<String, SolveError> {
    let mut stacks = cargo.stacks.clone();
    for m in &cargo.moves {
        let source = &mut stacks[m.from];
        if source.len() < m.count {
            return Err(SolveError::NoSolution(format!(
                "cannot move {} crates from stack {} holding {}",
                m.count,
                m.from + 1,
                source.len()
            )));
        }
        let mut pile = source.split_off(source.len() - m.count);
        if !batch {
            pile.reverse();
        }
        stacks[m.to].extend(pile);
    }
    Ok(stacks
        .iter()
        .filter_map(|s| s.last().map(|&c| c as char))
        .collect())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2\n",
    );

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "CMZ");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "MCD");
    }

    #[test]
    fn test_trailing_spaces_optional() {
        let trimmed = EXAMPLE.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");
        let mut shared = Solver::parse(&trimmed).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "CMZ");
    }

    #[test]
    fn test_unknown_stack_rejected() {
        let bad = EXAMPLE.replace("move 1 from 1 to 2", "move 1 from 1 to 9");
        assert!(Solver::parse(&bad).is_err());
    }

    #[test]
    fn test_errors_name_input_line() {
        let err = Solver::parse("[A] [B]\n 1   2 \n\nmove 1 from 1 to 2\nmove x from 1 to 2\n").unwrap_err();
        assert!(err.to_string().contains("(line 5)"), "{}", err);

        let err = Solver::parse("[A] [b]\n 1   2 \n\nmove 1 from 1 to 2\n").unwrap_err();
        assert!(err.to_string().contains("(line 1)"), "{}", err);
    }
}
