use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["2022", "simulation"])]
pub struct Solver;

/// Columns of one round, both as 0, 1 or 2
#[derive(Debug, Clone, Copy)]
pub struct Round {
    opponent: u8,
    column: u8,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| match line.trim().as_bytes() {
                [them @ b'A'..=b'C', b' ', me @ b'X'..=b'Z'] => Ok(Round {
                    opponent: them - b'A',
                    column: me - b'X',
                }),
                _ => Err(ParseError::at_line(line_idx, format!("expected `A X`, found {:?}", line))),
            })
            .collect()
    }
}

/// Shape score (1-3) plus outcome score (0, 3, 6)
fn score(opponent: u8, shape: u8) -> u32 {
    // 0 = loss, 1 = draw, 2 = win
    let outcome = (shape + 4 - opponent) % 3;
    (shape as u32 + 1) + outcome as u32 * 3
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared.iter().map(|r| score(r.opponent, r.column)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|r| score(r.opponent, (r.opponent + r.column + 2) % 3))
            .sum();
        Ok(total.to_string())
    }
}
