use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        re.captures_iter(input)
            .map(|caps| match &caps[0] {
                "do()" => Ok(Instruction::Do),
                "don't()" => Ok(Instruction::Dont),
                _ => {
                    let line_idx = input[..caps.get(0).map_or(0, |m| m.start())].matches('\n').count();
                    let num = |i: usize| {
                        caps[i]
                            .parse::<u64>()
                            .map_err(|e| ParseError::at_line(line_idx, e))
                    };
                    Ok(Instruction::Mul(num(1)?, num(2)?))
                }
            })
            .collect()
    }
}

/// Sum of products, honouring `do()`/`don't()` only when `conditional`
fn run(program: &[Instruction], conditional: bool) -> u64 {
    let mut enabled = true;
    let mut total = 0;
    for instruction in program {
        match *instruction {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
            Instruction::Mul(a, b) if enabled || !conditional => total += a * b,
            Instruction::Mul(..) => {}
        }
    }
    total
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, true).to_string())
    }
}
