use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["2023", "hashing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
enum Operation {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    text: &'a str,
    label: &'a str,
    op: Operation,
}

/// Holiday ASCII String Helper
fn hash(text: &str) -> usize {
    text.bytes().fold(0, |acc, b| (acc + b as usize) * 17 % 256)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|text| {
                let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
                let (label, op) = if let Some(label) = text.strip_suffix('-') {
                    (label, Operation::Remove)
                } else {
                    let (label, focal) = text
                        .split_once('=')
                        .ok_or_else(|| ParseError::at_line(0, format!("bad step {:?}", text)))?;
                    let focal = focal
                        .parse::<u8>()
                        .ok()
                        .filter(|f| (1..=9).contains(f))
                        .ok_or_else(|| ParseError::at_line(0, format!("bad focal length in {:?}", text)))?;
                    (label, Operation::Insert(focal))
                };
                Ok(Step { text, label, op })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|s| hash(s.text)).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
        for step in shared.iter() {
            let lenses = &mut boxes[hash(step.label)];
            let slot = lenses.iter().position(|(label, _)| *label == step.label);
            match (step.op, slot) {
                (Operation::Remove, Some(i)) => {
                    lenses.remove(i);
                }
                (Operation::Remove, None) => {}
                (Operation::Insert(focal), Some(i)) => lenses[i].1 = focal,
                (Operation::Insert(focal), None) => lenses.push((step.label, focal)),
            }
        }

        let power: usize = boxes
            .iter()
            .enumerate()
            .flat_map(|(b, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal as usize)
            })
            .sum();
        Ok(power.to_string())
    }
}
