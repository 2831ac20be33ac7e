use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["2022", "bitset"])]
pub struct Solver;

fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some((item - b'a') as u32 + 1),
        b'A'..=b'Z' => Some((item - b'A') as u32 + 27),
        _ => None,
    }
}

/// Set of priorities present, bit `p` for priority `p`
fn item_set(items: &[u8]) -> u64 {
    items
        .iter()
        .filter_map(|&b| priority(b))
        .fold(0, |set, p| set | 1 << p)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let line = line.trim().as_bytes();
                if line.len() % 2 != 0 {
                    return Err(ParseError::at_line(line_idx, "rucksack has an odd number of items"));
                }
                if let Some(&bad) = line.iter().find(|&&b| priority(b).is_none()) {
                    return Err(ParseError::at_line(line_idx, format!("invalid item {:?}", bad as char)));
                }
                Ok(line)
            })
            .collect()
    }
}

fn single_priority(set: u64) -> Result<u32, SolveError> {
    if set.count_ones() == 1 {
        Ok(set.trailing_zeros())
    } else {
        Err(SolveError::NoSolution(format!("expected one shared item, found {}", set.count_ones())))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for rucksack in shared.iter() {
            let (left, right) = rucksack.split_at(rucksack.len() / 2);
            total += single_priority(item_set(left) & item_set(right))?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::NoSolution("elves do not split into groups of three".into()));
        }
        let mut total = 0;
        for group in shared.chunks_exact(3) {
            let badge = group.iter().fold(u64::MAX, |set, r| set & item_set(r));
            total += single_priority(badge)?;
        }
        Ok(total.to_string())
    }
}
