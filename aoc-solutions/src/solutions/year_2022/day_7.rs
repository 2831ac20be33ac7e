use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["2022", "tree"])]
pub struct Solver;

const DISK_SIZE: u64 = 70_000_000;
const SPACE_NEEDED: u64 = 30_000_000;

/// Total sizes of every directory; the root is last
#[derive(Debug)]
pub struct DirSizes(Vec<u64>);

impl DirSizes {
    fn root(&self) -> u64 {
        self.0.last().copied().unwrap_or(0)
    }
}

/// Close the innermost open directory, adding its size to its parent
fn close_dir(open: &mut Vec<u64>, done: &mut Vec<u64>) {
    if let Some(size) = open.pop() {
        done.push(size);
        if let Some(parent) = open.last_mut() {
            *parent += size;
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = DirSizes;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut open: Vec<u64> = Vec::new();
        let mut done = Vec::new();

        for (line_idx, line) in input.trim_end().lines().enumerate() {
            let words: Vec<&str> = line.split_whitespace().collect();
            match words[..] {
                ["$", "cd", "/"] => {
                    while open.len() > 1 {
                        close_dir(&mut open, &mut done);
                    }
                    if open.is_empty() {
                        open.push(0);
                    }
                }
                ["$", "cd", ".."] => {
                    if open.len() < 2 {
                        return Err(ParseError::at_line(line_idx, "cd .. above the root"));
                    }
                    close_dir(&mut open, &mut done);
                }
                ["$", "cd", _] => {
                    if open.is_empty() {
                        return Err(ParseError::at_line(line_idx, "cd before entering /"));
                    }
                    open.push(0);
                }
                ["$", "ls"] | ["dir", _] => {}
                [size, _] => {
                    let size: u64 = size
                        .parse()
                        .map_err(|_| ParseError::at_line(line_idx, format!("bad file size {:?}", size)))?;
                    match open.last_mut() {
                        Some(current) => *current += size,
                        None => return Err(ParseError::at_line(line_idx, "listing before entering /")),
                    }
                }
                _ => return Err(ParseError::at_line(line_idx, format!("unrecognised line {:?}", line))),
            }
        }

        while !open.is_empty() {
            close_dir(&mut open, &mut done);
        }
        if done.is_empty() {
            return Err(ParseError::MissingData("no directories".into()));
        }
        Ok(DirSizes(done))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.0.iter().filter(|&&size| size <= 100_000).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let free = DISK_SIZE.saturating_sub(shared.root());
        let to_delete = SPACE_NEEDED.saturating_sub(free);
        shared
            .0
            .iter()
            .filter(|&&size| size >= to_delete)
            .min()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::NoSolution("no directory is large enough".into()))
    }
}
