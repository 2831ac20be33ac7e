use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

#[derive(Debug)]
pub struct Races<'a> {
    times: Vec<&'a str>,
    records: Vec<&'a str>,
}

fn row<'a>(line: Option<&'a str>, label: &str) -> anyhow::Result<Vec<&'a str>> {
    let line = line.ok_or_else(|| anyhow!("missing `{}` row", label))?;
    let values = line
        .trim()
        .strip_prefix(label)
        .ok_or_else(|| anyhow!("expected `{}`", label))?
        .split_whitespace()
        .collect::<Vec<_>>();
    if let Some(bad) = values.iter().find(|v| !v.bytes().all(|b| b.is_ascii_digit())) {
        return Err(anyhow!("bad number {:?}", bad));
    }
    Ok(values)
}

fn parse_races(input: &str) -> Result<Races<'_>, ParseError> {
    let mut lines = input.trim_end().lines();
    let times = row(lines.next(), "Time:").map_err(|e| ParseError::at_line(0, e))?;
    let records = row(lines.next(), "Distance:").map_err(|e| ParseError::at_line(1, e))?;
    if times.len() != records.len() {
        return Err(ParseError::at_line(
            1,
            format!("{} times but {} distances", times.len(), records.len()),
        ));
    }
    Ok(Races { times, records })
}

impl AocParser for Solver {
    type SharedData<'a> = Races<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_races(input)
    }
}

/// Hold times in `0..=time` that beat `record`
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |hold: u64| hold as u128 * (time - hold) as u128 > record as u128;
    // first winning hold sits just past the smaller root of h * (t - h) = d
    let disc = (time as f64).powi(2) - 4.0 * record as f64;
    if disc < 0.0 {
        return 0;
    }
    let mut lo = (((time as f64 - disc.sqrt()) / 2.0).floor().max(0.0) as u64).min(time);
    while lo > 0 && beats(lo - 1) {
        lo -= 1;
    }
    while lo <= time / 2 && !beats(lo) {
        lo += 1;
    }
    if lo > time / 2 {
        return 0;
    }
    // winning holds are symmetric around time / 2
    time - 2 * lo + 1
}

fn number(digits: &str) -> Result<u64, SolveError> {
    digits
        .parse::<u64>()
        .with_context(|| format!("{:?} does not fit in 64 bits", digits))
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut product: u64 = 1;
        for (time, record) in shared.times.iter().zip(&shared.records) {
            product = product
                .checked_mul(ways_to_win(number(time)?, number(record)?))
                .ok_or_else(|| SolveError::NoSolution("margin product overflows u64".into()))?;
        }
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let time = number(&shared.times.concat())?;
        let record = number(&shared.records.concat())?;
        Ok(ways_to_win(time, record).to_string())
    }
}
