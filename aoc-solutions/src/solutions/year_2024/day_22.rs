use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 22, tags = ["2024", "simulation"])]
pub struct Solver;

const PRUNE: u64 = 16_777_216;
const ROUNDS: usize = 2000;
/// Price changes lie in -9..=9
const CHANGE_RANGE: usize = 19;
const SEQUENCES: usize = CHANGE_RANGE.pow(4);

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<u64>()
                    .map_err(|e| ParseError::at_line(line_idx, e))
            })
            .collect()
    }
}

fn next_secret(mut secret: u64) -> u64 {
    secret = (secret ^ (secret * 64)) % PRUNE;
    secret = (secret ^ (secret / 32)) % PRUNE;
    (secret ^ (secret * 2048)) % PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s)))
}

/// Bananas fetched per four-change sequence, first occurrence only,
/// keyed by the changes packed in base 19
fn bananas_by_sequence(seed: u64) -> Vec<u32> {
    let mut bananas = vec![0u32; SEQUENCES];
    let mut seen = vec![false; SEQUENCES];
    let mut key = 0;
    let mut prev = (seed % 10) as usize;

    for (round, secret) in secrets(seed).skip(1).take(ROUNDS).enumerate() {
        let price = (secret % 10) as usize;
        key = (key * CHANGE_RANGE + price + 9 - prev) % SEQUENCES;
        prev = price;
        if round >= 3 && !seen[key] {
            seen[key] = true;
            bananas[key] = price as u32;
        }
    }
    bananas
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .iter()
            .filter_map(|&seed| secrets(seed).nth(ROUNDS))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let totals = shared
            .par_iter()
            .map(|&seed| bananas_by_sequence(seed))
            .reduce(
                || vec![0u32; SEQUENCES],
                |mut acc, bananas| {
                    acc.iter_mut().zip(bananas).for_each(|(a, b)| *a += b);
                    acc
                },
            );
        let best = totals.into_iter().max().unwrap_or(0);
        Ok(best.to_string())
    }
}
