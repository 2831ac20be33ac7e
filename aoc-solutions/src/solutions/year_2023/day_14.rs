use std::collections::HashMap;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["2023", "cycles"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

/// Platform rows, `O` round rock, `#` cube rock, `.` empty
type Platform = Vec<Vec<u8>>;

impl AocParser for Solver {
    type SharedData<'a> = Platform;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, |b| matches!(b, b'O' | b'#' | b'.').then_some(b))?;
        Ok(grid.rows().map(<[u8]>::to_vec).collect())
    }
}

fn tilt_north(platform: &mut Platform) {
    let width = platform.first().map_or(0, Vec::len);
    for x in 0..width {
        let mut free = 0;
        for y in 0..platform.len() {
            match platform[y][x] {
                b'#' => free = y + 1,
                b'O' => {
                    platform[y][x] = b'.';
                    platform[free][x] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

/// Quarter turn clockwise: the west edge becomes the north edge
fn rotate_clockwise(platform: &Platform) -> Platform {
    let height = platform.len();
    let width = platform.first().map_or(0, Vec::len);
    (0..width)
        .map(|x| (0..height).rev().map(|y| platform[y][x]).collect())
        .collect()
}

/// Tilt north, west, south, then east
fn spin_cycle(platform: &mut Platform) {
    for _ in 0..4 {
        tilt_north(platform);
        *platform = rotate_clockwise(platform);
    }
}

fn north_load(platform: &Platform) -> usize {
    platform
        .iter()
        .enumerate()
        .map(|(y, row)| row.iter().filter(|&&b| b == b'O').count() * (platform.len() - y))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut platform = shared.clone();
        tilt_north(&mut platform);
        Ok(north_load(&platform).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut platform = shared.clone();
        let mut seen: HashMap<Platform, usize> = HashMap::new();
        let mut history = Vec::new();

        for cycle in 0..SPIN_CYCLES {
            if let Some(&start) = seen.get(&platform) {
                let period = cycle - start;
                let state = &history[start + (SPIN_CYCLES - start) % period];
                return Ok(north_load(state).to_string());
            }
            seen.insert(platform.clone(), cycle);
            history.push(platform.clone());
            spin_cycle(&mut platform);
        }
        Ok(north_load(&platform).to_string())
    }
}
