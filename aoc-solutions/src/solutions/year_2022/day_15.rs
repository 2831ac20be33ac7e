use std::collections::HashSet;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

use crate::utils::coord::Point2;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["2022", "intervals"])]
pub struct Solver;

const ROW: i64 = 2_000_000;
const BOUND: i64 = 4_000_000;

#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    pos: Point2,
    beacon: Point2,
    radius: i64,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Sensor>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(
            r"^Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)$",
        )
        .map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let caps = re
                    .captures(line.trim())
                    .ok_or_else(|| ParseError::at_line(line_idx, "expected a sensor report"))?;
                let num = |i: usize| {
                    caps[i]
                        .parse::<i64>()
                        .map_err(|e| ParseError::at_line(line_idx, e))
                };
                let pos = Point2::new(num(1)?, num(2)?);
                let beacon = Point2::new(num(3)?, num(4)?);
                Ok(Sensor {
                    pos,
                    beacon,
                    radius: pos.manhattan(beacon),
                })
            })
            .collect()
    }
}

/// Merged, sorted, inclusive x-intervals covered by sensors on row `y`
fn coverage(sensors: &[Sensor], y: i64) -> Vec<(i64, i64)> {
    let mut spans: Vec<(i64, i64)> = sensors
        .iter()
        .filter_map(|s| {
            let reach = s.radius - (s.pos.y - y).abs();
            (reach >= 0).then(|| (s.pos.x - reach, s.pos.x + reach))
        })
        .collect();
    spans.sort_unstable();

    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(spans.len());
    for (lo, hi) in spans {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

/// Positions on row `y` that cannot hold a beacon
fn excluded_on_row(sensors: &[Sensor], y: i64) -> i64 {
    let spans = coverage(sensors, y);
    let covered: i64 = spans.iter().map(|(lo, hi)| hi - lo + 1).sum();
    let beacons = sensors
        .iter()
        .filter(|s| s.beacon.y == y)
        .map(|s| s.beacon.x)
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|x| spans.iter().any(|(lo, hi)| (lo..=hi).contains(&x)))
        .count() as i64;
    covered - beacons
}

/// The one uncovered position in `0..=bound` on both axes
fn distress_beacon(sensors: &[Sensor], bound: i64) -> Option<Point2> {
    (0..=bound).find_map(|y| {
        let mut x = 0;
        for (lo, hi) in coverage(sensors, y) {
            if lo > x {
                break;
            }
            x = x.max(hi + 1);
        }
        (x <= bound).then(|| Point2::new(x, y))
    })
}

fn tuning_frequency(sensors: &[Sensor], bound: i64) -> Result<i64, SolveError> {
    distress_beacon(sensors, bound)
        .map(|p| p.x * 4_000_000 + p.y)
        .ok_or_else(|| SolveError::NoSolution(format!("every position up to {} is covered", bound)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(excluded_on_row(shared, ROW).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tuning_frequency(shared, BOUND)?.to_string())
    }
}
