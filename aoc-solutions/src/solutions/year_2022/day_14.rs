use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::coord::Point2;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["2022", "simulation"])]
pub struct Solver;

const SOURCE: Point2 = Point2::new(500, 0);

#[derive(Debug, Clone)]
pub struct Cave {
    rock: HashSet<Point2>,
    lowest: i64,
}

fn parse_point(text: &str) -> anyhow::Result<Point2> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, found {:?}", text))?;
    Ok(Point2::new(
        x.parse().context("bad x")?,
        y.parse().context("bad y")?,
    ))
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rock = HashSet::new();
        for (line_idx, line) in input.trim_end().lines().enumerate() {
            let corners = line
                .split("->")
                .map(parse_point)
                .collect::<anyhow::Result<Vec<_>>>()
                .map_err(|e| ParseError::at_line(line_idx, e))?;
            for (from, to) in corners.iter().tuple_windows() {
                if from.x != to.x && from.y != to.y {
                    return Err(ParseError::at_line(line_idx, format!("diagonal segment {} -> {}", from, to)));
                }
                let step = (*to - *from).signum();
                let mut p = *from;
                rock.insert(p);
                while p != *to {
                    p += step;
                    rock.insert(p);
                }
            }
        }
        let lowest = rock
            .iter()
            .map(|p| p.y)
            .max()
            .ok_or_else(|| ParseError::MissingData("no rock paths".into()))?;
        Ok(Cave { rock, lowest })
    }
}

/// Grains at rest when the simulation stops; with a floor, stops once the source is buried
fn pour_sand(cave: &Cave, floor: bool) -> usize {
    let mut blocked = cave.rock.clone();
    let floor_y = cave.lowest + 2;
    let mut rested = 0;

    // path of the falling grain, reused since the next grain follows it
    let mut path = vec![SOURCE];
    while let Some(&grain) = path.last() {
        let next = [Point2::new(0, 1), Point2::new(-1, 1), Point2::new(1, 1)]
            .into_iter()
            .map(|offset| grain + offset)
            .find(|p| !blocked.contains(p) && !(floor && p.y == floor_y));

        match next {
            Some(p) if !floor && p.y > cave.lowest => break,
            Some(p) => path.push(p),
            None => {
                blocked.insert(grain);
                rested += 1;
                path.pop();
            }
        }
    }
    rested
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour_sand(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour_sand(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n").unwrap();
        assert_eq!(shared.lowest, 9);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "24");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "93");
    }

    #[test]
    fn test_diagonal_rejected() {
        assert!(Solver::parse("1,1 -> 2,2").is_err());
    }
}
