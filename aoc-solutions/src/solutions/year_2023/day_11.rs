use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::coord::Point2;
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["2023", "geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct Image {
    galaxies: Vec<Point2>,
    /// Empty columns strictly left of each x
    empty_cols_before: Vec<i64>,
    /// Empty rows strictly above each y
    empty_rows_before: Vec<i64>,
}

/// Running count of `true` entries before each index
fn prefix_counts(empty: impl Iterator<Item = bool>) -> Vec<i64> {
    empty
        .scan(0, |seen, is_empty| {
            let before = *seen;
            *seen += is_empty as i64;
            Some(before)
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let sky = Grid::parse_with(input, |b| match b {
            b'#' => Some(true),
            b'.' => Some(false),
            _ => None,
        })?;
        let galaxies: Vec<Point2> = sky.iter().filter(|&(_, &g)| g).map(|(p, _)| p).collect();

        let empty_rows_before = prefix_counts(sky.rows().map(|row| !row.contains(&true)));
        let empty_cols_before = prefix_counts(
            (0..sky.width() as i64).map(|x| galaxies.iter().all(|g| g.x != x)),
        );
        Ok(Image {
            galaxies,
            empty_cols_before,
            empty_rows_before,
        })
    }
}

/// Sum of pairwise distances when every empty row and column becomes `factor` wide
fn distance_sum(image: &Image, factor: i64) -> i64 {
    let expanded: Vec<Point2> = image
        .galaxies
        .iter()
        .map(|g| {
            Point2::new(
                g.x + image.empty_cols_before[g.x as usize] * (factor - 1),
                g.y + image.empty_rows_before[g.y as usize] * (factor - 1),
            )
        })
        .collect();
    expanded
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.manhattan(*b))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distance_sum(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distance_sum(shared, 1_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.galaxies.len(), 9);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "374");
    }

    #[test]
    fn test_larger_factors() {
        let image = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(distance_sum(&image, 10), 1030);
        assert_eq!(distance_sum(&image, 100), 8410);
    }
}
