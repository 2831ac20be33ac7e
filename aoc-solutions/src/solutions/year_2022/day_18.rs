use std::collections::HashSet;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::Point3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["2022", "flood-fill"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Point3>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let coords = line
                    .trim()
                    .split(',')
                    .map(str::parse::<i64>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| ParseError::at_line(line_idx, e))?;
                match coords[..] {
                    [x, y, z] => Ok(Point3::new(x, y, z)),
                    _ => Err(ParseError::at_line(line_idx, "expected `x,y,z`")),
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cubes: &HashSet<Point3> = shared;
        let area = cubes
            .iter()
            .flat_map(|cube| cube.neighbors6())
            .filter(|n| !cubes.contains(n))
            .count();
        Ok(area.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cubes: &HashSet<Point3> = shared;
        let Some(&first) = cubes.iter().next() else {
            return Ok("0".into());
        };
        // bounding box with a one-cube margin so the steam can wrap around
        let (lo, hi) = cubes
            .iter()
            .fold((first, first), |(lo, hi), &c| (lo.component_min(c), hi.component_max(c)));
        let margin = Point3::new(1, 1, 1);
        let (lo, hi) = (lo - margin, hi + margin);
        let inside = |p: &Point3| {
            (lo.x..=hi.x).contains(&p.x) && (lo.y..=hi.y).contains(&p.y) && (lo.z..=hi.z).contains(&p.z)
        };

        let mut steam = HashSet::from([lo]);
        let mut stack = vec![lo];
        let mut faces = 0;
        while let Some(p) = stack.pop() {
            for n in p.neighbors6() {
                if cubes.contains(&n) {
                    faces += 1;
                } else if inside(&n) && steam.insert(n) {
                    stack.push(n);
                }
            }
        }
        Ok(faces.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "64");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "58");
    }

    #[test]
    fn test_two_cubes() {
        let mut shared = Solver::parse("1,1,1\n2,1,1\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "10");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "10");
    }
}
