use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::{Direction, Point2};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 18, tags = ["2023", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    dir: Direction,
    meters: i64,
    /// The same step as encoded in the hex colour
    hex_dir: Direction,
    hex_meters: i64,
}

fn parse_instruction(line: &str) -> Option<Instruction> {
    let mut parts = line.split_whitespace();
    let dir = match parts.next()?.as_bytes() {
        [b] => Direction::from_byte(*b)?,
        _ => return None,
    };
    let meters = parts.next()?.parse().ok()?;
    let colour = parts.next()?.strip_prefix("(#")?.strip_suffix(')')?;
    if colour.len() != 6 || parts.next().is_some() {
        return None;
    }
    let hex_meters = i64::from_str_radix(&colour[..5], 16).ok()?;
    let hex_dir = match &colour[5..] {
        "0" => Direction::Right,
        "1" => Direction::Down,
        "2" => Direction::Left,
        "3" => Direction::Up,
        _ => return None,
    };
    Some(Instruction {
        dir,
        meters,
        hex_dir,
        hex_meters,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_instruction(line)
                    .ok_or_else(|| ParseError::at_line(line_idx, format!("expected `D n (#rrggbb)`, found {:?}", line)))
            })
            .collect()
    }
}

/// Cubic metres dug out: shoelace interior plus the trench itself (Pick's theorem)
fn lagoon_volume(steps: impl Iterator<Item = (Direction, i64)>) -> i64 {
    let mut pos = Point2::ORIGIN;
    let mut twice_area = 0;
    let mut boundary = 0;
    for (dir, meters) in steps {
        let next = pos + dir.offset() * meters;
        twice_area += pos.x * next.y - next.x * pos.y;
        boundary += meters;
        pos = next;
    }
    twice_area.abs() / 2 + boundary / 2 + 1
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon_volume(shared.iter().map(|i| (i.dir, i.meters))).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon_volume(shared.iter().map(|i| (i.hex_dir, i.hex_meters))).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "62");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "952408144115");
    }

    #[test]
    fn test_bad_colour() {
        assert!(Solver::parse("R 6 (#70c71)").is_err());
    }
}
