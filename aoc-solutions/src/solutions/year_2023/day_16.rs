use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::{Direction, Point2};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 16, tags = ["2023", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| matches!(b, b'.' | b'/' | b'\\' | b'|' | b'-').then_some(b))
    }
}

/// Directions a beam leaves `tile` in after entering it heading `dir`
fn deflect(tile: u8, dir: Direction) -> ([Direction; 2], usize) {
    use Direction::*;
    match (tile, dir) {
        (b'/', Right) | (b'\\', Left) => ([Up, Up], 1),
        (b'/', Left) | (b'\\', Right) => ([Down, Down], 1),
        (b'/', Up) | (b'\\', Down) => ([Right, Right], 1),
        (b'/', Down) | (b'\\', Up) => ([Left, Left], 1),
        (b'|', Left | Right) => ([Up, Down], 2),
        (b'-', Up | Down) => ([Left, Right], 2),
        _ => ([dir, dir], 1),
    }
}

/// Tiles energized by a beam entering at `start` heading `dir`
fn energized(contraption: &Grid<u8>, start: Point2, dir: Direction) -> usize {
    // one bit per direction a beam has passed through each tile
    let mut seen: Grid<u8> = contraption.map(|_| 0);
    let mut beams = vec![(start, dir)];

    while let Some((pos, dir)) = beams.pop() {
        let Some(mask) = seen.get_mut(pos) else {
            continue;
        };
        let bit = 1 << dir.index();
        if *mask & bit != 0 {
            continue;
        }
        *mask |= bit;

        let (outs, count) = deflect(contraption[pos], dir);
        for &out in &outs[..count] {
            beams.push((pos + out.offset(), out));
        }
    }
    seen.iter().filter(|&(_, &mask)| mask != 0).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(energized(shared, Point2::ORIGIN, Direction::Right).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (w, h) = (shared.width() as i64, shared.height() as i64);
        let entries = (0..w)
            .flat_map(|x| [(Point2::new(x, 0), Direction::Down), (Point2::new(x, h - 1), Direction::Up)])
            .chain((0..h).flat_map(|y| {
                [(Point2::new(0, y), Direction::Right), (Point2::new(w - 1, y), Direction::Left)]
            }));
        let best = entries
            .map(|(start, dir)| energized(shared, start, dir))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}
