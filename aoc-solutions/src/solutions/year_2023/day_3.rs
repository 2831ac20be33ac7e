use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::Point2;
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

/// A number on the schematic, spanning `start.x..start.x + len` on one row
#[derive(Debug, Clone, Copy)]
struct PartNumber {
    value: u32,
    start: Point2,
    len: i64,
}

impl PartNumber {
    /// Cells bordering the number, diagonals included
    fn border(&self) -> impl Iterator<Item = Point2> + '_ {
        let (y, x0, x1) = (self.start.y, self.start.x - 1, self.start.x + self.len);
        (x0..=x1)
            .flat_map(move |x| [Point2::new(x, y - 1), Point2::new(x, y + 1)])
            .chain([Point2::new(x0, y), Point2::new(x1, y)])
    }
}

#[derive(Debug)]
pub struct Schematic {
    cells: Grid<u8>,
    numbers: Vec<PartNumber>,
}

fn is_symbol(b: u8) -> bool {
    b != b'.' && !b.is_ascii_digit()
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cells = Grid::parse_bytes(input)?;
        let mut numbers = Vec::new();
        for (y, row) in cells.rows().enumerate() {
            let mut x = 0;
            while x < row.len() {
                if !row[x].is_ascii_digit() {
                    x += 1;
                    continue;
                }
                let len = row[x..].iter().take_while(|b| b.is_ascii_digit()).count();
                let value = std::str::from_utf8(&row[x..x + len])
                    .ok()
                    .and_then(|digits| digits.parse().ok())
                    .ok_or_else(|| ParseError::at_line(y, "number too large"))?;
                numbers.push(PartNumber {
                    value,
                    start: Point2::new(x as i64, y as i64),
                    len: len as i64,
                });
                x += len;
            }
        }
        Ok(Schematic { cells, numbers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let schematic: &Schematic = shared;
        let sum: u32 = schematic
            .numbers
            .iter()
            .filter(|n| n.border().any(|p| schematic.cells.get(p).is_some_and(|&b| is_symbol(b))))
            .map(|n| n.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: Grid<Vec<u32>> = shared.cells.map(|_| Vec::new());
        for n in &shared.numbers {
            for p in n.border() {
                if shared.cells.get(p) == Some(&b'*') {
                    gears[p].push(n.value);
                }
            }
        }
        let sum: u32 = gears
            .iter()
            .filter(|(_, adjacent)| adjacent.len() == 2)
            .map(|(_, adjacent)| adjacent[0] * adjacent[1])
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.numbers.len(), 10);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4361");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "467835");
    }
}
