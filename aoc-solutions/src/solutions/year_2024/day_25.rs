use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::blocks::blocks;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 25, tags = ["2024", "bitmask"])]
pub struct Solver;

const WIDTH: usize = 5;
const HEIGHT: usize = 7;

/// Schematics as bit sets over their inner rows, one bit per `#`
#[derive(Debug, Default)]
pub struct Schematics {
    locks: Vec<u32>,
    keys: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematics;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut schematics = Schematics::default();
        for (first_line, block) in blocks(input) {
            let rows: Vec<&str> = block.lines().map(str::trim).collect();
            if rows.len() != HEIGHT || rows.iter().any(|r| r.len() != WIDTH) {
                return Err(ParseError::at_line(
                    first_line,
                    format!("schematic is not {}x{}", WIDTH, HEIGHT),
                ));
            }
            let mask = rows[1..HEIGHT - 1]
                .iter()
                .flat_map(|row| row.bytes())
                .fold(0, |mask, b| mask << 1 | (b == b'#') as u32);

            match (rows[0], rows[HEIGHT - 1]) {
                ("#####", ".....") => schematics.locks.push(mask),
                (".....", "#####") => schematics.keys.push(mask),
                _ => {
                    return Err(ParseError::at_line(
                        first_line,
                        "schematic is neither a lock nor a key",
                    ));
                }
            }
        }
        Ok(schematics)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fits = shared
            .locks
            .iter()
            .flat_map(|lock| shared.keys.iter().map(move |key| lock & key))
            .filter(|&overlap| overlap == 0)
            .count();
        Ok(fits.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.locks.len(), 2);
        assert_eq!(shared.keys.len(), 3);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::PartOutOfRange(2))
        ));
    }

    #[test]
    fn test_malformed_schematic() {
        assert!(Solver::parse("#####\n.....").is_err());
    }

    #[test]
    fn test_errors_name_input_line() {
        let bad = format!("{}\n#####\n#####\n", EXAMPLE);
        let err = Solver::parse(&bad).unwrap_err();
        assert!(err.to_string().contains("(line 41)"), "{}", err);
    }
}
