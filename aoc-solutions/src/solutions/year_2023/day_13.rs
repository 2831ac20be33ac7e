use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::blocks::blocks;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 13, tags = ["2023", "bitset"])]
pub struct Solver;

/// A pattern as row bitmasks and column bitmasks (`#` = 1)
#[derive(Debug)]
pub struct Pattern {
    rows: Vec<u64>,
    cols: Vec<u64>,
}

fn parse_pattern(first_line: usize, block: &str) -> Result<Pattern, ParseError> {
    let lines: Vec<&[u8]> = block.lines().map(|l| l.trim().as_bytes()).collect();
    let width = lines.first().map_or(0, |l| l.len());
    if width == 0 || width > 64 || lines.len() > 64 {
        return Err(ParseError::at_line(
            first_line,
            format!("unsupported pattern size {}x{}", width, lines.len()),
        ));
    }
    let mut rows = vec![0u64; lines.len()];
    let mut cols = vec![0u64; width];
    for (y, line) in lines.iter().enumerate() {
        if line.len() != width {
            return Err(ParseError::at_line(first_line + y, "ragged pattern"));
        }
        for (x, &b) in line.iter().enumerate() {
            match b {
                b'#' => {
                    rows[y] |= 1 << x;
                    cols[x] |= 1 << y;
                }
                b'.' => {}
                _ => {
                    return Err(ParseError::at_line(
                        first_line + y,
                        format!("unexpected {:?}", b as char),
                    ));
                }
            }
        }
    }
    Ok(Pattern { rows, cols })
}

/// Lines before a mirror whose two halves differ in exactly `smudges` cells
fn mirror(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&split| {
        lines[..split]
            .iter()
            .rev()
            .zip(&lines[split..])
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>()
            == smudges
    })
}

fn summarize(patterns: &[Pattern], smudges: u32) -> Result<usize, SolveError> {
    patterns.iter().enumerate().try_fold(0, |total, (idx, p)| {
        if let Some(cols) = mirror(&p.cols, smudges) {
            Ok(total + cols)
        } else if let Some(rows) = mirror(&p.rows, smudges) {
            Ok(total + 100 * rows)
        } else {
            Err(SolveError::NoSolution(format!("pattern {} has no mirror", idx + 1)))
        }
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pattern>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        blocks(&input)
            .map(|(first_line, block)| parse_pattern(first_line, block))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarize(shared, 0)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarize(shared, 1)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 2);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "405");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "400");
    }

    #[test]
    fn test_errors_name_input_line() {
        let err = Solver::parse(&EXAMPLE.replacen("..##..###", "..##..#x#", 1)).unwrap_err();
        assert!(err.to_string().contains("(line 11)"), "{}", err);
    }
}
