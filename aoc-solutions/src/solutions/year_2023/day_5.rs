use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::blocks::blocks;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "intervals"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
struct MapEntry {
    dst: i64,
    src: i64,
    len: i64,
}

/// One `x-to-y map:` block
#[derive(Debug, Clone)]
struct Layer {
    entries: Vec<MapEntry>,
}

impl Layer {
    fn map(&self, value: i64) -> i64 {
        self.entries
            .iter()
            .find(|e| (e.src..e.src + e.len).contains(&value))
            .map_or(value, |e| value - e.src + e.dst)
    }

    /// Map half-open ranges, splitting them at entry boundaries
    fn map_ranges(&self, ranges: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
        let mut pending = ranges;
        let mut mapped = Vec::new();
        for e in &self.entries {
            let (src_lo, src_hi) = (e.src, e.src + e.len);
            let shift = e.dst - e.src;
            let mut unmatched = Vec::new();
            for (lo, hi) in pending {
                let before = (lo, hi.min(src_lo));
                let inside = (lo.max(src_lo), hi.min(src_hi));
                let after = (lo.max(src_hi), hi);
                if before.0 < before.1 {
                    unmatched.push(before);
                }
                if inside.0 < inside.1 {
                    mapped.push((inside.0 + shift, inside.1 + shift));
                }
                if after.0 < after.1 {
                    unmatched.push(after);
                }
            }
            pending = unmatched;
        }
        mapped.extend(pending);
        mapped
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    layers: Vec<Layer>,
}

fn numbers(text: &str) -> anyhow::Result<Vec<i64>> {
    text.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {:?}", n)))
        .collect()
}

fn parse_almanac(input: &str) -> Result<Almanac, ParseError> {
    let input = input.replace("\r\n", "\n");
    let mut sections = blocks(&input);
    let (seeds_line, seeds) = sections
        .next()
        .ok_or_else(|| ParseError::MissingData("seeds".into()))?;
    let seeds = seeds
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("expected `seeds:` first"))
        .and_then(numbers)
        .map_err(|e| ParseError::at_line(seeds_line, e))?;

    let layers = sections
        .map(|(first_line, block)| {
            let mut lines = block.lines();
            let header = lines.next().unwrap_or_default();
            if !header.ends_with("map:") {
                return Err(ParseError::at_line(
                    first_line,
                    format!("expected a map header, found {:?}", header),
                ));
            }
            let entries = lines
                .enumerate()
                .map(|(i, line)| {
                    numbers(line)
                        .and_then(|n| match n[..] {
                            [dst, src, len] => Ok(MapEntry { dst, src, len }),
                            _ => Err(anyhow!("{}: expected three numbers", header)),
                        })
                        .map_err(|e| ParseError::at_line(first_line + 1 + i, e))
                })
                .collect::<Result<_, _>>()?;
            Ok(Layer { entries })
        })
        .collect::<Result<_, _>>()?;

    Ok(Almanac { seeds, layers })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| shared.layers.iter().fold(seed, |value, layer| layer.map(value)))
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::NoSolution("no seeds".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::NoSolution("seed ranges come in pairs".into()));
        }
        let seeds = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[0] + pair[1]))
            .collect();
        shared
            .layers
            .iter()
            .fold(seeds, |ranges, layer| layer.map_ranges(ranges))
            .iter()
            .map(|&(lo, _)| lo)
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::NoSolution("no seed ranges".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.layers.len(), 7);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "35");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "46");
    }

    #[test]
    fn test_range_split() {
        let layer = Layer {
            entries: vec![MapEntry { dst: 100, src: 10, len: 5 }],
        };
        let mut mapped = layer.map_ranges(vec![(8, 20)]);
        mapped.sort();
        assert_eq!(mapped, vec![(8, 10), (15, 20), (100, 105)]);
    }

    #[test]
    fn test_errors_name_input_line() {
        let err = Solver::parse(&EXAMPLE.replace("39 0 15", "39 0 x")).unwrap_err();
        assert!(err.to_string().contains("(line 10)"), "{}", err);

        let err = Solver::parse(&EXAMPLE.replace("water-to-light map:", "water-to-light")).unwrap_err();
        assert!(err.to_string().contains("(line 18)"), "{}", err);
    }
}
