use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

/// Largest red, green and blue counts seen in one game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    max: Cubes,
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (head, draws) = line.split_once(':').ok_or_else(|| anyhow!("missing `:`"))?;
    let id = head
        .trim()
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected `Game <id>`"))?
        .parse()
        .context("bad game id")?;

    let mut max = Cubes::default();
    for handful in draws.split([';', ',']) {
        let (count, colour) = handful
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected `<count> <colour>`, found {:?}", handful))?;
        let count: u32 = count.parse().context("bad cube count")?;
        let slot = match colour {
            "red" => &mut max.red,
            "green" => &mut max.green,
            "blue" => &mut max.blue,
            other => return Err(anyhow!("unknown colour {:?}", other)),
        };
        *slot = (*slot).max(count);
    }
    Ok(Game { id, max })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| parse_game(line).map_err(|e| ParseError::at_line(line_idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|g| g.max.red <= 12 && g.max.green <= 13 && g.max.blue <= 14)
            .map(|g| g.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .map(|g| g.max.red * g.max.green * g.max.blue)
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared[0].max, Cubes { red: 4, green: 2, blue: 6 });
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn test_unknown_colour() {
        assert!(Solver::parse("Game 1: 3 purple").is_err());
    }
}
