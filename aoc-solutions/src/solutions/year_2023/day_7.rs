use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct Solver;

const CARDS: &[u8] = b"23456789TJQKA";
const JOKER: u8 = b'J';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    fn classify(cards: &[u8; 5], jokers_wild: bool) -> HandType {
        let jokers = if jokers_wild {
            cards.iter().filter(|&&c| c == JOKER).count()
        } else {
            0
        };
        let mut counts: Vec<usize> = cards
            .iter()
            .filter(|&&c| !(jokers_wild && c == JOKER))
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        // jokers join the largest group
        match counts.first_mut() {
            Some(first) => *first += jokers,
            None => counts.push(jokers),
        }
        match counts[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let (cards, bid) = line
                    .trim()
                    .split_once(' ')
                    .ok_or_else(|| ParseError::at_line(line_idx, "expected `<hand> <bid>`"))?;
                let cards: [u8; 5] = cards
                    .as_bytes()
                    .try_into()
                    .map_err(|_| ParseError::at_line(line_idx, "a hand has five cards"))?;
                if let Some(&bad) = cards.iter().find(|c| !CARDS.contains(c)) {
                    return Err(ParseError::at_line(line_idx, format!("unknown card {:?}", bad as char)));
                }
                let bid = bid
                    .trim()
                    .parse()
                    .map_err(|e| ParseError::at_line(line_idx, e))?;
                Ok(Hand { cards, bid })
            })
            .collect()
    }
}

fn strength(card: u8, jokers_wild: bool) -> usize {
    if jokers_wild && card == JOKER {
        return 0;
    }
    CARDS.iter().position(|&c| c == card).map_or(0, |p| p + 1)
}

fn total_winnings(hands: &[Hand], jokers_wild: bool) -> u64 {
    hands
        .iter()
        .map(|hand| {
            let key = (
                HandType::classify(&hand.cards, jokers_wild),
                hand.cards.map(|c| strength(c, jokers_wild)),
            );
            (key, hand.bid)
        })
        .sorted_unstable_by(|a, b| a.0.cmp(&b.0))
        .enumerate()
        .map(|(rank, (_, bid))| (rank as u64 + 1) * bid)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6440");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5905");
    }

    #[test]
    fn test_classify() {
        assert_eq!(HandType::classify(b"JJJJJ", true), HandType::FiveOfAKind);
        assert_eq!(HandType::classify(b"KTJJT", false), HandType::TwoPair);
        assert_eq!(HandType::classify(b"KTJJT", true), HandType::FourOfAKind);
        assert_eq!(HandType::classify(b"23456", true), HandType::HighCard);
    }
}
