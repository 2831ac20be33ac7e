use std::cmp::Ordering;

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["2022", "recursion"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => std::slice::from_ref(&Packet::Int(*a)).cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(b)) => a.as_slice().cmp(std::slice::from_ref(&Packet::Int(*b))),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Packet {
    fn divider(n: u32) -> Packet {
        Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
    }

    fn parse(text: &str) -> anyhow::Result<Packet> {
        let bytes = text.as_bytes();
        let (packet, rest) = Self::parse_value(bytes)?;
        if !rest.is_empty() {
            return Err(anyhow!("trailing characters after packet"));
        }
        Ok(packet)
    }

    fn parse_value(bytes: &[u8]) -> anyhow::Result<(Packet, &[u8])> {
        match bytes.first() {
            Some(b'[') => {
                let mut rest = &bytes[1..];
                let mut items = Vec::new();
                if let Some(tail) = rest.strip_prefix(b"]") {
                    return Ok((Packet::List(items), tail));
                }
                loop {
                    let (item, tail) = Self::parse_value(rest)?;
                    items.push(item);
                    match tail.split_first() {
                        Some((b',', tail)) => rest = tail,
                        Some((b']', tail)) => return Ok((Packet::List(items), tail)),
                        _ => return Err(anyhow!("expected `,` or `]`")),
                    }
                }
            }
            Some(b'0'..=b'9') => {
                let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
                let value = bytes[..len]
                    .iter()
                    .try_fold(0u32, |acc, b| acc.checked_mul(10)?.checked_add((b - b'0') as u32))
                    .ok_or_else(|| anyhow!("integer overflow"))?;
                Ok((Packet::Int(value), &bytes[len..]))
            }
            Some(b) => Err(anyhow!("unexpected character {:?}", *b as char)),
            None => Err(anyhow!("unexpected end of packet")),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Packet>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let packets = input
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| Packet::parse(line).map_err(|e| ParseError::at_line(line_idx, e)))
            .collect::<Result<Vec<_>, _>>()?;
        if packets.len() % 2 != 0 {
            return Err(ParseError::MissingData("last packet has no partner".into()));
        }
        Ok(packets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: usize = shared
            .chunks_exact(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] < pair[1])
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (two, six) = (Packet::divider(2), Packet::divider(6));
        // position of each divider once everything is sorted
        let two_at = 1 + shared.iter().filter(|p| **p < two).count();
        let six_at = 2 + shared.iter().filter(|p| **p < six).count();
        Ok((two_at * six_at).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 16);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "140");
    }

    #[test]
    fn test_mixed_comparison() {
        let a = Packet::parse("[[1],[2,3,4]]").unwrap();
        let b = Packet::parse("[[1],4]").unwrap();
        assert!(a < b);
        assert!(Packet::parse("[1,,2]").is_err());
        assert!(Packet::parse("[1]]").is_err());
    }
}
