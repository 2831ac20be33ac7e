use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestDependentSolver;

impl AocParser for TestDependentSolver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

impl PartSolver<1> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i32 = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = match shared.sum {
            Some(sum) => sum,
            None => shared.numbers.iter().sum(),
        };
        Ok((sum as f64 / shared.numbers.len() as f64).to_string())
    }
}

/// Zero-copy solver borrowing straight from the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct BorrowingSolver;

impl AocParser for BorrowingSolver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split(',').collect())
    }
}

impl PartSolver<1> for BorrowingSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|word| word.len())
            .map(|word| word.to_string())
            .ok_or_else(|| SolveError::NoSolution("empty input".into()))
    }
}

#[test]
fn test_part2_reuses_part1_result() {
    let mut shared = TestDependentSolver::parse("2\n4\n6").unwrap();

    assert_eq!(TestDependentSolver::solve_part(&mut shared, 1).unwrap(), "12");
    assert_eq!(shared.sum, Some(12));
    assert_eq!(TestDependentSolver::solve_part(&mut shared, 2).unwrap(), "4");
}

#[test]
fn test_part2_without_part1() {
    let mut shared = TestDependentSolver::parse("1\n2").unwrap();

    assert_eq!(TestDependentSolver::solve_part(&mut shared, 2).unwrap(), "1.5");
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("ab,abcd,abc");
    let mut shared = BorrowingSolver::parse(&input).unwrap();

    assert_eq!(BorrowingSolver::PARTS, 1);
    assert_eq!(BorrowingSolver::solve_part(&mut shared, 1).unwrap(), "abcd");
}
