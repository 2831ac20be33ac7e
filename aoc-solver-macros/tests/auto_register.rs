use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 3, tags = ["2019", "macro-test"])]
pub struct Registered;

impl AocParser for Registered {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|word| {
                word.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {}", word)))
            })
            .collect()
    }
}

impl PartSolver<1> for Registered {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Registered {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 4)]
pub struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn test_plugins_are_collected() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.get_info(2019, 3).expect("2019/3 registered");
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["2019", "macro-test"]);

    let info = registry.get_info(2019, 4).expect("2019/4 registered");
    assert_eq!(info.parts, 1);
    assert!(info.tags.is_empty());
}

#[test]
fn test_registered_solver_runs() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2019, 3, "3 9 4").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "16");
    assert_eq!(solver.solve(2).unwrap().answer, "9");
    assert!(solver.solve(3).is_err());

    let mut solver = registry.create_solver(2019, 4, "abc\n").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.contains(2019, 3));
    assert!(!registry.contains(2019, 4));
    assert_eq!(registry.len(), 1);
}
