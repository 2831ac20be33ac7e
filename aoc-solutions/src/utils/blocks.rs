//! Blank-line separated sections of puzzle input

/// Sections of `input` split on blank lines, each paired with the 0-based
/// line index it starts on
///
/// Line indices count from the very start of `input`, so errors raised
/// inside a section can name the real input line.
pub fn blocks(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.trim_end().split("\n\n").scan(0, |newlines, block| {
        let first_line = *newlines;
        *newlines += block.matches('\n').count() + 2;
        Some((first_line, block))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_lines() {
        let found: Vec<_> = blocks("a\nb\n\nc\n\n\n\nd\n").collect();
        assert_eq!(found, vec![(0, "a\nb"), (3, "c"), (5, ""), (7, "d")]);
    }

    #[test]
    fn test_single_block() {
        assert_eq!(blocks("x y z").collect::<Vec<_>>(), vec![(0, "x y z")]);
    }
}
