//! Start-up prompts.
//!
//! Before a run the user picks how to seed the board and how many
//! generations to show. Invalid answers are reported and asked again; the
//! prompts only fail when input ends or I/O breaks.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::types::{SeedMode, MAX_ITERATIONS, MIN_ITERATIONS};

const SELECTION_RETRY: &str = "Please enter in either 1 or 2 only.";
const ITERATIONS_RETRY: &str = "Please enter in an int between 1 & 10,000 only.";

/// Parse a board selection: `1` for random, `2` for curated.
pub fn parse_selection(answer: &str) -> Option<SeedMode> {
    match answer.trim().parse::<u8>().ok()? {
        1 => Some(SeedMode::Random),
        2 => Some(SeedMode::Curated),
        _ => None,
    }
}

/// Parse an iteration count in `MIN_ITERATIONS..=MAX_ITERATIONS`.
pub fn parse_iterations(answer: &str) -> Option<u32> {
    let n = answer.trim().parse::<u32>().ok()?;
    (MIN_ITERATIONS..=MAX_ITERATIONS).contains(&n).then_some(n)
}

/// Ask until `parse` accepts an answer.
fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "\n{question}: ")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("reading answer")?;
        if read == 0 {
            bail!("input closed before a valid answer to '{question}'");
        }

        match parse(&line) {
            Some(value) => return Ok(value),
            None => writeln!(output, "\n{retry}")?,
        }
    }
}

/// Show the menu and ask which board to start from.
pub fn prompt_selection<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SeedMode> {
    writeln!(output, "~~~~~~~~~~~~ Conway's Game of Life ~~~~~~~~~~~~\n")?;
    writeln!(output, " Please make a selection for initial cells on grid.\n")?;
    writeln!(output, "1. Only Randoms on grid.")?;
    writeln!(output, "2. Glider, Simple, Glider Gun, Spaceship, and Random on grid.")?;
    ask(input, output, "Selection", SELECTION_RETRY, parse_selection)
}

/// Ask how many generations to show.
pub fn prompt_iterations<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    writeln!(output, "\nChoose iterations for game to run (1 - 10,000)")?;
    ask(input, output, "Iterations", ITERATIONS_RETRY, parse_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1\n"), Some(SeedMode::Random));
        assert_eq!(parse_selection(" 2 "), Some(SeedMode::Curated));
        assert_eq!(parse_selection("3"), None);
        assert_eq!(parse_selection("two"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn test_parse_iterations_bounds() {
        assert_eq!(parse_iterations("1"), Some(1));
        assert_eq!(parse_iterations("10000\n"), Some(10_000));
        assert_eq!(parse_iterations("0"), None);
        assert_eq!(parse_iterations("10001"), None);
        assert_eq!(parse_iterations("-5"), None);
        assert_eq!(parse_iterations("1.5"), None);
    }

    #[test]
    fn test_selection_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n7\n2\n");
        let mut output = Vec::new();
        let mode = prompt_selection(&mut input, &mut output).unwrap();
        assert_eq!(mode, SeedMode::Curated);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(SELECTION_RETRY).count(), 2);
        assert_eq!(text.matches("Selection: ").count(), 3);
    }

    #[test]
    fn test_iterations_reprompts_until_valid() {
        let mut input = Cursor::new("0\n20000\n250\n");
        let mut output = Vec::new();
        assert_eq!(prompt_iterations(&mut input, &mut output).unwrap(), 250);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(ITERATIONS_RETRY).count(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new("9\n");
        let mut output = Vec::new();
        assert!(prompt_selection(&mut input, &mut output).is_err());
    }
}
