use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use parse_ints::Tokenizer;

mod error;
mod int_vec;
pub mod logger;

pub use error::InputError;
pub use int_vec::IntVec;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Alternate token by token regardless of lines, only warning about
    /// lines that don't hold two values.
    #[default]
    Alternate,
    /// Every non-blank line must hold exactly two values.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub part1: u64,
    pub part2: i64,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part 1: {}", self.part1)?;
        write!(f, "Part 2: {}", self.part2)
    }
}

pub fn read_input(path: &Path, pairing: Pairing) -> Result<(IntVec, IntVec), InputError> {
    log::info!("reading {}", path.display());
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_input(file, pairing)
}

/// Deals the integers of `reader` into a left and a right column, left first.
pub fn parse_input<R: Read>(reader: R, pairing: Pairing) -> Result<(IntVec, IntVec), InputError> {
    let mut columns = [IntVec::new(), IntVec::new()];
    let mut side = 0;
    let mut line = 0;
    let mut on_line = 0;
    for token in Tokenizer::new(reader) {
        let token = token.map_err(InputError::Read)?;
        if token.line != line {
            check_line(pairing, line, on_line)?;
            line = token.line;
            on_line = 0;
        }
        on_line += 1;
        columns[side].push(token.value);
        side ^= 1;
    }
    check_line(pairing, line, on_line)?;
    let [left, right] = columns;
    log::info!("read {} left and {} right values", left.len(), right.len());
    Ok((left, right))
}

fn check_line(pairing: Pairing, line: usize, found: usize) -> Result<(), InputError> {
    if found == 0 || found == 2 {
        return Ok(());
    }
    match pairing {
        Pairing::Strict => Err(InputError::UnpairedLine { line, found }),
        Pairing::Alternate => {
            log::warn!("line {line}: expected 2 values, found {found}; columns are out of step");
            Ok(())
        }
    }
}

pub fn solve_puzzle_part1(left: &mut IntVec, right: &mut IntVec) -> u64 {
    left.sort();
    right.sort();
    left.iter()
        .zip(right.iter())
        .fold(0, |summed_diff, (left_num, right_num)| {
            summed_diff + u64::from(left_num.abs_diff(*right_num))
        })
}

/// Similarity score. `right` must already be sorted.
pub fn solve_puzzle_part2(left: &IntVec, right: &IntVec) -> i64 {
    debug_assert!(
        right.windows(2).all(|pair| pair[0] <= pair[1]),
        "right column is not sorted"
    );
    left.iter().fold(0, |score, &left_num| {
        score + i64::from(left_num) * right.count_sorted(left_num) as i64
    })
}

pub fn solve(mut left: IntVec, mut right: IntVec) -> Answer {
    let part1 = solve_puzzle_part1(&mut left, &mut right);
    log::debug!("sorted left: {left}");
    log::debug!("sorted right: {right}");
    let part2 = solve_puzzle_part2(&left, &right);
    Answer { part1, part2 }
}
