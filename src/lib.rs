pub mod bit_trie;
pub mod day1;
pub mod day2;
pub mod day3;
pub mod day4;
pub mod error;
pub mod input;

use bit_trie::TieBreak;
use error::{Error, Result};

pub const DAYS: usize = 4;

pub fn solve(day: usize, part: u8, lines: &[String], tie_break: TieBreak) -> Result<String> {
    if part != 1 && part != 2 {return Err(Error::UnknownPart(part))};
    match day {
        1 => day1::solve(part, lines),
        2 => day2::solve(part, lines),
        3 => day3::solve(part, lines, tie_break),
        4 => day4::solve(part, lines),
        _ => Err(Error::UnknownDay(day))
    }
}
