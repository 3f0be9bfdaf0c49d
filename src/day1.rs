use itertools::Itertools;

use crate::error::{Error, Result};

fn count_increases(depths: impl Iterator<Item = u64>) -> usize {
    depths.tuple_windows().filter(|(prev, next)| next > prev).count()
}

pub fn solve(part: u8, lines: &[String]) -> Result<String> {
    let depths = lines.iter().map(|line|
        line.parse::<u32>().map_err(|e| Error::parse(line, e.to_string()))
    ).collect::<Result<Vec<_>>>()?;
    if depths.is_empty() {return Err(Error::EmptyInput)};

    let increases = if part == 1 {
        count_increases(depths.iter().map(|&depth| depth as u64))
    } else {
        count_increases(depths.iter().tuple_windows().map(|(&a, &b, &c)| a as u64 + b as u64 + c as u64))
    };
    Ok(increases.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::split_lines;

    const SAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263";

    #[test]
    fn sample() {
        let lines = split_lines(SAMPLE);
        assert_eq!(solve(1, &lines).unwrap(), "7");
        assert_eq!(solve(2, &lines).unwrap(), "5");
    }

    #[test]
    fn zero_is_a_reading() {
        let lines = split_lines("0\n1\n0\n2");
        assert_eq!(solve(1, &lines).unwrap(), "2");
    }

    #[test]
    fn window_sums_past_u32() {
        let lines = split_lines("4000000000\n4000000000\n4000000000\n4000000001");
        assert_eq!(solve(2, &lines).unwrap(), "1");
        assert_eq!(solve(1, &lines).unwrap(), "1");
    }

    #[test]
    fn short_inputs() {
        assert_eq!(solve(1, &split_lines("5")).unwrap(), "0");
        assert_eq!(solve(2, &split_lines("1\n2\n3")).unwrap(), "0");
        assert!(matches!(solve(1, &[]), Err(Error::EmptyInput)));
        assert!(matches!(solve(1, &split_lines("1\nx")), Err(Error::Parse {..})));
    }
}
