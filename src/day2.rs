use regex::Regex;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {pub horizontal: i64, pub depth: i64, pub aim: i64}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {Forward(i64), Down(i64), Up(i64)}

pub fn parse_commands(lines: &[String]) -> Result<Vec<Command>> {
    let re = Regex::new(r"^(forward|down|up) +(\d+)$").unwrap();
    lines.iter().map(|line| {
        let caps = re.captures(line).ok_or_else(|| Error::parse(line, "expected forward/down/up and a number"))?;
        let steps = caps[2].parse().map_err(|e: std::num::ParseIntError| Error::parse(line, e.to_string()))?;
        Ok(match &caps[1] {
            "forward" => Command::Forward(steps),
            "down" => Command::Down(steps),
            _ => Command::Up(steps),
        })
    }).collect()
}

impl Position {
    /// Part 1 rules: up/down move the submarine directly.
    pub fn step(self, command: Command) -> Position {
        match command {
            Command::Forward(n) => Position {horizontal: self.horizontal + n, ..self},
            Command::Down(n) => Position {depth: self.depth + n, ..self},
            Command::Up(n) => Position {depth: self.depth - n, ..self},
        }
    }

    /// Part 2 rules: up/down only change the aim.
    pub fn step_aimed(self, command: Command) -> Position {
        match command {
            Command::Forward(n) => Position {
                horizontal: self.horizontal + n, depth: self.depth + self.aim * n, ..self
            },
            Command::Down(n) => Position {aim: self.aim + n, ..self},
            Command::Up(n) => Position {aim: self.aim - n, ..self},
        }
    }
}

pub fn navigate(part: u8, commands: &[Command]) -> Position {
    commands.iter().fold(Position::default(), |pos, &command|
        if part == 1 {pos.step(command)} else {pos.step_aimed(command)}
    )
}

pub fn solve(part: u8, lines: &[String]) -> Result<String> {
    let position = navigate(part, &parse_commands(lines)?);
    tracing::debug!(?position, "final position");
    Ok((position.horizontal * position.depth).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::split_lines;

    fn aimed(input: &str) -> Position {
        navigate(2, &parse_commands(&split_lines(input)).unwrap())
    }

    #[test]
    fn sample() {
        let lines = split_lines("forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2");
        assert_eq!(solve(1, &lines).unwrap(), "150");
        assert_eq!(solve(2, &lines).unwrap(), "900");
    }

    #[test]
    fn forward_only() {
        assert_eq!(aimed("forward 1\nforward 5"), Position {horizontal: 6, depth: 0, aim: 0});
    }

    #[test]
    fn down_only_changes_aim() {
        assert_eq!(aimed("down 10\ndown 8"), Position {horizontal: 0, depth: 0, aim: 18});
    }

    #[test]
    fn forward_uses_aim() {
        assert_eq!(aimed("forward 1\ndown 10\nforward 5"), Position {horizontal: 6, depth: 50, aim: 10});
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(matches!(solve(1, &split_lines("backward 3")), Err(Error::Parse {..})));
        assert!(matches!(solve(1, &split_lines("up three")), Err(Error::Parse {..})));
    }
}
