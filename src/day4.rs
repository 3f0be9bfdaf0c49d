use bitvec::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Error, Result};

const SIDE: usize = 5;

#[derive(Debug, Clone)]
pub struct Board {
    values: [u32; SIDE * SIDE],
    positions: FxHashMap<u32, usize>,
    marked: BitArr!(for SIDE * SIDE),
    score: Option<u32>,
}

impl Board {
    pub fn new(values: [u32; SIDE * SIDE]) -> Board {
        let mut positions = FxHashMap::default();
        for (ix, &value) in values.iter().enumerate() {
            // a repeated value marks its first cell
            positions.entry(value).or_insert(ix);
        }
        Board {values, positions, marked: BitArray::ZERO, score: None}
    }

    fn parse(lines: &[String]) -> Result<Board> {
        let values = lines.iter().flat_map(|line| line.split_whitespace().map(move |n|
            n.parse::<u32>().map_err(|e| Error::parse(line, e.to_string()))
        )).collect::<Result<Vec<_>>>()?;
        let values: [u32; SIDE * SIDE] = values.try_into().map_err(|values: Vec<u32>|
            Error::parse(&lines.join("\n"), format!("expected {} numbers, found {}", SIDE * SIDE, values.len()))
        )?;
        Ok(Board::new(values))
    }

    pub fn is_winner(&self) -> bool {self.score.is_some()}

    /// Sum of unmarked values times the winning call, once the board has won.
    pub fn score(&self) -> Option<u32> {self.score}

    /// Marks `call` and returns the score if this call completed a row or
    /// column. Boards that already won are left untouched.
    pub fn mark(&mut self, call: u32) -> Option<u32> {
        if self.is_winner() {return None};
        let &ix = self.positions.get(&call)?;
        self.marked.set(ix, true);

        let (row, col) = (ix / SIDE, ix % SIDE);
        let row_done = (0 .. SIDE).all(|c| self.marked[row * SIDE + c]);
        let col_done = (0 .. SIDE).all(|r| self.marked[r * SIDE + col]);
        if row_done || col_done {
            let unmarked = self.marked[.. SIDE * SIDE].iter_zeros().map(|ix| self.values[ix]).sum::<u32>();
            self.score = Some(unmarked * call);
        }
        self.score
    }
}

#[derive(Debug, Default)]
pub struct GameTable {
    boards: Vec<Board>,
    scores: Vec<u32>,
}

impl GameTable {
    pub fn new(boards: Vec<Board>) -> GameTable {
        GameTable {boards, scores: vec![]}
    }

    pub fn call(&mut self, call: u32) {
        for (ix, board) in self.boards.iter_mut().enumerate() {
            if let Some(score) = board.mark(call) {
                debug!(board = ix, call, score, "board won");
                self.scores.push(score);
            }
        }
    }

    /// Scores in the order the boards won.
    pub fn scores(&self) -> &[u32] {&self.scores}
}

pub fn parse_game(lines: &[String]) -> Result<(Vec<u32>, Vec<Board>)> {
    let [first, rest @ ..] = lines else {return Err(Error::EmptyInput)};
    let calls = first.split(',').map(|n|
        n.trim().parse::<u32>().map_err(|e| Error::parse(first, e.to_string()))
    ).collect::<Result<Vec<_>>>()?;
    let boards = rest.split(|line| line.is_empty())
        .filter(|chunk| !chunk.is_empty())
        .map(Board::parse)
        .collect::<Result<Vec<_>>>()?;
    Ok((calls, boards))
}

pub fn winning_scores(calls: &[u32], boards: Vec<Board>) -> Vec<u32> {
    let mut table = GameTable::new(boards);
    for &call in calls {table.call(call)};
    table.scores
}

pub fn solve(part: u8, lines: &[String]) -> Result<String> {
    let (calls, boards) = parse_game(lines)?;
    let scores = winning_scores(&calls, boards);
    debug!(?scores, "winning scores");
    let score = if part == 1 {scores.first()} else {scores.last()};
    score.map(|score| score.to_string()).ok_or(Error::NoWinner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::split_lines;

    const SAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn sample() {
        let lines = split_lines(SAMPLE);
        assert_eq!(solve(1, &lines).unwrap(), "4512");
        assert_eq!(solve(2, &lines).unwrap(), "1924");
    }

    #[test]
    fn scores_in_winning_order() {
        let (calls, boards) = parse_game(&split_lines(SAMPLE)).unwrap();
        assert_eq!(calls.len(), 27);
        assert_eq!(boards.len(), 3);
        let scores = winning_scores(&calls, boards);
        assert_eq!(scores, [4512, 2192, 1924]);
    }

    #[test]
    fn column_wins_and_board_stops_scoring() {
        let mut board = Board::new(std::array::from_fn(|ix| ix as u32 + 1));
        for call in [1, 6, 11, 16] {assert_eq!(board.mark(call), None)};
        assert_eq!(board.mark(99), None);
        // unmarked: 1..=25 minus the first column
        assert_eq!(board.mark(21), Some((325 - 55) * 21));
        assert!(board.is_winner());
        assert_eq!(board.mark(2), None);
        assert_eq!(board.score(), Some((325 - 55) * 21));
    }

    #[test]
    fn repeated_value_marks_first_cell() {
        let mut board = Board::new(std::array::from_fn(|ix| if ix == 24 {1} else {ix as u32 + 1}));
        for call in [1, 6, 11, 16] {assert_eq!(board.mark(call), None)};
        // 1..=24 plus the repeated 1, minus the first column
        assert_eq!(board.mark(21), Some((301 - 55) * 21));
    }

    #[test]
    fn no_winner() {
        let lines = split_lines(&SAMPLE.replacen("7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1", "7,4", 1));
        assert!(matches!(solve(1, &lines), Err(Error::NoWinner)));
    }

    #[test]
    fn rejects_short_board() {
        let lines = split_lines("1,2\n\n1 2 3\n4 5 6");
        assert!(matches!(parse_game(&lines), Err(Error::Parse {..})));
        assert!(matches!(parse_game(&[]), Err(Error::EmptyInput)));
    }
}
