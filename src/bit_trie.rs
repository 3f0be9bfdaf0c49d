//! Prefix tree over equal-length binary strings. Every node counts how many
//! inserted strings pass through it, which answers both the per-position
//! majority question and the "keep filtering by majority bit" question.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Popularity {Most, Least}

/// How `common_bit_by_depth(Least)` resolves a position where zeros and ones
/// are equally frequent. `Most` always resolves ties to '1'.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Both modes resolve ties to '1'.
    #[default]
    Literal,
    /// `Least` resolves ties to '0', mirroring `Most`.
    Symmetric,
}

#[derive(Debug, Default)]
pub struct BitTrieNode {
    value: Option<u8>,
    count: usize,
    children: [Option<Box<BitTrieNode>>; 2],
}

impl BitTrieNode {
    fn with_bit(bit: u8) -> BitTrieNode {
        BitTrieNode {value: Some(bit), ..BitTrieNode::default()}
    }

    /// `None` for the root.
    pub fn value(&self) -> Option<char> {
        self.value.map(|bit| (b'0' + bit) as char)
    }

    pub fn count(&self) -> usize {self.count}

    pub fn child(&self, bit: char) -> Option<&BitTrieNode> {
        match bit {
            '0' => self.children[0].as_deref(),
            '1' => self.children[1].as_deref(),
            _ => None
        }
    }

    /// Counts one more string through this node, then descends along `suffix`
    /// (a sequence of 0/1 values), creating children on the way.
    pub fn insert(&mut self, suffix: &[u8]) {
        self.count += 1;
        if let [bit, rest @ ..] = suffix {
            self.children[*bit as usize]
                .get_or_insert_with(|| Box::new(BitTrieNode::with_bit(*bit)))
                .insert(rest);
        }
    }

    fn children(&self) -> impl Iterator<Item = &BitTrieNode> {
        self.children.iter().filter_map(|child| child.as_deref())
    }

    /// Existing children by ascending count. Slots are visited '0' first and
    /// the sort is stable, so on equal counts '0' comes first.
    pub fn children_ascending(&self) -> ArrayVec<&BitTrieNode, 2> {
        let mut children: ArrayVec<&BitTrieNode, 2> = self.children().collect();
        children.sort_by_key(|child| child.count);
        children
    }

    pub fn most_popular_child(&self) -> Option<&BitTrieNode> {
        self.children_ascending().last().copied()
    }

    pub fn least_popular_child(&self) -> Option<&BitTrieNode> {
        self.children_ascending().first().copied()
    }

    // [zeros, ones] for each depth below this node, nearest first
    fn depth_counts(&self) -> Vec<[usize; 2]> {
        let mut counts: Vec<[usize; 2]> = vec![];
        for child in self.children() {
            let below = child.depth_counts();
            if counts.len() < below.len() + 1 {counts.resize(below.len() + 1, [0, 0])};
            counts[0][child.value.unwrap_or_default() as usize] += child.count;
            for (level, pair) in below.iter().enumerate() {
                counts[level + 1][0] += pair[0];
                counts[level + 1][1] += pair[1];
            }
        }
        counts
    }
}

#[derive(Debug)]
pub struct BitTrie {
    root: BitTrieNode,
    width: usize,
    // first (expected, found) length pair that disagreed
    length_mismatch: Option<(usize, usize)>,
}

impl BitTrie {
    pub fn new<I, S>(strings: I) -> Result<BitTrie>
    where I: IntoIterator<Item = S>, S: AsRef<str> {
        let mut root = BitTrieNode::default();
        let mut width = None;
        let mut length_mismatch = None;
        for string in strings {
            let string = string.as_ref();
            let bits = parse_bits(string)?;
            match width {
                None => width = Some(bits.len()),
                Some(expected) if expected != bits.len() && length_mismatch.is_none() => {
                    length_mismatch = Some((expected, bits.len()))
                },
                _ => ()
            }
            root.insert(&bits);
        }
        let Some(width) = width else {return Err(Error::EmptyInput)};
        Ok(BitTrie {root, width, length_mismatch})
    }

    pub fn root(&self) -> &BitTrieNode {&self.root}

    /// Length of the first inserted string.
    pub fn width(&self) -> usize {self.width}

    // never empty: `new` rejects an empty input
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {self.root.count}

    /// Follows the most (or least) popular child from the root until a node
    /// has no children, returning the bits passed on the way.
    pub fn popular_path(&self, mode: Popularity) -> String {
        let mut path = String::with_capacity(self.width);
        let mut node = &self.root;
        while let Some(next) = match mode {
            Popularity::Most => node.most_popular_child(),
            Popularity::Least => node.least_popular_child(),
        } {
            path.extend(next.value());
            node = next;
        }
        path
    }

    /// `[zeros, ones]` at every string position, summed over the whole tree.
    pub fn depth_counts(&self) -> Result<Vec<[usize; 2]>> {
        if let Some((expected, found)) = self.length_mismatch {
            return Err(Error::InconsistentLength {expected, found});
        }
        Ok(self.root.depth_counts())
    }

    pub fn common_bit_by_depth(&self, mode: Popularity, tie_break: TieBreak) -> Result<String> {
        Ok(self.depth_counts()?.iter().map(|&[zeros, ones]| match mode {
            Popularity::Most => if zeros > ones {'0'} else {'1'},
            Popularity::Least => {
                if zeros < ones || zeros == ones && tie_break == TieBreak::Symmetric {'0'} else {'1'}
            }
        }).collect())
    }
}

impl fmt::Display for BitTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{} ({})", "", node.value().unwrap_or('*'), node.count, indent = 2 * depth)?;
            stack.extend(node.children.iter().rev().flatten().map(|child| (&**child, depth + 1)));
        }
        Ok(())
    }
}

fn parse_bits(string: &str) -> Result<Vec<u8>> {
    string.chars().map(|c| match c {
        '0' => Ok(0),
        '1' => Ok(1),
        found => Err(Error::InvalidBit {line: string.to_string(), found})
    }).collect()
}

/// Parses an MSB-first binary string.
pub fn bits_to_integer(bits: &str) -> Result<u64> {
    if bits.is_empty() {return Err(Error::EmptyInput)};
    let bits = parse_bits(bits)?;
    if bits.len() > 64 {return Err(Error::BitsOverflow(bits.len()))};
    Ok(bits.iter().fold(0, |acc, &bit| acc << 1 | bit as u64))
}
