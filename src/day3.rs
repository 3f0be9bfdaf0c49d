use tracing::debug;

use crate::bit_trie::{bits_to_integer, BitTrie, Popularity, TieBreak};
use crate::error::Result;

/// Gamma rate times epsilon rate.
pub fn power_consumption(trie: &BitTrie, tie_break: TieBreak) -> Result<u128> {
    let gamma = trie.common_bit_by_depth(Popularity::Most, tie_break)?;
    let epsilon = trie.common_bit_by_depth(Popularity::Least, tie_break)?;
    debug!(%gamma, %epsilon, "power rates");
    Ok(bits_to_integer(&gamma)? as u128 * bits_to_integer(&epsilon)? as u128)
}

/// Oxygen generator rating times CO2 scrubber rating.
pub fn life_support_rating(trie: &BitTrie) -> Result<u128> {
    let oxygen = trie.popular_path(Popularity::Most);
    let co2 = trie.popular_path(Popularity::Least);
    debug!(%oxygen, %co2, "life support ratings");
    Ok(bits_to_integer(&oxygen)? as u128 * bits_to_integer(&co2)? as u128)
}

pub fn solve(part: u8, lines: &[String], tie_break: TieBreak) -> Result<String> {
    let trie = BitTrie::new(lines)?;
    debug!("trie:\n{}", trie);
    let answer = if part == 1 {power_consumption(&trie, tie_break)?} else {life_support_rating(&trie)?};
    Ok(answer.to_string())
}
