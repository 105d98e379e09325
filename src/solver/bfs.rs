//! Breadth-first shortest-path search over the dictionary graph
//!
//! Nodes are dictionary words; an edge connects two words that differ in
//! exactly one character position. The frontier holds single words and a
//! predecessor map records how each word was first reached, so memory stays
//! O(words) instead of O(words × path length). The path is rebuilt by
//! walking the predecessor map back from the target.

use crate::core::{WORD_LEN, Word};
use crate::dictionary::Dictionary;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Compute a minimal-length ladder from `start` to `target`
///
/// Returns the full path including both endpoints, or an empty vector when
/// no ladder exists in this dictionary. Neighbors are generated position
/// left-to-right and letter a-z, so among multiple shortest ladders the one
/// discovered first under that fixed order is always returned.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::dictionary::Dictionary;
/// use word_ladder::solver::shortest_path;
///
/// let dict = Dictionary::from_words(
///     ["cold", "cord", "card", "ward", "warm"]
///         .iter()
///         .map(|&s| Word::new(s).unwrap()),
/// )
/// .unwrap();
///
/// let start = Word::new("cold").unwrap();
/// let target = Word::new("warm").unwrap();
/// let path = shortest_path(&start, &target, &dict);
/// assert_eq!(path.len(), 5);
/// ```
#[must_use]
pub fn shortest_path(start: &Word, target: &Word, dictionary: &Dictionary) -> Vec<Word> {
    shortest_path_bounded(start, target, dictionary, None)
}

/// `shortest_path` with an optional cap on dequeued words
///
/// For bounded dictionaries the search always terminates quickly, but a
/// caller targeting arbitrarily large word lists can cap the number of
/// expansions. Hitting the cap fails closed: the result is an empty path,
/// never a partial one.
#[must_use]
pub fn shortest_path_bounded(
    start: &Word,
    target: &Word,
    dictionary: &Dictionary,
    max_expansions: Option<usize>,
) -> Vec<Word> {
    if !dictionary.contains(start) || !dictionary.contains(target) {
        return Vec::new();
    }
    if start == target {
        return vec![start.clone()];
    }

    let mut visited: FxHashSet<Word> = FxHashSet::default();
    let mut predecessors: FxHashMap<Word, Word> = FxHashMap::default();
    let mut frontier: VecDeque<Word> = VecDeque::new();

    visited.insert(start.clone());
    frontier.push_back(start.clone());

    let mut expanded = 0usize;

    while let Some(word) = frontier.pop_front() {
        if max_expansions.is_some_and(|limit| expanded >= limit) {
            return Vec::new();
        }
        expanded += 1;

        for position in 0..WORD_LEN {
            for letter in b'a'..=b'z' {
                if letter == word.char_at(position) {
                    continue;
                }

                let candidate = word.with_char_at(position, letter);
                if !dictionary.contains(&candidate) || !visited.insert(candidate.clone()) {
                    continue;
                }

                predecessors.insert(candidate.clone(), word.clone());
                if candidate == *target {
                    return reconstruct(target, &predecessors);
                }
                frontier.push_back(candidate);
            }
        }
    }

    // Queue drained without reaching the target
    Vec::new()
}

/// Walk the predecessor map back from the target and reverse
fn reconstruct(target: &Word, predecessors: &FxHashMap<Word, Word>) -> Vec<Word> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(prev) = predecessors.get(current) {
        path.push(prev.clone());
        current = prev;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|&s| Word::new(s).unwrap())).unwrap()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(path: &[Word]) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    #[test]
    fn finds_single_substitution_ladder() {
        let d = dict(&["test", "tent", "bear"]);
        let path = shortest_path(&w("test"), &w("tent"), &d);
        assert_eq!(texts(&path), ["test", "tent"]);
    }

    #[test]
    fn finds_classic_chain() {
        let d = dict(&["cold", "cord", "card", "ward", "warm"]);
        let path = shortest_path(&w("cold"), &w("warm"), &d);
        assert_eq!(texts(&path), ["cold", "cord", "card", "ward", "warm"]);
    }

    #[test]
    fn unreachable_target_yields_empty_path() {
        let d = dict(&["star", "stay", "stir", "sear", "moon"]);
        let path = shortest_path(&w("star"), &w("moon"), &d);
        assert!(path.is_empty());
    }

    #[test]
    fn start_equals_target_is_trivial_path() {
        let d = dict(&["cold", "warm"]);
        let path = shortest_path(&w("cold"), &w("cold"), &d);
        assert_eq!(texts(&path), ["cold"]);
    }

    #[test]
    fn non_member_endpoints_yield_empty_path() {
        let d = dict(&["cold", "cord"]);
        assert!(shortest_path(&w("warm"), &w("cord"), &d).is_empty());
        assert!(shortest_path(&w("cold"), &w("warm"), &d).is_empty());
    }

    #[test]
    fn tie_break_is_deterministic() {
        // Two shortest ladders exist: cord-card-care and cord-core-care.
        // Position 1 is examined before position 3, so "card" is discovered
        // first and must win every time.
        let d = dict(&["cord", "card", "core", "care"]);
        let path = shortest_path(&w("cord"), &w("care"), &d);
        assert_eq!(texts(&path), ["cord", "card", "care"]);
    }

    #[test]
    fn path_is_minimal_not_just_valid() {
        // tape-tale-tile-time is a valid ladder, but tape-tame-time is shorter
        let d = dict(&["tape", "tale", "tile", "time", "tame"]);
        let path = shortest_path(&w("tape"), &w("time"), &d);
        assert_eq!(texts(&path), ["tape", "tame", "time"]);
    }

    #[test]
    fn every_step_is_single_letter_change() {
        let d = dict(&["cold", "cord", "card", "ward", "warm", "wart", "want"]);
        let path = shortest_path(&w("cold"), &w("want"), &d);
        assert!(path.len() >= 2);
        for pair in path.windows(2) {
            assert!(pair[0].is_single_letter_change(&pair[1]));
        }
    }

    #[test]
    fn expansion_cap_fails_closed() {
        let d = dict(&["cold", "cord", "card", "ward", "warm"]);
        let path = shortest_path_bounded(&w("cold"), &w("warm"), &d, Some(1));
        assert!(path.is_empty());

        // A generous cap leaves the result intact
        let path = shortest_path_bounded(&w("cold"), &w("warm"), &d, Some(1000));
        assert_eq!(path.len(), 5);
    }
}
