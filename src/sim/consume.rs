//! Word consumption resolver
//!
//! Two phases: a multiset feasibility check over the active letters, then a
//! stable left-to-right pick of concrete instances. Nothing is selected unless
//! the whole word fits.

use std::collections::BTreeMap;

use super::letter::{Letter, LetterId};

/// Outcome of resolving a word against the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Letters to remove, one per word character, in word order
    Feasible(Vec<LetterId>),
    /// Characters in short supply and by how many (sorted by character)
    Infeasible { missing: Vec<(char, usize)> },
}

impl Resolution {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Resolution::Feasible(_))
    }
}

/// Uppercase one character, keeping it as is when the uppercase form is
/// not a single character (e.g. 'ß')
pub fn normalize_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Uppercase a word into its character sequence
pub fn normalize(word: &str) -> Vec<char> {
    word.chars().map(normalize_char).collect()
}

fn frequencies(chars: impl IntoIterator<Item = char>) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in chars {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Decide whether `word` can be built from the active letters and pick them
pub fn resolve(word: &str, letters: &[Letter]) -> Resolution {
    let chars = normalize(word);

    let required = frequencies(chars.iter().copied());
    let available = frequencies(letters.iter().filter(|l| l.is_active()).map(|l| l.ch));

    let missing: Vec<(char, usize)> = required
        .iter()
        .filter_map(|(&c, &need)| {
            let have = available.get(&c).copied().unwrap_or(0);
            (have < need).then(|| (c, need - have))
        })
        .collect();
    if !missing.is_empty() {
        return Resolution::Infeasible { missing };
    }

    let mut taken = vec![false; letters.len()];
    let mut selected = Vec::with_capacity(chars.len());
    for c in chars {
        let found = letters
            .iter()
            .enumerate()
            .position(|(i, l)| !taken[i] && l.is_active() && l.ch == c);
        match found {
            Some(i) => {
                taken[i] = true;
                selected.push(letters[i].id);
            }
            // Unreachable after the frequency check; report rather than panic
            None => return Resolution::Infeasible { missing: vec![(c, 1)] },
        }
    }

    Resolution::Feasible(selected)
}
