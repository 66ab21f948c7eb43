//! The `PREFIX` token: which nick prefix symbol stands for which channel mode.

use std::collections::HashMap;
use std::fmt;

/// A parsed `PREFIX` value such as `(qaohv)~&@%+`.
///
/// Pairs are kept in declaration order, which servers use as rank order
/// (highest first).
///
/// # Example
///
/// ```
/// use slirc_isupport::PrefixSpec;
///
/// let spec = PrefixSpec::parse("(ov)@+").unwrap();
/// assert_eq!(spec.mode_for_prefix('@'), Some('o'));
/// assert_eq!(spec.prefix_for_mode('v'), Some('+'));
/// assert_eq!(spec.split_nick("@+alice"), (vec!['o', 'v'], "alice"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixSpec {
    /// `(mode, symbol)` pairs.
    pairs: Vec<(char, char)>,
}

impl PrefixSpec {
    /// Parse a `(<modes>)<symbols>` value.
    ///
    /// Returns `None` if the value is empty, does not start with `(`, has no
    /// `)`, or if the mode and symbol runs differ in length. Modes end at the
    /// first `)`; every character after it is a symbol.
    pub fn parse(value: &str) -> Option<Self> {
        let (modes, symbols) = value.strip_prefix('(')?.split_once(')')?;

        if modes.chars().count() != symbols.chars().count() {
            return None;
        }

        Some(PrefixSpec {
            pairs: modes.chars().zip(symbols.chars()).collect(),
        })
    }

    /// Mode letter governed by a prefix symbol (`'@'` → `'o'`).
    pub fn mode_for_prefix(&self, symbol: char) -> Option<char> {
        self.pairs
            .iter()
            .rev()
            .find(|&&(_, s)| s == symbol)
            .map(|&(m, _)| m)
    }

    /// Prefix symbol shown for a mode letter (`'o'` → `'@'`).
    pub fn prefix_for_mode(&self, mode: char) -> Option<char> {
        self.pairs
            .iter()
            .rev()
            .find(|&&(m, _)| m == mode)
            .map(|&(_, s)| s)
    }

    /// Position of `mode` in declaration order; lower is more privileged.
    pub fn rank(&self, mode: char) -> Option<usize> {
        self.pairs.iter().position(|&(m, _)| m == mode)
    }

    /// Symbol → mode lookup table.
    pub fn to_map(&self) -> HashMap<char, char> {
        self.pairs.iter().map(|&(mode, symbol)| (symbol, mode)).collect()
    }

    /// Strip leading prefix symbols from a `NAMES`/`WHO` style entry.
    ///
    /// Handles `multi-prefix` (`"@+nick"`). The modes come back in the order
    /// their symbols appeared.
    pub fn split_nick<'n>(&self, entry: &'n str) -> (Vec<char>, &'n str) {
        let mut modes = Vec::new();
        for (idx, c) in entry.char_indices() {
            match self.mode_for_prefix(c) {
                Some(mode) => modes.push(mode),
                None => return (modes, &entry[idx..]),
            }
        }
        (modes, "")
    }

    /// Iterate over `(mode, symbol)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for PrefixSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modes: String = self.pairs.iter().map(|&(m, _)| m).collect();
        let symbols: String = self.pairs.iter().map(|&(_, s)| s).collect();
        write!(f, "({}){}", modes, symbols)
    }
}
