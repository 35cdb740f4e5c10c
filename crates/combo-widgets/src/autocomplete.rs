#![forbid(unsafe_code)]

//! Prefix matching for inline type-ahead.
//!
//! Strict where [`filter`](crate::filter) is permissive: only an option whose
//! match key *starts with* the input text qualifies. Text that matches only
//! mid-key ("lor" in "Florida") is visible in the filtered list but never
//! autocompletes.

use crate::catalog::{Catalog, ComboOption};

/// A type-ahead match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Catalog position of the matched option.
    pub index: usize,
    /// The matched option.
    pub option: &'a ComboOption,
    /// Byte length of the portion of the match key covered by the input text.
    pub matched_len: usize,
}

impl<'a> PrefixMatch<'a> {
    /// The part of the match key the user has not typed yet.
    pub fn missing_suffix(&self) -> &'a str {
        &self.option.match_key()[self.matched_len..]
    }
}

/// First option, in catalog order, whose match key starts with `text`
/// ignoring case. `None` for empty text.
///
/// Case folding is the same whole-string lowercasing [`filter`](crate::filter)
/// uses, so every prefix match is also visible in the filtered list.
pub fn match_prefix<'a>(catalog: &'a Catalog, text: &str) -> Option<PrefixMatch<'a>> {
    if text.is_empty() {
        return None;
    }
    let needle = text.to_lowercase();
    catalog.iter().enumerate().find_map(|(index, option)| {
        if !option.folded_key().starts_with(&needle) {
            return None;
        }
        key_len_for_folded(option.match_key(), needle.len()).map(|matched_len| PrefixMatch {
            index,
            option,
            matched_len,
        })
    })
}

/// Byte length of the prefix of `key` whose lowercase form is `folded_len`
/// bytes long. `None` when `folded_len` falls inside the expansion of a
/// single char.
///
/// Per-char lowercase lengths add up to the whole-string lowercase length:
/// the only context-sensitive mapping (final sigma) swaps between two
/// letters of equal width.
fn key_len_for_folded(key: &str, folded_len: usize) -> Option<usize> {
    let mut folded = 0;
    for (i, ch) in key.char_indices() {
        if folded == folded_len {
            return Some(i);
        }
        if folded > folded_len {
            return None;
        }
        folded += ch.to_lowercase().map(char::len_utf8).sum::<usize>();
    }
    (folded == folded_len).then_some(key.len())
}
