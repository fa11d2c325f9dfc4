// crates/busstop-core/src/text.rs

//! Query normalisation: folding, tokenisation and synonym rewriting.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How query and stop text are normalised before substring matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextFolding {
    /// Unicode lowercasing only.
    #[default]
    Lowercase,
    /// Lowercasing plus per-character ASCII transliteration with `deunicode`
    /// (`Bukìt` -> `bukit`, `ß` -> `ss`). Opt-in; characters without a
    /// transliteration are kept as they are.
    Transliterate,
}

impl TextFolding {
    pub fn fold(self, s: &str) -> String {
        match self {
            TextFolding::Lowercase => fold_key(s),
            TextFolding::Transliterate => transliterate_key(s),
        }
    }
}

/// Folded comparison key: the Unicode lowercase of `s`.
///
/// ```rust
/// use busstop_core::text::fold_key;
///
/// assert_eq!(fold_key("BT PANJANG"), "bt panjang");
/// assert_eq!(fold_key("Café"), "café");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Lowercased ASCII transliteration of `s`, one character at a time.
///
/// Whitespace in `s` is kept; whitespace inside a transliteration is dropped,
/// so a single word never turns into several.
///
/// ```rust
/// use busstop_core::text::transliterate_key;
///
/// assert_eq!(transliterate_key("Bukìt Tímah"), "bukit timah");
/// assert_eq!(transliterate_key("Straße"), "strasse");
/// assert_eq!(transliterate_key("東京"), "dongjing");
/// ```
pub fn transliterate_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_whitespace() {
            out.push(c);
            continue;
        }
        match deunicode::deunicode_char(c) {
            Some(ascii) => out.extend(
                ascii
                    .chars()
                    .filter(|a| !a.is_whitespace())
                    .flat_map(char::to_lowercase),
            ),
            None => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Splits a free-text query into lowercased tokens.
///
/// Leading, trailing and repeated whitespace is ignored. A blank query yields
/// no tokens, which `search` treats as "match everything".
///
/// ```rust
/// use busstop_core::text::tokenize;
///
/// assert_eq!(tokenize("  Bukit   PARK "), vec!["bukit", "park"]);
/// assert!(tokenize(" \t ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    tokenize_with(TextFolding::Lowercase, query)
}

/// [`tokenize`] with an explicit folding.
///
/// A word whose transliteration is empty (a lone combining mark, say) keeps
/// its lowercase form, so a non-blank query never becomes blank.
pub fn tokenize_with(folding: TextFolding, query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|word| {
            let token = folding.fold(word);
            if token.is_empty() {
                fold_key(word)
            } else {
                token
            }
        })
        .collect()
}

/// Rewrites every token found as a key in `table` to its mapped value.
///
/// Each token is looked up on its own; there are no multi-word synonyms.
pub fn expand_synonyms(tokens: Vec<String>, table: &SynonymTable) -> Vec<String> {
    if table.is_empty() {
        return tokens;
    }
    tokens
        .into_iter()
        .map(|token| match table.get(&token) {
            Some(mapped) => mapped.to_owned(),
            None => token,
        })
        .collect()
}

/// Mapping from a word users type to the form used in stop descriptions
/// (e.g. `"park" -> "pk"`).
///
/// Keys and values are lowercased on insertion, so lookups are case-insensitive.
/// Build one at startup and share it by reference; nothing mutates it once
/// queries begin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct SynonymTable {
    map: HashMap<String, String>,
}

impl SynonymTable {
    /// An empty table: every token maps to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a mapping.
    pub fn insert(&mut self, word: &str, replacement: &str) {
        self.map.insert(fold_key(word), fold_key(replacement));
    }

    /// Replacement for an already-folded token, if any.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Common street and place abbreviations used in Singapore stop names.
    pub fn standard() -> &'static SynonymTable {
        &STANDARD_ABBREVIATIONS
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for SynonymTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = SynonymTable::new();
        for (k, v) in iter {
            table.insert(k.as_ref(), v.as_ref());
        }
        table
    }
}

impl From<HashMap<String, String>> for SynonymTable {
    fn from(raw: HashMap<String, String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<SynonymTable> for HashMap<String, String> {
    fn from(table: SynonymTable) -> Self {
        table.map
    }
}

static STANDARD_ABBREVIATIONS: Lazy<SynonymTable> = Lazy::new(|| {
    [
        ("after", "aft"),
        ("avenue", "ave"),
        ("before", "bef"),
        ("block", "blk"),
        ("boulevard", "blvd"),
        ("building", "bldg"),
        ("bukit", "bt"),
        ("central", "ctrl"),
        ("centre", "ctr"),
        ("church", "ch"),
        ("close", "cl"),
        ("complex", "cplx"),
        ("condominium", "condo"),
        ("crescent", "cres"),
        ("drive", "dr"),
        ("garden", "gdn"),
        ("gardens", "gdns"),
        ("hospital", "hosp"),
        ("industrial", "ind"),
        ("interchange", "int"),
        ("jalan", "jln"),
        ("junction", "jct"),
        ("kampong", "kg"),
        ("lorong", "lor"),
        ("market", "mkt"),
        ("opposite", "opp"),
        ("park", "pk"),
        ("place", "pl"),
        ("primary", "pr"),
        ("road", "rd"),
        ("school", "sch"),
        ("secondary", "sec"),
        ("station", "stn"),
        ("street", "st"),
        ("tanjong", "tg"),
        ("terminal", "ter"),
        ("upper", "upp"),
    ]
    .into_iter()
    .collect()
});
