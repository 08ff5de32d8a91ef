//! Phonetic inventory of the scheme: which finals exist, which of them sit on
//! fixed keys, and which groups may share a key without ambiguity.

use crate::error::{ShuangForgeError, SfResult};
use crate::geometry::Key;

/// Frequency-table units carrying this suffix are zero-consonant finals.
pub const ZERO_CONSONANT_TAG: char = 'F';

pub const DIGRAPH_INITIALS: [&str; 3] = ["zh", "ch", "sh"];

/// Finals whose key is their own letter.
pub const FIXED_FINALS: [(&str, Key); 6] = [
    ("a", Key::A),
    ("e", Key::E),
    ("i", Key::I),
    ("o", Key::O),
    ("u", Key::U),
    ("v", Key::V),
];

pub const FLEXIBLE_FINALS: [&str; 27] = [
    "iu", "ei", "uan", "ue", "un", "uo", "ie", "ong", "ai", "en", "eng", "ang", "an", "uai",
    "uang", "ou", "ua", "ao", "ui", "in", "iao", "ian", "ve", "iong", "ing", "iang", "ia",
];

/// Aliases every scheme shares: `ve`/`ue`, `o`/`uo` and `v`/`ui` never collide.
pub const FIXED_VARIANT_TO_STANDARD_FINALS: [(&str, &str); 3] =
    [("ve", "ue"), ("o", "uo"), ("v", "ui")];

/// Only follows `j`, `q`, `x`.
pub const ONLY_JQX_FINAL: &str = "iong";

/// Never follows `j`, `q`, `x`, so any of them can host [`ONLY_JQX_FINAL`].
pub const NO_JQX_GROUP: [&str; 9] = ["ong", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng"];

/// Only follow `g`, `k`, `h` (and the digraph initials).
pub const ONLY_GKH_GROUP: [&str; 3] = ["ua", "uai", "uang"];

/// Never follow `g`, `k`, `h`.
pub const NO_GKH_GROUP: [&str; 8] = ["ia", "ie", "iao", "ian", "iang", "in", "ing", "iu"];

/// The Xiaohe / Ziranma aliasing.
pub const DEFAULT_VARIANT_TO_STANDARD_FINALS: [(&str, &str); 7] = [
    ("ve", "ue"),
    ("o", "uo"),
    ("iong", "ong"),
    ("ing", "uai"),
    ("iang", "uang"),
    ("ia", "ua"),
    ("v", "ui"),
];

/// Finals each single-letter initial key must host, smallest set first.
/// `g` keeps `n`+`g` unambiguous, `h` keeps `z`/`c`/`s`+`h` unambiguous.
pub const DEFAULT_INITIAL_CONSTRAINTS: [(Key, &[&str]); 2] = [
    (Key::G, &["ia", "ua", "iong", "uai", "ui", "uang"]),
    (
        Key::H,
        &[
            "ia", "ua", "ie", "iao", "iu", "ian", "in", "iang", "uang", "uai", "ing", "ue", "ve",
            "iong",
        ],
    ),
];

pub const FIXED_ZERO_CONSONANT_FINALS: [&str; 7] = ["ai", "ei", "ou", "an", "en", "ao", "er"];

/// Zero-consonant finals whose second key is free; the first key is always
/// the final's first letter.
pub const FLEXIBLE_ZERO_CONSONANT_FINALS: [&str; 5] = ["a", "e", "o", "ang", "eng"];

pub fn all_finals() -> impl Iterator<Item = &'static str> {
    FLEXIBLE_FINALS
        .iter()
        .copied()
        .chain(FIXED_FINALS.iter().map(|(f, _)| *f))
}

pub fn zero_consonant_finals() -> impl Iterator<Item = &'static str> {
    FLEXIBLE_ZERO_CONSONANT_FINALS
        .iter()
        .chain(FIXED_ZERO_CONSONANT_FINALS.iter())
        .copied()
}

/// The pair a fixed zero-consonant final is always typed with: its first two
/// letters read as keys.
pub fn fixed_zero_consonant_pair(final_: &str) -> SfResult<(Key, Key)> {
    let mut chars = final_.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => Ok((Key::from_char(a)?, Key::from_char(b)?)),
        _ => Err(ShuangForgeError::Validation(format!(
            "Zero-consonant final '{}' is too short for a fixed pair",
            final_
        ))),
    }
}

/// Pairs no flexible zero-consonant final may take.
pub fn reserved_zero_consonant_pairs() -> SfResult<Vec<(Key, Key)>> {
    FIXED_ZERO_CONSONANT_FINALS
        .iter()
        .map(|f| fixed_zero_consonant_pair(f))
        .collect()
}

pub fn is_final(unit: &str) -> bool {
    all_finals().any(|f| f == unit)
}

pub fn is_digraph_initial(unit: &str) -> bool {
    DIGRAPH_INITIALS.contains(&unit)
}

pub fn fixed_final_key(final_: &str) -> Option<Key> {
    FIXED_FINALS
        .iter()
        .find(|(f, _)| *f == final_)
        .map(|(_, k)| *k)
}

pub fn fixed_keys() -> impl Iterator<Item = Key> {
    FIXED_FINALS.iter().map(|(_, k)| *k)
}

pub fn is_zero_consonant_final(unit: &str) -> bool {
    unit.ends_with(ZERO_CONSONANT_TAG)
}

pub fn strip_zero_consonant_tag(unit: &str) -> &str {
    unit.strip_suffix(ZERO_CONSONANT_TAG).unwrap_or(unit)
}

pub fn add_zero_consonant_tag(final_: &str) -> String {
    format!("{}{}", final_, ZERO_CONSONANT_TAG)
}
