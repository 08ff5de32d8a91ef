#![allow(dead_code)]

use shuangforge::config::ScoringWeights;
use shuangforge::phonetics::{self, add_zero_consonant_tag};
use shuangforge::scorer::loader::FrequencyTables;
use shuangforge::scorer::Scorer;
use std::collections::BTreeMap;

pub const INITIALS: [&str; 23] = [
    "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "z", "c", "s", "r",
    "y", "w", "zh", "ch", "sh",
];

/// Every resolvable unit with a deterministic, uneven frequency, and one
/// initial-to-final pair per combination.
pub fn synthetic_tables() -> FrequencyTables {
    let mut singles = BTreeMap::new();
    let mut pairs = BTreeMap::new();

    for (i, initial) in INITIALS.iter().enumerate() {
        singles.insert(initial.to_string(), 0.5 + (i % 5) as f64 * 0.3);
        for (j, final_) in phonetics::all_finals().enumerate() {
            let freq = 0.01 * ((i * 7 + j * 3) % 11) as f64;
            pairs.insert((initial.to_string(), final_.to_string()), freq);
        }
    }
    for (j, final_) in phonetics::all_finals().enumerate() {
        singles.insert(final_.to_string(), 0.2 + (j % 4) as f64 * 0.25);
        pairs.insert((final_.to_string(), "d".to_string()), 0.02);
    }
    for final_ in phonetics::zero_consonant_finals() {
        singles.insert(add_zero_consonant_tag(final_), 0.3);
        pairs.insert((add_zero_consonant_tag(final_), "sh".to_string()), 0.05);
    }

    FrequencyTables::new(singles, pairs).unwrap()
}

pub fn synthetic_scorer() -> Scorer {
    Scorer::new(synthetic_tables(), ScoringWeights::default()).unwrap()
}

pub fn tables_from(singles: &[(&str, f64)], pairs: &[((&str, &str), f64)]) -> FrequencyTables {
    FrequencyTables::new(
        singles.iter().map(|(u, f)| (u.to_string(), *f)).collect(),
        pairs
            .iter()
            .map(|((a, b), f)| ((a.to_string(), b.to_string()), *f))
            .collect(),
    )
    .unwrap()
}
