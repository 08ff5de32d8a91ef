use crate::error::{ShuangForgeError, SfResult};
use crate::geometry::Key;
use crate::phonetics::{self, DIGRAPH_INITIALS, FIXED_ZERO_CONSONANT_FINALS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Which key of a zero-consonant pair a lookup should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Standard final -> key, kept in standard-final order so two layouts built
/// from identical draws serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalLayout(Vec<(String, Key)>);

impl FinalLayout {
    pub fn new(entries: Vec<(String, Key)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, final_: &str) -> Option<Key> {
        self.0.iter().find(|(f, _)| f == final_).map(|(_, k)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Key)> {
        self.0.iter().map(|(f, k)| (f.as_str(), *k))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Initial key -> finals it may combine with. Order matters: the generator
/// walks entries front to back and expects the smallest sets first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitialConstraints(Vec<(Key, BTreeSet<String>)>);

impl InitialConstraints {
    /// Keeps the caller's order as given.
    pub fn new(entries: Vec<(Key, BTreeSet<String>)>) -> Self {
        Self(entries)
    }

    /// Orders entries by ascending set size (stable for equal sizes).
    pub fn sorted_by_size(mut entries: Vec<(Key, BTreeSet<String>)>) -> Self {
        entries.sort_by_key(|(_, finals)| finals.len());
        Self(entries)
    }

    pub fn defaults() -> Self {
        Self::sorted_by_size(
            phonetics::DEFAULT_INITIAL_CONSTRAINTS
                .iter()
                .map(|(k, finals)| (*k, finals.iter().map(|f| f.to_string()).collect()))
                .collect(),
        )
    }

    pub fn is_sorted_by_size(&self) -> bool {
        self.0.windows(2).all(|w| w[0].1.len() <= w[1].1.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, &BTreeSet<String>)> {
        self.0.iter().map(|(k, s)| (*k, s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuangpinConfig {
    pub final_layout: FinalLayout,
    /// Unique among digraph initials, but may share a key with a final.
    pub digraph_initial_layout: BTreeMap<String, Key>,
    pub zero_consonant_final_layout: BTreeMap<String, (Key, Key)>,
    /// Variant final -> standard final. The standard finals must be unique.
    pub variant_to_standard_finals: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_constraints: Option<InitialConstraints>,
}

pub fn default_variant_to_standard_finals() -> BTreeMap<String, String> {
    phonetics::DEFAULT_VARIANT_TO_STANDARD_FINALS
        .iter()
        .map(|(v, s)| (v.to_string(), s.to_string()))
        .collect()
}

impl ShuangpinConfig {
    pub fn standard_final<'a>(&'a self, final_: &'a str) -> &'a str {
        self.variant_to_standard_finals
            .get(final_)
            .map(String::as_str)
            .unwrap_or(final_)
    }

    /// Resolves any frequency-table unit to the key typed for it.
    ///
    /// Zero-consonant units take the `side` key of their pair, digraph
    /// initials their own key, finals the key of their standard form, and
    /// anything else must already be a key name (single-letter initials).
    pub fn key_for(&self, unit: &str, side: Side) -> SfResult<Key> {
        if phonetics::is_zero_consonant_final(unit) {
            let final_ = phonetics::strip_zero_consonant_tag(unit);
            let (left, right) = self
                .zero_consonant_final_layout
                .get(final_)
                .ok_or_else(|| ShuangForgeError::UnknownUnit(unit.to_string()))?;
            return Ok(match side {
                Side::Left => *left,
                Side::Right => *right,
            });
        }
        if phonetics::is_digraph_initial(unit) {
            return self
                .digraph_initial_layout
                .get(unit)
                .copied()
                .ok_or_else(|| ShuangForgeError::UnknownUnit(unit.to_string()));
        }
        let standard = self.standard_final(unit);
        match self.final_layout.get(standard) {
            Some(key) => Ok(key),
            None => Key::parse(standard).map_err(|_| ShuangForgeError::UnknownUnit(unit.to_string())),
        }
    }

    /// Key a final is bound to regardless of the draw: its own letter for a
    /// fixed final, or the letter of the fixed final aliasing onto it.
    fn reserved_key(&self, final_: &str) -> Option<Key> {
        phonetics::fixed_final_key(final_).or_else(|| {
            self.variant_to_standard_finals
                .iter()
                .filter(|(_, s)| s.as_str() == final_)
                .find_map(|(v, _)| phonetics::fixed_final_key(v))
        })
    }

    /// Checks the structural invariants a generated or hand-written scheme
    /// must satisfy before it can be scored.
    pub fn validate(&self) -> SfResult<()> {
        let fail = |msg: String| Err(ShuangForgeError::Validation(msg));

        // Variants
        let mut targets = HashSet::new();
        for (variant, standard) in &self.variant_to_standard_finals {
            if !phonetics::is_final(variant) || !phonetics::is_final(standard) {
                return fail(format!("Unknown final in alias {} -> {}", variant, standard));
            }
            if self.variant_to_standard_finals.contains_key(standard) {
                return fail(format!("'{}' is both a variant and a standard final", standard));
            }
            if !targets.insert(standard.as_str()) {
                return fail(format!("Two variants collapse onto '{}'", standard));
            }
        }

        // Finals
        let mut seen_keys: HashMap<Key, &str> = HashMap::new();
        for (final_, key) in self.final_layout.iter() {
            if !phonetics::is_final(final_) {
                return fail(format!("Unknown final '{}' in layout", final_));
            }
            if self.variant_to_standard_finals.contains_key(final_) {
                return fail(format!("Variant '{}' has its own key", final_));
            }
            match self.reserved_key(final_) {
                Some(fixed) if fixed != key => {
                    return fail(format!("'{}' must sit on {}, not {}", final_, fixed, key));
                }
                None if phonetics::fixed_keys().any(|k| k == key) => {
                    return fail(format!("'{}' takes fixed key {}", final_, key));
                }
                _ => {}
            }
            if let Some(other) = seen_keys.insert(key, final_) {
                return fail(format!("'{}' and '{}' share key {}", other, final_, key));
            }
        }
        for final_ in phonetics::all_finals() {
            let standard = self.standard_final(final_);
            let covered = self.final_layout.get(standard).is_some()
                || phonetics::fixed_final_key(standard).is_some();
            if !covered {
                return fail(format!("Final '{}' has no key", final_));
            }
        }

        // Digraph initials
        let mut digraph_keys = HashSet::new();
        for initial in DIGRAPH_INITIALS {
            let key = match self.digraph_initial_layout.get(initial) {
                Some(k) => *k,
                None => return fail(format!("Digraph initial '{}' has no key", initial)),
            };
            if !phonetics::fixed_keys().any(|k| k == key) {
                return fail(format!("Digraph initial '{}' is not on a fixed key", initial));
            }
            if !digraph_keys.insert(key) {
                return fail(format!("Digraph initials share key {}", key));
            }
        }

        // Zero-consonant finals
        let reserved = phonetics::reserved_zero_consonant_pairs()?;
        let mut pairs = HashSet::new();
        for final_ in phonetics::zero_consonant_finals() {
            let pair = match self.zero_consonant_final_layout.get(final_) {
                Some(pair) => *pair,
                None => return fail(format!("Zero-consonant final '{}' has no keys", final_)),
            };
            if FIXED_ZERO_CONSONANT_FINALS.contains(&final_) {
                let expected = phonetics::fixed_zero_consonant_pair(final_)?;
                if pair != expected {
                    return fail(format!(
                        "Zero-consonant '{}' must be {:?}, not {:?}",
                        final_, expected, pair
                    ));
                }
            } else {
                if final_.chars().next() != Some(pair.0.as_char()) {
                    return fail(format!(
                        "Zero-consonant '{}' must start on its first letter, not {}",
                        final_, pair.0
                    ));
                }
                if reserved.contains(&pair) {
                    return fail(format!("Zero-consonant '{}' takes reserved pair {:?}", final_, pair));
                }
            }
            if !pairs.insert(pair) {
                return fail(format!("Zero-consonant pair {:?} is reused", pair));
            }
        }
        if let Some(extra) = self
            .zero_consonant_final_layout
            .keys()
            .find(|f| !phonetics::zero_consonant_finals().any(|z| z == f.as_str()))
        {
            return fail(format!("Unknown zero-consonant final '{}'", extra));
        }

        if let Some(constraints) = &self.initial_constraints {
            if !constraints.is_sorted_by_size() {
                warn!("Initial constraints are not ordered by ascending size.");
            }
        }

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: ShuangpinConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SfResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
