use crate::error::{ShuangForgeError, SfResult};
use crate::geometry::Key;
use crate::phonetics::{
    self, DIGRAPH_INITIALS, FIXED_VARIANT_TO_STANDARD_FINALS, FIXED_ZERO_CONSONANT_FINALS,
    FLEXIBLE_ZERO_CONSONANT_FINALS, NO_GKH_GROUP, NO_JQX_GROUP, ONLY_GKH_GROUP, ONLY_JQX_FINAL,
};
use crate::scheme::{FinalLayout, InitialConstraints, ShuangpinConfig};
use fastrand::Rng;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

/// Assigns a key to every standard final.
///
/// `variant_to_standard` must be injective on its values; this is not checked.
/// Returns `Ok(None)` when the aliasing and the initial constraints cannot be
/// satisfied together, which callers treat as "draw a new aliasing and retry".
pub fn generate_final_layout(
    rng: &mut Rng,
    variant_to_standard: &BTreeMap<String, String>,
    constraints: Option<&InitialConstraints>,
) -> SfResult<Option<FinalLayout>> {
    let standard_to_variant: HashMap<&str, &str> = variant_to_standard
        .iter()
        .map(|(v, s)| (s.as_str(), v.as_str()))
        .collect();
    let standard_finals: Vec<&str> = phonetics::all_finals()
        .filter(|f| !variant_to_standard.contains_key(*f))
        .collect();

    let mut layout: HashMap<&str, Key> = HashMap::new();
    let mut open_finals = standard_finals.clone();
    let mut free_keys: Vec<Key> = Key::ALL
        .iter()
        .copied()
        .filter(|k| !phonetics::fixed_keys().any(|fixed| fixed == *k))
        .collect();

    if let Some(constraints) = constraints {
        for (initial, acceptable) in constraints.iter() {
            let mut candidates = BTreeSet::new();
            for final_ in acceptable {
                if !phonetics::is_final(final_) {
                    return Err(ShuangForgeError::Validation(format!(
                        "Constraint for '{}' names unknown final '{}'",
                        initial, final_
                    )));
                }
                // A final only qualifies if the final it shares a key with does too.
                let partner_ok = if let Some(standard) = variant_to_standard.get(final_) {
                    acceptable.contains(standard)
                } else if let Some(variant) = standard_to_variant.get(final_.as_str()) {
                    acceptable.contains(*variant)
                } else {
                    true
                };
                if partner_ok {
                    let standard = variant_to_standard
                        .get(final_)
                        .map(String::as_str)
                        .unwrap_or(final_.as_str());
                    if open_finals.contains(&standard) {
                        candidates.insert(standard);
                    }
                }
            }

            if candidates.is_empty() {
                debug!("No standard final left for initial '{}'", initial);
                return Ok(None);
            }

            let candidates: Vec<&str> = candidates.into_iter().collect();
            let chosen = candidates[rng.usize(..candidates.len())];

            // The initial's own key hosts the final.
            let key_pos = free_keys.iter().position(|k| *k == initial).ok_or_else(|| {
                ShuangForgeError::Validation(format!(
                    "Initial key '{}' is not an available flexible key",
                    initial
                ))
            })?;
            free_keys.remove(key_pos);
            open_finals.retain(|f| *f != chosen);
            layout.insert(chosen, initial);
        }
    }

    for final_ in open_finals {
        if let Some(key) = phonetics::fixed_final_key(final_) {
            layout.insert(final_, key);
        } else if let Some(key) = standard_to_variant
            .get(final_)
            .and_then(|v| phonetics::fixed_final_key(v))
        {
            layout.insert(final_, key);
        } else {
            if free_keys.is_empty() {
                debug!("Ran out of flexible keys at '{}'", final_);
                return Ok(None);
            }
            let key = free_keys.remove(rng.usize(..free_keys.len()));
            layout.insert(final_, key);
        }
    }

    let entries = standard_finals
        .iter()
        .filter_map(|f| layout.get(f).map(|k| (f.to_string(), *k)))
        .collect();
    Ok(Some(FinalLayout::new(entries)))
}

/// Gives `zh`, `ch`, `sh` distinct keys among the six fixed-final keys.
pub fn generate_digraph_initial_layout(rng: &mut Rng) -> BTreeMap<String, Key> {
    let mut pool: Vec<Key> = phonetics::fixed_keys().collect();
    DIGRAPH_INITIALS
        .iter()
        .map(|initial| {
            let key = pool.remove(rng.usize(..pool.len()));
            (initial.to_string(), key)
        })
        .collect()
}

pub fn generate_zero_consonant_final_layout(rng: &mut Rng) -> SfResult<BTreeMap<String, (Key, Key)>> {
    let reserved = phonetics::reserved_zero_consonant_pairs()?;

    let mut pools: BTreeMap<Key, Vec<(Key, Key)>> = BTreeMap::new();
    let mut layout = BTreeMap::new();

    for final_ in FLEXIBLE_ZERO_CONSONANT_FINALS {
        let first = final_
            .chars()
            .next()
            .ok_or_else(|| ShuangForgeError::Validation("Empty zero-consonant final".into()))?;
        let first = Key::from_char(first)?;
        let pool = pools.entry(first).or_insert_with(|| {
            Key::ALL
                .iter()
                .map(|second| (first, *second))
                .filter(|pair| !reserved.contains(pair))
                .collect()
        });
        let pair = pool.remove(rng.usize(..pool.len()));
        layout.insert(final_.to_string(), pair);
    }

    for (final_, pair) in FIXED_ZERO_CONSONANT_FINALS.iter().zip(reserved) {
        layout.insert(final_.to_string(), pair);
    }

    Ok(layout)
}

/// Draws an aliasing that is injective on its standard finals by construction.
pub fn generate_variant_to_standard_finals(rng: &mut Rng) -> BTreeMap<String, String> {
    let mut mapping: BTreeMap<String, String> = FIXED_VARIANT_TO_STANDARD_FINALS
        .iter()
        .map(|(v, s)| (v.to_string(), s.to_string()))
        .collect();

    let jqx_host = NO_JQX_GROUP[rng.usize(..NO_JQX_GROUP.len())];
    mapping.insert(ONLY_JQX_FINAL.to_string(), jqx_host.to_string());

    let mut no_gkh: Vec<&str> = NO_GKH_GROUP.to_vec();
    for only_gkh in ONLY_GKH_GROUP {
        let host = no_gkh.remove(rng.usize(..no_gkh.len()));
        mapping.insert(only_gkh.to_string(), host.to_string());
    }

    mapping
}

/// Draws whole configurations until one satisfies the constraints, giving up
/// with [`ShuangForgeError::SearchExhausted`] after `max_attempts` draws.
pub fn generate_config(
    rng: &mut Rng,
    constraints: Option<&InitialConstraints>,
    max_attempts: usize,
) -> SfResult<ShuangpinConfig> {
    if constraints.is_some_and(|c| !c.is_sorted_by_size()) {
        warn!("Initial constraints are not ordered smallest-first; results may be biased.");
    }

    for attempt in 1..=max_attempts {
        let variant_to_standard_finals = generate_variant_to_standard_finals(rng);
        let final_layout =
            match generate_final_layout(rng, &variant_to_standard_finals, constraints)? {
                Some(layout) => layout,
                None => continue,
            };

        if attempt > 1 {
            debug!("Feasible layout found after {} attempts", attempt);
        }

        return Ok(ShuangpinConfig {
            final_layout,
            digraph_initial_layout: generate_digraph_initial_layout(rng),
            zero_consonant_final_layout: generate_zero_consonant_final_layout(rng)?,
            variant_to_standard_finals,
            initial_constraints: constraints.cloned(),
        });
    }

    Err(ShuangForgeError::SearchExhausted {
        attempts: max_attempts,
    })
}
