use super::loader::FrequencyTables;
use super::physics::{analyze_interaction, KeyInteraction};
use super::Scores;
use crate::error::{ShuangForgeError, SfResult};
use crate::geometry::Key;
use crate::phonetics::{add_zero_consonant_tag, is_zero_consonant_final, strip_zero_consonant_tag};
use crate::scheme::{ShuangpinConfig, Side};
use std::collections::BTreeMap;

/// Computes the five metrics over tables that are already standardized.
pub fn score_standardized(config: &ShuangpinConfig, tables: &FrequencyTables) -> SfResult<Scores> {
    let mut scores = Scores {
        tapping_workload_distribution: tapping_workload_distribution(config, tables)?,
        ..Scores::default()
    };

    // 1. Ordered unit pairs: the first unit ends on its right key,
    //    the second starts on its left key.
    for ((a, b), &freq) in &tables.pairs {
        let ka = config.key_for(a, Side::Right)?;
        let kb = config.key_for(b, Side::Left)?;
        accumulate(&mut scores, &analyze_interaction(ka, kb), freq);
    }

    // 2. The two strokes inside each zero-consonant final.
    for (final_, &(left, right)) in &config.zero_consonant_final_layout {
        let freq = tables
            .singles
            .get(&add_zero_consonant_tag(final_))
            .copied()
            .unwrap_or(0.0);
        accumulate(&mut scores, &analyze_interaction(left, right), freq);
    }

    scores.hand_alternation /= 100.0;
    scores.finger_alternation /= 100.0;
    scores.avoidance_of_big_steps /= 100.0;
    scores.hit_direction /= 100.0;
    Ok(scores)
}

fn accumulate(scores: &mut Scores, m: &KeyInteraction, freq: f64) {
    if !m.is_same_hand {
        return;
    }
    scores.hand_alternation += freq;
    if m.is_same_finger {
        scores.finger_alternation += freq * m.distance as f64;
    }
    scores.avoidance_of_big_steps += freq * m.big_step as f64;
    if m.is_reverse_direction {
        scores.hit_direction += freq;
    }
}

/// Per-key usage, with both strokes of a zero-consonant final counted in full.
pub fn key_frequencies(
    config: &ShuangpinConfig,
    tables: &FrequencyTables,
) -> SfResult<BTreeMap<Key, f64>> {
    let mut key_freqs: BTreeMap<Key, f64> = BTreeMap::new();
    for (unit, &freq) in &tables.singles {
        if is_zero_consonant_final(unit) {
            let final_ = strip_zero_consonant_tag(unit);
            let &(left, right) = config
                .zero_consonant_final_layout
                .get(final_)
                .ok_or_else(|| ShuangForgeError::UnknownUnit(unit.clone()))?;
            *key_freqs.entry(left).or_insert(0.0) += freq;
            *key_freqs.entry(right).or_insert(0.0) += freq;
        } else {
            let key = config.key_for(unit, Side::Left)?;
            *key_freqs.entry(key).or_insert(0.0) += freq;
        }
    }
    Ok(key_freqs)
}

fn tapping_workload_distribution(
    config: &ShuangpinConfig,
    tables: &FrequencyTables,
) -> SfResult<f64> {
    let mut total = 0.0;
    for (key, freq) in key_frequencies(config, tables)? {
        let deviation = (freq - key.ideal_workload()?) / 100.0;
        total += deviation * deviation;
    }
    Ok(total)
}
