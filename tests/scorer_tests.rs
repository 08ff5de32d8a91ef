mod common;

use common::{synthetic_scorer, synthetic_tables, tables_from};
use shuangforge::config::ScoringWeights;
use shuangforge::error::ShuangForgeError;
use shuangforge::geometry::Key;
use shuangforge::layouts::{get_all_schemes, KnownScheme};
use shuangforge::scorer::engine::key_frequencies;
use shuangforge::scorer::{Scorer, Scores, BASELINE};

const EPS: f64 = 1e-12;

fn scorer_with(singles: &[(&str, f64)], pairs: &[((&str, &str), f64)]) -> Scorer {
    Scorer::new(tables_from(singles, pairs), ScoringWeights::default()).unwrap()
}

#[test]
fn test_zero_consonant_pair_on_two_hands_alternates() {
    // Xiaohe types `an` as A then N.
    let scorer = scorer_with(&[("anF", 2.0)], &[]);
    let s = scorer.score(&KnownScheme::Xiaohe.config()).unwrap();
    assert_eq!(s.hand_alternation, 0.0);
    assert_eq!(s.finger_alternation, 0.0);
    assert_eq!(s.avoidance_of_big_steps, 0.0);
    assert_eq!(s.hit_direction, 0.0);
}

#[test]
fn test_zero_consonant_pair_on_one_hand() {
    let scorer = scorer_with(&[("anF", 2.0)], &[]);
    let mut config = KnownScheme::Xiaohe.config();
    config
        .zero_consonant_final_layout
        .insert("an".into(), (Key::A, Key::G));

    let s = scorer.score(&config).unwrap();
    assert!((s.hand_alternation - 0.02).abs() < EPS);
    // Little -> Index
    assert!((s.avoidance_of_big_steps - 0.12).abs() < EPS);
    assert_eq!(s.finger_alternation, 0.0);
    assert_eq!(s.hit_direction, 0.0);
}

#[test]
fn test_digraph_key_changes_pair_metrics() {
    let scorer = scorer_with(&[("zh", 1.0)], &[(("zh", "a"), 1.0)]);

    let mut on_a = KnownScheme::Xiaohe.config();
    on_a.digraph_initial_layout.insert("zh".into(), Key::A);
    let mut on_e = KnownScheme::Xiaohe.config();
    on_e.digraph_initial_layout.insert("zh".into(), Key::E);

    let a = scorer.score(&on_a).unwrap();
    let e = scorer.score(&on_e).unwrap();

    // A -> A: one finger, no travel.
    assert!((a.hand_alternation - 0.01).abs() < EPS);
    assert_eq!(a.hit_direction, 0.0);
    assert_eq!(a.avoidance_of_big_steps, 0.0);

    // E -> A: Middle -> Little strikes outward.
    assert!((e.hit_direction - 0.01).abs() < EPS);
    assert!((e.avoidance_of_big_steps - 0.07).abs() < EPS);
    assert_ne!(a.tapping_workload_distribution, e.tapping_workload_distribution);
}

#[test]
fn test_same_finger_pair_weighs_distance() {
    // Xiaohe: `iu` on Q, `a` on A. Q -> A is one row on the little finger.
    let scorer = scorer_with(&[("b", 1.0)], &[(("iu", "a"), 3.0)]);
    let s = scorer.score(&KnownScheme::Xiaohe.config()).unwrap();
    assert!((s.finger_alternation - 0.03).abs() < EPS);
    assert!((s.hand_alternation - 0.03).abs() < EPS);
}

#[test]
fn test_workload_is_squared_deviation_from_ideal() {
    let scorer = scorer_with(&[("b", 10.0)], &[]);
    let s = scorer.score(&KnownScheme::Xiaohe.config()).unwrap();
    let ideal = Key::B.ideal_workload().unwrap();
    let expected = ((10.0 - ideal) / 100.0).powi(2);
    assert!((s.tapping_workload_distribution - expected).abs() < EPS);
}

#[test]
fn test_zero_consonant_units_load_both_keys() {
    let tables = tables_from(&[("aoF", 4.0), ("c", 1.0)], &[]);
    let freqs = key_frequencies(&KnownScheme::Xiaohe.config(), &tables).unwrap();
    assert_eq!(freqs.get(&Key::A), Some(&4.0));
    assert_eq!(freqs.get(&Key::O), Some(&4.0));
    assert_eq!(freqs.get(&Key::C), Some(&1.0));
    assert_eq!(freqs.len(), 3);
}

#[test]
fn test_variant_frequencies_follow_their_standard() {
    // Xiaohe: `ing` shares `uai`'s key K.
    let split = scorer_with(&[("ing", 1.0), ("uai", 1.0)], &[(("ing", "d"), 1.0)]);
    let merged = scorer_with(&[("uai", 2.0)], &[(("uai", "d"), 1.0)]);
    let config = KnownScheme::Xiaohe.config();
    assert_eq!(split.score(&config).unwrap(), merged.score(&config).unwrap());
}

#[test]
fn test_unknown_unit_fails() {
    let scorer = scorer_with(&[("qq", 1.0)], &[]);
    let res = scorer.score(&KnownScheme::Xiaohe.config());
    assert!(matches!(res, Err(ShuangForgeError::UnknownUnit(_))));
}

#[test]
fn test_scoring_is_repeatable() {
    let scorer = synthetic_scorer();
    let tables_before = scorer.tables.clone();
    for (_, config) in get_all_schemes() {
        let first = scorer.score(&config).unwrap();
        let second = scorer.score(&config).unwrap();
        assert_eq!(first, second);
        assert!(first.is_finite());
    }
    assert_eq!(scorer.tables, tables_before);
}

#[test]
fn test_weighted_score_formula() {
    let scorer = synthetic_scorer();
    let config = KnownScheme::Ziranma.config();
    let s = scorer.score(&config).unwrap();
    let w = ScoringWeights::default();

    let expected = s.tapping_workload_distribution / BASELINE.tapping_workload_distribution * 0.45
        + s.hand_alternation / BASELINE.hand_alternation * w.weight_hand_alternation
        + s.finger_alternation / BASELINE.finger_alternation * 0.8
        + s.avoidance_of_big_steps / BASELINE.avoidance_of_big_steps * 0.7
        + s.hit_direction / BASELINE.hit_direction * 0.6;

    let total = scorer.weighted_score(&config).unwrap();
    assert!((total - expected).abs() < 1e-9);
}

#[test]
fn test_baseline_scores_one_per_weight() {
    let scorer = synthetic_scorer();
    let total = scorer.combine(&BASELINE);
    assert!((total - (0.45 + 1.0 + 0.8 + 0.7 + 0.6)).abs() < 1e-9);
}

#[test]
fn test_scorer_rejects_bad_inputs() {
    let zero_baseline = Scorer::with_baseline(
        synthetic_tables(),
        ScoringWeights::default(),
        Scores::default(),
    );
    assert!(matches!(zero_baseline, Err(ShuangForgeError::Config(_))));

    let negative = ScoringWeights {
        weight_big_steps: -1.0,
        ..Default::default()
    };
    assert!(Scorer::new(synthetic_tables(), negative).is_err());
}
