use rstest::rstest;
use shuangforge::error::ShuangForgeError;
use shuangforge::geometry::Key;
use shuangforge::layouts::KnownScheme;
use shuangforge::scheme::{FinalLayout, InitialConstraints, ShuangpinConfig, Side};
use std::collections::BTreeSet;

fn xiaohe() -> ShuangpinConfig {
    KnownScheme::Xiaohe.config()
}

fn set(finals: &[&str]) -> BTreeSet<String> {
    finals.iter().map(|f| f.to_string()).collect()
}

// --- KEY RESOLUTION ---

#[rstest]
#[case("anF", Side::Left, Key::A)]
#[case("anF", Side::Right, Key::N)]
#[case("zh", Side::Left, Key::V)]
#[case("sh", Side::Right, Key::U)]
#[case("ing", Side::Left, Key::K)] // Variant of uai
#[case("v", Side::Left, Key::V)] // Variant of ui
#[case("o", Side::Right, Key::O)] // Variant of uo
#[case("ian", Side::Left, Key::M)]
#[case("b", Side::Left, Key::B)] // Initial names its own key
fn test_key_for(#[case] unit: &str, #[case] side: Side, #[case] expected: Key) {
    assert_eq!(xiaohe().key_for(unit, side).unwrap(), expected);
}

#[test]
fn test_key_for_unknown_units() {
    let config = xiaohe();
    assert!(matches!(
        config.key_for("iaoF", Side::Left),
        Err(ShuangForgeError::UnknownUnit(_))
    ));
    assert!(config.key_for("ng", Side::Left).is_err());
}

// --- VALIDATION ---

#[test]
fn test_shared_final_key_is_invalid() {
    let mut config = xiaohe();
    let entries: Vec<(String, Key)> = config
        .final_layout
        .iter()
        .map(|(f, k)| (f.to_string(), if f == "iu" { Key::W } else { k }))
        .collect();
    config.final_layout = FinalLayout::new(entries);
    assert!(matches!(
        config.validate(),
        Err(ShuangForgeError::Validation(_))
    ));
}

#[test]
fn test_non_injective_aliasing_is_invalid() {
    let mut config = xiaohe();
    config
        .variant_to_standard_finals
        .insert("iang".into(), "uai".into());
    assert!(config.validate().is_err());
}

#[test]
fn test_digraph_rules() {
    let mut config = xiaohe();
    config.digraph_initial_layout.insert("zh".into(), Key::I);
    assert!(config.validate().is_err(), "zh and ch share I");

    let mut config = xiaohe();
    config.digraph_initial_layout.insert("zh".into(), Key::K);
    assert!(config.validate().is_err(), "K is not a fixed key");

    let mut config = xiaohe();
    config.digraph_initial_layout.insert("zh".into(), Key::A);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_consonant_rules() {
    let mut config = xiaohe();
    config
        .zero_consonant_final_layout
        .insert("a".into(), (Key::A, Key::I));
    assert!(config.validate().is_err(), "Reuses ai's pair");

    let mut config = xiaohe();
    config.zero_consonant_final_layout.remove("er");
    assert!(config.validate().is_err());
}

fn with_finals_moved(config: &ShuangpinConfig, moves: &[(&str, Key)]) -> FinalLayout {
    FinalLayout::new(
        config
            .final_layout
            .iter()
            .map(|(f, k)| {
                let key = moves
                    .iter()
                    .find(|(m, _)| *m == f)
                    .map(|(_, to)| *to)
                    .unwrap_or(k);
                (f.to_string(), key)
            })
            .collect(),
    )
}

#[test]
fn test_fixed_finals_keep_their_keys() {
    // Swapping `a` and `iu` keeps the layout a bijection.
    let mut config = xiaohe();
    config.final_layout = with_finals_moved(&config, &[("a", Key::Q), ("iu", Key::A)]);
    assert!(matches!(
        config.validate(),
        Err(ShuangForgeError::Validation(_))
    ));

    // `uo` is bound to O through its `o` alias.
    let mut config = xiaohe();
    config.final_layout = with_finals_moved(&config, &[("uo", Key::Q), ("iu", Key::O)]);
    assert!(config.validate().is_err());
}

#[test]
fn test_flexible_final_on_fixed_key_is_invalid() {
    // `ian` (M) onto E, `e` off to M: keys stay unique.
    let mut config = xiaohe();
    config.final_layout = with_finals_moved(&config, &[("ian", Key::E), ("e", Key::M)]);
    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_final_in_layout_is_invalid() {
    let mut config = xiaohe();
    let mut entries: Vec<(String, Key)> = config
        .final_layout
        .iter()
        .map(|(f, k)| (f.to_string(), k))
        .collect();
    entries[0].0 = "xyz".to_string();
    config.final_layout = FinalLayout::new(entries);
    assert!(config.validate().is_err());
}

#[rstest]
#[case("er", (Key::Q, Key::W))] // Fixed final off its letters
#[case("ai", (Key::A, Key::Y))]
#[case("ang", (Key::G, Key::H))] // Flexible, wrong first key
#[case("eng", (Key::E, Key::N))] // Flexible, takes `en`'s reserved pair
#[case("o", (Key::O, Key::U))] // Takes `ou`'s reserved pair
fn test_zero_consonant_pair_rules(#[case] final_: &str, #[case] pair: (Key, Key)) {
    let mut config = xiaohe();
    config
        .zero_consonant_final_layout
        .insert(final_.into(), pair);
    assert!(
        matches!(config.validate(), Err(ShuangForgeError::Validation(_))),
        "{} -> {:?} was accepted",
        final_,
        pair
    );
}

#[test]
fn test_unknown_zero_consonant_final_is_invalid() {
    let mut config = xiaohe();
    config
        .zero_consonant_final_layout
        .insert("iao".into(), (Key::I, Key::Q));
    assert!(config.validate().is_err());
}

// --- CONSTRAINTS ---

#[test]
fn test_constraints_sorted_by_size() {
    let unsorted = InitialConstraints::new(vec![
        (Key::H, set(&["ia", "ua", "ie"])),
        (Key::G, set(&["ia"])),
    ]);
    assert!(!unsorted.is_sorted_by_size());

    let sorted = InitialConstraints::sorted_by_size(vec![
        (Key::H, set(&["ia", "ua", "ie"])),
        (Key::G, set(&["ia"])),
    ]);
    assert!(sorted.is_sorted_by_size());
    assert_eq!(sorted.iter().next().map(|(k, _)| k), Some(Key::G));

    let defaults = InitialConstraints::defaults();
    assert_eq!(defaults.len(), 2);
    assert!(defaults.is_sorted_by_size());
}

#[test]
fn test_config_json_shape() {
    let json = serde_json::to_value(xiaohe()).unwrap();
    assert_eq!(json["digraph_initial_layout"]["zh"], "v");
    assert_eq!(json["zero_consonant_final_layout"]["er"][1], "r");
    assert!(json.get("initial_constraints").is_none());
}
