use crate::geometry::Key;
use crate::scheme::{default_variant_to_standard_finals, FinalLayout, ShuangpinConfig};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use Key::*;

const XIAOHE_FINALS: [(&str, Key); 26] = [
    ("iu", Q), ("ei", W), ("uan", R), ("ue", T), ("un", Y), ("uo", O),
    ("ie", P), ("ong", S), ("ai", D), ("en", F), ("eng", G), ("ang", H),
    ("an", J), ("uai", K), ("uang", L), ("ou", Z), ("ua", X), ("ao", C),
    ("ui", V), ("in", B), ("iao", N), ("ian", M), ("a", A), ("e", E),
    ("i", I), ("u", U),
];

const ZIRANMA_FINALS: [(&str, Key); 26] = [
    ("iu", Q), ("ua", W), ("uan", R), ("ue", T), ("uai", Y), ("uo", O),
    ("un", P), ("ong", S), ("uang", D), ("en", F), ("eng", G), ("ang", H),
    ("an", J), ("ao", K), ("ai", L), ("ei", Z), ("ie", X), ("iao", C),
    ("ui", V), ("ou", B), ("in", N), ("ian", M), ("a", A), ("e", E),
    ("i", I), ("u", U),
];

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownScheme {
    Xiaohe,
    Ziranma,
}

impl KnownScheme {
    /// Key of every standard final.
    fn finals(&self) -> &'static [(&'static str, Key); 26] {
        match self {
            Self::Xiaohe => &XIAOHE_FINALS,
            Self::Ziranma => &ZIRANMA_FINALS,
        }
    }

    /// `zh`, `ch`, `sh`
    fn digraph_keys(&self) -> [Key; 3] {
        match self {
            Self::Xiaohe | Self::Ziranma => [Key::V, Key::I, Key::U],
        }
    }

    pub fn config(&self) -> ShuangpinConfig {
        let final_layout = self
            .finals()
            .iter()
            .map(|(f, k)| (f.to_string(), *k))
            .collect();

        let digraph_initial_layout = ["zh", "ch", "sh"]
            .iter()
            .zip(self.digraph_keys())
            .map(|(i, k)| (i.to_string(), k))
            .collect();

        // Both schemes type zero-consonant syllables the same way.
        let zero_consonant_final_layout: BTreeMap<String, (Key, Key)> = [
            ("a", (Key::A, Key::A)),
            ("e", (Key::E, Key::E)),
            ("o", (Key::O, Key::O)),
            ("ang", (Key::A, Key::H)),
            ("eng", (Key::E, Key::G)),
            ("ai", (Key::A, Key::I)),
            ("ei", (Key::E, Key::I)),
            ("ou", (Key::O, Key::U)),
            ("an", (Key::A, Key::N)),
            ("en", (Key::E, Key::N)),
            ("ao", (Key::A, Key::O)),
            ("er", (Key::E, Key::R)),
        ]
        .iter()
        .map(|(f, pair)| (f.to_string(), *pair))
        .collect();

        ShuangpinConfig {
            final_layout: FinalLayout::new(final_layout),
            digraph_initial_layout,
            zero_consonant_final_layout,
            variant_to_standard_finals: default_variant_to_standard_finals(),
            initial_constraints: None,
        }
    }
}

pub fn get_all_schemes() -> Vec<(KnownScheme, ShuangpinConfig)> {
    KnownScheme::iter().map(|s| (s, s.config())).collect()
}
