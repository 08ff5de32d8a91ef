use super::loader::{FrequencyTables, PairKey};
use crate::scheme::ShuangpinConfig;
use std::collections::BTreeMap;

/// Folds every variant final into its standard final, producing fresh tables
/// indexed only by standard units and zero-consonant-tagged units.
pub fn standardize(config: &ShuangpinConfig, tables: &FrequencyTables) -> FrequencyTables {
    let mut singles: BTreeMap<String, f64> = BTreeMap::new();
    for (unit, freq) in &tables.singles {
        *singles
            .entry(config.standard_final(unit).to_string())
            .or_insert(0.0) += freq;
    }

    let mut pairs: BTreeMap<PairKey, f64> = BTreeMap::new();
    for ((a, b), freq) in &tables.pairs {
        let key = (
            config.standard_final(a).to_string(),
            config.standard_final(b).to_string(),
        );
        *pairs.entry(key).or_insert(0.0) += freq;
    }

    FrequencyTables { singles, pairs }
}
