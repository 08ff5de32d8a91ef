use crate::error::{ShuangForgeError, SfResult};
use crate::phonetics::{self, add_zero_consonant_tag, DIGRAPH_INITIALS};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub type PairKey = (String, String);

/// Observed usage of single units and ordered unit pairs, in percent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTables {
    pub singles: BTreeMap<String, f64>,
    pub pairs: BTreeMap<PairKey, f64>,
}

impl FrequencyTables {
    /// Checks values only; hand-built tables may cover a subset of units.
    /// See [`FrequencyTables::require_complete`] for the check loaders apply.
    pub fn new(singles: BTreeMap<String, f64>, pairs: BTreeMap<PairKey, f64>) -> SfResult<Self> {
        let tables = Self { singles, pairs };
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> SfResult<()> {
        if self.singles.is_empty() {
            return Err(ShuangForgeError::Validation(
                "Single-unit frequency table is empty".to_string(),
            ));
        }
        for (unit, freq) in &self.singles {
            check_freq(unit, *freq)?;
        }
        for ((a, b), freq) in &self.pairs {
            check_freq(&format!("{}+{}", a, b), *freq)?;
        }
        Ok(())
    }

    /// Fails unless every final, digraph initial and tagged zero-consonant
    /// final has a single-unit entry. Loaded tables must pass this before
    /// they are scored.
    pub fn require_complete(&self) -> SfResult<()> {
        let missing: Vec<String> = required_units()
            .filter(|unit| !self.singles.contains_key(unit))
            .collect();
        if !missing.is_empty() {
            return Err(ShuangForgeError::Validation(format!(
                "Missing single-unit frequencies for: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Loads `single_freqs.json` and `pair_freqs.json` from `dir`.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> SfResult<Self> {
        let dir = dir.as_ref();
        info!("📚 Loading frequencies from {:?}", dir);
        let singles = load_single_freqs(File::open(dir.join("single_freqs.json"))?)?;
        let pairs = load_pair_freqs(File::open(dir.join("pair_freqs.json"))?)?;
        debug!(
            "   -> Loaded {} units, {} pairs.",
            singles.len(),
            pairs.len()
        );
        let tables = Self::new(singles, pairs)?;
        tables.require_complete()?;
        Ok(tables)
    }
}

/// Units every loaded single-unit table must cover.
pub fn required_units() -> impl Iterator<Item = String> {
    phonetics::all_finals()
        .chain(DIGRAPH_INITIALS)
        .map(str::to_string)
        .chain(phonetics::zero_consonant_finals().map(add_zero_consonant_tag))
}

fn check_freq(unit: &str, freq: f64) -> SfResult<()> {
    if !freq.is_finite() || freq < 0.0 {
        return Err(ShuangForgeError::Validation(format!(
            "Frequency of '{}' is invalid: {}",
            unit, freq
        )));
    }
    Ok(())
}

/// Splits an `"A+B"` key into its ordered pair.
pub fn parse_pair_key(raw: &str) -> SfResult<PairKey> {
    match raw.split_once('+') {
        Some((a, b)) if !a.is_empty() && !b.is_empty() && !b.contains('+') => {
            Ok((a.to_string(), b.to_string()))
        }
        _ => Err(ShuangForgeError::Validation(format!(
            "Malformed pair key '{}'",
            raw
        ))),
    }
}

/// Reads a JSON object of unit -> frequency.
pub fn load_single_freqs<R: Read>(reader: R) -> SfResult<BTreeMap<String, f64>> {
    let raw: BTreeMap<String, f64> = serde_json::from_reader(reader)?;
    for (unit, freq) in &raw {
        check_freq(unit, *freq)?;
    }
    Ok(raw)
}

/// Reads a JSON object of `"A+B"` -> frequency.
pub fn load_pair_freqs<R: Read>(reader: R) -> SfResult<BTreeMap<PairKey, f64>> {
    let raw: BTreeMap<String, f64> = serde_json::from_reader(reader)?;
    let mut pairs = BTreeMap::new();
    for (key, freq) in raw {
        check_freq(&key, freq)?;
        pairs.insert(parse_pair_key(&key)?, freq);
    }
    Ok(pairs)
}

/// Reads a tab-separated `unit<TAB>frequency` listing holding both tables;
/// rows whose unit contains `+` are pairs.
pub fn load_frequency_tsv<R: Read>(reader: R) -> SfResult<FrequencyTables> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .from_reader(reader);

    let mut singles = BTreeMap::new();
    let mut pairs = BTreeMap::new();

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 {
            return Err(ShuangForgeError::Validation(format!(
                "Row {} has {} columns, expected 2",
                row_idx + 1,
                rec.len()
            )));
        }
        let unit = rec[0].trim();
        let freq: f64 = rec[1].trim().parse().map_err(|_| {
            ShuangForgeError::Validation(format!(
                "Row {}: '{}' is not a number",
                row_idx + 1,
                rec[1].trim()
            ))
        })?;
        check_freq(unit, freq)?;

        if unit.contains('+') {
            pairs.insert(parse_pair_key(unit)?, freq);
        } else if unit.is_empty() {
            return Err(ShuangForgeError::Validation(format!(
                "Row {} has an empty unit",
                row_idx + 1
            )));
        } else {
            singles.insert(unit.to_string(), freq);
        }
    }

    let tables = FrequencyTables::new(singles, pairs)?;
    tables.require_complete()?;
    Ok(tables)
}
