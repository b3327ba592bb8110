use super::error::Error;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const STANDARD_WEIGHTS_TOML: &str = include_str!("../../resources/atomic_weights.toml");

static STANDARD_WEIGHTS: OnceLock<AtomicWeights> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct WeightsFile {
    #[serde(default)]
    weights: HashMap<String, f64>,
}

/// Immutable mapping from element symbol to atomic weight (g/mol).
///
/// Every entry is positive and finite; construction fails otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicWeights {
    weights: HashMap<String, f64>,
}

impl AtomicWeights {
    /// The embedded standard table, H through Og, parsed on first use.
    pub fn standard() -> &'static AtomicWeights {
        STANDARD_WEIGHTS.get_or_init(|| {
            let table = Self::from_toml(STANDARD_WEIGHTS_TOML)
                .expect("Failed to parse embedded atomic weights. This is a library bug.");
            debug!("loaded standard atomic weight table ({} elements)", table.len());
            table
        })
    }

    /// Parses a table from TOML with a `[weights]` section of `symbol = mass` entries.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        let file: WeightsFile = toml::from_str(toml)?;
        Self::from_pairs(file.weights)
    }

    /// Builds a table from `(symbol, weight)` pairs.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateWeight`] for a repeated symbol, and
    /// [`Error::InvalidWeight`] naming the alphabetically smallest symbol whose
    /// weight is not positive and finite.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut weights = HashMap::new();
        let mut invalid: Option<(String, f64)> = None;

        for (symbol, weight) in pairs {
            let symbol = symbol.into();
            if weights.contains_key(&symbol) {
                return Err(Error::DuplicateWeight(symbol));
            }
            let is_valid = weight.is_finite() && weight > 0.0;
            if !is_valid && invalid.as_ref().is_none_or(|(first, _)| symbol < *first) {
                invalid = Some((symbol.clone(), weight));
            }
            weights.insert(symbol, weight);
        }

        match invalid {
            Some((symbol, weight)) => Err(Error::InvalidWeight { symbol, weight }),
            None => Ok(Self { weights }),
        }
    }

    /// Weight of `symbol`, failing with [`Error::UnknownElement`] when absent.
    pub fn lookup(&self, symbol: &str) -> Result<f64, Error> {
        self.get(symbol)
            .ok_or_else(|| Error::unknown_element(symbol))
    }

    #[inline]
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.weights.get(symbol).copied()
    }

    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.weights.contains_key(symbol)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }
}

/// Returns the custom table if TOML is supplied, else a copy of the standard one.
pub fn load_weights(custom_toml: Option<&str>) -> Result<AtomicWeights, Error> {
    match custom_toml {
        Some(toml) => {
            let weights = AtomicWeights::from_toml(toml)?;
            debug!("loaded custom atomic weight table ({} elements)", weights.len());
            Ok(weights)
        }
        None => Ok(AtomicWeights::standard().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn standard_table_covers_periodic_table() {
        let table = AtomicWeights::standard();
        assert_eq!(table.len(), 118);
        assert!(approx_eq(table.lookup("H").unwrap(), 1.008, 1e-9));
        assert!(approx_eq(table.lookup("C").unwrap(), 12.011, 1e-9));
        assert!(approx_eq(table.lookup("O").unwrap(), 15.999, 1e-9));
        assert!(approx_eq(table.lookup("Fe").unwrap(), 55.845, 1e-9));
        assert!(approx_eq(table.lookup("Og").unwrap(), 294.0, 1e-9));
        assert!(table.symbols().all(|s| table.get(s).unwrap() > 0.0));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = AtomicWeights::standard();
        assert!(table.contains("Cl"));
        assert!(!table.contains("cl"));
        let err = table.lookup("h").unwrap_err();
        assert_eq!(err.to_string(), "unknown element symbol: 'h'");
    }

    #[test]
    fn custom_table_from_toml() {
        let table = AtomicWeights::from_toml(
            r#"
            [weights]
            D = 2.014
            H = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("D"), Some(2.014));
        assert!(matches!(table.lookup("O"), Err(Error::UnknownElement(s)) if s == "O"));
    }

    #[test]
    fn rejects_bad_weights() {
        let err = AtomicWeights::from_toml("[weights]\nX = -1.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { ref symbol, .. } if symbol == "X"));

        assert!(AtomicWeights::from_pairs([("Z", 0.0)]).is_err());
        assert!(AtomicWeights::from_pairs([("Z", f64::INFINITY)]).is_err());
        assert!(AtomicWeights::from_pairs([("Z", f64::NAN)]).is_err());
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let err = AtomicWeights::from_pairs([("H", 1.008), ("C", 12.011), ("H", 2.014)]).unwrap_err();
        assert!(matches!(err, Error::DuplicateWeight(ref s) if s == "H"));
    }

    #[test]
    fn reports_smallest_bad_symbol() {
        let err = AtomicWeights::from_pairs([("Zn", -1.0), ("B", 0.0), ("Na", f64::NAN)]).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { ref symbol, .. } if symbol == "B"));

        for _ in 0..8 {
            let err = AtomicWeights::from_toml("[weights]\nXe = -1.0\nAr = 0.0\nKr = -2.0\nNe = 20.18\n")
                .unwrap_err();
            assert!(matches!(err, Error::InvalidWeight { ref symbol, .. } if symbol == "Ar"));
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AtomicWeights::from_toml("[weights]\nH = \"light\"\n").unwrap_err();
        assert!(matches!(err, Error::WeightsParse(_)));
    }

    #[test]
    fn load_weights_falls_back_to_standard() {
        let standard = load_weights(None).unwrap();
        assert_eq!(&standard, AtomicWeights::standard());

        let custom = load_weights(Some("[weights]\nH = 1.0\n")).unwrap();
        assert_eq!(custom.len(), 1);
    }
}
