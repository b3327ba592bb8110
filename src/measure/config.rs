use super::error::Error;

const DEFAULT_MAX_BOND: f64 = 1.5;
const DEFAULT_MIN_BOND: f64 = 0.0;

/// Distance window for [`build_bond_list`](super::build_bond_list).
///
/// A pair is bonded when `min_bond < distance < max_bond`. Both bounds are
/// exclusive. `max_bond <= min_bond` is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCriteria {
    pub max_bond: f64,
    pub min_bond: f64,
}

impl Default for BondCriteria {
    fn default() -> Self {
        Self {
            max_bond: DEFAULT_MAX_BOND,
            min_bond: DEFAULT_MIN_BOND,
        }
    }
}

impl BondCriteria {
    pub fn new(max_bond: f64, min_bond: f64) -> Self {
        Self { max_bond, min_bond }
    }

    pub fn with_max_bond(self, max_bond: f64) -> Self {
        Self { max_bond, ..self }
    }

    pub fn with_min_bond(self, min_bond: f64) -> Self {
        Self { min_bond, ..self }
    }

    /// Rejects a negative (or NaN) `min_bond`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_bond.is_nan() || self.min_bond < 0.0 {
            return Err(Error::invalid_argument(
                "min_bond",
                format!(
                    "minimum bond distance must be non-negative, got {}",
                    self.min_bond
                ),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn admits(&self, distance: f64) -> bool {
        distance > self.min_bond && distance < self.max_bond
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    Degrees,
    #[default]
    Radians,
}
