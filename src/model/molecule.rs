use super::atom::Atom;
use super::bond::BondList;
use crate::measure::{self, AtomicWeights, BondCriteria, Error};

/// A molecule as an ordered list of atoms.
///
/// Each [`Atom`] carries its own symbol and position, so the symbol and
/// coordinate sequences seen by the measurement functions always have the
/// same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Pairs `symbols[k]` with `coordinates[k]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the two slices differ in length.
    pub fn from_parts<S: AsRef<str>>(
        symbols: &[S],
        coordinates: &[[f64; 3]],
    ) -> Result<Self, Error> {
        if symbols.len() != coordinates.len() {
            return Err(Error::DimensionMismatch {
                symbols: symbols.len(),
                coordinates: coordinates.len(),
            });
        }

        let atoms = symbols
            .iter()
            .zip(coordinates)
            .map(|(symbol, position)| Atom::new(symbol.as_ref(), *position))
            .collect();

        Ok(Self { atoms })
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.atoms.iter().map(|a| a.symbol.as_str()).collect()
    }

    pub fn coordinates(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    pub fn molecular_mass(&self, weights: &AtomicWeights) -> Result<f64, Error> {
        measure::calculate_molecular_mass(weights, &self.symbols())
    }

    pub fn center_of_mass(&self, weights: &AtomicWeights) -> Result<[f64; 3], Error> {
        measure::calculate_center_of_mass(weights, &self.symbols(), &self.coordinates())
    }

    pub fn bonds(&self, criteria: &BondCriteria) -> Result<BondList, Error> {
        measure::build_bond_list(&self.coordinates(), criteria)
    }
}
