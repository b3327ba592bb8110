use super::error::Error;
use super::weights::AtomicWeights;

/// Maps each symbol to its atomic weight, preserving order.
///
/// Stops at the first unknown symbol; no partial result is returned.
pub fn symbols_to_masses<S: AsRef<str>>(
    weights: &AtomicWeights,
    symbols: &[S],
) -> Result<Vec<f64>, Error> {
    symbols
        .iter()
        .map(|symbol| weights.lookup(symbol.as_ref()))
        .collect()
}

/// Total mass of the given atoms. Zero for an empty sequence.
pub fn calculate_molecular_mass<S: AsRef<str>>(
    weights: &AtomicWeights,
    symbols: &[S],
) -> Result<f64, Error> {
    Ok(symbols_to_masses(weights, symbols)?.iter().sum())
}

/// Mass-weighted centroid `Σ mᵢ·rᵢ / Σ mᵢ`.
pub fn calculate_center_of_mass<S: AsRef<str>>(
    weights: &AtomicWeights,
    symbols: &[S],
    coordinates: &[[f64; 3]],
) -> Result<[f64; 3], Error> {
    if symbols.len() != coordinates.len() {
        return Err(Error::DimensionMismatch {
            symbols: symbols.len(),
            coordinates: coordinates.len(),
        });
    }
    if symbols.is_empty() {
        return Err(Error::EmptyMolecule);
    }

    let masses = symbols_to_masses(weights, symbols)?;
    let total: f64 = masses.iter().sum();

    let mut weighted = [0.0; 3];
    for (m, r) in masses.iter().zip(coordinates) {
        for (w, x) in weighted.iter_mut().zip(r) {
            *w += m * x;
        }
    }

    Ok(weighted.map(|w| w / total))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const SYMBOLS: [&str; 6] = ["H", "C", "N", "O", "S", "Fe"];

    fn atoms(max_atoms: usize) -> impl Strategy<Value = Vec<(&'static str, [f64; 3])>> {
        proptest::collection::vec(
            (
                prop::sample::select(SYMBOLS.to_vec()),
                prop::array::uniform3(-50.0f64..50.0),
            ),
            1..=max_atoms,
        )
    }

    proptest! {
        #[test]
        fn center_of_mass_stays_inside_bounding_box(atoms in atoms(32)) {
            let (symbols, coords): (Vec<_>, Vec<_>) = atoms.into_iter().unzip();
            let com = calculate_center_of_mass(AtomicWeights::standard(), &symbols, &coords).unwrap();
            for axis in 0..3 {
                let lo = coords.iter().map(|r| r[axis]).fold(f64::INFINITY, f64::min);
                let hi = coords.iter().map(|r| r[axis]).fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(com[axis] >= lo - 1e-9 && com[axis] <= hi + 1e-9);
            }
        }

        #[test]
        fn molecular_mass_is_sum_of_table_entries(atoms in atoms(32)) {
            let symbols: Vec<_> = atoms.iter().map(|(s, _)| *s).collect();
            let weights = AtomicWeights::standard();
            let total = calculate_molecular_mass(weights, &symbols).unwrap();
            let expected: f64 = symbols.iter().map(|s| weights.get(s).unwrap()).sum();
            prop_assert_eq!(total, expected);
        }

        #[test]
        fn repeated_calls_are_bit_identical(atoms in atoms(32)) {
            let (symbols, coords): (Vec<_>, Vec<_>) = atoms.into_iter().unzip();
            let weights = AtomicWeights::standard();

            let masses = symbols_to_masses(weights, &symbols).unwrap();
            let again = symbols_to_masses(weights, &symbols).unwrap();
            prop_assert_eq!(masses, again);

            let total = calculate_molecular_mass(weights, &symbols).unwrap();
            let again = calculate_molecular_mass(weights, &symbols).unwrap();
            prop_assert_eq!(total.to_bits(), again.to_bits());

            let com = calculate_center_of_mass(weights, &symbols, &coords).unwrap();
            let again = calculate_center_of_mass(weights, &symbols, &coords).unwrap();
            prop_assert_eq!(com.map(f64::to_bits), again.map(f64::to_bits));
        }
    }
}
