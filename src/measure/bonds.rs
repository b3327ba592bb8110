use super::config::BondCriteria;
use super::error::Error;
use super::geometry::calculate_distance;
use crate::model::bond::{AtomPair, BondList};
use log::{debug, trace};

/// Records every atom pair whose distance lies strictly inside the criteria window.
///
/// All pairs `(atom1, atom2)` with `atom1 <= atom2` are scanned, self-pairs
/// included; a self-pair has distance zero and is therefore never admitted by a
/// valid window. The scan is O(n²) with no spatial pruning.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] before scanning if `min_bond` is negative.
pub fn build_bond_list(
    coordinates: &[[f64; 3]],
    criteria: &BondCriteria,
) -> Result<BondList, Error> {
    criteria.validate()?;

    let mut bonds = BondList::new();
    for (atom1, p) in coordinates.iter().enumerate() {
        for (offset, q) in coordinates[atom1..].iter().enumerate() {
            let atom2 = atom1 + offset;
            let distance = calculate_distance(p, q);
            if criteria.admits(distance) {
                trace!("bond ({atom1}, {atom2}) at {distance:.4}");
                bonds.insert(AtomPair::new(atom1, atom2), distance);
            }
        }
    }

    debug!(
        "found {} bonds among {} atoms (window {} < d < {})",
        bonds.len(),
        coordinates.len(),
        criteria.min_bond,
        criteria.max_bond
    );

    Ok(bonds)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinates(max_atoms: usize) -> impl Strategy<Value = Vec<[f64; 3]>> {
        proptest::collection::vec(prop::array::uniform3(-5.0f64..5.0), 0..=max_atoms)
    }

    proptest! {
        #[test]
        fn keys_are_ordered_and_distinct(coords in coordinates(24)) {
            let bonds = build_bond_list(&coords, &BondCriteria::default()).unwrap();
            for (pair, _) in &bonds {
                prop_assert!(pair.i < pair.j, "pair {} is not strictly ordered", pair);
                prop_assert!(pair.j < coords.len());
            }
            let pairs: Vec<_> = bonds.pairs().collect();
            prop_assert!(pairs.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn recorded_distances_lie_inside_window(
            coords in coordinates(24),
            min_bond in 0.0f64..1.0,
            span in 0.1f64..3.0,
        ) {
            let criteria = BondCriteria::new(min_bond + span, min_bond);
            let bonds = build_bond_list(&coords, &criteria).unwrap();
            for (pair, d) in &bonds {
                prop_assert!(d > min_bond && d < min_bond + span);
                prop_assert_eq!(d, calculate_distance(&coords[pair.i], &coords[pair.j]));
            }
        }

        #[test]
        fn repeated_builds_are_identical(coords in coordinates(16)) {
            let criteria = BondCriteria::default();
            let first = build_bond_list(&coords, &criteria).unwrap();
            let second = build_bond_list(&coords, &criteria).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn negative_min_bond_always_fails(coords in coordinates(8), min_bond in -10.0f64..-1e-9) {
            let result = build_bond_list(&coords, &BondCriteria::new(1.5, min_bond));
            let is_invalid = matches!(result, Err(Error::InvalidArgument { .. }));
            prop_assert!(is_invalid);
        }
    }
}
