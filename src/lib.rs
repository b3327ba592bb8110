//! A small, pure Rust library for measuring molecular geometry.
//! It turns element symbols and Cartesian coordinates into molecular mass,
//! mass-weighted center of mass, interatomic distances and angles, and a
//! distance-threshold bond list.
//!
//! # Features
//!
//! - **Atomic weights** — Embedded standard table (H through Og), or a custom
//!   table loaded from TOML and injected explicitly
//! - **Mass properties** — Per-atom masses, molecular mass, and center of mass
//! - **Geometry** — Euclidean distance and vertex angle in degrees or radians
//! - **Bond detection** — O(n²) pair scan with an open `(min_bond, max_bond)` window
//! - **XYZ I/O** — Read and write plain-text XYZ coordinate files
//!
//! # Quick Start
//!
//! ```
//! use molgeom::{AtomicWeights, BondCriteria, MeasureError, Molecule};
//!
//! // Water, coordinates in Å
//! let water = Molecule::from_parts(
//!     &["O", "H", "H"],
//!     &[
//!         [0.0, 0.0, 0.1173],
//!         [0.0, 0.7572, -0.4692],
//!         [0.0, -0.7572, -0.4692],
//!     ],
//! )?;
//!
//! let weights = AtomicWeights::standard();
//!
//! // 2 × 1.008 + 15.999
//! let mass = water.molecular_mass(weights)?;
//! assert!((mass - 18.015).abs() < 1e-3);
//!
//! // The oxygen dominates, so the center of mass sits close to it.
//! let com = water.center_of_mass(weights)?;
//! assert!(com[2] > 0.0);
//!
//! // Two O–H bonds; the H···H distance (1.51 Å) is outside the default window.
//! let bonds = water.bonds(&BondCriteria::default())?;
//! assert_eq!(bonds.len(), 2);
//! assert!(bonds.contains(0, 1));
//! assert!(bonds.contains(2, 0));
//! # Ok::<(), MeasureError>(())
//! ```
//!
//! The free functions work on plain slices when no [`Molecule`] is at hand:
//!
//! ```
//! use molgeom::{AngleUnit, BondCriteria, build_bond_list, calculate_angle};
//!
//! let bonds = build_bond_list(&[[0.0, 0.0, 0.0], [0.0, 1.0, 0.0]], &BondCriteria::default())?;
//! assert_eq!(bonds.get(0, 1), Some(1.0));
//!
//! let theta = calculate_angle(
//!     &[0.0, 0.0, -1.0],
//!     &[0.0, 0.0, 0.0],
//!     &[1.0, 0.0, 0.0],
//!     AngleUnit::Degrees,
//! );
//! assert!((theta - 90.0).abs() < 1e-2);
//! # Ok::<(), molgeom::MeasureError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — XYZ reading and writing
//! - Measurement functions are re-exported at the crate root
//!
//! # Data Types
//!
//! - [`Molecule`] — Ordered atoms; symbols and coordinates always pair up
//! - [`Atom`] — Element symbol and Cartesian position
//! - [`AtomPair`] — Atom indices stored smaller-first
//! - [`BondList`] — Bonded pairs and their distances, in ascending pair order
//! - [`AtomicWeights`] — Immutable symbol → atomic weight table
//!
//! ## Configuration
//!
//! - [`BondCriteria`] — Bond distance window (defaults: `max_bond = 1.5`, `min_bond = 0`)
//! - [`AngleUnit`] — Degrees or radians for [`calculate_angle`]
//!
//! # Errors
//!
//! All measurements return [`MeasureError`]: unknown element symbols, a
//! negative `min_bond`, empty molecules and mismatched symbol/coordinate
//! counts are reported as distinct variants. Nothing panics on user input.

mod measure;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::bond::{AtomPair, BondList, Iter as BondIter};
pub use model::molecule::Molecule;

pub use measure::{
    AngleUnit, AtomicWeights, BondCriteria, build_bond_list, calculate_angle,
    calculate_center_of_mass, calculate_distance, calculate_molecular_mass, load_weights,
    symbols_to_masses,
};

pub use measure::Error as MeasureError;
