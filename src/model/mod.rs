//! Core data structures for molecular geometry analysis.
//!
//! - [`atom`] – A single atom: element symbol plus Cartesian coordinates.
//! - [`molecule`] – Paired symbol/coordinate sequences with equal length enforced at construction.
//! - [`bond`] – Canonical atom-index pairs and distance-keyed bond lists.
//!
//! A [`Molecule`] owns nothing but its atoms; every measurement in
//! [`crate::measure`] reads it and returns a freshly built value.
//!
//! [`Molecule`]: molecule::Molecule

pub mod atom;
pub mod bond;
pub mod molecule;
