mod bonds;
mod config;
mod error;
mod geometry;
mod mass;
mod weights;

pub use bonds::build_bond_list;
pub use config::{AngleUnit, BondCriteria};
pub use error::Error;
pub use geometry::{calculate_angle, calculate_distance};
pub use mass::{calculate_center_of_mass, calculate_molecular_mass, symbols_to_masses};
pub use weights::{AtomicWeights, load_weights};
