//! Reading and writing molecular structure files.
//!
//! Only the plain-text XYZ layout is supported: an atom count line, a free-form
//! comment line, then one `symbol x y z` line per atom.

use std::fmt;
use std::io::{BufRead, Write};

use crate::model::molecule::Molecule;

pub mod error;

mod xyz {
    pub mod reader;
    pub mod writer;
}

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xyz,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xyz => write!(f, "XYZ"),
        }
    }
}

/// Reads the first molecule of an XYZ stream.
pub fn read_xyz<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    xyz::reader::read(reader)
}

/// Writes `molecule` in XYZ layout with `comment` on the second line.
pub fn write_xyz<W: Write>(writer: W, molecule: &Molecule, comment: &str) -> Result<(), Error> {
    xyz::writer::write(writer, molecule, comment)
}
