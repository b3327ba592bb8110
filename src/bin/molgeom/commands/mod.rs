mod bonds;
mod info;
mod mass;
mod measure;

use bonds::run_bonds;
use info::run_info;
use mass::run_mass;
use measure::{run_angle, run_distance};

use anyhow::{Result, bail};

use molgeom::Molecule;

use crate::cli::{Command, IoOptions};
use crate::display::Context;
use crate::io::{read_molecule, reads_stdin, stdin_is_tty};

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Mass(args) => run_mass(args, ctx),
        Command::Bonds(args) => run_bonds(args, ctx),
        Command::Distance(args) => run_distance(args, ctx),
        Command::Angle(args) => run_angle(args, ctx),
        Command::Info(args) => run_info(args, ctx),
    }
}

fn read_input(io: &IoOptions) -> Result<Molecule> {
    let path = io.input.as_deref();
    if reads_stdin(path) && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: molgeom <COMMAND> <FILE> or pipe XYZ data via stdin."
        );
    }
    read_molecule(path)
}

fn read_substeps(molecule: &Molecule) -> Vec<String> {
    vec![
        "Parse XYZ block".to_string(),
        format!("{} atoms", molecule.atom_count()),
    ]
}
