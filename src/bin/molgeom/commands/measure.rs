use std::io::{self, Write};

use anyhow::{Result, bail};

use molgeom::{AngleUnit, Molecule, calculate_angle, calculate_distance};

use super::{read_input, read_substeps};
use crate::cli::{AngleArgs, DistanceArgs};
use crate::display::{Context as DisplayContext, Progress};

const TOTAL_STEPS: u8 = 2;

pub fn run_distance(args: DistanceArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let molecule = read_input(&args.io)?;
    progress.complete_step("Reading structure", &read_substeps(&molecule));

    progress.step("Measuring distance");
    let p = position(&molecule, args.first)?;
    let q = position(&molecule, args.second)?;
    let distance = calculate_distance(p, q);
    progress.complete_step(
        "Measuring distance",
        &[format!("atoms {} and {}", args.first, args.second)],
    );

    progress.finish();

    writeln!(io::stdout().lock(), "{:.6}", distance)?;
    Ok(())
}

pub fn run_angle(args: AngleArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let molecule = read_input(&args.io)?;
    progress.complete_step("Reading structure", &read_substeps(&molecule));

    progress.step("Measuring angle");
    let a = position(&molecule, args.first)?;
    let b = position(&molecule, args.vertex)?;
    let c = position(&molecule, args.second)?;

    let unit = AngleUnit::from(args.unit);
    let angle = calculate_angle(a, b, c, unit);
    if angle.is_nan() {
        bail!(
            "Angle is undefined: atom {} coincides with an arm atom",
            args.vertex
        );
    }
    progress.complete_step(
        "Measuring angle",
        &[format!(
            "atoms {}-{}-{} in {}",
            args.first,
            args.vertex,
            args.second,
            unit_name(unit)
        )],
    );

    progress.finish();

    writeln!(io::stdout().lock(), "{:.6}", angle)?;
    Ok(())
}

fn unit_name(unit: AngleUnit) -> &'static str {
    match unit {
        AngleUnit::Degrees => "degrees",
        AngleUnit::Radians => "radians",
    }
}

fn position(molecule: &Molecule, index: usize) -> Result<&[f64; 3]> {
    match molecule.atoms.get(index) {
        Some(atom) => Ok(&atom.position),
        None => bail!(
            "Atom index {} is out of range: the structure has {} atoms (indices start at 0)",
            index,
            molecule.atom_count()
        ),
    }
}
