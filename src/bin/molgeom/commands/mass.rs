use std::io::{self, Write};

use anyhow::{Context, Result};

use molgeom::symbols_to_masses;

use super::{read_input, read_substeps};
use crate::cli::MassArgs;
use crate::display::{Context as DisplayContext, Progress, print_mass_summary};
use crate::io::read_weights;

const TOTAL_STEPS: u8 = 2;

pub fn run_mass(args: MassArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let molecule = read_input(&args.io)?;
    let weights = read_weights(args.weights.weights.as_deref())?;
    progress.complete_step("Reading structure", &read_substeps(&molecule));

    progress.step("Computing mass properties");
    let mass = molecule
        .molecular_mass(&weights)
        .context("Molecular mass calculation failed")?;
    let center = molecule
        .center_of_mass(&weights)
        .context("Center of mass calculation failed")?;
    let per_atom: Vec<(&str, f64)> = if args.per_atom {
        let symbols = molecule.symbols();
        let masses = symbols_to_masses(&weights, &symbols)?;
        symbols.into_iter().zip(masses).collect()
    } else {
        Vec::new()
    };
    progress.complete_step(
        "Computing mass properties",
        &[format!("{} element weights resolved", weights.len())],
    );

    progress.finish();

    if ctx.interactive {
        print_mass_summary(mass, center);
    }

    write_mass(&mut io::stdout().lock(), mass, center, &per_atom)?;
    Ok(())
}

/// Tab-separated mass report; one `index symbol mass` row per entry of `per_atom`.
fn write_mass(
    out: &mut impl Write,
    mass: f64,
    center: [f64; 3],
    per_atom: &[(&str, f64)],
) -> io::Result<()> {
    writeln!(out, "molecular_mass\t{:.6}", mass)?;
    writeln!(
        out,
        "center_of_mass\t{:.6}\t{:.6}\t{:.6}",
        center[0], center[1], center[2]
    )?;
    for (index, (symbol, m)) in per_atom.iter().enumerate() {
        writeln!(out, "{}\t{}\t{:.6}", index, symbol, m)?;
    }
    Ok(())
}
