use std::io::{self, Write};

use anyhow::{Context, Result};

use molgeom::BondCriteria;

use super::{read_input, read_substeps};
use crate::cli::InfoArgs;
use crate::display::{
    Context as DisplayContext, Progress, print_bond_summary, print_mass_summary,
    print_structure_info,
};
use crate::io::read_weights;

const TOTAL_STEPS: u8 = 3;

pub fn run_info(args: InfoArgs, ctx: DisplayContext) -> Result<()> {
    let criteria = BondCriteria::from(&args.criteria);
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let molecule = read_input(&args.io)?;
    let weights = read_weights(args.weights.weights.as_deref())?;
    progress.complete_step("Reading structure", &read_substeps(&molecule));

    if ctx.interactive {
        print_structure_info(&molecule);
    }

    progress.step("Computing mass properties");
    let mass = molecule
        .molecular_mass(&weights)
        .context("Molecular mass calculation failed")?;
    let center = molecule
        .center_of_mass(&weights)
        .context("Center of mass calculation failed")?;
    progress.complete_step("Computing mass properties", &[]);

    progress.step("Detecting bonds");
    let bonds = molecule
        .bonds(&criteria)
        .context("Bond detection failed")?;
    progress.complete_step(
        "Detecting bonds",
        &[format!("{} bonds accepted", bonds.len())],
    );

    progress.finish();

    if ctx.interactive {
        print_mass_summary(mass, center);
        print_bond_summary(&bonds, &criteria);
    }

    let summary = Summary {
        atoms: molecule.atom_count(),
        mass,
        center,
        bonds: bonds.len(),
    };
    write_summary(&mut io::stdout().lock(), &summary)?;
    Ok(())
}

struct Summary {
    atoms: usize,
    mass: f64,
    center: [f64; 3],
    bonds: usize,
}

fn write_summary(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
    let [x, y, z] = summary.center;
    writeln!(out, "atoms\t{}", summary.atoms)?;
    writeln!(out, "molecular_mass\t{:.6}", summary.mass)?;
    writeln!(out, "center_of_mass\t{:.6}\t{:.6}\t{:.6}", x, y, z)?;
    writeln!(out, "bonds\t{}", summary.bonds)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines_in_order() {
        let summary = Summary {
            atoms: 3,
            mass: 18.015,
            center: [0.0, 0.0, 0.051666694],
            bonds: 2,
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "atoms\t3",
                "molecular_mass\t18.015000",
                "center_of_mass\t0.000000\t0.000000\t0.051667",
                "bonds\t2",
            ]
        );
    }
}
