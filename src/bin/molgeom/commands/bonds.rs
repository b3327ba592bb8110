use std::io::{self, Write};

use anyhow::{Context, Result};

use molgeom::{BondCriteria, BondList};

use super::{read_input, read_substeps};
use crate::cli::BondsArgs;
use crate::display::{Context as DisplayContext, Progress, print_bond_summary};

const TOTAL_STEPS: u8 = 2;

pub fn run_bonds(args: BondsArgs, ctx: DisplayContext) -> Result<()> {
    let criteria = BondCriteria::from(&args.criteria);
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let molecule = read_input(&args.io)?;
    progress.complete_step("Reading structure", &read_substeps(&molecule));

    progress.step("Detecting bonds");
    let bonds = molecule
        .bonds(&criteria)
        .context("Bond detection failed")?;
    progress.complete_step(
        "Detecting bonds",
        &[
            format!(
                "{} distances evaluated",
                distances_evaluated(molecule.atom_count())
            ),
            format!("{} bonds accepted", bonds.len()),
        ],
    );

    progress.finish();

    if ctx.interactive {
        print_bond_summary(&bonds, &criteria);
    }

    write_bonds(&mut io::stdout().lock(), &bonds)?;
    Ok(())
}

/// Pairs `i <= j` visited by the scan, self pairs included.
fn distances_evaluated(atoms: usize) -> usize {
    atoms * (atoms + 1) / 2
}

fn write_bonds(out: &mut impl Write, bonds: &BondList) -> io::Result<()> {
    for (pair, distance) in bonds {
        writeln!(out, "{}\t{}\t{:.6}", pair.i, pair.j, distance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use molgeom::Molecule;

    #[test]
    fn water_prints_two_oh_bonds() {
        let water = Molecule::from_parts(
            &["O", "H", "H"],
            &[[0.0, 0.0, 0.1173], [0.0, 0.7572, -0.4692], [0.0, -0.7572, -0.4692]],
        )
        .unwrap();
        let bonds = water.bonds(&BondCriteria::default()).unwrap();

        let mut buf = Vec::new();
        write_bonds(&mut buf, &bonds).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0\t1\t0.957776\n0\t2\t0.957776\n"
        );
    }

    #[test]
    fn scan_count_includes_self_pairs() {
        assert_eq!(distances_evaluated(0), 0);
        assert_eq!(distances_evaluated(1), 1);
        assert_eq!(distances_evaluated(3), 6);
    }

    #[test]
    fn no_bonds_prints_nothing() {
        let mut buf = Vec::new();
        write_bonds(&mut buf, &BondList::new()).unwrap();
        assert!(buf.is_empty());
    }
}
