use crate::io::error::Error;
use crate::model::molecule::Molecule;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, molecule: &Molecule, comment: &str) -> Result<(), Error> {
    writeln!(writer, "{}", molecule.atom_count())?;
    // A newline in the comment would shift every atom line.
    writeln!(writer, "{}", comment.replace(['\n', '\r'], " "))?;

    for atom in &molecule.atoms {
        writeln!(
            writer,
            "{:<3} {:>12.6} {:>12.6} {:>12.6}",
            atom.symbol, atom.position[0], atom.position[1], atom.position[2]
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::xyz::reader;
    use crate::model::atom::Atom;
    use std::io::Cursor;

    #[test]
    fn writes_xyz_layout() {
        let mol = Molecule::from_atoms(vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("Cl", [1.77, -0.5, 0.25]),
        ]);

        let mut buf = Vec::new();
        write(&mut buf, &mol, "chloro\nmethyl").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2");
        assert_eq!(lines[1], "chloro methyl");
        assert_eq!(lines[3], "Cl      1.770000    -0.500000     0.250000");
    }

    #[test]
    fn output_reads_back() {
        let mol = Molecule::from_atoms(vec![
            Atom::new("N", [0.1234567, 2.0, -3.5]),
            Atom::new("H", [1.0, 0.0, 0.0]),
        ]);

        let mut buf = Vec::new();
        write(&mut buf, &mol, "ammonia fragment").unwrap();
        let parsed = reader::read(Cursor::new(buf)).unwrap();

        assert_eq!(parsed.symbols(), mol.symbols());
        for (a, b) in mol.atoms.iter().zip(&parsed.atoms) {
            for k in 0..3 {
                assert!((a.position[k] - b.position[k]).abs() < 1e-6);
            }
        }
    }
}
