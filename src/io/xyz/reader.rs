use crate::io::{Format, error::Error};
use crate::model::{atom::Atom, molecule::Molecule};
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|content| (i + 1, content)));

    let (count_line_no, count_line) = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::parse(Format::Xyz, 1, "missing atom count line"))?;
    let atom_count = count_line
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Xyz, count_line_no, "invalid atom count"))?;

    if atom_count == 0 {
        return Ok(Molecule::new());
    }

    if lines.next().transpose()?.is_none() {
        return Err(Error::parse(
            Format::Xyz,
            count_line_no + 1,
            "missing comment line",
        ));
    }

    // The declared count is untrusted; a short block is reported below.
    let mut atoms = Vec::new();
    let mut last_line_no = count_line_no + 1;
    for entry in lines.take(atom_count) {
        let (ln, raw) = entry?;
        atoms.push(parse_atom(&raw, ln)?);
        last_line_no = ln;
    }

    if atoms.len() < atom_count {
        return Err(Error::parse(
            Format::Xyz,
            last_line_no,
            format!(
                "XYZ block ended after {} of {} declared atoms",
                atoms.len(),
                atom_count
            ),
        ));
    }

    Ok(Molecule::from_atoms(atoms))
}

fn parse_atom(line: &str, line_no: usize) -> Result<Atom, Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::parse(
            Format::Xyz,
            line_no,
            "atom line must contain a symbol and three coordinates",
        ));
    }

    let mut position = [0.0; 3];
    for (axis, (slot, token)) in position.iter_mut().zip(&tokens[1..4]).enumerate() {
        *slot = token.parse::<f64>().map_err(|_| {
            Error::parse(
                Format::Xyz,
                line_no,
                format!("invalid {} coordinate '{}'", ["x", "y", "z"][axis], token),
            )
        })?;
    }

    Ok(Atom::new(tokens[0], position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER: &str = "\
3
water, angstrom
O   0.000000   0.000000   0.117300
H   0.000000   0.757200  -0.469200
H   0.000000  -0.757200  -0.469200
";

    #[test]
    fn reads_water() {
        let mol = read(Cursor::new(WATER)).unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.symbols(), vec!["O", "H", "H"]);
        assert_eq!(mol.atoms[1].position, [0.0, 0.7572, -0.4692]);
    }

    #[test]
    fn ignores_extra_columns_and_trailing_frames() {
        let text = "2\n\nC 0 0 0 0.12\nO 1.2 0 0 -0.12\n2\nnext frame\nC 9 9 9\nO 9 9 9\n";
        let mol = read(Cursor::new(text)).unwrap();
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.atoms[1].position, [1.2, 0.0, 0.0]);
    }

    #[test]
    fn zero_atoms() {
        let mol = read(Cursor::new("0\n")).unwrap();
        assert!(mol.is_empty());
    }

    #[test]
    fn rejects_bad_count() {
        let err = read(Cursor::new("three\ncomment\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        let err = read(Cursor::new("")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_truncated_block() {
        let err = read(Cursor::new("3\ncomment\nH 0 0 0\nH 0 0 1\n")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse XYZ data: XYZ block ended after 2 of 3 declared atoms (at line 4)"
        );
        let err = read(Cursor::new("1\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn huge_atom_count_is_a_parse_error() {
        let err = read(Cursor::new("18446744073709551615\ncomment\nH 0 0 0\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
        assert!(err.to_string().contains("after 1 of 18446744073709551615"));
    }

    #[test]
    fn reports_bad_coordinate_with_line() {
        let err = read(Cursor::new("1\n\nH 0.0 abc 0.0\n")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse XYZ data: invalid y coordinate 'abc' (at line 3)"
        );
        let err = read(Cursor::new("1\n\nH 0.0 0.0\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }
}
