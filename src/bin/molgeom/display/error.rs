use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<molgeom::io::Error>() {
            io_hints(e, &mut hints);
            return hints;
        }
        if let Some(e) = cause.downcast_ref::<molgeom::MeasureError>() {
            measure_hints(e, &mut hints);
            return hints;
        }
        if let Some(e) = cause.downcast_ref::<std::io::Error>() {
            std_io_hints(e, &mut hints);
            return hints;
        }
    }

    hints
}

fn io_hints(err: &molgeom::io::Error, hints: &mut Vec<String>) {
    use molgeom::io::Error as IoError;

    match err {
        IoError::Io { source } => std_io_hints(source, hints),
        IoError::Parse { format, line, .. } => {
            hints.push(format!("Inspect the {} input around line {}", format, line));
            hints.push("Line 1 holds the atom count, line 2 a comment".into());
            hints.push("Each atom line reads: SYMBOL X Y Z".into());
        }
    }
}

fn measure_hints(err: &molgeom::MeasureError, hints: &mut Vec<String>) {
    use molgeom::MeasureError;

    match err {
        MeasureError::UnknownElement(symbol) => {
            hints.push(format!("'{}' is not in the atomic weight table", symbol));
            hints.push("Symbols are case-sensitive: use 'Cl', not 'CL' or 'cl'".into());
            hints.push("Supply a custom table with --weights FILE".into());
        }
        MeasureError::InvalidArgument { name, .. } => {
            hints.push(format!("Check the value passed for '{}'", name));
            if *name == "min_bond" {
                hints.push("--min-bond must be zero or positive".into());
            }
        }
        MeasureError::EmptyMolecule => {
            hints.push("The input contains no atoms".into());
            hints.push("Verify the atom count on line 1 of the XYZ file".into());
        }
        MeasureError::DimensionMismatch { .. } => {
            hints.push("Every element symbol needs exactly one coordinate".into());
        }
        MeasureError::WeightsParse(_) => {
            hints.push("The weights file must be TOML with a [weights] section".into());
            hints.push("Example entry: H = 1.008".into());
        }
        MeasureError::InvalidWeight { symbol, .. } => {
            hints.push(format!("Give '{}' a positive, finite mass", symbol));
        }
        MeasureError::DuplicateWeight(symbol) => {
            hints.push(format!("Keep a single entry for '{}'", symbol));
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied reading the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("Input is not valid UTF-8 text".into());
        }
        ErrorKind::BrokenPipe => {
            hints.push("Output consumer terminated early (e.g. piping to `head`)".into());
        }
        _ => {
            hints.push("I/O operation failed".into());
        }
    }
}
