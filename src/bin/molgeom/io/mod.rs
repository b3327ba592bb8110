use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Stdin};
use std::path::Path;

use anyhow::{Context, Result};

use molgeom::{AtomicWeights, Molecule};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub enum InputSource {
    File(BufReader<File>),
    Stdin(BufReader<Stdin>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(r) => r.read(buf),
            InputSource::Stdin(r) => r.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(r) => r.fill_buf(),
            InputSource::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(r) => r.consume(amt),
            InputSource::Stdin(r) => r.consume(amt),
        }
    }
}

/// Opens `path` for reading; `None` and `-` both mean stdin.
pub fn open_input(path: Option<&Path>) -> Result<InputSource> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file: {}", p.display()))?;
            Ok(InputSource::File(BufReader::new(file)))
        }
        _ => Ok(InputSource::Stdin(BufReader::new(io::stdin()))),
    }
}

pub fn reads_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p == Path::new("-"))
}

pub fn read_molecule(path: Option<&Path>) -> Result<Molecule> {
    let reader = open_input(path)?;
    let source = path
        .filter(|p| *p != Path::new("-"))
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    molgeom::io::read_xyz(reader).with_context(|| format!("Failed to read XYZ from {}", source))
}

/// Resolves the weight table: a custom TOML file when given, otherwise the
/// embedded standard table.
pub fn read_weights(path: Option<&Path>) -> Result<AtomicWeights> {
    let content = match path {
        Some(p) => Some(
            std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read weights file: {}", p.display()))?,
        ),
        None => None,
    };
    let weights = molgeom::load_weights(content.as_deref()).with_context(|| match path {
        Some(p) => format!("Invalid weights file: {}", p.display()),
        None => "Invalid embedded weights table".to_string(),
    })?;
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdin() {
        assert!(reads_stdin(None));
        assert!(reads_stdin(Some(Path::new("-"))));
        assert!(!reads_stdin(Some(Path::new("water.xyz"))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = open_input(Some(Path::new("/nonexistent/molgeom.xyz")))
            .err()
            .unwrap();
        assert!(err.to_string().contains("/nonexistent/molgeom.xyz"));
        assert!(err.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn default_weights_are_standard() {
        let weights = read_weights(None).unwrap();
        assert_eq!(weights.get("O"), Some(15.999));
    }
}
