use std::collections::BTreeMap;
use std::io::{self, Write};

use molgeom::{BondCriteria, BondList, Molecule};

use crate::util::text::truncate;

const INDENT: &str = "      ";
const MAX_ROWS: usize = 15;
const BAR_WIDTH: usize = 20;

pub fn print_structure_info(molecule: &Molecule) {
    let mut out = io::stderr().lock();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for atom in &molecule.atoms {
        *counts.entry(atom.symbol.as_str()).or_insert(0) += 1;
    }

    let rows = [
        ("Total Atoms", molecule.atom_count().to_string()),
        ("Elements", counts.len().to_string()),
    ];
    print_kv_table(&mut out, "Structure Summary", &rows);

    if counts.is_empty() {
        return;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    print_element_distribution(&mut out, &sorted, molecule.atom_count());
}

pub fn print_mass_summary(mass: f64, center: [f64; 3]) {
    let mut out = io::stderr().lock();
    let rows = [
        ("Molecular Mass", format!("{:.4} g/mol", mass)),
        (
            "Center of Mass",
            format!("{:.3}, {:.3}, {:.3}", center[0], center[1], center[2]),
        ),
    ];
    print_kv_table(&mut out, "Mass Properties", &rows);
}

pub fn print_bond_summary(bonds: &BondList, criteria: &BondCriteria) {
    let mut out = io::stderr().lock();

    let mut rows = vec![
        (
            "Window (Å)",
            format!("{} < d < {}", criteria.min_bond, criteria.max_bond),
        ),
        ("Bonds Found", bonds.len().to_string()),
    ];

    let shortest = bonds.iter().min_by(|a, b| a.1.total_cmp(&b.1));
    let longest = bonds.iter().max_by(|a, b| a.1.total_cmp(&b.1));
    if let (Some((p, dmin)), Some((q, dmax))) = (shortest, longest) {
        rows.push(("Shortest", format!("{:.4} Å  {}", dmin, p)));
        rows.push(("Longest", format!("{:.4} Å  {}", dmax, q)));
    }

    print_kv_table(&mut out, "Bond Detection", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let val_w = 32usize;

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, title);
    let _ = writeln!(
        out,
        "{}┌{}┬{}┐",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
    for (key, value) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:<val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(value, val_w),
        );
    }
    let _ = writeln!(
        out,
        "{}└{}┴{}┘",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
}

fn print_element_distribution(out: &mut impl Write, data: &[(&str, usize)], total: usize) {
    let name_w = 8usize;
    let count_w = 7usize;
    let dist_w = BAR_WIDTH + 8;

    let _ = writeln!(out, "{}┌─ Element Distribution ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{}┬{}┬{}┐",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Element", "Count", "Distribution"
    );
    let _ = writeln!(
        out,
        "{}├{}┼{}┼{}┤",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );

    for (symbol, count) in data.iter().take(MAX_ROWS) {
        let pct = *count as f64 / total as f64 * 100.0;
        let cell = format!("{}  {:>5.1}%", make_bar(pct, BAR_WIDTH), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(symbol, name_w),
            count,
            cell
        );
    }

    if data.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more elements)", data.len() - MAX_ROWS)
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┴{}┘",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(dist_w + 2)
    );
}

fn make_bar(pct: f64, width: usize) -> String {
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(make_bar(50.0, 4), "██░░");
        assert_eq!(make_bar(0.0, 3), "░░░");
        assert_eq!(make_bar(100.0, 3), "███");
        assert_eq!(make_bar(250.0, 2), "██");
    }

    #[test]
    fn kv_table_renders_all_rows() {
        let mut buf = Vec::new();
        print_kv_table(
            &mut buf,
            "Mass Properties",
            &[("Molecular Mass", "18.0150 g/mol".to_string())],
        );
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Mass Properties"));
        assert!(text.contains("18.0150 g/mol"));
        assert_eq!(text.lines().count(), 4);
    }
}
