//! First-fit line breaking.

use crate::atoms::Atom;

use super::{is_breakpoint, line_start, make_line, Line, LineWidths};

/// Break the atom stream first-fit: take atoms until the next box would
/// no longer fit at natural width, then break at the last legal
/// breakpoint seen. A box that fits on no line at all is emitted alone
/// and the line marked overfull.
pub fn break_lines(atoms: &[Atom], widths: LineWidths) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    if atoms.is_empty() {
        return lines;
    }

    let mut start = first_start(atoms);
    let mut width_so_far = 0.0;
    let mut last_break: Option<usize> = None;
    let mut index = start;

    while index < atoms.len() {
        let target = widths.get(lines.len());
        match &atoms[index] {
            Atom::Penalty { cost, .. } if *cost == f64::NEG_INFINITY => {
                // Forced break consumes everything accumulated.
                lines.push(make_line(atoms, start, index, target));
                start = line_start(atoms, index);
                width_so_far = 0.0;
                last_break = None;
                index = start;
                continue;
            }
            Atom::Box { width, .. } => {
                if width_so_far + width > target && start < index {
                    // Break at the last legal point; with none, break just
                    // before this box so it opens the next line.
                    let (break_at, next_start) = match last_break {
                        Some(b) => (b, line_start(atoms, b)),
                        None => (index, index),
                    };
                    if break_at > start {
                        lines.push(make_line(atoms, start, break_at, target));
                        start = next_start;
                        width_so_far = 0.0;
                        last_break = None;
                        index = start;
                        continue;
                    }
                }
                width_so_far += width;
            }
            Atom::Glue { width, .. } => {
                if is_breakpoint(atoms, index) {
                    last_break = Some(index);
                }
                width_so_far += width;
            }
            Atom::Penalty { .. } => {
                if is_breakpoint(atoms, index) {
                    last_break = Some(index);
                }
            }
        }
        index += 1;
    }

    lines
}

fn first_start(atoms: &[Atom]) -> usize {
    let mut start = 0;
    while start < atoms.len() && matches!(atoms[start], Atom::Glue { .. }) {
        start += 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::{self, Atom};
    use crate::shape::GlyphRun;
    use doc_model::Style;

    fn word(width: f64) -> Atom {
        Atom::Box {
            width,
            run: GlyphRun {
                style: Style::new().resolve(),
                glyphs: Vec::new(),
                width,
            },
        }
    }

    fn stream(widths: &[f64], space: f64) -> Vec<Atom> {
        let mut atoms = Vec::new();
        for (i, &w) in widths.iter().enumerate() {
            if i > 0 {
                atoms.push(Atom::glue(space, space / 2.0, space / 3.0));
            }
            atoms.push(word(w));
        }
        atoms::push_terminator(&mut atoms);
        atoms
    }

    #[test]
    fn everything_fits_on_one_line() {
        let atoms = stream(&[50.0, 50.0, 50.0], 10.0);
        let lines = break_lines(&atoms, LineWidths::uniform(400.0));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_forced);
        assert!((lines[0].natural_width - 170.0).abs() < 1e-9);
    }

    #[test]
    fn breaks_at_last_fitting_space() {
        // Two words fit (110), three (170) would not.
        let atoms = stream(&[50.0, 50.0, 50.0], 10.0);
        let lines = break_lines(&atoms, LineWidths::uniform(120.0));
        assert_eq!(lines.len(), 2);
        assert!((lines[0].natural_width - 110.0).abs() < 1e-9);
        assert!((lines[1].natural_width - 50.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_box_is_emitted_overfull() {
        let atoms = stream(&[500.0, 50.0], 10.0);
        let lines = break_lines(&atoms, LineWidths::uniform(100.0));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].overfull);
        assert!(!lines[1].overfull);
    }

    #[test]
    fn forced_break_splits_lines() {
        let mut atoms = vec![word(30.0)];
        atoms.push(Atom::penalty(0.0, atoms::FORCE_BREAK, false));
        atoms.push(Atom::glue(0.0, 0.0, 0.0));
        atoms.push(word(40.0));
        atoms::push_terminator(&mut atoms);

        let lines = break_lines(&atoms, LineWidths::uniform(400.0));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_forced);
        assert_eq!(lines[0].ratio, 0.0);
        assert!((lines[1].natural_width - 40.0).abs() < 1e-9);
    }

    #[test]
    fn first_line_honors_indent_width() {
        let atoms = stream(&[50.0, 50.0, 50.0], 10.0);
        let lines = break_lines(
            &atoms,
            LineWidths {
                first: 60.0,
                rest: 400.0,
            },
        );
        assert!(lines.len() >= 2);
        assert!((lines[0].natural_width - 50.0).abs() < 1e-9);
    }
}
