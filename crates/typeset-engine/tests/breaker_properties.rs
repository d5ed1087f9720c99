//! Cross-strategy properties of the line breakers.

use proptest::prelude::*;

use doc_model::Style;
use typeset_engine::atoms::{self, Atom};
use typeset_engine::breaker::{self, total_demerits, LineWidths};
use typeset_engine::shape::{shape_paragraph, GlyphRun};

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
    let mut out = Vec::new();
    for (i, &w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(Atom::glue(space, space / 2.0, space / 3.0));
        }
        out.push(word(w));
    }
    atoms::push_terminator(&mut out);
    out
}

proptest! {
    /// Whenever a feasible break sequence exists, the optimizer's total
    /// demerits never exceed the greedy solution's.
    #[test]
    fn optimal_never_beats_greedy_on_demerits(
        words in prop::collection::vec(15.0f64..90.0, 4..50),
        measure in 120.0f64..400.0,
    ) {
        let atoms = stream(&words, 10.0);
        let widths = LineWidths::uniform(measure);

        if let Some(optimal) = breaker::knuth_plass::break_lines(&atoms, widths, 10.0) {
            let first_fit = breaker::greedy::break_lines(&atoms, widths);
            let d_optimal = total_demerits(&atoms, &optimal, widths);
            let d_greedy = total_demerits(&atoms, &first_fit, widths);
            prop_assert!(d_optimal <= d_greedy + 1e-6,
                "optimal {d_optimal} vs greedy {d_greedy}");
        }
    }

    /// Both strategies cover every box exactly once, in order.
    #[test]
    fn lines_partition_the_boxes(
        words in prop::collection::vec(15.0f64..90.0, 1..40),
        measure in 100.0f64..400.0,
    ) {
        let atoms = stream(&words, 10.0);
        let widths = LineWidths::uniform(measure);

        for lines in [
            breaker::greedy::break_lines(&atoms, widths),
            breaker::knuth_plass::break_lines(&atoms, widths, 10.0).unwrap_or_default(),
        ] {
            if lines.is_empty() {
                continue;
            }
            let mut boxes = 0usize;
            let mut cursor = 0usize;
            for line in &lines {
                prop_assert!(line.start >= cursor);
                boxes += atoms[line.start..line.end]
                    .iter()
                    .filter(|a| a.is_box())
                    .count();
                cursor = line.end;
            }
            prop_assert_eq!(boxes, words.len());
        }
    }

    /// Greedy never puts two boxes on a line when the first already
    /// reaches the measure.
    #[test]
    fn greedy_lines_fit_or_are_flagged(
        words in prop::collection::vec(15.0f64..90.0, 1..40),
        measure in 100.0f64..400.0,
    ) {
        let atoms = stream(&words, 10.0);
        let lines = breaker::greedy::break_lines(&atoms, LineWidths::uniform(measure));
        for line in &lines {
            prop_assert!(line.natural_width <= measure + 1e-9 || line.overfull);
        }
    }
}

#[test]
fn justified_lines_hit_the_measure_exactly() {
    // Two hundred words of running text in a 400 pt column at 10 pt.
    let vocabulary = [
        "the", "quick", "brown", "foxes", "jump", "over", "lazy", "dogs",
        "while", "typesetting", "paragraphs", "with", "elastic", "spaces",
    ];
    let mut text = String::new();
    for i in 0..200 {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(vocabulary[(i * 13 + i / 7) % vocabulary.len()]);
    }

    let style = Style::new().size(10.0).no_hyphenation().resolve();
    let outcome = shape_paragraph(&[(text, style)], true);
    let widths = LineWidths::uniform(400.0);
    let lines = breaker::break_paragraph(&outcome.atoms, widths, true);

    assert!(lines.len() > 3, "expected a multi-line paragraph");
    for (i, line) in lines.iter().enumerate() {
        let last = i + 1 == lines.len();
        if last || line.ends_forced || line.overfull {
            continue;
        }
        assert!(
            (line.adjusted_width() - 400.0).abs() < 0.01,
            "line {i} adjusted to {} instead of the 400 pt measure",
            line.adjusted_width()
        );
    }
    // The last line sits at its natural width, not stretched to the edge.
    let last = lines.last().unwrap();
    assert!(last.adjusted_width() <= 400.0 + 1e-9);
}

#[test]
fn disabling_hyphenation_never_reduces_line_count() {
    let text = "information stations mention education nationalization \
                corporation situation celebration motivation organization \
                information stations mention education nationalization";

    let with_fallback = Style::new().size(12.0).resolve();
    let without = Style::new().size(12.0).no_hyphenation().resolve();

    let widths = LineWidths::uniform(120.0);
    let hyphenated = breaker::break_paragraph(
        &shape_paragraph(&[(text.to_string(), with_fallback)], true).atoms,
        widths,
        true,
    );
    let plain = breaker::break_paragraph(
        &shape_paragraph(&[(text.to_string(), without)], true).atoms,
        widths,
        true,
    );

    assert!(plain.len() >= hyphenated.len());
    assert!(plain.iter().all(|line| !line.ends_with_hyphen));
}

#[test]
fn identical_input_breaks_identically() {
    let style = Style::new().size(10.0).resolve();
    let runs = vec![("repeatable layout of some words".to_string(), style)];
    let a = breaker::break_paragraph(
        &shape_paragraph(&runs, true).atoms,
        LineWidths::uniform(90.0),
        true,
    );
    let b = breaker::break_paragraph(
        &shape_paragraph(&runs, true).atoms,
        LineWidths::uniform(90.0),
        true,
    );

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!((x.start, x.end), (y.start, y.end));
        assert_eq!(x.ratio, y.ratio);
    }
}
