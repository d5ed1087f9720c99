//! Optimal line breaking.
//!
//! A dynamic program over feasible breakpoints in the style of Knuth and
//! Plass. Active nodes carry cumulative demerits; at every legal
//! breakpoint each active node proposes a line, infeasible proposals are
//! skipped, and per (fitness class, first-line) key only the cheapest node
//! survives. Forced penalties are barriers: every path must break there.

use crate::atoms::Atom;

use super::{
    adjustment_ratio, badness, base_demerits, is_breakpoint, line_start, make_line, measure,
    Fitness, Line, LineWidths, FITNESS_DEMERIT, FLAGGED_DEMERIT,
};

#[derive(Debug, Clone)]
struct Node {
    /// Break atom index; `None` for the paragraph start.
    break_at: Option<usize>,
    /// Atom index where the next line's content starts.
    next_start: usize,
    line_index: usize,
    fitness: Fitness,
    flagged: bool,
    total_demerits: f64,
    /// Tie-break memo: fitness distance, raw badness, start index.
    tie: (u8, f64, usize),
    prev: Option<usize>,
}

/// Break optimally at the given tolerance. Returns `None` when some
/// stretch of atoms admits no feasible line, in which case the caller
/// expands the tolerance or falls back to the greedy breaker.
pub fn break_lines(atoms: &[Atom], widths: LineWidths, tolerance: f64) -> Option<Vec<Line>> {
    if atoms.is_empty() {
        return Some(Vec::new());
    }

    let mut nodes: Vec<Node> = vec![Node {
        break_at: None,
        next_start: line_start_from(atoms, 0),
        line_index: 0,
        fitness: Fitness::Decent,
        flagged: false,
        total_demerits: 0.0,
        tie: (0, 0.0, 0),
        prev: None,
    }];
    let mut active: Vec<usize> = vec![0];
    let mut last_node: Option<usize> = None;

    for b in 0..atoms.len() {
        if !is_breakpoint(atoms, b) {
            continue;
        }
        let (cost, flagged) = match &atoms[b] {
            Atom::Penalty { cost, flagged, .. } => (*cost, *flagged),
            _ => (0.0, false),
        };
        let forced = cost == f64::NEG_INFINITY;

        let mut fresh: Vec<Node> = Vec::new();
        let mut still_active: Vec<usize> = Vec::new();

        for &a_idx in &active {
            let a = nodes[a_idx].clone();
            let target = widths.get(a.line_index);
            let (natural, stretch, shrink) = measure(atoms, a.next_start, b);
            let ratio = adjustment_ratio(natural, stretch, shrink, target);

            // A node that is already too wide for this break can only get
            // wider; retire it.
            let exhausted = ratio < -1.0;
            if !exhausted {
                still_active.push(a_idx);
            }

            let feasible = ratio >= -1.0 && ratio <= tolerance;
            if !(feasible || forced) {
                continue;
            }

            let effective_ratio = if forced { 0.0 } else { ratio };
            let b_badness = badness(effective_ratio);
            let fitness = Fitness::of(effective_ratio);
            let fit_distance = a.fitness.distance(fitness);

            let mut demerits = base_demerits(b_badness, cost);
            if flagged && a.flagged {
                demerits += FLAGGED_DEMERIT;
            }
            if fit_distance > 1 {
                demerits += FITNESS_DEMERIT;
            }

            let candidate = Node {
                break_at: Some(b),
                next_start: line_start(atoms, b),
                line_index: a.line_index + 1,
                fitness,
                flagged,
                total_demerits: a.total_demerits + demerits,
                tie: (fit_distance, b_badness, a.next_start),
                prev: Some(a_idx),
            };

            merge_candidate(&mut fresh, candidate);
        }

        if forced {
            // Barrier: every surviving path breaks here.
            if fresh.is_empty() {
                return None;
            }
            active.clear();
            if b + 1 == atoms.len() {
                // Paragraph end: keep only the single best node.
                let best = fresh
                    .into_iter()
                    .min_by(|x, y| compare(x, y))
                    .unwrap();
                nodes.push(best);
                last_node = Some(nodes.len() - 1);
                break;
            }
            for node in fresh {
                nodes.push(node);
                active.push(nodes.len() - 1);
            }
        } else {
            active = still_active;
            for node in fresh {
                nodes.push(node);
                active.push(nodes.len() - 1);
            }
            if active.is_empty() {
                return None;
            }
        }
    }

    let mut breaks: Vec<usize> = Vec::new();
    let mut cursor = last_node?;
    loop {
        let node = &nodes[cursor];
        match node.break_at {
            Some(b) => breaks.push(b),
            None => break,
        }
        match node.prev {
            Some(p) => cursor = p,
            None => break,
        }
    }
    breaks.reverse();

    let mut lines = Vec::with_capacity(breaks.len());
    let mut start = line_start_from(atoms, 0);
    for (i, &b) in breaks.iter().enumerate() {
        lines.push(make_line(atoms, start, b, widths.get(i)));
        start = line_start(atoms, b);
    }
    Some(lines)
}

/// Keep at most one candidate per fitness class. Candidates at one
/// breakpoint agree on everything else that influences future demerits
/// (flag, next start, target width), so this prunes without losing the
/// optimum.
fn merge_candidate(fresh: &mut Vec<Node>, candidate: Node) {
    let key = |n: &Node| n.fitness;
    if let Some(existing) = fresh.iter_mut().find(|n| key(n) == key(&candidate)) {
        if compare(&candidate, existing) == std::cmp::Ordering::Less {
            *existing = candidate;
        }
    } else {
        fresh.push(candidate);
    }
}

/// Deterministic ordering: demerits, then fitness distance, then raw
/// badness, then the smaller start index.
fn compare(a: &Node, b: &Node) -> std::cmp::Ordering {
    a.total_demerits
        .partial_cmp(&b.total_demerits)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then(a.tie.0.cmp(&b.tie.0))
        .then(a.tie.1.partial_cmp(&b.tie.1).unwrap_or(std::cmp::Ordering::Equal))
        .then(a.tie.2.cmp(&b.tie.2))
}

fn line_start_from(atoms: &[Atom], at: usize) -> usize {
    let mut start = at;
    while start < atoms.len() && matches!(atoms[start], Atom::Glue { .. }) {
        start += 1;
    }
    start
}
