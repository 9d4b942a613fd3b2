//! Outcome Help Table
//!
//! Renders the full N×N verdict matrix: rows are the computer's move,
//! columns are the human's move, and every cell is the verdict **for the
//! human**, matching the perspective of the live-play result line. The
//! table is recomputed from the resolver on every request; it is pure and
//! O(N²), so there is nothing to cache.

use std::fmt::Write;

use crate::core::moves::MoveSet;
use crate::core::outcome::determine;

/// Corner label: rows = computer, columns = human.
const CORNER: &str = r"pc \ you";

/// Render the verdict matrix as a bordered text table.
pub fn render(moves: &MoveSet) -> String {
    let n = moves.len();

    // Uniform column width: widest of the corner label, the move names,
    // and the verdict words.
    let width = moves
        .iter()
        .map(str::len)
        .chain([CORNER.len(), "Draw".len()])
        .max()
        .unwrap_or(0);

    let names: Vec<&str> = moves.iter().collect();

    let mut out = String::new();
    rule(&mut out, width, n + 1, ('┌', '┬', '┐'));

    // Header: human moves across the top.
    let header: Vec<&str> = std::iter::once(CORNER).chain(names.iter().copied()).collect();
    row(&mut out, width, &header);
    rule(&mut out, width, n + 1, ('├', '┼', '┤'));

    for computer in 1..=n {
        let verdicts: Vec<String> = (1..=n)
            .map(|human| determine(human, computer, n).to_string())
            .collect();
        let cells: Vec<&str> = std::iter::once(names[computer - 1])
            .chain(verdicts.iter().map(String::as_str))
            .collect();
        row(&mut out, width, &cells);
    }

    rule(&mut out, width, n + 1, ('└', '┴', '┘'));
    out.pop(); // drop the trailing newline
    out
}

fn row(out: &mut String, width: usize, cells: &[&str]) {
    for cell in cells {
        let _ = write!(out, "│ {:<width$} ", cell);
    }
    out.push_str("│\n");
}

fn rule(out: &mut String, width: usize, cols: usize, (left, mid, right): (char, char, char)) {
    out.push(left);
    for col in 0..cols {
        if col > 0 {
            out.push(mid);
        }
        for _ in 0..width + 2 {
            out.push('─');
        }
    }
    out.push(right);
    out.push('\n');
}

// =============================================================================
// TESTS
// =============================================================================
