use std::time::Duration;

use crate::sequence::Order;
use crate::sweep::SweepRow;

const TABLE_WIDTH: usize = 100;
const LABEL_WIDTH: usize = 13;
const CAPTION_WIDTH: usize = 25;
const CELL_WIDTH: usize = 20;

/// Heading of the table for one size, followed by a full-width rule.
pub fn size_header(size: usize) -> String {
    let mut header = format!("{:>9}", size);
    let widths = [50, CELL_WIDTH, CELL_WIDTH];
    for (order, width) in Order::ALL.iter().zip(widths) {
        header.push_str(&format!("{:>width$}", order.name()));
    }
    header.push('\n');
    header.push_str(&"-".repeat(TABLE_WIDTH));
    header.push('\n');
    header
}

/// Time line, comparison line and a separating rule for one algorithm.
///
/// Times at or below `epsilon` print as a bare `0`.
pub fn render_row(row: &SweepRow, epsilon: Duration) -> String {
    let mut out = format!("{:<LABEL_WIDTH$}{:>CAPTION_WIDTH$}", row.kind, "Time:              ");
    for m in &row.results {
        if m.elapsed > epsilon {
            out.push_str(&format!("{:>CELL_WIDTH$.3}", m.seconds()));
        } else {
            out.push_str(&format!("{:>CELL_WIDTH$}", "0"));
        }
    }
    out.push('\n');

    out.push_str(&format!("{:<LABEL_WIDTH$}{:>CAPTION_WIDTH$}", "", "Comparison Count: "));
    for m in &row.results {
        out.push_str(&format!("{:>CELL_WIDTH$}", m.comparisons));
    }
    out.push('\n');

    out.push_str(&" ".repeat(TABLE_WIDTH - 81));
    out.push_str(&"-".repeat(81));
    out.push('\n');
    out
}
