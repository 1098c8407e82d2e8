//! Text line-chart rendering for a [`ChartSeries`].

use std::fmt::Write;

use crate::types::time_series::ChartSeries;

const POINT: char = '*';

/// Render `series` as a plot `width` columns wide and `height` rows tall.
///
/// Output is a title line (the series label), the plot with the maximum and
/// minimum close on the y-axis, an x-axis, and the first and last timestamp.
/// When the series has more points than `width`, points are sampled evenly
/// (first and last always kept). Values that are not a number leave a gap.
pub fn line_chart(series: &ChartSeries, width: usize, height: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", series.label());

    if series.is_empty() {
        out.push_str("(no data points)\n");
        return out;
    }
    let Some((lo, hi)) = series.range() else {
        out.push_str("(no numeric values)\n");
        return out;
    };

    let width = width.max(2);
    let height = height.max(2);
    let points: Vec<(&str, f64)> = series.points().collect();
    let columns = sample_indices(points.len(), width);

    let mut grid = vec![vec![' '; columns.len()]; height];
    for (col, &idx) in columns.iter().enumerate() {
        let (_, value) = points[idx];
        if !value.is_finite() {
            continue;
        }
        let row = scale(value, lo, hi, height);
        grid[height - 1 - row][col] = POINT;
    }

    let hi_label = format!("{hi:.2}");
    let lo_label = format!("{lo:.2}");
    let gutter = hi_label.len().max(lo_label.len());

    for (r, cells) in grid.iter().enumerate() {
        let line: String = cells.iter().collect();
        let line = line.trim_end();
        if r == 0 {
            let _ = writeln!(out, "{hi_label:>gutter$} ┤{line}");
        } else if r == height - 1 {
            let _ = writeln!(out, "{lo_label:>gutter$} ┤{line}");
        } else {
            let _ = writeln!(out, "{:>gutter$} │{line}", "");
        }
    }
    let _ = writeln!(out, "{:>gutter$} └{}", "", "─".repeat(columns.len()));

    let (first, _) = points[0];
    let (last, _) = points[points.len() - 1];
    if points.len() > 1 {
        let _ = writeln!(out, "{:>gutter$}  {first} … {last}", "");
    } else {
        let _ = writeln!(out, "{:>gutter$}  {first}", "");
    }
    out
}

/// Indices of the points drawn, one per column.
fn sample_indices(len: usize, width: usize) -> Vec<usize> {
    if len <= width {
        return (0..len).collect();
    }
    (0..width).map(|c| c * (len - 1) / (width - 1)).collect()
}

/// Row (0 = bottom) for `value` within `[lo, hi]`.
fn scale(value: f64, lo: f64, hi: f64, height: usize) -> usize {
    if hi <= lo {
        return (height - 1) / 2;
    }
    let frac = (value - lo) / (hi - lo);
    ((frac * (height - 1) as f64).round() as usize).min(height - 1)
}
