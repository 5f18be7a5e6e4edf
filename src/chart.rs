use crate::compactor::CompactedEntry;
use crate::format::{format_amount, NumberStyle};
use crate::utils::parse_statement_date;

/// Draws observations as `o` joined by `-` segments on a fixed grid. The x
/// axis is calendar time when every date parses, otherwise series position.
pub fn render_balance_chart(
    entries: &[CompactedEntry],
    width: usize,
    height: usize,
    style: NumberStyle,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let points = x_positions(entries)
        .into_iter()
        .zip(entries.iter().map(|e| e.balance))
        .collect::<Vec<(f64, f64)>>();

    let (x_min, x_max) = widen(range(points.iter().map(|&(x, _)| x)));
    let (y_min, y_max) = widen(range(points.iter().map(|&(_, y)| y)));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Segments first so observations overlay them.
    let cells: Vec<(usize, usize)> = points
        .iter()
        .map(|&(x, y)| (map_x(x, x_min, x_max, width), map_y(y, y_min, y_max, height)))
        .collect();
    for pair in cells.windows(2) {
        draw_line(&mut grid, pair[0], pair[1], '-');
    }
    for &(x, y) in &cells {
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Balance: [{}, {}]\n",
        format_amount(Some(y_min), style),
        format_amount(Some(y_max), style)
    ));

    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        out.push_str(&axis_labels(&first.date, &last.date, width));
        out.push('\n');
        out.push_str(&format!(
            "Latest: {} | Balance: {}\n",
            last.date,
            format_amount(Some(last.balance), style)
        ));
    }

    out
}

fn x_positions(entries: &[CompactedEntry]) -> Vec<f64> {
    let days: Option<Vec<_>> = entries
        .iter()
        .map(|e| parse_statement_date(&e.date))
        .collect();

    match days.as_deref() {
        Some([first, ..]) => days
            .iter()
            .flatten()
            .map(|day| (*day - *first).num_days() as f64)
            .collect(),
        _ => (0..entries.len()).map(|i| i as f64).collect(),
    }
}

fn axis_labels(first: &str, last: &str, width: usize) -> String {
    if first == last {
        return first.to_string();
    }
    let gap = width.saturating_sub(first.chars().count() + last.chars().count()).max(1);
    format!("{first}{}{last}", " ".repeat(gap))
}

fn range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Turns an empty or single-value range into a usable span around the value.
fn widen((min, max): (f64, f64)) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else if max > min {
        (min, max)
    } else {
        let half = (min.abs() * 0.05).max(1.0);
        (min - half, max + half)
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Highest balance on row 0.
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham); only fills empty cells.
fn draw_line(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize), ch: char) {
    let (mut x0, mut y0) = (from.0 as isize, from.1 as isize);
    let (x1, y1) = (to.0 as isize, to.1 as isize);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if let Some(cell) = grid
            .get_mut(y0 as usize)
            .and_then(|row| row.get_mut(x0 as usize))
        {
            if *cell == ' ' {
                *cell = ch;
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
