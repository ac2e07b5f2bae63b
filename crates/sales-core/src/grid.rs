// File: crates/sales-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use chrono::NaiveDate;

use crate::record::x_to_date;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Up to `steps` distinct day-aligned ticks across `[x_min, x_max]` (days since epoch).
pub fn date_ticks(x_min: f64, x_max: f64, steps: usize) -> Vec<(f64, NaiveDate)> {
    let mut out: Vec<(f64, NaiveDate)> = Vec::with_capacity(steps);
    for x in linspace(x_min, x_max, steps) {
        let x = x.round();
        if x < x_min.floor() || x > x_max.ceil() { continue; }
        if out.last().is_some_and(|&(prev, _)| prev == x) { continue; }
        if let Some(d) = x_to_date(x) { out.push((x, d)); }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
    }

    #[test]
    fn date_ticks_are_deduplicated_on_short_ranges() {
        let ticks = date_ticks(18_628.0, 18_630.0, 6);
        assert_eq!(ticks.len(), 3);
        assert!(ticks.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
