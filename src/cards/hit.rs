//! Pointer-to-record resolution.
//!
//! These adapters are the only path from raw pointer geometry to an
//! active-segment index: they take exactly the fields the charts document
//! (an x in data coordinates, or a pointer offset from the donut center)
//! and return a bounded index or nothing. Everything here is pure so the
//! resolution rules are testable without a UI.

use std::f32::consts::TAU;

/// Resolve an x position in data coordinates to the nearest record index.
///
/// Records sit at integer x positions `0..len`; a pointer more than half a
/// band away from the outermost record resolves to nothing.
pub fn nearest_index(x: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let i = x.round();
    if i < 0.0 || i >= len as f64 {
        return None;
    }
    Some(i as usize)
}

/// Resolve a pointer offset from the donut center to the wedge under it.
///
/// `dx`/`dy` are in screen coordinates (y grows downward). Wedges start at
/// 12 o'clock and run clockwise in record order, each spanning its share of
/// the value total. Pointers inside the hole or outside the ring resolve to
/// nothing.
pub fn wedge_index(
    dx: f32,
    dy: f32,
    r_inner: f32,
    r_outer: f32,
    values: &[f64],
) -> Option<usize> {
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return None;
    }
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < r_inner || dist > r_outer {
        return None;
    }
    let mut theta = dx.atan2(-dy);
    if theta < 0.0 {
        theta += TAU;
    }
    let frac = f64::from(theta / TAU);

    let mut acc = 0.0;
    for (i, v) in values.iter().enumerate() {
        if *v <= 0.0 {
            continue;
        }
        acc += v / total;
        if frac < acc {
            return Some(i);
        }
    }
    // frac can land exactly on 1.0; that is the end of the last wedge.
    values.iter().rposition(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pointer offset at `frac` of a clockwise turn from 12 o'clock, radius `r`.
    fn at(frac: f32, r: f32) -> (f32, f32) {
        let th = frac * TAU;
        (th.sin() * r, -th.cos() * r)
    }

    #[test]
    fn nearest_index_snaps_to_bands() {
        assert_eq!(nearest_index(0.0, 6), Some(0));
        assert_eq!(nearest_index(1.4, 6), Some(1));
        assert_eq!(nearest_index(1.6, 6), Some(2));
        assert_eq!(nearest_index(5.2, 6), Some(5));
    }

    #[test]
    fn nearest_index_rejects_outside() {
        assert_eq!(nearest_index(-0.8, 6), None);
        assert_eq!(nearest_index(5.8, 6), None);
        assert_eq!(nearest_index(2.0, 0), None);
    }

    #[test]
    fn wedges_follow_shares_clockwise() {
        let shares = [62.0, 22.0, 16.0];
        let (dx, dy) = at(0.05, 50.0);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &shares), Some(0));
        let (dx, dy) = at(0.70, 50.0); // between 0.62 and 0.84
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &shares), Some(1));
        let (dx, dy) = at(0.95, 50.0);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &shares), Some(2));
    }

    #[test]
    fn hole_and_outside_miss() {
        let shares = [62.0, 22.0, 16.0];
        let (dx, dy) = at(0.1, 10.0);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &shares), None);
        let (dx, dy) = at(0.1, 80.0);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &shares), None);
    }

    #[test]
    fn zero_valued_records_are_skipped() {
        let shares = [0.0, 50.0, 50.0];
        let (dx, dy) = at(0.25, 50.0);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &shares), Some(1));
        let (dx, dy) = at(0.75, 50.0);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &shares), Some(2));
    }

    #[test]
    fn degenerate_totals_miss() {
        let (dx, dy) = at(0.25, 50.0);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &[]), None);
        assert_eq!(wedge_index(dx, dy, 30.0, 60.0, &[0.0, 0.0]), None);
    }
}
