// File: crates/violin-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Pick a 1/2/5 x 10^k step so that `span` holds about `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions at multiples of a nice step inside [min, max].
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut t = first;
    while t <= max + step * 1e-9 {
        out.push(t);
        t += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_endpoints() {
        let v = linspace(0.0, 10.0, 5);
        assert_eq!(v.len(), 5);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[4], 10.0);
    }

    #[test]
    fn nice_step_rounds_to_125() {
        assert_eq!(nice_step(120.0, 6), 20.0);
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(3.0, 6), 0.5);
    }

    #[test]
    fn ticks_stay_in_range() {
        let t = ticks(0.0, 120.0, 6);
        assert!(!t.is_empty());
        assert!(t.iter().all(|&v| (0.0..=120.0).contains(&v)));
        assert_eq!(t[0], 0.0);
        assert_eq!(*t.last().unwrap(), 120.0);
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        assert!(ticks(5.0, 5.0, 6).is_empty());
    }
}
