// File: crates/violin-core/src/stats.rs
// Summary: Quartile summary used for the violin's inner lines.

/// First quartile, median, third quartile of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

/// Compute quartiles by linear interpolation over the sorted values.
/// Non-finite values are dropped; returns None when nothing remains.
pub fn quartiles(values: &[f64]) -> Option<Quartiles> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    Some(Quartiles {
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
    })
}

/// Interpolated quantile of an already sorted, non-empty slice. `q` in [0, 1].
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert!(quartiles(&[]).is_none());
        assert!(quartiles(&[f64::NAN]).is_none());
    }

    #[test]
    fn single_value_collapses() {
        let q = quartiles(&[7.0]).unwrap();
        assert_eq!(q.q1, 7.0);
        assert_eq!(q.median, 7.0);
        assert_eq!(q.q3, 7.0);
    }

    #[test]
    fn interpolated_quartiles_of_known_sample() {
        // 1..=5: q1 = 2, median = 3, q3 = 4
        let q = quartiles(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert!((q.q1 - 2.0).abs() < 1e-12);
        assert!((q.median - 3.0).abs() < 1e-12);
        assert!((q.q3 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn even_count_interpolates_median() {
        let q = quartiles(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((q.median - 2.5).abs() < 1e-12);
    }

    #[test]
    fn ordering_invariant() {
        let vals: Vec<f64> = (0..100).map(|i| ((i * 37) % 100) as f64).collect();
        let q = quartiles(&vals).unwrap();
        assert!(q.q1 <= q.median && q.median <= q.q3);
    }
}
