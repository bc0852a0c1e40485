//! Property tests for threshold resolution and the circular extent search

use ndarray::aview1;
use proptest::prelude::*;
use wave_stats::statistics::find_extent;
use wave_stats::threshold::Threshold;

const N: usize = 36;
const SPACING: f64 = 10.0;

fn global_axis() -> Vec<f64> {
    (0..N).map(|i| i as f64 * SPACING).collect()
}

fn doubled(values: &[f64]) -> Vec<f64> {
    values.iter().chain(values.iter()).copied().collect()
}

/// Lengths of the maximal runs of `true` on a circular mask with at least one `false`.
fn circular_runs(mask: &[bool]) -> Vec<usize> {
    let Some(gap) = mask.iter().position(|&m| !m) else {
        return vec![mask.len()];
    };
    let mut runs = Vec::new();
    let mut current = 0;
    for offset in 1..=mask.len() {
        if mask[(gap + offset) % mask.len()] {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    runs
}

fn sample_data() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1.0e6..1.0e6_f64, 1..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn literal_threshold_ignores_reference(value in -1.0e9..1.0e9_f64, data in sample_data()) {
        prop_assert_eq!(Threshold::Absolute(value).resolve(&data).unwrap(), value);
    }

    #[test]
    fn percentile_lies_within_data_range(pct in 0.0..=100.0_f64, data in sample_data()) {
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let cutoff = Threshold::Percentile(pct).resolve(&data).unwrap();
        prop_assert!(cutoff >= min && cutoff <= max, "{} outside [{}, {}]", cutoff, min, max);
    }

    #[test]
    fn extent_is_rotation_invariant(
        mask in proptest::collection::vec(any::<bool>(), N),
        k in 0..N,
    ) {
        prop_assume!(mask.iter().any(|&m| m) && mask.iter().any(|&m| !m));
        let runs = circular_runs(&mask);
        let longest = runs.iter().copied().max().unwrap_or(0);
        prop_assume!(runs.iter().filter(|&&r| r == longest).count() == 1);

        let native: Vec<f64> = mask.iter().map(|&m| if m { 1.0 } else { 0.0 }).collect();
        let rotated: Vec<f64> = (0..N).map(|i| native[(i + k) % N]).collect();
        let lons = doubled(&global_axis());

        let original = find_extent(aview1(&doubled(&native)), aview1(&lons), 0.5, SPACING).unwrap();
        let shifted = find_extent(aview1(&doubled(&rotated)), aview1(&lons), 0.5, SPACING).unwrap();

        let shift = k as f64 * SPACING;
        prop_assert_eq!(shifted.extent_degrees, original.extent_degrees);
        prop_assert_eq!(original.extent_degrees, longest as f64 * SPACING);
        prop_assert_eq!(shifted.start_longitude, (original.start_longitude - shift).rem_euclid(360.0));
        prop_assert_eq!(shifted.end_longitude, (original.end_longitude - shift).rem_euclid(360.0));
    }
}
