use statrs::statistics::Statistics;

/// Mean and population standard deviation of `values`.
///
/// Returns `(NaN, NaN)` for an empty slice.
pub fn mean_and_std(values: &[f64]) -> (f64, f64) {
    (values.iter().mean(), values.iter().population_std_dev())
}

/// Indices that sort `values` from largest to smallest. Equal values keep
/// their original order; NaN sorts last.
pub fn argsort_desc(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        let (va, vb) = (values[a], values[b]);
        match (va.is_nan(), vb.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => vb.partial_cmp(&va).unwrap_or(std::cmp::Ordering::Equal),
        }
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_std() {
        let (mean, std) = mean_and_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((std - 2.0).abs() < 1e-12);
    }

    #[test]
    fn argsort_is_stable_and_descending() {
        assert_eq!(argsort_desc(&[0.1, 0.5, 0.1, f64::NAN, 0.9]), vec![4, 1, 0, 2, 3]);
    }
}
