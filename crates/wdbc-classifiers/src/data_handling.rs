//! Stratified train/test splitting and cross-validation folds.
//!
//! Both helpers keep the class proportions of the full label vector in every
//! partition. The train/test split is shuffled with a seeded RNG so runs are
//! reproducible; the k-fold assignment is deterministic and unshuffled.
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::dataset::class_counts;
use crate::error::{ClassifierError, Result};

/// A train/test partition of a feature matrix and its labels.
#[derive(Debug, Clone)]
pub struct Split {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Row indices of one cross-validation fold, both in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

fn n_classes(y: &[usize]) -> usize {
    y.iter().copied().max().map_or(0, |m| m + 1)
}

/// Distribute `n_draws` samples over classes in proportion to `counts`.
///
/// Every class receives the floor of its share; the leftover draws go to the
/// classes with the largest fractional part (larger class first on ties).
fn allocate_proportionally(counts: &[usize], n_draws: usize) -> Vec<usize> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }
    let shares: Vec<f64> = counts
        .iter()
        .map(|&c| c as f64 * n_draws as f64 / total as f64)
        .collect();
    let mut alloc: Vec<usize> = shares.iter().map(|s| s.floor() as usize).collect();

    let mut remaining = n_draws.min(total).saturating_sub(alloc.iter().sum());
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = shares[a] - shares[a].floor();
        let fb = shares[b] - shares[b].floor();
        fb.partial_cmp(&fa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(counts[b].cmp(&counts[a]))
    });
    for &class in order.iter().cycle() {
        if remaining == 0 {
            break;
        }
        if alloc[class] < counts[class] {
            alloc[class] += 1;
            remaining -= 1;
        }
    }
    alloc
}

/// Stratified shuffle split into train and test partitions.
///
/// # Arguments
///
/// * `x` - Feature matrix, one row per sample.
/// * `y` - Class labels `0..n_classes`.
/// * `test_size` - Fraction of samples held out, strictly between 0 and 1.
/// * `seed` - Seed of the shuffle.
///
/// # Returns
///
/// A `Split` whose test partition holds `ceil(test_size * n)` samples.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<usize>,
    test_size: f64,
    seed: u64,
) -> Result<Split> {
    if x.nrows() != y.len() {
        return Err(ClassifierError::Shape(format!(
            "{} feature rows but {} labels",
            x.nrows(),
            y.len()
        )));
    }
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ClassifierError::InvalidConfig(format!(
            "test_size must lie strictly between 0 and 1, got {}",
            test_size
        )));
    }

    let labels = y.to_vec();
    let n = labels.len();
    let n_test = (test_size * n as f64).ceil() as usize;
    let n_train = n - n_test.min(n);
    let counts = class_counts(&labels, n_classes(&labels));
    let present = counts.iter().filter(|&&c| c > 0).count();

    if let Some(min) = counts.iter().filter(|&&c| c > 0).min() {
        if *min < 2 {
            return Err(ClassifierError::InsufficientData(
                "the least populated class has only 1 member, stratification needs at least 2"
                    .to_string(),
            ));
        }
    }
    if n_test < present || n_train < present {
        return Err(ClassifierError::InsufficientData(format!(
            "train size {} and test size {} must both be at least the number of classes {}",
            n_train, n_test, present
        )));
    }

    let test_alloc = allocate_proportionally(&counts, n_test);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_indices = Vec::with_capacity(n_train);
    let mut test_indices = Vec::with_capacity(n_test);

    for (class, &n_class_test) in test_alloc.iter().enumerate() {
        let mut members: Vec<usize> = (0..n).filter(|&i| labels[i] == class).collect();
        members.shuffle(&mut rng);
        test_indices.extend_from_slice(&members[..n_class_test]);
        train_indices.extend_from_slice(&members[n_class_test..]);
    }
    train_indices.shuffle(&mut rng);
    test_indices.shuffle(&mut rng);

    log::debug!(
        "Stratified split: {} train / {} test samples (seed {})",
        train_indices.len(),
        test_indices.len(),
        seed
    );

    Ok(Split {
        x_train: x.select(Axis(0), &train_indices),
        x_test: x.select(Axis(0), &test_indices),
        y_train: y.select(Axis(0), &train_indices),
        y_test: y.select(Axis(0), &test_indices),
        train_indices,
        test_indices,
    })
}

/// Unshuffled stratified k-fold assignment.
///
/// Test folds are allocated per class from the sorted label vector, so fold
/// sizes differ by at most one sample per class. Samples of a class are
/// handed to folds in their original order, in contiguous blocks.
pub fn stratified_kfold(y: &Array1<usize>, n_splits: usize) -> Result<Vec<Fold>> {
    if n_splits < 2 {
        return Err(ClassifierError::InvalidConfig(format!(
            "k-fold cross-validation requires at least 2 splits, got {}",
            n_splits
        )));
    }
    let labels = y.to_vec();
    if n_splits > labels.len() {
        return Err(ClassifierError::InsufficientData(format!(
            "cannot have {} folds with only {} samples",
            n_splits,
            labels.len()
        )));
    }
    let k = n_classes(&labels);
    let counts = class_counts(&labels, k);
    if let Some(min) = counts.iter().filter(|&&c| c > 0).min() {
        if *min < n_splits {
            return Err(ClassifierError::InsufficientData(format!(
                "the least populated class has {} members, fewer than {} folds",
                min, n_splits
            )));
        }
    }

    let mut sorted = labels.clone();
    sorted.sort_unstable();
    // allocation[fold][class]
    let allocation: Vec<Vec<usize>> = (0..n_splits)
        .map(|fold| {
            let strided: Vec<usize> = sorted.iter().skip(fold).step_by(n_splits).copied().collect();
            class_counts(&strided, k)
        })
        .collect();

    let mut test_fold = vec![0usize; labels.len()];
    for class in 0..k {
        let assignments = (0..n_splits)
            .flat_map(|fold| std::iter::repeat(fold).take(allocation[fold][class]));
        let members = (0..labels.len()).filter(|&i| labels[i] == class);
        for (sample, fold) in members.zip(assignments) {
            test_fold[sample] = fold;
        }
    }

    Ok((0..n_splits)
        .map(|fold| {
            let (test, train): (Vec<usize>, Vec<usize>) =
                (0..labels.len()).partition(|&i| test_fold[i] == fold);
            Fold { train, test }
        })
        .collect())
}
