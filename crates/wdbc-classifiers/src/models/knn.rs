use ndarray::{Array1, Array2};
use rayon::prelude::*;
use smartcore::algorithm::neighbour::linear_search::LinearKNNSearch;
use smartcore::metrics::distance::euclidian::Euclidian;

use crate::error::{ClassifierError, Result};
use crate::models::classifier_trait::{check_fit_inputs, check_width, ClassifierModel};

struct FittedNeighbours {
    search: LinearKNNSearch<Vec<f64>, Euclidian<f64>>,
    labels: Array1<usize>,
    n_features: usize,
}

/// k-nearest-neighbours classifier with uniform weights over `smartcore`'s
/// exhaustive Euclidean search.
///
/// Neighbours at equal distance are taken in training order. Query rows are
/// scored in parallel.
pub struct KNearestNeighbors {
    n_neighbors: usize,
    model: Option<FittedNeighbours>,
}

impl KNearestNeighbors {
    pub fn new(n_neighbors: usize) -> Self {
        KNearestNeighbors {
            n_neighbors,
            model: None,
        }
    }
}

impl ClassifierModel for KNearestNeighbors {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        check_fit_inputs(x, y)?;
        if x.nrows() < self.n_neighbors {
            return Err(ClassifierError::InsufficientData(format!(
                "n_neighbors = {} exceeds the {} training samples",
                self.n_neighbors,
                x.nrows()
            )));
        }
        let points: Vec<Vec<f64>> = x.rows().into_iter().map(|row| row.to_vec()).collect();
        let search = LinearKNNSearch::new(points, Euclidian::new()).map_err(|e| {
            ClassifierError::Fit {
                model: "K-Nearest Neighbors",
                reason: e.to_string(),
            }
        })?;
        self.model = Some(FittedNeighbours {
            search,
            labels: y.to_owned(),
            n_features: x.ncols(),
        });
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let model = self
            .model
            .as_ref()
            .ok_or(ClassifierError::NotFitted("K-Nearest Neighbors"))?;
        check_width(x, model.n_features)?;

        let k = self.n_neighbors;
        let probs = (0..x.nrows())
            .into_par_iter()
            .map(|r| {
                let neighbours = model
                    .search
                    .find(&x.row(r).to_vec(), k)
                    .map_err(|e| ClassifierError::Fit {
                        model: "K-Nearest Neighbors",
                        reason: e.to_string(),
                    })?;
                let positives = neighbours
                    .iter()
                    .filter(|(i, _, _)| model.labels[*i] == 1)
                    .count();
                Ok(positives as f64 / neighbours.len() as f64)
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Array1::from_vec(probs))
    }

    fn name(&self) -> &str {
        "K-Nearest Neighbors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn votes_follow_nearest_points() {
        let x = array![[0.0, 0.0], [0.1, 0.0], [0.0, 0.1], [5.0, 5.0], [5.1, 5.0], [5.0, 5.1]];
        let y = array![0, 0, 0, 1, 1, 1];
        let mut knn = KNearestNeighbors::new(3);
        knn.fit(&x, &y).unwrap();

        let queries = array![[0.05, 0.05], [4.9, 5.2]];
        assert_eq!(knn.predict_proba(&queries).unwrap(), array![0.0, 1.0]);
        assert_eq!(knn.predict(&x).unwrap(), y);
    }

    #[test]
    fn mixed_neighbourhood_gives_fractional_probability() {
        let x = array![[0.0], [1.0], [2.0], [10.0], [11.0]];
        let y = array![1, 0, 1, 0, 0];
        let mut knn = KNearestNeighbors::new(3);
        knn.fit(&x, &y).unwrap();
        let p = knn.predict_proba(&array![[1.0]]).unwrap();
        assert!((p[0] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_samples_for_k() {
        let mut knn = KNearestNeighbors::new(5);
        let err = knn.fit(&array![[0.0], [1.0]], &array![0, 1]);
        assert!(matches!(err, Err(ClassifierError::InsufficientData(_))));
    }
}
