use std::collections::HashMap;

use linfa::traits::Fit;
use linfa::Dataset;
use linfa_trees::{DecisionTree, SplitQuality, TreeNode};
use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{ClassifierError, Result};
use crate::models::classifier_trait::{check_fit_inputs, check_width, ClassifierModel};

/// Branches taken from the root to a leaf, `true` for the right child.
type LeafPath = Vec<bool>;

struct FittedTree {
    tree: DecisionTree<f64, usize>,
    /// Class-1 fraction of the training rows that reached each leaf.
    leaf_proba: HashMap<LeafPath, f64>,
    n_features: usize,
}

/// CART decision tree with Gini impurity, grown by `linfa-trees`.
///
/// The leaf probability is the class-1 fraction of the training rows routed
/// to the leaf.
pub struct DecisionTreeClassifier {
    max_depth: usize,
    min_samples_split: usize,
    min_samples_leaf: usize,
    model: Option<FittedTree>,
}

/// Follow the splits of `root` down to the leaf that `row` falls in.
fn descend<'t>(
    root: &'t TreeNode<f64, usize>,
    row: ArrayView1<f64>,
) -> (&'t TreeNode<f64, usize>, LeafPath) {
    let mut node = root;
    let mut path = LeafPath::new();
    while !node.is_leaf() {
        let (feature, threshold, _) = node.split();
        let right = row[feature] >= threshold;
        let next = node.children()[usize::from(right)];
        match next {
            Some(child) => {
                node = &**child;
                path.push(right);
            }
            None => break,
        }
    }
    (node, path)
}

impl DecisionTreeClassifier {
    pub fn new(max_depth: usize, min_samples_split: usize, min_samples_leaf: usize) -> Self {
        DecisionTreeClassifier {
            max_depth,
            min_samples_split,
            min_samples_leaf,
            model: None,
        }
    }

    /// Number of leaves reached by the training rows.
    pub fn leaf_count(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.leaf_proba.len())
    }
}

impl ClassifierModel for DecisionTreeClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        check_fit_inputs(x, y)?;
        let dataset = Dataset::new(x.to_owned(), y.to_owned());

        let tree = DecisionTree::<f64, usize>::params()
            .split_quality(SplitQuality::Gini)
            .max_depth(Some(self.max_depth))
            .min_weight_split(self.min_samples_split as f32)
            .min_weight_leaf(self.min_samples_leaf as f32)
            .fit(&dataset)
            .map_err(|e| ClassifierError::Fit {
                model: "Decision Tree",
                reason: e.to_string(),
            })?;

        let mut counts: HashMap<LeafPath, [usize; 2]> = HashMap::new();
        for (row, &label) in x.rows().into_iter().zip(y.iter()) {
            let (_, path) = descend(tree.root_node(), row);
            counts.entry(path).or_default()[label] += 1;
        }
        let leaf_proba: HashMap<LeafPath, f64> = counts
            .into_iter()
            .map(|(path, [neg, pos])| (path, pos as f64 / (neg + pos) as f64))
            .collect();

        log::trace!("Decision tree grown with {} leaves", leaf_proba.len());
        self.model = Some(FittedTree {
            tree,
            leaf_proba,
            n_features: x.ncols(),
        });
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let model = self
            .model
            .as_ref()
            .ok_or(ClassifierError::NotFitted("Decision Tree"))?;
        check_width(x, model.n_features)?;

        x.rows()
            .into_iter()
            .map(|row| {
                let (leaf, path) = descend(model.tree.root_node(), row);
                model
                    .leaf_proba
                    .get(&path)
                    .copied()
                    .or_else(|| leaf.prediction().map(|label| label as f64))
                    .ok_or_else(|| ClassifierError::Fit {
                        model: "Decision Tree",
                        reason: format!("split without children on path {:?}", path),
                    })
            })
            .collect()
    }

    fn name(&self) -> &str {
        "Decision Tree"
    }

    /// Normalized impurity decrease per feature; zero for a tree without
    /// splits.
    fn feature_importances(&self) -> Option<Array1<f64>> {
        let model = self.model.as_ref()?;
        let importances = Array1::from(model.tree.feature_importance());
        Some(importances.mapv(|v| if v.is_finite() { v } else { 0.0 }))
    }
}
