use ndarray::{Array1, Array2};
use wdbc_classifiers::config::{default_models, ModelConfig, ModelType};
use wdbc_classifiers::models::factory;
use wdbc_classifiers::ClassifierError;

fn toy_data() -> (Array2<f64>, Array1<usize>) {
    let x = Array2::from_shape_vec(
        (8, 2),
        vec![
            1.0, 0.0, // class 1
            0.0, 1.0, // class 0
            1.0, 0.1, // class 1
            0.0, 0.9, // class 0
            1.1, 0.0, // class 1
            0.0, 1.2, // class 0
            0.9, 0.2, // class 1
            0.1, 1.1, // class 0
        ],
    )
    .expect("failed to create feature matrix");
    let y = Array1::from_vec(vec![1, 0, 1, 0, 1, 0, 1, 0]);
    (x, y)
}

#[test]
fn test_factory_builds_and_predicts() {
    let (x, y) = toy_data();
    for params in default_models() {
        let mut model = factory::build_model(&params);
        assert_eq!(model.name(), params.name());
        model.fit(&x, &y).unwrap();

        let probs = model.predict_proba(&x).unwrap();
        assert_eq!(probs.len(), x.nrows());
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
        assert_eq!(model.predict(&x).unwrap(), y, "{} misclassified", params.name());
    }
}

#[test]
fn only_the_tree_exposes_importances() {
    let (x, y) = toy_data();
    for params in default_models() {
        let mut model = factory::build_model(&params);
        model.fit(&x, &y).unwrap();
        let importances = model.feature_importances();
        match params.model_type {
            ModelType::DecisionTree { .. } => {
                let imp = importances.expect("tree importances");
                assert_eq!(imp.len(), 2);
                assert!((imp.sum() - 1.0).abs() < 1e-12);
            }
            _ => assert!(importances.is_none()),
        }
    }
}

#[test]
fn predicting_before_fit_fails() {
    let (x, _) = toy_data();
    for params in default_models() {
        let model = factory::build_model(&params);
        assert!(matches!(
            model.predict_proba(&x),
            Err(ClassifierError::NotFitted(_))
        ));
    }
}

#[test]
fn width_mismatch_is_rejected() {
    let (x, y) = toy_data();
    let mut model = factory::build_model(&ModelConfig::new(ModelType::KNearestNeighbors {
        n_neighbors: 3,
    }));
    model.fit(&x, &y).unwrap();
    let narrow = Array2::<f64>::zeros((2, 1));
    assert!(matches!(
        model.predict(&narrow),
        Err(ClassifierError::Shape(_))
    ));
}

#[test]
fn non_binary_labels_are_rejected() {
    let (x, _) = toy_data();
    let y = Array1::from_vec(vec![0, 1, 2, 0, 1, 2, 0, 1]);
    let mut model = factory::build_model(&ModelConfig::default());
    assert!(model.fit(&x, &y).is_err());
}
