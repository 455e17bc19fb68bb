use softmax_multiclass::prelude::*;


// Three classes over the unit square:
// class 1 near the origin, class 2 to the right, class 3 at the top.
fn toy_model() -> SoftmaxModel {
    SoftmaxModel::from_weights(vec![
        vec![ 2.0, -1.0, -1.0],
        vec![-4.0,  4.0,  0.0],
        vec![-4.0,  0.0,  4.0],
    ]).unwrap()
}


#[test]
fn model_predicts_the_argmax_class() {
    let f = toy_model();
    assert_eq!(f.shape(), (3, 3));
    assert_eq!(f.n_class(), 3);

    assert_eq!(f.predict_point(&[1.0, 0.1, 0.1]), 1);
    assert_eq!(f.predict_point(&[1.0, 0.9, 0.1]), 2);
    assert_eq!(f.predict_point(&[1.0, 0.1, 0.9]), 3);

    let points = [[0.1, 0.1], [0.9, 0.1], [0.1, 0.9]];
    let sample = Sample::from_points(&points, &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(f.predict_all(&sample), vec![1, 2, 3]);
    assert_eq!(zero_one_loss(&sample, &f), 0.0);

    let sample = Sample::from_points(&points, &[2.0, 2.0, 1.0]).unwrap();
    assert!((zero_one_loss(&sample, &f) - 2.0 / 3.0).abs() < 1e-12);
}


#[test]
fn probabilities_form_a_distribution() {
    let f = toy_model();
    let p = f.probabilities(&[1.0, 0.9, 0.1]);

    assert_eq!(p.len(), 3);
    assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    assert!(p[1] > p[0] && p[1] > p[2]);
}


#[test]
fn columns_and_separators() {
    let f = toy_model();
    assert_eq!(f.column(2), vec![-1.0, 4.0, 0.0]);

    let separators = f.separators();
    assert_eq!(separators.len(), 3);
    // 2 - 4x - 4y = 0  <=>  y = 0.5 - x.
    assert_eq!(
        separators[0],
        Some(Separator::Line { intercept: 0.5, slope: -1.0 })
    );
    // -1 + 4x = 0  <=>  x = 0.25.
    assert_eq!(separators[1], Some(Separator::Vertical { x: 0.25 }));
}


#[test]
fn malformed_weights_are_rejected() {
    let err = SoftmaxModel::from_weights(vec![vec![1.0, 2.0]]).unwrap_err();
    assert!(matches!(err, Error::Dimension(_)));

    let err = SoftmaxModel::from_weights(vec![vec![], vec![]]).unwrap_err();
    assert!(matches!(err, Error::Dimension(_)));

    let ragged = vec![vec![1.0, 2.0], vec![1.0], vec![0.0, 0.0]];
    let err = SoftmaxModel::from_weights(ragged).unwrap_err();
    assert!(matches!(err, Error::Dimension(_)));
}


#[test]
fn model_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");

    let f = toy_model();
    f.save(&path).unwrap();
    let g = SoftmaxModel::load(&path).unwrap();
    assert_eq!(f, g);
}


#[test]
fn corrupted_model_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"weights\": [[1.0, 2.0]").unwrap();
    assert!(matches!(SoftmaxModel::load(&path), Err(Error::Json(_))));

    let path = dir.path().join("short.json");
    std::fs::write(&path, "{\"weights\": [[1.0, 2.0]]}").unwrap();
    assert!(matches!(SoftmaxModel::load(&path), Err(Error::Json(_))));
}


#[test]
fn deserialization_checks_the_shape() {
    for json in [
        r#"{"weights": []}"#,
        r#"{"weights": [[], []]}"#,
        r#"{"weights": [[1.0, 2.0], [3.0]]}"#,
    ] {
        let result = serde_json::from_str::<SoftmaxModel>(json);
        assert!(result.is_err(), "{json} was accepted");
    }

    let json = r#"{"weights": [[1.0, 2.0], [3.0, 4.0]]}"#;
    let model = serde_json::from_str::<SoftmaxModel>(json).unwrap();
    assert_eq!(model.shape(), (2, 2));
}
