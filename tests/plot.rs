use softmax_multiclass::prelude::*;

use std::fs;


fn three_class_sample() -> Sample {
    SampleReader::new()
        .file("tests/dataset/three_class.csv")
        .has_header(true)
        .read()
        .unwrap()
}


// Panels without titles need no font.
fn options() -> PlotOptions {
    PlotOptions::default()
        .titles(false)
        .resolution(20)
}


#[test]
fn three_panels_are_written_as_svg() {
    let sample = three_class_sample();
    let model = GradientDescent::init(&sample)
        .max_iter(200)
        .run()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fused.svg");
    plot_all(&path, &sample, &model, &options()).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<circle"));
    assert!(svg.contains("<rect"));
}


#[test]
fn untrained_model_is_plotted() {
    // Every score ties, so there is no separator and a single region.
    let sample = three_class_sample();
    let model = GradientDescent::init(&sample)
        .max_iter(0)
        .run()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zeros.svg");
    plot_all(&path, &sample, &model, &options()).unwrap();
    assert!(path.exists());
}


#[test]
fn model_and_sample_must_agree() {
    let sample = three_class_sample();
    let model = SoftmaxModel::from_weights(vec![vec![0.0; 4]; 3]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mismatch.svg");
    let err = plot_all(&path, &sample, &model, &options()).unwrap_err();
    assert!(matches!(err, Error::Dimension(_)), "{err}");
}


#[test]
fn only_two_features_are_plotted() {
    let points = [[0.1, 0.2, 0.3], [0.7, 0.8, 0.9]];
    let sample = Sample::from_points(&points, &[1.0, 2.0]).unwrap();
    let model = SoftmaxModel::from_weights(vec![vec![0.0; 2]; 4]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("3d.svg");
    let err = plot_all(&path, &sample, &model, &options()).unwrap_err();
    assert!(matches!(err, Error::Dimension(_)), "{err}");
}


#[test]
fn invalid_plot_options_are_rejected() {
    let sample = three_class_sample();
    let model = SoftmaxModel::from_weights(vec![vec![0.0; 3]; 3]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.svg");

    let opts = options().resolution(1);
    let err = plot_all(&path, &sample, &model, &opts).unwrap_err();
    assert!(matches!(err, Error::Argument(_)), "{err}");

    let opts = options().window((1.0, 0.0), (0.0, 1.0));
    let err = plot_all(&path, &sample, &model, &opts).unwrap_err();
    assert!(matches!(err, Error::Argument(_)), "{err}");
}


#[test]
fn empty_cost_history_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.svg");

    let err = plot_cost_history(&path, &[]).unwrap_err();
    assert!(matches!(err, Error::Argument(_)));

    let err = plot_cost_history(&path, &[1.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, Error::Argument(_)));
    assert!(!path.exists());
}
