use softmax_multiclass::prelude::*;

use std::fs;


fn three_class_sample() -> Sample {
    SampleReader::new()
        .file("tests/dataset/three_class.csv")
        .has_header(true)
        .read()
        .unwrap()
}


#[test]
fn logger_writes_one_row_per_iteration() {
    let sample = three_class_sample();
    let trainer = GradientDescent::init(&sample)
        .max_iter(50);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.csv");

    let mut logger = Logger::new(
        trainer, SoftmaxCost, zero_one_loss::<SoftmaxModel>, &sample
    ).print_every(usize::MAX);
    let model = logger.run(&path).unwrap();
    assert_eq!(model.shape(), (3, 3));

    let log = fs::read_to_string(&path).unwrap();
    let mut lines = log.lines();
    assert_eq!(
        lines.next(),
        Some("Iteration,Cost,GradientNorm,TrainError,Time")
    );

    let rows = lines.collect::<Vec<_>>();
    assert_eq!(rows.len(), 50);
    for (t, row) in rows.iter().enumerate() {
        let cols = row.split(',').collect::<Vec<_>>();
        assert_eq!(cols.len(), 5);
        assert_eq!(cols[0].parse::<usize>().unwrap(), t + 1);

        let error = cols[3].parse::<f64>().unwrap();
        assert!((0.0..=1.0).contains(&error));
    }

    let costs = logger.cost_history();
    assert_eq!(costs.len(), 50);
    let last = SoftmaxCost.objective_value(&sample, model.weights());
    assert!((costs[49] - last).abs() < 1e-12);
    assert!(costs.windows(2).all(|w| w[1] <= w[0]));
}


#[test]
fn logged_run_matches_plain_run() {
    let sample = three_class_sample();
    let dir = tempfile::tempdir().unwrap();

    let trainer = GradientDescent::init(&sample).max_iter(100);
    let mut logger = Logger::new(
        trainer, SoftmaxCost, zero_one_loss::<SoftmaxModel>, &sample
    ).print_every(usize::MAX);
    let f = logger.run(dir.path().join("log.csv")).unwrap();

    let g = GradientDescent::init(&sample)
        .max_iter(100)
        .run()
        .unwrap();
    assert_eq!(f, g);
}


#[test]
fn steps_without_an_update_are_not_logged() {
    let sample = three_class_sample();
    let dir = tempfile::tempdir().unwrap();

    for (max_iter, tolerance) in [(0, 1e-6), (50, 1e9)] {
        let trainer = GradientDescent::init(&sample)
            .max_iter(max_iter)
            .tolerance(tolerance);
        let path = dir.path().join(format!("log_{max_iter}.csv"));
        let mut logger = Logger::new(
            trainer, SoftmaxCost, zero_one_loss::<SoftmaxModel>, &sample
        ).print_every(usize::MAX);
        logger.run(&path).unwrap();

        let log = fs::read_to_string(&path).unwrap();
        assert_eq!(log.lines().count(), 1, "{log}");
        assert!(logger.cost_history().is_empty());
    }
}


#[test]
fn converged_run_logs_only_its_updates() {
    let sample = three_class_sample();
    let dir = tempfile::tempdir().unwrap();

    // Stop once the gradient norm is half of the initial one.
    let zeros = vec![vec![0.0; 3]; 3];
    let initial = SoftmaxCost.gradient(&sample, &zeros)
        .iter()
        .flatten()
        .map(|g| g * g)
        .sum::<f64>()
        .sqrt();

    let mut reference = GradientDescent::init(&sample)
        .tolerance(initial / 2.0);
    reference.run().unwrap();
    let n_update = reference.terminated();
    assert!(0 < n_update && n_update < 1_000);

    let trainer = GradientDescent::init(&sample)
        .tolerance(initial / 2.0);
    let path = dir.path().join("log.csv");
    let mut logger = Logger::new(
        trainer, SoftmaxCost, zero_one_loss::<SoftmaxModel>, &sample
    ).print_every(usize::MAX);
    logger.run(&path).unwrap();

    let log = fs::read_to_string(&path).unwrap();
    assert_eq!(log.lines().count(), n_update + 1);
    assert_eq!(logger.cost_history().len(), n_update);
}


#[test]
#[should_panic]
fn zero_print_interval_panics() {
    let sample = three_class_sample();
    let trainer = GradientDescent::init(&sample);
    let _ = Logger::new(
        trainer, SoftmaxCost, zero_one_loss::<SoftmaxModel>, &sample
    ).print_every(0);
}
