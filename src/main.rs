use colored::Colorize;

use softmax_multiclass::prelude::*;
use softmax_multiclass::config::{RunConfig, USAGE};


fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(args) {
        eprintln!("{} {e}", "[ERR]".bold().bright_red());
        if matches!(e, Error::Argument(_)) { eprintln!("\n{USAGE}"); }
        std::process::exit(1);
    }
}


fn run(args: Vec<String>) -> Result<()> {
    let config = RunConfig::from_args(args)?;

    // `validate` guarantees `data` is set.
    let Some(path) = config.data.as_ref() else {
        return Err(Error::Argument("no data file is given".into()));
    };

    // Load the sample: bias-augmented features and 1-indexed labels.
    let sample = SampleReader::new()
        .file(path)
        .has_header(config.has_header)
        .read()?;
    let (n_sample, n_feature) = sample.shape();
    println!(
        "{} {n_sample} examples, {n_feature} features, {} classes",
        "[DATA]".bold().blue(),
        sample.n_class(),
    );

    // Learn all `C` separators jointly.
    let trainer = config.trainer(&sample);
    let model = match &config.log {
        Some(log) => {
            let mut logger = Logger::new(
                trainer, SoftmaxCost, zero_one_loss::<SoftmaxModel>, &sample
            )
            .print_every(config.print_every);
            let model = logger.run(log)?;
            let costs = logger.cost_history();
            match &config.history {
                Some(_) if costs.is_empty() => {
                    println!(
                        "{} skipped, no update was made",
                        "[HIST]".bold().cyan()
                    );
                },
                Some(history) => plot_cost_history(history, costs)?,
                None => {},
            }
            model
        },
        None => {
            let mut trainer = trainer;
            trainer.run()?
        },
    };

    let cost = SoftmaxCost.objective_value(&sample, model.weights());
    let error = zero_one_loss(&sample, &model);
    println!(
        "{} cost = {cost:.5}, training error = {error:.5}",
        "[DONE]".bold().bright_green(),
    );

    if let Some(file) = &config.model {
        model.save(file)?;
    }

    if n_feature == 2 {
        plot_all(&config.plot, &sample, &model, &config.plot_options())?;
        println!("{} {}", "[PLOT]".bold().cyan(), config.plot.display());
    } else {
        println!(
            "{} skipped, the sample is not 2-dimensional",
            "[PLOT]".bold().cyan()
        );
    }
    Ok(())
}
