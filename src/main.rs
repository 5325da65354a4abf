use mcpi::config::ExperimentConfig;
use mcpi::experiment::Experiment;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let report = Experiment::new(ExperimentConfig::default()).and_then(|e| e.run());

    match report {
        Ok(report) => println!("{}", report),
        Err(err) => {
            log::error!("{}", err);
            process::exit(1);
        }
    }
}
