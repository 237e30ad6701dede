use clap::Parser;

use anttrace::config::Config;
use anttrace::simulation::Simulation;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the result.
    let default_level = if config.quiet { "anttrace=warn" } else { "anttrace=info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let simulation = match Simulation::new(config.clone()) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let bitmap = if config.algorithm == "all" {
        match simulation.run_all_algorithms() {
            Ok(results) => {
                for result in &results {
                    println!("{}: {}", result.report.algorithm, result.report.count);
                }
                results.into_iter().next().map(|result| result.bitmap)
            }
            Err(e) => {
                error!("Error running all algorithms: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match simulation.run() {
            Ok(result) => {
                println!("{}", result.report.count);
                Some(result.bitmap)
            }
            Err(e) => {
                error!("Fill failed: {}", e);
                std::process::exit(1);
            }
        }
    };

    if config.no_image {
        return;
    }
    if let Some(bitmap) = bitmap {
        // The count is already printed; a failed write only changes the exit code.
        if let Err(e) = simulation.write_image(&bitmap) {
            error!("Could not write {}: {}", config.output.display(), e);
            std::process::exit(1);
        }
    }
}
