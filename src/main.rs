//! CLI orchestrator: build an instance, run the annealer, print the report.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::{arg, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tsp_anneal::instance::TspInstance;
use tsp_anneal::report::{comparison_table, Summary};
use tsp_anneal::sa::{Annealer, SaConfig};

fn cli() -> Command {
    Command::new("tsp-anneal")
        .about("Solves symmetric Euclidean TSP instances with simulated annealing")
        .arg(
            arg!(--cities [CITIES] "Number of random cities to generate")
                .default_value("30")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--extent [EXTENT] "Side length of the square cities are drawn from")
                .default_value("100.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--coords [PATH] "Read `x y` coordinate lines from a file instead of generating")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--seed [SEED] "Random seed for the instance and the annealer")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--runs [RUNS] "Number of independent annealing runs to compare")
                .default_value("1")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"cooling-rate" [RATE] "Geometric cooling factor in (0, 1)")
                .default_value("0.99")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--t0 [TEMP] "Initial temperature")
                .default_value("97.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--tf [TEMP] "Final temperature")
                .default_value("3.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"markov-length" [ITERS] "Candidate moves per temperature level")
                .default_value("10000")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = cli().get_matches();

    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .unwrap_or_else(rand::random);
    let runs = *matches.get_one::<usize>("runs").unwrap();

    let instance = match matches.get_one::<PathBuf>("coords") {
        Some(path) => {
            let coordinates = parse_coordinates(&fs::read_to_string(path)?)?;
            TspInstance::from_coordinates(coordinates)
        }
        None => {
            let n = *matches.get_one::<usize>("cities").unwrap();
            let extent = *matches.get_one::<f64>("extent").unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            TspInstance::random(n, extent, &mut rng)
        }
    };

    let config = SaConfig::default()
        .with_cooling_rate(*matches.get_one::<f64>("cooling-rate").unwrap())
        .with_initial_temperature(*matches.get_one::<f64>("t0").unwrap())
        .with_final_temperature(*matches.get_one::<f64>("tf").unwrap())
        .with_markov_length(*matches.get_one::<usize>("markov-length").unwrap());

    println!("instance: {} cities, seed {}", instance.n(), seed);
    println!(
        "schedule: t0={} tf={} cooling_rate={} markov_length={}",
        config.initial_temperature,
        config.final_temperature,
        config.cooling_rate,
        config.markov_length
    );

    let mut summaries = Vec::with_capacity(runs);
    for run_index in 0..runs {
        let run_config = config.clone().with_seed(seed.wrapping_add(run_index as u64));
        let result = Annealer::solve(&instance.matrix, &run_config)?;

        println!(
            "\nrun {}: length {:.4} after {} iterations ({} accepted, {} improving) in {:.2?}",
            run_index + 1,
            result.distance,
            result.iterations,
            result.accepted_moves,
            result.improving_moves,
            result.elapsed
        );
        if result.tour.len() <= 30 {
            println!("tour: {:?}", result.tour.order());
        }

        summaries.push(Summary::from_run(format!("run {}", run_index + 1), &result));
    }

    if runs > 1 {
        let entries: Vec<(&str, Option<&Summary>)> = summaries
            .iter()
            .map(|s| (s.label.as_str(), Some(s)))
            .collect();
        println!("\n{}", comparison_table(&entries));
    }

    Ok(())
}

fn parse_coordinates(text: &str) -> Result<Vec<(f64, f64)>, Box<dyn Error>> {
    let mut coordinates = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (x, y) = match (fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => return Err(format!("line {}: expected `x y`", lineno + 1).into()),
        };
        coordinates.push((x.parse()?, y.parse()?));
    }
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        let parsed = parse_coordinates("0 0\n1.5 2.5\n\n  3 4  \n").unwrap();
        assert_eq!(parsed, vec![(0.0, 0.0), (1.5, 2.5), (3.0, 4.0)]);
    }

    #[test]
    fn test_parse_coordinates_rejects_bad_lines() {
        assert!(parse_coordinates("1 2 3").is_err());
        assert!(parse_coordinates("1").is_err());
        assert!(parse_coordinates("a b").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let matches = cli().get_matches_from(["tsp-anneal"]);
        assert_eq!(*matches.get_one::<usize>("cities").unwrap(), 30);
        assert_eq!(*matches.get_one::<f64>("t0").unwrap(), 97.0);
        assert_eq!(*matches.get_one::<usize>("markov-length").unwrap(), 10_000);
        assert!(matches.get_one::<u64>("seed").is_none());
    }
}
