use std::env;
use std::process;
use std::time::Instant;

use circle_area::{estimate_area, EstimatorConfig, Strategy};

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <strategy> [samples] [workers] [radius] [--verbose] [--time]",
        program
    );
    eprintln!("  strategy: 'sequential', 'partitioned' or 'synchronized'");
    eprintln!("  samples: optional, defaults to 100000");
    eprintln!("  workers: optional, defaults to 10");
    eprintln!("  radius: optional, defaults to 1.0");
}

fn parse_or_exit<T: std::str::FromStr>(program: &str, value: &str, what: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {}: {}", what, value);
        print_usage(program);
        process::exit(1);
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("circle_area");

    let (flags, positional): (Vec<&String>, Vec<&String>) =
        args.iter().skip(1).partition(|arg| arg.starts_with("--"));

    if positional.is_empty() {
        print_usage(program);
        process::exit(1);
    }

    let mut config = EstimatorConfig::default();
    for flag in flags {
        match flag.as_str() {
            "--verbose" => config.verbose = true,
            "--time" => config.timed = true,
            other => {
                eprintln!("Unknown flag: {}", other);
                print_usage(program);
                process::exit(1);
            }
        }
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if config.verbose { "info" } else { "warn" }),
    )
    .init();

    let strategy: Strategy = parse_or_exit(program, positional[0], "strategy");
    if let Some(samples) = positional.get(1) {
        config.sample_count = parse_or_exit(program, samples, "sample count");
    }
    if let Some(workers) = positional.get(2) {
        config.worker_count = parse_or_exit(program, workers, "worker count");
    }
    if let Some(radius) = positional.get(3) {
        config.radius = parse_or_exit(program, radius, "radius");
    }

    println!(
        "Strategy = {}, Number of Points = {}, Number of Threads = {}, Circle Radius = {:.6}",
        strategy, config.sample_count, config.worker_count, config.radius
    );

    let start = Instant::now();
    let result = match estimate_area(strategy, &config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Estimation failed: {}", err);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!("Points inside circle: {}", result.in_circle);
    println!("The Area of the circle is: {:.6}", result.area);
    if config.timed {
        println!("Elapsed Time: {:.6} seconds", elapsed.as_secs_f64());
    }
}
