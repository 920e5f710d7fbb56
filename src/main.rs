use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{arg, ArgMatches, Command};
use tracing_subscriber::EnvFilter;
use u_dispatch::evaluation::CostEvaluator;
use u_dispatch::io::{format_routes, read_loads, RoutePlan};
use u_dispatch::models::DispatchProblem;
use u_dispatch::tabu::{SearchConfig, TabuSearch};

fn cli() -> Command {
    Command::new("u-dispatch")
        .about("Plans shift-limited pickup-and-delivery routes with tabu search")
        .arg_required_else_help(true)
        .arg(arg!(<FILE> "Load file").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(--config <PATH> "JSON file with search parameters")
                .value_parser(clap::value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            arg!(--seed <SEED> "Random seed")
                .value_parser(clap::value_parser!(u64))
                .required(false),
        )
        .arg(
            arg!(--iterations <N> "Number of search iterations")
                .value_parser(clap::value_parser!(usize))
                .required(false),
        )
        .arg(
            arg!(--neighborhood <N> "Neighbors generated per iteration")
                .value_parser(clap::value_parser!(usize))
                .required(false),
        )
        .arg(
            arg!(--shift <DURATION> "Maximum shift duration")
                .value_parser(clap::value_parser!(f64))
                .required(false),
        )
        .arg(
            arg!(--"driver-cost" <COST> "Fixed cost per driver")
                .value_parser(clap::value_parser!(f64))
                .required(false),
        )
        .arg(arg!(--json "Print the best solution as JSON"))
}

fn load_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    if let Some(&n) = matches.get_one::<usize>("iterations") {
        config = config.with_max_iterations(n);
    }
    if let Some(&n) = matches.get_one::<usize>("neighborhood") {
        config = config.with_neighborhood_size(n);
    }
    if let Some(&shift) = matches.get_one::<f64>("shift") {
        config = config.with_max_shift_duration(shift);
    }
    if let Some(&cost) = matches.get_one::<f64>("driver-cost") {
        config = config.with_driver_cost(cost);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    let file = matches
        .get_one::<PathBuf>("FILE")
        .context("missing load file")?;

    let loads = read_loads(file)?;
    let search = TabuSearch::new(&DispatchProblem::new(loads, config.vehicle()), &config);
    let result = search.solve();
    let problem = search.problem();

    let violations = CostEvaluator::new(problem).violations(&result.best);
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "best solution has routes over the shift");
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&RoutePlan::new(problem, &result.best))?);
    } else {
        print!("{}", format_routes(problem, &result.best));
    }
    Ok(())
}
