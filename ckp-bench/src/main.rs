use anyhow::{anyhow, Result};
use ckp_bench::{
    benchmark::run_benchmark,
    instances::{generate_records, solve_records},
    report::{render_columns, render_instance, render_size},
    settings::{parse_algorithms, BenchmarkSettings, DEFAULT_SEED},
};
use ckp_challenges::conflict_knapsack::load_records;
use ckp_utils::{jsonify_pretty, load_json_arg, read_json_arg};
use clap::{arg, value_parser, Arg, Command};
use std::{fs, path::PathBuf};

fn cli() -> Command {
    Command::new("ckp-bench")
        .about("Benchmarks knapsack solvers on instances with pairwise item conflicts")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("random")
                .about("Times each algorithm on batches of random instances")
                .arg(
                    arg!([SETTINGS] "Settings json string or path to json file")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the report will be saved to this file path")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("json")
                .about("Solves instances read from json records")
                .arg(
                    arg!(<INSTANCES> "Instances json string, path to json file, or '-' for stdin")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--capacity [CAPACITY] "Capacity for records without one")
                        .default_value("50")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(
                    arg!(--algorithms [ALGORITHMS] "Comma separated algorithm names")
                        .default_value("exact_dp,random_greedy,ratio_greedy")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation")
                        .default_value(DEFAULT_SEED)
                        .value_parser(value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Writes random instances as json records")
                .arg(
                    arg!(<NUM_ITEMS> "Number of items per instance")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    arg!(--count [COUNT] "Number of instances")
                        .default_value("1")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("capacity_per_item")
                        .long("capacity-per-item")
                        .help("Capacity is this times the number of items")
                        .default_value("10")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation")
                        .default_value(DEFAULT_SEED)
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the records will be saved to this file path")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("random", sub_m)) => random_instances(
            sub_m.get_one::<String>("SETTINGS").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("json", sub_m)) => json_instances(
            sub_m.get_one::<String>("INSTANCES").unwrap().clone(),
            *sub_m.get_one::<i64>("capacity").unwrap(),
            sub_m.get_one::<String>("algorithms").unwrap().clone(),
            sub_m.get_one::<String>("seed").unwrap().clone(),
        ),
        Some(("generate", sub_m)) => generate_instances(
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<usize>("count").unwrap(),
            *sub_m.get_one::<u32>("capacity_per_item").unwrap(),
            sub_m.get_one::<String>("seed").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn random_instances(settings: Option<String>, output_file: Option<PathBuf>) -> Result<()> {
    let settings = match settings {
        Some(settings) => load_json_arg::<BenchmarkSettings>(&settings)?,
        None => BenchmarkSettings::default(),
    };

    let report = run_benchmark(&settings, |size| println!("{}", render_size(size)))?;
    println!("{}", render_columns(&report));

    if let Some(path) = output_file {
        fs::write(&path, jsonify_pretty(&report))
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
        log::info!("Saved report to {}", path.display());
    }
    Ok(())
}

pub fn json_instances(
    instances: String,
    default_capacity: i64,
    algorithms: String,
    seed: String,
) -> Result<()> {
    let algorithms = parse_algorithms(&algorithms)?;
    let records = load_records(&read_json_arg(&instances)?)?;
    for report in solve_records(&records, default_capacity, &algorithms, &seed)? {
        println!("{}", render_instance(&report));
    }
    Ok(())
}

pub fn generate_instances(
    num_items: usize,
    count: usize,
    capacity_per_item: u32,
    seed: String,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let records = generate_records(num_items, count, capacity_per_item, &seed)?;
    let json = jsonify_pretty(&records);
    match output_file {
        Some(path) => {
            fs::write(&path, json)
                .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
            log::info!("Saved {} instances to {}", records.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
