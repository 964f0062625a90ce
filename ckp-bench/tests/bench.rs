use ckp_algorithms::Strategy;
use ckp_bench::{
    benchmark::run_benchmark,
    instances::{generate_records, solve_records},
    report::{render_columns, render_instance, render_size},
    settings::{parse_algorithms, BenchmarkSettings, DEFAULT_JSON_CAPACITY},
};
use ckp_challenges::conflict_knapsack::load_records;
use ckp_utils::dejsonify;

fn small_settings() -> BenchmarkSettings {
    BenchmarkSettings {
        num_items: vec![8, 16],
        trials: 3,
        capacity_per_item: 10,
        seed: "bench".to_string(),
        algorithms: Strategy::ALL.to_vec(),
    }
}

#[test]
fn test_settings_defaults() {
    let settings: BenchmarkSettings = dejsonify("{}").unwrap();
    assert_eq!(settings, BenchmarkSettings::default());
    assert_eq!(settings.num_items.len(), 15);
    assert_eq!(settings.trials, 100);

    let settings: BenchmarkSettings =
        dejsonify(r#"{"trials": 2, "algorithms": ["exact_dp", "ratio_greedy"]}"#).unwrap();
    assert_eq!(settings.trials, 2);
    assert_eq!(
        settings.algorithms,
        vec![Strategy::ExactDp, Strategy::RatioGreedy]
    );
    assert_eq!(settings.capacity_per_item, 10);
}

#[test]
fn test_settings_validation() {
    let mut settings = small_settings();
    settings.trials = 0;
    assert!(settings.validate().is_err());

    let mut settings = small_settings();
    settings.algorithms = vec![Strategy::RatioGreedy, Strategy::RatioGreedy];
    assert!(settings.validate().is_err());

    let mut settings = small_settings();
    settings.algorithms.clear();
    assert!(settings.validate().is_err());

    let mut settings = small_settings();
    settings.capacity_per_item = u32::MAX;
    assert!(settings.validate().is_err());
}

#[test]
fn test_parse_algorithms() {
    assert_eq!(
        parse_algorithms("exact_dp, ratio_greedy").unwrap(),
        vec![Strategy::ExactDp, Strategy::RatioGreedy]
    );
    assert!(parse_algorithms("exact_dp,branch_and_cut").is_err());
}

#[test]
fn test_run_benchmark() {
    let settings = small_settings();
    let mut seen = Vec::new();
    let report = run_benchmark(&settings, |size| seen.push(size.num_items)).unwrap();
    assert_eq!(seen, vec![8, 16]);
    assert_eq!(report.sizes.len(), 2);

    for size in &report.sizes {
        assert_eq!(size.max_weight, size.num_items as u32 * 10);
        assert_eq!(size.stats.len(), 4);
        let value = |strategy: Strategy| {
            size.stats
                .iter()
                .find(|stats| stats.strategy == strategy)
                .unwrap()
                .average_value
        };
        assert!(value(Strategy::ExactDp) >= value(Strategy::RatioGreedy));
        assert!(value(Strategy::ExactDp) >= value(Strategy::RandomGreedy));
        assert!(size.stats.iter().all(|stats| stats.average_ms >= 0.0));
    }

    let rendered = render_size(&report.sizes[0]);
    assert!(rendered.starts_with("Number of items: 8\nKnapsack capacity: 80\n"));
    assert!(rendered.contains("Greedy random average time (milliseconds): "));
    assert_eq!(render_columns(&report).lines().count(), 4 * 4);
}

#[test]
fn test_run_benchmark_is_reproducible() {
    let settings = small_settings();
    let first = run_benchmark(&settings, |_| {}).unwrap();
    let second = run_benchmark(&settings, |_| {}).unwrap();
    for (a, b) in first.sizes.iter().zip(&second.sizes) {
        for (x, y) in a.stats.iter().zip(&b.stats) {
            assert_eq!(x.average_value, y.average_value);
        }
    }
}

#[test]
fn test_solve_records() {
    let records = load_records(
        r#"[
            {"weights": [1, 1], "values": [10, 10], "conflicts": [[1], [0]]},
            {"weights": [1, 1, 1], "values": [10, 10, 10], "conflicts": [[], [], []], "capacity": 2}
        ]"#,
    )
    .unwrap();
    let reports =
        solve_records(&records, DEFAULT_JSON_CAPACITY, &Strategy::CORE, "records").unwrap();
    assert_eq!(reports.len(), 2);

    let values: Vec<u32> = reports[0].outcomes.iter().map(|o| o.total_value).collect();
    assert_eq!(values, vec![10, 10, 10]);
    assert_eq!(reports[1].outcomes[0].total_value, 20);

    let rendered = render_instance(&reports[0]);
    assert!(rendered.contains("Weights: 1 1\n"));
    assert!(rendered.contains("Capacity: 50\n"));
    assert!(rendered.contains("1: 1\n2: 0\n"));
    assert!(rendered.contains("Dynamic programming best value: 10\n"));
    assert!(rendered.contains("Greedy best value: 10\n"));
}

#[test]
fn test_invalid_record_aborts_batch() {
    let records = load_records(
        r#"[
            {"weights": [1], "values": [10], "conflicts": [[]]},
            {"weights": [1, 2], "values": [10], "conflicts": [[], []]}
        ]"#,
    )
    .unwrap();
    let err = solve_records(&records, DEFAULT_JSON_CAPACITY, &Strategy::CORE, "records")
        .unwrap_err()
        .to_string();
    assert!(err.starts_with("Instance 1: Invalid instance"));
}

#[test]
fn test_negative_default_capacity_rejected() {
    let records = load_records(r#"[{"weights": [1], "values": [10]}]"#).unwrap();
    let err = solve_records(&records, -5, &Strategy::CORE, "records")
        .unwrap_err()
        .to_string();
    assert_eq!(err, "Instance 0: Invalid capacity: -5");
}

#[test]
fn test_generated_records_replay() {
    let records = generate_records(10, 4, 10, "replay").unwrap();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.capacity == Some(100)));
    assert_eq!(records, generate_records(10, 4, 10, "replay").unwrap());

    let reports = solve_records(&records, 0, &Strategy::ALL, "replay").unwrap();
    for report in &reports {
        assert_eq!(report.challenge.max_weight, 100);
        assert_eq!(report.outcomes.len(), 4);
    }
}
