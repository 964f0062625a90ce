use crate::benchmark::{BenchmarkReport, SizeReport};
use crate::instances::InstanceReport;
use std::fmt::Write;

pub fn render_size(report: &SizeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number of items: {}", report.num_items);
    let _ = writeln!(out, "Knapsack capacity: {}", report.max_weight);
    for stats in &report.stats {
        let _ = writeln!(
            out,
            "{} average time (milliseconds): {:.3}",
            stats.strategy.label(),
            stats.average_ms
        );
    }
    out
}

/// One column of average times per strategy, in size order.
pub fn render_columns(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    for (k, strategy) in report.settings.algorithms.iter().enumerate() {
        let _ = writeln!(out, "\n{}", strategy.name());
        for size in &report.sizes {
            let _ = writeln!(out, "{:.3}", size.stats[k].average_ms);
        }
    }
    out
}

pub fn render_instance(report: &InstanceReport) -> String {
    let challenge = &report.challenge;
    let mut out = String::new();
    let _ = writeln!(out, "Weights: {}", join_numbers(&challenge.weights));
    let _ = writeln!(out, "Values: {}", join_numbers(&challenge.values));
    let _ = writeln!(out, "Capacity: {}", challenge.max_weight);
    let _ = writeln!(out, "Conflicts:");
    for i in 0..challenge.num_items {
        let _ = writeln!(
            out,
            "{}: {}",
            i + 1,
            join_numbers(challenge.conflicts.neighbours(i))
        );
    }
    for outcome in &report.outcomes {
        let _ = writeln!(
            out,
            "{} best value: {}",
            outcome.strategy.label(),
            outcome.total_value
        );
    }
    out
}

fn join_numbers<T: ToString>(xs: &[T]) -> String {
    xs.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
