//! Plain-text rendering of a deck report.

use std::fmt::Write;

use deckstats::report::{DeckReport, MetricReport};
use deckstats::Metric;

const BAR_WIDTH: usize = 40;

pub fn failures(names: &[String]) -> String {
    if names.is_empty() {
        return String::new();
    }
    let mut out = String::from("Unable to fetch the following cards:\n");
    for name in names {
        let _ = writeln!(out, "  {}", name);
    }
    out.push('\n');
    out
}

fn cell(metric: Metric, value: Option<f64>) -> String {
    value.map(|v| metric.display(v)).unwrap_or_else(|| "-".to_string())
}

pub fn card_table(report: &DeckReport) -> String {
    let mut out = String::from("Card List\n");
    let _ = writeln!(
        out,
        "  {:<36} {:>8} {:>10} {:>11}",
        "Card Name", "Salt", "Cost", "Popularity"
    );
    for record in report.records() {
        let _ = writeln!(
            out,
            "  {:<36} {:>8} {:>10} {:>11}",
            record.name,
            cell(Metric::Salt, record.salt),
            cell(Metric::Cost, record.price),
            cell(Metric::Popularity, record.popularity)
        );
    }
    let _ = writeln!(out, "  Total: {}\n", report.records().count());
    out
}

pub fn metric_section(report: &MetricReport) -> String {
    let metric = report.metric;
    let mut out = format!("{}\n", metric.name());
    if let Some(description) = metric.description() {
        let _ = writeln!(out, "  {}", description);
    }

    let summary = match &report.summary {
        Some(summary) => summary,
        None => {
            out.push_str("  no data\n\n");
            return out;
        }
    };

    let hist = &summary.histogram;
    let peak = hist.bucket_counts.iter().copied().max().unwrap_or(0).max(1);
    let colors = hist.bucket_colors(metric);
    for ((label, count), color) in hist.bucket_labels.iter().zip(&hist.bucket_counts).zip(&colors) {
        let bar = "#".repeat(count * BAR_WIDTH / peak);
        let _ = writeln!(
            out,
            "  {:>10} {:<width$} {:>3}  {}",
            label,
            bar,
            count,
            color.to_css(),
            width = BAR_WIDTH
        );
    }
    let _ = writeln!(out, "  Average: {}", metric.display(summary.average));
    let _ = writeln!(out, "  Total:   {}\n", metric.display(summary.total));
    out
}
