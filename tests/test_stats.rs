//! Histogram and summary aggregation tests.

use deckstats::models::Metric;
use deckstats::stats::{summarize, summarize_metric};
use deckstats::{CardRecord, DeckStatsError};

fn plain(v: f64) -> String {
    format!("{:.1}", v)
}

fn record(name: &str, salt: Option<f64>, price: Option<f64>) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        slug: name.to_lowercase(),
        image_uri: None,
        salt,
        price,
        popularity: None,
    }
}

// ---------------------------------------------------------------------------
// Bucketing
// ---------------------------------------------------------------------------

#[test]
fn uniform_sample_lands_in_first_bucket() {
    let summary = summarize(&[5.0, 5.0, 5.0, 5.0], plain).unwrap();
    let hist = &summary.histogram;

    assert_eq!(hist.min, 5.0);
    assert_eq!(hist.max, 5.0);
    assert_eq!(hist.bucket_width, 0.0);
    assert_eq!(hist.bucket_counts, vec![4, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(summary.total, 20.0);
    assert_eq!(summary.average, 5.0);
}

#[test]
fn ten_values_fill_ten_buckets() {
    let samples: Vec<f64> = (0..10).map(f64::from).collect();
    let summary = summarize(&samples, plain).unwrap();
    let hist = &summary.histogram;

    assert_eq!(hist.bucket_count(), 10);
    assert_eq!(hist.bucket_counts, vec![1; 10]);
    assert_eq!(hist.bucket_index(9.0), 9);
}

#[test]
fn maximum_never_overflows_last_bucket() {
    let summary = summarize(&[0.0, 0.3, 1.0], plain).unwrap();
    assert_eq!(summary.histogram.bucket_counts.len(), 10);
    assert_eq!(summary.histogram.bucket_counts[9], 1);
    assert_eq!(summary.histogram.bucket_index(1.0), 9);
}

#[test]
fn out_of_range_values_are_clamped() {
    let summary = summarize(&[0.0, 10.0], plain).unwrap();
    assert_eq!(summary.histogram.bucket_index(-5.0), 0);
    assert_eq!(summary.histogram.bucket_index(50.0), 9);
}

#[test]
fn bucket_counts_sum_to_finite_count() {
    let samples = [1.0, f64::NAN, 2.5, f64::INFINITY, 7.0, 3.0, f64::NEG_INFINITY];
    let summary = summarize(&samples, plain).unwrap();

    assert_eq!(summary.count, 4);
    assert_eq!(summary.histogram.bucket_counts.iter().sum::<usize>(), 4);
    assert_eq!(summary.histogram.min, 1.0);
    assert_eq!(summary.histogram.max, 7.0);
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[test]
fn labels_show_bucket_midpoints() {
    let samples: Vec<f64> = (0..=10).map(f64::from).collect();
    let summary = summarize(&samples, plain).unwrap();
    let labels = &summary.histogram.bucket_labels;

    assert_eq!(labels.len(), 10);
    assert_eq!(labels[0], "~0.5");
    assert_eq!(labels[9], "~9.5");
}

#[test]
fn labels_use_metric_display() {
    let records = vec![record("a", None, Some(0.0)), record("b", None, Some(10.0))];
    let summary = summarize_metric(Metric::Cost, &records).unwrap();
    assert_eq!(summary.histogram.bucket_labels[0], "~$0.50");
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[test]
fn average_is_true_mean() {
    let summary = summarize(&[1.0, 2.0, 9.0], plain).unwrap();
    assert_eq!(summary.total, 12.0);
    assert_eq!(summary.average, 4.0);
}

#[test]
fn permutations_give_identical_results() {
    let a = [0.1, 0.7, 3.3, 1e-3, 12.25, 0.2, 5.5];
    let mut b = a;
    b.reverse();
    let c = [12.25, 0.1, 5.5, 0.2, 1e-3, 3.3, 0.7];

    let sa = summarize(&a, plain).unwrap();
    let sb = summarize(&b, plain).unwrap();
    let sc = summarize(&c, plain).unwrap();

    assert_eq!(sa, sb);
    assert_eq!(sa, sc);
    assert_eq!(sa.total.to_bits(), sc.total.to_bits());
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn empty_sample_is_rejected() {
    let err = summarize(&[], plain).unwrap_err();
    assert!(matches!(err, DeckStatsError::EmptySample(_)));
}

#[test]
fn all_non_finite_sample_is_rejected() {
    let err = summarize(&[f64::NAN, f64::INFINITY], plain).unwrap_err();
    assert!(matches!(err, DeckStatsError::EmptySample(_)));
}

#[test]
fn metric_without_values_names_the_metric() {
    let records = vec![record("a", None, Some(1.0))];
    let err = summarize_metric(Metric::Salt, &records).unwrap_err();
    assert!(err.to_string().contains("Salt"));
}

#[test]
fn summarize_metric_skips_absent_values() {
    let records = vec![
        record("a", Some(1.0), None),
        record("b", None, None),
        record("c", Some(3.0), None),
    ];
    let summary = summarize_metric(Metric::Salt, &records).unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average, 2.0);
}
