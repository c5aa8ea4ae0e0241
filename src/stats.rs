//! Per-metric aggregation: histogram bucketing plus total and average.
//!
//! Only finite samples take part. Absent card statistics are never coerced to
//! zero upstream, so a sample set is simply the values that exist.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::BUCKET_COUNT;
use crate::error::{DeckStatsError, Result};
use crate::models::{CardRecord, Metric};

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Fixed-count, equal-width histogram over `[min, max]` of a sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bucket_width: f64,
    /// `~` followed by the formatted bucket midpoint.
    pub bucket_labels: Vec<String>,
    pub bucket_counts: Vec<usize>,
}

impl Histogram {
    pub fn bucket_count(&self) -> usize {
        self.bucket_counts.len()
    }

    /// Value at the middle of bucket `index`.
    pub fn midpoint(&self, index: usize) -> f64 {
        self.min + self.bucket_width * (index as f64 + 0.5)
    }

    /// Bucket a finite value falls into, clamped to the last bucket.
    ///
    /// With a zero width (all samples equal) every value lands in bucket 0.
    pub fn bucket_index(&self, value: f64) -> usize {
        bucket_index(value, self.min, self.bucket_width, self.bucket_count())
    }

    /// Heat-map color of each bucket midpoint for `metric`.
    pub fn bucket_colors(&self, metric: Metric) -> Vec<Color> {
        (0..self.bucket_count())
            .map(|i| metric.heat_color(self.midpoint(i)))
            .collect()
    }
}

fn bucket_index(value: f64, min: f64, width: f64, count: usize) -> usize {
    if width <= 0.0 {
        return 0;
    }
    let raw = ((value - min) / width).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(count - 1)
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub histogram: Histogram,
    /// Number of finite samples.
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

/// Bucket a sample set into a histogram and compute its total and average.
///
/// Non-finite samples are ignored everywhere: in min/max, in the buckets, and
/// in the total and average. The total is accumulated over the sorted values,
/// so the result is the same for any ordering of `samples`.
///
/// # Errors
///
/// Returns [`DeckStatsError::EmptySample`] when no sample is finite.
///
/// ```
/// use deckstats::stats::summarize;
///
/// let summary = summarize(&[5.0, 5.0, 5.0, 5.0], |v| format!("{:.1}", v)).unwrap();
/// assert_eq!(summary.histogram.bucket_counts[0], 4);
/// assert_eq!(summary.total, 20.0);
/// assert_eq!(summary.average, 5.0);
/// ```
pub fn summarize<F>(samples: &[f64], display: F) -> Result<Summary>
where
    F: Fn(f64) -> String,
{
    let mut values: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return Err(DeckStatsError::EmptySample(format!(
            "no finite values among {} samples",
            samples.len()
        )));
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let min = values[0];
    let max = values[values.len() - 1];
    let bucket_width = (max - min) / BUCKET_COUNT as f64;

    let mut bucket_counts = vec![0usize; BUCKET_COUNT];
    for &v in &values {
        bucket_counts[bucket_index(v, min, bucket_width, BUCKET_COUNT)] += 1;
    }

    let bucket_labels = (0..BUCKET_COUNT)
        .map(|i| format!("~{}", display(min + bucket_width * (i as f64 + 0.5))))
        .collect();

    let count = values.len();
    let total: f64 = values.iter().sum();

    Ok(Summary {
        histogram: Histogram {
            min,
            max,
            bucket_width,
            bucket_labels,
            bucket_counts,
        },
        count,
        total,
        average: total / count as f64,
    })
}

/// Summarize one metric across a set of card records.
///
/// Records without a value for `metric` are skipped.
pub fn summarize_metric<'a, I>(metric: Metric, records: I) -> Result<Summary>
where
    I: IntoIterator<Item = &'a CardRecord>,
{
    let samples: Vec<f64> = records.into_iter().filter_map(|r| metric.value(r)).collect();
    summarize(&samples, |v| metric.display(v)).map_err(|e| match e {
        DeckStatsError::EmptySample(msg) => {
            DeckStatsError::EmptySample(format!("{}: {}", metric.name(), msg))
        }
        other => other,
    })
}
