use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One labeled benchmark measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub label: String,
    pub seconds: f64,
}

impl Measurement {
    pub fn new(label: &str, seconds: f64) -> Self {
        Self {
            label: label.to_string(),
            seconds,
        }
    }
}

/// The renderer's optimization history: wall-clock time of the reference
/// scene after each change, slowest configurations first once sorted.
pub fn builtin_results() -> Vec<Measurement> {
    [
        ("base", 357.239),
        ("base static auto omp  2", 187.295),
        ("base static auto omp  4", 101.109),
        ("base static auto omp  8", 50.994),
        ("base static auto omp 16", 29.513),
        ("base static 1 omp 16", 33.088),
        ("base dynamic omp 16", 33.072),
        ("remove tmp var permute", 23.482),
        ("BVH", 16.082),
        ("BVH static auto omp  2", 11.854),
        ("BVH static auto omp  4", 8.320),
        ("BVH static auto omp  8", 4.514),
        ("BVH static auto omp 16", 2.790),
        ("precompute invDir intersectAABB", 2.640),
        ("fast_fmax and fast_fmin", 0.499),
        ("early return impl", 0.300),
    ]
    .into_iter()
    .map(|(label, seconds)| Measurement::new(label, seconds))
    .collect()
}

/// Sorts measurements slowest-first, the order the chart draws them in
pub fn sort_descending(results: &mut [Measurement]) {
    results.sort_by(|a, b| {
        b.seconds
            .partial_cmp(&a.seconds)
            .unwrap_or(Ordering::Equal)
    });
}

/// Renders a log-scale horizontal bar chart, one row per measurement,
/// slowest first, with the value printed at the end of each bar.
/// `width` is the length of the longest bar in characters.
pub fn render_chart(results: &[Measurement], width: usize) -> String {
    let mut sorted = results.to_vec();
    sort_descending(&mut sorted);

    if sorted.is_empty() {
        return "No results to plot\n".to_string();
    }

    let label_width = sorted.iter().map(|m| m.label.len()).max().unwrap_or(0);

    // Log scale over the positive measurements; zero or negative values
    // get an empty bar but keep their row.
    let positive: Vec<f64> = sorted
        .iter()
        .map(|m| m.seconds)
        .filter(|s| *s > 0.0)
        .collect();
    let hi = positive.iter().cloned().fold(f64::MIN, f64::max).ln();
    let lo = positive.iter().cloned().fold(f64::MAX, f64::min).ln();

    let mut out = String::new();
    for m in &sorted {
        let bar = "#".repeat(bar_length(m.seconds, lo, hi, width));
        out.push_str(&format!(
            "{:>label_width$}  {} {:.3} s\n",
            m.label, bar, m.seconds
        ));
    }
    out
}

fn bar_length(seconds: f64, lo: f64, hi: f64, width: usize) -> usize {
    if seconds <= 0.0 || width == 0 {
        return 0;
    }
    if hi <= lo {
        return width;
    }
    let t = (seconds.ln() - lo) / (hi - lo);
    (1.0 + t * (width - 1) as f64).round() as usize
}
