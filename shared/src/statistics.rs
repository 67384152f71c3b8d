//! Small descriptive-statistics helpers shared by analytics and forecasting

/// Arithmetic mean; zero for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N); zero for an empty slice
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Most frequent label; ties go to the label that appears first
pub fn dominant_label<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (label, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Linear-trend extrapolation over an ordered sample
///
/// `trend = (values[last] - values[0]) / n` and the result is `mean + trend`.
/// Samples are expected most-recent-first, so a series that rose over time
/// yields a negative trend. With fewer than two samples `fallback` is returned.
pub fn trend_value(values: &[f64], fallback: f64) -> f64 {
    if values.len() < 2 {
        return fallback;
    }
    let first = values[0];
    let last = values[values.len() - 1];
    let trend = (last - first) / values.len() as f64;
    mean(values) + trend
}
