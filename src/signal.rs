//! Windowed statistics over the acceleration-magnitude signal.
//!
//! This module provides the stateless numeric primitives the stance detector
//! and the stride model are built from:
//! - Centered moving average (local means)
//! - First-order exponential low-pass filter
//! - Inclusive-range extrema
//! - Deviation of a signal around its local mean
//!
//! Design note: every routine works on caller-owned slices and writes into a
//! caller-owned output slice. Nothing here allocates, so the detector can
//! reuse its scratch buffers across windows.
//!
//! Ranges are inclusive on both ends (`start..=end`) and are range-checked:
//! an index past the end of a slice panics instead of reading stale memory.

/// Centered moving average with half-width `window`.
///
/// For every `i` in `[window, data.len() - window)`, writes the mean of
/// `data[i - window..=i + window]` into `out[i]`. Entries outside that range
/// are left untouched; callers must only read the valid range.
///
/// # Panics
///
/// Panics if `out` is shorter than `data`.
pub fn compute_local_means(data: &[f32], out: &mut [f32], window: usize) {
    assert!(out.len() >= data.len(), "output shorter than input");

    let size = data.len();
    let span = (2 * window + 1) as f32;
    for i in window..size.saturating_sub(window) {
        let sum: f32 = data[i - window..=i + window].iter().sum();
        out[i] = sum / span;
    }
}

/// Smoothing factor of a first-order low-pass filter with sample period
/// `period` and time constant `time_constant`.
pub fn low_pass_alpha(period: f32, time_constant: f32) -> f32 {
    period / (time_constant + period)
}

/// Exponential smoothing: `out[0] = data[0]`,
/// `out[i] = alpha * data[i] + (1 - alpha) * out[i - 1]`.
///
/// # Panics
///
/// Panics if `out` is shorter than `data`.
pub fn low_pass_filter(data: &[f32], out: &mut [f32], period: f32, time_constant: f32) {
    assert!(out.len() >= data.len(), "output shorter than input");

    let Some(&first) = data.first() else {
        return;
    };

    let alpha = low_pass_alpha(period, time_constant);
    out[0] = first;
    for i in 1..data.len() {
        out[i] = alpha * data[i] + (1.0 - alpha) * out[i - 1];
    }
}

/// Largest value in `values[start..=end]`.
///
/// # Panics
///
/// Panics if the range is empty or out of bounds.
pub fn windowed_max(values: &[f32], start: usize, end: usize) -> f32 {
    let window = &values[start..=end];
    window[1..]
        .iter()
        .fold(window[0], |max, &v| if max < v { v } else { max })
}

/// Smallest value in `values[start..=end]`.
///
/// # Panics
///
/// Panics if the range is empty or out of bounds.
pub fn windowed_min(values: &[f32], start: usize, end: usize) -> f32 {
    let window = &values[start..=end];
    window[1..]
        .iter()
        .fold(window[0], |min, &v| if min > v { v } else { min })
}

/// Deviation of `signal` around `means` over `[center - window, center + window]`.
///
/// Returns `sqrt(sum((signal[j] - means[j])²) / (2 * window + 1))`. Both
/// slices must hold valid values across the whole range, which for local
/// means requires `center >= 2 * window`.
pub fn windowed_deviation(signal: &[f32], means: &[f32], center: usize, window: usize) -> f32 {
    let range = center - window..=center + window;
    let sum_sq: f32 = signal[range.clone()]
        .iter()
        .zip(&means[range])
        .map(|(s, m)| {
            let d = s - m;
            d * d
        })
        .sum();
    (sum_sq / (2 * window + 1) as f32).sqrt()
}
