//! Sliding window of MV/Output samples.
//!
//! The window keeps three aligned sequences (time labels, MV values, Output
//! values) of at most [`WINDOW_CAPACITY`] entries. Each append advances the
//! time label by one second and evicts the oldest entry once the capacity is
//! exceeded.

use std::collections::VecDeque;

use crate::state::{SeriesKind, WINDOW_CAPACITY};

/// One entry of the window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Time label in whole seconds
    pub t: u64,
    pub mv: f64,
    pub output: f64,
}

/// Fixed-capacity time series with push/shift semantics
#[derive(Clone, Debug, Default)]
pub struct TimeSeries {
    labels: VecDeque<u64>,
    mv: VecDeque<f64>,
    output: VecDeque<f64>,
}

impl TimeSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self {
            labels: VecDeque::with_capacity(WINDOW_CAPACITY + 1),
            mv: VecDeque::with_capacity(WINDOW_CAPACITY + 1),
            output: VecDeque::with_capacity(WINDOW_CAPACITY + 1),
        }
    }

    /// Create a full window labelled `0..WINDOW_CAPACITY` from the given samples
    pub fn seeded<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut series = Self::new();
        for (mv, output) in samples.into_iter().take(WINDOW_CAPACITY) {
            series.append(mv, output);
        }
        series
    }

    /// Maximum number of retained samples
    pub const fn capacity(&self) -> usize {
        WINDOW_CAPACITY
    }

    /// Append a sample and return its time label.
    ///
    /// The label is one past the newest label (0 for an empty series).
    pub fn append(&mut self, mv: f64, output: f64) -> u64 {
        let t = self.labels.back().map_or(0, |last| last + 1);
        self.labels.push_back(t);
        self.mv.push_back(mv);
        self.output.push_back(output);

        if self.labels.len() > WINDOW_CAPACITY {
            self.labels.pop_front();
            self.mv.pop_front();
            self.output.pop_front();
        }
        t
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &VecDeque<u64> {
        &self.labels
    }

    pub fn mv(&self) -> &VecDeque<f64> {
        &self.mv
    }

    pub fn output(&self) -> &VecDeque<f64> {
        &self.output
    }

    /// Values of one series
    pub fn values(&self, kind: SeriesKind) -> &VecDeque<f64> {
        match kind {
            SeriesKind::Mv => &self.mv,
            SeriesKind::Output => &self.output,
        }
    }

    pub fn oldest_label(&self) -> Option<u64> {
        self.labels.front().copied()
    }

    pub fn newest_label(&self) -> Option<u64> {
        self.labels.back().copied()
    }

    /// Most recently appended sample
    pub fn latest(&self) -> Option<Sample> {
        Some(Sample {
            t: *self.labels.back()?,
            mv: *self.mv.back()?,
            output: *self.output.back()?,
        })
    }

    /// Iterate samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.labels
            .iter()
            .zip(self.mv.iter())
            .zip(self.output.iter())
            .map(|((&t, &mv), &output)| Sample { t, mv, output })
    }

    /// `[time, value]` points of one series, ready for plotting
    pub fn points(&self, kind: SeriesKind) -> Vec<[f64; 2]> {
        self.labels
            .iter()
            .zip(self.values(kind).iter())
            .map(|(&t, &v)| [t as f64, v])
            .collect()
    }

    /// Smallest and largest value across both series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.mv
            .iter()
            .chain(self.output.iter())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
