//! Descriptive statistics over an [`AirQualityTable`].
//!
//! Everything here is a pure function of the table: per-row means and
//! classifications, peak detection, per-pollutant summaries, the band
//! distribution, a pairwise Pearson correlation matrix, and hour-of-day /
//! day-of-week aggregate profiles. Missing values are skipped, never counted
//! as zero; a statistic with no defined inputs is `None`, never NaN.

pub mod error;
pub mod report;

use crate::analysis::error::AnalysisError;
use crate::table::AirQualityTable;
use crate::types::pollutant::Pollutant;
use crate::types::quality::{QualityBand, QualityScale};
use crate::types::reading::Reading;
use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

/// One point of the row-mean series: the input for a mean-over-time chart.
///
/// `mean` and `band` are both `None` when every pollutant in the row was
/// missing; such rows still appear in the series so the time axis stays
/// aligned with the table.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanPoint {
    pub timestamp: NaiveDateTime,
    pub mean: Option<f64>,
    pub band: Option<QualityBand>,
}

/// The reading with the highest defined row-mean in the selected window.
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    pub timestamp: NaiveDateTime,
    pub mean: f64,
}

impl fmt::Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Peak at {} with a mean concentration of {:.2}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.mean
        )
    }
}

/// Overall mean and classification for one pollutant across the whole table.
///
/// Both fields are `None` when the pollutant was missing from every row; the
/// `Display` form then reads "unavailable" instead of showing a number.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSummary {
    pub pollutant: Pollutant,
    pub mean: Option<f64>,
    pub band: Option<QualityBand>,
}

impl fmt::Display for IndicatorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mean, self.band) {
            (Some(mean), Some(band)) => {
                write!(
                    f,
                    "{}: mean = {:.2}, classification = {}",
                    self.pollutant, mean, band
                )
            }
            _ => write!(f, "{}: unavailable", self.pollutant),
        }
    }
}

/// Pairwise Pearson correlations between the eight pollutant columns.
///
/// A cell is `None` when the two columns share fewer than two rows where both
/// are present, or when either side has zero variance over the shared rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    cells: [[Option<f64>; 8]; 8],
}

impl CorrelationMatrix {
    pub fn get(&self, a: Pollutant, b: Pollutant) -> Option<f64> {
        self.cells[a.index()][b.index()]
    }

    /// Row-major iteration in [`Pollutant::ALL`] order, for heatmap rendering.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, Pollutant, Option<f64>)> + '_ {
        Pollutant::ALL.iter().flat_map(move |&a| {
            Pollutant::ALL
                .iter()
                .map(move |&b| (a, b, self.cells[a.index()][b.index()]))
        })
    }
}

/// Mean concentration per pollutant for one group of a profile.
///
/// `key` is the hour of day (0–23) or the weekday (0–6, Monday = 0) depending
/// on which profile produced the row. `means` is indexed by
/// [`Pollutant::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub key: u32,
    pub means: [Option<f64>; 8],
}

impl AirQualityTable {
    /// Per-row mean and classification, in table order.
    pub fn mean_series(&self, scale: &impl QualityScale) -> Vec<MeanPoint> {
        self.iter()
            .map(|reading| {
                let mean = reading.mean();
                MeanPoint {
                    timestamp: reading.timestamp,
                    mean,
                    band: mean.map(|m| scale.classify(m)),
                }
            })
            .collect()
    }

    /// The row with the maximum defined row-mean.
    ///
    /// Rows where every pollutant is missing have no mean and are not
    /// candidates; when several rows tie for the maximum, the earliest one
    /// wins. Returns [`AnalysisError::InsufficientData`] when no candidate
    /// exists, which covers the empty table.
    ///
    /// # Examples
    ///
    /// ```
    /// use airstat::{AirQualityTable, AnalysisError};
    ///
    /// let table = AirQualityTable::default();
    /// assert_eq!(table.peak(), Err(AnalysisError::InsufficientData));
    /// ```
    pub fn peak(&self) -> Result<Peak, AnalysisError> {
        self.iter()
            .filter_map(|reading| {
                reading.mean().map(|mean| Peak {
                    timestamp: reading.timestamp,
                    mean,
                })
            })
            // min_by_key keeps the first of equal elements, so the earliest
            // tied row wins.
            .min_by_key(|peak| Reverse(OrderedFloat(peak.mean)))
            .ok_or(AnalysisError::InsufficientData)
    }

    /// Overall mean and classification for each of the eight pollutants.
    ///
    /// Always returns eight entries in [`Pollutant::ALL`] order; a pollutant
    /// that is missing from every row yields an "unavailable" summary.
    pub fn indicator_summaries(&self, scale: &impl QualityScale) -> Vec<IndicatorSummary> {
        Pollutant::ALL
            .iter()
            .map(|&pollutant| {
                let mean = mean_of(self.iter().filter_map(|r| r.concentration(pollutant)));
                IndicatorSummary {
                    pollutant,
                    mean,
                    band: mean.map(|m| scale.classify(m)),
                }
            })
            .collect()
    }

    /// Count of classified rows per band.
    ///
    /// Rows with an undefined mean are not counted. The map iterates in the
    /// natural threshold order (`Good` first); bands with no rows are absent.
    pub fn band_distribution(&self, scale: &impl QualityScale) -> BTreeMap<QualityBand, usize> {
        let mut counts = BTreeMap::new();
        for reading in self {
            if let Some(mean) = reading.mean() {
                *counts.entry(scale.classify(mean)).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Pairwise Pearson correlation across the eight pollutant columns.
    pub fn correlation(&self) -> CorrelationMatrix {
        let mut cells = [[None; 8]; 8];
        for &a in &Pollutant::ALL {
            for &b in &Pollutant::ALL {
                let pairs: Vec<(f64, f64)> = self
                    .iter()
                    .filter_map(|r| match (r.concentration(a), r.concentration(b)) {
                        (Some(x), Some(y)) => Some((x, y)),
                        _ => None,
                    })
                    .collect();
                cells[a.index()][b.index()] = pearson(&pairs);
            }
        }
        CorrelationMatrix { cells }
    }

    /// Mean per pollutant grouped by hour of day (0–23).
    ///
    /// Only hours that occur in the table appear, sorted ascending.
    pub fn hourly_profile(&self) -> Vec<ProfileRow> {
        self.profile_by(Reading::hour)
    }

    /// Mean per pollutant grouped by day of week (0–6, Monday = 0).
    ///
    /// Only weekdays that occur in the table appear, sorted ascending.
    pub fn weekday_profile(&self) -> Vec<ProfileRow> {
        self.profile_by(Reading::weekday)
    }

    fn profile_by(&self, key_fn: impl Fn(&Reading) -> u32) -> Vec<ProfileRow> {
        // Per group and pollutant: running (sum, count) over present values.
        let mut groups: BTreeMap<u32, [(f64, usize); 8]> = BTreeMap::new();
        for reading in self {
            let sums = groups.entry(key_fn(reading)).or_insert([(0.0, 0); 8]);
            for pollutant in Pollutant::ALL {
                if let Some(value) = reading.concentration(pollutant) {
                    let slot = &mut sums[pollutant.index()];
                    slot.0 += value;
                    slot.1 += 1;
                }
            }
        }
        groups
            .into_iter()
            .map(|(key, sums)| {
                let mut means = [None; 8];
                for (i, (sum, count)) in sums.into_iter().enumerate() {
                    if count > 0 {
                        means[i] = Some(sum / count as f64);
                    }
                }
                ProfileRow { key, means }
            })
            .collect()
    }
}

/// Mean of an iterator of values; `None` when the iterator is empty.
fn mean_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Pearson correlation over complete pairs.
///
/// `None` for fewer than two pairs or when either side has zero variance.
fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    let n = pairs.len();
    if n < 2 {
        return None;
    }
    let n_f = n as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n_f;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n_f;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}
