//! Air quality classification bands and the pluggable scale that assigns them.

use std::fmt;

/// One of the four ordered air quality bands.
///
/// The derived ordering follows the thresholds: `Good < Moderate < Poor < VeryPoor`.
/// Sorting a collection of bands therefore yields the natural display order.
///
/// # Examples
///
/// ```
/// use airstat::QualityBand;
///
/// assert!(QualityBand::Good < QualityBand::VeryPoor);
/// assert_eq!(QualityBand::VeryPoor.to_string(), "Very Poor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityBand {
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl QualityBand {
    /// All bands in threshold order.
    pub const ALL: [QualityBand; 4] = [
        QualityBand::Good,
        QualityBand::Moderate,
        QualityBand::Poor,
        QualityBand::VeryPoor,
    ];
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QualityBand::Good => "Good",
            QualityBand::Moderate => "Moderate",
            QualityBand::Poor => "Poor",
            QualityBand::VeryPoor => "Very Poor",
        };
        f.write_str(name)
    }
}

/// A pure function from a mean concentration to a [`QualityBand`].
///
/// The pipeline never hardcodes thresholds; it takes any `QualityScale`, so a
/// more accurate index (e.g. a real AQI breakpoint table) can be substituted
/// without touching the table or analysis code.
pub trait QualityScale {
    /// Classifies a mean concentration. Must be total over finite inputs.
    fn classify(&self, mean: f64) -> QualityBand;
}

/// The default scale: four fixed breakpoints on the mean concentration.
///
/// Boundary values resolve to the higher band: a mean of exactly `50.0` is
/// `Moderate`, `100.0` is `Poor`, `150.0` is `Very Poor`.
///
/// # Examples
///
/// ```
/// use airstat::{QualityBand, QualityScale, ThresholdScale};
///
/// let scale = ThresholdScale;
/// assert_eq!(scale.classify(49.9), QualityBand::Good);
/// assert_eq!(scale.classify(50.0), QualityBand::Moderate);
/// assert_eq!(scale.classify(150.0), QualityBand::VeryPoor);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdScale;

impl QualityScale for ThresholdScale {
    fn classify(&self, mean: f64) -> QualityBand {
        if mean < 50.0 {
            QualityBand::Good
        } else if mean < 100.0 {
            QualityBand::Moderate
        } else if mean < 150.0 {
            QualityBand::Poor
        } else {
            QualityBand::VeryPoor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_resolve_to_the_higher_band() {
        let scale = ThresholdScale;
        assert_eq!(scale.classify(0.0), QualityBand::Good);
        assert_eq!(scale.classify(49.999), QualityBand::Good);
        assert_eq!(scale.classify(50.0), QualityBand::Moderate);
        assert_eq!(scale.classify(99.999), QualityBand::Moderate);
        assert_eq!(scale.classify(100.0), QualityBand::Poor);
        assert_eq!(scale.classify(149.999), QualityBand::Poor);
        assert_eq!(scale.classify(150.0), QualityBand::VeryPoor);
        assert_eq!(scale.classify(1e6), QualityBand::VeryPoor);
    }

    #[test]
    fn negative_means_are_good() {
        // The API should never report negative concentrations, but the scale
        // stays total anyway.
        assert_eq!(ThresholdScale.classify(-1.0), QualityBand::Good);
    }

    #[test]
    fn band_order_matches_thresholds() {
        let mut bands = vec![
            QualityBand::Poor,
            QualityBand::Good,
            QualityBand::VeryPoor,
            QualityBand::Moderate,
        ];
        bands.sort();
        assert_eq!(bands, QualityBand::ALL.to_vec());
    }
}
