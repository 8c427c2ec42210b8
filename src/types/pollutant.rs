use std::fmt;

/// One of the eight pollutants reported by the OpenWeather air pollution API.
///
/// The API delivers concentrations in μg/m³ under fixed JSON keys; [`Pollutant::key`]
/// returns that wire name, while [`Pollutant::label`] returns the human-readable
/// form used in summaries.
///
/// # Examples
///
/// ```
/// use airstat::Pollutant;
///
/// assert_eq!(Pollutant::Pm2_5.key(), "pm2_5");
/// assert_eq!(Pollutant::Pm2_5.label(), "PM2.5");
/// assert_eq!(Pollutant::ALL.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    Co,
    No,
    No2,
    O3,
    So2,
    Pm2_5,
    Pm10,
    Nh3,
}

impl Pollutant {
    /// All tracked pollutants, in the column order used by tables and matrices.
    pub const ALL: [Pollutant; 8] = [
        Pollutant::Co,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::So2,
        Pollutant::Pm2_5,
        Pollutant::Pm10,
        Pollutant::Nh3,
    ];

    /// The JSON key under which the API reports this pollutant.
    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::Co => "co",
            Pollutant::No => "no",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
            Pollutant::So2 => "so2",
            Pollutant::Pm2_5 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::Nh3 => "nh3",
        }
    }

    /// Human-readable name, as used in indicator summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Co => "CO",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::So2 => "SO2",
            Pollutant::Pm2_5 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Nh3 => "NH3",
        }
    }

    /// Index of this pollutant in [`Pollutant::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, p) in Pollutant::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = Pollutant::ALL.iter().map(|p| p.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }
}
