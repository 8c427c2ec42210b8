pub mod pollutant;
pub mod quality;
pub mod reading;
