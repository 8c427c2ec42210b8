//! Interactive text dashboard: prompts for a location, date range, and API
//! key, fetches the air pollution history, and prints the derived report.
//!
//! Run with `cargo run --example dashboard`. Every failure degrades to a
//! printed notice; the process always exits cleanly.

use airstat::{Airstat, AirQualityReport, AnalysisError, ApiKey, LatLon, Pollutant, ThresholdScale};
use chrono::NaiveDate;
use std::io::{self, Write};

fn prompt(label: &str, default: &str) -> io::Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}

struct Inputs {
    lat: String,
    lon: String,
    start: String,
    end: String,
    key: String,
}

fn read_inputs() -> io::Result<Inputs> {
    Ok(Inputs {
        lat: prompt("Latitude", "-21.131641716582518")?,
        lon: prompt("Longitude", "-42.363723220344596")?,
        start: prompt("Start date (YYYY-MM-DD)", "2024-12-14")?,
        end: prompt("End date (YYYY-MM-DD)", "2024-12-20")?,
        key: prompt("OpenWeather API key", "")?,
    })
}

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:>8.2}", v),
        None => format!("{:>8}", "-"),
    }
}

#[tokio::main]
async fn main() {
    println!("Air quality history\n");

    let inputs = match read_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            return;
        }
    };

    let (Ok(lat), Ok(lon)) = (inputs.lat.parse::<f64>(), inputs.lon.parse::<f64>()) else {
        eprintln!("Latitude and longitude must be decimal numbers.");
        return;
    };
    let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(&inputs.start, "%Y-%m-%d"),
        NaiveDate::parse_from_str(&inputs.end, "%Y-%m-%d"),
    ) else {
        eprintln!("Dates must be in YYYY-MM-DD form.");
        return;
    };
    let key = ApiKey::new(inputs.key);
    if key.is_empty() {
        eprintln!("Please provide an API key.");
        return;
    }

    let client = Airstat::new(key);
    let table = match client
        .history()
        .location(LatLon(lat, lon))
        .start(start)
        .end(end)
        .call()
        .await
    {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Request failed: {}", e);
            return;
        }
    };

    let report = match AirQualityReport::build(&table, &ThresholdScale) {
        Ok(report) => report,
        Err(AnalysisError::NoData) => {
            println!("No data was found for the selected period.");
            return;
        }
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            return;
        }
    };

    println!("\nMean concentration over time");
    for point in &report.mean_series {
        match (point.mean, point.band) {
            (Some(mean), Some(band)) => println!(
                "  {}  {:>8.2}  {}",
                point.timestamp.format("%Y-%m-%d %H:%M"),
                mean,
                band
            ),
            _ => println!("  {}  {:>8}", point.timestamp.format("%Y-%m-%d %H:%M"), "-"),
        }
    }

    println!("\nIndicator summaries");
    for summary in &report.indicators {
        println!("  {}", summary);
    }

    println!("\nClassification distribution");
    for (band, count) in &report.distribution {
        println!("  {:<10} {}", band.to_string(), count);
    }

    println!("\nPeak");
    match &report.peak {
        Some(peak) => println!("  {}", peak),
        None => println!("  Could not determine a peak: insufficient data."),
    }

    println!("\nCorrelation matrix");
    print!("        ");
    for p in Pollutant::ALL {
        print!("{:>8}", p.label());
    }
    println!();
    for a in Pollutant::ALL {
        print!("  {:<6}", a.label());
        for b in Pollutant::ALL {
            print!("{}", cell(report.correlation.get(a, b)));
        }
        println!();
    }

    println!("\nHourly profile (local hour)");
    for row in &report.hourly {
        print!("  {:>2}h   ", row.key);
        for mean in row.means {
            print!("{}", cell(mean));
        }
        println!();
    }

    println!("\nWeekday profile (0 = Monday)");
    for row in &report.weekday {
        print!("  {:>2}    ", row.key);
        for mean in row.means {
            print!("{}", cell(mean));
        }
        println!();
    }
}
