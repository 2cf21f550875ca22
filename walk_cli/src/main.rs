use chrono::NaiveDateTime;
use csv::Reader;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::path::Path;
use walk_core::common::walk_exception::{ErrCode, WalkError};
use walk_core::stats::{descriptive, regression, sma};
use walk_core::{Interval, RandomWalk, SeriesPair, StepConfig, StepMode};

const SMA_PERIOD: usize = 5;

#[derive(Debug)]
struct CsvRecord {
    timestamp: NaiveDateTime,
    close: f64,
}

/// Renderer-ready series for one price file, plus a random walk of the
/// same length for visual comparison.
#[derive(Debug, Serialize)]
struct SeriesReport {
    source: String,
    price: SeriesPair,
    sma: SeriesPair,
    regression: SeriesPair,
    volatility: SeriesPair,
    comparison_walk: SeriesPair,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "data".to_string());
    let mut rng = match args.next() {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };

    for entry in std::fs::read_dir(Path::new(&data_dir))? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("csv") {
            let report = process_csv_file(&path, &mut rng)?;
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}

fn process_csv_file(path: &Path, rng: &mut StdRng) -> Result<SeriesReport, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);
    let mut records = Vec::new();

    for result in rdr.records() {
        let record = result?;
        records.push(parse_csv_record(&record)?);
    }

    records.sort_by_key(|r| r.timestamp);
    let closes: Vec<f64> = records.iter().map(|r| r.close).collect();
    check_closes(&closes)?;

    Ok(SeriesReport {
        source: path.display().to_string(),
        price: SeriesPair::from_values(closes.clone()),
        sma: sma::simple_moving_average(&closes, SMA_PERIOD)?,
        regression: regression_series(&closes)?,
        volatility: running_volatility_series(&closes),
        comparison_walk: comparison_walk(&closes, rng)?,
    })
}

fn parse_csv_record(record: &csv::StringRecord) -> Result<CsvRecord, Box<dyn Error>> {
    let timestamp = NaiveDateTime::parse_from_str(&record[0], "%Y-%m-%d %H:%M:%S")?;

    Ok(CsvRecord {
        timestamp,
        close: record[4].parse()?,
    })
}

fn check_closes(closes: &[f64]) -> Result<(), WalkError> {
    if closes.is_empty() {
        return Err(WalkError::new("no closing prices in file", ErrCode::NoData));
    }
    if let Some(bad) = closes.iter().find(|&&c| c <= 0.0) {
        return Err(WalkError::new(
            format!("closing price {} is not positive", bad),
            ErrCode::PriceBelowZero,
        ));
    }
    Ok(())
}

/// Least squares trend line over the price series.
fn regression_series(closes: &[f64]) -> Result<SeriesPair, WalkError> {
    let x = descriptive::index_sequence(closes.len());
    let x_f64: Vec<f64> = x.iter().map(|&i| i as f64).collect();
    let y = regression::fitted_values(&x_f64, closes)?;
    Ok(SeriesPair { x, y })
}

fn running_volatility_series(closes: &[f64]) -> SeriesPair {
    let volatility = (0..closes.len())
        .map(|end| descriptive::standard_deviation(&closes[..=end]))
        .collect();
    SeriesPair::from_values(volatility)
}

/// Random walk starting at the first close, same length as the price
/// series, with a symmetric continuous step sized to the series' overall
/// volatility.
fn comparison_walk(closes: &[f64], rng: &mut StdRng) -> Result<SeriesPair, Box<dyn Error>> {
    let step = descriptive::standard_deviation(closes).max(1.0);
    let config = StepConfig::new(Interval::new(0.0, step)?, 0.5, StepMode::Continuous)?;
    let walk = RandomWalk::new(closes.len(), Some(closes[0]), Some(config), rng)?;
    Ok(walk.path_series())
}
