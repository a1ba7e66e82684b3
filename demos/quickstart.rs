//! Quickstart: aggregate plantation records and project the next year's yield.
//!
//! Run with: cargo run --example quickstart

use chrono::NaiveDate;
use palm_forecast::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut records = Vec::new();
    for (i, year) in [2022, 2023].into_iter().enumerate() {
        for month in 1..=12u32 {
            let seasonal = 1.0 + 0.2 * ((month as f64 - 4.0) / 12.0 * std::f64::consts::TAU).sin();
            let trend = 1.0 + 0.05 * i as f64;
            for (field, base) in [("P01", 42.0), ("P02", 31.0), ("P03", 18.0)] {
                let date = NaiveDate::from_ymd_opt(year, month, 15).expect("valid date");
                let mt = base * seasonal * trend;
                records.push(PlantationRecord::new(date, field, mt, (mt * 60.0).round()));
            }
        }
    }

    let selected = RecordFilter::new().fields(["P01", "P02"]).apply(&records);
    let series = monthly_series(selected, Metric::YieldMt)?;

    let stats = MonthlyStats::from_series(&series)?;
    println!(
        "History: peak {:.1} MT ({}), lowest {:.1} MT ({}), average {:.1} MT, growth {:.1}%",
        stats.peak,
        stats.peak_month.format("%b %Y"),
        stats.lowest,
        stats.lowest_month.format("%b %Y"),
        stats.average,
        stats.growth_pct
    );
    println!();

    let horizon = Horizon::default();
    let projected = forecast(&series, horizon.months())?;

    println!("Yield forecast - next {}", horizon);
    println!("{:<10} {:>10}", "Month", "MT");
    for point in projected.points() {
        println!("{:<10} {:>10.1}", point.month.format("%b %Y"), point.value);
    }

    let summary = projected.summary(&series)?;
    println!();
    println!("Projected total yield: {:.1} MT", summary.projected_total);
    println!(
        "Projected growth:      {:.1} MT ({:.1}%)",
        summary.growth, summary.growth_pct
    );
    println!(
        "Peak forecast month:   {} ({:.1} MT)",
        summary.peak_month.format("%b %Y"),
        summary.peak_value
    );
    println!("Last historical value: {:.1} MT", summary.last_historical);

    Ok(())
}
