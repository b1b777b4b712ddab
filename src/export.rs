use crate::analyzer::{AnalysisReport, RankedResult};
use crate::error::SolarResult;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: [&str; 9] = [
    "Rank",
    "Name",
    "City",
    "Latitude",
    "Longitude",
    "Score",
    "Max Panels",
    "Max Area (m²)",
    "Sunshine Hours/Year",
];

/// Writes one row per ranked result, best first.
pub fn write_csv<W: Write>(ranking: &[RankedResult], writer: W) -> SolarResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for r in ranking {
        wtr.write_record([
            r.rank.to_string(),
            r.location.name.clone(),
            r.location.city.clone(),
            r.location.lat.to_string(),
            r.location.lng.to_string(),
            format!("{:.2}", r.score),
            r.solar_data.max_array_panels_count.to_string(),
            format!("{:.2}", r.solar_data.max_array_area_meters2),
            format!("{:.2}", r.solar_data.max_sunshine_hours_per_year),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// `solar-analysis-<category>-<YYYY-MM-DD>.csv`
pub fn export_filename(category: &str, date: NaiveDate) -> String {
    let slug: String = category
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("solar-analysis-{}-{}.csv", slug, date.format("%Y-%m-%d"))
}

pub fn export_to_dir(report: &AnalysisReport, dir: &Path, date: NaiveDate) -> SolarResult<PathBuf> {
    let path = dir.join(export_filename(&report.category, date));
    let file = File::create(&path)?;
    write_csv(&report.ranking, file)?;
    info!(
        "💾 Exported {} ranked locations to {}",
        report.ranking.len(),
        path.display()
    );
    Ok(path)
}
