use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use solarscope::analyzer::{solar_score, AnalysisReport, Band, Summary};
use solarscope::categories::Category;
use solarscope::insights::BuildingSolarInsights;

fn band_color(band: Band) -> Color {
    match band {
        Band::High => Color::Green,
        Band::Medium => Color::Yellow,
        Band::Low => Color::Red,
    }
}

pub fn print_ranking(report: &AnalysisReport) {
    println!("\n☀️  === SOLAR RANKING: {} === ☀️", report.category);

    if report.ranking.is_empty() {
        println!("   (no location returned solar data)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Location").add_attribute(Attribute::Bold),
        Cell::new("City"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Band"),
        Cell::new("Panels"),
        Cell::new("Area m²"),
        Cell::new("Sun h/yr"),
    ]);

    for i in [0, 3, 5, 6, 7] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in &report.ranking {
        table.add_row(vec![
            Cell::new(r.rank),
            Cell::new(&r.location.name).add_attribute(Attribute::Bold),
            Cell::new(&r.location.city),
            Cell::new(format!("{:.1}", r.score)).fg(Color::Cyan),
            Cell::new(r.band.to_string()).fg(band_color(r.band)),
            Cell::new(r.solar_data.max_array_panels_count),
            Cell::new(format!("{:.1}", r.solar_data.max_array_area_meters2)),
            Cell::new(format!("{:.0}", r.solar_data.max_sunshine_hours_per_year)),
        ]);
    }
    println!("{}", table);
}

pub fn print_failures(report: &AnalysisReport) {
    let failures: Vec<_> = report.failures().collect();
    if failures.is_empty() {
        return;
    }

    println!("\n⚠️  Failed lookups:");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Location", "City", "Error"]);
    for r in failures {
        table.add_row(vec![
            Cell::new(&r.location.name),
            Cell::new(&r.location.city),
            Cell::new(r.error.as_deref().unwrap_or("")).fg(Color::Red),
        ]);
    }
    println!("{}", table);
}

pub fn print_summary(summary: &Summary) {
    println!("\n📊 Summary");
    println!(
        "   Analyzed: {} | Succeeded: {} | Failed: {} | Skipped: {}",
        summary.total, summary.succeeded, summary.failed, summary.skipped
    );
    if summary.succeeded + summary.failed > 0 {
        println!("   Success rate: {:.0}%", summary.success_rate() * 100.0);
    }
    if let Some(best) = &summary.best {
        println!("   🏆 Best:    {} ({}) {:.1}", best.name, best.city, best.score);
    }
    if let Some(worst) = &summary.worst {
        println!("   🔻 Worst:   {} ({}) {:.1}", worst.name, worst.city, worst.score);
    }
    if let Some(avg) = summary.average_score {
        println!("   ⚖️  Average: {:.1}", avg);
    }
}

pub fn print_insights(insights: &BuildingSolarInsights) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    table.add_row(vec!["Building".to_string(), text(&insights.name)]);
    if let Some(center) = insights.center {
        table.add_row(vec![
            "Center".to_string(),
            format!("{:.5}, {:.5}", center.latitude, center.longitude),
        ]);
    }
    table.add_row(vec!["Postal code".to_string(), text(&insights.postal_code)]);
    table.add_row(vec!["Imagery quality".to_string(), text(&insights.imagery_quality)]);

    if insights.has_solar_potential {
        table.add_row(vec![
            "Max panels".to_string(),
            insights.max_array_panels_count.to_string(),
        ]);
        table.add_row(vec![
            "Max area (m²)".to_string(),
            format!("{:.2}", insights.max_array_area_meters2),
        ]);
        table.add_row(vec![
            "Sunshine hours/year".to_string(),
            format!("{:.0}", insights.max_sunshine_hours_per_year),
        ]);
        table.add_row(vec![
            Cell::new("Solar score").add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", solar_score(insights))).fg(Color::Cyan),
        ]);
    } else {
        table.add_row(vec![
            Cell::new("Solar potential"),
            Cell::new("No solar data available for this location.").fg(Color::Red),
        ]);
    }

    println!("{}", table);
}

pub fn print_category(category: &Category) {
    println!("\n📍 {} ({} locations)", category.name, category.len());
    if category.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Name", "City", "Latitude", "Longitude"]);
    for l in &category.locations {
        table.add_row(vec![
            l.name.clone(),
            l.city.clone(),
            format!("{:.4}", l.lat),
            format!("{:.4}", l.lng),
        ]);
    }
    println!("{}", table);
}
