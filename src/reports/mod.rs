use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ecotally::api::CalculationReport;
use ecotally::config::ScoringWeights;
use ecotally::scorer::Level;
use strum::IntoEnumIterator;

const BAR_WIDTH: f64 = 30.0;

fn level_color(level: Level) -> Color {
    match level {
        Level::Low => Color::Green,
        Level::Medium => Color::Yellow,
        Level::High => Color::Red,
    }
}

fn level_marker(level: Level) -> &'static str {
    match level {
        Level::Low => "✅",
        Level::Medium => "ℹ️ ",
        Level::High => "⚠️ ",
    }
}

pub fn print_summary(report: &CalculationReport) {
    println!("\n🌍 === CARBON FOOTPRINT === 🌍");
    println!(
        "{} {} tons of CO2 per year ({})",
        level_marker(report.level),
        report.total_display,
        report.level
    );
    println!("   {}", report.headline);
}

pub fn print_breakdown(report: &CalculationReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("CO2 (tons)"),
        Cell::new("Share"),
        Cell::new(""),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for entry in &report.breakdown {
        let bar_len = (entry.share / 100.0 * BAR_WIDTH).round() as usize;
        table.add_row(vec![
            Cell::new(entry.name.to_string()),
            Cell::new(format!("{:.2}", entry.value)),
            Cell::new(format!("{:.0}%", entry.share)),
            Cell::new("█".repeat(bar_len)).fg(Color::Blue),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(&report.total_display)
            .add_attribute(Attribute::Bold)
            .fg(level_color(report.level)),
        Cell::new(""),
        Cell::new(""),
    ]);

    println!("\n{}", table);
}

pub fn print_tips(tips: &[String]) {
    println!("\n🌱 Recommendations");
    for tip in tips {
        println!("  • {}", tip);
    }
}

pub fn print_batch_summary(reports: &[CalculationReport]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Level"),
        Cell::new("Dominant"),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (idx, r) in reports.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&r.total_display).fg(Color::Cyan),
            Cell::new(r.level.to_string()).fg(level_color(r.level)),
            Cell::new(r.dominant.to_string()),
        ]);
    }

    println!("\n{}", table);

    if !reports.is_empty() {
        let n = reports.len() as f64;
        let mean = reports.iter().map(|r| r.total / n).sum::<f64>();
        println!("Scored {} inputs, mean {:.2} tons/year", reports.len(), mean);
    }
}

pub fn print_tier_table(w: &ScoringWeights) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("Range (tons/year)"),
        Cell::new("Recommendations"),
    ]);

    for level in Level::iter() {
        let range = match level {
            Level::Low => format!("< {}", w.tier_medium_min),
            Level::Medium => format!("{} to < {}", w.tier_medium_min, w.tier_high_min),
            Level::High => format!(">= {}", w.tier_high_min),
        };
        table.add_row(vec![
            Cell::new(level.to_string()).fg(level_color(level)),
            Cell::new(range),
            Cell::new(format!("{}\n\n{}", level.headline(), level.tips().join("\n"))),
        ]);
    }

    println!("\n{}", table);
}
