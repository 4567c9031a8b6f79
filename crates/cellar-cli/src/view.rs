//! Terminal rendering for beers, statistics and command outcomes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use cellar_core::stats::percentage;
use cellar_core::{Beer, BeerStats};

/// Print a confirmation line for a completed command.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a failure line on stderr.
pub fn failure(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// One labeled field line.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Pretty-print a record or summary as raw JSON, for scripting.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// One row per beer: name, brewery, style, abv, rating, status, id.
pub fn beer_table(beers: &[Beer]) {
    for beer in beers {
        let status = if beer.drank {
            "drank".green()
        } else {
            "pending".yellow()
        };

        println!(
            "{:<30} {:<20} {:<15} {:>5.1}% {:>7} {:>8}  {}",
            beer.name,
            beer.brewery,
            beer.style,
            beer.abv,
            rating_text(beer.rating),
            status,
            beer.id.as_str().dimmed(),
        );
    }

    println!();
    println!("{} beer(s)", beers.len());
}

/// The full field listing for a single beer.
pub fn beer_details(beer: &Beer) {
    field("Id", beer.id.as_str());
    field("Name", &beer.name);
    field("Brewery", &beer.brewery);
    field("Style", &beer.style);
    field("Abv", &format!("{}%", beer.abv));
    field("Rating", &rating_text(beer.rating));
    if !beer.notes.is_empty() {
        field("Notes", &beer.notes);
    }
    field("Status", if beer.drank { "drank" } else { "pending" });
    field("Added", &beer.date_added.to_rfc3339());
    if let Some(date_drank) = beer.date_drank {
        field("Drank on", &date_drank.to_rfc3339());
    }
}

/// The statistics summary, with share-of-collection percentages for the
/// top style and brewery.
pub fn stats_summary(stats: &BeerStats) {
    field("Total beers", &stats.total_beers.to_string());
    field("Drank", &stats.drank_beers.to_string());
    field("Pending", &stats.pending_beers.to_string());
    field("Rated", &stats.rated_beers.to_string());
    field("Average rating", &format!("{:.1}", stats.average_rating));

    if let Some(top) = &stats.top_style {
        field(
            "Top style",
            &format!(
                "{} ({} beers, {:.1}%)",
                top.style,
                top.count,
                percentage(top.count, stats.total_beers)
            ),
        );
    }

    if let Some(top) = &stats.top_brewery {
        field(
            "Top brewery",
            &format!(
                "{} ({} beers, {:.1}%)",
                top.brewery,
                top.count,
                percentage(top.count, stats.total_beers)
            ),
        );
    }
}

fn rating_text(rating: Option<u8>) -> String {
    match rating {
        Some(r) => format!("{}/5", r),
        None => "-".to_string(),
    }
}
