//! Handlers for `seed`, `search` and `stats`.

use std::path::Path;

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{format_price, SearchArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::run::{load_config, open_service};
use crate::domain::{CatalogStats, Property, PropertyKind};
use crate::error::Result;

#[derive(Tabled)]
struct PropertyRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Beds")]
    bedrooms: i32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Flags")]
    flags: String,
}

impl From<&Property> for PropertyRow {
    fn from(property: &Property) -> Self {
        let d = &property.details;
        let price = match d.listing.price() {
            Some(price) if property.kind() == PropertyKind::Rental => {
                format!("{} / night", format_price(price))
            }
            Some(price) => format_price(price),
            None => "-".to_string(),
        };
        let flags: Vec<&str> = [
            (d.is_featured, "featured"),
            (d.is_luxury, "luxury"),
            (d.is_oceanfront, "oceanfront"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();

        Self {
            id: property.id.get(),
            title: d.title.clone(),
            kind: property.kind().as_str(),
            location: d.location.clone(),
            bedrooms: d.bedrooms,
            price,
            flags: flags.join(", "),
        }
    }
}

fn print_properties(properties: &[Property]) {
    for property in properties {
        output::record(
            "property",
            &serde_json::json!({
                "id": property.id,
                "title": property.details.title,
                "type": property.kind(),
                "location": property.details.location,
                "neighborhood": property.details.neighborhood,
                "bedrooms": property.details.bedrooms,
                "price": property.details.listing.price(),
                "isLuxury": property.details.is_luxury,
                "isOceanfront": property.details.is_oceanfront,
                "isFeatured": property.details.is_featured,
            }),
        );
    }
    if properties.is_empty() {
        output::note("No properties found.");
        return;
    }
    let rows: Vec<PropertyRow> = properties.iter().map(PropertyRow::from).collect();
    output::lines(&Table::new(rows).to_string());
}

/// Execute `seed`.
pub async fn seed(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let service = open_service(&config)?;

    output::section("Seeding catalogue");
    let created = service.seed().await?;
    print_properties(&created);
    output::success(&format!(
        "Inserted {} properties into {}",
        created.len(),
        config.database.path.display()
    ));
    Ok(())
}

/// Execute `search`.
pub async fn search(args: &SearchArgs) -> Result<()> {
    let config = load_config(&args.config.config)?;
    let service = open_service(&config)?;

    let results = service.search(&args.to_params()).await?;
    output::section(&format!("{} matching properties", results.len()));
    print_properties(&results);
    Ok(())
}

/// Execute `stats`.
pub async fn stats(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let service = open_service(&config)?;

    let stats = service.stats().await?;
    if output::is_json() {
        output::record("stats", &stats);
        return Ok(());
    }
    print_stats(&stats);
    Ok(())
}

fn print_stats(stats: &CatalogStats) {
    output::section("Available properties");
    output::field("Total", stats.total);
    output::field("For sale", stats.for_sale);
    output::field("For rent", stats.for_rental);
    output::field("Luxury", stats.luxury);
    output::field("Oceanfront", stats.oceanfront);
    output::field("Featured", stats.featured);

    output::section("Neighborhoods");
    if stats.neighborhoods.is_empty() {
        output::note("(none)");
    }
    for neighborhood in &stats.neighborhoods {
        output::note(&format!("- {neighborhood}"));
    }
}
